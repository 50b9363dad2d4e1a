//! Logic Module - Analysis engines
//!
//! Chứa các engines xử lý: Feature Deriver, Cohort Clusterer, Persona
//! Classifier, Risk Scorer, Strategy Mapper.
//!
//! ## Data flow
//! `dataset` -> `features` -> (`cohort` | `risk`) -> `persona` -> `strategy`,
//! assembled by `report`.

// Ambient
pub mod config;
pub mod error;

// Input
pub mod dataset;
pub mod features;

// Engines
pub mod cohort;
pub mod persona;
pub mod risk;
pub mod strategy;

// Output
pub mod report;
