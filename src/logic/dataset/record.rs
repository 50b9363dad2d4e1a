use serde::{Deserialize, Serialize};

use super::table::RawTable;

// ============================================================================
// COLUMN DEFAULTS (used when the column is absent from the table)
// ============================================================================

pub const DEFAULT_ABSENCES: f64 = 0.0;
pub const DEFAULT_STUDYTIME: f64 = 2.0;
pub const DEFAULT_TRAVELTIME: f64 = 1.0;
pub const DEFAULT_PARENT_EDU: f64 = 2.0;
pub const DEFAULT_FAMREL: f64 = 3.0;
pub const DEFAULT_GOOUT: f64 = 2.0;
pub const DEFAULT_DALC: f64 = 1.0;
pub const DEFAULT_WALC: f64 = 1.0;
pub const DEFAULT_HEALTH: f64 = 3.0;

/// The three assessment scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    pub g1: f64,
    pub g2: f64,
    pub g3: f64,
}

impl Grades {
    pub fn as_array(&self) -> [f64; 3] {
        [self.g1, self.g2, self.g3]
    }
}

/// One valid student row after coercion
///
/// Optional numeric fields are `Some(default)` when the column is absent and
/// `None` when the column exists but the cell is blank or not a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Row index in the uploaded table
    pub source_row: usize,
    pub grades: Grades,

    pub absences: Option<f64>,
    pub studytime: Option<f64>,
    pub traveltime: Option<f64>,

    pub activities: bool,
    pub higher: bool,
    pub schoolsup: bool,
    pub internet: bool,
    pub paid: bool,
    pub famsup: bool,

    pub medu: Option<f64>,
    pub fedu: Option<f64>,
    pub famrel: Option<f64>,

    pub goout: Option<f64>,
    pub dalc: Option<f64>,
    pub walc: Option<f64>,
    pub health: Option<f64>,

    pub parents_apart: bool,
}

/// Parse a numeric cell; blank, garbage and non-finite all count as missing
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// yes/no text; anything other than "yes" is treated as no
pub fn parse_yes_no(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("yes")
}

/// Parental cohabitation: `A`/`apart` means apart, anything else together
pub fn parse_apart(cell: &str) -> bool {
    let value = cell.trim().to_lowercase();
    value == "a" || value == "apart"
}

/// Column lookups resolved once per table
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub g1: Option<usize>,
    pub g2: Option<usize>,
    pub g3: Option<usize>,
    pub absences: Option<usize>,
    pub studytime: Option<usize>,
    pub traveltime: Option<usize>,
    pub activities: Option<usize>,
    pub higher: Option<usize>,
    pub schoolsup: Option<usize>,
    pub internet: Option<usize>,
    pub paid: Option<usize>,
    pub famsup: Option<usize>,
    pub medu: Option<usize>,
    pub fedu: Option<usize>,
    pub famrel: Option<usize>,
    pub goout: Option<usize>,
    pub dalc: Option<usize>,
    pub walc: Option<usize>,
    pub health: Option<usize>,
    pub pstatus: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(table: &RawTable) -> Self {
        let idx = |name: &str| table.column_index(name);
        Self {
            g1: idx("g1"),
            g2: idx("g2"),
            g3: idx("g3"),
            absences: idx("absences"),
            studytime: idx("studytime"),
            traveltime: idx("traveltime"),
            activities: idx("activities"),
            higher: idx("higher"),
            schoolsup: idx("schoolsup"),
            internet: idx("internet"),
            paid: idx("paid"),
            famsup: idx("famsup"),
            medu: idx("medu"),
            fedu: idx("fedu"),
            famrel: idx("famrel"),
            goout: idx("goout"),
            dalc: idx("dalc"),
            walc: idx("walc"),
            health: idx("health"),
            pstatus: idx("pstatus"),
        }
    }
}

/// Reads one row through a resolved column map
struct RowReader<'a> {
    table: &'a RawTable,
    row: usize,
}

impl RowReader<'_> {
    fn cell(&self, col: usize) -> &str {
        self.table.cell(self.row, col).unwrap_or("")
    }

    fn number(&self, col: Option<usize>, default: f64) -> Option<f64> {
        match col {
            None => Some(default),
            Some(c) => {
                let parsed = parse_number(self.cell(c));
                if parsed.is_none() {
                    log::debug!(
                        "Row {}: column '{}' not numeric ('{}'), index will use fallback",
                        self.row,
                        self.table.columns[c],
                        self.cell(c)
                    );
                }
                parsed
            }
        }
    }

    fn flag(&self, col: Option<usize>) -> bool {
        col.map(|c| parse_yes_no(self.cell(c))).unwrap_or(false)
    }
}

impl StudentRecord {
    /// Coerce one table row. Returns `None` when any grade is not numeric.
    pub fn from_row(table: &RawTable, columns: &ColumnMap, row: usize) -> Option<Self> {
        let reader = RowReader { table, row };
        let grade = |col: Option<usize>| col.and_then(|c| parse_number(reader.cell(c)));

        let grades = Grades {
            g1: grade(columns.g1)?,
            g2: grade(columns.g2)?,
            g3: grade(columns.g3)?,
        };

        Some(Self {
            source_row: row,
            grades,
            absences: reader.number(columns.absences, DEFAULT_ABSENCES),
            studytime: reader.number(columns.studytime, DEFAULT_STUDYTIME),
            traveltime: reader.number(columns.traveltime, DEFAULT_TRAVELTIME),
            activities: reader.flag(columns.activities),
            higher: reader.flag(columns.higher),
            schoolsup: reader.flag(columns.schoolsup),
            internet: reader.flag(columns.internet),
            paid: reader.flag(columns.paid),
            famsup: reader.flag(columns.famsup),
            medu: reader.number(columns.medu, DEFAULT_PARENT_EDU),
            fedu: reader.number(columns.fedu, DEFAULT_PARENT_EDU),
            famrel: reader.number(columns.famrel, DEFAULT_FAMREL),
            goout: reader.number(columns.goout, DEFAULT_GOOUT),
            dalc: reader.number(columns.dalc, DEFAULT_DALC),
            walc: reader.number(columns.walc, DEFAULT_WALC),
            health: reader.number(columns.health, DEFAULT_HEALTH),
            parents_apart: columns
                .pstatus
                .map(|c| parse_apart(reader.cell(c)))
                .unwrap_or(false),
        })
    }
}
