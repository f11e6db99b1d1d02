use std::fmt;

use serde::Serialize;

/// Qualitative contrast band, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContrastStatus {
    Fail,
    Poor,
    Good,
    Excellent,
}

impl ContrastStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContrastStatus::Fail => "FAIL",
            ContrastStatus::Poor => "POOR",
            ContrastStatus::Good => "GOOD",
            ContrastStatus::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for ContrastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bound of each band is inclusive: exactly 4.5 is GOOD.
pub fn classify_status(ratio: f64) -> ContrastStatus {
    if ratio >= 7.0 {
        ContrastStatus::Excellent
    } else if ratio >= 4.5 {
        ContrastStatus::Good
    } else if ratio >= 3.0 {
        ContrastStatus::Poor
    } else {
        ContrastStatus::Fail
    }
}
