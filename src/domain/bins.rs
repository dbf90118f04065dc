//! Probability and days-to-expiry buckets.
//!
//! These are the keys the upstream recovery tables are indexed by. They are
//! carried on every recommendation so the recovery advantage can be traced
//! back to the bucket it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bucket of the current probability of expiring worthless.
///
/// Boundaries use strict `<` comparisons: 0.6 falls into `60-70%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbabilityBin {
    #[serde(rename = "<50%")]
    Below50,
    #[serde(rename = "50-60%")]
    From50To60,
    #[serde(rename = "60-70%")]
    From60To70,
    #[serde(rename = "70-80%")]
    From70To80,
    #[serde(rename = "80-90%")]
    From80To90,
    #[serde(rename = "90%+")]
    Above90,
}

impl ProbabilityBin {
    /// Bucket for a probability in [0, 1].
    #[must_use]
    pub fn of(probability: f64) -> Self {
        if probability < 0.5 {
            Self::Below50
        } else if probability < 0.6 {
            Self::From50To60
        } else if probability < 0.7 {
            Self::From60To70
        } else if probability < 0.8 {
            Self::From70To80
        } else if probability < 0.9 {
            Self::From80To90
        } else {
            Self::Above90
        }
    }

    /// Label as used in the recovery tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Below50 => "<50%",
            Self::From50To60 => "50-60%",
            Self::From60To70 => "60-70%",
            Self::From70To80 => "70-80%",
            Self::From80To90 => "80-90%",
            Self::Above90 => "90%+",
        }
    }
}

impl fmt::Display for ProbabilityBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket of calendar days to expiry.
///
/// Boundaries are inclusive: 7 days falls into `0-7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DteBin {
    #[serde(rename = "0-7")]
    UpTo7,
    #[serde(rename = "8-14")]
    From8To14,
    #[serde(rename = "15-21")]
    From15To21,
    #[serde(rename = "22-28")]
    From22To28,
    #[serde(rename = "29-35")]
    From29To35,
    #[serde(rename = "36+")]
    Over35,
}

impl DteBin {
    /// Bucket for a number of calendar days to expiry.
    #[must_use]
    pub const fn of(days_to_expiry: i64) -> Self {
        if days_to_expiry <= 7 {
            Self::UpTo7
        } else if days_to_expiry <= 14 {
            Self::From8To14
        } else if days_to_expiry <= 21 {
            Self::From15To21
        } else if days_to_expiry <= 28 {
            Self::From22To28
        } else if days_to_expiry <= 35 {
            Self::From29To35
        } else {
            Self::Over35
        }
    }

    /// Label as used in the recovery tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo7 => "0-7",
            Self::From8To14 => "8-14",
            Self::From15To21 => "15-21",
            Self::From22To28 => "22-28",
            Self::From29To35 => "29-35",
            Self::Over35 => "36+",
        }
    }
}

impl fmt::Display for DteBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
