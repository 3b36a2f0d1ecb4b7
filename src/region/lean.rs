use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ApportionError;

/// Partisan label on a region, used only to group aggregate seat gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartisanLean {
    #[serde(alias = "D", alias = "dem")]
    Democratic,
    #[serde(alias = "R", alias = "rep")]
    Republican,
    #[serde(alias = "S")]
    Swing,
}

impl PartisanLean {
    pub fn to_str(&self) -> &'static str {
        match self {
            PartisanLean::Democratic => "democratic",
            PartisanLean::Republican => "republican",
            PartisanLean::Swing => "swing",
        }
    }

    /// Single-letter code used in tables.
    pub fn code(&self) -> &'static str {
        match self {
            PartisanLean::Democratic => "D",
            PartisanLean::Republican => "R",
            PartisanLean::Swing => "S",
        }
    }

    pub fn order() -> [PartisanLean; 3] {
        [PartisanLean::Democratic, PartisanLean::Republican, PartisanLean::Swing]
    }
}

impl FromStr for PartisanLean {
    type Err = ApportionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "dem" | "democratic" => Ok(PartisanLean::Democratic),
            "r" | "rep" | "republican" => Ok(PartisanLean::Republican),
            "s" | "swing" => Ok(PartisanLean::Swing),
            _ => Err(ApportionError::UnknownLean(s.to_string())),
        }
    }
}

impl fmt::Display for PartisanLean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
