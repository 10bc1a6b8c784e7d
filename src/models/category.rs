//! Transaction categories
//!
//! A fixed set of six categories. Stored and exported under their Indonesian
//! labels; English names are accepted on input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Penjualan", alias = "Sales")]
    Sales,
    #[serde(rename = "Operasional", alias = "Operations")]
    Operations,
    #[serde(rename = "Gaji", alias = "Payroll")]
    Payroll,
    #[serde(rename = "Perlengkapan", alias = "Supplies")]
    Supplies,
    #[serde(rename = "Jasa", alias = "Services")]
    Services,
    #[serde(rename = "Lain-lain", alias = "Other")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Sales,
        Category::Operations,
        Category::Payroll,
        Category::Supplies,
        Category::Services,
        Category::Other,
    ];

    /// Label used in storage, reports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sales => "Penjualan",
            Self::Operations => "Operasional",
            Self::Payroll => "Gaji",
            Self::Supplies => "Perlengkapan",
            Self::Services => "Jasa",
            Self::Other => "Lain-lain",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Operations => "Operations",
            Self::Payroll => "Payroll",
            Self::Supplies => "Supplies",
            Self::Services => "Services",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a name is not one of the fixed categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}'. Expected one of: {}",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                c.label().eq_ignore_ascii_case(needle) || c.english_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}
