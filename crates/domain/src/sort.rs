//! The closed set of fields a company listing may be sorted by.
//!
//! Sorting is validated here, at the boundary, so an unrecognized field
//! name fails with a descriptive error instead of reaching the store.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A sortable company field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Description,
    Ceo,
    FoundedYear,
}

impl SortField {
    /// The canonical (wire) name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Ceo => "ceo",
            Self::FoundedYear => "foundedYear",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "ceo" => Ok(Self::Ceo),
            "foundedYear" | "founded_year" => Ok(Self::FoundedYear),
            other => Err(ValidationError::UnknownSortField(other.to_string())),
        }
    }
}
