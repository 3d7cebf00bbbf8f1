//! Closed enumerations shared by every layer.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Literal marker separating OR-joined terms.
pub const OR_MARKER: &str = "||";

/// Literal marker separating AND-joined terms.
pub const AND_MARKER: &str = "&&";

/// The boolean operator joining the terms of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connective {
    /// Any term may match.
    Or,
    /// Every term must match.
    And,
}

impl Connective {
    /// Returns the literal marker that separates terms joined by this connective.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Or => OR_MARKER,
            Self::And => AND_MARKER,
        }
    }

    /// Returns the aggregator function wrapping multiple rendered terms.
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::Or => "bucket.Or",
            Self::And => "bucket.And",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => write!(f, "OR"),
            Self::And => write!(f, "AND"),
        }
    }
}

/// Output format for a rendered query expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// Wiki category membership.
    #[default]
    Category,
    /// Monster drop tables.
    Monster,
}

impl Dialect {
    /// Every dialect, in display order.
    pub const ALL: [Self; 2] = [Self::Category, Self::Monster];

    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Monster => "monster",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::unknown_dialect(trimmed))
    }
}
