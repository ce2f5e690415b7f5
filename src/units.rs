//! Land-area units and conversion to square feet.

use std::{fmt, str::FromStr};

use crate::foundation::error::{PlotError, PlotResult};

/// Square feet per acre.
pub const SQ_FT_PER_ACRE: f64 = 43_560.0;
/// Square feet per hectare.
pub const SQ_FT_PER_HECTARE: f64 = 107_639.0;
/// Square feet per square meter.
pub const SQ_FT_PER_SQUARE_METER: f64 = 10.7639;

/// Unit a land size is entered in.
///
/// The wire tags (`acres`, `ha`, `m2`) are what forms, JSON and the CLI use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "acres")]
    Acres,
    #[serde(rename = "ha")]
    Hectares,
    #[serde(rename = "m2")]
    SquareMeters,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 3] = [Self::Acres, Self::Hectares, Self::SquareMeters];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Acres => "acres",
            Self::Hectares => "ha",
            Self::SquareMeters => "m2",
        }
    }

    pub fn sq_ft_per_unit(self) -> f64 {
        match self {
            Self::Acres => SQ_FT_PER_ACRE,
            Self::Hectares => SQ_FT_PER_HECTARE,
            Self::SquareMeters => SQ_FT_PER_SQUARE_METER,
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AreaUnit {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.tag() == s)
            .ok_or_else(|| PlotError::invalid_unit(s))
    }
}

/// An area in square feet.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

impl SquareFeet {
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Convert `value` in `unit` to square feet.
pub fn convert(value: f64, unit: AreaUnit) -> SquareFeet {
    SquareFeet(value * unit.sq_ft_per_unit())
}

/// Convert `value` given a raw unit tag; unknown tags are [`PlotError::InvalidUnit`].
pub fn convert_tag(value: f64, tag: &str) -> PlotResult<SquareFeet> {
    let unit: AreaUnit = tag.parse()?;
    Ok(convert(value, unit))
}

#[cfg(test)]
#[path = "../tests/unit/units.rs"]
mod tests;
