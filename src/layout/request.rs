use crate::{
    foundation::error::{PlotError, PlotResult},
    layout::LayoutMode,
    units::{self, AreaUnit, SquareFeet},
};

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormSubmission {
    /// Land size text, parsed as a real number.
    pub land_size: String,
    /// Unit tag: `acres`, `ha` or `m2`.
    pub unit: String,
    /// Subdivision style to plan with.
    #[serde(default)]
    pub mode: LayoutMode,
}

impl FormSubmission {
    pub fn new(land_size: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            land_size: land_size.into(),
            unit: unit.into(),
            mode: LayoutMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A validated land size and unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRequest {
    raw_size: f64,
    unit: AreaUnit,
}

impl LayoutRequest {
    /// Validate a land size; it must be finite, positive, and stay finite once converted.
    pub fn new(raw_size: f64, unit: AreaUnit) -> PlotResult<Self> {
        if !raw_size.is_finite() || raw_size <= 0.0 {
            return Err(PlotError::invalid_area(format!(
                "land size must be a positive number, got {raw_size}"
            )));
        }
        let area = units::convert(raw_size, unit);
        if !area.get().is_finite() {
            return Err(PlotError::invalid_area(format!(
                "land size {raw_size} {unit} overflows when converted to square feet"
            )));
        }
        Ok(Self { raw_size, unit })
    }

    /// Validate form fields. The unit is checked first so a bad unit always reports
    /// [`PlotError::InvalidUnit`].
    pub fn from_form(form: &FormSubmission) -> PlotResult<Self> {
        let unit: AreaUnit = form.unit.trim().parse()?;
        let text = form.land_size.trim();
        let raw_size: f64 = text
            .parse()
            .map_err(|_| PlotError::invalid_area(format!("land size {text:?} is not a number")))?;
        Self::new(raw_size, unit)
    }

    pub fn raw_size(&self) -> f64 {
        self.raw_size
    }

    pub fn unit(&self) -> AreaUnit {
        self.unit
    }

    pub fn area(&self) -> SquareFeet {
        units::convert(self.raw_size, self.unit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/request.rs"]
mod tests;
