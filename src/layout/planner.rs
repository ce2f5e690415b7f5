use crate::{foundation::core::SurfaceSize, units::SquareFeet};

/// Fixed feet-space dimensions the planner works with.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Feet reserved on each axis for the access road.
    pub road_margin_ft: f64,
    /// Plot cell width in feet.
    pub plot_width_ft: f64,
    /// Plot cell length (vertical extent) in feet.
    pub plot_length_ft: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            road_margin_ft: 12.0,
            plot_width_ft: 50.0,
            plot_length_ft: 100.0,
        }
    }
}

/// Pixel-space geometry for a strip layout: a road band on top, plots tiled below it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPlan {
    /// Scale factor, pixels per foot.
    pub scale: f64,
    /// Land footprint width in feet (square approximation).
    pub land_width_ft: f64,
    /// Land footprint height in feet.
    pub land_height_ft: f64,
    pub surface_px_width: f64,
    pub surface_px_height: f64,
    pub plot_px_width: f64,
    pub plot_px_height: f64,
    pub road_band_px_height: f64,
}

impl LayoutPlan {
    /// Whole-pixel surface extent the plan should be drawn on.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::from_px(self.surface_px_width, self.surface_px_height)
    }

    /// Width of the region plots are tiled across.
    pub fn usable_px_width(&self) -> f64 {
        self.land_width_ft * self.scale
    }

    /// Height of the region below the road band.
    pub fn usable_px_height(&self) -> f64 {
        self.surface_px_height - self.road_band_px_height
    }
}

impl PlannerConfig {
    /// Plan surface and cell geometry for `area` at `scale` pixels per foot.
    ///
    /// No validation happens here: a zero area yields a zero width and a NaN height, so callers
    /// reject non-positive areas first.
    pub fn plan(&self, area: SquareFeet, scale: f64) -> LayoutPlan {
        let area = area.get();
        let land_width_ft = area.sqrt();
        let land_height_ft = area / land_width_ft;

        LayoutPlan {
            scale,
            land_width_ft,
            land_height_ft,
            surface_px_width: (land_width_ft + self.road_margin_ft) * scale,
            surface_px_height: (land_height_ft + self.road_margin_ft) * scale,
            plot_px_width: self.plot_width_ft * scale,
            plot_px_height: self.plot_length_ft * scale,
            road_band_px_height: self.road_margin_ft * scale,
        }
    }
}

/// [`PlannerConfig::plan`] with the default 12 ft road margin and 50x100 ft plots.
pub fn plan(area: SquareFeet, scale: f64) -> LayoutPlan {
    PlannerConfig::default().plan(area, scale)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
