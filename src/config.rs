use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{PlotError, PlotResult},
    },
    layout::{LayoutMode, LayoutSource, grid::grid_dims, planner::PlannerConfig},
    render::{backend::RenderSettings, style::Styles},
    units::SquareFeet,
};

/// Everything tunable about planning and drawing, loadable from JSON.
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per foot.
    pub scale: f64,
    pub planner: PlannerConfig,
    /// Pixels taken off each viewport axis before sizing the surface.
    pub viewport_margin: u32,
    pub styles: Styles,
    /// Largest width or height a raster backend will allocate, and a planned layout may need.
    pub max_raster_dim: u32,
    /// Most plots a single layout may contain.
    pub max_plots: u64,
    /// Fill painted under every presented frame; `None` leaves uncovered pixels transparent.
    pub background: Option<Rgba8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 5.0,
            planner: PlannerConfig::default(),
            viewport_margin: 20,
            styles: Styles::default(),
            max_raster_dim: 16_384,
            max_plots: 1_000_000,
            background: None,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(s: &str) -> PlotResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| PlotError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> PlotResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> PlotResult<()> {
        fn positive(name: &str, v: f64) -> PlotResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(PlotError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
            Ok(())
        }

        positive("scale", self.scale)?;
        positive("planner.plot_width_ft", self.planner.plot_width_ft)?;
        positive("planner.plot_length_ft", self.planner.plot_length_ft)?;
        if !self.planner.road_margin_ft.is_finite() || self.planner.road_margin_ft < 0.0 {
            return Err(PlotError::validation(
                "planner.road_margin_ft must be finite and >= 0",
            ));
        }

        positive(
            "styles.grid.label.size_px",
            f64::from(self.styles.grid.label.size_px),
        )?;
        positive(
            "styles.demo.label_size_px",
            f64::from(self.styles.demo.label_size_px),
        )?;
        if let Some(label) = &self.styles.road_network.label {
            positive(
                "styles.road_network.label.size_px",
                f64::from(label.size_px),
            )?;
        }

        if self.max_raster_dim == 0 {
            return Err(PlotError::validation("max_raster_dim must be > 0"));
        }
        if self.max_plots == 0 {
            return Err(PlotError::validation("max_plots must be > 0"));
        }
        Ok(())
    }

    /// Plan `area` in `mode`, rejecting layouts too large to draw.
    ///
    /// The strip plan bounds the road-network one on both surface extent and plot count, so it
    /// is checked first and nothing is tiled until the bounds hold.
    pub fn plan_layout(&self, area: SquareFeet, mode: LayoutMode) -> PlotResult<LayoutSource> {
        let strip = self.planner.plan(area, self.scale);

        let max_dim = f64::from(self.max_raster_dim.min(u32::from(u16::MAX)));
        let fits = |px: f64| px <= max_dim;
        if !fits(strip.surface_px_width) || !fits(strip.surface_px_height) {
            return Err(PlotError::invalid_area(format!(
                "{} sq ft needs a {:.0}x{:.0} px surface (max {max_dim}x{max_dim})",
                area.get(),
                strip.surface_px_width,
                strip.surface_px_height
            )));
        }

        let (cols, rows) = grid_dims(&strip);
        let plots = u64::from(cols) * u64::from(rows);
        if plots > self.max_plots {
            return Err(PlotError::invalid_area(format!(
                "{} sq ft needs {plots} plots (max {})",
                area.get(),
                self.max_plots
            )));
        }

        Ok(match mode {
            LayoutMode::Strip => LayoutSource::Computed(strip),
            LayoutMode::RoadNetwork => {
                LayoutSource::RoadNetwork(self.planner.plan_road_network(area, self.scale))
            }
        })
    }

    /// Presentation settings derived from this config.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self.background.map(|c| [c.r, c.g, c.b, c.a]),
            max_raster_dim: self.max_raster_dim,
            ..RenderSettings::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
