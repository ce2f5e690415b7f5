use crate::{
    foundation::core::{Rect, SurfaceSize},
    layout::{grid::PlotCell, planner::PlannerConfig},
    units::SquareFeet,
};

/// A subdivision where every plot row and column is separated by a road.
///
/// Plot counts per axis are rounded down to an even number so the layout stays symmetric.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoadNetworkPlan {
    pub scale: f64,
    pub plots_x: u32,
    pub plots_y: u32,
    pub total_width_ft: f64,
    pub total_height_ft: f64,
    pub plots: Vec<PlotCell>,
    pub roads: Vec<Rect>,
}

impl RoadNetworkPlan {
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::from_px(
            self.total_width_ft * self.scale,
            self.total_height_ft * self.scale,
        )
    }
}

fn even_fit(side_ft: f64, road_ft: f64, cell_ft: f64) -> u32 {
    let fit = ((side_ft - road_ft) / (cell_ft + road_ft)).trunc();
    if !(fit >= 1.0) {
        return 0;
    }
    let n = fit.min(f64::from(u32::MAX)) as u32;
    n - n % 2
}

impl PlannerConfig {
    /// Plan a road-network subdivision of `area` at `scale` pixels per foot.
    ///
    /// The land is treated as a square of side `sqrt(area)`; the road width is the configured
    /// road margin. Plots are laid out row-major, vertical roads first, then horizontal.
    pub fn plan_road_network(&self, area: SquareFeet, scale: f64) -> RoadNetworkPlan {
        let road = self.road_margin_ft;
        let pw = self.plot_width_ft;
        let pl = self.plot_length_ft;
        let side = area.get().sqrt();

        let plots_x = even_fit(side, road, pw);
        let plots_y = even_fit(side, road, pl);

        let nx = f64::from(plots_x);
        let ny = f64::from(plots_y);
        let total_width_ft = nx * pw + (nx + 1.0) * road;
        let total_height_ft = ny * pl + (ny + 1.0) * road;

        let px = |ft: f64| ft * scale;

        let mut plots = Vec::with_capacity(plots_x as usize * plots_y as usize);
        let mut label = 0u32;
        for y in 0..plots_y {
            let plot_y = f64::from(y) * (pl + road) + road;
            for x in 0..plots_x {
                let plot_x = f64::from(x) * (pw + road) + road;
                label += 1;
                plots.push(PlotCell {
                    label,
                    rect: Rect::new(px(plot_x), px(plot_y), px(plot_x + pw), px(plot_y + pl)),
                });
            }
        }

        let mut roads = Vec::with_capacity((plots_x + plots_y + 2) as usize);
        for x in 0..=plots_x {
            let road_x = f64::from(x) * (pw + road);
            roads.push(Rect::new(
                px(road_x),
                0.0,
                px(road_x + road),
                px(total_height_ft),
            ));
        }
        for y in 0..=plots_y {
            let road_y = f64::from(y) * (pl + road);
            roads.push(Rect::new(
                0.0,
                px(road_y),
                px(total_width_ft),
                px(road_y + road),
            ));
        }

        RoadNetworkPlan {
            scale,
            plots_x,
            plots_y,
            total_width_ft,
            total_height_ft,
            plots,
            roads,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/subdivision.rs"]
mod tests;
