use crate::{foundation::core::Rect, layout::planner::LayoutPlan};

/// One numbered plot rectangle in surface pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlotCell {
    /// 1-based sequential label.
    pub label: u32,
    pub rect: Rect,
}

/// Number of cell origins that fit strictly inside `extent` when stepping by `step`.
fn cells_along(extent: f64, step: f64) -> u32 {
    if !(extent > 0.0) || !(step > 0.0) {
        return 0;
    }
    (extent / step).ceil().min(f64::from(u32::MAX)) as u32
}

/// Columns and rows of the tiled grid.
pub fn grid_dims(plan: &LayoutPlan) -> (u32, u32) {
    (
        cells_along(plan.usable_px_width(), plan.plot_px_width),
        cells_along(plan.usable_px_height(), plan.plot_px_height),
    )
}

/// Tile full-size plot cells row-major below the road band.
///
/// Trailing cells keep their full size and may overflow the surface edge.
pub fn tile_plots(plan: &LayoutPlan) -> Vec<PlotCell> {
    let (cols, rows) = grid_dims(plan);
    let mut cells = Vec::with_capacity(cols as usize * rows as usize);
    let mut label = 0u32;
    for row in 0..rows {
        let y = plan.road_band_px_height + f64::from(row) * plan.plot_px_height;
        for col in 0..cols {
            let x = f64::from(col) * plan.plot_px_width;
            label += 1;
            cells.push(PlotCell {
                label,
                rect: Rect::new(x, y, x + plan.plot_px_width, y + plan.plot_px_height),
            });
        }
    }
    cells
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
