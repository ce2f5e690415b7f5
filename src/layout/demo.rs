use crate::foundation::core::Rect;

const OUTER_MARGIN: f64 = 10.0;
const GAP: f64 = 20.0;
const PLOT_HEIGHT: f64 = 100.0;
const ROAD_HEIGHT: f64 = 50.0;

/// A rectangle carrying its own caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabeledRect {
    pub label: String,
    pub rect: Rect,
}

/// Fixed three-plot demo shown before any form submission.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemoLayout {
    pub plots: [LabeledRect; 3],
    pub road: LabeledRect,
}

impl DemoLayout {
    /// Lay the demo out for a surface `width` pixels wide; the height is not consulted.
    pub fn for_width(width: f64) -> Self {
        let plot_w = (width / 3.0 - GAP).max(0.0);
        let plot = |i: u32, x: f64| LabeledRect {
            label: format!("Plot {i}"),
            rect: Rect::new(x, OUTER_MARGIN, x + plot_w, OUTER_MARGIN + PLOT_HEIGHT),
        };

        let road_y = PLOT_HEIGHT + GAP;
        let road_w = (width - 2.0 * OUTER_MARGIN).max(0.0);

        Self {
            plots: [
                plot(1, OUTER_MARGIN),
                plot(2, plot_w + GAP),
                plot(3, (plot_w + GAP) * 2.0),
            ],
            road: LabeledRect {
                label: "Main Road".to_owned(),
                rect: Rect::new(
                    OUTER_MARGIN,
                    road_y,
                    OUTER_MARGIN + road_w,
                    road_y + ROAD_HEIGHT,
                ),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/demo.rs"]
mod tests;
