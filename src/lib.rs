//! plotgrid plans and renders rectangular land-plot layouts.
//!
//! - Convert a land size to square feet ([`units`])
//! - Plan surface and plot geometry ([`layout`])
//! - Draw onto a [`DrawSurface`] and present it as pixels or SVG ([`render`])
//! - Drive redraws from resize and form-submit events ([`viewport`])
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod layout;
pub mod render;
pub mod units;
pub mod viewport;

pub use crate::config::RenderConfig;
pub use crate::foundation::core::{Point, Rect, Rgba8, Size, SurfaceSize, Vec2, Viewport};
pub use crate::foundation::error::{PlotError, PlotResult};
pub use crate::layout::{
    LayoutMode, LayoutSource,
    demo::DemoLayout,
    grid::{PlotCell, tile_plots},
    planner::{LayoutPlan, PlannerConfig, plan},
    request::{FormSubmission, LayoutRequest},
    subdivision::RoadNetworkPlan,
};
pub use crate::render::{
    backend::{BackendKind, FrameRGBA, PresentBackend, RenderSettings, create_backend},
    display_list::{DisplayList, DrawOp},
    scene::{RenderStats, render, render_demo, render_grid, render_road_network},
    surface::{DrawSurface, LabelStyle, Outline, RectStyle},
    svg::to_svg,
};
pub use crate::units::{AreaUnit, SquareFeet, convert, convert_tag};
pub use crate::viewport::{AlertLog, Notifier, Outcome, UiEvent, ViewportController};
