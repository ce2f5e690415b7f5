//! Feet-to-pixel layout planning: strip grids, road networks and the fixed demo.

pub mod demo;
pub mod grid;
pub mod planner;
pub mod request;
pub mod subdivision;

use crate::{
    foundation::core::SurfaceSize,
    layout::{planner::LayoutPlan, subdivision::RoadNetworkPlan},
};

/// How a submitted land area is subdivided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// One road band on top, plots tiled edge to edge below it.
    #[default]
    Strip,
    /// Roads between every plot row and column.
    RoadNetwork,
}

/// What a render pass draws.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutSource {
    /// A strip layout planned from a land request.
    Computed(LayoutPlan),
    /// The fixed three-plot demo, sized from the current surface.
    Demo,
    /// A road-network subdivision planned from a land request.
    RoadNetwork(RoadNetworkPlan),
}

impl LayoutSource {
    /// Surface size this source needs, or `None` when it draws onto whatever is current.
    pub fn required_surface(&self) -> Option<SurfaceSize> {
        match self {
            Self::Computed(plan) => Some(plan.surface_size()),
            Self::Demo => None,
            Self::RoadNetwork(plan) => Some(plan.surface_size()),
        }
    }
}
