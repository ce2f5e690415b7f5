use crate::{
    foundation::core::{Rgba8, Vec2},
    render::surface::{LabelStyle, RectStyle},
};

const GOLD: Rgba8 = Rgba8::rgb(0xFF, 0xD7, 0x00);
const ROAD_GRAY: Rgba8 = Rgba8::rgb(0x4A, 0x4A, 0x4A);

fn default_label_offset() -> Vec2 {
    Vec2::new(5.0, 20.0)
}

/// Paint for the strip layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub background: Rgba8,
    pub road: Rgba8,
    pub plot: RectStyle,
    pub label: LabelStyle,
    /// Label baseline position relative to each cell's top-left corner.
    pub label_offset: Vec2,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0xE0, 0xE0, 0xE0),
            road: ROAD_GRAY,
            plot: RectStyle::filled(GOLD),
            label: LabelStyle::new(Rgba8::BLACK, 16.0),
            label_offset: default_label_offset(),
        }
    }
}

/// Paint for the three-plot demo. Labels take their color from the matching outline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DemoStyle {
    pub plot: RectStyle,
    pub road: RectStyle,
    pub label_size_px: f32,
    pub label_offset: Vec2,
}

impl Default for DemoStyle {
    fn default() -> Self {
        Self {
            plot: RectStyle::outlined(GOLD, Rgba8::rgb(0xD4, 0xAF, 0x37), 2.0),
            road: RectStyle::outlined(ROAD_GRAY, Rgba8::WHITE, 2.0),
            label_size_px: 16.0,
            label_offset: default_label_offset(),
        }
    }
}

impl DemoStyle {
    /// Label paint for a rect drawn with `style`.
    pub(crate) fn label_for(&self, style: &RectStyle) -> LabelStyle {
        let color = style.outline.map(|o| o.color).unwrap_or(Rgba8::BLACK);
        LabelStyle::new(color, self.label_size_px)
    }
}

/// Paint for the road-network subdivision.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoadNetworkStyle {
    pub background: Rgba8,
    pub road: Rgba8,
    pub plot: RectStyle,
    /// `None` leaves plots unnumbered.
    pub label: Option<LabelStyle>,
    pub label_offset: Vec2,
}

impl Default for RoadNetworkStyle {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x00, 0x80, 0x00),
            road: Rgba8::rgb(0x80, 0x80, 0x80),
            plot: RectStyle::outlined(Rgba8::rgb(0xFF, 0xFF, 0x00), Rgba8::BLACK, 1.0),
            label: Some(LabelStyle::new(Rgba8::BLACK, 16.0)),
            label_offset: default_label_offset(),
        }
    }
}

/// Every style a render pass may need.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Styles {
    pub grid: GridStyle,
    pub demo: DemoStyle,
    pub road_network: RoadNetworkStyle,
}
