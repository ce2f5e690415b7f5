use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};

/// Outline drawn along a rectangle's edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Outline {
    pub color: Rgba8,
    /// Line width in pixels, centered on the edge.
    pub width: f64,
}

/// Immutable paint record for one rectangle draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectStyle {
    pub fill: Rgba8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
}

impl RectStyle {
    pub fn filled(fill: Rgba8) -> Self {
        Self {
            fill,
            outline: None,
        }
    }

    pub fn outlined(fill: Rgba8, color: Rgba8, width: f64) -> Self {
        Self {
            fill,
            outline: Some(Outline { color, width }),
        }
    }
}

/// Immutable paint record for one text label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelStyle {
    pub color: Rgba8,
    pub size_px: f32,
    /// CSS-style family list, used by backends that resolve fonts by name.
    pub font_family: String,
}

impl LabelStyle {
    pub fn new(color: Rgba8, size_px: f32) -> Self {
        Self {
            color,
            size_px,
            font_family: "Arial, sans-serif".to_owned(),
        }
    }
}

/// A 2D surface that layouts are drawn onto.
///
/// Every render fully overwrites the surface, so implementations never need to merge with
/// earlier content.
pub trait DrawSurface {
    /// Current pixel extent.
    fn size(&self) -> SurfaceSize;

    /// Change the pixel extent. This discards existing content.
    fn resize(&mut self, size: SurfaceSize);

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Fill (and optionally outline) a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: &RectStyle);

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_label(&mut self, text: &str, origin: Point, style: &LabelStyle);
}
