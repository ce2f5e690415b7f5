use crate::foundation::error::{PlotError, PlotResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Drawing surface dimensions in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Truncate fractional pixel extents the way a raster surface assignment does.
    ///
    /// Negative and non-finite extents collapse to zero.
    pub fn from_px(width: f64, height: f64) -> Self {
        fn trunc(v: f64) -> u32 {
            if !v.is_finite() || v <= 0.0 {
                return 0;
            }
            v.trunc().min(f64::from(u32::MAX)) as u32
        }

        Self {
            width: trunc(width),
            height: trunc(height),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Full-surface rectangle in pixel space.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Convert to `u16` extents for raster backends, enforcing `max_dim` on both axes.
    pub fn to_raster_dims(self, max_dim: u32) -> PlotResult<(u16, u16)> {
        if self.is_empty() {
            return Err(PlotError::render(format!(
                "surface {}x{} has no pixels to rasterize",
                self.width, self.height
            )));
        }
        let max_dim = max_dim.min(u32::from(u16::MAX));
        if self.width > max_dim || self.height > max_dim {
            return Err(PlotError::render(format!(
                "surface too large to rasterize: {}x{} (max {max_dim}x{max_dim})",
                self.width, self.height
            )));
        }
        // Both fit after the max_dim check above.
        let w = u16::try_from(self.width).map_err(|_| PlotError::render("width exceeds u16"))?;
        let h = u16::try_from(self.height).map_err(|_| PlotError::render("height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Host viewport extent, before the surface margin is taken off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Inner width in pixels.
    pub width: u32,
    /// Inner height in pixels.
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface size left after shrinking each axis by `margin`, saturating at zero.
    pub fn inset(self, margin: u32) -> SurfaceSize {
        SurfaceSize {
            width: self.width.saturating_sub(margin),
            height: self.height.saturating_sub(margin),
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
