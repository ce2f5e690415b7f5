use std::sync::Arc;

use crate::{foundation::error::PlotResult, render::display_list::DisplayList};

/// A presented surface as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha bytes, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4)?.try_into().ok()
    }
}

/// Turns a recorded surface into pixels.
pub trait PresentBackend {
    fn present(&mut self, list: &DisplayList) -> PlotResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`; labels need [`RenderSettings::font_bytes`].
    Cpu,
    /// SVG markup rasterized with `resvg`, resolving label fonts from the system.
    Svg,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// If set, backends fill the frame with this RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Largest accepted width or height in pixels.
    pub max_raster_dim: u32,
    /// Font used for labels by the CPU backend.
    pub font_bytes: Option<Arc<Vec<u8>>>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            max_raster_dim: 16_384,
            font_bytes: None,
        }
    }
}

/// Create a presentation backend.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> PlotResult<Box<dyn PresentBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        )?)),
        BackendKind::Svg => Ok(Box::new(crate::render::svg::SvgBackend::new(
            settings.clone(),
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
