use std::fmt::Write as _;

use crate::{
    foundation::{
        core::{Rgba8, SurfaceSize},
        error::{PlotError, PlotResult},
    },
    render::{
        backend::{FrameRGBA, PresentBackend, RenderSettings},
        display_list::{DisplayList, DrawOp},
        surface::DrawSurface,
    },
};

/// Serialize a display list as a standalone SVG document.
///
/// Labels become `<text>` elements positioned on their baseline, so any SVG consumer resolves
/// fonts on its own.
pub fn to_svg(list: &DisplayList, background: Option<Rgba8>) -> String {
    let SurfaceSize { width, height } = list.size();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    if let Some(bg) = background {
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
            paint_attr("fill", bg)
        );
    }

    for op in list.ops() {
        match op {
            DrawOp::Rect { rect, style } => {
                let r = rect.abs();
                let _ = write!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}"{}"#,
                    r.x0,
                    r.y0,
                    r.width(),
                    r.height(),
                    paint_attr("fill", style.fill)
                );
                if let Some(outline) = style.outline {
                    let _ = write!(
                        out,
                        r#"{} stroke-width="{}""#,
                        paint_attr("stroke", outline.color),
                        outline.width
                    );
                }
                out.push_str("/>\n");
            }
            DrawOp::Label {
                text,
                origin,
                style,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-family="{}" font-size="{}"{}>{}</text>"#,
                    origin.x,
                    origin.y,
                    escape_xml(&style.font_family),
                    style.size_px,
                    paint_attr("fill", style.color),
                    escape_xml(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn paint_attr(name: &str, c: Rgba8) -> String {
    let rgb = Rgba8::rgb(c.r, c.g, c.b).to_hex();
    if c.a == 255 {
        format!(r#" {name}="{rgb}""#)
    } else {
        let opacity = f64::from(c.a) / 255.0;
        format!(r#" {name}="{rgb}" {name}-opacity="{opacity:.4}""#)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Presenter that rasterizes [`to_svg`] output with `resvg`, resolving fonts from the system.
pub struct SvgBackend {
    settings: RenderSettings,
    options: usvg::Options<'static>,
}

impl SvgBackend {
    pub fn new(settings: RenderSettings) -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        tracing::debug!(
            font_faces = options.fontdb.faces().count(),
            "loaded system fonts for svg labels"
        );
        Self { settings, options }
    }
}

impl PresentBackend for SvgBackend {
    fn present(&mut self, list: &DisplayList) -> PlotResult<FrameRGBA> {
        let (w, h) = list.size().to_raster_dims(self.settings.max_raster_dim)?;
        let background = self
            .settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8::rgba(r, g, b, a));

        let svg = to_svg(list, background);
        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|e| PlotError::render(format!("parse generated svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(u32::from(w), u32::from(h))
            .ok_or_else(|| PlotError::render("failed to allocate svg pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: pixmap.data().to_vec(),
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
