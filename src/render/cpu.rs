use crate::{
    foundation::{
        core::{Point, Rect, Rgba8},
        error::PlotResult,
    },
    render::{
        backend::{FrameRGBA, PresentBackend, RenderSettings},
        display_list::{DisplayList, DrawOp},
        surface::{DrawSurface, LabelStyle, RectStyle},
        text::{LabelBrush, LabelShaper, first_baseline},
    },
};

/// Raster presenter built on `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
    labels: Option<LabelFont>,
}

struct LabelFont {
    shaper: LabelShaper,
    font: vello_cpu::peniko::FontData,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> PlotResult<Self> {
        let labels = match &settings.font_bytes {
            Some(bytes) => {
                let shaper = LabelShaper::new(bytes.as_slice())?;
                tracing::debug!(family = shaper.family_name(), "registered label font");
                Some(LabelFont {
                    shaper,
                    font: vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                        0,
                    ),
                })
            }
            None => None,
        };
        Ok(Self { settings, labels })
    }
}

impl PresentBackend for CpuBackend {
    fn present(&mut self, list: &DisplayList) -> PlotResult<FrameRGBA> {
        let size = list.size();
        let (w, h) = size.to_raster_dims(self.settings.max_raster_dim)?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            fill_rect(&mut ctx, size.rect(), &RectStyle::filled(Rgba8::rgba(r, g, b, a)));
        }

        let mut skipped_labels = 0usize;
        for op in list.ops() {
            match op {
                DrawOp::Rect { rect, style } => fill_rect(&mut ctx, *rect, style),
                DrawOp::Label {
                    text,
                    origin,
                    style,
                } => match self.labels.as_mut() {
                    Some(labels) => draw_label(&mut ctx, labels, text, *origin, style)?,
                    None => skipped_labels += 1,
                },
            }
        }
        if skipped_labels > 0 {
            tracing::warn!(
                skipped_labels,
                "cpu backend has no label font configured; labels were not drawn"
            );
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, rect: Rect, style: &RectStyle) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    let rect = rect_to_cpu(rect.abs());
    ctx.set_paint(color_to_cpu(style.fill));
    ctx.fill_rect(&rect);

    if let Some(outline) = style.outline
        && outline.width > 0.0
    {
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(outline.width));
        ctx.set_paint(color_to_cpu(outline.color));
        ctx.stroke_rect(&rect);
    }
}

fn draw_label(
    ctx: &mut vello_cpu::RenderContext,
    labels: &mut LabelFont,
    text: &str,
    origin: Point,
    style: &LabelStyle,
) -> PlotResult<()> {
    let layout = labels
        .shaper
        .layout_line(text, style.size_px, LabelBrush::from(style.color))?;
    let baseline = f64::from(first_baseline(&layout));
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((
        origin.x,
        origin.y - baseline,
    )));

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&labels.font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
