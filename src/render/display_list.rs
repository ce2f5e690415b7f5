use crate::{
    foundation::core::{Point, Rect, SurfaceSize},
    render::surface::{DrawSurface, LabelStyle, RectStyle},
};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Label {
        text: String,
        origin: Point,
        style: LabelStyle,
    },
}

/// A [`DrawSurface`] that records draw calls for a backend to present later.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayList {
    size: SurfaceSize,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }

    /// Label texts in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Label { text, .. } => Some(text.as_str()),
            DrawOp::Rect { .. } => None,
        })
    }

    /// Rectangles in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &RectStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { rect, style } => Some((rect, style)),
            DrawOp::Label { .. } => None,
        })
    }
}

impl DrawSurface for DisplayList {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.ops.clear();
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw_rect(&mut self, rect: Rect, style: &RectStyle) {
        self.ops.push(DrawOp::Rect {
            rect,
            style: *style,
        });
    }

    fn draw_label(&mut self, text: &str, origin: Point, style: &LabelStyle) {
        self.ops.push(DrawOp::Label {
            text: text.to_owned(),
            origin,
            style: style.clone(),
        });
    }
}
