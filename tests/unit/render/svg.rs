use super::*;
use crate::{
    foundation::core::{Point, Rect},
    render::{
        scene::render_demo,
        style::DemoStyle,
        surface::{LabelStyle, RectStyle},
    },
};

fn count_paths(group: &usvg::Group) -> usize {
    let mut n = 0usize;
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => n += count_paths(g.as_ref()),
            usvg::Node::Path(_) => n += 1,
            usvg::Node::Text(_) | usvg::Node::Image(_) => {}
        }
    }
    n
}

fn demo_list() -> DisplayList {
    let mut list = DisplayList::new(SurfaceSize::new(780, 580));
    render_demo(&mut list, &DemoStyle::default());
    list
}

#[test]
fn demo_markup_has_rects_and_labels() {
    let svg = to_svg(&demo_list(), None);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="780" height="580""#));
    assert_eq!(svg.matches("<rect").count(), 4);
    assert!(svg.contains(r##"fill="#ffd700" stroke="#d4af37" stroke-width="2""##));
    assert!(svg.contains(">Plot 1</text>"));
    assert!(svg.contains(">Main Road</text>"));
    assert!(svg.contains(r#"<text x="15" y="30""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn background_and_translucent_paint() {
    let mut list = DisplayList::new(SurfaceSize::new(10, 10));
    list.draw_rect(
        Rect::new(0.0, 0.0, 5.0, 5.0),
        &RectStyle::filled(Rgba8::rgba(255, 0, 0, 128)),
    );
    let svg = to_svg(&list, Some(Rgba8::WHITE));
    assert!(svg.contains(r##"<rect x="0" y="0" width="10" height="10" fill="#ffffff"/>"##));
    assert!(svg.contains(r##"fill="#ff0000" fill-opacity="0.5020""##));
}

#[test]
fn label_text_is_escaped() {
    let mut list = DisplayList::new(SurfaceSize::new(10, 10));
    list.draw_label(
        "<A & B>",
        Point::new(1.0, 2.0),
        &LabelStyle::new(Rgba8::BLACK, 16.0),
    );
    let svg = to_svg(&list, None);
    assert!(svg.contains(">&lt;A &amp; B&gt;</text>"));
}

#[test]
fn generated_markup_parses_with_usvg() {
    let svg = to_svg(&demo_list(), None);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(count_paths(tree.root()), 4);
}

#[test]
fn svg_backend_rasterizes_shapes() {
    let mut backend = SvgBackend::new(RenderSettings::default());
    let frame = backend.present(&demo_list()).unwrap();
    assert_eq!((frame.width, frame.height), (780, 580));
    assert_eq!(frame.pixel(400, 400), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(400, 150), Some([0x4A, 0x4A, 0x4A, 255]));
}
