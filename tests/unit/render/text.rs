use super::*;

fn local_font() -> Option<Vec<u8>> {
    let path = std::env::var_os("PLOTGRID_TEST_FONT")?;
    std::fs::read(path).ok()
}

#[test]
fn brush_copies_channels() {
    let b = LabelBrush::from(Rgba8::rgba(1, 2, 3, 4));
    assert_eq!(
        b,
        LabelBrush {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );
}

#[test]
fn garbage_font_bytes_are_rejected() {
    assert!(LabelShaper::new(b"definitely not a font").is_err());
}

#[test]
fn label_layout_smoke_with_local_font_if_present() {
    let Some(font_bytes) = local_font() else {
        return;
    };

    let mut shaper = LabelShaper::new(&font_bytes).unwrap();
    assert!(!shaper.family_name().is_empty());
    let layout = shaper
        .layout_line("12", 16.0, LabelBrush::from(Rgba8::BLACK))
        .unwrap();
    assert!(layout.width() > 0.0);
    assert!(first_baseline(&layout) > 0.0);

    assert!(
        shaper
            .layout_line("12", 0.0, LabelBrush::default())
            .is_err()
    );
}
