use super::*;

#[test]
fn straight_alpha_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 0, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    assert_eq!(
        frame.to_straight_rgba8(),
        vec![255, 0, 0, 128, 10, 20, 30, 255]
    );
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: false,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
    assert_eq!(frame.to_straight_rgba8(), frame.data);
}
