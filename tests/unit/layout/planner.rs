use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

#[test]
fn surface_extents_follow_the_square_approximation() {
    for (area, scale) in [(43_560.0, 5.0), (215_278.0, 5.0), (10.7639, 2.0), (1.0e6, 0.5)] {
        let p = plan(SquareFeet(area), scale);
        let w = f64::sqrt(area);
        assert!(approx(p.surface_px_width, (w + 12.0) * scale));
        assert!(approx(p.surface_px_height, (area / w + 12.0) * scale));
        assert_eq!(p.plot_px_width, 50.0 * scale);
        assert_eq!(p.plot_px_height, 100.0 * scale);
        assert_eq!(p.road_band_px_height, 12.0 * scale);
    }
}

#[test]
fn one_acre_at_scale_five() {
    let p = plan(SquareFeet(43_560.0), 5.0);
    assert!((p.land_width_ft - 208.7103).abs() < 1e-3);
    assert_eq!(p.surface_size().width, 1103);
    assert_eq!(p.surface_size().height, 1103);
    assert!(approx(p.usable_px_width(), p.land_width_ft * 5.0));
    assert!(approx(p.usable_px_height(), p.land_height_ft * 5.0));
}

#[test]
fn two_hectares_at_scale_five() {
    let p = plan(SquareFeet(215_278.0), 5.0);
    assert!((p.land_width_ft - 463.98).abs() < 0.01);
    assert!((p.surface_px_width - 2379.9).abs() < 0.1);
}

#[test]
fn custom_planner_config_is_respected() {
    let cfg = PlannerConfig {
        road_margin_ft: 20.0,
        plot_width_ft: 40.0,
        plot_length_ft: 80.0,
    };
    let p = cfg.plan(SquareFeet(10_000.0), 1.0);
    assert_eq!(p.surface_px_width, 120.0);
    assert_eq!(p.plot_px_width, 40.0);
    assert_eq!(p.road_band_px_height, 20.0);
}

#[test]
fn zero_area_is_degenerate_not_a_panic() {
    let p = plan(SquareFeet(0.0), 5.0);
    assert_eq!(p.land_width_ft, 0.0);
    assert!(p.land_height_ft.is_nan());
    assert_eq!(p.surface_size().height, 0);
}
