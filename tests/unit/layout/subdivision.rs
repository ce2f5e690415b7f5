use super::*;

#[test]
fn ten_acres_subdivides_into_even_rows_and_columns() {
    let plan = PlannerConfig::default().plan_road_network(SquareFeet(435_600.0), 5.0);
    assert_eq!((plan.plots_x, plan.plots_y), (10, 4));
    assert_eq!(plan.plot_count(), 40);
    assert_eq!(plan.total_width_ft, 632.0);
    assert_eq!(plan.total_height_ft, 460.0);
    assert_eq!(plan.surface_size(), SurfaceSize::new(3160, 2300));

    assert_eq!(plan.plots[0].label, 1);
    assert_eq!(plan.plots[0].rect, Rect::new(60.0, 60.0, 310.0, 560.0));
    assert_eq!(plan.plots[1].rect.x0, (62.0 + 12.0) * 5.0);
    assert_eq!(plan.plots[10].rect.y0, (112.0 + 12.0) * 5.0);

    // Vertical roads (plots_x + 1) then horizontal roads (plots_y + 1).
    assert_eq!(plan.roads.len(), 11 + 5);
    assert_eq!(plan.roads[0], Rect::new(0.0, 0.0, 60.0, 2300.0));
    assert_eq!(plan.roads[11], Rect::new(0.0, 0.0, 3160.0, 60.0));
}

#[test]
fn odd_fits_round_down_to_even() {
    // One acre fits 3 columns and 1 row before rounding.
    let plan = PlannerConfig::default().plan_road_network(SquareFeet(43_560.0), 5.0);
    assert_eq!((plan.plots_x, plan.plots_y), (2, 0));
    assert_eq!(plan.plot_count(), 0);
    assert_eq!(plan.total_width_ft, 136.0);
    assert_eq!(plan.total_height_ft, 12.0);
    assert_eq!(plan.roads.len(), 3 + 1);
}

#[test]
fn land_smaller_than_a_road_has_no_plots() {
    let plan = PlannerConfig::default().plan_road_network(SquareFeet(50.0), 5.0);
    assert_eq!((plan.plots_x, plan.plots_y), (0, 0));
    assert!(plan.plots.is_empty());
    assert_eq!(plan.surface_size(), SurfaceSize::new(60, 60));
}
