use super::*;
use crate::{
    foundation::core::Point,
    layout::LayoutMode,
    render::display_list::{DisplayList, DrawOp},
};

fn controller() -> ViewportController<DisplayList, AlertLog> {
    ViewportController::new(
        DisplayList::default(),
        AlertLog::default(),
        RenderConfig::default(),
    )
}

fn submit(size: &str, unit: &str) -> UiEvent {
    UiEvent::Submit {
        form: FormSubmission::new(size, unit),
    }
}

#[test]
fn resize_insets_viewport_and_draws_demo() {
    let mut c = controller();
    let outcome = c.handle(UiEvent::Resize {
        viewport: Viewport::new(800, 600),
    });
    let Outcome::DemoRendered { size, stats } = outcome else {
        panic!("expected demo render");
    };
    assert_eq!(size, SurfaceSize::new(780, 580));
    assert_eq!(stats.plots_drawn, 3);
    assert_eq!(c.surface().size(), SurfaceSize::new(780, 580));

    let labels: Vec<&str> = c.surface().labels().collect();
    assert_eq!(labels, ["Plot 1", "Plot 2", "Plot 3", "Main Road"]);
}

#[test]
fn demo_ignores_previous_submissions() {
    let mut c = controller();
    c.handle(submit("5", "acres"));
    c.handle(UiEvent::Resize {
        viewport: Viewport::new(800, 600),
    });
    assert_eq!(c.surface().labels().count(), 4);
    assert_eq!(c.surface().size(), SurfaceSize::new(780, 580));
}

#[test]
fn submit_one_acre_draws_grid() {
    let mut c = controller();
    let Outcome::LayoutRendered {
        size,
        stats,
        area_sq_ft,
    } = c.handle(submit("1", "acres"))
    else {
        panic!("expected layout render");
    };
    assert_eq!(area_sq_ft, 43_560.0);
    assert_eq!(size, SurfaceSize::new(1103, 1103));
    assert_eq!(stats.plots_drawn, 15);

    let first = c.surface().ops().iter().find_map(|op| match op {
        DrawOp::Label { text, origin, .. } if text == "1" => Some(*origin),
        _ => None,
    });
    // Label sits 5 right and 20 down from the cell origin at (0, 60).
    assert_eq!(first, Some(Point::new(5.0, 80.0)));
}

#[test]
fn submit_two_hectares_sizes_surface() {
    let mut c = controller();
    let outcome = c.handle(submit("2", "ha"));
    let Outcome::LayoutRendered { size, .. } = outcome else {
        panic!("expected layout render");
    };
    assert_eq!(size.width, 2379);
}

#[test]
fn invalid_unit_alerts_and_leaves_surface_untouched() {
    let mut c = controller();
    c.handle(UiEvent::Init {
        viewport: Viewport::new(800, 600),
    });
    let before = c.surface().clone();

    let outcome = c.handle(submit("1", "xyz"));
    assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidUnit(_))));
    assert!(outcome.stats().is_none());
    assert_eq!(c.surface(), &before);
    assert_eq!(c.notifier().messages, ["invalid unit: xyz"]);
}

#[test]
fn invalid_area_is_rejected_before_drawing() {
    let mut c = controller();
    for size in ["0", "-2", "lots"] {
        let outcome = c.handle(submit(size, "acres"));
        assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidArea(_))));
    }
    assert!(c.surface().is_blank());
    assert_eq!(c.surface().size(), SurfaceSize::default());
    assert_eq!(c.notifier().messages.len(), 3);
}

#[test]
fn road_network_mode_uses_subdivision() {
    let mut c = controller();
    let outcome = c.handle(UiEvent::Submit {
        form: FormSubmission::new("10", "acres").with_mode(LayoutMode::RoadNetwork),
    });
    let Outcome::LayoutRendered { size, stats, .. } = outcome else {
        panic!("expected layout render");
    };
    assert_eq!(size, SurfaceSize::new(3160, 2300));
    assert_eq!(stats.plots_drawn, 40);
}

#[test]
fn run_handles_events_in_order() {
    let events: Vec<UiEvent> = serde_json::from_value(serde_json::json!([
        {"kind": "init", "viewport": {"width": 1024, "height": 768}},
        {"kind": "submit", "form": {"land_size": "1", "unit": "m2"}},
        {"kind": "submit", "form": {"land_size": "1", "unit": "bogus"}},
        {"kind": "resize", "viewport": {"width": 800, "height": 600}}
    ]))
    .unwrap();

    let mut c = controller();
    let outcomes = c.run(events);
    assert_eq!(outcomes.len(), 4);
    assert!(matches!(outcomes[0], Outcome::DemoRendered { .. }));
    assert!(matches!(outcomes[1], Outcome::LayoutRendered { .. }));
    assert!(matches!(outcomes[2], Outcome::Rejected(_)));
    assert!(matches!(outcomes[3], Outcome::DemoRendered { .. }));

    let (surface, alerts) = c.into_parts();
    assert_eq!(surface.size(), SurfaceSize::new(780, 580));
    assert_eq!(alerts.messages.len(), 1);
}

#[test]
fn tiny_viewport_gives_empty_surface_and_no_demo() {
    let mut c = controller();
    let outcome = c.handle(UiEvent::Resize {
        viewport: Viewport::new(15, 600),
    });
    let Outcome::DemoRendered { size, stats } = outcome else {
        panic!("expected demo render");
    };
    assert!(size.is_empty());
    assert_eq!(stats, RenderStats::default());
}

#[test]
fn oversized_land_is_rejected_before_tiling() {
    let mut c = controller();
    c.handle(submit("1", "acres"));
    let before = c.surface().clone();

    let outcome = c.handle(submit("1e9", "acres"));
    assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidArea(_))));

    let outcome = c.handle(UiEvent::Submit {
        form: FormSubmission::new("1e9", "acres").with_mode(LayoutMode::RoadNetwork),
    });
    assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidArea(_))));

    assert_eq!(c.surface(), &before);
    assert_eq!(c.notifier().messages.len(), 2);
    assert!(c.notifier().messages[0].starts_with("invalid area"));
}

#[test]
fn huge_scale_is_rejected_instead_of_allocating() {
    let config = RenderConfig {
        scale: 1e300,
        ..RenderConfig::default()
    };
    let mut c = ViewportController::new(DisplayList::default(), AlertLog::default(), config);
    let outcome = c.handle(submit("1", "acres"));
    assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidArea(_))));
    assert!(c.surface().is_blank());
}

#[test]
fn plot_count_is_capped_even_on_a_tiny_surface() {
    let config = RenderConfig {
        scale: 1e-9,
        ..RenderConfig::default()
    };
    let mut c = ViewportController::new(DisplayList::default(), AlertLog::default(), config);
    let outcome = c.handle(submit("1e12", "acres"));
    assert!(matches!(outcome, Outcome::Rejected(PlotError::InvalidArea(_))));
}
