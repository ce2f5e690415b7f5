use crate::{
    foundation::core::Rect,
    layout::{
        LayoutSource, demo::DemoLayout, grid::tile_plots, planner::LayoutPlan,
        subdivision::RoadNetworkPlan,
    },
    render::{
        style::{DemoStyle, GridStyle, RoadNetworkStyle, Styles},
        surface::{DrawSurface, RectStyle},
    },
};

/// What a render pass put on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderStats {
    pub plots_drawn: usize,
    pub roads_drawn: usize,
    pub labels_drawn: usize,
}

/// Draw `source` onto `surface`.
///
/// Computed sources draw at the surface's current size; callers resize first (see
/// [`LayoutSource::required_surface`]).
pub fn render(surface: &mut dyn DrawSurface, source: &LayoutSource, styles: &Styles) -> RenderStats {
    match source {
        LayoutSource::Computed(plan) => render_grid(surface, plan, &styles.grid),
        LayoutSource::Demo => render_demo(surface, &styles.demo),
        LayoutSource::RoadNetwork(plan) => {
            render_road_network(surface, plan, &styles.road_network)
        }
    }
}

/// Background, a road band across the top, then numbered plots tiled row-major below it.
#[tracing::instrument(skip(surface, plan, style))]
pub fn render_grid(
    surface: &mut dyn DrawSurface,
    plan: &LayoutPlan,
    style: &GridStyle,
) -> RenderStats {
    let full = surface.size().rect();
    surface.draw_rect(full, &RectStyle::filled(style.background));

    let band = Rect::new(0.0, 0.0, full.width(), plan.road_band_px_height);
    surface.draw_rect(band, &RectStyle::filled(style.road));

    let cells = tile_plots(plan);
    for cell in &cells {
        surface.draw_rect(cell.rect, &style.plot);
        surface.draw_label(
            &cell.label.to_string(),
            cell.rect.origin() + style.label_offset,
            &style.label,
        );
    }

    tracing::debug!(plots = cells.len(), "total plots drawn");
    RenderStats {
        plots_drawn: cells.len(),
        roads_drawn: 1,
        labels_drawn: cells.len(),
    }
}

/// Three bordered demo plots and a main road, sized from the surface width only.
#[tracing::instrument(skip(surface, style))]
pub fn render_demo(surface: &mut dyn DrawSurface, style: &DemoStyle) -> RenderStats {
    surface.clear();
    let size = surface.size();
    if size.is_empty() {
        return RenderStats::default();
    }

    let demo = DemoLayout::for_width(f64::from(size.width));
    let plot_label = style.label_for(&style.plot);
    for plot in &demo.plots {
        surface.draw_rect(plot.rect, &style.plot);
        surface.draw_label(
            &plot.label,
            plot.rect.origin() + style.label_offset,
            &plot_label,
        );
    }

    surface.draw_rect(demo.road.rect, &style.road);
    surface.draw_label(
        &demo.road.label,
        demo.road.rect.origin() + style.label_offset,
        &style.label_for(&style.road),
    );

    RenderStats {
        plots_drawn: demo.plots.len(),
        roads_drawn: 1,
        labels_drawn: demo.plots.len() + 1,
    }
}

/// Background, plots, then the road grid painted over the gaps between them.
#[tracing::instrument(skip(surface, plan, style))]
pub fn render_road_network(
    surface: &mut dyn DrawSurface,
    plan: &RoadNetworkPlan,
    style: &RoadNetworkStyle,
) -> RenderStats {
    let full = surface.size().rect();
    surface.draw_rect(full, &RectStyle::filled(style.background));

    for cell in &plan.plots {
        surface.draw_rect(cell.rect, &style.plot);
    }

    let road = RectStyle::filled(style.road);
    for r in &plan.roads {
        surface.draw_rect(*r, &road);
    }

    let mut labels_drawn = 0;
    if let Some(label) = &style.label {
        for cell in &plan.plots {
            surface.draw_label(
                &cell.label.to_string(),
                cell.rect.origin() + style.label_offset,
                label,
            );
            labels_drawn += 1;
        }
    }

    tracing::debug!(plots = plan.plots.len(), "total plots drawn");
    RenderStats {
        plots_drawn: plan.plots.len(),
        roads_drawn: plan.roads.len(),
        labels_drawn,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
