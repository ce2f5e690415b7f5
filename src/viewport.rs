//! Event handling for a surface hosted in a resizable viewport.

use crate::{
    config::RenderConfig,
    foundation::{
        core::{SurfaceSize, Viewport},
        error::{PlotError, PlotResult},
    },
    layout::{
        LayoutSource,
        request::{FormSubmission, LayoutRequest},
    },
    render::{
        scene::{RenderStats, render},
        surface::DrawSurface,
    },
};

/// Something that can show the user an error message.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Collects alerts in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertLog {
    pub messages: Vec<String>,
}

impl Notifier for AlertLog {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

/// An input event from the host environment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// First layout of the page.
    Init { viewport: Viewport },
    /// The viewport changed size.
    Resize { viewport: Viewport },
    /// The layout form was submitted.
    Submit { form: FormSubmission },
}

/// Result of handling one event.
#[derive(Debug)]
pub enum Outcome {
    /// The demo layout was drawn on a freshly sized surface.
    DemoRendered { size: SurfaceSize, stats: RenderStats },
    /// A submitted layout was drawn.
    LayoutRendered {
        size: SurfaceSize,
        stats: RenderStats,
        area_sq_ft: f64,
    },
    /// The submission was rejected; the surface was not touched.
    Rejected(PlotError),
}

impl Outcome {
    pub fn stats(&self) -> Option<RenderStats> {
        match self {
            Self::DemoRendered { stats, .. } | Self::LayoutRendered { stats, .. } => Some(*stats),
            Self::Rejected(_) => None,
        }
    }
}

/// Owns the drawing surface and alert sink, and turns events into render passes.
///
/// Each event runs to completion before the next is looked at, and every render fully
/// overwrites the surface.
pub struct ViewportController<S, N> {
    surface: S,
    notifier: N,
    config: RenderConfig,
}

impl<S: DrawSurface, N: Notifier> ViewportController<S, N> {
    pub fn new(surface: S, notifier: N, config: RenderConfig) -> Self {
        Self {
            surface,
            notifier,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn into_parts(self) -> (S, N) {
        (self.surface, self.notifier)
    }

    pub fn handle(&mut self, event: UiEvent) -> Outcome {
        match event {
            UiEvent::Init { viewport } | UiEvent::Resize { viewport } => self.on_resize(viewport),
            UiEvent::Submit { form } => self.on_submit(&form),
        }
    }

    /// Handle `events` in order.
    pub fn run<I>(&mut self, events: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = UiEvent>,
    {
        events.into_iter().map(|e| self.handle(e)).collect()
    }

    fn on_resize(&mut self, viewport: Viewport) -> Outcome {
        let size = viewport.inset(self.config.viewport_margin);
        tracing::debug!(
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            width = size.width,
            height = size.height,
            "resizing surface for demo"
        );
        self.surface.resize(size);
        let stats = render(&mut self.surface, &LayoutSource::Demo, &self.config.styles);
        Outcome::DemoRendered { size, stats }
    }

    fn on_submit(&mut self, form: &FormSubmission) -> Outcome {
        tracing::debug!(land_size = %form.land_size, unit = %form.unit, "form submitted");
        match self.plan_submission(form) {
            Ok((source, area_sq_ft)) => {
                let size = source
                    .required_surface()
                    .unwrap_or_else(|| self.surface.size());
                tracing::debug!(width = size.width, height = size.height, "surface size set");
                self.surface.resize(size);
                let stats = render(&mut self.surface, &source, &self.config.styles);
                Outcome::LayoutRendered {
                    size,
                    stats,
                    area_sq_ft,
                }
            }
            Err(err) => {
                if err.is_user_input() {
                    tracing::debug!(error = %err, "submission rejected");
                } else {
                    tracing::warn!(error = %err, "submission failed");
                }
                self.notifier.alert(&err.to_string());
                Outcome::Rejected(err)
            }
        }
    }

    fn plan_submission(&self, form: &FormSubmission) -> PlotResult<(LayoutSource, f64)> {
        let request = LayoutRequest::from_form(form)?;
        let area = request.area();
        tracing::debug!(area_sq_ft = area.get(), "total area in square feet");

        let source = self.config.plan_layout(area, form.mode)?;
        Ok((source, area.get()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
