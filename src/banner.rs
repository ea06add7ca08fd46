//! The banner widget: layouts computed once at mount, a rendered surface, and the controller
//! that animates it.

use crate::animation::controller::{Control, Controller, Controls, TickOutcome};
use crate::animation::transition::Timing;
use crate::config::BannerConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::surface::Surface;
use crate::scene::state::Scene;

/// A mounted circle-packing banner.
#[derive(Debug)]
pub struct BannerAnimation {
    config: BannerConfig,
    controller: Controller,
}

impl BannerAnimation {
    /// Compute both layouts for `viewport_width`, render the intro layout and mount it.
    pub fn mount(config: BannerConfig, viewport_width: u32) -> BannerResult<Self> {
        let scene = Scene::build(&config, f64::from(viewport_width))?;
        let canvas = Canvas {
            width: viewport_width,
            height: config.height.round() as u32,
        };
        if canvas.width == 0 || canvas.height == 0 {
            return Err(BannerError::validation(format!(
                "banner canvas must be non-empty (got {}x{})",
                canvas.width, canvas.height
            )));
        }
        let surface = Surface::render(canvas, config.palette.background, &scene.initial);
        let controller = Controller::mounted(scene, Timing::from_config(&config), surface);
        tracing::info!(
            tokens = config.token_count,
            width = canvas.width,
            height = canvas.height,
            "banner mounted"
        );
        Ok(Self { config, controller })
    }

    /// Configuration the banner was mounted with.
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// The animation controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable access to the animation controller.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Button enablement.
    pub fn controls(&self) -> Controls {
        self.controller.controls()
    }

    /// Press a control button at `now_ms`.
    pub fn press(&mut self, control: Control, now_ms: f64) {
        self.controller.press(control, now_ms);
    }

    /// Advance the animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        self.controller.tick(now_ms)
    }

    /// Rasterize the current element set.
    pub fn render(&self, backend: &mut dyn RenderBackend) -> BannerResult<FrameRGBA> {
        let surface = self
            .controller
            .surface()
            .ok_or_else(|| BannerError::render("banner is not mounted"))?;
        backend.render_surface(surface)
    }
}
