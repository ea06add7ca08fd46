//! Banner configuration.
//!
//! Defaults reproduce the shipped banner exactly; a JSON file may override any subset of fields.

use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{BannerError, BannerResult};
use crate::scene::token::Group;

/// Fill colors used by the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Shared color of every token before the reveal.
    pub initial: Rgba8,
    /// Group A color after the reveal.
    pub group_a: Rgba8,
    /// Group B color after the reveal.
    pub group_b: Rgba8,
    /// Canvas background.
    pub background: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            initial: Rgba8::rgb(0xff, 0xaf, 0xcc),
            group_a: Rgba8::rgb(0x1a, 0x75, 0x9f),
            group_b: Rgba8::rgb(0x76, 0xc8, 0x93),
            background: Rgba8::rgb(0x22, 0x22, 0x3b),
        }
    }
}

impl Palette {
    /// Color a token of `group` takes in the moved layout.
    pub fn group_color(&self, group: Group) -> Rgba8 {
        match group {
            Group::A => self.group_a,
            Group::B => self.group_b,
        }
    }
}

/// Layout and timing parameters of the banner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerConfig {
    /// Number of tokens.
    pub token_count: usize,
    /// Visual disk radius.
    pub radius: f64,
    /// Extra spacing added to the radius while packing.
    pub padding: f64,
    /// Canvas height; the width comes from the viewport.
    pub height: f64,
    /// Duration of one token's transition, in milliseconds.
    pub duration_ms: f64,
    /// Start delay per token index, in milliseconds.
    pub stagger_ms: f64,
    /// Transition easing.
    pub ease: Ease,
    /// Fill colors.
    pub palette: Palette,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            token_count: 1000,
            radius: 1.7,
            padding: 1.0,
            height: 600.0,
            duration_ms: 2000.0,
            stagger_ms: 3.0,
            ease: Ease::CubicOut,
            palette: Palette::default(),
        }
    }
}

impl BannerConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(s: &str) -> BannerResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a JSON config from disk.
    pub fn from_path(path: impl AsRef<Path>) -> BannerResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Reject values the layout or timeline cannot work with.
    pub fn validate(&self) -> BannerResult<()> {
        fn positive(name: &str, v: f64) -> BannerResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(BannerError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )))
            }
        }
        fn non_negative(name: &str, v: f64) -> BannerResult<()> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(BannerError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )))
            }
        }

        positive("radius", self.radius)?;
        non_negative("padding", self.padding)?;
        if !self.height.is_finite() || self.height < 1.0 {
            return Err(BannerError::validation(format!(
                "height must be finite and >= 1 (got {})",
                self.height
            )));
        }
        positive("duration_ms", self.duration_ms)?;
        non_negative("stagger_ms", self.stagger_ms)?;
        Ok(())
    }

    /// Radius each disk occupies while packing.
    pub fn packing_radius(&self) -> f64 {
        self.radius + self.padding
    }

    /// Vertical distance between the two reveal bands.
    pub fn band_height(&self) -> f64 {
        self.height / 3.0
    }
}
