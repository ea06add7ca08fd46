use crate::config::{BannerConfig, Palette};
use crate::foundation::core::{Rgba8, Vec2};
use crate::foundation::error::{BannerError, BannerResult};
use crate::layout::pack::pack_siblings;
use crate::scene::token::{Group, Token};

/// A full layout: one [`Token`] per index, stored in index order.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    tokens: Vec<Token>,
    padding: f64,
}

impl SceneState {
    /// Tokens in index order; `tokens()[i].index == i`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token with the given index.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Return `true` when the layout has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Spacing added to each radius when this layout was packed.
    pub fn padding(&self) -> f64 {
        self.padding
    }
}

/// Pack `n` tokens globally: the intro layout.
///
/// Every token shares `color`; disks are packed with radius `radius + padding` and keep
/// `radius` as their visual radius.
pub fn initial_state(
    n: usize,
    radius: f64,
    padding: f64,
    color: Rgba8,
) -> BannerResult<SceneState> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(BannerError::validation(format!(
            "padding must be finite and >= 0 (got {padding})"
        )));
    }

    let packing = pack_siblings(&vec![radius + padding; n])?;
    let tokens = packing
        .circles
        .iter()
        .enumerate()
        .map(|(index, c)| Token {
            index,
            radius,
            group: Group::for_index(index),
            color,
            position: c.center,
        })
        .collect();
    Ok(SceneState { tokens, padding })
}

/// Re-pack each group on its own and move it into its band: the reveal layout.
///
/// Group `g` is shifted by `(viewport_width / 2, band_height * g.ordinal())` and recolored
/// from `palette`. Positions depend only on tokens of the same group. `initial` is not
/// modified.
pub fn moved_state(
    initial: &SceneState,
    viewport_width: f64,
    band_height: f64,
    palette: &Palette,
) -> BannerResult<SceneState> {
    let mut tokens = Vec::with_capacity(initial.len());
    for group in Group::ALL {
        let members: Vec<&Token> = initial.tokens.iter().filter(|t| t.group == group).collect();
        let radii: Vec<f64> = members.iter().map(|t| t.radius + initial.padding).collect();
        let packing = pack_siblings(&radii)?;

        let offset = Vec2::new(viewport_width / 2.0, band_height * group.ordinal() as f64);
        let color = palette.group_color(group);
        tokens.extend(members.iter().zip(&packing.circles).map(|(t, c)| Token {
            color,
            position: c.center + offset,
            ..**t
        }));
    }
    tokens.sort_by_key(|t| t.index);

    Ok(SceneState {
        tokens,
        padding: initial.padding,
    })
}

/// Both canonical layouts, computed once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Packed intro layout.
    pub initial: SceneState,
    /// Grouped reveal layout.
    pub moved: SceneState,
}

impl Scene {
    /// Build both layouts for a viewport of the given width.
    #[tracing::instrument(skip(cfg), fields(n = cfg.token_count))]
    pub fn build(cfg: &BannerConfig, viewport_width: f64) -> BannerResult<Self> {
        cfg.validate()?;
        if !viewport_width.is_finite() || viewport_width < 0.0 {
            return Err(BannerError::validation(format!(
                "viewport width must be finite and >= 0 (got {viewport_width})"
            )));
        }

        let initial = initial_state(cfg.token_count, cfg.radius, cfg.padding, cfg.palette.initial)?;
        let moved = moved_state(&initial, viewport_width, cfg.band_height(), &cfg.palette)?;
        tracing::debug!(tokens = initial.len(), "scene built");
        Ok(Self { initial, moved })
    }

    /// Number of tokens in each layout.
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    /// Return `true` when there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
