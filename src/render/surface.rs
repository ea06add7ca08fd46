use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::scene::state::SceneState;

/// One rendered circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    /// Token index this element is bound to.
    pub key: usize,
    /// Current center.
    pub center: Point,
    /// Visual radius.
    pub radius: f64,
    /// Current fill.
    pub fill: Rgba8,
}

/// Counts reported by [`Surface::join`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JoinStats {
    /// Elements created for new keys.
    pub entered: usize,
    /// Existing elements whose attributes were rewritten.
    pub updated: usize,
    /// Elements removed because their key disappeared.
    pub exited: usize,
}

/// A sized drawing surface holding one circle element per token, keyed by token index.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    canvas: Canvas,
    background: Rgba8,
    // Keys are dense, so `elements[k].key == k`.
    elements: Vec<Element>,
}

impl Surface {
    /// Empty surface.
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            elements: Vec::new(),
        }
    }

    /// Surface with one element per token of `state`.
    pub fn render(canvas: Canvas, background: Rgba8, state: &SceneState) -> Self {
        let mut surface = Self::new(canvas, background);
        surface.join(state);
        surface
    }

    /// Bind `state` to the elements by token index.
    ///
    /// Existing elements are updated in place rather than recreated; missing keys are created
    /// and surplus keys removed.
    pub fn join(&mut self, state: &SceneState) -> JoinStats {
        let mut stats = JoinStats::default();
        let keep = state.len();
        if self.elements.len() > keep {
            stats.exited = self.elements.len() - keep;
            self.elements.truncate(keep);
        }

        for token in state.tokens() {
            match self.elements.get_mut(token.index) {
                Some(el) => {
                    el.center = token.position;
                    el.radius = token.radius;
                    el.fill = token.color;
                    stats.updated += 1;
                }
                None => {
                    self.elements.push(Element {
                        key: token.index,
                        center: token.position,
                        radius: token.radius,
                        fill: token.color,
                    });
                    stats.entered += 1;
                }
            }
        }
        stats
    }

    /// Canvas size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Background fill.
    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Elements in key order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element bound to `key`.
    pub fn element(&self, key: usize) -> Option<&Element> {
        self.elements.get(key)
    }

    pub(crate) fn set_attrs(&mut self, key: usize, center: Point, fill: Rgba8) {
        if let Some(el) = self.elements.get_mut(key) {
            el.center = center;
            el.fill = fill;
        }
    }
}
