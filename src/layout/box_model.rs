//! Box model: decompose a node's rectangle into border, inner and content.

use super::rect::Rect;
use crate::node::{Node, Sides};

/// Resolved geometry of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxModel {
    /// Border sides that are actually drawn (empty without a border).
    pub edges: Sides,
    /// Full node rectangle.
    pub outer: Rect,
    /// `outer` minus one cell per drawn edge.
    pub inner: Rect,
    /// `inner` minus padding; the printable area.
    pub content: Rect,
}

impl BoxModel {
    /// Resolve the box model of `node`.
    ///
    /// Degenerate sizes never fail: every rectangle saturates at zero
    /// width or height.
    pub fn resolve(node: &Node) -> Self {
        let outer = node.rect();
        let edges = node.style.border.map_or(Sides::empty(), |b| b.sides);

        let inner = outer.inset(
            edge(edges, Sides::TOP),
            edge(edges, Sides::RIGHT),
            edge(edges, Sides::BOTTOM),
            edge(edges, Sides::LEFT),
        );

        let pad = node.style.padding;
        let content = inner.inset(pad.top, pad.right, pad.bottom, pad.left);

        Self {
            edges,
            outer,
            inner,
            content,
        }
    }

    /// Whether `side` is drawn.
    #[inline]
    pub const fn has(&self, side: Sides) -> bool {
        self.edges.contains(side)
    }
}

#[inline]
const fn edge(edges: Sides, side: Sides) -> u16 {
    if edges.contains(side) {
        1
    } else {
        0
    }
}
