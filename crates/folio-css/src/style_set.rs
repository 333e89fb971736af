//! Style interning.
//!
//! Elements with the same computed style share one [`StyleRecord`]. The
//! [`StyleSet`] keeps every distinct record in a splay tree ordered by the
//! record's key bytes, so that a run of elements with the same style (the
//! common case in a long document) finds it at or near the root.
//!
//! Nodes live in an arena and refer to each other by index. Nothing is ever
//! removed; the set is dropped as a whole with the document.

use std::cmp::Ordering;

use serde::Serialize;

use crate::style::StyleRecord;

/// A type-safe index of an interned record in a [`StyleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleId(pub usize);

#[derive(Debug)]
struct StyleNode {
    style: StyleRecord,
    key: Vec<u8>,
    less: Option<StyleId>,
    greater: Option<StyleId>,
    up: Option<StyleId>,
}

/// Set of distinct style records, ordered by
/// [`StyleRecord::to_key_bytes`].
///
/// ```
/// use folio_css::{StyleRecord, StyleSet};
///
/// let mut set = StyleSet::new();
/// let a = set.enlist(StyleRecord::default());
/// let b = set.enlist(StyleRecord::default());
/// assert_eq!(a, b);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StyleSet {
    nodes: Vec<StyleNode>,
    root: Option<StyleId>,
}

impl StyleSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `style`, returning the id of the equal record already in the
    /// set or of `style` itself if it is new.
    ///
    /// The found or inserted node is splayed to the root.
    pub fn enlist(&mut self, style: StyleRecord) -> StyleId {
        let key = style.to_key_bytes();

        let mut parent = None;
        let mut side = Ordering::Equal;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            side = key.as_slice().cmp(node.key.as_slice());
            cursor = match side {
                Ordering::Less => node.less,
                Ordering::Greater => node.greater,
                Ordering::Equal => {
                    self.splay(id);
                    return id;
                }
            };
            parent = Some(id);
        }

        let id = StyleId(self.nodes.len());
        self.nodes.push(StyleNode {
            style,
            key,
            less: None,
            greater: None,
            up: parent,
        });
        match parent {
            None => self.root = Some(id),
            Some(parent) if side == Ordering::Less => self.node_mut(parent).less = Some(id),
            Some(parent) => self.node_mut(parent).greater = Some(id),
        }
        self.splay(id);
        id
    }

    /// The record behind `id`.
    #[must_use]
    pub fn get(&self, id: StyleId) -> Option<&StyleRecord> {
        self.nodes.get(id.0).map(|node| &node.style)
    }

    /// Number of distinct records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been enlisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The most recently enlisted record.
    #[must_use]
    pub const fn root(&self) -> Option<StyleId> {
        self.root
    }

    /// Ids of all records in ascending key order.
    #[must_use]
    pub fn in_order(&self) -> Vec<StyleId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cursor = self.root;
        loop {
            while let Some(id) = cursor {
                stack.push(id);
                cursor = self.node(id).less;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            order.push(id);
            cursor = self.node(id).greater;
        }
        order
    }

    fn node(&self, id: StyleId) -> &StyleNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: StyleId) -> &mut StyleNode {
        &mut self.nodes[id.0]
    }

    /// Move `x` above its parent, keeping the ordering.
    ///
    /// ```text
    ///       p            x
    ///      / \          / \
    ///     x   c   =>   a   p
    ///    / \              / \
    ///   a   b            b   c
    /// ```
    fn rotate(&mut self, x: StyleId) {
        let Some(p) = self.node(x).up else {
            return;
        };
        let grandparent = self.node(p).up;

        if self.node(p).less == Some(x) {
            let b = self.node(x).greater;
            self.node_mut(p).less = b;
            if let Some(b) = b {
                self.node_mut(b).up = Some(p);
            }
            self.node_mut(x).greater = Some(p);
        } else {
            let b = self.node(x).less;
            self.node_mut(p).greater = b;
            if let Some(b) = b {
                self.node_mut(b).up = Some(p);
            }
            self.node_mut(x).less = Some(p);
        }
        self.node_mut(p).up = Some(x);
        self.node_mut(x).up = grandparent;

        match grandparent {
            None => self.root = Some(x),
            Some(g) if self.node(g).less == Some(p) => self.node_mut(g).less = Some(x),
            Some(g) => self.node_mut(g).greater = Some(x),
        }
    }

    /// Rotate `x` up to the root.
    fn splay(&mut self, x: StyleId) {
        while let Some(p) = self.node(x).up {
            match self.node(p).up {
                // zig
                None => self.rotate(x),
                Some(g) => {
                    let x_is_less = self.node(p).less == Some(x);
                    let p_is_less = self.node(g).less == Some(p);
                    if x_is_less == p_is_less {
                        // zig-zig
                        self.rotate(p);
                        self.rotate(x);
                    } else {
                        // zig-zag
                        self.rotate(x);
                        self.rotate(x);
                    }
                }
            }
        }
    }
}
