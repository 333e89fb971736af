//! Document tree for the Folio style engine.
//!
//! This crate provides an arena-based tree modelled on the
//! [DOM Living Standard](https://dom.spec.whatwg.org/) node relationships,
//! and the [`ElementNav`] capability through which the selector matcher
//! walks any element tree (this one, or an embedder's own XML tree).
//!
//! # Design
//!
//! All nodes live in one `Vec` and refer to each other through [`NodeId`]
//! indices. Siblings are kept as a doubly linked list so that the matcher's
//! "previous tag sibling" walk and the tree driver's child walk are both O(1)
//! per step. Nodes are never removed; the whole tree is dropped at once.

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document itself. Never matched by selectors.
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data: the local name and the attribute list.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's local name". Compared case-sensitively by the matcher.
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data from a tag name and `(name, value)` attribute pairs.
    #[must_use]
    pub fn new(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Returns the value of the `id` attribute, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Iterate over the whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attrs
            .get("class")
            .map(String::as_str)
            .unwrap_or_default()
            .split_ascii_whitespace()
    }
}

/// A node in the arena together with its structural links.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub node_type: NodeType,
    /// Parent node, `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,
    /// First child in document order.
    pub first_child: Option<NodeId>,
    /// Last child in document order.
    pub last_child: Option<NodeId>,
    /// Sibling immediately before this node.
    pub prev_sibling: Option<NodeId>,
    /// Sibling immediately after this node.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-based document tree.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes, indexed by [`NodeId`]. The document node is index 0.
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// The document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, including the document node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the document node is created with the tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends a detached `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none(), "child already attached");
        let prev_last = self.nodes[parent.0].last_child;

        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].prev_sibling = prev_last;
        match prev_last {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
        self.nodes[parent.0].last_child = Some(child);
    }

    /// Allocate an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.alloc(NodeType::Element(ElementData::new(tag, attrs)));
        self.append_child(parent, id);
        id
    }

    /// Allocate a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.alloc(NodeType::Text(text.to_string()));
        self.append_child(parent, id);
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.first_child)
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.last_child)
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over the children of a node in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            current: self.first_child(id),
        }
    }

    /// Iterate over all ancestors of a node, from parent to the document.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// The first element child of the document (`<html>` for HTML documents).
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .find(|&id| self.as_element(id).is_some())
    }

    /// A navigation handle on `id` implementing [`ElementNav`].
    #[must_use]
    pub const fn node(&self, id: NodeId) -> DomNode<'_> {
        DomNode { tree: self, id }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.next_sibling(id);
        Some(id)
    }
}

/// Iterator over ancestors of a node.
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Element navigation consumed by the selector matcher.
///
/// This is the whole surface the style engine needs from a document tree:
/// tag name, attribute lookup, and parent/sibling/child links. A node that is
/// not a tag (text, comment) reports `None` from [`ElementNav::tag_name`];
/// the matcher skips such nodes when counting siblings.
///
/// `parent` must return `None` for the root element, so that `:root`
/// ("no parent") and the descendant walk stop there.
pub trait ElementNav: Copy {
    /// Local name of a tag node, `None` for text and other non-tag nodes.
    fn tag_name(&self) -> Option<&str>;

    /// Value of the named attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Parent element, `None` at the root element.
    fn parent(&self) -> Option<Self>;

    /// Previous sibling node of any kind.
    fn prev_sibling(&self) -> Option<Self>;

    /// Next sibling node of any kind.
    fn next_sibling(&self) -> Option<Self>;

    /// First child node of any kind.
    fn first_child(&self) -> Option<Self>;

    /// Whether this node is a tag (element) node.
    fn is_tag(&self) -> bool {
        self.tag_name().is_some()
    }
}

/// A [`DomTree`] node handle implementing [`ElementNav`].
#[derive(Debug, Clone, Copy)]
pub struct DomNode<'t> {
    tree: &'t DomTree,
    id: NodeId,
}

impl<'t> DomNode<'t> {
    /// The node this handle points at.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this handle navigates.
    #[must_use]
    pub const fn tree(&self) -> &'t DomTree {
        self.tree
    }

    fn with(self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self { tree: self.tree, id })
    }
}

impl ElementNav for DomNode<'_> {
    fn tag_name(&self) -> Option<&str> {
        self.tree.as_element(self.id).map(|e| e.tag_name.as_str())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.tree
            .as_element(self.id)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    fn parent(&self) -> Option<Self> {
        // The document node is not an element; the document element is the root.
        let parent = self.tree.parent(self.id)?;
        if self.tree.as_element(parent).is_none() {
            return None;
        }
        self.with(Some(parent))
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.with(self.tree.prev_sibling(self.id))
    }

    fn next_sibling(&self) -> Option<Self> {
        self.with(self.tree.next_sibling(self.id))
    }

    fn first_child(&self) -> Option<Self> {
        self.with(self.tree.first_child(self.id))
    }
}
