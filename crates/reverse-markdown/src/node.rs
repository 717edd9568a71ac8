//! DOM node structure consumed by the [`Mapper`](crate::Mapper).
//!
//! Any parser (scraper/html5ever, CDP, a hand-built tree in tests) can produce
//! this structure. The owned tree carries no parent pointers; navigation
//! upwards and sideways goes through [`NodeRef`], a borrowed cursor that is
//! created while descending from the root.

use indexmap::IndexMap;

/// A node of the document tree: either an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lower-cased tag name, e.g. `"div"`
    pub tag_name: String,

    /// Attributes in document order, keyed by lower-cased name
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag_name: tag_name.to_lowercase(),
            ..Default::default()
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string()))
            .collect();

        Node::Element(Element {
            tag_name: tag_name.to_lowercase(),
            attributes,
            children: Vec::new(),
        })
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get the tag name (lowercase), or `"#text"` for text nodes
    pub fn tag_name(&self) -> &str {
        match self {
            Node::Element(element) => &element.tag_name,
            Node::Text(_) => "#text",
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(element) => element
                .attributes
                .get(name.to_lowercase().as_str())
                .map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Add a child node. Ignored for text nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Builder-style variant of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element
                .attributes
                .insert(name.to_lowercase(), value.to_string());
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }
}

/// A reference to a node with its position in the tree.
///
/// `NodeRef`s form a chain on the stack while the tree is walked from the
/// root, so the parent link and ancestor chain always agree with the tree.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    /// The node itself
    pub node: &'a Node,
    parent: Option<&'a NodeRef<'a>>,
    /// Position among the parent's children
    index: usize,
}

impl<'a> NodeRef<'a> {
    /// Create a root NodeRef (no parent)
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            index: 0,
        }
    }

    /// Iterate over the children, each carrying this node as parent
    pub fn children<'s>(&'s self) -> impl Iterator<Item = NodeRef<'s>> + 's {
        let parent: &'s NodeRef<'s> = self;
        parent
            .node
            .children()
            .iter()
            .enumerate()
            .map(move |(index, node)| NodeRef {
                node,
                parent: Some(parent),
                index,
            })
    }

    /// The parent, if this is not the root
    pub fn parent(&self) -> Option<&'a NodeRef<'a>> {
        self.parent
    }

    /// Tag name of the parent, if any
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent.map(|parent| parent.node.tag_name())
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = &'a NodeRef<'a>> {
        std::iter::successors(self.parent, |ancestor| ancestor.parent)
    }

    /// Count the ancestors with the given tag
    pub fn count_ancestors(&self, tag: &str) -> usize {
        self.ancestors()
            .filter(|ancestor| ancestor.tag_name() == tag)
            .count()
    }

    /// Check whether any ancestor has the given tag
    pub fn has_ancestor(&self, tag: &str) -> bool {
        self.ancestors().any(|ancestor| ancestor.tag_name() == tag)
    }

    /// Position among the parent's children (0 for the root)
    pub fn index(&self) -> usize {
        self.index
    }

    /// The immediately preceding sibling
    pub fn previous_sibling(&self) -> Option<&'a Node> {
        self.previous_siblings().next()
    }

    /// Preceding siblings, nearest first
    pub fn previous_siblings(&self) -> impl Iterator<Item = &'a Node> {
        let siblings: &'a [Node] = match self.parent {
            Some(parent) => &parent.node.children()[..self.index],
            None => &[],
        };
        siblings.iter().rev()
    }

    pub fn is_element(&self) -> bool {
        self.node.is_element()
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text()
    }

    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attr(name)
    }

    pub fn text_content(&self) -> String {
        self.node.text_content()
    }
}
