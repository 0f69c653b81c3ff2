//! Parsed markup tree: `Node`, `Element`, `Text`, `Comment`.
//!
//! Trees are produced by a [`MarkupParser`](crate::convert::MarkupParser) or
//! built by hand, consumed by one conversion and then dropped.

mod element;
mod text;

pub use element::Element;
pub use text::{Comment, Text};

use smallvec::SmallVec;

/// Node in a markup tree.
///
/// `Comment` stands for any node kind the converter does not emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Comment(Comment),
}

impl Node {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text, comment);

    /// Text node shorthand.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }

    /// Comment node shorthand.
    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment(Comment::new(content))
    }

    /// Whether this node can produce output (an element, or non-blank text).
    pub fn is_significant(&self) -> bool {
        match self {
            Node::Element(_) => true,
            Node::Text(t) => !t.is_whitespace(),
            Node::Comment(_) => false,
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut node: Node = Element::new("div").into();
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.as_element().map(|e| e.tag_name()), Some("div"));

        node.as_element_mut().unwrap().tag = "span".into();
        assert_eq!(node.as_element().unwrap().tag_name(), "span");

        let text = Node::text("hi");
        assert_eq!(text.as_text().map(|t| t.content.as_str()), Some("hi"));
        assert!(text.as_comment().is_none());
    }

    #[test]
    fn test_significance() {
        assert!(Node::from(Element::new("br")).is_significant());
        assert!(Node::text(" x ").is_significant());
        assert!(!Node::text(" \n\t").is_significant());
        assert!(!Node::comment("note").is_significant());
    }

    #[test]
    fn test_node_is_send_sync() {
        static_assertions::assert_impl_all!(Node: Send, Sync);
    }
}
