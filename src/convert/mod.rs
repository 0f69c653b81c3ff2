//! Source format parsers producing markup trees
//!
//! The renderer only sees [`Node`] trees; where they come from is behind the
//! [`MarkupParser`] capability. Each concrete parser is feature-gated and
//! lives in its own submodule.
//!
//! # Supported Formats
//!
//! | Format | Feature | Module | Type |
//! |--------|---------|--------|------|
//! | HTML / inline SVG | `html-parser` | [`html`] | [`HtmlParser`] |
//!
//! # Adding New Parsers
//!
//! 1. Create a new submodule (e.g., `convert/xml.rs`)
//! 2. Add feature flag to `Cargo.toml`
//! 3. Implement `MarkupParser` returning the root `Node`
//! 4. Re-export in this module with `#[cfg(feature = "xxx")]`

use crate::error::ParseError;
use crate::node::Node;

/// Capability: turn markup text into a tree of element/text nodes.
///
/// Implementations decide the root: a single top-level node is returned as
/// is, several are wrapped in a tagless [`Element`](crate::node::Element).
pub trait MarkupParser {
    /// Parse `input` into a tree.
    fn parse(&self, input: &str) -> Result<Node, ParseError>;
}

impl<F> MarkupParser for F
where
    F: Fn(&str) -> Result<Node, ParseError>,
{
    fn parse(&self, input: &str) -> Result<Node, ParseError> {
        self(input)
    }
}

// =============================================================================
// HTML parser
// =============================================================================

#[cfg(feature = "html-parser")]
pub mod html;

#[cfg(feature = "html-parser")]
pub use self::html::HtmlParser;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn test_closure_is_a_parser() {
        let parser = |input: &str| -> Result<Node, ParseError> {
            if input.is_empty() {
                Err(ParseError::Empty)
            } else {
                Ok(Element::new(input).into())
            }
        };
        let node = parser.parse("div").unwrap();
        assert_eq!(node.as_element().map(Element::tag_name), Some("div"));
        assert!(matches!((&parser).parse(""), Err(ParseError::Empty)));
    }
}
