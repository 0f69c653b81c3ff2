//! markup-to-element - HTML/SVG markup to nested element-construction calls
//!
//! ## Core Concepts
//!
//! **Parse, then render**: a [`MarkupParser`] turns text into a [`Node`] tree,
//! and the renderer walks that tree emitting one `createElement(...)` call per
//! element, with attribute names and values rewritten for a virtual-DOM
//! library (`class` → `className`, inline `style` → object, SVG
//! presentation attributes → camelCase, `"true"`/`"false"` → booleans).
//!
//! ## Modules
//! - `node`: Node/Element/Text/Comment types
//! - `convert`: parser capability and the html5ever-backed parser
//! - `render`: tree → source text, `EmitConfig`
//! - `attr`: attribute list and name mapping table
//! - `svg`: SVG tag set
//! - `style`: inline style parsing
//! - `selection`: line-range selections for host substitution
//!
//! ## Usage
//!
//! ```ignore
//! use markup_to_element::{convert_markup_to_code, convert_markup_with, EmitConfig, HtmlParser};
//!
//! let code = convert_markup_to_code(r#"<div class="a"><span>Hi</span></div>"#)?;
//!
//! // Preact-style `h(...)` with four-space indentation
//! let config = EmitConfig::default().with_pragma("h").with_indent(4);
//! let code = convert_markup_with(&HtmlParser, "<p>Hi</p>", &config)?;
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Node types: Element, Node, Text, Comment
pub mod node;

/// Markup parsers
pub mod convert;

/// Source rendering
pub mod render;

/// Attribute types and name mapping
pub mod attr;

/// SVG tag classification
pub mod svg;

/// Inline style parsing
pub mod style;

/// Document selections
pub mod selection;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use node::{Children, Comment, Element, Node, Text};

pub use convert::MarkupParser;

#[cfg(feature = "html-parser")]
pub use convert::HtmlParser;

pub use render::{DEFAULT_PRAGMA, EmitConfig, convert, convert_with};

pub use attr::{Attrs, AttrsExt};

pub use selection::{LineRange, Selection, SelectionError};

pub use error::{ConvertError, ConvertResult, EmitError, ParseError};

// =============================================================================
// Entry points
// =============================================================================

/// Convert markup text with the html5ever parser and the default config.
#[cfg(feature = "html-parser")]
pub fn convert_markup_to_code(text: &str) -> ConvertResult<String> {
    convert_markup_with(&HtmlParser, text, &EmitConfig::default())
}

/// Parse `text` with `parser` and render it with `config`.
///
/// This is the single place parser and renderer errors meet; both surface
/// as [`ConvertError`].
pub fn convert_markup_with<P>(parser: &P, text: &str, config: &EmitConfig) -> ConvertResult<String>
where
    P: MarkupParser + ?Sized,
{
    tracing::debug!(input_len = text.len(), pragma = %config.pragma, "converting markup");
    let root = parser.parse(text)?;
    convert_with(&root, config)
}

/// Convert many independent inputs, results in input order.
#[cfg(not(feature = "parallel"))]
pub fn convert_batch<P>(parser: &P, inputs: &[&str], config: &EmitConfig) -> Vec<ConvertResult<String>>
where
    P: MarkupParser + ?Sized,
{
    inputs
        .iter()
        .map(|text| convert_markup_with(parser, text, config))
        .collect()
}

/// Convert many independent inputs in parallel, results in input order.
#[cfg(feature = "parallel")]
pub fn convert_batch<P>(parser: &P, inputs: &[&str], config: &EmitConfig) -> Vec<ConvertResult<String>>
where
    P: MarkupParser + Sync + ?Sized,
{
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|text| convert_markup_with(parser, text, config))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_parser(input: &str) -> Result<Node, ParseError> {
        match input {
            "" => Err(ParseError::Empty),
            "bad" => Err(ParseError::rejected("unclosed <div>")),
            tag => Ok(Element::new(tag).attr("data-x", "1").into()),
        }
    }

    #[test]
    fn test_convert_with_custom_parser() {
        let out = convert_markup_with(&tree_parser, "section", &EmitConfig::BARE).unwrap();
        assert_eq!(out, "createElement(\"section\", {\n  dataX: \"1\"\n})");
    }

    #[test]
    fn test_parse_failure_is_wrapped() {
        let err = convert_markup_with(&tree_parser, "bad", &EmitConfig::BARE).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(ParseError::Rejected(_))));
        assert_eq!(err.to_string(), "conversion failed: markup rejected: unclosed <div>");
    }

    #[test]
    fn test_batch_keeps_order() {
        let results = convert_batch(&tree_parser, &["a", "", "b"], &EmitConfig::BARE);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().starts_with("createElement(\"a\""));
        assert!(matches!(results[1], Err(ConvertError::Parse(ParseError::Empty))));
        assert!(results[2].as_ref().unwrap().starts_with("createElement(\"b\""));
    }

    #[cfg(feature = "html-parser")]
    #[test]
    fn test_convert_markup_to_code() {
        let out = convert_markup_to_code("<div></div>").unwrap();
        assert_eq!(out, "React.createElement(\"div\")");
    }
}
