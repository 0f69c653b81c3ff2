//! Prelude for common imports.
//!
//! ```ignore
//! use markup_to_element::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Comment, Element, Node, Text};

// Parsing
pub use crate::convert::MarkupParser;

#[cfg(feature = "html-parser")]
pub use crate::convert::HtmlParser;

// Rendering
pub use crate::render::{DEFAULT_PRAGMA, EmitConfig, convert, convert_with};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Selections
pub use crate::selection::{LineRange, Selection};

// Errors
pub use crate::error::{ConvertError, ConvertResult, EmitError, ParseError};

// Entry points
pub use crate::{convert_batch, convert_markup_with};

#[cfg(feature = "html-parser")]
pub use crate::convert_markup_to_code;
