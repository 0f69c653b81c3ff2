//! Source rendering for markup trees
//!
//! Renders a [`Node`] tree to nested element-construction calls:
//!
//! ```text
//! React.createElement("div", {
//!   className: "a",
//!   style: { color: "red" }
//! },
//!   React.createElement("span", {},
//!     "Hi"
//!   )
//! )
//! ```

use std::borrow::Cow;

use crate::attr::attr_prop_name;
use crate::error::{ConvertResult, EmitError};
use crate::node::{Element, Node};
use crate::style::parse_style;
use crate::svg::is_svg_tag;

// =============================================================================
// EmitConfig
// =============================================================================

/// Upper bound on a single line's leading padding.
const MAX_PAD: usize = 1 << 16;

/// Default constructor callee.
pub const DEFAULT_PRAGMA: &str = "React.createElement";

/// Tag emitted for elements the parser gave no name.
pub const FALLBACK_TAG: &str = "div";

/// Configuration for source rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Callee of every element-construction call (e.g. `React.createElement`, `h`).
    pub pragma: Cow<'static, str>,
    /// Spaces per nesting level.
    pub indent: usize,
    /// Deepest element nesting rendered before failing with [`EmitError::TooDeep`].
    pub max_depth: usize,
}

impl EmitConfig {
    /// `React.createElement(...)`, two-space indent.
    pub const REACT: Self = Self {
        pragma: Cow::Borrowed(DEFAULT_PRAGMA),
        indent: 2,
        max_depth: 512,
    };

    /// Bare `createElement(...)`, two-space indent.
    pub const BARE: Self = Self {
        pragma: Cow::Borrowed("createElement"),
        indent: 2,
        max_depth: 512,
    };

    /// Set the constructor callee.
    pub fn with_pragma(mut self, pragma: impl Into<Cow<'static, str>>) -> Self {
        self.pragma = pragma.into();
        self
    }

    /// Set spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(self.indent.saturating_mul(depth).min(MAX_PAD))
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::REACT
    }
}

// =============================================================================
// Tree Rendering
// =============================================================================

/// Render a tree with the default config.
pub fn convert(root: &Node) -> ConvertResult<String> {
    convert_with(root, &EmitConfig::default())
}

/// Render a tree to trimmed source text.
///
/// Errors from anywhere in the walk surface here, wrapped once.
pub fn convert_with(root: &Node, config: &EmitConfig) -> ConvertResult<String> {
    let output = render_node(root, config, 0)?;
    tracing::debug!(bytes = output.len(), "rendered element tree");
    Ok(output.trim().to_string())
}

/// Render a node at `depth`. Empty output means "contributes nothing".
fn render_node(node: &Node, config: &EmitConfig, depth: usize) -> Result<String, EmitError> {
    match node {
        Node::Element(elem) => render_element(elem, config, depth),
        Node::Text(text) => {
            let content = text.trimmed();
            if content.is_empty() {
                return Ok(String::new());
            }
            Ok(format!("{}{}", config.pad(depth), quote(content)))
        }
        Node::Comment(_) => Ok(String::new()),
    }
}

/// Render an element call.
fn render_element(elem: &Element, config: &EmitConfig, depth: usize) -> Result<String, EmitError> {
    if depth >= config.max_depth {
        return Err(EmitError::TooDeep { max: config.max_depth });
    }

    let tag = if elem.is_fragment() {
        FALLBACK_TAG.to_string()
    } else {
        elem.tag_name().to_lowercase()
    };
    let is_svg = is_svg_tag(&tag);
    tracing::trace!(%tag, is_svg, attrs = elem.attrs.len(), "rendering element");

    let props = render_props(elem, &tag, is_svg, config, depth)?;

    let mut children = Vec::with_capacity(elem.children.len());
    for child in &elem.children {
        let rendered = render_node(child, config, depth + 1)?;
        if !rendered.is_empty() {
            children.push(rendered);
        }
    }

    let pad = config.pad(depth);
    let head = format!("{pad}{}({}", config.pragma, quote(&tag));
    let output = match (props.is_empty(), children.is_empty()) {
        (true, true) => format!("{head})"),
        (false, true) => format!("{head}, {{\n{}\n{pad}}})", props.join(",\n")),
        (false, false) => format!(
            "{head}, {{\n{}\n{pad}}},\n{}\n{pad})",
            props.join(",\n"),
            children.join(",\n")
        ),
        (true, false) => format!("{head}, {{}},\n{}\n{pad})", children.join(",\n")),
    };
    Ok(output)
}

/// Render one `key: value` line per attribute, in source order.
fn render_props(
    elem: &Element,
    tag: &str,
    is_svg: bool,
    config: &EmitConfig,
    depth: usize,
) -> Result<Vec<String>, EmitError> {
    let pad = config.pad(depth + 1);
    let mut props = Vec::with_capacity(elem.attrs.len());

    for (name, value) in &elem.attrs {
        if name.is_empty() {
            return Err(EmitError::InvalidAttribute {
                tag: tag.to_string(),
                name: name.clone(),
            });
        }

        let (key, value) = match name.as_str() {
            "class" if !is_svg => (Cow::Borrowed("className"), quote(value)),
            "style" => (Cow::Borrowed("style"), render_style(value)),
            _ => {
                let key = if is_svg || name.contains([':', '-']) {
                    Cow::Owned(attr_prop_name(name))
                } else {
                    Cow::Borrowed(name.as_str())
                };
                (key, render_value(value))
            }
        };
        props.push(format!("{pad}{}: {value}", property_key(&key)));
    }

    Ok(props)
}

/// Render a `style` attribute as an inline object literal.
fn render_style(style: &str) -> String {
    let decls = parse_style(style);
    if decls.is_empty() {
        return "{}".to_string();
    }
    let body = decls
        .iter()
        .map(|(k, v)| format!("{}: {}", property_key(k), quote(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {body} }}")
}

/// `"true"` / `"false"` become boolean literals, anything else a string.
fn render_value(value: &str) -> String {
    match value {
        "true" | "false" => value.to_string(),
        _ => quote(value),
    }
}

/// Property key, quoted when it is not a plain identifier.
fn property_key(key: &str) -> Cow<'_, str> {
    if is_identifier(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(quote(key))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Double-quoted string literal with JSON escaping.
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\u{08}' => result.push_str("\\b"),
            '\u{0c}' => result.push_str("\\f"),
            c if (c as u32) < 0x20 => result.push_str(&format!("\\u{:04x}", c as u32)),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

// =============================================================================
// Tests
// =============================================================================
