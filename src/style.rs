//! Inline `style` attribute parsing
//!
//! `"color: red; margin-top: 4px"` becomes `[("color", "red"), ("marginTop", "4px")]`.
//! Declarations with an empty key or value are dropped; nothing here fails.

use crate::attr::{camelize, Attrs, AttrsExt};

/// Parse a CSS declaration list into ordered camelCase key/value pairs.
///
/// Each declaration is split at its first `:` so values such as
/// `url(http://example.com/a.png)` survive intact. A repeated property keeps
/// the position of its first occurrence and the value of its last.
pub fn parse_style(style: &str) -> Attrs {
    let mut decls: Attrs = Vec::new();
    for decl in style.split(';') {
        let Some((key, value)) = decl.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        decls.set_attr(style_key(key), value);
    }
    tracing::trace!(count = decls.len(), "parsed style declarations");
    decls
}

/// kebab-case CSS property → camelCase style key
pub fn style_key(property: &str) -> String {
    camelize(property, |c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(style: &str) -> Vec<(String, String)> {
        parse_style(style)
    }

    fn owned(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            pairs("color: red; margin-top: 4px"),
            owned(&[("color", "red"), ("marginTop", "4px")])
        );
    }

    #[test]
    fn test_malformed_declarations_dropped() {
        assert!(pairs(";;").is_empty());
        assert!(pairs("color:").is_empty());
        assert!(pairs(":red").is_empty());
        assert!(pairs("   ").is_empty());
        assert_eq!(pairs("color:; ;width: 10px;;junk"), owned(&[("width", "10px")]));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(
            pairs("background: url(http://example.com/a.png)"),
            owned(&[("background", "url(http://example.com/a.png)")])
        );
    }

    #[test]
    fn test_repeated_key_keeps_first_position() {
        assert_eq!(
            pairs("color: red; width: 1px; color: blue"),
            owned(&[("color", "blue"), ("width", "1px")])
        );
    }

    #[test]
    fn test_vendor_prefix() {
        assert_eq!(style_key("-webkit-transition"), "WebkitTransition");
        assert_eq!(style_key("border-top-left-radius"), "borderTopLeftRadius");
    }
}
