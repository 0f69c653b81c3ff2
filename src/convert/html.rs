//! HTML parsing via html5ever
//!
//! Bridges `markup5ever_rcdom` handles to our [`Node`] tree.
//!
//! # Flow
//!
//! ```text
//! &str
//!   │
//!   ├─ <!doctype / <html / <head / <body ─▶ html5ever::parse_document
//!   │                                         root: <html> (or <body>)
//!   │
//!   └─ anything else ─▶ html5ever::parse_fragment (context: <template>)
//!                         root: the single top-level node, or a wrapper
//!   │
//!   ▼ HtmlParser::parse
//! Node
//! ```
//!
//! A `<template>` context accepts table parts (`<td>`, `<tr>`, `<col>`) and
//! head-only tags (`<title>`, `<meta>`) where they stand, so a fragment keeps
//! every element it spells out.
//!
//! The HTML tree builder puts `<svg>` subtrees in foreign content, so SVG tag
//! and attribute names come back with their SVG casing (`linearGradient`,
//! `viewBox`) and namespaced attributes as `prefix:local` (`xlink:href`).

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, ns, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::ParseError;
use crate::node::{Element, Node};

use super::MarkupParser;

/// html5ever-backed [`MarkupParser`].
///
/// Never rejects markup html5ever can recover from; only empty input (or
/// input without anything convertible, such as a lone comment) fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for HtmlParser {
    fn parse(&self, input: &str) -> Result<Node, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some(root) = document_root(input) {
            return parse_as_document(input, root);
        }

        let dom = parse_fragment(
            RcDom::default(),
            Default::default(),
            QualName::new(None, ns!(html), local_name!("template")),
            Vec::new(),
            false,
        )
        .from_utf8()
        .read_from(&mut input.as_bytes())?;

        // Fragment results hang off a synthesized <html> element.
        let html = child_element(&dom.document, "html")
            .ok_or_else(|| ParseError::rejected("parser produced no fragment root"))?;
        let nodes: Vec<Node> = html.children.borrow().iter().filter_map(convert_node).collect();
        tracing::debug!(nodes = nodes.len(), "parsed markup fragment");

        select_root(nodes)
    }
}

/// Parse a whole document and return its `root` element (`html` or `body`).
fn parse_as_document(input: &str, root: &str) -> Result<Node, ParseError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())?;

    let html = child_element(&dom.document, "html")
        .ok_or_else(|| ParseError::rejected("parser produced no document element"))?;
    let handle = if root == "html" {
        html
    } else {
        child_element(&html, root)
            .ok_or_else(|| ParseError::rejected(format!("document has no <{root}> element")))?
    };
    tracing::debug!(root, "parsed html document");

    convert_node(&handle).ok_or_else(|| ParseError::rejected("document root is not an element"))
}

/// One significant top-level node is the root; several get a tagless wrapper.
fn select_root(mut nodes: Vec<Node>) -> Result<Node, ParseError> {
    let significant: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_significant())
        .map(|(i, _)| i)
        .collect();

    match significant.as_slice() {
        [] => Err(ParseError::Empty),
        [only] => Ok(nodes.swap_remove(*only)),
        _ => Ok(Element::fragment(nodes).into()),
    }
}

/// Convert an rcdom handle; `None` for doctypes and processing instructions.
fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut elem = Element::new(&*name.local);
            elem.attrs = attrs
                .borrow()
                .iter()
                .map(|attr| (qualified_name(&attr.name), attr.value.to_string()))
                .collect();
            // <template> children live in a separate document fragment
            let contents = template_contents.borrow();
            let source = contents.as_ref().unwrap_or(handle);
            elem.children = source
                .children
                .borrow()
                .iter()
                .filter_map(convert_node)
                .collect();
            Some(elem.into())
        }
        NodeData::Text { contents } => Some(Node::text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(Node::comment(contents.to_string())),
        _ => None,
    }
}

fn child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}

/// `xlink:href` for prefixed names, bare local name otherwise.
fn qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

/// Root element to return when the input is spelled as a document.
fn document_root(input: &str) -> Option<&'static str> {
    let rest = input.trim_start().strip_prefix('<')?;
    let tag = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '!')
        .collect::<String>()
        .to_ascii_lowercase();
    match tag.as_str() {
        "!doctype" | "html" | "head" => Some("html"),
        "body" => Some("body"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Node {
        HtmlParser::new().parse(input).unwrap()
    }

    fn element(node: &Node) -> &Element {
        node.as_element().expect("element root")
    }

    #[test]
    fn test_single_element_is_root() {
        let node = parse(r#"<div class="a" id="b">x</div>"#);
        let div = element(&node);
        assert_eq!(div.tag_name(), "div");
        assert_eq!(
            div.attrs,
            vec![("class".to_string(), "a".to_string()), ("id".to_string(), "b".to_string())]
        );
        assert_eq!(div.text_content(), "x");
    }

    #[test]
    fn test_surrounding_whitespace_ignored_for_root() {
        let node = parse("\n  <span>a</span>\n");
        assert_eq!(element(&node).tag_name(), "span");
    }

    #[test]
    fn test_multiple_roots_are_wrapped() {
        let node = parse("<p>one</p><p>two</p>");
        let frag = element(&node);
        assert!(frag.is_fragment());
        assert_eq!(frag.children_elements().count(), 2);
    }

    #[test]
    fn test_head_content_kept_in_order() {
        let node = parse("<title>T</title><p>x</p>");
        let tags: Vec<_> = element(&node).children_elements().map(Element::tag_name).collect();
        assert_eq!(tags, vec!["title", "p"]);
    }

    #[test]
    fn test_text_only_input() {
        let node = parse("hello");
        assert_eq!(node.as_text().map(|t| t.content.as_str()), Some("hello"));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(HtmlParser.parse(""), Err(ParseError::Empty)));
        assert!(matches!(HtmlParser.parse(" \n\t"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_comments_are_nodes_but_not_roots() {
        let node = parse("<span>a</span><!-- note -->");
        assert_eq!(element(&node).tag_name(), "span");
    }

    #[test]
    fn test_svg_names() {
        let node = parse(
            r##"<svg viewBox="0 0 10 10"><linearGradient id="g"></linearGradient><use xlink:href="#a" stroke-width="2"/></svg>"##,
        );
        let svg = element(&node);
        assert_eq!(svg.get_attr("viewBox"), Some("0 0 10 10"));

        let children: Vec<_> = svg.children_elements().collect();
        assert_eq!(children[0].tag_name(), "linearGradient");
        assert_eq!(children[1].tag_name(), "use");
        assert_eq!(children[1].get_attr("xlink:href"), Some("#a"));
        assert_eq!(children[1].get_attr("stroke-width"), Some("2"));
    }

    #[test]
    fn test_full_document() {
        let node = parse(r#"<!DOCTYPE html><html lang="en"><body><p>x</p></body></html>"#);
        let html = element(&node);
        assert_eq!(html.tag_name(), "html");
        assert_eq!(html.get_attr("lang"), Some("en"));
        let sections: Vec<_> = html.children_elements().map(Element::tag_name).collect();
        assert_eq!(sections, vec!["head", "body"]);
    }

    #[test]
    fn test_body_document_keeps_body() {
        let node = parse(r#"<body class="b"><p>x</p></body>"#);
        let body = element(&node);
        assert_eq!(body.tag_name(), "body");
        assert_eq!(body.get_attr("class"), Some("b"));
        assert_eq!(body.children_elements().next().map(Element::tag_name), Some("p"));
    }

    #[test]
    fn test_table_parts_survive_outside_a_table() {
        let node = parse("<td>cell</td>");
        assert_eq!(element(&node).tag_name(), "td");
        assert_eq!(element(&node).text_content(), "cell");

        let node = parse("<tr><td>a</td></tr>");
        let tr = element(&node);
        assert_eq!(tr.tag_name(), "tr");
        assert_eq!(tr.children_elements().next().map(Element::tag_name), Some("td"));
    }

    #[test]
    fn test_template_contents_are_children() {
        let node = parse("<template><p>x</p></template>");
        let template = element(&node);
        assert_eq!(template.tag_name(), "template");
        assert_eq!(template.children_elements().next().map(Element::tag_name), Some("p"));
    }

    #[test]
    fn test_document_root() {
        assert_eq!(document_root("  <!doctype html>"), Some("html"));
        assert_eq!(document_root("<HTML>"), Some("html"));
        assert_eq!(document_root("<head><title>t</title></head>"), Some("html"));
        assert_eq!(document_root("<body>"), Some("body"));
        assert_eq!(document_root("<header>"), None);
        assert_eq!(document_root("<div>"), None);
        assert_eq!(document_root("text"), None);
    }
}
