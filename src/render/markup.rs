//! A small HTML element tree.
//!
//! Text and attribute values are escaped when the tree is rendered, so callers
//! never build markup by string interpolation. Only [`Node::Raw`] bypasses
//! escaping, and it only holds `'static` script bodies owned by this crate.
//! Content is passed between renderers as [`Fragment`] trees, never as
//! rendered strings, so text nodes are emitted exactly as written.

use std::fmt;

const INDENT: &str = "    ";

/// Tags that have no closing tag and no children.
const VOID_ELEMENTS: &[&str] = &["img", "input", "link", "meta", "br", "hr"];

/// Escape HTML special characters in text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Rendered, already-escaped HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Element),
    Raw(&'static str),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A sequence of sibling elements, e.g. the entry blocks of one page section.
#[derive(Debug, Clone, Default)]
pub struct Fragment(Vec<Element>);

impl Fragment {
    /// Render each element at the top level, one after another.
    pub fn render(&self) -> Markup {
        let blocks: Vec<String> = self
            .0
            .iter()
            .map(|element| element.render().into_string())
            .collect();
        Markup(blocks.join("\n"))
    }
}

impl FromIterator<Element> for Fragment {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Fragment(iter.into_iter().collect())
    }
}

impl IntoIterator for Fragment {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Embed a crate-owned script body without escaping.
    pub fn raw(mut self, body: &'static str) -> Self {
        self.children.push(Node::Raw(body));
        self
    }

    pub fn render(&self) -> Markup {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        Markup(out)
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        out.push_str(&INDENT.repeat(depth));
        self.write_inline(out, depth);
    }

    fn write_open_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
    }

    fn write_inline(&self, out: &mut String, depth: usize) {
        self.write_open_tag(out);
        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        // Mixed content stays on one line so no whitespace is added around text.
        let has_text = self.children.iter().any(|c| matches!(c, Node::Text(_)));
        if has_text || self.children.is_empty() {
            for child in &self.children {
                match child {
                    Node::Text(text) => out.push_str(&escape_html(text)),
                    Node::Element(element) => element.write_inline(out, depth),
                    Node::Raw(body) => out.push_str(body),
                }
            }
        } else {
            for child in &self.children {
                out.push('\n');
                match child {
                    Node::Element(element) => element.write_to(out, depth + 1),
                    Node::Raw(body) => write_indented(out, body, depth + 1),
                    Node::Text(text) => out.push_str(&escape_html(text)),
                }
            }
            out.push('\n');
            out.push_str(&INDENT.repeat(depth));
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Re-indents a raw script body line by line. Text nodes never pass through here.
fn write_indented(out: &mut String, body: &str, depth: usize) {
    let prefix = INDENT.repeat(depth);
    let lines: Vec<String> = body
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect();
    out.push_str(&lines.join("\n"));
}
