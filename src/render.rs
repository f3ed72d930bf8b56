//! Markup serialization
//!
//! Renders view trees to HTML strings or plain text for terminals.

use crate::attr::Attrs;
use crate::node::{Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Put each block element on its own indented line.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl RenderConfig {
    /// Development config (pretty-printed).
    pub const DEV: Self = Self {
        pretty: true,
        indent: 2,
    };

    /// Production config (compact).
    pub const PROD: Self = Self {
        pretty: false,
        indent: 0,
    };

    /// Create a new config.
    pub fn new(pretty: bool) -> Self {
        if pretty { Self::DEV } else { Self::PROD }
    }

    /// Set indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PROD
    }
}

// =============================================================================
// HTML
// =============================================================================

/// Render an element tree to HTML bytes.
pub fn render_html_bytes(elem: &Element, config: &RenderConfig) -> Vec<u8> {
    render_html(elem, config).into_bytes()
}

/// Render an element tree to an HTML string.
pub fn render_html(elem: &Element, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_element(elem, config, 0, &mut output);
    output
}

fn render_element(elem: &Element, config: &RenderConfig, depth: usize, output: &mut String) {
    // Blocks holding only inline content stay on one line so that text
    // whitespace is preserved.
    let nested = config.pretty && elem.children.iter().any(is_block_node);

    if config.pretty && depth > 0 && is_block(elem) {
        output.push('\n');
        push_indent(output, depth * config.indent);
    }

    output.push('<');
    output.push_str(&elem.tag);
    render_attrs(&elem.attrs, output);

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    for child in &elem.children {
        match child {
            Node::Element(e) => render_element(e, config, depth + 1, output),
            Node::Text(text) => output.push_str(&escape_html(&text.content)),
        }
    }

    if nested {
        output.push('\n');
        push_indent(output, depth * config.indent);
    }
    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

fn push_indent(output: &mut String, n: usize) {
    output.extend(std::iter::repeat_n(' ', n));
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "param" | "source" | "track" | "wbr"
    )
}

fn is_block(elem: &Element) -> bool {
    matches!(
        elem.tag.as_str(),
        "div" | "p" | "pre" | "section" | "table" | "tr" | "ul" | "ol" | "li"
    )
}

fn is_block_node(node: &Node) -> bool {
    node.as_element().is_some_and(is_block)
}

// =============================================================================
// Plain text
// =============================================================================

/// Render an element tree to plain text.
///
/// Every block element whose children are all inline ends one output line;
/// inline content is concatenated as-is.
pub fn render_text(elem: &Element) -> String {
    let mut output = String::new();
    render_text_into(elem, &mut output);
    output
}

fn render_text_into(elem: &Element, output: &mut String) {
    let has_block_children = elem.children.iter().any(is_block_node);

    for child in &elem.children {
        match child {
            Node::Element(e) => render_text_into(e, output),
            Node::Text(text) => output.push_str(&text.content),
        }
    }

    if is_block(elem) && !has_block_children {
        output.push('\n');
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_diff;
    use crate::options::{CompareOptions, ContextLines};
    use crate::view::{Side, render_split_pane, render_unified_view};

    #[test]
    fn test_render_simple_element() {
        let elem = Element::new("div").with_class("diff-row").text("x");
        assert_eq!(
            render_html(&elem, &RenderConfig::PROD),
            "<div class=\"diff-row\">x</div>"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_line_content_escaped() {
        let ops = compute_diff("if a < b && c {", "if a <= b {", &CompareOptions::EXACT);
        let html = render_html(
            &render_unified_view(&ops, false, ContextLines::All),
            &RenderConfig::PROD,
        );
        assert!(html.contains("if a &lt; b &amp;&amp; c {"));
        assert!(html.contains("if a &lt;= b {"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_void_element() {
        let elem = Element::new("div").child(Element::new("br"));
        assert_eq!(render_html(&elem, &RenderConfig::PROD), "<div><br /></div>");
    }

    #[test]
    fn test_pretty_indents_blocks() {
        let elem = Element::new("div")
            .child(Element::new("div").child(Element::new("span").text("a")))
            .child(Element::new("div").text("b"));
        let html = render_html(&elem, &RenderConfig::DEV);
        assert_eq!(
            html,
            "<div>\n  <div><span>a</span></div>\n  <div>b</div>\n</div>"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let elem = Element::new("div").child(Element::new("div").text("b"));
        let config = RenderConfig::DEV.with_indent(4);
        assert_eq!(render_html(&elem, &config), "<div>\n    <div>b</div>\n</div>");
    }

    #[test]
    fn test_render_text_rows() {
        let ops = compute_diff("line1\nline2\nline3", "line1\nlineX\nline3", &CompareOptions::EXACT);
        let text = render_text(&render_unified_view(&ops, false, ContextLines::All));
        assert_eq!(text, "  line1\n- line2\n+ lineX\n  line3\n");

        let pane = render_text(&render_split_pane(&ops, Side::Original, true));
        assert_eq!(pane, "1 line1\n2 line2\n  \n3 line3\n");
    }

    #[test]
    fn test_bytes_match_string() {
        let elem = Element::new("p").text("é");
        assert_eq!(
            render_html_bytes(&elem, &RenderConfig::PROD),
            render_html(&elem, &RenderConfig::PROD).into_bytes()
        );
    }
}
