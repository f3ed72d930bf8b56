//! Element type - markup elements with attributes and children
//!
//! The core building block of rendered diff views.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// Markup element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub tag: CompactString,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Set an attribute (builder style)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Set the `class` attribute (builder style)
    pub fn with_class(self, class: impl Into<CompactString>) -> Self {
        self.attr("class", class)
    }

    /// Append a child element (builder style)
    pub fn child(mut self, elem: Element) -> Self {
        self.push_elem(elem);
        self
    }

    /// Append a text child (builder style)
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push_text(content);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(Node::from(elem));
    }

    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Node::Text(Text::new(content)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Get the `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    /// Check whether the element carries a class
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs.has_class(class)
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first iterator over this element and all descendants
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let elem = stack.pop()?;
            stack.extend(elem.children_elements().collect::<Vec<_>>().into_iter().rev());
            Some(elem)
        })
    }

    /// Find first element matching predicate (depth-first search)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().find(|e| predicate(*e))
    }

    /// Find all elements matching predicate (depth-first order)
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().filter(|e| predicate(*e)).collect()
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_basics() {
        let elem = Element::new("div");
        assert_eq!(elem.tag, "div");
        assert!(elem.is_empty());
        assert_eq!(elem.len(), 0);
    }

    #[test]
    fn test_element_builder() {
        let elem = Element::new("div")
            .with_class("diff-row")
            .attr("data-line", "7")
            .child(Element::new("span"))
            .text("Hello");

        assert_eq!(elem.class(), Some("diff-row"));
        assert!(elem.has_class("diff-row"));
        assert_eq!(elem.get_attr("data-line"), Some("7"));
        assert_eq!(elem.len(), 2);
        assert_eq!(elem.text_content(), "Hello");
    }

    #[test]
    fn test_find() {
        let root = Element::new("div")
            .child(Element::new("span").with_class("highlight").text("a"))
            .child(Element::new("p").child(Element::new("span").text("b")));

        let span = root.find(|e| e.tag == "span").unwrap();
        assert_eq!(span.class(), Some("highlight"));
        assert!(root.find(|e| e.tag == "missing").is_none());
        assert_eq!(root.find_all(|e| e.tag == "span").len(), 2);
    }

    #[test]
    fn test_elements_depth_first() {
        let root = Element::new("div")
            .child(Element::new("span").child(Element::new("b")))
            .child(Element::new("p"));

        let tags: Vec<_> = root.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "span", "b", "p"]);
    }
}
