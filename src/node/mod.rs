//! Structured markup tree.
//!
//! Views build `Element` trees instead of HTML strings; the host chooses the
//! final serialization (see `render`).
//!
//! - `Element`: tag, attributes, children
//! - `Text`: escaped text content
//! - `Node`: either of the two

mod element;
mod text;

pub use element::Element;
pub use text::Text;

use smallvec::SmallVec;

/// Node in a markup tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
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
pub type Children = SmallVec<[Node; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_conversions() {
        let elem: Node = Element::new("div").into();
        assert!(elem.is_element());
        assert_eq!(elem.as_element().map(|e| e.tag.as_str()), Some("div"));
        assert!(elem.as_text().is_none());

        let text: Node = Text::new("hi").into();
        assert!(text.is_text());
        assert_eq!(text.as_text().map(|t| t.content.as_str()), Some("hi"));
    }
}
