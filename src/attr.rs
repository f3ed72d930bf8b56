//! Attribute system for markup elements
//!
//! - Direct `Vec<(CompactString, CompactString)>` for attributes
//! - No wrapper types; order of insertion is rendering order

use compact_str::CompactString;

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(CompactString, CompactString)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<CompactString>);

    /// Check whether the space-separated `class` attribute contains `class`
    fn has_class(&self, class: &str) -> bool;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.set_attr("class", "diff-row diff-added");
        attrs.set_attr("data-line", "3");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("data-line"), Some("3"));
        assert_eq!(attrs.get_attr("href"), None);
        assert!(attrs.has_attr("class"));

        // Update existing
        attrs.set_attr("data-line", "4");
        assert_eq!(attrs.get_attr("data-line"), Some("4"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_has_class() {
        let mut attrs: Attrs = Vec::new();
        assert!(!attrs.has_class("diff-row"));

        attrs.set_attr("class", "diff-row  diff-added");
        assert!(attrs.has_class("diff-row"));
        assert!(attrs.has_class("diff-added"));
        assert!(!attrs.has_class("diff"));
    }
}
