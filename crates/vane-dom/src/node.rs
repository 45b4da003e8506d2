//! Element node
//!
//! Tag name plus attributes, with the `id` attribute and class list cached
//! because those are the hot lookups during view resolution.

use crate::ElementId;

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element node
#[derive(Debug)]
pub struct Element {
    /// Tag name (lowercase)
    tag: String,
    /// Attributes in set order
    attrs: Vec<Attribute>,
    /// Cached id attribute (very common lookup)
    id: Option<String>,
    /// Cached class list
    classes: Vec<String>,
    /// Parent element (None if detached or root)
    pub(crate) parent: Option<ElementId>,
    /// Children in insertion order
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, keeping the id/class caches in sync
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }

        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => {
                self.classes = value.split_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }
    }

    /// The id attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check for a class in the class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Parent element
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_caches_id() {
        let mut el = Element::new("div");
        assert_eq!(el.id(), None);

        el.set_attr("id", "sidebar");
        assert_eq!(el.id(), Some("sidebar"));
        assert_eq!(el.attr("id"), Some("sidebar"));
    }

    #[test]
    fn test_set_attr_caches_classes() {
        let mut el = Element::new("div");
        el.set_attr("class", "vane-view active");

        assert!(el.has_class("vane-view"));
        assert!(el.has_class("active"));
        assert!(!el.has_class("hidden"));
    }

    #[test]
    fn test_set_attr_replaces_existing() {
        let mut el = Element::new("span");
        el.set_attr("class", "old");
        el.set_attr("class", "new");

        assert!(!el.has_class("old"));
        assert!(el.has_class("new"));
        assert_eq!(el.attr("class"), Some("new"));
    }

    #[test]
    fn test_tag_lowercased() {
        let el = Element::new("DIV");
        assert_eq!(el.tag(), "div");
    }
}
