//! DOM Tree (arena-based allocation)

use crate::{DomError, Element, ElementId};

/// Arena-based element tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Element>,
}

impl DomTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag));
        id
    }

    /// Get an element by ID
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable element by ID
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of elements in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent. Rejects attachments that would make the tree cyclic.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::UnknownElement(parent));
        }
        if self.get(child).is_none() {
            return Err(DomError::UnknownElement(child));
        }

        // The parent chain is the only path that could close a cycle.
        if parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::WouldCycle { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.0 as usize].parent {
            self.nodes[old_parent.0 as usize]
                .children
                .retain(|c| *c != child);
        }

        self.nodes[child.0 as usize].parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
        tracing::trace!("appended {:?} under {:?}", child, parent);
        Ok(())
    }

    /// Set an attribute on an element
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) -> Result<(), DomError> {
        let el = self.get_mut(id).ok_or(DomError::UnknownElement(id))?;
        el.set_attr(name, value);
        Ok(())
    }

    /// Get an attribute value
    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attr(name))
    }

    /// The id attribute of an element
    pub fn element_id(&self, id: ElementId) -> Option<&str> {
        self.get(id).and_then(Element::id)
    }

    /// Check for a class on an element
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    /// Parent of an element
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(Element::parent)
    }

    /// Strict ancestors of an element, nearest first
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Find the first element (in document order) whose id attribute is `needle`
    pub fn element_by_id(&self, needle: &str) -> Option<ElementId> {
        let roots = (0..self.nodes.len() as u32)
            .map(ElementId)
            .filter(|id| self.nodes[id.0 as usize].parent.is_none());

        for root in roots {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                let el = &self.nodes[id.0 as usize];
                if el.id() == Some(needle) {
                    return Some(id);
                }
                // Push in reverse so the first child is visited first.
                stack.extend(el.children.iter().rev());
            }
        }
        None
    }
}

/// Iterator over strict ancestors, nearest first
pub struct Ancestors<'tree> {
    tree: &'tree DomTree,
    next: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> (DomTree, ElementId, ElementId, ElementId) {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        let mid = tree.create_element("section");
        let leaf = tree.create_element("span");
        tree.append_child(root, mid).unwrap();
        tree.append_child(mid, leaf).unwrap();
        (tree, root, mid, leaf)
    }

    #[test]
    fn test_append_child() {
        let (tree, root, mid, leaf) = small_tree();

        assert_eq!(tree.parent(mid), Some(root));
        assert_eq!(tree.parent(leaf), Some(mid));
        assert_eq!(tree.get(root).unwrap().children(), &[mid]);
    }

    #[test]
    fn test_reparent_detaches() {
        let (mut tree, root, mid, leaf) = small_tree();

        tree.append_child(root, leaf).unwrap();

        assert_eq!(tree.parent(leaf), Some(root));
        assert!(tree.get(mid).unwrap().children().is_empty());
        assert_eq!(tree.get(root).unwrap().children(), &[mid, leaf]);
    }

    #[test]
    fn test_append_rejects_cycles() {
        let (mut tree, root, mid, leaf) = small_tree();

        assert!(matches!(
            tree.append_child(leaf, root),
            Err(DomError::WouldCycle { .. })
        ));
        assert!(matches!(
            tree.append_child(mid, mid),
            Err(DomError::WouldCycle { .. })
        ));
    }

    #[test]
    fn test_append_unknown_element() {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");

        assert!(matches!(
            tree.append_child(root, ElementId(99)),
            Err(DomError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let (tree, root, mid, leaf) = small_tree();

        let chain: Vec<ElementId> = tree.ancestors(leaf).collect();
        assert_eq!(chain, vec![mid, root]);
        assert_eq!(tree.ancestors(root).count(), 0);
    }

    #[test]
    fn test_element_by_id() {
        let (mut tree, _root, mid, leaf) = small_tree();
        tree.set_attr(mid, "id", "content").unwrap();
        tree.set_attr(leaf, "id", "label").unwrap();

        assert_eq!(tree.element_by_id("content"), Some(mid));
        assert_eq!(tree.element_by_id("label"), Some(leaf));
        assert_eq!(tree.element_by_id("missing"), None);
    }

    #[test]
    fn test_element_by_id_document_order() {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        let first = tree.create_element("p");
        let second = tree.create_element("p");
        tree.append_child(root, first).unwrap();
        tree.append_child(root, second).unwrap();
        tree.set_attr(first, "id", "dup").unwrap();
        tree.set_attr(second, "id", "dup").unwrap();

        assert_eq!(tree.element_by_id("dup"), Some(first));
    }
}
