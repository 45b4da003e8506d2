//! Vane DOM - Element tree
//!
//! Arena-based element tree backing rendered Vane views. The inspection
//! utilities walk this tree upward to find the view owning an element.

mod node;
mod tree;

pub use node::{Attribute, Element};
pub use tree::{Ancestors, DomTree};

/// Element identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    /// Rebuild a handle from a raw arena index
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw arena index
    pub fn index(self) -> u32 {
        self.0
    }
}

/// DOM error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),

    #[error("appending {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },
}
