//! Element-to-view resolution
//!
//! Walks from an element up to the view that owns it: the element's own id
//! is checked against the registry first; on a miss the walk steps to the
//! nearest ancestor tagged with the framework marker class and repeats.

use vane_dom::{DomTree, ElementId};
use vane_views::{Controller, Value, View, ViewFilter, ViewRegistry, MARKER_CLASS};

/// View resolution error
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("element {0:?} is not in the tree")]
    UnknownElement(ElementId),

    #[error("no element with id \"{0}\"")]
    NoSuchElementId(String),

    #[error("no view found at or above element {0:?}")]
    ViewNotFound(ElementId),
}

/// Resolve the view owning `element`.
///
/// If the element's own id attribute names a registered view whose kind
/// passes `filter`, that view is returned without any ancestor search.
/// Otherwise the walk moves to the nearest strict ancestor carrying
/// [`MARKER_CLASS`] and tries again. The ancestor chain is finite, so the
/// walk terminates with [`ResolveError::ViewNotFound`] when it runs out.
pub fn resolve_view<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    element: ElementId,
    filter: ViewFilter,
) -> Result<&'reg View, ResolveError> {
    if dom.get(element).is_none() {
        return Err(ResolveError::UnknownElement(element));
    }

    let mut current = element;
    loop {
        if let Some(id) = dom.element_id(current) {
            if let Some(view) = registry.get(id) {
                if filter.matches(view.kind()) {
                    return Ok(view);
                }
            }
        }

        match dom
            .ancestors(current)
            .find(|&a| dom.has_class(a, MARKER_CLASS))
        {
            Some(marker) => current = marker,
            None => return Err(ResolveError::ViewNotFound(element)),
        }
    }
}

/// Resolve the controller of the view owning `element`
pub fn resolve_controller<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    element: ElementId,
) -> Result<&'reg Controller, ResolveError> {
    Ok(resolve_view(dom, registry, element, ViewFilter::Any)?.controller())
}

/// Resolve the content (displayed model) of the view owning `element`
pub fn resolve_content<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    element: ElementId,
) -> Result<Option<&'reg Value>, ResolveError> {
    Ok(resolve_view(dom, registry, element, ViewFilter::Any)?.content())
}

/// Resolve the context (evaluation scope) of the view owning `element`
pub fn resolve_context<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    element: ElementId,
) -> Result<Option<&'reg Value>, ResolveError> {
    Ok(resolve_view(dom, registry, element, ViewFilter::Any)?.context())
}
