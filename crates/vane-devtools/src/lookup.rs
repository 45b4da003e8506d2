//! Numeric shorthands
//!
//! The framework generates element ids as `vane-<N>`. During an interactive
//! session it is faster to type the number than to chase down the element
//! handle, so these helpers compose the id and delegate to the resolvers.

use crate::resolve::{resolve_view, ResolveError};
use vane_dom::DomTree;
use vane_views::{Controller, View, ViewFilter, ViewRegistry, GENERATED_ID_PREFIX};

/// Resolve the view for generated element id `vane-<n>`
pub fn view_by_number<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    n: u32,
) -> Result<&'reg View, ResolveError> {
    let id = format!("{}{}", GENERATED_ID_PREFIX, n);
    let element = dom
        .element_by_id(&id)
        .ok_or(ResolveError::NoSuchElementId(id))?;
    resolve_view(dom, registry, element, ViewFilter::Any)
}

/// Resolve the controller for generated element id `vane-<n>`
pub fn controller_by_number<'reg>(
    dom: &DomTree,
    registry: &'reg ViewRegistry,
    n: u32,
) -> Result<&'reg Controller, ResolveError> {
    Ok(view_by_number(dom, registry, n)?.controller())
}
