//! Vane DevTools
//!
//! Debugging and inspection utilities for Vane applications.
//!
//! # Features
//! - Console sink with a bounded message buffer, mirrored to `tracing`
//! - Collection content logger for quick "what is in this list" checks
//! - Element-to-view resolution (own id first, then marker-class ancestors)
//! - Numeric shorthands for framework-generated element ids
//! - Scheduler error hook that logs message and stack of failed jobs
//!
//! # Example
//! ```rust,ignore
//! use vane_devtools::{resolve_view, Console};
//! use vane_views::ViewFilter;
//!
//! let view = resolve_view(&dom, &registry, clicked, ViewFilter::Any)?;
//! println!("owned by #{}", view.element_id());
//! ```

mod console;
mod hook;
mod lookup;
mod resolve;

pub use console::{log_contents, Console, LogEntry, LogLevel};
pub use hook::{install_error_hook, remove_error_hook};
pub use lookup::{controller_by_number, view_by_number};
pub use resolve::{
    resolve_content, resolve_context, resolve_controller, resolve_view, ResolveError,
};

// Re-export host-surface crates for interactive sessions
pub use vane_dom as dom;
pub use vane_sched as sched;
pub use vane_views as views;
