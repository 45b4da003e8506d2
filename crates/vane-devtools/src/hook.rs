//! Scheduler error hook
//!
//! Terminal observation point for job failures: the hook logs the error's
//! message and stack to the shared console and does nothing else. No
//! recovery, no retry, no re-throw.

use crate::Console;
use std::cell::RefCell;
use std::rc::Rc;
use vane_sched::Scheduler;

/// Register a hook that logs every surfaced job error as two warning
/// lines: the message, then the stack. Replaces any previous hook.
pub fn install_error_hook(scheduler: &mut Scheduler, console: Rc<RefCell<Console>>) {
    scheduler.set_error_hook(move |err| {
        // Single-threaded drain: no other console borrow is live here.
        let mut console = console.borrow_mut();
        console.warn(err.message());
        console.warn(err.stack());
    });
}

/// Deregister the error hook, for shutdown
pub fn remove_error_hook(scheduler: &mut Scheduler) {
    scheduler.clear_error_hook();
}
