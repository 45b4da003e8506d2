//! Vane Scheduler
//!
//! Single-threaded cooperative job queue. Framework work (render passes,
//! deferred callbacks, async completions) is spawned as jobs and drained in
//! FIFO order. A job failure surfaces through the registered error hook;
//! it never aborts the drain and never propagates to the caller.

use std::collections::VecDeque;
use std::fmt;

type Job = Box<dyn FnOnce() -> Result<(), JobError>>;
type ErrorHook = Box<dyn FnMut(&JobError)>;

/// Error surfaced by a failed job
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct JobError {
    message: String,
    stack: String,
}

impl JobError {
    /// Create an error with no stack trace
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            stack: String::new(),
        }
    }

    /// Create an error carrying a captured stack trace
    pub fn with_stack(message: &str, stack: &str) -> Self {
        Self {
            message: message.to_string(),
            stack: stack.to_string(),
        }
    }

    /// Error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Captured stack trace (may be empty)
    pub fn stack(&self) -> &str {
        &self.stack
    }
}

/// Cooperative job scheduler
#[derive(Default)]
pub struct Scheduler {
    queue: VecDeque<Job>,
    error_hook: Option<ErrorHook>,
}

impl Scheduler {
    /// Create an idle scheduler with no hook registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a job
    pub fn spawn(&mut self, job: impl FnOnce() -> Result<(), JobError> + 'static) {
        self.queue.push_back(Box::new(job));
    }

    /// Drain the queue in spawn order. Failed jobs are reported to the
    /// error hook and draining continues. Returns the number of jobs run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut executed = 0;
        while let Some(job) = self.queue.pop_front() {
            executed += 1;
            if let Err(err) = job() {
                match self.error_hook.as_mut() {
                    Some(hook) => hook(&err),
                    None => tracing::warn!("unhandled job error: {}", err),
                }
            }
        }
        executed
    }

    /// Register the error hook, replacing any previous one.
    ///
    /// The hook observes errors only; it cannot cancel or retry the job
    /// that produced them.
    pub fn set_error_hook(&mut self, hook: impl FnMut(&JobError) + 'static) {
        self.error_hook = Some(Box::new(hook));
    }

    /// Deregister the error hook
    pub fn clear_error_hook(&mut self) {
        self.error_hook = None;
    }

    /// Check whether an error hook is registered
    pub fn has_error_hook(&self) -> bool {
        self.error_hook.is_some()
    }

    /// Number of queued jobs
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Check if no jobs are queued
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.queue.len())
            .field("error_hook", &self.error_hook.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_jobs_run_in_spawn_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();

        for n in 0..3 {
            let order = Rc::clone(&order);
            sched.spawn(move || {
                order.borrow_mut().push(n);
                Ok(())
            });
        }

        assert_eq!(sched.pending(), 3);
        assert_eq!(sched.run_until_idle(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(sched.is_idle());
    }

    #[test]
    fn test_failed_job_reaches_hook() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();

        let sink = Rc::clone(&seen);
        sched.set_error_hook(move |err| sink.borrow_mut().push(err.message().to_string()));

        sched.spawn(|| Err(JobError::new("render failed")));
        sched.run_until_idle();

        assert_eq!(*seen.borrow(), vec!["render failed".to_string()]);
    }

    #[test]
    fn test_failure_does_not_stop_drain() {
        let ran = Rc::new(RefCell::new(0));
        let mut sched = Scheduler::new();
        sched.set_error_hook(|_| {});

        sched.spawn(|| Err(JobError::new("boom")));
        let counter = Rc::clone(&ran);
        sched.spawn(move || {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        assert_eq!(sched.run_until_idle(), 2);
        assert_eq!(*ran.borrow(), 1);
    }

    #[test]
    fn test_no_hook_is_not_fatal() {
        let mut sched = Scheduler::new();
        sched.spawn(|| Err(JobError::new("dropped on the floor")));

        assert_eq!(sched.run_until_idle(), 1);
    }

    #[test]
    fn test_hook_lifecycle() {
        let mut sched = Scheduler::new();
        assert!(!sched.has_error_hook());

        sched.set_error_hook(|_| {});
        assert!(sched.has_error_hook());

        sched.clear_error_hook();
        assert!(!sched.has_error_hook());
    }

    #[test]
    fn test_job_error_stack() {
        let err = JobError::with_stack("oops", "at render\nat flush");

        assert_eq!(err.message(), "oops");
        assert_eq!(err.stack(), "at render\nat flush");
        assert_eq!(err.to_string(), "oops");
    }
}
