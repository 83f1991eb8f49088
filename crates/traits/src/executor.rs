//! Execution strategy abstraction.
//!
//! Page rendering jobs are independent of each other, so the pipeline hands
//! them to an [`Executor`] and lets the implementation decide how much
//! parallelism to apply. Results are always returned in input order, which
//! is what lets callers rely on index-stable output regardless of which job
//! finishes first.

/// A strategy for executing a batch of independent jobs.
pub trait Executor {
    /// Execute `f` over every item, returning results in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Execute a fallible `f` over every item, returning results in input order.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// Number of jobs this executor may run concurrently.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Sequential executor: runs every job on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}
