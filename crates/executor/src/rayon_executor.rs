use inkpress_traits::Executor;
use rayon::prelude::*;

/// Executor backed by rayon's global work-stealing thread pool.
///
/// `par_iter` collection preserves input order, so results line up with the
/// submitted items no matter which job finishes first.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonExecutor;

impl RayonExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        rayon::current_num_threads()
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}
