pub mod cancel;
pub mod executor;

pub use cancel::CancelToken;
pub use executor::{Executor, SyncExecutor};
