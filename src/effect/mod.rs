//! Deferred computations.
//!
//! - [`Task`]: a lazy, memoized computation that settles into
//!   `Either<TaskError, A>`
//! - [`TaskError`]: every failure a task can settle with
//! - [`Settle`]: how wrapped thunk outputs become task outcomes
//! - [`Executor`] and [`RuntimeConfig`]: an owned runtime for synchronous
//!   callers
//!
//! # Examples
//!
//! ```rust
//! use functional_io::control::Either;
//! use functional_io::effect::{Executor, RuntimeConfig, Task, TaskError};
//!
//! let executor = Executor::new(RuntimeConfig::current_thread()).unwrap();
//!
//! let pipeline = Task::of(4)
//!     .chain(|n| Task::wrap_sync(move || if n > 0 { Ok(n * 10) } else { Err("negative") }))
//!     .map(|n| n + 2);
//! assert_eq!(executor.block_on(&pipeline), Either::Right(42));
//!
//! let boom = Task::<i32>::wrap_sync(|| -> Result<i32, TaskError> { Err("boom".into()) });
//! assert_eq!(executor.block_on(&boom), Either::Left(TaskError::from("boom")));
//! ```

mod error;
mod runtime;
mod settle;
mod task;

pub use error::TaskError;
pub use runtime::{Executor, Flavor, RuntimeConfig};
pub use settle::Settle;
pub use task::Task;
