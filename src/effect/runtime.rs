//! Explicitly owned tokio runtimes for synchronous callers.
//!
//! Tasks are plain futures and run on whatever runtime awaits them. Code
//! that lives outside async contexts builds an [`Executor`] from a
//! [`RuntimeConfig`] and drives tasks with [`Executor::block_on`]. The
//! executor owns its runtime and shuts it down when dropped; nothing is
//! stored in a process-wide static.
//!
//! # Examples
//!
//! ```rust
//! use functional_io::control::Either;
//! use functional_io::effect::{Executor, RuntimeConfig, Task};
//!
//! let executor = Executor::new(RuntimeConfig::default().with_worker_threads(2)).unwrap();
//! let task = Task::of(20).map(|n| n + 1);
//! assert_eq!(executor.block_on(&task), Either::Right(21));
//! ```

use std::io;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

use super::error::TaskError;
use super::task::Task;
use crate::control::Either;

/// Scheduler flavor for an [`Executor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// A work-stealing pool of worker threads.
    #[default]
    MultiThread,
    /// Everything runs on the thread calling `block_on`.
    CurrentThread,
}

/// Settings for building an [`Executor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Scheduler flavor.
    pub flavor: Flavor,
    /// Worker thread count for [`Flavor::MultiThread`]. Defaults to the
    /// number of logical CPUs.
    pub worker_threads: usize,
    /// Name given to worker threads.
    pub thread_name: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::MultiThread,
            worker_threads: num_cpus::get(),
            thread_name: "functional-io-worker".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// A single-threaded configuration.
    #[must_use]
    pub fn current_thread() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            worker_threads: 1,
            ..Self::default()
        }
    }

    /// Sets the worker thread count. Zero is raised to one.
    #[must_use]
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads.max(1);
        self
    }

    /// Sets the worker thread name.
    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }

    fn builder(&self) -> Builder {
        let mut builder = match self.flavor {
            Flavor::MultiThread => {
                let mut builder = Builder::new_multi_thread();
                builder.worker_threads(self.worker_threads.max(1));
                builder
            }
            Flavor::CurrentThread => Builder::new_current_thread(),
        };
        builder.thread_name(self.thread_name.clone()).enable_all();
        builder
    }
}

/// An owned tokio runtime that runs [`Task`]s to completion.
#[derive(Debug)]
pub struct Executor {
    runtime: Runtime,
}

impl Executor {
    /// Builds a runtime from `config`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while spawning the runtime's threads
    /// or drivers.
    pub fn new(config: RuntimeConfig) -> io::Result<Self> {
        tracing::debug!(
            flavor = ?config.flavor,
            worker_threads = config.worker_threads,
            thread_name = %config.thread_name,
            "building executor"
        );
        let runtime = config.builder().build()?;
        Ok(Self { runtime })
    }

    /// Blocks the current thread until `task` settles.
    ///
    /// Must not be called from inside an async context.
    pub fn block_on<A>(&self, task: &Task<A>) -> Either<TaskError, A>
    where
        A: Clone + Send + Sync + 'static,
    {
        self.runtime.block_on(task.run())
    }

    /// Starts `task` in the background and returns a handle to its outcome.
    pub fn spawn<A>(&self, task: &Task<A>) -> JoinHandle<Either<TaskError, A>>
    where
        A: Clone + Send + Sync + 'static,
    {
        let task = task.clone();
        self.runtime.spawn(async move { task.run().await })
    }

    /// A handle for spawning onto this executor from other threads.
    pub fn handle(&self) -> &Handle {
        self.runtime.handle()
    }

    /// Shuts the runtime down, waiting at most `timeout` for running work.
    pub fn shutdown_timeout(self, timeout: Duration) {
        tracing::debug!(?timeout, "shutting executor down");
        self.runtime.shutdown_timeout(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[case(RuntimeConfig::default())]
    #[case(RuntimeConfig::current_thread())]
    #[case(RuntimeConfig::default().with_worker_threads(1).with_thread_name("io"))]
    fn block_on_settles_the_task(#[case] config: RuntimeConfig) {
        let executor = Executor::new(config).unwrap();
        let task = Task::of(2).chain(|n| Task::defer(move || n * 21));
        assert_eq!(executor.block_on(&task), Either::Right(42));
    }

    #[test]
    fn default_uses_every_cpu() {
        assert_eq!(RuntimeConfig::default().worker_threads, num_cpus::get());
    }

    #[test]
    fn zero_workers_is_raised_to_one() {
        assert_eq!(RuntimeConfig::default().with_worker_threads(0).worker_threads, 1);
    }

    #[test]
    fn spawned_and_blocked_runs_share_the_outcome() {
        let executor = Executor::new(RuntimeConfig::default().with_worker_threads(2)).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task = Task::defer(move || counter.fetch_add(1, Ordering::SeqCst));

        let spawned = executor.spawn(&task);
        let blocked = executor.block_on(&task);
        let joined = executor.runtime.block_on(spawned).unwrap();

        assert_eq!(blocked, joined);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        executor.shutdown_timeout(Duration::from_secs(1));
    }
}
