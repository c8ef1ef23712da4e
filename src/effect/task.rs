//! Task - a deferred, memoized, possibly failing asynchronous computation.
//!
//! A [`Task`] describes work without doing it. Nothing runs until
//! [`Task::run`] is awaited; the outcome is then normalized into an
//! [`Either<TaskError, A>`] and cached, so the thunk executes at most once
//! per task no matter how many combinators or callers share it.
//!
//! # State machine
//!
//! ```text
//! Pending --run()--> Running --thunk settles--> Settled(Either)
//! ```
//!
//! A settled task never re-enters `Pending`. Concurrent first runs are
//! serialized by a [`tokio::sync::OnceCell`]: one caller drives the thunk,
//! the others wait for its outcome.
//!
//! # Failure semantics
//!
//! Errors returned by thunks, and panics raised by thunks or by the
//! functions passed to [`map`](Task::map) and [`chain`](Task::chain), are
//! caught at the task boundary and surface as `Left`. Awaiting `run` never
//! panics.
//!
//! # Examples
//!
//! ```rust
//! use functional_io::control::Either;
//! use functional_io::effect::{Task, TaskError};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let parsed = Task::wrap_sync(|| "21".parse::<i32>().map_err(|e| TaskError::from(e.to_string())))
//!     .map(|n| n * 2);
//! assert_eq!(parsed.run().await, Either::Right(42));
//!
//! let failed = Task::<i32>::wrap_sync(|| -> Result<i32, TaskError> { Err("boom".into()) });
//! assert_eq!(failed.run().await, Either::Left(TaskError::from("boom")));
//! # });
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use smallvec::SmallVec;
use tokio::sync::OnceCell;

use super::error::TaskError;
use super::settle::Settle;
use crate::control::{Either, Pair, Step};
use crate::typeclass::Semigroup;

type Thunk<A> = Box<dyn FnOnce() -> BoxFuture<'static, Either<TaskError, A>> + Send>;

/// Inline capacity for the partial tasks collected by `chain_rec`.
const INLINE_PARTIALS: usize = 8;

struct TaskState<A> {
    thunk: Mutex<Option<Thunk<A>>>,
    outcome: OnceCell<Either<TaskError, A>>,
}

/// A lazily evaluated, memoized computation settling into
/// `Either<TaskError, A>`.
///
/// Cloning a task is cheap and the clone shares the memoized outcome.
/// `A` must be `Clone` because every `run` hands out its own copy of the
/// cached value.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use functional_io::control::Either;
/// use functional_io::effect::Task;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let task = Task::defer(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
///
/// assert_eq!(task.run().await, Either::Right(1));
/// assert_eq!(task.run().await, Either::Right(1));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// # });
/// ```
pub struct Task<A> {
    state: Arc<TaskState<A>>,
    label: Arc<str>,
}

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            label: Arc::clone(&self.label),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Task<A>
where
    A: Clone + Send + Sync + 'static,
{
    fn from_thunk(label: impl Into<Arc<str>>, thunk: Thunk<A>) -> Self {
        Self {
            state: Arc::new(TaskState {
                thunk: Mutex::new(Some(thunk)),
                outcome: OnceCell::new(),
            }),
            label: label.into(),
        }
    }

    fn settled(label: &str, outcome: Either<TaskError, A>) -> Self {
        Self {
            state: Arc::new(TaskState {
                thunk: Mutex::new(None),
                outcome: OnceCell::new_with(Some(outcome)),
            }),
            label: Arc::from(label),
        }
    }

    /// Creates a task from an async thunk that already speaks
    /// `Either<TaskError, A>`.
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Either<TaskError, A>> + Send + 'static,
    {
        Self::from_thunk("Task", Box::new(move || thunk().boxed()))
    }

    /// A task that always succeeds with `value`.
    pub fn of(value: A) -> Self {
        Self::settled("Task.of", Either::Right(value))
    }

    /// A task that always fails with `error`.
    pub fn fail(error: impl Into<TaskError>) -> Self {
        Self::settled("Task.fail", Either::Left(error.into()))
    }

    /// Wraps an async thunk whose output is normalized through [`Settle`].
    ///
    /// An `Either` output passes through unchanged; a `Result` becomes
    /// `Right` on `Ok` and `Left` on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::effect::{Task, TaskError};
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let task = Task::wrap(|| async { Ok::<_, std::io::Error>(7) });
    /// assert_eq!(task.run().await, Either::Right(7));
    ///
    /// let rejected = Task::<i32>::wrap(|| async { Err::<i32, _>("rejected") });
    /// assert_eq!(rejected.run().await, Either::Left(TaskError::from("rejected")));
    /// # });
    /// ```
    pub fn wrap<F, Fut, S>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = S> + Send + 'static,
        S: Settle<A>,
    {
        Self::from_thunk(
            "Task(wrap)",
            Box::new(move || async move { thunk().await.settle() }.boxed()),
        )
    }

    /// Wraps a synchronous thunk whose output is normalized through
    /// [`Settle`].
    pub fn wrap_sync<F, S>(thunk: F) -> Self
    where
        F: FnOnce() -> S + Send + 'static,
        S: Settle<A>,
    {
        Self::from_thunk(
            "Task(wrap_sync)",
            Box::new(move || async move { thunk().settle() }.boxed()),
        )
    }

    /// Defers a thunk producing a plain value; it always settles `Right`
    /// unless it panics.
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self::from_thunk(
            "Task(defer)",
            Box::new(move || async move { Either::<TaskError, A>::Right(thunk()) }.boxed()),
        )
    }

    /// Adopts a future producing a plain value.
    ///
    /// The future is not polled until the task runs.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_thunk(
            "Task(future)",
            Box::new(move || future.map(Either::<TaskError, A>::Right).boxed()),
        )
    }

    /// Returns a handle sharing this task's outcome under a new label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::effect::Task;
    ///
    /// let task = Task::defer(|| 1).named("read_config").map(|n| n + 1);
    /// assert_eq!(task.to_string(), "Task(read_config).map");
    /// ```
    #[must_use]
    pub fn named(&self, name: &str) -> Self {
        Self {
            state: Arc::clone(&self.state),
            label: Arc::from(format!("Task({name})")),
        }
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs the task, or returns its memoized outcome.
    ///
    /// The first caller drives the thunk; concurrent callers wait for the
    /// same outcome. Dropping the first caller's future mid-flight abandons
    /// the thunk, and later runs settle with
    /// [`TaskError::AlreadyConsumed`].
    pub async fn run(&self) -> Either<TaskError, A> {
        self.state
            .outcome
            .get_or_init(|| self.settle())
            .await
            .clone()
    }

    /// Runs the task and converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` side of the outcome.
    pub async fn run_result(&self) -> Result<A, TaskError> {
        self.run().await.into()
    }

    /// Returns `true` once the outcome is cached.
    pub fn is_settled(&self) -> bool {
        self.state.outcome.initialized()
    }

    /// The composed label, such as `Task(wrap).map.chain`.
    pub fn label(&self) -> &str {
        &self.label
    }

    async fn settle(&self) -> Either<TaskError, A> {
        let thunk = self.state.thunk.lock().take();
        let Some(thunk) = thunk else {
            return Either::Left(TaskError::AlreadyConsumed {
                label: self.label.to_string(),
            });
        };

        tracing::trace!(task = %self.label, "running task");
        let outcome = match AssertUnwindSafe(async move { thunk().await })
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(task = %self.label, panic = %message, "task panicked");
                Either::Left(TaskError::Panicked(message))
            }
        };
        tracing::trace!(task = %self.label, success = outcome.is_right(), "task settled");
        outcome
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    fn derive<B, F, Fut>(&self, suffix: &str, continuation: F) -> Task<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(Self) -> Fut + Send + 'static,
        Fut: Future<Output = Either<TaskError, B>> + Send + 'static,
    {
        let source = self.clone();
        Task::from_thunk(
            format!("{}.{suffix}", self.label),
            Box::new(move || continuation(source).boxed()),
        )
    }

    /// Applies `function` to the success value.
    ///
    /// A panic inside `function` settles the new task as
    /// [`TaskError::Panicked`].
    pub fn map<B, F>(&self, function: F) -> Task<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        self.derive("map", move |source| async move { source.run().await.map(function) })
    }

    /// Applies a fallible `function` to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::effect::{Task, TaskError};
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let task = Task::of("x".to_string()).try_map(|text| text.parse::<u8>());
    /// assert!(task.run().await.is_left());
    /// # });
    /// ```
    pub fn try_map<B, F, S>(&self, function: F) -> Task<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> S + Send + 'static,
        S: Settle<B>,
    {
        self.derive("try_map", move |source| async move {
            source.run().await.chain(|value| function(value).settle())
        })
    }

    /// Sequences a dependent task.
    ///
    /// The task returned by `function` does not start until this one
    /// settles, and `function` is never called on failure.
    pub fn chain<B, F>(&self, function: F) -> Task<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> Task<B> + Send + 'static,
    {
        self.derive("chain", move |source| async move {
            match source.run().await {
                Either::Left(error) => Either::Left(error),
                Either::Right(value) => function(value).run().await,
            }
        })
    }

    /// Applies the function produced by `function` to this task's value.
    ///
    /// Both tasks run concurrently; no relative order is guaranteed. When
    /// both fail, this task's error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::Either;
    /// use functional_io::effect::Task;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let double: Task<fn(i32) -> i32> = Task::of(|n| n * 2);
    /// assert_eq!(Task::of(21).ap(&double).run().await, Either::Right(42));
    /// # });
    /// ```
    pub fn ap<B, F>(&self, function: &Task<F>) -> Task<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(A) -> B + Clone + Send + Sync + 'static,
    {
        let function = function.clone();
        self.derive("ap", move |source| async move {
            let (value, applied) = tokio::join!(source.run(), function.run());
            value.ap(applied)
        })
    }

    /// Runs both tasks concurrently and combines their values.
    pub fn map2<B, C, F>(&self, other: &Task<B>, function: F) -> Task<C>
    where
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        F: FnOnce(A, B) -> C + Send + 'static,
    {
        let other = other.clone();
        self.derive("map2", move |source| async move {
            let (first, second) = tokio::join!(source.run(), other.run());
            first.chain(|first| second.map(|second| function(first, second)))
        })
    }

    /// Drives a trampoline that concatenates partial results onto this task.
    ///
    /// When the returned task runs, `step` is called with `initial`, then
    /// with each next cursor, until it returns `Done`. Every
    /// `Loop(Pair(next_cursor, partial))` contributes `partial`. This task's
    /// value is then concatenated with each partial's value in order. The
    /// first failure stops the chain, and `step` is never called when this
    /// task fails. The `Done` payload only ends the loop.
    ///
    /// The partials run one after another, and the call depth stays the
    /// same however many iterations there are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::control::{Either, Pair, Step};
    /// use functional_io::effect::Task;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let countdown = Task::of("go:".to_string()).chain_rec(
    ///     |n: u32| {
    ///         if n == 0 {
    ///             Step::Done(())
    ///         } else {
    ///             Step::Loop(Pair::new(n - 1, Task::of(n.to_string())))
    ///         }
    ///     },
    ///     3,
    /// );
    /// assert_eq!(countdown.run().await, Either::Right("go:321".to_string()));
    /// # });
    /// ```
    pub fn chain_rec<C, D, F>(&self, mut step: F, initial: C) -> Self
    where
        A: Semigroup,
        C: Send + 'static,
        D: Send + 'static,
        F: FnMut(C) -> Step<Pair<C, Self>, D> + Send + 'static,
    {
        self.derive("chain_rec", move |source| async move {
            let mut accumulator = source.run().await;
            if accumulator.is_left() {
                return accumulator;
            }

            let mut partials: SmallVec<[Self; INLINE_PARTIALS]> = SmallVec::new();
            let mut cursor = initial;
            while let Step::Loop(Pair { first, second }) = step(cursor) {
                partials.push(second);
                cursor = first;
            }
            tracing::trace!(task = %source.label, partials = partials.len(), "trampoline unrolled");

            for partial in partials {
                accumulator = match accumulator {
                    Either::Right(value) => partial.run().await.map(|next| value.concat(next)),
                    failed @ Either::Left(_) => return failed,
                };
            }
            accumulator
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

// =============================================================================
// Formatting
// =============================================================================

impl<A> fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.label)
    }
}

impl<A: fmt::Debug> fmt::Debug for Task<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Task")
            .field("label", &self.label)
            .field("outcome", &self.state.outcome.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Task<String>: Send, Sync, Clone);
