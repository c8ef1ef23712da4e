//! Normalization of thunk outputs into `Either<TaskError, A>`.

use super::error::TaskError;
use crate::control::Either;

/// An output a wrapped thunk may produce.
///
/// `Either` passes through with its `Left` converted into [`TaskError`];
/// `Result` maps `Ok` to `Right` and `Err` to `Left`. Thunks returning
/// plain values go through [`Task::defer`](super::Task::defer) instead.
///
/// # Examples
///
/// ```rust
/// use functional_io::control::Either;
/// use functional_io::effect::{Settle, TaskError};
///
/// let passed: Either<TaskError, i32> = Either::<&str, i32>::Left("nope").settle();
/// assert_eq!(passed, Either::Left(TaskError::from("nope")));
///
/// let lifted: Either<TaskError, i32> = Ok::<_, TaskError>(1).settle();
/// assert_eq!(lifted, Either::Right(1));
/// ```
pub trait Settle<A> {
    /// Converts the output into the task outcome.
    fn settle(self) -> Either<TaskError, A>;
}

impl<A, E> Settle<A> for Either<E, A>
where
    E: Into<TaskError>,
{
    #[inline]
    fn settle(self) -> Either<TaskError, A> {
        self.map_left(Into::into)
    }
}

impl<A, E> Settle<A> for Result<A, E>
where
    E: Into<TaskError>,
{
    #[inline]
    fn settle(self) -> Either<TaskError, A> {
        Either::from(self).map_left(Into::into)
    }
}
