//! Error type for settled tasks.
//!
//! Every failure that reaches [`Task::run`](super::Task::run) is normalized
//! into a [`TaskError`]: errors returned by thunks, I/O failures from the
//! collaborators, and panics caught at the task boundary. The type is
//! `Clone` because a memoized outcome is handed to every caller of `run`.

use std::error::Error;
use std::io;
use std::sync::Arc;

/// A failure captured at the task boundary.
///
/// # Examples
///
/// ```rust
/// use functional_io::effect::TaskError;
///
/// let error = TaskError::from("boom");
/// assert_eq!(error.to_string(), "boom");
///
/// let not_found = TaskError::not_found("/tmp/missing");
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.to_string(), "/tmp/missing: not found");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskError {
    /// A plain failure message.
    #[error("{0}")]
    Message(String),

    /// An error raised by an external collaborator.
    #[error(transparent)]
    Failed(Arc<dyn Error + Send + Sync>),

    /// An I/O error from a filesystem or network collaborator.
    #[error(transparent)]
    Io(Arc<io::Error>),

    /// A path that a collaborator expected to exist is absent.
    #[error("{path}: not found")]
    NotFound {
        /// The missing path.
        path: String,
    },

    /// A resource id that has no open handle.
    #[error("bad resource id: {rid}")]
    BadResource {
        /// The unknown id.
        rid: u32,
    },

    /// A thunk or a mapping function panicked.
    #[error("task panicked: {0}")]
    Panicked(String),

    /// The thunk was taken by a run that was dropped before it settled.
    #[error("{label}: thunk already consumed by an abandoned run")]
    AlreadyConsumed {
        /// The label of the task whose run was abandoned.
        label: String,
    },
}

impl TaskError {
    /// Wraps any error as [`TaskError::Failed`].
    pub fn failed<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failed(Arc::new(error))
    }

    /// Builds [`TaskError::NotFound`] for `path`.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Returns `true` for a missing path, whether reported directly or
    /// through an I/O error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(error) => error.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Returns `true` if the failure came from a caught panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl PartialEq for TaskError {
    /// Errors compare by variant and rendered message.
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.to_string() == other.to_string()
    }
}

impl From<io::Error> for TaskError {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl From<String> for TaskError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for TaskError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<crate::codec::CodecError> for TaskError {
    fn from(error: crate::codec::CodecError) -> Self {
        Self::failed(error)
    }
}
