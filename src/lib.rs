//! # functional-io
//!
//! Algebraic data types and a deferred, memoized [`Task`](effect::Task) for
//! composing I/O as pure values.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Alt, Foldable,
//!   Traversable, Semigroup/Monoid/Group, plus the monomorphic family
//!   (`MonoFunctor`, `MonoMonad`, `Comonad`, `MonoBifunctor`)
//! - **Type Factory**: runtime product and sum types, and
//!   `#[derive(Factorized)]` for the canonical `TypeName.Tag(fields)` rendering
//! - **Control Structures**: `Either`, `Step`, `Pair`
//! - **Effects**: `Task`, a lazy computation that runs at most once and
//!   settles into `Either<TaskError, A>`
//! - **Domain Values**: `Buffer`, `Resource`, `File`, `Directory`, `Url`,
//!   `Request`, `Response`
//! - **Collaborators**: filesystem operations and an injectable network
//!   transport, all returning tasks
//!
//! ## Feature Flags
//!
//! - `fs` (default): filesystem collaborators on `tokio::fs`
//! - `net` (default): `Transport` and `fetch`
//! - `serde`: `Serialize`/`Deserialize` for the domain values
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use functional_io::prelude::*;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let task = Task::of(Buffer::new(b"ABCDE".to_vec()))
//!     .map(|buffer| buffer.concat(Buffer::new(b"FGHIJ".to_vec())));
//!
//! assert_eq!(task.run().await, Either::Right(Buffer::new(b"ABCDEFGHIJ".to_vec())));
//! # });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as functional_io;

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, control structures, effects and domain
/// values.
///
/// # Usage
///
/// ```rust
/// use functional_io::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{TextCodec, Utf8Codec};
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::typeclass::*;
    pub use crate::types::*;
}

pub use functional_io_derive::Factorized;

pub mod codec;
pub mod control;
pub mod effect;
pub mod factory;
pub mod typeclass;
pub mod types;

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "net")]
pub mod net;
