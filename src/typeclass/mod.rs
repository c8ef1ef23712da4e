//! Type class traits for functional programming abstractions.
//!
//! Two families live here:
//!
//! - Polymorphic type classes built on [`TypeConstructor`] (GAT-based HKT
//!   emulation): [`Functor`], [`Applicative`], [`Monad`], [`Foldable`],
//!   [`Traversable`] and [`Bifunctor`]. [`Either`](crate::control::Either)
//!   implements all of them.
//! - Monomorphic type classes for containers whose element type is fixed:
//!   [`MonoFunctor`], [`MonoApplicative`], [`MonoMonad`], [`Comonad`] and
//!   [`MonoBifunctor`]. The
//!   domain values in [`types`](crate::types) implement these.
//!
//! Algebraic structures shared by both: [`Semigroup`], [`Monoid`], [`Group`],
//! [`Alt`] and [`Plus`].
//!
//! # Examples
//!
//! ```rust
//! use functional_io::typeclass::{Group, Monoid, Semigroup};
//! use functional_io::types::Buffer;
//!
//! let buffer = Buffer::new(vec![65, 66, 67, 68, 69]);
//! let joined = buffer.concat(Buffer::new(vec![70, 71, 72, 73, 74]));
//! assert_eq!(joined.raw(), &[65, 66, 67, 68, 69, 70, 71, 72, 73, 74]);
//!
//! assert_eq!(Buffer::empty().invert(), Buffer::empty());
//! ```

mod alt;
mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod group;
mod higher;
mod monad;
mod mono;
mod monoid;
mod semigroup;
mod traversable;

pub use alt::{Alt, Plus};
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use group::Group;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use mono::{Comonad, MonoApplicative, MonoBifunctor, MonoFunctor, MonoMonad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
