//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Either<L, _>` as a type constructor directly.
//! [`TypeConstructor`] records the current inner type together with a GAT
//! that re-applies the same constructor to another type, which is enough to
//! express [`Functor`](super::Functor), [`Applicative`](super::Applicative)
//! and [`Monad`](super::Monad) generically.
//!
//! # Example
//!
//! ```rust
//! use functional_io::control::Either;
//! use functional_io::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let parsed: Either<String, i32> = Either::Right(7);
//! let relabeled: Option<Either<String, String>> = relabel(parsed);
//! assert!(relabeled.is_none());
//! ```

/// A trait representing a type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
