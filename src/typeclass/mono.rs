//! Type classes for containers with a fixed element type.
//!
//! A [`Buffer`](crate::types::Buffer) always holds bytes and a
//! [`Directory`](crate::types::Directory) always holds a path, so the
//! GAT-based [`Functor`](super::Functor) family does not fit them. The traits
//! here are their monomorphic counterparts: the mapped function must return
//! the same element type.
//!
//! # Laws
//!
//! The usual laws hold on the element:
//!
//! ```text
//! v.map(|x| x) == v
//! v.map(f).map(g) == v.map(|x| g(f(x)))
//! Self::of(x).ap(f) == Self::of(f(x))
//! v.ap(|x| x) == v
//! Self::of(x).chain(f) == f(x)
//! v.chain(Self::of) == v
//! v.chain(f).chain(g) == v.chain(|x| f(x).chain(g))
//! v.extend(|w| w.extract()) == v
//! ```
//!
//! Metadata (status, url, rid, path) is carried through unchanged by `map`,
//! `ap` and `chain` on the receiver's side; only [`MonoBifunctor::bimap`]
//! alters it.

/// A functor over a single, fixed element type.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::MonoFunctor;
/// use functional_io::types::Buffer;
///
/// let shouted = Buffer::new(b"hi".to_vec()).map(|raw| raw.to_ascii_uppercase());
/// assert_eq!(shouted, Buffer::new(b"HI".to_vec()));
/// ```
pub trait MonoFunctor: Sized {
    /// The element carried by the container.
    type Element;

    /// Replaces the element with `function(element)`.
    #[must_use]
    fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Element) -> Self::Element;
}

/// Application of a lifted function to a [`MonoFunctor`].
///
/// The function stands in for a container of the same type holding a
/// function. Variants that carry no element, such as a failed
/// [`Response`](crate::types::Response), pass through untouched.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::MonoApplicative;
/// use functional_io::types::{Headers, Response};
///
/// let ok = Response::ok(Headers::default(), b"a".to_vec()).ap(|raw| [raw, b"b".to_vec()].concat());
/// assert_eq!(ok.raw(), b"ab");
///
/// let missing = Response::not_found(Headers::default(), b"a".to_vec());
/// assert_eq!(missing.clone().ap(|_| Vec::new()), missing);
/// ```
pub trait MonoApplicative: MonoFunctor {
    /// Applies `function` to the element.
    #[must_use]
    fn ap<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Element) -> Self::Element;
}

/// Lifting and sequencing for [`MonoFunctor`]s.
pub trait MonoMonad: MonoApplicative {
    /// Builds the container around `element` with default metadata.
    fn of(element: Self::Element) -> Self;

    /// Feeds the element to `function` and returns its container.
    #[must_use]
    fn chain<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Element) -> Self;
}

/// The dual of [`MonoMonad`]: a current element can always be observed.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::Comonad;
/// use functional_io::types::Buffer;
///
/// let buffer = Buffer::new(vec![1, 2, 3]);
/// let summary = buffer.extend(|current| vec![current.raw().len() as u8]);
/// assert_eq!(summary.extract(), vec![3]);
/// ```
pub trait Comonad: MonoFunctor {
    /// Returns a copy of the current element.
    fn extract(&self) -> Self::Element;

    /// Replaces the element with the result of `function` applied to the
    /// whole container.
    #[must_use]
    fn extend<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self) -> Self::Element;
}

/// Independent mapping over metadata and payload.
///
/// # Examples
///
/// ```rust
/// use functional_io::typeclass::MonoBifunctor;
/// use functional_io::types::Resource;
///
/// let resource = Resource::new(vec![1], 3);
/// let moved = resource.bimap(|rid| rid + 1, |raw| [raw, vec![2]].concat());
/// assert_eq!(moved, Resource::new(vec![1, 2], 4));
/// ```
pub trait MonoBifunctor: MonoFunctor {
    /// The metadata that travels alongside the element.
    type Meta;

    /// Maps metadata and element independently.
    #[must_use]
    fn bimap<F, G>(self, meta_function: F, element_function: G) -> Self
    where
        F: FnOnce(Self::Meta) -> Self::Meta,
        G: FnOnce(Self::Element) -> Self::Element;

    /// Maps only the metadata.
    #[must_use]
    fn map_meta<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Meta) -> Self::Meta,
    {
        self.bimap(function, |element| element)
    }
}
