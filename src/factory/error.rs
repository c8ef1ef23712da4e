//! Construction errors raised by the type factory.
//!
//! These are programmer errors: they surface synchronously at the call site
//! that builds or folds a value and are never routed through a `Task`.

use thiserror::Error;

/// Errors raised while declaring, constructing or folding factory values.
///
/// # Examples
///
/// ```rust
/// use functional_io::factory::{FactoryError, factorize_type};
///
/// let point = factorize_type::<i32>("Point", &["x", "y"]).unwrap();
/// let error = point.construct(vec![1]).unwrap_err();
/// assert_eq!(error.to_string(), "Point: Expected 2 arguments, got 1.");
/// assert!(matches!(error, FactoryError::Arity { expected: 2, actual: 1, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The number of values does not match the declared fields.
    #[error("{type_name}: Expected {expected} arguments, got {actual}.")]
    Arity {
        /// The type (or `Type.Tag`) being constructed.
        type_name: String,
        /// Declared field count.
        expected: usize,
        /// Supplied value count.
        actual: usize,
    },

    /// A keyed record lacks one of the declared fields.
    #[error("{type_name}: Missing field: {field}")]
    MissingField {
        /// The type (or `Type.Tag`) being constructed.
        type_name: String,
        /// The first absent field in declaration order.
        field: String,
    },

    /// A field name was declared twice for the same shape.
    #[error("{type_name}: duplicate field name: {field}")]
    DuplicateField {
        /// The type (or `Type.Tag`) being declared.
        type_name: String,
        /// The repeated field name.
        field: String,
    },

    /// A variant tag was declared twice for the same sum type.
    #[error("{type_name}: duplicate variant tag: {tag}")]
    DuplicateVariant {
        /// The sum type being declared.
        type_name: String,
        /// The repeated tag.
        tag: String,
    },

    /// A fold was attempted without a handler for every declared variant.
    #[error("{type_name}: Constructors given to fold didn't include: {tag}")]
    IncompleteFold {
        /// The sum type being folded.
        type_name: String,
        /// The first declared tag without a handler.
        tag: String,
    },

    /// A tag that the sum type does not declare.
    #[error("{type_name} has no variant named {tag}")]
    UnknownVariant {
        /// The sum type.
        type_name: String,
        /// The unknown tag.
        tag: String,
    },

    /// A value of one factory type was handed to an operation of another.
    #[error("expected a value of type {expected}, got {found}")]
    TypeMismatch {
        /// The type the operation belongs to.
        expected: String,
        /// The type of the supplied value.
        found: String,
    },

    /// `fold` was called on a value of a product type.
    #[error("{type_name} is a product type and cannot be folded")]
    NotASumType {
        /// The product type.
        type_name: String,
    },
}
