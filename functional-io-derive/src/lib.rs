//! Derive macro wiring Rust types into the functional-io type factory.
//!
//! # Available Derive Macros
//!
//! - [`Factorized`]: Implements `TypeRepresentation` and the canonical
//!   `Display` form for structs and enums, plus `is_<variant>` predicates
//!   for enums
//!
//! # Example
//!
//! ```rust,ignore
//! use functional_io::Factorized;
//!
//! #[derive(Debug, Factorized)]
//! enum Shape {
//!     Circle(f64),
//!     Point,
//! }
//!
//! assert_eq!(Shape::Circle(1.5).to_string(), "Shape.Circle(1.5)");
//! assert_eq!(Shape::Point.to_string(), "Shape.Point");
//! assert!(Shape::Point.is_point());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod factorized;

use proc_macro::TokenStream;

/// Derive macro registering a type with the functional-io type factory.
///
/// # Generated Code
///
/// - `impl functional_io::factory::TypeRepresentation` with the type name,
///   the declared variant tags and the field names of every shape
/// - `impl Display` rendering `TypeName(field, ...)` for structs and
///   `TypeName.Tag(field, ...)` or `TypeName.Tag` for enum variants, each
///   field formatted with `Debug`
/// - for enums, one `is_<variant>()` predicate per variant
///
/// # Attributes
///
/// - `#[factorized(name = "URL")]` overrides the serialized type name
///
/// # Example
///
/// ```rust,ignore
/// use functional_io::Factorized;
///
/// #[derive(Debug, Factorized)]
/// #[factorized(name = "URL")]
/// struct Url {
///     path: String,
/// }
///
/// let url = Url { path: "https://example.com".to_string() };
/// assert_eq!(url.to_string(), r#"URL("https://example.com")"#);
/// ```
#[proc_macro_derive(Factorized, attributes(factorized))]
pub fn derive_factorized(input: TokenStream) -> TokenStream {
    factorized::derive_factorized_impl(input)
}
