//! The type factory: product and sum types with a shared serialization form.
//!
//! The factory has two faces:
//!
//! - A runtime one for shapes only known at runtime:
//!   [`factorize_type`] declares a product type and [`factorize_sum_type`]
//!   (or [`SumTypeBuilder`]) a tagged union. Both validate eagerly and hand
//!   out immutable [`TaggedValue`]s.
//! - A static one for Rust types: `#[derive(Factorized)]` implements
//!   [`TypeRepresentation`] and the canonical `Display` form. Every domain
//!   value in this crate, as well as [`Either`](crate::control::Either) and
//!   [`Step`](crate::control::Step), is declared this way.
//!
//! Both render values identically:
//!
//! ```text
//! TypeName(field1, field2)    product values
//! TypeName.Tag(field1)        variants with fields
//! TypeName.Tag                zero-field variants
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_io::Factorized;
//! use functional_io::factory::TypeRepresentation;
//!
//! #[derive(Debug, Factorized)]
//! enum Light {
//!     Red,
//!     Blinking(u32),
//! }
//!
//! assert_eq!(Light::Red.to_string(), "Light.Red");
//! assert_eq!(Light::Blinking(500).to_string(), "Light.Blinking(500)");
//! assert_eq!(Light::VARIANTS, &["Red", "Blinking"]);
//! assert_eq!(Light::Blinking(1).tag(), Some("Blinking"));
//! assert!(Light::Red.is_red());
//! ```

mod error;
mod product;
mod sum;
mod value;

use std::fmt;

pub use error::FactoryError;
pub use product::{ProductType, factorize_type};
pub use sum::{SumType, SumTypeBuilder, factorize_sum_type};
pub use value::{FoldHandlers, TaggedValue};

/// Static description of a factory-declared Rust type.
///
/// Implemented by `#[derive(Factorized)]`.
pub trait TypeRepresentation {
    /// The serialized type name.
    const TYPE_NAME: &'static str;

    /// Declared variant tags in order. Empty for product types.
    const VARIANTS: &'static [&'static str];

    /// The variant tag of this value, or `None` for product types.
    fn tag(&self) -> Option<&'static str>;

    /// Field names of this value's shape in declaration order.
    ///
    /// Tuple fields are named by position (`"0"`, `"1"`, ...).
    fn field_names(&self) -> &'static [&'static str];

    /// The serialized type name of this value.
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    /// Returns `true` if `other` was declared under the same type name.
    fn is_same_type<T: TypeRepresentation + ?Sized>(&self, _other: &T) -> bool {
        Self::TYPE_NAME == T::TYPE_NAME
    }
}

/// Writes the canonical serialization of a factory value.
///
/// Fields are rendered with their `Debug` form and separated by `, `.
/// A variant without fields is rendered without parentheses.
///
/// # Errors
///
/// Propagates the formatter's error.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use functional_io::factory::write_instance;
///
/// struct Coordinates(i32, i32);
///
/// impl fmt::Display for Coordinates {
///     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write_instance(formatter, "Coordinates", None, &[&self.0, &self.1])
///     }
/// }
///
/// assert_eq!(Coordinates(1, -2).to_string(), "Coordinates(1, -2)");
/// ```
pub fn write_instance(
    formatter: &mut fmt::Formatter<'_>,
    type_name: &str,
    tag: Option<&str>,
    fields: &[&dyn fmt::Debug],
) -> fmt::Result {
    formatter.write_str(type_name)?;
    if let Some(tag) = tag {
        write!(formatter, ".{tag}")?;
        if fields.is_empty() {
            return Ok(());
        }
    }

    formatter.write_str("(")?;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{field:?}")?;
    }
    formatter.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Factorized;

    #[derive(Debug, Factorized)]
    struct Coordinates {
        latitude: i32,
        longitude: i32,
    }

    #[derive(Debug, Factorized)]
    #[factorized(name = "Shape2D")]
    enum Shape {
        Circle { radius: u32 },
        Rectangle(u32, u32),
        Point,
    }

    #[test]
    fn derived_struct_matches_runtime_rendering() {
        let derived = Coordinates {
            latitude: 1,
            longitude: 2,
        };
        let runtime = factorize_type::<i32>("Coordinates", &["latitude", "longitude"])
            .unwrap()
            .construct(vec![1, 2])
            .unwrap();

        assert_eq!(derived.to_string(), runtime.to_string());
        assert_eq!(derived.field_names(), &["latitude", "longitude"]);
        assert_eq!(derived.tag(), None);
    }

    #[test]
    fn derived_enum_uses_renamed_type() {
        assert_eq!(Shape::Circle { radius: 3 }.to_string(), "Shape2D.Circle(3)");
        assert_eq!(Shape::Rectangle(2, 4).to_string(), "Shape2D.Rectangle(2, 4)");
        assert_eq!(Shape::Point.to_string(), "Shape2D.Point");
        assert_eq!(Shape::Point.type_name(), "Shape2D");
    }

    #[test]
    fn derived_enum_reports_shapes_per_variant() {
        assert_eq!(Shape::VARIANTS, &["Circle", "Rectangle", "Point"]);
        assert_eq!(Shape::Circle { radius: 1 }.field_names(), &["radius"]);
        assert_eq!(Shape::Rectangle(1, 1).field_names(), &["0", "1"]);
        assert!(Shape::Point.field_names().is_empty());
    }

    #[test]
    fn derived_predicates_follow_the_variant() {
        let shape = Shape::Rectangle(1, 2);
        assert!(shape.is_rectangle());
        assert!(!shape.is_circle());
        assert!(!shape.is_point());
    }

    #[test]
    fn is_same_type_compares_declared_names() {
        let coordinates = Coordinates {
            latitude: 0,
            longitude: 0,
        };
        assert!(Shape::Point.is_same_type(&Shape::Rectangle(0, 0)));
        assert!(!Shape::Point.is_same_type(&coordinates));
    }
}
