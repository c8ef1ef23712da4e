//! Sum types: tagged unions with one shape per variant.

use std::collections::HashMap;
use std::sync::Arc;

use super::error::FactoryError;
use super::product::{construct_shape, construct_shape_from_fields, unique_field_names};
use super::value::{ShapeDescriptor, TaggedValue};

/// A declared sum type.
///
/// Construct one with [`factorize_sum_type`] or [`SumTypeBuilder`].
/// Zero-field variants are built once at declaration time and handed out
/// as shared handles.
pub struct SumType<V> {
    type_name: Arc<str>,
    tags: Arc<[String]>,
    variants: HashMap<String, Arc<ShapeDescriptor>>,
    singletons: HashMap<String, TaggedValue<V>>,
}

/// Declares a sum type from `(tag, fields)` pairs in declaration order.
///
/// # Errors
///
/// - [`FactoryError::DuplicateVariant`] if a tag repeats
/// - [`FactoryError::DuplicateField`] if a variant repeats a field name
///
/// # Examples
///
/// ```rust
/// use functional_io::factory::factorize_sum_type;
///
/// let variants: [(&str, &[&str]); 2] = [("Some", &["value"]), ("None", &[])];
/// let maybe = factorize_sum_type::<u8>("Maybe", &variants).unwrap();
///
/// assert_eq!(maybe.construct("Some", vec![1]).unwrap().to_string(), "Maybe.Some(1)");
/// assert_eq!(maybe.variant("None").unwrap().to_string(), "Maybe.None");
/// ```
pub fn factorize_sum_type<V>(
    type_name: &str,
    variants: &[(&str, &[&str])],
) -> Result<SumType<V>, FactoryError> {
    variants
        .iter()
        .fold(SumTypeBuilder::new(type_name), |builder, (tag, fields)| {
            builder.variant(*tag, fields)
        })
        .build()
}

/// Step-by-step declaration of a [`SumType`].
///
/// # Examples
///
/// ```rust
/// use functional_io::factory::SumTypeBuilder;
///
/// let step = SumTypeBuilder::new("Step")
///     .variant("Loop", &["value"])
///     .variant("Done", &["value"])
///     .build::<i64>()
///     .unwrap();
/// assert_eq!(step.tags(), &["Loop".to_string(), "Done".to_string()]);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct SumTypeBuilder {
    type_name: String,
    variants: Vec<(String, Vec<String>)>,
}

impl SumTypeBuilder {
    /// Starts declaring a sum type named `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            variants: Vec::new(),
        }
    }

    /// Adds a variant with the given ordered field names.
    pub fn variant(mut self, tag: impl Into<String>, field_names: &[&str]) -> Self {
        self.variants.push((
            tag.into(),
            field_names.iter().map(ToString::to_string).collect(),
        ));
        self
    }

    /// Validates the declaration and pre-builds zero-field variants.
    ///
    /// # Errors
    ///
    /// See [`factorize_sum_type`].
    pub fn build<V>(self) -> Result<SumType<V>, FactoryError> {
        let type_name: Arc<str> = Arc::from(self.type_name.as_str());
        let tags: Arc<[String]> = self
            .variants
            .iter()
            .map(|(tag, _)| tag.clone())
            .collect();

        let mut variants = HashMap::with_capacity(self.variants.len());
        let mut singletons = HashMap::new();

        for (tag, field_names) in self.variants {
            let qualified_name = format!("{type_name}.{tag}");
            let borrowed: Vec<&str> = field_names.iter().map(String::as_str).collect();
            let field_names = unique_field_names(&qualified_name, &borrowed)?;

            let shape = Arc::new(ShapeDescriptor {
                type_name: Arc::clone(&type_name),
                tag: Some(tag.clone()),
                field_names,
                declared_tags: Arc::clone(&tags),
            });
            if shape.field_names.is_empty() {
                singletons.insert(
                    tag.clone(),
                    TaggedValue::from_parts(Arc::clone(&shape), Arc::from(Vec::new())),
                );
            }
            if variants.insert(tag.clone(), shape).is_some() {
                return Err(FactoryError::DuplicateVariant {
                    type_name: type_name.to_string(),
                    tag,
                });
            }
        }

        Ok(SumType {
            type_name,
            tags,
            variants,
            singletons,
        })
    }
}

impl<V> SumType<V> {
    /// The declared type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Variant tags in declaration order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Field names of the variant `tag`.
    pub fn field_names(&self, tag: &str) -> Option<&[String]> {
        self.variants
            .get(tag)
            .map(|shape| shape.field_names.as_slice())
    }

    fn shape(&self, tag: &str) -> Result<&Arc<ShapeDescriptor>, FactoryError> {
        self.variants
            .get(tag)
            .ok_or_else(|| FactoryError::UnknownVariant {
                type_name: self.type_name.to_string(),
                tag: tag.to_string(),
            })
    }

    /// Builds the variant `tag` from positional field values.
    ///
    /// Zero-field variants return the shared pre-built value.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::UnknownVariant`] if `tag` is not declared
    /// - [`FactoryError::Arity`] if the value count does not match
    pub fn construct(&self, tag: &str, values: Vec<V>) -> Result<TaggedValue<V>, FactoryError> {
        let shape = self.shape(tag)?;
        if values.is_empty()
            && let Some(singleton) = self.singletons.get(tag)
        {
            return Ok(singleton.clone());
        }
        construct_shape(shape, values)
    }

    /// Builds the variant `tag` from `(field, value)` pairs.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::UnknownVariant`] if `tag` is not declared
    /// - [`FactoryError::MissingField`] if a declared field is absent
    pub fn from_fields<K, I>(&self, tag: &str, record: I) -> Result<TaggedValue<V>, FactoryError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let shape = self.shape(tag)?;
        if let Some(singleton) = self.singletons.get(tag) {
            return Ok(singleton.clone());
        }
        construct_shape_from_fields(shape, record)
    }

    /// Returns the pre-built value of a zero-field variant.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::UnknownVariant`] if `tag` is not declared
    /// - [`FactoryError::Arity`] if the variant has fields
    pub fn variant(&self, tag: &str) -> Result<TaggedValue<V>, FactoryError> {
        let shape = self.shape(tag)?;
        self.singletons
            .get(tag)
            .cloned()
            .ok_or_else(|| FactoryError::Arity {
                type_name: shape.qualified_name(),
                expected: shape.field_names.len(),
                actual: 0,
            })
    }

    /// Returns `true` if `value` belongs to this sum type.
    pub fn is(&self, value: &TaggedValue<V>) -> bool {
        value.type_name() == &*self.type_name
            && value.tag().is_some_and(|tag| self.variants.contains_key(tag))
    }

    /// Returns `true` if `value` is the variant `tag` of this sum type.
    pub fn is_variant(&self, tag: &str, value: &TaggedValue<V>) -> bool {
        self.is(value) && value.tag() == Some(tag)
    }

    /// Returns `value` if it belongs to this sum type.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::TypeMismatch`] otherwise.
    pub fn assert_type<'v>(&self, value: &'v TaggedValue<V>) -> Result<&'v TaggedValue<V>, FactoryError> {
        if self.is(value) {
            Ok(value)
        } else {
            Err(FactoryError::TypeMismatch {
                expected: self.type_name.to_string(),
                found: value.type_name().to_string(),
            })
        }
    }
}

impl<V> std::fmt::Debug for SumType<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SumType")
            .field("type_name", &self.type_name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> SumType<String> {
        SumTypeBuilder::new("Response")
            .variant("Success", &["headers", "raw"])
            .variant("Failure", &["headers", "raw"])
            .variant("Pending", &[])
            .build()
            .unwrap()
    }

    #[test]
    fn unit_variants_are_shared() {
        let response = response();
        let first = response.variant("Pending").unwrap();
        let second = response.construct("Pending", Vec::new()).unwrap();

        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn variant_with_fields_is_not_a_singleton() {
        assert!(matches!(
            response().variant("Success"),
            Err(FactoryError::Arity { expected: 2, actual: 0, .. })
        ));
    }

    #[test]
    fn construct_checks_arity_per_variant() {
        let result = response().construct("Failure", vec!["{}".to_string()]);
        assert_eq!(
            result,
            Err(FactoryError::Arity {
                type_name: "Response.Failure".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            response().construct("Redirect", Vec::new()),
            Err(FactoryError::UnknownVariant { tag, .. }) if tag == "Redirect"
        ));
    }

    #[test]
    fn duplicate_tag_fails_at_declaration() {
        let result = SumTypeBuilder::new("Twice")
            .variant("A", &[])
            .variant("A", &["v"])
            .build::<i32>();
        assert!(matches!(result, Err(FactoryError::DuplicateVariant { .. })));
    }

    #[test]
    fn duplicate_field_inside_variant_names_the_variant() {
        let result = SumTypeBuilder::new("Pair")
            .variant("Both", &["v", "v"])
            .build::<i32>();
        assert_eq!(
            result.err(),
            Some(FactoryError::DuplicateField {
                type_name: "Pair.Both".to_string(),
                field: "v".to_string(),
            })
        );
    }

    #[test]
    fn is_variant_distinguishes_tags() {
        let response = response();
        let success = response
            .from_fields("Success", [("raw", "body".to_string()), ("headers", "{}".to_string())])
            .unwrap();

        assert!(response.is(&success));
        assert!(response.is_variant("Success", &success));
        assert!(!response.is_variant("Failure", &success));
        assert_eq!(success.get("raw").map(String::as_str), Some("body"));
    }
}
