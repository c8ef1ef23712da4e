//! Product types: a single record shape with named fields.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::Arc;

use super::error::FactoryError;
use super::value::{ShapeDescriptor, TaggedValue};

/// A declared product type.
///
/// Construct one with [`factorize_type`].
pub struct ProductType<V> {
    shape: Arc<ShapeDescriptor>,
    _values: PhantomData<fn() -> V>,
}

/// Declares a product type named `type_name` with the given ordered fields.
///
/// # Errors
///
/// Returns [`FactoryError::DuplicateField`] if a field name repeats.
///
/// # Examples
///
/// ```rust
/// use functional_io::factory::factorize_type;
///
/// let pair = factorize_type::<String>("Pair", &["first", "second"]).unwrap();
/// let value = pair
///     .from_fields([("second", "b".to_string()), ("first", "a".to_string())])
///     .unwrap();
/// assert_eq!(value.to_string(), r#"Pair("a", "b")"#);
///
/// assert!(factorize_type::<String>("Broken", &["x", "x"]).is_err());
/// ```
pub fn factorize_type<V>(type_name: &str, field_names: &[&str]) -> Result<ProductType<V>, FactoryError> {
    let field_names = unique_field_names(type_name, field_names)?;

    Ok(ProductType {
        shape: Arc::new(ShapeDescriptor {
            type_name: Arc::from(type_name),
            tag: None,
            field_names,
            declared_tags: Arc::from(Vec::new()),
        }),
        _values: PhantomData,
    })
}

/// Validates a field list, failing on the first repeated name.
pub(super) fn unique_field_names(
    qualified_name: &str,
    field_names: &[&str],
) -> Result<Vec<String>, FactoryError> {
    let mut seen = HashSet::with_capacity(field_names.len());
    for field in field_names {
        if !seen.insert(*field) {
            return Err(FactoryError::DuplicateField {
                type_name: qualified_name.to_string(),
                field: (*field).to_string(),
            });
        }
    }
    Ok(field_names.iter().map(ToString::to_string).collect())
}

/// Builds a value of `shape` from positional values, checking arity.
pub(super) fn construct_shape<V>(
    shape: &Arc<ShapeDescriptor>,
    values: Vec<V>,
) -> Result<TaggedValue<V>, FactoryError> {
    if values.len() != shape.field_names.len() {
        return Err(FactoryError::Arity {
            type_name: shape.qualified_name(),
            expected: shape.field_names.len(),
            actual: values.len(),
        });
    }
    Ok(TaggedValue::from_parts(Arc::clone(shape), Arc::from(values)))
}

/// Builds a value of `shape` from a keyed record. Extra keys are ignored.
pub(super) fn construct_shape_from_fields<V, K, I>(
    shape: &Arc<ShapeDescriptor>,
    record: I,
) -> Result<TaggedValue<V>, FactoryError>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut record: HashMap<String, V> = record
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value))
        .collect();

    let values = shape
        .field_names
        .iter()
        .map(|field| {
            record
                .remove(field)
                .ok_or_else(|| FactoryError::MissingField {
                    type_name: shape.qualified_name(),
                    field: field.clone(),
                })
        })
        .collect::<Result<Vec<V>, FactoryError>>()?;

    Ok(TaggedValue::from_parts(Arc::clone(shape), Arc::from(values)))
}

impl<V> ProductType<V> {
    /// The declared type name.
    pub fn type_name(&self) -> &str {
        &self.shape.type_name
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> &[String] {
        &self.shape.field_names
    }

    /// Builds a value from positional field values.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Arity`] if `values.len()` differs from the
    /// declared field count.
    pub fn construct(&self, values: Vec<V>) -> Result<TaggedValue<V>, FactoryError> {
        construct_shape(&self.shape, values)
    }

    /// Builds a value from `(field, value)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingField`] naming the first declared field
    /// that is absent from `record`.
    pub fn from_fields<K, I>(&self, record: I) -> Result<TaggedValue<V>, FactoryError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        construct_shape_from_fields(&self.shape, record)
    }

    /// Returns `true` if `value` was built by a product type of this name.
    pub fn is(&self, value: &TaggedValue<V>) -> bool {
        value.tag().is_none() && value.type_name() == self.type_name()
    }

    /// Returns `value` if it belongs to this type.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::TypeMismatch`] otherwise.
    pub fn assert_type<'v>(&self, value: &'v TaggedValue<V>) -> Result<&'v TaggedValue<V>, FactoryError> {
        if self.is(value) {
            Ok(value)
        } else {
            Err(FactoryError::TypeMismatch {
                expected: self.type_name().to_string(),
                found: value.type_name().to_string(),
            })
        }
    }
}

impl<V> Clone for ProductType<V> {
    fn clone(&self) -> Self {
        Self {
            shape: Arc::clone(&self.shape),
            _values: PhantomData,
        }
    }
}

impl<V> std::fmt::Debug for ProductType<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ProductType")
            .field("type_name", &self.shape.type_name)
            .field("field_names", &self.shape.field_names)
            .finish()
    }
}
