//! Runtime tagged values and fold dispatch.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::FactoryError;
use super::write_instance;

/// The declared shape a [`TaggedValue`] was built from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ShapeDescriptor {
    pub(crate) type_name: Arc<str>,
    pub(crate) tag: Option<String>,
    pub(crate) field_names: Vec<String>,
    /// Every tag of the owning sum type, in declaration order. Empty for
    /// product types.
    pub(crate) declared_tags: Arc<[String]>,
}

impl ShapeDescriptor {
    /// `Type` for product shapes, `Type.Tag` for variants.
    pub(crate) fn qualified_name(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{}.{tag}", self.type_name),
            None => self.type_name.to_string(),
        }
    }
}

/// An immutable record produced by a [`ProductType`](super::ProductType) or
/// [`SumType`](super::SumType).
///
/// Cloning is cheap: the shape and the field values are shared.
///
/// # Examples
///
/// ```rust
/// use functional_io::factory::factorize_type;
///
/// let point = factorize_type::<i32>("Point", &["x", "y"]).unwrap();
/// let value = point.construct(vec![3, 4]).unwrap();
///
/// assert_eq!(value.get("y"), Some(&4));
/// assert_eq!(value.to_string(), "Point(3, 4)");
/// ```
pub struct TaggedValue<V> {
    shape: Arc<ShapeDescriptor>,
    values: Arc<[V]>,
}

impl<V> TaggedValue<V> {
    pub(crate) const fn from_parts(shape: Arc<ShapeDescriptor>, values: Arc<[V]>) -> Self {
        Self { shape, values }
    }

    /// The declared type name.
    pub fn type_name(&self) -> &str {
        &self.shape.type_name
    }

    /// The variant tag, or `None` for product values.
    pub fn tag(&self) -> Option<&str> {
        self.shape.tag.as_deref()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> &[String] {
        &self.shape.field_names
    }

    /// Field values in declaration order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Looks a field up by name.
    pub fn get(&self, field: &str) -> Option<&V> {
        self.shape
            .field_names
            .iter()
            .position(|name| name == field)
            .and_then(|index| self.values.get(index))
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &V)> {
        self.shape
            .field_names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Returns `true` if both values share the same allocation.
    ///
    /// Zero-field variants are pre-built once per sum type, so every handle
    /// to them is identical.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shape, &other.shape) && Arc::ptr_eq(&self.values, &other.values)
    }

    /// Dispatches to the handler registered for this value's tag.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::NotASumType`] for product values
    /// - [`FactoryError::IncompleteFold`] if any declared tag lacks a handler,
    ///   even when it is not the tag of this value
    /// - [`FactoryError::UnknownVariant`] if a handler names an undeclared tag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_io::factory::{FoldHandlers, factorize_sum_type};
    ///
    /// let variants: [(&str, &[&str]); 2] = [("A", &["v"]), ("B", &["v"])];
    /// let x = factorize_sum_type::<i32>("X", &variants).unwrap();
    /// let b = x.construct("B", vec![5]).unwrap();
    ///
    /// let folded = b.fold(
    ///     FoldHandlers::new()
    ///         .on("A", |fields: &[i32]| fields[0])
    ///         .on("B", |fields: &[i32]| -fields[0]),
    /// );
    /// assert_eq!(folded, Ok(-5));
    ///
    /// let incomplete = b.fold(FoldHandlers::new().on("A", |fields: &[i32]| fields[0]));
    /// assert!(incomplete.is_err());
    /// ```
    pub fn fold<R>(&self, handlers: FoldHandlers<'_, V, R>) -> Result<R, FactoryError> {
        let Some(own_tag) = self.shape.tag.as_deref() else {
            return Err(FactoryError::NotASumType {
                type_name: self.shape.type_name.to_string(),
            });
        };
        let mut handlers = handlers.handlers;

        if let Some(missing) = self
            .shape
            .declared_tags
            .iter()
            .find(|tag| !handlers.contains_key(tag.as_str()))
        {
            return Err(FactoryError::IncompleteFold {
                type_name: self.shape.type_name.to_string(),
                tag: missing.clone(),
            });
        }
        if let Some(unknown) = handlers
            .keys()
            .find(|tag| !self.shape.declared_tags.contains(*tag))
        {
            return Err(FactoryError::UnknownVariant {
                type_name: self.shape.type_name.to_string(),
                tag: unknown.clone(),
            });
        }

        handlers
            .remove(own_tag)
            .map(|handler| handler(&self.values))
            .ok_or_else(|| FactoryError::UnknownVariant {
                type_name: self.shape.type_name.to_string(),
                tag: own_tag.to_string(),
            })
    }
}

impl<V> Clone for TaggedValue<V> {
    fn clone(&self) -> Self {
        Self {
            shape: Arc::clone(&self.shape),
            values: Arc::clone(&self.values),
        }
    }
}

impl<V: PartialEq> PartialEq for TaggedValue<V> {
    fn eq(&self, other: &Self) -> bool {
        self.shape.type_name == other.shape.type_name
            && self.shape.tag == other.shape.tag
            && self.values == other.values
    }
}

impl<V: Eq> Eq for TaggedValue<V> {}

impl<V: fmt::Debug> fmt::Display for TaggedValue<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&dyn fmt::Debug> = self
            .values
            .iter()
            .map(|value| value as &dyn fmt::Debug)
            .collect();
        write_instance(
            formatter,
            &self.shape.type_name,
            self.shape.tag.as_deref(),
            &fields,
        )
    }
}

impl<V: fmt::Debug> fmt::Debug for TaggedValue<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

/// Handlers for [`TaggedValue::fold`], keyed by variant tag.
///
/// Each handler receives the variant's field values in declaration order.
pub struct FoldHandlers<'a, V, R> {
    handlers: BTreeMap<String, Box<dyn FnOnce(&[V]) -> R + 'a>>,
}

impl<'a, V, R> FoldHandlers<'a, V, R> {
    /// Creates an empty handler map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Registers the handler for `tag`, replacing any earlier one.
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: FnOnce(&[V]) -> R + 'a,
    {
        self.handlers.insert(tag.into(), Box::new(handler));
        self
    }
}

impl<V, R> Default for FoldHandlers<'_, V, R> {
    fn default() -> Self {
        Self::new()
    }
}
