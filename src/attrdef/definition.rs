//! The attribute definition value object.
//!
//! An [`AttributeDefinition`] records that a model declares an attribute with a
//! given name. It carries no value and performs no coercion; it exists so that
//! declarations can be compared, listed and looked up.
//!
//! ## Equality
//!
//! Two definitions are equal when their names are equal. Options never take
//! part in the comparison. Equality is also strict about the concrete type: a
//! type that wraps a definition to extend it is a different kind of
//! declaration, and [`AttributeDefinition::equals`] and
//! [`AttributeDeclaration::same_declaration`] both report such pairs as unequal
//! even when the names match.

use crate::error::{AttrError, Result};
use crate::symbol::{Symbol, ToSymbol};
use serde_json::Value;
use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Per-attribute configuration supplied at declaration time.
///
/// Retained as given and never interpreted by this crate.
pub type AttributeOptions = BTreeMap<String, Value>;

/// Metadata describing one declared attribute.
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    name: Symbol,
    options: AttributeOptions,
}

impl AttributeDefinition {
    /// Create a definition with no options.
    ///
    /// ```
    /// use attrdef::AttributeDefinition;
    ///
    /// let def = AttributeDefinition::new("amount");
    /// assert_eq!(def.to_string(), "amount");
    /// ```
    ///
    /// Names must implement [`ToSymbol`]. Numbers, booleans and collections
    /// do not compile:
    ///
    /// ```compile_fail
    /// attrdef::AttributeDefinition::new(42);
    /// ```
    ///
    /// ```compile_fail
    /// attrdef::AttributeDefinition::new(true);
    /// ```
    ///
    /// ```compile_fail
    /// attrdef::AttributeDefinition::new(vec!["a"]);
    /// ```
    pub fn new(name: impl ToSymbol) -> Self {
        Self::with_options(name, AttributeOptions::new())
    }

    /// Create a definition, keeping `options` alongside the name.
    pub fn with_options(name: impl ToSymbol, options: AttributeOptions) -> Self {
        let name = name.to_symbol();
        tracing::trace!(attribute = %name, options = options.len(), "attribute defined");
        Self { name, options }
    }

    /// Create a definition from a dynamically typed name.
    ///
    /// Only JSON strings name an attribute. Every other kind of value is
    /// rejected with [`AttrError::TypeMismatch`].
    ///
    /// Accepted names are interned for the life of the process, so only pass
    /// names from a bounded source such as a schema, never untrusted input.
    ///
    /// ```
    /// use attrdef::{AttrError, AttributeDefinition};
    /// use serde_json::json;
    ///
    /// assert!(AttributeDefinition::from_value(&json!("amount")).is_ok());
    /// assert_eq!(
    ///     AttributeDefinition::from_value(&json!(42)).unwrap_err(),
    ///     AttrError::TypeMismatch { found: "Number" },
    /// );
    /// ```
    pub fn from_value(name: &Value) -> Result<Self> {
        Self::from_value_with_options(name, AttributeOptions::new())
    }

    /// [`from_value`](Self::from_value), keeping `options` alongside the name.
    pub fn from_value_with_options(name: &Value, options: AttributeOptions) -> Result<Self> {
        match name {
            Value::String(text) => Ok(Self::with_options(text, options)),
            other => {
                let found = value_type_name(other);
                tracing::debug!(found, "rejected attribute name");
                Err(AttrError::TypeMismatch { found })
            }
        }
    }

    /// The attribute name.
    pub fn name(&self) -> Symbol {
        self.name
    }

    /// Options as given at construction.
    pub fn options(&self) -> &AttributeOptions {
        &self.options
    }

    /// Look up a single option by key.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Compare against a value of any type.
    ///
    /// True only when `other` is itself an `AttributeDefinition` (not a type
    /// wrapping one, not a string) with the same name.
    ///
    /// A boxed value must be passed as `boxed.as_ref()`. `&Box<dyn Any>` is
    /// itself an `Any` (the box), so it never matches.
    ///
    /// ```
    /// use attrdef::AttributeDefinition;
    ///
    /// let def = AttributeDefinition::new("amount");
    /// assert!(def.equals(&AttributeDefinition::new("amount")));
    /// assert!(!def.equals(&"amount"));
    /// ```
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.name == other.name)
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

impl PartialEq for AttributeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for AttributeDefinition {}

impl Hash for AttributeDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for AttributeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl TryFrom<&Value> for AttributeDefinition {
    type Error = AttrError;

    fn try_from(name: &Value) -> Result<Self> {
        Self::from_value(name)
    }
}

impl TryFrom<Value> for AttributeDefinition {
    type Error = AttrError;

    fn try_from(name: Value) -> Result<Self> {
        Self::from_value(&name)
    }
}

/// A type that declares an attribute.
///
/// `AttributeDefinition` is the base declaration. Types that extend it with
/// their own data embed a definition and implement this trait; they remain a
/// distinct kind of declaration for comparison purposes.
pub trait AttributeDeclaration: Any {
    /// The embedded base definition.
    fn definition(&self) -> &AttributeDefinition;

    /// `self` as `Any`, for concrete type checks.
    fn as_any(&self) -> &dyn Any;

    /// Name of the declared attribute.
    fn name(&self) -> Symbol {
        self.definition().name()
    }

    /// Same concrete type and same name.
    fn same_declaration(&self, other: &dyn AttributeDeclaration) -> bool {
        self.as_any().type_id() == other.as_any().type_id() && self.name() == other.name()
    }
}

impl AttributeDeclaration for AttributeDefinition {
    fn definition(&self) -> &AttributeDefinition {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn AttributeDeclaration {
    /// Whether the concrete declaration type is `T`.
    pub fn is<T: AttributeDeclaration>(&self) -> bool {
        self.as_any().type_id() == TypeId::of::<T>()
    }

    /// The concrete declaration, if it is a `T`.
    pub fn downcast_ref<T: AttributeDeclaration>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
