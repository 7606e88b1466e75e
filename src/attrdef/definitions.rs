//! The attribute table of a model.
//!
//! A model declares its attributes one by one at definition time.
//! `AttributeDefinitions` keeps those declarations in the order they were made
//! and drops re-declarations of an attribute that is already present, so the
//! table can answer "which attributes exist" and "what is attribute X".

use crate::definition::AttributeDefinition;
use crate::symbol::{Symbol, ToSymbol};
use std::collections::HashMap;

/// Declared attributes of a model, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct AttributeDefinitions {
    entries: Vec<AttributeDefinition>,
    by_name: HashMap<Symbol, usize>,
}

impl AttributeDefinitions {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. Returns `false`, leaving the table unchanged, when an
    /// equal definition was already declared.
    ///
    /// ```
    /// use attrdef::{AttributeDefinition, AttributeDefinitions};
    ///
    /// let mut attrs = AttributeDefinitions::new();
    /// assert!(attrs.declare(AttributeDefinition::new("amount")));
    /// assert!(!attrs.declare(AttributeDefinition::new("amount")));
    /// assert_eq!(attrs.len(), 1);
    /// ```
    pub fn declare(&mut self, definition: AttributeDefinition) -> bool {
        let name = definition.name();
        if self.by_name.contains_key(&name) {
            tracing::debug!(attribute = %name, "attribute already declared");
            return false;
        }
        self.by_name.insert(name, self.entries.len());
        self.entries.push(definition);
        true
    }

    /// The definition declared under `name`.
    pub fn get(&self, name: impl ToSymbol) -> Option<&AttributeDefinition> {
        self.by_name
            .get(&name.to_symbol())
            .map(|&index| &self.entries[index])
    }

    /// Whether `name` has been declared.
    pub fn contains(&self, name: impl ToSymbol) -> bool {
        self.by_name.contains_key(&name.to_symbol())
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(AttributeDefinition::name)
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeDefinition> {
        self.entries.iter()
    }
}

// Order of declaration is part of the table's identity.
impl PartialEq for AttributeDefinitions {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AttributeDefinitions {}

impl<'a> IntoIterator for &'a AttributeDefinitions {
    type Item = &'a AttributeDefinition;
    type IntoIter = std::slice::Iter<'a, AttributeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<AttributeDefinition> for AttributeDefinitions {
    fn extend<I: IntoIterator<Item = AttributeDefinition>>(&mut self, iter: I) {
        for definition in iter {
            self.declare(definition);
        }
    }
}

impl FromIterator<AttributeDefinition> for AttributeDefinitions {
    fn from_iter<I: IntoIterator<Item = AttributeDefinition>>(iter: I) -> Self {
        let mut definitions = Self::new();
        definitions.extend(iter);
        definitions
    }
}
