//! # Attrdef
//!
//! Reflection metadata for attribute-based data models. A model layer declares
//! the attributes its objects carry; this crate gives each declaration a value
//! it can compare, list and look up. Storing attribute values, coercing them,
//! and persisting models all live in the layer that uses this crate.
//!
//! ## Pieces
//!
//! ```text
//!   name (&str, String, Symbol, serde_json::Value)
//!                      │  ToSymbol / from_value
//!                      ▼
//!   ┌──────────────────────────────┐
//!   │  AttributeDefinition         │  name: Symbol, options (kept, unread)
//!   └──────────────────────────────┘
//!                      │  declare
//!                      ▼
//!   ┌──────────────────────────────┐
//!   │  AttributeDefinitions        │  ordered, one entry per name
//!   └──────────────────────────────┘
//! ```
//!
//! - [`symbol`]: interned names and the [`ToSymbol`] conversion
//! - [`definition`]: [`AttributeDefinition`] and the [`AttributeDeclaration`] seam
//!   for types that extend it
//! - [`definitions`]: the per-model attribute table
//! - [`error`]: error types
//!
//! ## Type checking of names
//!
//! Statically typed callers can only pass names that implement [`ToSymbol`];
//! anything else does not compile. Names arriving as `serde_json::Value` are
//! checked at run time and everything but a string fails with
//! [`AttrError::TypeMismatch`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`trace` on definition, `debug` on rejected
//! names and ignored re-declarations) and never installs a subscriber.

pub mod definition;
pub mod definitions;
pub mod error;
pub mod symbol;

pub use definition::{AttributeDeclaration, AttributeDefinition, AttributeOptions};
pub use definitions::AttributeDefinitions;
pub use error::{AttrError, Result};
pub use symbol::{Symbol, ToSymbol};
