//! CSS property admission rules and the schemas that group them.
//!
//! This module contains everything a CSS value sanitizer consults to decide whether a
//! declaration may pass:
//!
//! - [`TokenMask`] - The token categories a property value may contain
//! - [`Property`] - One admission rule: a mask, allowed literals and allowed functions
//! - [`CssSchema`] - An immutable mapping from property names to rules
//! - [`SchemaBuilder`] - Composes a schema from catalogue names, custom rules and other schemas
//! - [`DEFINITIONS`] and [`DEFAULT_WHITELIST`] - The built-in catalogue
//! - [`VendorPrefix`] - The browser prefixes that alias standard properties
//!
//! # Resolution
//!
//! [`CssSchema::for_key`] is total. An unknown name, including one whose vendor prefix is
//! not recognized, resolves to [`static@DISALLOWED`], which admits nothing.
//!
//! ```rust
//! use cssschema::{CssSchema, DISALLOWED};
//!
//! let schema = CssSchema::with_names(["border-radius"])?;
//! assert!(!schema.for_key("-moz-border-radius").is_disallowed());
//! assert!(schema.for_key("-epub-border-radius").is_disallowed());
//! assert_eq!(schema.for_key("behavior"), &*DISALLOWED);
//! # Ok::<(), cssschema::Error>(())
//! ```

mod builder;
mod config;
mod cssschema;
mod definitions;
mod mask;
mod property;
mod vendor;

pub use builder::SchemaBuilder;
pub use config::SchemaConfig;
pub use cssschema::{CssSchema, DEFAULT};
pub use definitions::{verify_definitions, DEFAULT_WHITELIST, DEFINITIONS};
pub use mask::TokenMask;
pub use property::{Property, PropertyBuilder, PropertyRc, DISALLOWED};
pub use vendor::{strip_vendor_prefix, VendorPrefix};
