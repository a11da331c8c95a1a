//! # cssschema Prelude
//!
//! This module provides a convenient prelude for the most commonly used types of the
//! cssschema library. Import it to get quick access to everything needed to build and
//! consult schemas.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cssschema operations
pub use crate::Error;

/// The result type used throughout cssschema
pub use crate::Result;

// ================================================================================================
// Schemas
// ================================================================================================

/// Schema type, builder and build options
pub use crate::schema::{CssSchema, SchemaBuilder, SchemaConfig};

/// The conservative schema built from the default white-list
pub use crate::schema::DEFAULT;

// ================================================================================================
// Rules
// ================================================================================================

/// Property rules and their token masks
pub use crate::schema::{Property, PropertyBuilder, PropertyRc, TokenMask, DISALLOWED};

/// Vendor prefix handling
pub use crate::schema::{strip_vendor_prefix, VendorPrefix};
