// Copyright 2025 The cssschema Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cssschema
//!
//! Property-admission schemas for HTML and CSS sanitizers.
//!
//! A sanitizer that accepts inline `style` attributes or `<style>` content has to decide, for
//! every declaration, whether the property is allowed and which tokens its value may contain.
//! `cssschema` answers that question. It does not tokenize CSS; it is the table a tokenizing
//! sanitizer consults.
//!
//! ## Features
//!
//! - **Built-in catalogue** - Rules for the CSS 2.1 properties, common CSS3 additions, vendor
//!   aliases and the argument lists of allowed functions such as `rgb()` or `linear-gradient()`
//! - **Conservative default** - [`static@DEFAULT`] admits a curated white-list suitable for
//!   untrusted markup
//! - **Composable** - Schemas are built from catalogue names, explicit rules or unions of
//!   other schemas; conflicting definitions are rejected, never silently merged
//! - **Total lookup** - [`CssSchema::for_key`] never fails; unknown names resolve to a rule
//!   that allows nothing
//! - **Cheap to share** - Schemas are immutable and reference counted, rules are shared
//!   between names
//!
//! ## Quick Start
//!
//! ```rust
//! use cssschema::prelude::*;
//!
//! let schema = CssSchema::with_names(["color", "rgb()", "margin"])?;
//!
//! let color = schema.for_key("COLOR");
//! assert!(color.allows(TokenMask::HASH_VALUE));
//! assert!(color.allows_literal("red"));
//! assert_eq!(color.function_key("rgb("), Some("rgb()"));
//!
//! // Not part of this schema
//! assert!(schema.for_key("position").is_disallowed());
//! # Ok::<(), cssschema::Error>(())
//! ```
//!
//! ### Extending the default
//!
//! ```rust
//! use cssschema::prelude::*;
//!
//! let schema = SchemaBuilder::new()
//!     .merge(&DEFAULT)
//!     .property("position")
//!     .custom(
//!         "tab-size",
//!         Property::builder().mask(TokenMask::QUANTITY).build(),
//!     )
//!     .build()?;
//!
//! assert!(schema.contains("position"));
//! assert!(schema.contains("tab-size"));
//! # Ok::<(), cssschema::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation is a construction operation and returns [`Result<T, Error>`](Result).
//! Consulting a built schema cannot fail:
//!
//! ```rust
//! use cssschema::{CssSchema, Error};
//!
//! let first = CssSchema::with_names(["margin"])?;
//! let second = CssSchema::with_properties([(
//!     "margin",
//!     cssschema::Property::builder().literal("auto").build(),
//! )])?;
//!
//! match CssSchema::union([&first, &second]) {
//!     Err(Error::Conflict(name)) => assert_eq!(name, "margin"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), cssschema::Error>(())
//! ```
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Resolution must never panic, whatever the input
//! cargo +nightly fuzz run resolve --release
//! ```

pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use cssschema::prelude::*;
///
/// let rule = DEFAULT.for_key("-webkit-border-radius");
/// assert!(rule.allows(TokenMask::QUANTITY | TokenMask::NEGATIVE));
/// ```
pub mod prelude;

/// Property rules, schemas and the built-in catalogue
///
/// This module contains the data model and every construction path.
///
/// # Key Types
///
/// - [`schema::CssSchema`] - Immutable name to rule mapping
/// - [`schema::Property`] - A single admission rule
/// - [`schema::TokenMask`] - Token categories a value may contain
/// - [`schema::SchemaBuilder`] - Multi-source schema construction
///
/// # Examples
///
/// ```rust
/// use cssschema::schema::{CssSchema, DEFINITIONS};
///
/// let everything = CssSchema::with_names(DEFINITIONS.keys())?;
/// assert_eq!(everything.len(), DEFINITIONS.len());
/// everything.validate()?;
/// # Ok::<(), cssschema::Error>(())
/// ```
pub mod schema;

/// `cssschema` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cssschema` Error type
///
/// All variants are raised while a schema is being built.
pub use error::Error;

pub use schema::{
    strip_vendor_prefix, verify_definitions, CssSchema, Property, PropertyBuilder, PropertyRc,
    SchemaBuilder, SchemaConfig, TokenMask, VendorPrefix, DEFAULT, DEFAULT_WHITELIST,
    DEFINITIONS, DISALLOWED,
};
