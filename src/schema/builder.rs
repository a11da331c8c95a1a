//! Builder for composing a [`CssSchema`] from several sources.
//!
//! The plain construction paths of [`CssSchema`] each cover one source. A sanitizer policy
//! usually combines a few of them: a handful of catalogue properties, some site-specific
//! rules, perhaps a schema shared by another policy. [`SchemaBuilder`] collects all of
//! them and performs a single union at the end.
//!
//! # Examples
//!
//! ```rust
//! use cssschema::{Property, SchemaBuilder, TokenMask};
//!
//! let schema = SchemaBuilder::new()
//!     .properties(["margin", "padding", "color", "rgb()"])
//!     .custom(
//!         "accent-color",
//!         Property::builder()
//!             .mask(TokenMask::HASH_VALUE)
//!             .literals(["auto"])
//!             .function("rgb(", "rgb()")
//!             .build(),
//!     )
//!     .build()?;
//!
//! assert_eq!(schema.len(), 5);
//! assert!(schema.for_key("Accent-Color").allows_literal("auto"));
//! # Ok::<(), cssschema::Error>(())
//! ```

use crate::{
    schema::{
        config::SchemaConfig,
        cssschema::{check_self_contained, CssSchema},
        definitions::{verify_definitions, DEFAULT_WHITELIST},
        property::PropertyRc,
    },
    Result,
};

/// Collects catalogue names, custom rules and existing schemas into one [`CssSchema`].
///
/// Sources are merged in this order: catalogue names, custom rules, then merged schemas in
/// the order they were added. Custom rules may reference function keys defined by any of
/// the sources, since they are checked against the finished schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: SchemaConfig,
    names: Vec<String>,
    custom: Vec<(String, PropertyRc)>,
    merged: Vec<CssSchema>,
}

impl SchemaBuilder {
    /// Creates an empty builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given configuration
    #[must_use]
    pub fn with_config(config: SchemaConfig) -> Self {
        SchemaBuilder {
            config,
            ..Self::default()
        }
    }

    /// Replaces the configuration of this builder
    #[must_use]
    pub fn config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds one catalogue property by name
    #[must_use]
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Adds several catalogue properties by name
    #[must_use]
    pub fn properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds every property of the default white-list
    #[must_use]
    pub fn defaults(self) -> Self {
        self.properties(DEFAULT_WHITELIST.iter().copied())
    }

    /// Adds a caller-defined rule under `name`
    #[must_use]
    pub fn custom(mut self, name: impl Into<String>, rule: impl Into<PropertyRc>) -> Self {
        self.custom.push((name.into(), rule.into()));
        self
    }

    /// Adds an existing schema to the union
    #[must_use]
    pub fn merge(mut self, schema: &CssSchema) -> Self {
        self.merged.push(schema.clone());
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    /// - [`crate::Error::UnknownProperty`] if a catalogue name is not defined
    /// - [`crate::Error::DuplicateKey`] if two custom rules share a canonical name with
    ///   different rules
    /// - [`crate::Error::Conflict`] if two sources define one property differently
    /// - [`crate::Error::NotSelfContained`] if a custom rule references a function key the
    ///   finished schema lacks, or, with [`SchemaConfig::require_self_contained`], if any rule
    ///   does
    /// - [`crate::Error::Empty`] if nothing was added
    pub fn build(self) -> Result<CssSchema> {
        if self.config.verify_catalogue {
            verify_definitions()?;
        }

        let mut parts = Vec::with_capacity(self.merged.len() + 2);
        if !self.names.is_empty() {
            parts.push(CssSchema::with_names(&self.names)?);
        }
        if !self.custom.is_empty() {
            parts.push(CssSchema::with_properties_unchecked(self.custom.iter().cloned())?);
        }
        parts.extend(self.merged);

        let schema = CssSchema::union(&parts)?;

        check_self_contained(
            self.custom
                .iter()
                .map(|(name, rule)| (name.as_str(), &**rule)),
            |key| schema.contains(key),
        )?;

        if self.config.require_self_contained {
            schema.validate()?;
        }

        log::debug!("schema builder produced {} properties", schema.len());
        Ok(schema)
    }
}
