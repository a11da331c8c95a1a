use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant is a configuration-time error: they are raised while a [`crate::CssSchema`] is
/// being built, never while a built schema is consulted. Resolving a property name against a
/// schema is total and cannot fail.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::UnknownProperty`] - A name-based build referenced a property the catalogue lacks
/// - [`Error::NotSelfContained`] - A rule allows a function whose argument schema is missing
/// - [`Error::DuplicateKey`] - Two keys of a mapping canonicalize to one name with different rules
///
/// ## Composition Errors
/// - [`Error::Conflict`] - Two schemas define the same property with different rules
/// - [`Error::Empty`] - A union was requested over zero schemas
///
/// # Examples
///
/// ```rust
/// use cssschema::{CssSchema, Error};
///
/// match CssSchema::with_names(["color", "colour"]) {
///     Ok(_) => unreachable!(),
///     Err(Error::UnknownProperty(name)) => assert_eq!(name, "colour"),
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A property name is not part of the built-in catalogue.
    ///
    /// Raised by [`crate::CssSchema::with_names`]. This signals a typo or an outdated
    /// configuration; the offending name is carried verbatim.
    #[error("Unknown CSS property - {0}")]
    UnknownProperty(String),

    /// A rule allows a function whose argument schema is not part of the same mapping.
    ///
    /// Raised by [`crate::CssSchema::with_properties`]. Admitting such a function would leave
    /// its argument list without a governing rule.
    ///
    /// # Fields
    ///
    /// * `property` - The property whose rule references the missing key
    /// * `function_key` - The schema key that is not defined
    #[error("Property map is not self contained - {property} depends on undefined function key {function_key}")]
    NotSelfContained {
        /// The property whose rule references the missing key
        property: String,
        /// The function argument schema key that is not defined
        function_key: String,
    },

    /// Two input schemas define the same property with structurally different rules.
    ///
    /// Raised by [`crate::CssSchema::union`]. Identical definitions coming from several
    /// schemas are accepted; differing ones are never silently widened or overridden.
    #[error("Duplicate irreconcilable definitions for {0}")]
    Conflict(String),

    /// A caller-supplied mapping holds two entries for one canonical name with different rules.
    ///
    /// Schema keys are canonical lower-case names, so `Color` and `color` name the same
    /// property and must agree. The canonical name is carried.
    #[error("Conflicting definitions for key {0} in property map")]
    DuplicateKey(String),

    /// Provided input was empty.
    ///
    /// A union needs at least one schema to produce a result.
    #[error("Provided input was empty")]
    Empty,
}
