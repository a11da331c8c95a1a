//! Schema build configuration
//!
//! This module provides the options a [`crate::SchemaBuilder`] applies on top of the plain
//! construction paths of [`crate::CssSchema`].

/// Configuration for schema construction
///
/// The construction paths already enforce:
/// - Every name-based entry exists in the built-in catalogue
/// - Every explicit mapping is self-contained
/// - Unions never combine differing rules for one name
///
/// The options here add checks that the bare paths skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchemaConfig {
    /// Require the finished schema to be self-contained, including the entries drawn from the
    /// catalogue by name. A named subset such as `["color"]` omits the `rgb()` argument schema
    /// its rule refers to; with this enabled such a build fails instead.
    pub require_self_contained: bool,

    /// Re-validate the self-containment of the whole built-in catalogue before building.
    /// The catalogue is self-contained by construction; this is a safety net for callers
    /// that want it checked at start-up.
    pub verify_catalogue: bool,
}

impl SchemaConfig {
    /// Creates a configuration with every optional check enabled
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_self_contained: true,
            verify_catalogue: true,
        }
    }

    /// Creates a configuration that only performs the checks of the construction paths
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let strict = SchemaConfig::strict();
        assert!(strict.require_self_contained);
        assert!(strict.verify_catalogue);

        let permissive = SchemaConfig::permissive();
        assert!(!permissive.require_self_contained);
        assert!(!permissive.verify_catalogue);
        assert_eq!(permissive, SchemaConfig::default());
    }
}
