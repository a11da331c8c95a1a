//! The property-admission schema consulted by CSS value sanitizers.
//!
//! A [`CssSchema`] maps canonical lower-case property names to shared [`Property`] rules.
//! It is built once, at configuration time, through one of three paths:
//!
//! - [`CssSchema::with_names`] draws a subset of the built-in catalogue
//! - [`CssSchema::with_properties`] takes an explicit, self-contained mapping
//! - [`CssSchema::union`] merges existing schemas, rejecting conflicting definitions
//!
//! After construction a schema never changes. Cloning it is cheap and shares the underlying
//! map, so one schema can serve any number of concurrent sanitizer invocations.
//!
//! # Examples
//!
//! ```rust
//! use cssschema::{CssSchema, Property, TokenMask};
//!
//! let custom = CssSchema::with_properties([(
//!     "scrollbar-color",
//!     Property::builder()
//!         .mask(TokenMask::HASH_VALUE)
//!         .literals(["auto"])
//!         .build(),
//! )])?;
//!
//! let schema = CssSchema::union([&*cssschema::DEFAULT, &custom])?;
//! assert!(schema.contains("scrollbar-color"));
//! assert!(schema.contains("color"));
//!
//! // Vendor aliases fall back to the standard property
//! assert_eq!(
//!     schema.for_key("-webkit-scrollbar-color"),
//!     schema.for_key("scrollbar-color")
//! );
//! # Ok::<(), cssschema::Error>(())
//! ```

use std::{
    borrow::Cow,
    sync::{Arc, LazyLock},
};

use indexmap::{map::Entry, IndexMap};

use crate::{
    schema::{
        definitions::{DEFAULT_WHITELIST, DEFINITIONS},
        property::{Property, PropertyRc, DISALLOWED},
        vendor::strip_vendor_prefix,
    },
    Error, Result,
};

/// A schema that includes only those properties on the default white-list.
///
/// Built once, on first use, from [`DEFAULT_WHITELIST`].
pub static DEFAULT: LazyLock<CssSchema> = LazyLock::new(|| {
    CssSchema::with_names(DEFAULT_WHITELIST.iter().copied())
        .expect("default white-list only names catalogue properties")
});

/// Describes the kinds of tokens CSS property values can safely contain.
///
/// Equality compares the name to rule mapping; enumeration order does not take part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssSchema {
    properties: Arc<IndexMap<String, PropertyRc>>,
}

impl CssSchema {
    fn from_map(properties: IndexMap<String, PropertyRc>) -> Self {
        CssSchema {
            properties: Arc::new(properties),
        }
    }

    /// A schema that includes all and only the named properties.
    ///
    /// Rules are taken from the built-in catalogue by reference and unchanged. Repeated names
    /// collapse into one entry.
    ///
    /// # Arguments
    /// * `names` - Lower-case CSS property names that appear in the built-in catalogue
    ///
    /// # Errors
    /// Returns [`Error::UnknownProperty`] for the first name the catalogue does not define.
    pub fn with_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut properties = IndexMap::new();
        for name in names {
            let name = name.as_ref();
            let Some(rule) = DEFINITIONS.get(name) else {
                return Err(Error::UnknownProperty(name.to_string()));
            };
            properties
                .entry(name.to_string())
                .or_insert_with(|| rule.clone());
        }

        log::debug!("built schema with {} catalogue properties", properties.len());
        Ok(Self::from_map(properties))
    }

    /// A schema that includes all and only the given properties.
    ///
    /// Keys are canonicalized to lower case. The mapping must be self-contained: every
    /// function key referenced by any rule has to be a key of the mapping itself.
    ///
    /// # Arguments
    /// * `properties` - `(name, rule)` pairs; rules may be shared [`PropertyRc`]s or owned
    ///   [`Property`] values
    ///
    /// # Errors
    /// - [`Error::DuplicateKey`] if two names canonicalize to one key with different rules
    /// - [`Error::NotSelfContained`] naming the property and the undefined function key
    pub fn with_properties<I, K, V>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyRc>,
    {
        let properties = canonical_map(properties)?;
        check_self_contained(
            properties.iter().map(|(name, rule)| (name.as_str(), &**rule)),
            |key| properties.contains_key(key),
        )?;

        log::debug!("built schema with {} explicit properties", properties.len());
        Ok(Self::from_map(properties))
    }

    /// Builds a schema from a mapping without the self-containment check.
    ///
    /// Used by [`crate::SchemaBuilder`], which checks custom rules against the keys of the
    /// finished schema instead.
    pub(crate) fn with_properties_unchecked<I, K, V>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyRc>,
    {
        Ok(Self::from_map(canonical_map(properties)?))
    }

    /// The process-wide default schema, see [`static@DEFAULT`]
    #[must_use]
    pub fn default_schema() -> &'static CssSchema {
        &DEFAULT
    }

    /// A schema that represents the union of the input schemas.
    ///
    /// Inputs are merged in the order given and the result keeps first-seen order. A name
    /// defined by several inputs with structurally equal rules keeps the first rule. A single
    /// input is returned as is, sharing its storage.
    ///
    /// # Errors
    /// - [`Error::Empty`] if no schema is given
    /// - [`Error::Conflict`] if two inputs define one property with different rules
    pub fn union<'a, I>(schemas: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a CssSchema>,
    {
        let schemas: Vec<&CssSchema> = schemas.into_iter().collect();
        match schemas.as_slice() {
            [] => return Err(Error::Empty),
            [single] => return Ok((*single).clone()),
            _ => {}
        }

        log::debug!("merging {} schemas", schemas.len());

        let mut properties: IndexMap<String, PropertyRc> = IndexMap::new();
        for schema in schemas {
            log::debug!("merging schema with {} properties", schema.len());
            for (name, rule) in schema.properties.iter() {
                match properties.entry(name.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(rule.clone());
                    }
                    Entry::Occupied(entry) => {
                        if **entry.get() != **rule {
                            log::warn!("irreconcilable definitions for property '{}'", name);
                            return Err(Error::Conflict(name.clone()));
                        }
                    }
                }
            }
        }

        Ok(Self::from_map(properties))
    }

    /// The set of CSS properties allowed by this schema, in first-insertion order.
    pub fn allowed_properties(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.properties.keys().map(String::as_str)
    }

    /// Iterates over `(name, rule)` pairs, in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &PropertyRc)> + '_ {
        self.properties
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    /// Number of properties in this schema
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if this schema allows no property at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns `true` if `name` is a key of this schema. No canonicalization or vendor
    /// fallback is applied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Exact-key lookup. No canonicalization or vendor fallback is applied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyRc> {
        self.properties.get(name)
    }

    /// The rule for the named property or function key.
    ///
    /// The name is lower-cased first. If it is not defined, a recognized vendor prefix
    /// (`-ms-`, `-moz-`, `-o-`, `-webkit-`) is stripped and the bare name is tried. Anything
    /// else resolves to [`static@DISALLOWED`]; this lookup never fails.
    #[must_use]
    pub fn for_key(&self, name: &str) -> &PropertyRc {
        let canonical = canonicalize(name);
        if let Some(rule) = self.properties.get(canonical.as_ref()) {
            return rule;
        }

        if let Some((prefix, bare)) = strip_vendor_prefix(&canonical) {
            if let Some(rule) = self.properties.get(bare) {
                log::trace!("resolved '{}' through vendor prefix {}", name, prefix.as_str());
                return rule;
            }
        }

        &DISALLOWED
    }

    /// Checks that every function key referenced by this schema's rules is one of its keys.
    ///
    /// Mapping-based schemas always pass. Name-based schemas pass when the named subset
    /// includes the argument schemas of every function it allows.
    ///
    /// # Errors
    /// Returns [`Error::NotSelfContained`] for the first missing function key.
    pub fn validate(&self) -> Result<()> {
        check_self_contained(
            self.properties
                .iter()
                .map(|(name, rule)| (name.as_str(), &**rule)),
            |key| self.properties.contains_key(key),
        )
    }
}

impl<'a> IntoIterator for &'a CssSchema {
    type Item = (&'a String, &'a PropertyRc);
    type IntoIter = indexmap::map::Iter<'a, String, PropertyRc>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Lower-cases ASCII letters of a property name, borrowing when nothing changes
fn canonicalize(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

fn canonical_map<I, K, V>(properties: I) -> Result<IndexMap<String, PropertyRc>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<PropertyRc>,
{
    let mut map: IndexMap<String, PropertyRc> = IndexMap::new();
    for (name, rule) in properties {
        let rule = rule.into();
        match map.entry(canonicalize(name.as_ref()).into_owned()) {
            Entry::Vacant(entry) => {
                entry.insert(rule);
            }
            Entry::Occupied(entry) => {
                if **entry.get() != *rule {
                    return Err(Error::DuplicateKey(entry.key().clone()));
                }
            }
        }
    }
    Ok(map)
}

/// Flat membership test of every function key target; targets are plain keys, so no graph
/// traversal is involved.
pub(crate) fn check_self_contained<'a, I, F>(rules: I, is_defined: F) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a Property)>,
    F: Fn(&str) -> bool,
{
    for (name, rule) in rules {
        for function_key in rule.fn_keys().values() {
            if !is_defined(function_key) {
                log::warn!(
                    "property '{}' depends on undefined function key '{}'",
                    name,
                    function_key
                );
                return Err(Error::NotSelfContained {
                    property: name.to_string(),
                    function_key: function_key.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        schema::mask::TokenMask,
        test::{color_rule, function_rule, margin_rule, schema_of},
    };

    #[test]
    fn test_with_names_shares_catalogue_rules() {
        let schema = CssSchema::with_names(["margin", "margin-left", "color"]).unwrap();
        assert_eq!(schema.len(), 3);
        assert!(Arc::ptr_eq(
            schema.get("margin").unwrap(),
            schema.get("margin-left").unwrap()
        ));
        assert!(Arc::ptr_eq(
            schema.get("color").unwrap(),
            DEFINITIONS.get("color").unwrap()
        ));
    }

    #[test]
    fn test_with_names_unknown() {
        let err = CssSchema::with_names(["color", "not-a-property"]).unwrap_err();
        assert_eq!(err, Error::UnknownProperty("not-a-property".to_string()));
    }

    #[test]
    fn test_with_names_is_case_sensitive() {
        let err = CssSchema::with_names(["Color"]).unwrap_err();
        assert_eq!(err, Error::UnknownProperty("Color".to_string()));
    }

    #[test]
    fn test_with_names_collapses_duplicates() {
        let schema = CssSchema::with_names(["color", "width", "color"]).unwrap();
        let names: Vec<&str> = schema.allowed_properties().collect();
        assert_eq!(names, vec!["color", "width"]);
    }

    #[test]
    fn test_with_names_empty() {
        let schema = CssSchema::with_names(Vec::<&str>::new()).unwrap();
        assert!(schema.is_empty());
        assert!(schema.for_key("color").is_disallowed());
    }

    #[test]
    fn test_with_properties_not_self_contained() {
        let err = CssSchema::with_properties([("foo", function_rule("bar(", "bar"))]).unwrap_err();
        assert_eq!(
            err,
            Error::NotSelfContained {
                property: "foo".to_string(),
                function_key: "bar".to_string(),
            }
        );
    }

    #[test]
    fn test_with_properties_self_contained() {
        let schema = CssSchema::with_properties([
            ("foo", function_rule("bar(", "bar")),
            ("bar", margin_rule()),
        ])
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.for_key("foo").function_key("bar("), Some("bar"));
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_with_properties_self_reference() {
        let schema = CssSchema::with_properties([("calc()", function_rule("calc(", "calc()"))]);
        assert!(schema.is_ok());
    }

    #[test]
    fn test_with_properties_canonicalizes_keys() {
        let schema = CssSchema::with_properties([("Margin-Top", margin_rule())]).unwrap();
        assert!(schema.contains("margin-top"));
        assert!(!schema.contains("Margin-Top"));
        assert_eq!(**schema.for_key("MARGIN-TOP"), margin_rule());
    }

    #[test]
    fn test_with_properties_case_variants() {
        let schema =
            CssSchema::with_properties([("color", color_rule()), ("COLOR", color_rule())]);
        assert_eq!(schema.unwrap().len(), 1);

        let err = CssSchema::with_properties([("color", color_rule()), ("Color", margin_rule())])
            .unwrap_err();
        assert_eq!(err, Error::DuplicateKey("color".to_string()));
    }

    #[test]
    fn test_with_properties_accepts_shared_rules() {
        let shared: PropertyRc = Arc::new(margin_rule());
        let schema = CssSchema::with_properties([
            ("margin-left", shared.clone()),
            ("margin-right", shared.clone()),
        ])
        .unwrap();
        assert!(Arc::ptr_eq(schema.get("margin-left").unwrap(), &shared));
        assert!(Arc::ptr_eq(schema.get("margin-right").unwrap(), &shared));
    }

    #[test]
    fn test_union_single_shares_storage() {
        let schema = schema_of(&[("margin", margin_rule())]);
        let merged = CssSchema::union([&schema]).unwrap();
        assert!(Arc::ptr_eq(&schema.properties, &merged.properties));
    }

    #[test]
    fn test_union_empty() {
        let none: Vec<&CssSchema> = Vec::new();
        assert_eq!(CssSchema::union(none).unwrap_err(), Error::Empty);
    }

    #[test]
    fn test_union_idempotent() {
        let schema = CssSchema::with_names(["color", "rgb()", "margin"]).unwrap();
        let merged = CssSchema::union([&schema, &schema]).unwrap();
        assert_eq!(merged, schema);
    }

    #[test]
    fn test_union_disjoint_commutes() {
        let a = schema_of(&[("margin", margin_rule())]);
        let b = schema_of(&[("color", color_rule()), ("rgb()", margin_rule())]);

        let ab = CssSchema::union([&a, &b]).unwrap();
        let ba = CssSchema::union([&b, &a]).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 3);

        let ab_order: Vec<&str> = ab.allowed_properties().collect();
        let ba_order: Vec<&str> = ba.allowed_properties().collect();
        assert_eq!(ab_order, vec!["margin", "color", "rgb()"]);
        assert_eq!(ba_order, vec!["color", "rgb()", "margin"]);
    }

    #[test]
    fn test_union_conflict() {
        let a = schema_of(&[("color", color_rule())]);
        let b = schema_of(&[
            (
                "color",
                Property::builder().mask(TokenMask::HASH_VALUE).build(),
            ),
        ]);
        let err = CssSchema::union([&a, &b]).unwrap_err();
        assert_eq!(err, Error::Conflict("color".to_string()));
        assert_eq!(err.to_string(), "Duplicate irreconcilable definitions for color");
    }

    #[test]
    fn test_union_equal_duplicates_keep_first() {
        let first: PropertyRc = Arc::new(margin_rule());
        let second: PropertyRc = Arc::new(margin_rule());
        let a = CssSchema::with_properties([("margin", first.clone())]).unwrap();
        let b = CssSchema::with_properties([("margin", second)]).unwrap();

        let merged = CssSchema::union([&a, &b]).unwrap();
        assert_eq!(merged.len(), 1);
        assert!(Arc::ptr_eq(merged.get("margin").unwrap(), &first));
    }

    #[test]
    fn test_for_key_lowercases() {
        let schema = schema_of(&[("color", color_rule())]);
        assert_eq!(**schema.for_key("COLOR"), color_rule());
        assert_eq!(**schema.for_key("CoLoR"), color_rule());
    }

    #[test]
    fn test_for_key_vendor_fallback() {
        let schema = schema_of(&[("foo", margin_rule())]);
        for name in ["-ms-foo", "-moz-foo", "-o-foo", "-webkit-foo", "-WEBKIT-FOO"] {
            assert!(Arc::ptr_eq(schema.for_key(name), schema.for_key("foo")), "{name}");
        }
        assert!(schema.for_key("-epub-foo").is_disallowed());
        assert!(schema.for_key("-khtml-foo").is_disallowed());
        assert!(schema.for_key("-moz-bar").is_disallowed());
    }

    #[test]
    fn test_for_key_prefers_exact_prefixed_entry() {
        let prefixed = Property::builder().literals(["text"]).build();
        let schema = schema_of(&[
            ("background-clip", margin_rule()),
            ("-webkit-background-clip", prefixed.clone()),
        ]);
        assert_eq!(**schema.for_key("-webkit-background-clip"), prefixed);
        assert_eq!(**schema.for_key("-moz-background-clip"), margin_rule());
    }

    #[test]
    fn test_for_key_strips_only_once() {
        let schema = schema_of(&[("foo", margin_rule())]);
        assert!(schema.for_key("-moz--webkit-foo").is_disallowed());
        assert!(schema.for_key("-moz--moz-foo").is_disallowed());
    }

    #[test]
    fn test_for_key_miss_is_sentinel() {
        let schema = schema_of(&[("foo", margin_rule())]);
        assert!(Arc::ptr_eq(schema.for_key("bar"), &DISALLOWED));
        assert!(Arc::ptr_eq(schema.for_key(""), &DISALLOWED));
        assert!(Arc::ptr_eq(schema.for_key("-"), &DISALLOWED));
        assert!(Arc::ptr_eq(schema.for_key("-webkit-"), &DISALLOWED));
    }

    #[test]
    fn test_validate_named_subset() {
        let schema = CssSchema::with_names(["color"]).unwrap();
        assert!(matches!(
            schema.validate(),
            Err(Error::NotSelfContained { ref property, .. }) if property == "color"
        ));

        let closed = CssSchema::with_names(["color", "rgb()", "rgba()", "hsl()", "hsla()"]).unwrap();
        assert!(closed.validate().is_ok());
    }

    #[test]
    fn test_default_schema() {
        let default = CssSchema::default_schema();
        assert_eq!(default.len(), DEFAULT_WHITELIST.len());
        assert!(std::ptr::eq(default, &*DEFAULT));
        assert!(default.contains("color"));
        assert!(!default.contains("position"));
    }

    #[test]
    fn test_into_iterator() {
        let schema = schema_of(&[("margin", margin_rule()), ("color", color_rule())]);
        let names: Vec<&String> = (&schema).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["margin", "color"]);
        assert_eq!(schema.iter().len(), 2);
    }
}
