//! Admission rules for a single CSS property.
//!
//! A [`Property`] describes how the tokens after the `:` of a declaration are interpreted.
//! If the property name `color` maps to a rule, that rule records that `#` hash values are
//! innocuous colors, that keywords like `red` are accepted, and that functions like `rgb(`
//! are allowed with their arguments governed by the `rgb()` entry of the same schema.
//!
//! Rules are immutable values. A schema shares one [`PropertyRc`] between every name that
//! uses the same rule (all four margin sides, for instance), and equality is always
//! structural so that shared and duplicated rules compare the same.
//!
//! # Key Types
//! - [`Property`] - The (mask, literals, function keys) triple
//! - [`PropertyRc`] - Shared reference to an immutable rule
//! - [`PropertyBuilder`] - Fluent construction of rules
//! - [`static@DISALLOWED`] - The rule returned for every unknown property

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::{Arc, LazyLock},
};

use crate::schema::mask::TokenMask;

/// A reference-counted, immutable property rule
pub type PropertyRc = Arc<Property>;

/// The rule that allows nothing: empty mask, no literals, no functions.
///
/// Returned by [`crate::CssSchema::for_key`] for every name the schema does not define.
/// Constructors never insert it on their own.
pub static DISALLOWED: LazyLock<PropertyRc> = LazyLock::new(|| Arc::new(Property::disallowed()));

/// Describes the kinds of tokens a CSS property's value can safely contain.
///
/// # Examples
///
/// ```rust
/// use cssschema::{Property, TokenMask};
///
/// let color = Property::builder()
///     .mask(TokenMask::HASH_VALUE)
///     .literals(["inherit", "red", "transparent"])
///     .function("rgb(", "rgb()")
///     .build();
///
/// assert!(color.allows(TokenMask::HASH_VALUE));
/// assert!(color.allows_literal("red"));
/// assert_eq!(color.function_key("rgb("), Some("rgb()"));
/// assert_eq!(color.function_key("url("), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Property {
    /// Groups of allowed tokens
    mask: TokenMask,
    /// Specific allowed values
    literals: BTreeSet<String>,
    /// Maps lower-case function tokens to the schema key for their parameters
    fn_keys: BTreeMap<String, String>,
}

impl Property {
    /// Creates a new property rule.
    ///
    /// Literals are deduplicated; their order is irrelevant. Function tokens are expected to
    /// end in `(`, and each maps to the schema key governing that function's arguments.
    ///
    /// # Arguments
    /// * `mask` - Groups of allowed tokens
    /// * `literals` - Specific allowed keywords, already case-normalized
    /// * `fn_keys` - `(function token, argument schema key)` pairs
    pub fn new<L, F, S, K, V>(mask: TokenMask, literals: L, fn_keys: F) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Property {
            mask,
            literals: literals.into_iter().map(Into::into).collect(),
            fn_keys: fn_keys
                .into_iter()
                .map(|(token, key)| (token.into(), key.into()))
                .collect(),
        }
    }

    /// Creates the rule that allows nothing, see [`static@DISALLOWED`]
    #[must_use]
    pub const fn disallowed() -> Self {
        Property {
            mask: TokenMask::empty(),
            literals: BTreeSet::new(),
            fn_keys: BTreeMap::new(),
        }
    }

    /// Starts a [`PropertyBuilder`]
    #[must_use]
    pub fn builder() -> PropertyBuilder {
        PropertyBuilder::new()
    }

    /// Returns the token categories this property allows
    #[must_use]
    pub fn mask(&self) -> TokenMask {
        self.mask
    }

    /// Returns the allowed literal keywords, sorted
    #[must_use]
    pub fn literals(&self) -> &BTreeSet<String> {
        &self.literals
    }

    /// Returns the allowed function tokens and their argument schema keys, sorted by token
    #[must_use]
    pub fn fn_keys(&self) -> &BTreeMap<String, String> {
        &self.fn_keys
    }

    /// Returns `true` if every category of `required` is allowed
    #[must_use]
    pub fn allows(&self, required: TokenMask) -> bool {
        self.mask.allows(required)
    }

    /// Returns `true` if `literal` is one of the allowed keywords.
    ///
    /// The comparison is exact; callers pass keywords in the canonical lower case the
    /// tokenizer produces.
    #[must_use]
    pub fn allows_literal(&self, literal: &str) -> bool {
        self.literals.contains(literal)
    }

    /// Returns the schema key governing the arguments of `function`, if it is allowed.
    ///
    /// # Arguments
    /// * `function` - A function token including its opening parenthesis, e.g. `"rgb("`
    #[must_use]
    pub fn function_key(&self, function: &str) -> Option<&str> {
        self.fn_keys.get(function).map(String::as_str)
    }

    /// Returns `true` if this rule is structurally the disallowing rule
    #[must_use]
    pub fn is_disallowed(&self) -> bool {
        self.mask.is_empty() && self.literals.is_empty() && self.fn_keys.is_empty()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property(mask: {}, literals: [", self.mask)?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", literal)?;
        }
        write!(f, "], functions: {{")?;
        for (i, (token, key)) in self.fn_keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", token, key)?;
        }
        write!(f, "}})")
    }
}

/// Fluent builder for [`Property`] rules.
///
/// Every call adds to the rule under construction; nothing is ever removed. Masks passed to
/// [`PropertyBuilder::mask`] are OR-ed together.
///
/// ```rust
/// use cssschema::{Property, TokenMask};
///
/// let margin = Property::builder()
///     .mask(TokenMask::QUANTITY)
///     .mask(TokenMask::NEGATIVE)
///     .literals(["auto", "inherit"])
///     .build();
///
/// assert_eq!(margin.mask(), TokenMask::QUANTITY | TokenMask::NEGATIVE);
/// assert_eq!(margin.literals().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    mask: TokenMask,
    literals: BTreeSet<String>,
    fn_keys: BTreeMap<String, String>,
}

impl PropertyBuilder {
    /// Creates an empty builder; building it right away yields a disallowing rule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows the token categories in `mask`
    #[must_use]
    pub fn mask(mut self, mask: TokenMask) -> Self {
        self.mask |= mask;
        self
    }

    /// Allows a single literal keyword
    #[must_use]
    pub fn literal(mut self, literal: impl Into<String>) -> Self {
        self.literals.insert(literal.into());
        self
    }

    /// Allows every literal keyword in `literals`
    #[must_use]
    pub fn literals<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literals.extend(literals.into_iter().map(Into::into));
        self
    }

    /// Allows `token` (e.g. `"rgb("`), with its arguments governed by schema key `key`
    #[must_use]
    pub fn function(mut self, token: impl Into<String>, key: impl Into<String>) -> Self {
        self.fn_keys.insert(token.into(), key.into());
        self
    }

    /// Allows every `(token, key)` pair in `functions`
    #[must_use]
    pub fn functions<I, K, V>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fn_keys.extend(
            functions
                .into_iter()
                .map(|(token, key)| (token.into(), key.into())),
        );
        self
    }

    /// Finishes the rule
    #[must_use]
    pub fn build(self) -> Property {
        Property {
            mask: self.mask,
            literals: self.literals,
            fn_keys: self.fn_keys,
        }
    }

    /// Finishes the rule and wraps it for sharing between property names
    #[must_use]
    pub fn build_rc(self) -> PropertyRc {
        Arc::new(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_structural() {
        let a = Property::new(TokenMask::QUANTITY, vec!["auto", "inherit"], [("rect(", "rect()")]);
        let b = Property::new(
            TokenMask::QUANTITY,
            HashSet::from(["inherit", "auto", "auto"]),
            BTreeMap::from([("rect(", "rect()")]),
        );
        assert_eq!(a, b);
        assert!(!std::ptr::eq(&a, &b));

        let c = Property::new(
            TokenMask::QUANTITY | TokenMask::NEGATIVE,
            vec!["auto", "inherit"],
            [("rect(", "rect()")],
        );
        assert_ne!(a, c);

        let d = Property::new(TokenMask::QUANTITY, vec!["auto"], [("rect(", "rect()")]);
        assert_ne!(a, d);

        let e = Property::new(TokenMask::QUANTITY, vec!["auto", "inherit"], [("rect(", "clip()")]);
        assert_ne!(a, e);
    }

    #[test]
    fn test_disallowed() {
        let sentinel = Property::disallowed();
        assert!(sentinel.is_disallowed());
        assert!(sentinel.mask().is_empty());
        assert!(sentinel.literals().is_empty());
        assert!(sentinel.fn_keys().is_empty());
        assert_eq!(**DISALLOWED, sentinel);
        assert_eq!(Property::default(), sentinel);
        assert_eq!(Property::builder().build(), sentinel);
    }

    #[test]
    fn test_accessors() {
        let prop = Property::builder()
            .mask(TokenMask::HASH_VALUE)
            .literal("inherit")
            .literals(["red", "blue"])
            .functions([("rgb(", "rgb()"), ("hsl(", "hsl()")])
            .build();

        assert_eq!(prop.mask(), TokenMask::HASH_VALUE);
        assert!(prop.allows(TokenMask::HASH_VALUE));
        assert!(!prop.allows(TokenMask::QUANTITY));
        assert!(prop.allows_literal("red"));
        assert!(!prop.allows_literal("RED"));
        assert!(!prop.allows_literal("green"));
        assert_eq!(prop.function_key("hsl("), Some("hsl()"));
        assert_eq!(prop.function_key("hsl"), None);
        assert!(!prop.is_disallowed());

        let literals: Vec<&str> = prop.literals().iter().map(String::as_str).collect();
        assert_eq!(literals, vec!["blue", "inherit", "red"]);
    }

    #[test]
    fn test_mask_only_rule_is_not_disallowed() {
        let prop = Property::builder().mask(TokenMask::URL).build();
        assert!(!prop.is_disallowed());
        assert_ne!(prop, Property::disallowed());
    }

    #[test]
    fn test_display() {
        let prop = Property::builder()
            .mask(TokenMask::QUANTITY)
            .literals(["auto"])
            .function("rect(", "rect()")
            .build();
        assert_eq!(
            prop.to_string(),
            "Property(mask: QUANTITY, literals: [\"auto\"], functions: {\"rect(\": \"rect()\"})"
        );
        assert_eq!(
            Property::disallowed().to_string(),
            "Property(mask: none, literals: [], functions: {})"
        );
    }
}
