//! Integration tests for resolving property names against built schemas.
//!
//! These exercise the public API the way a CSS value sanitizer does: build a schema once,
//! then look up every declaration's property name.

use cssschema::{prelude::*, DEFINITIONS};

/// A vendor-prefixed alias of a default property resolves to the same rule.
#[test]
fn test_webkit_border_radius_against_default() {
    let prefixed = DEFAULT.for_key("-webkit-border-radius");
    let standard = DEFAULT.for_key("border-radius");
    assert_eq!(prefixed, standard);
    assert!(prefixed.allows(TokenMask::QUANTITY | TokenMask::NEGATIVE));
    assert!(prefixed.allows_literal("/"));
}

/// Every catalogue name resolves to its own catalogue rule in a single-name schema.
#[test]
fn test_every_catalogue_name_resolves_to_itself() -> Result<()> {
    for (name, rule) in DEFINITIONS.iter() {
        let schema = CssSchema::with_names([*name])?;
        assert_eq!(schema.for_key(name), rule, "{name}");
        assert_eq!(schema.for_key(&name.to_ascii_uppercase()), rule, "{name}");
    }
    Ok(())
}

#[test]
fn test_unknown_names_are_disallowed() {
    for name in ["behavior", "-moz-binding", "expression", "", "  color", "color:"] {
        assert!(DEFAULT.for_key(name).is_disallowed(), "{name:?}");
    }
}

#[test]
fn test_vendor_fallback_for_each_prefix() -> Result<()> {
    let schema = CssSchema::with_names(["text-overflow", "opacity"])?;
    for prefix in ["-ms-", "-moz-", "-o-", "-webkit-"] {
        let name = format!("{prefix}opacity");
        assert_eq!(schema.for_key(&name), schema.for_key("opacity"), "{name}");
    }
    assert!(schema.for_key("-epub-opacity").is_disallowed());
    assert!(schema.for_key("-khtml-opacity").is_disallowed());
    Ok(())
}

#[test]
fn test_vendor_fallback_is_case_insensitive() -> Result<()> {
    let schema = CssSchema::with_names(["text-overflow"])?;
    assert_eq!(
        schema.for_key("-O-Text-Overflow"),
        schema.for_key("text-overflow")
    );
    Ok(())
}

/// A prefixed entry of its own takes precedence over the unprefixed rule.
#[test]
fn test_prefixed_entry_wins_over_fallback() -> Result<()> {
    let schema = CssSchema::with_names(["background-clip", "-webkit-background-clip"])?;
    assert_ne!(
        schema.for_key("-webkit-background-clip"),
        schema.for_key("background-clip")
    );
    assert!(schema
        .for_key("-webkit-background-clip")
        .allows_literal("text"));
    assert!(!schema.for_key("background-clip").allows_literal("text"));
    Ok(())
}

/// Resolving a function token leads to the argument schema of that function.
#[test]
fn test_function_argument_lookup() {
    let background = DEFAULT.for_key("background");
    let key = background
        .function_key("linear-gradient(")
        .expect("background allows linear-gradient(");
    let arguments = DEFAULT.for_key(key);
    assert!(!arguments.is_disallowed());
    assert!(arguments.allows_literal("to"));
    assert!(arguments.allows(TokenMask::HASH_VALUE));
}

#[test]
fn test_default_color_rule() {
    let color = DEFAULT.for_key("color");
    assert!(color.allows(TokenMask::HASH_VALUE));
    assert!(!color.allows(TokenMask::URL));
    assert!(color.allows_literal("papayawhip"));
    assert!(!color.allows_literal("expression"));

    let rgb = DEFAULT.for_key(color.function_key("rgb(").unwrap());
    assert!(rgb.allows(TokenMask::QUANTITY));
    assert!(rgb.allows_literal(","));
}

#[test]
fn test_resolution_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let name = if i % 2 == 0 { "-webkit-border-radius" } else { "border-radius" };
                DEFAULT.for_key(name).clone()
            })
        })
        .collect();

    let rules: Vec<PropertyRc> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(rules.windows(2).all(|pair| pair[0] == pair[1]));
}
