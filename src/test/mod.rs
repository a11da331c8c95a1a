use crate::{CssSchema, Property, TokenMask};

// Helper function to create a margin-like rule
pub fn margin_rule() -> Property {
    Property::builder()
        .mask(TokenMask::QUANTITY | TokenMask::NEGATIVE)
        .literals(["auto", "inherit"])
        .build()
}

// Helper function to create a color-like rule without function keys
pub fn color_rule() -> Property {
    Property::builder()
        .mask(TokenMask::HASH_VALUE)
        .literals(["inherit", "red", "transparent"])
        .build()
}

// Helper function to create a rule that only allows one function
pub fn function_rule(token: &str, key: &str) -> Property {
    Property::builder().function(token, key).build()
}

// Helper function to create a schema from an explicit, self-contained mapping
pub fn schema_of(entries: &[(&str, Property)]) -> CssSchema {
    CssSchema::with_properties(entries.iter().map(|(name, rule)| (*name, rule.clone())))
        .expect("test mapping is self-contained")
}
