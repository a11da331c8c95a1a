//! Token category flags for CSS property values.
//!
//! A [`TokenMask`] records which groups of tokens are structurally allowed in a property's
//! value, independent of any specific keyword. The raw bit values are stable and shared with
//! the catalogue data, so masks can be stored or exchanged as plain integers.
//!
//! # Example
//!
//! ```rust
//! use cssschema::TokenMask;
//!
//! let mask = TokenMask::from_bits_truncate(5);
//! assert_eq!(mask, TokenMask::QUANTITY | TokenMask::NEGATIVE);
//! assert_eq!(mask.to_string(), "QUANTITY | NEGATIVE");
//! ```

use std::fmt;

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    /// Groups of tokens that may appear in a CSS property value.
    ///
    /// Combined only by bitwise OR. The empty mask allows no token category at all; such a
    /// property can still admit its explicit literal keywords and functions.
    pub struct TokenMask: u32 {
        /// Numeric quantities: numbers, percentages and dimensions (`12px`, `50%`)
        const QUANTITY = 0x0001;
        /// Hash values, i.e. hex colors (`#fff`, `#c0ffee`)
        const HASH_VALUE = 0x0002;
        /// Quantities may be negative
        const NEGATIVE = 0x0004;
        /// Quoted strings
        const STRING = 0x0008;
        /// `url(...)` references
        const URL = 0x0010;
        /// Bare identifiers that are not reserved keywords (e.g. font family names)
        const UNRESERVED_WORD = 0x0040;
        /// Unicode ranges (`U+0025-00FF`)
        const UNICODE_RANGE = 0x0080;
    }
}

impl TokenMask {
    /// Returns `true` if every flag of `required` is allowed by this mask.
    #[must_use]
    pub fn allows(self, required: TokenMask) -> bool {
        self.contains(required)
    }
}

impl Default for TokenMask {
    fn default() -> Self {
        TokenMask::empty()
    }
}

impl fmt::Display for TokenMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}
