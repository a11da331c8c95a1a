//! Browser vendor prefixes recognized during property resolution.
//!
//! Vendor-specific aliases such as `-webkit-border-radius` carry the same admission rules as
//! their standard counterpart. Only the closed set in [`VendorPrefix`] is recognized; any
//! other leading `-ident-` (`-epub-`, `-khtml-`, ...) is treated as part of the name.

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// The vendor prefixes that alias an unprefixed property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
pub enum VendorPrefix {
    /// Microsoft, `-ms-`
    #[strum(serialize = "-ms-")]
    Ms,
    /// Mozilla, `-moz-`
    #[strum(serialize = "-moz-")]
    Moz,
    /// Opera, `-o-`
    #[strum(serialize = "-o-")]
    O,
    /// WebKit and Blink, `-webkit-`
    #[strum(serialize = "-webkit-")]
    Webkit,
}

impl VendorPrefix {
    /// Returns the literal prefix, including both hyphens
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Splits a recognized vendor prefix off a lower-case CSS keyword.
///
/// `"-moz-foo"` becomes `(VendorPrefix::Moz, "foo")`. Returns `None` if the keyword does
/// not start with one of the four recognized prefixes. Matching is literal, so callers
/// canonicalize case first.
///
/// # Examples
///
/// ```rust
/// use cssschema::{strip_vendor_prefix, VendorPrefix};
///
/// assert_eq!(
///     strip_vendor_prefix("-webkit-border-radius"),
///     Some((VendorPrefix::Webkit, "border-radius"))
/// );
/// assert_eq!(strip_vendor_prefix("-epub-hyphens"), None);
/// assert_eq!(strip_vendor_prefix("border-radius"), None);
/// ```
#[must_use]
pub fn strip_vendor_prefix(keyword: &str) -> Option<(VendorPrefix, &str)> {
    let bytes = keyword.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'-' {
        return None;
    }

    let prefix = match bytes[1] {
        b'm' => {
            if keyword.starts_with("-ms-") {
                VendorPrefix::Ms
            } else if keyword.starts_with("-moz-") {
                VendorPrefix::Moz
            } else {
                return None;
            }
        }
        b'o' if keyword.starts_with("-o-") => VendorPrefix::O,
        b'w' if keyword.starts_with("-webkit-") => VendorPrefix::Webkit,
        _ => return None,
    };

    Some((prefix, &keyword[prefix.as_str().len()..]))
}
