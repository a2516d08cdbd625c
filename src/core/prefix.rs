//! Namespace prefix derivation
//!
//! A namespace's prefix is derived from the name of the type that declares
//! it: `XmpRightsNamespace` becomes `xmp-rights`. Words are split on
//! camel-case boundaries, lowercased, and the word `namespace` is dropped.

use regex::Regex;
use std::sync::OnceLock;

const SEPARATOR: &str = "_";

/// Splits an uppercase word off whatever precedes it: `XMPRights` -> `XMP_Rights`.
fn word_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("word-start regex must compile"))
}

/// Splits a lowercase letter or digit from a following capital: `xmpRights` -> `xmp_Rights`.
fn lower_upper_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("lower-upper regex must compile"))
}

/// Derive the canonical hyphenated prefix from a namespace type name
///
/// The word-start rule runs first so that acronym runs stay together
/// (`DCNamespace` -> `dc`), then the lower/upper rule splits what is left.
/// A run of three or more capitals is kept as one word up to the capital
/// that starts a lowercase word: `ABCDefNamespace` -> `abc-def`.
///
/// # Example
///
/// ```rust
/// use xmpns::derive_prefix;
///
/// assert_eq!(derive_prefix("XmpRightsNamespace"), "xmp-rights");
/// assert_eq!(derive_prefix("ExifEXNamespace"), "exif-ex");
/// assert_eq!(derive_prefix("Namespace"), "");
/// ```
pub fn derive_prefix(type_name: &str) -> String {
    let split = word_start_regex().replace_all(type_name, "${1}_${2}");
    let split = lower_upper_regex().replace_all(&split, "${1}_${2}");

    split
        .to_lowercase()
        .split(SEPARATOR)
        .filter(|word| *word != "namespace")
        .collect::<Vec<_>>()
        .join("-")
}

/// Short name of a type: the last path segment, without generic arguments
///
/// `xmpns::core::schemas::DcNamespace` becomes `DcNamespace`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
