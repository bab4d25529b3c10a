//! Three-tier settings resolution
//!
//! Each setting resolves in a fixed order:
//!
//! 1. **Property override**: a non-blank value in the property source, parsed
//!    to the setting's kind. A value that fails to parse is an error; it never
//!    falls through to the next tier.
//! 2. **Declared value**: whatever the build script block assigned.
//! 3. **Default**.
//!
//! Blank and whitespace-only property values count as unset, so empty CLI
//! flags pass through harmlessly. Nothing is cached: every call reads the
//! property source again.

use std::path::{Path, PathBuf};

use kubext_fs::ProjectLayout;

use crate::mode::{BuildStrategy, ResourceFileType};
use crate::property::PropertySource;
use crate::{Error, Result};

/// A setting kind that can be parsed from a property string.
pub trait FromProperty: Sized {
    /// Kind name used in parse errors
    const KIND: &'static str;

    fn parse_property(raw: &str) -> Option<Self>;

    fn from_property(key: &str, raw: &str) -> Result<Self> {
        Self::parse_property(raw).ok_or_else(|| Error::Parse {
            key: key.to_string(),
            value: raw.to_string(),
            kind: Self::KIND,
        })
    }
}

impl FromProperty for bool {
    const KIND: &'static str = "boolean";

    /// Only `true` (any case) is true; every other token reads as false.
    fn parse_property(raw: &str) -> Option<Self> {
        Some(raw.eq_ignore_ascii_case("true"))
    }
}

impl FromProperty for i32 {
    const KIND: &'static str = "integer";

    fn parse_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromProperty for String {
    const KIND: &'static str = "string";

    fn parse_property(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromProperty for BuildStrategy {
    const KIND: &'static str = "build strategy";

    fn parse_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromProperty for ResourceFileType {
    const KIND: &'static str = "resource file type";

    fn parse_property(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// The property value for `key`, unless it is missing or blank.
pub fn property<'a, S>(source: &'a S, key: &str) -> Option<&'a str>
where
    S: PropertySource + ?Sized,
{
    source.get(key).filter(|value| !value.trim().is_empty())
}

/// Resolve a setting that always has a value.
pub fn resolve<S, T>(source: &S, key: &str, declared: Option<T>, default: T) -> Result<T>
where
    S: PropertySource + ?Sized,
    T: FromProperty,
{
    match property(source, key) {
        Some(raw) => {
            tracing::trace!(key, raw, "Using property override");
            T::from_property(key, raw)
        }
        None => Ok(declared.unwrap_or(default)),
    }
}

/// Resolve a setting whose default may be absent.
pub fn resolve_optional<S, T>(
    source: &S,
    key: &str,
    declared: Option<T>,
    default: Option<T>,
) -> Result<Option<T>>
where
    S: PropertySource + ?Sized,
    T: FromProperty,
{
    match property(source, key) {
        Some(raw) => {
            tracing::trace!(key, raw, "Using property override");
            T::from_property(key, raw).map(Some)
        }
        None => Ok(declared.or(default)),
    }
}

/// Resolve a path setting.
///
/// A property override is resolved against the layout's base directory rather
/// than taken literally; declared and default paths are returned as they are.
pub fn resolve_path<S>(
    source: &S,
    layout: &ProjectLayout,
    key: &str,
    declared: Option<&Path>,
    default: PathBuf,
) -> PathBuf
where
    S: PropertySource + ?Sized,
{
    match property(source, key) {
        Some(raw) => {
            tracing::trace!(key, raw, "Using property override");
            layout.resolve(raw)
        }
        None => declared.map(Path::to_path_buf).unwrap_or(default),
    }
}

/// Two-tier resolution: the property override, else a plain field value.
///
/// Used for the enumerated settings that have no declared tier of their own.
pub fn resolve_field<S, T>(source: &S, key: &str, field: T) -> Result<T>
where
    S: PropertySource + ?Sized,
    T: FromProperty,
{
    match property(source, key) {
        Some(raw) => T::from_property(key, raw),
        None => Ok(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Properties;

    #[test]
    fn property_beats_declared_beats_default() {
        let props = Properties::new().with("k", "false");
        assert!(!resolve(&props, "k", Some(true), true).unwrap());
        assert!(resolve(&Properties::new(), "k", Some(true), false).unwrap());
        assert!(resolve(&Properties::new(), "k", None, true).unwrap());
    }

    #[test]
    fn blank_property_falls_through() {
        let props = Properties::new().with("k", "   ");
        assert!(resolve(&props, "k", Some(true), false).unwrap());
        assert_eq!(property(&props, "k"), None);
    }

    #[test]
    fn boolean_parsing_never_fails() {
        assert_eq!(bool::parse_property("TRUE"), Some(true));
        assert_eq!(bool::parse_property("False"), Some(false));
        assert_eq!(bool::parse_property("yes"), Some(false));
        assert_eq!(bool::parse_property(" true"), Some(false));
    }

    #[test]
    fn integer_parse_failure_surfaces() {
        let props = Properties::new().with("retries", "abc");
        let err = resolve(&props, "retries", None, 0i32).unwrap_err();
        assert_eq!(err.to_string(), "Property retries has invalid integer value 'abc'");
    }

    #[test]
    fn string_property_is_returned_verbatim() {
        let props = Properties::new().with("ns", " spaced ");
        assert_eq!(
            resolve_optional::<_, String>(&props, "ns", None, None).unwrap(),
            Some(" spaced ".to_string())
        );
    }

    #[test]
    fn path_override_joins_base() {
        let props = Properties::new().with("m", "out/m.yml");
        let resolved = resolve_path(
            &props,
            &ProjectLayout::conventional("/proj").unwrap(),
            "m",
            Some(Path::new("/abs/declared.yml")),
            PathBuf::from("/abs/default.yml"),
        );
        assert_eq!(resolved, PathBuf::from("/proj/out/m.yml"));
    }

    #[test]
    fn field_tier_skips_declared_values() {
        let props = Properties::new();
        assert_eq!(
            resolve_field(&props, "s", BuildStrategy::S2i).unwrap(),
            BuildStrategy::S2i
        );
        let props = Properties::new().with("s", "jib");
        assert_eq!(
            resolve_field(&props, "s", BuildStrategy::S2i).unwrap(),
            BuildStrategy::Jib
        );
    }
}
