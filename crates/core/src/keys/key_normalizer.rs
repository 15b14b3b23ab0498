//! Normalization of free-form backend enum strings into domain values.
//!
//! The backend reports enumerated concepts (objective, pace, diet preset,
//! meal type) as loosely-typed strings whose casing, accents, and separators
//! vary by service and locale. Everything in the core that ingests such a
//! string routes through [`normalize`], so "unrecognized" stays observable
//! instead of being papered over with a default.

use log::warn;
use thiserror::Error;

/// A backend string matched neither a canonical enum name nor any synonym
/// for its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized {domain} key '{value}'")]
pub struct NotRecognizedError {
    /// Domain the lookup ran against (e.g. "objective").
    pub domain: &'static str,
    /// The raw value as received, before canonicalization.
    pub value: String,
}

/// An enumerated domain concept that can be parsed from backend strings.
///
/// `canonical_names` are the wire names the backend is expected to send;
/// `synonyms` is the tolerance table, keyed by canonicalized form (see
/// [`canonical_key`]).
pub trait DomainKey: Sized + Copy + 'static {
    /// Domain name used in logs and error reports.
    const DOMAIN: &'static str;

    fn canonical_names() -> &'static [(&'static str, Self)];

    fn synonyms() -> &'static [(&'static str, Self)];
}

/// Canonicalization transform applied before the synonym lookup:
/// lowercase, fixed accented-vowel substitutions, and hyphens/internal
/// spaces folded to underscores.
pub fn canonical_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        match ch {
            'á' | 'Á' => key.push('a'),
            'é' | 'É' => key.push('e'),
            'í' | 'Í' => key.push('i'),
            'ó' | 'Ó' => key.push('o'),
            'ú' | 'Ú' => key.push('u'),
            '-' | ' ' => key.push('_'),
            _ => key.extend(ch.to_lowercase()),
        }
    }
    key
}

/// Parses a backend string into a domain value.
///
/// Canonical names are matched first, case-insensitively, and are never
/// shadowed by the synonym tables. Failing that, the canonicalized key is
/// looked up in the domain's synonym table. A miss is an error - callers
/// must not substitute a default silently.
pub fn normalize<K: DomainKey>(raw: &str) -> Result<K, NotRecognizedError> {
    let trimmed = raw.trim();
    for (name, value) in K::canonical_names() {
        if trimmed.eq_ignore_ascii_case(name) {
            return Ok(*value);
        }
    }

    let key = canonical_key(trimmed);
    K::synonyms()
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| NotRecognizedError {
            domain: K::DOMAIN,
            value: raw.to_string(),
        })
}

/// Normalizes an optional backend field.
///
/// A missing or blank value is intentionally unset (`Ok(None)`); an
/// unrecognized value is still an error, so the caller decides what
/// "unparseable" means for its operation.
pub fn normalize_unset<K: DomainKey>(raw: Option<&str>) -> Result<Option<K>, NotRecognizedError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => normalize::<K>(s).map(Some),
    }
}

/// Policy point for reads that tolerate unknown keys: the unrecognized value
/// is logged and mapped to unset. Write paths stay on [`normalize`].
pub fn normalize_lenient<K: DomainKey>(raw: Option<&str>) -> Option<K> {
    match normalize_unset::<K>(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "Treating unrecognized {} key '{}' as unset",
                err.domain, err.value
            );
            None
        }
    }
}
