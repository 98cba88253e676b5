//! Building the replacement table for one run.
//!
//! Static pairs from the configuration are merged with positional values taken
//! from the type value given on the command line. Positional values win on
//! key collision.

use indexmap::IndexMap;
use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::substitute::split_path;

/// Token name → value. Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements(IndexMap<String, String>);

impl Replacements {
    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Checks that `value` supplies at least as many segments as `template` declares.
///
/// # Errors
/// * `Error::TypeValueMismatch` if `value` has fewer segments
pub fn validate_type_value(template: &str, value: &str) -> Result<()> {
    if split_path(value).len() < split_path(template).len() {
        return Err(Error::TypeValueMismatch {
            value: value.to_string(),
            template: template.to_string(),
        });
    }
    Ok(())
}

/// Maps each declared parameter name to the supplied segment at the same position.
///
/// Excess supplied segments are ignored; parameters without a segment are left out.
pub fn positional_values(template: &str, value: &str) -> IndexMap<String, String> {
    let supplied = split_path(value);
    split_path(template)
        .into_iter()
        .zip(supplied)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Builds the replacement table for `type_id` from the raw `type_value`.
///
/// # Errors
/// * `Error::UnknownType` if the type is not declared
/// * `Error::TypeValueMismatch` if `type_value` has too few segments
pub fn build_replacements(
    config: &Config,
    type_id: &str,
    type_value: &str,
) -> Result<Replacements> {
    let template = config.type_template(type_id)?;
    validate_type_value(template, type_value)?;

    let mut table = config.static_replace_pairs.clone();
    for (name, value) in positional_values(template, type_value) {
        table.insert(name, value);
    }

    let replacements = Replacements(table);
    for (token, value) in replacements.iter() {
        debug!("[[{token}]] = {value:?}");
    }
    Ok(replacements)
}
