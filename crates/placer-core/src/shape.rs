use std::{collections::HashSet, fmt};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use serde_json::Value;

use crate::{
    error::{CompileError, CompileResult},
    separator::looks_like_wrong_separator,
};

/// Recognized shape of a (quote-normalized) constraint spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecShape {
    /// Blank text.
    Empty,
    /// `["+zone=sh", ...]`: raw constraint tokens.
    Array(Vec<String>),
    /// `{"+zone=sh,-zone=bj": 2, ...}`: raw comma-joined token lists with their
    /// counts, in document order. Counts are wide enough to hold any `u64` and
    /// any negative `i64`; range checks are left to the compiler.
    Map(Vec<(String, i128)>),
}

impl SpecShape {
    /// Classify and parse `text`.
    ///
    /// Expects double-quoted JSON; see [`crate::normalize::normalize_quotes`].
    /// Tokens are not parsed here.
    pub fn parse(text: &str) -> CompileResult<Self> {
        let text = text.trim();

        match text.chars().next() {
            None => Ok(SpecShape::Empty),
            Some('[') => parse_array(text),
            Some('{') => parse_map(text),
            Some(_) => Err(CompileError::InvalidFormat(format!(
                "should be [constraint1, ...] or {{constraints1: cnt1, ...}}, got '{text}'"
            ))),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            SpecShape::Empty => "empty",
            SpecShape::Array(_) => "array",
            SpecShape::Map(_) => "map",
        }
    }
}

fn parse_array(text: &str) -> CompileResult<SpecShape> {
    serde_json::from_str::<Vec<String>>(text)
        .map(SpecShape::Array)
        .map_err(|e| {
            CompileError::InvalidFormat(format!("should be [constraint1, ...] (error {e})"))
        })
}

fn parse_map(text: &str) -> CompileResult<SpecShape> {
    let entries = match serde_json::from_str::<MapEntries>(text) {
        Ok(MapEntries(entries)) => entries,
        Err(_) if looks_like_wrong_separator(text) => {
            return Err(CompileError::InvalidMappingSeparator(format!(
                "write entries as '\"+key=value\": count', got '{text}'"
            )));
        }
        Err(e) => {
            return Err(CompileError::InvalidFormat(format!(
                "should be {{constraints1: cnt1, ...}} (error {e})"
            )));
        }
    };

    let mut seen = HashSet::with_capacity(entries.len());
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        if !seen.insert(key.clone()) {
            return Err(CompileError::InvalidFormat(format!(
                "constraints '{key}' appear more than once"
            )));
        }
        let count = match (value.as_u64(), value.as_i64()) {
            (Some(c), _) => i128::from(c),
            (None, Some(c)) => i128::from(c),
            (None, None) => {
                return Err(CompileError::InvalidFormat(format!(
                    "count of '{key}' should be an integer, got {value}"
                )));
            }
        };
        out.push((key, count));
    }
    Ok(SpecShape::Map(out))
}

/// Object entries in document order, duplicates included.
///
/// `serde_json::Map` keeps only the last value of a repeated key.
struct MapEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for MapEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = MapEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of constraint lists to counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<MapEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    entries.push((key, value));
                }
                Ok(MapEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
