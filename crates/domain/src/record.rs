//! Raw records from the legacy store, plus the scalar coercers.
//!
//! The gamemode schema was reverse-engineered: column casing differs between
//! deployments, optional columns may be missing entirely, and flags are
//! stored as numeric sentinels. Every field read goes through [`RawRecord`]
//! so a missing or malformed column degrades to a defined default instead of
//! failing the request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field-keyed row snapshot from the legacy store.
///
/// Values keep whatever scalar type the driver produced (number, string,
/// null); the coercers below normalize them on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord(pub BTreeMap<String, Value>);

impl RawRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Look up a field by exact name first, then case-insensitively.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if let Some(v) = self.0.get(field) {
            return Some(v);
        }
        let lower = field.to_ascii_lowercase();
        self.0
            .iter()
            .find(|(k, _)| k.to_ascii_lowercase() == lower)
            .map(|(_, v)| v)
    }

    /// Field present with a non-null value.
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_null())
    }

    /// Numeric read with the default-to-zero contract.
    pub fn num(&self, field: &str) -> f64 {
        to_number(self.get(field))
    }

    /// Numeric read truncated to an integer (ids, counters, money).
    pub fn int(&self, field: &str) -> i64 {
        self.num(field) as i64
    }

    /// Integer read across naming variants: the first present, non-null
    /// field wins, even if it holds zero.
    pub fn int_any(&self, fields: &[&str]) -> i64 {
        for field in fields {
            if let Some(v) = self.get(field) {
                if !v.is_null() {
                    return to_number(Some(v)) as i64;
                }
            }
        }
        0
    }

    /// Strict 0/1 sentinel read: true only for exactly 1.
    pub fn bool01(&self, field: &str) -> bool {
        to_bool01(self.get(field))
    }

    /// String read with the empty-string default.
    pub fn text(&self, field: &str) -> String {
        to_string_safe(self.get(field))
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }
}

impl FromIterator<(String, Value)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Coerce any raw scalar to a finite number; everything unparseable is 0.
pub fn to_number(value: Option<&Value>) -> f64 {
    let n = match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(_) => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// True only when the value coerces to exactly 1.
///
/// The schema uses sentinels like 2, 14 and 255 for "special"/"none", so a
/// permissive truthy check would misclassify them.
pub fn to_bool01(value: Option<&Value>) -> bool {
    to_number(value) == 1.0
}

/// Stringify a raw scalar; null/absent becomes the empty string.
pub fn to_string_safe(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// Truthiness of the raw value itself (before numeric coercion): non-zero
/// numbers and non-empty strings. Used where the source only attaches a
/// label when the column actually carries something.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
