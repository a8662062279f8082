use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Identifier of a configured form.
///
/// Forms subsystems disagree on whether ids are numbers or strings, so both are
/// accepted and compared by their textual form (`1` == `"1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for FormId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for FormId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for FormId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(FormId::new(s)),
            Value::Number(n) => {
                if let Some(id) = n.as_u64() {
                    Ok(FormId(id.to_string()))
                } else if let Some(id) = n.as_i64() {
                    Ok(FormId(id.to_string()))
                } else {
                    // Whole floats like 1.0 name the same form as 1
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                            Ok(FormId(format!("{}", f as i64)))
                        }
                        _ => Err(serde::de::Error::custom(format!(
                            "form id must be a whole number, got {}",
                            n
                        ))),
                    }
                }
            }
            other => Err(serde::de::Error::custom(format!(
                "form id must be a string or integer, got {}",
                other
            ))),
        }
    }
}

// The form a submission belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: FormId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl FormDefinition {
    pub fn new(id: impl Into<FormId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }
}

/// Field values of one submission, keyed by field path.
///
/// A field path is the field id (`"2"`), or `"<id>.<subindex>"` for the
/// components of a composite field (`"1.3"`, `"1.6"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionEntry {
    fields: HashMap<String, String>,
}

impl SubmissionEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.fields.get(path).map(String::as_str)
    }

    /// Value at `path`, or an empty string when the field was not submitted.
    pub fn value_or_empty(&self, path: &str) -> &str {
        self.get(path).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SubmissionEntry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for SubmissionEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;
        let mut fields = HashMap::with_capacity(raw.len());

        for (path, value) in raw {
            match value {
                Value::String(s) => {
                    fields.insert(path, s);
                }
                Value::Number(n) => {
                    fields.insert(path, n.to_string());
                }
                Value::Bool(b) => {
                    fields.insert(path, b.to_string());
                }
                Value::Null => {}
                Value::Array(_) | Value::Object(_) => {
                    debug!("Dropping non-scalar value for field path {}", path);
                }
            }
        }

        Ok(Self { fields })
    }
}

// Payload delivered by the forms subsystem once a submission is finalized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub form: FormDefinition,
    pub entry: SubmissionEntry,
}
