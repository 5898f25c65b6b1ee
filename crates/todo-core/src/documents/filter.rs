//! Query-by-example filters for document collections.

use std::str::FromStr;

use serde_json::Value as Json;

use crate::{
    error::{Result, TodoError},
    models::json_kind,
    session::{BindType, Binds, Value},
};

/// Equality conditions on document fields, all of which must hold.
///
/// Built from an example object such as `{"ename": "JONES", "dept.no": 20}`.
/// Keys are field paths (dot separated for nested objects); values must be
/// scalars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Json)>,
}

impl Filter {
    /// A filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from an example JSON object.
    pub fn from_value(example: &Json) -> Result<Self> {
        let object = example.as_object().ok_or_else(|| {
            TodoError::invalid_argument("filter")
                .with_reason(format!("expected a JSON object, got {}", json_kind(example)))
        })?;

        let mut conditions = Vec::with_capacity(object.len());
        for (field, value) in object {
            validate_path(field)?;
            if value.is_object() || value.is_array() {
                return Err(TodoError::invalid_argument("filter").with_reason(format!(
                    "field '{field}' must be compared with a scalar, got {}",
                    json_kind(value)
                )));
            }
            conditions.push((field.clone(), value.clone()));
        }

        Ok(Self { conditions })
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Renders the conditions as ` AND ...` SQL against the `content`
    /// column, adding the bindings they reference.
    pub(crate) fn to_sql(&self, mut binds: Binds) -> (String, Binds) {
        let mut clause = String::new();

        for (index, (field, value)) in self.conditions.iter().enumerate() {
            let path = format!("p{index}");
            let param = format!("v{index}");
            binds = binds.input(&path, BindType::Varchar, format!("$.{field}"));

            let condition = match value {
                Json::Null => format!("json_type(content, :{path}) = 'null'"),
                Json::Bool(true) => format!("json_type(content, :{path}) = 'true'"),
                Json::Bool(false) => format!("json_type(content, :{path}) = 'false'"),
                Json::String(s) => {
                    binds = binds.input(&param, BindType::Varchar, s.as_str());
                    format!(
                        "json_type(content, :{path}) = 'text' AND json_extract(content, :{path}) = :{param}"
                    )
                }
                Json::Number(n) => {
                    let number = match n.as_i64() {
                        Some(i) => Value::Integer(i),
                        None => Value::Real(n.as_f64().unwrap_or(f64::NAN)),
                    };
                    binds = binds.input(&param, BindType::Number, number);
                    format!(
                        "json_type(content, :{path}) IN ('integer', 'real') AND json_extract(content, :{path}) = :{param}"
                    )
                }
                // Rejected in from_value
                Json::Array(_) | Json::Object(_) => continue,
            };

            clause.push_str(" AND ");
            clause.push_str(&condition);
        }

        (clause, binds)
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let example: Json = serde_json::from_str(s).map_err(|e| {
            TodoError::invalid_argument("filter").with_reason(format!("not valid JSON: {e}"))
        })?;
        Self::from_value(&example)
    }
}

fn validate_path(field: &str) -> Result<()> {
    let valid = !field.is_empty()
        && field.split('.').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if valid {
        Ok(())
    } else {
        Err(TodoError::invalid_argument("filter")
            .with_reason(format!("'{field}' is not a valid field path")))
    }
}
