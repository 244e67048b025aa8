use anyhow::anyhow;
use axum::http::{header, HeaderMap};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::user::NewUser;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and birthDate are required";

/// Request body for create and update. Fields stay loosely typed so the
/// presence check sees exactly what the client sent.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default, rename = "birthDate")]
    pub birth_date: Option<Value>,
}

impl UserPayload {
    /// Reads the body only when it is declared as JSON and holds an object.
    /// Anything else leaves every field absent, so the presence check answers.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Self {
        let is_json = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));
        if !is_json {
            return Self::default();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Presence check first, then conversion to column values.
    ///
    /// A `birthDate` that passes the presence check but is not a date is a
    /// server fault, the same way the database would refuse it.
    pub fn validate(self) -> Result<NewUser, AppError> {
        let (Some(name), Some(email), Some(birth_date)) = (
            self.name.filter(is_truthy),
            self.email.filter(is_truthy),
            self.birth_date.filter(is_truthy),
        ) else {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        let birth_date = parse_birth_date(&into_text(birth_date))?;

        Ok(NewUser {
            name: into_text(name),
            email: into_text(email),
            birth_date,
        })
    }
}

/// Loose truthiness: `null`, `false`, `0`, and `""` are all absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Date spellings accepted besides RFC 3339 timestamps.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%b %d %Y", "%B %d %Y"];

/// Accepts the common ISO, slash, compact (`YYYYMMDD`), and month-name
/// spellings, or an RFC 3339 timestamp whose date part is kept.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| parse_compact_date(raw))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .ok_or_else(|| AppError::Internal(anyhow!("invalid input syntax for type date: \"{raw}\"")))
}

fn parse_compact_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(
        raw[..4].parse().ok()?,
        raw[4..6].parse().ok()?,
        raw[6..].parse().ok()?,
    )
}
