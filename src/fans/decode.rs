//! Decoding of listing endpoint responses.
//!
//! The endpoint answers with JSON-like text that is not valid JSON as sent:
//! it starts with an anti-hijacking sentinel and may delimit strings with
//! single quotes. [`strip_sentinel`] and [`normalize_quotes`] turn it into
//! standard JSON before [`decode_batch`] does the structural parsing.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::model::{Fan, FanKind, Profile};
use crate::error::FanError;

/// Anti-JSON-hijacking prefix the endpoint puts in front of every body.
pub const SENTINEL: &str = "for (;;);";

const CONTEXT: &str = "fan listing endpoint";

/// Removes the leading [`SENTINEL`], tolerating leading whitespace.
///
/// Text without the sentinel is returned unchanged.
#[must_use]
pub fn strip_sentinel(text: &str) -> &str {
    let trimmed = text.trim_start();
    trimmed.strip_prefix(SENTINEL).unwrap_or(text)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Outside,
    Single,
    Double,
}

/// Rewrites single-quoted string literals as double-quoted JSON strings.
///
/// Inside a single-quoted literal `"` is escaped and `\'` is unescaped.
/// Double-quoted strings are copied verbatim, so apostrophes inside them are
/// left alone.
#[must_use]
pub fn normalize_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = QuoteState::Outside;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        match state {
            QuoteState::Outside => match ch {
                '\'' => {
                    out.push('"');
                    state = QuoteState::Single;
                }
                '"' => {
                    out.push('"');
                    state = QuoteState::Double;
                }
                _ => out.push(ch),
            },
            QuoteState::Double => {
                out.push(ch);
                match ch {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    }
                    '"' => state = QuoteState::Outside,
                    _ => {}
                }
            }
            QuoteState::Single => match ch {
                '\\' => match chars.next() {
                    Some('\'') => out.push('\''),
                    Some(escaped) => {
                        out.push('\\');
                        out.push(escaped);
                    }
                    None => out.push('\\'),
                },
                '"' => out.push_str("\\\""),
                '\'' => {
                    out.push('"');
                    state = QuoteState::Outside;
                }
                _ => out.push(ch),
            },
        }
    }

    out
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    payload: Value,
    error: Option<Value>,
    error_summary: Option<String>,
}

/// Decodes one listing response body into fans of the given kind.
///
/// Applies [`strip_sentinel`] and [`normalize_quotes`] first. Records live at
/// `payload.data`; a missing array decodes as an empty batch. Each record is
/// read field by field, so a missing or oddly shaped `profile.id`,
/// `profile.name` or `timestamp` decodes as empty/zero.
///
/// # Errors
///
/// Returns [`FanError::Parse`] if the cleaned text is not a JSON object or
/// the body carries an `error` field.
pub fn decode_batch(body: &str, kind: FanKind) -> Result<Vec<Fan>, FanError> {
    let json = normalize_quotes(strip_sentinel(body));
    let envelope: Envelope = serde_json::from_str(&json)
        .map_err(|error| FanError::parse(CONTEXT, format!("invalid JSON: {error}")))?;

    if let Some(code) = envelope.error.filter(|code| !code.is_null()) {
        let summary = envelope
            .error_summary
            .unwrap_or_else(|| "no error summary".to_string());
        return Err(FanError::parse(
            CONTEXT,
            format!("endpoint returned error {code}: {summary}"),
        ));
    }

    let Some(data) = envelope.payload.get("data").and_then(Value::as_array) else {
        debug!(%kind, "response has no payload.data array; treating as empty batch");
        return Ok(Vec::new());
    };

    Ok(data.iter().map(|record| to_fan(record, kind)).collect())
}

fn to_fan(record: &Value, kind: FanKind) -> Fan {
    Fan {
        profile: Profile {
            id: value_to_string(record.pointer("/profile/id")),
            name: value_to_string(record.pointer("/profile/name")),
        },
        timestamp: truncate_timestamp(record.pointer("/timestamp").map_or(0, value_to_i64)),
        kind,
    }
}

fn value_to_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn value_to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|n| n as i64))
            .or_else(|| number.as_f64().map(|n| n as i64))
            .unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Keeps the low 32 bits, like a two's-complement narrowing cast.
#[allow(clippy::cast_possible_truncation)]
fn truncate_timestamp(seconds: i64) -> i32 {
    seconds as i32
}
