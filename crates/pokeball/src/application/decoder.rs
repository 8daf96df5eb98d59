//! Partial-schema decoding of catalog responses
//!
//! Every recognized key is independently absent-or-typed: a missing key
//! decodes to `None`, a present key of the wrong type is an error. Unknown
//! keys are ignored. All offending keys are reported together.

use serde_json::{Map, Value};

use crate::application::error::{DecodeError, FieldIssue};
use crate::domain::PokemonDetails;

const EXPECTED_OBJECT: &str = "JSON object";
const EXPECTED_NUMBER: &str = "number";
const EXPECTED_STRING: &str = "string";
const EXPECTED_BOOLEAN: &str = "boolean";

/// Longest string value quoted back in a diagnostic
const MAX_QUOTED_LEN: usize = 40;

/// Decode a raw response body.
pub fn decode_pokemon_details(body: &str) -> Result<PokemonDetails, DecodeError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DecodeError::root(EXPECTED_OBJECT, format!("malformed JSON ({e})")))?;
    decode_pokemon_value(&value)
}

/// Decode an already-parsed JSON value.
pub fn decode_pokemon_value(value: &Value) -> Result<PokemonDetails, DecodeError> {
    let Some(object) = value.as_object() else {
        return Err(DecodeError::root(EXPECTED_OBJECT, describe(value)));
    };

    let mut fields = FieldReader::new(object);
    let details = PokemonDetails {
        id: fields.number("id"),
        name: fields.string("name"),
        base_experience: fields.number("base_experience"),
        height: fields.number("height"),
        is_default: fields.boolean("is_default"),
        order: fields.number("order"),
        weight: fields.number("weight"),
    };
    fields.finish(details)
}

/// Reads optional fields out of one object, collecting type mismatches.
struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            issues: Vec::new(),
        }
    }

    /// Any JSON number. serde_json never yields NaN or infinities.
    fn number(&mut self, key: &str) -> Option<f64> {
        let value = self.object.get(key)?;
        match value.as_f64() {
            Some(n) => Some(n),
            None => self.reject(key, EXPECTED_NUMBER, value),
        }
    }

    fn string(&mut self, key: &str) -> Option<String> {
        let value = self.object.get(key)?;
        match value.as_str() {
            Some(s) => Some(s.to_owned()),
            None => self.reject(key, EXPECTED_STRING, value),
        }
    }

    fn boolean(&mut self, key: &str) -> Option<bool> {
        let value = self.object.get(key)?;
        match value.as_bool() {
            Some(b) => Some(b),
            None => self.reject(key, EXPECTED_BOOLEAN, value),
        }
    }

    fn reject<T>(&mut self, key: &str, expected: &'static str, value: &Value) -> Option<T> {
        self.issues
            .push(FieldIssue::new(key, expected, describe(value)));
        None
    }

    fn finish(self, details: PokemonDetails) -> Result<PokemonDetails, DecodeError> {
        if self.issues.is_empty() {
            Ok(details)
        } else {
            Err(DecodeError::new(self.issues))
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.chars().count() > MAX_QUOTED_LEN => {
            let head: String = s.chars().take(MAX_QUOTED_LEN).collect();
            format!("string {head:?}...")
        }
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
