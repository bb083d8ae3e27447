/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use chrono::{SecondsFormat, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::locale::Locale;
use crate::messages;
use crate::suggestions;

/// Context key whose value selects the field example appended to a message
pub const FIELD_CONTEXT_KEY: &str = "field";

static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();

fn placeholder_pattern() -> Option<&'static Regex> {
  PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").ok()).as_ref()
}

/// One failed check, as produced by the validation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
  pub field: String,
  pub message: String,
  pub code: String,
}

impl ValidationError {
  pub fn new(
    field: impl Into<String>,
    message: impl Into<String>,
    code: impl Into<String>,
  ) -> Self {
    Self { field: field.into(), message: message.into(), code: code.into() }
  }
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
  message: &'a str,
  code: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  suggestion: Option<&'static str>,
}

/// Renders error codes into localized text, HTML, JSON and log lines.
///
/// Formatting never fails: unknown locales fall back to English and unknown
/// codes fall back to the caller's message.
#[derive(Debug, Clone, Default)]
pub struct ErrorFormatter {
  locale: Locale,
}

impl ErrorFormatter {
  pub fn new(locale_tag: &str) -> Self {
    let mut formatter = Self::default();
    formatter.set_locale(locale_tag);
    formatter
  }

  pub fn with_locale(locale: Locale) -> Self {
    Self { locale }
  }

  pub fn set_locale(&mut self, locale_tag: &str) {
    self.locale = match locale_tag.parse::<Locale>() {
      Ok(locale) => locale,
      Err(e) => {
        debug!(error = %e, "Falling back to en");
        Locale::En
      }
    };
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn get_available_locales(&self) -> Vec<&'static str> {
    Locale::ALL.iter().map(Locale::tag).collect()
  }

  /// Render `code` in the active locale.
  ///
  /// Resolution order is active locale, then `en`, then `message`.
  /// `{key}` placeholders are filled from `context`; placeholders with no
  /// matching entry are left as they are. When `context["field"]` names a
  /// field with a known example, the example is appended.
  pub fn format(&self, message: &str, code: &str, context: &HashMap<String, Value>) -> String {
    let template = messages::lookup(self.locale, code)
      .or_else(|| messages::lookup(Locale::En, code))
      .unwrap_or(message);

    let mut rendered = substitute(template, context);

    let example = context
      .get(FIELD_CONTEXT_KEY)
      .and_then(Value::as_str)
      .and_then(suggestions::field_example);
    if let Some(example) = example {
      rendered.push_str(&format!(" (Example: {})", example));
    }
    rendered
  }

  pub fn get_suggestion(&self, code: &str) -> Option<&'static str> {
    suggestions::suggestion(code)
  }

  /// `field: message (Suggestion: ...)`, one line per error
  pub fn format_for_user(&self, errors: &[ValidationError]) -> String {
    errors
      .iter()
      .map(|error| match self.get_suggestion(&error.code) {
        Some(suggestion) => {
          format!("{}: {} (Suggestion: {})", error.field, error.message, suggestion)
        }
        None => format!("{}: {}", error.field, error.message),
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  pub fn format_as_html(&self, errors: &[ValidationError]) -> String {
    let items: Vec<String> = errors
      .iter()
      .map(|error| {
        let mut item = format!(
          "<li><strong>{}</strong>: {}",
          escape_html(&error.field),
          escape_html(&error.message)
        );
        if let Some(suggestion) = self.get_suggestion(&error.code) {
          item.push_str(&format!(" <em>{}</em>", escape_html(suggestion)));
        }
        item.push_str("</li>");
        item
      })
      .collect();
    format!("<ul class=\"validation-errors\">\n{}\n</ul>", items.join("\n"))
  }

  /// Errors keyed by field; a later error for the same field replaces an earlier one.
  pub fn format_as_json(&self, errors: &[ValidationError]) -> Value {
    let mut details = Map::new();
    for error in errors {
      let detail = ErrorDetail {
        message: &error.message,
        code: &error.code,
        suggestion: self.get_suggestion(&error.code),
      };
      details.insert(error.field.clone(), serde_json::to_value(detail).unwrap_or(Value::Null));
    }

    let mut body = Map::new();
    body.insert("error".to_string(), Value::String("Validation failed".to_string()));
    body.insert("details".to_string(), Value::Object(details));
    Value::Object(body)
  }

  pub fn format_for_logging(&self, errors: &[ValidationError]) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    errors
      .iter()
      .map(|error| {
        format!(
          "[{}] VALIDATION_ERROR: field=\"{}\" code=\"{}\" message=\"{}\"",
          timestamp,
          escape_log(&error.field),
          escape_log(&error.code),
          escape_log(&error.message)
        )
      })
      .collect::<Vec<_>>()
      .join("\n")
  }

  pub fn get_field_label(&self, field: &str) -> String {
    suggestions::field_label(field)
  }

  pub fn get_recovery_instructions(&self, code: &str) -> Vec<&'static str> {
    suggestions::recovery_steps(code).to_vec()
  }
}

fn substitute(template: &str, context: &HashMap<String, Value>) -> String {
  let Some(pattern) = placeholder_pattern() else {
    return template.to_string();
  };
  pattern
    .replace_all(template, |caps: &Captures| match context.get(&caps[1]) {
      Some(value) => display_value(value),
      None => caps[0].to_string(),
    })
    .into_owned()
}

fn display_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(", "),
    other => other.to_string(),
  }
}

pub fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#x27;"),
      '/' => escaped.push_str("&#x2F;"),
      _ => escaped.push(ch),
    }
  }
  escaped
}

/// Keeps every log record on a single line with balanced quotes
fn escape_log(text: &str) -> String {
  text.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n").replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codes;
  use serde_json::json;

  fn context(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
  }

  #[test]
  fn test_format_substitutes_placeholders() {
    let formatter = ErrorFormatter::default();
    let rendered =
      formatter.format("ignored", codes::TOO_SMALL, &context(&[("minimum", json!(5))]));
    assert_eq!(rendered, "Value must be at least 5");
  }

  #[test]
  fn test_format_leaves_unknown_placeholders() {
    let formatter = ErrorFormatter::default();
    let rendered =
      formatter.format("", codes::INVALID_TYPE, &context(&[("expected", json!("string"))]));
    assert_eq!(rendered, "Expected string, received {received}");
  }

  #[test]
  fn test_format_falls_back_to_english_table() {
    let formatter = ErrorFormatter::new("de");
    let rendered = formatter.format("", codes::INVALID_URL, &HashMap::new());
    assert_eq!(rendered, "Please enter a valid URL");
  }

  #[test]
  fn test_format_unknown_code_returns_message() {
    let formatter = ErrorFormatter::new("fr");
    assert_eq!(formatter.format("fallback msg", "UNKNOWN_CODE", &HashMap::new()), "fallback msg");
  }

  #[test]
  fn test_format_appends_field_example() {
    let formatter = ErrorFormatter::default();
    let rendered =
      formatter.format("", codes::INVALID_EMAIL, &context(&[("field", json!("email"))]));
    assert_eq!(rendered, "Please enter a valid email address (Example: john.doe@example.com)");

    let no_example =
      formatter.format("", codes::INVALID_EMAIL, &context(&[("field", json!("nickname"))]));
    assert_eq!(no_example, "Please enter a valid email address");
  }

  #[test]
  fn test_display_value() {
    assert_eq!(display_value(&json!("text")), "text");
    assert_eq!(display_value(&json!(2.5)), "2.5");
    assert_eq!(display_value(&json!(["a", "b"])), "a, b");
    assert_eq!(display_value(&Value::Null), "null");
  }

  #[test]
  fn test_locale_switching() {
    let mut formatter = ErrorFormatter::new("es-MX");
    assert_eq!(formatter.locale(), Locale::Es);
    assert_eq!(
      formatter.format("", codes::MISSING_REQUIRED_FIELD, &HashMap::new()),
      "Este campo es obligatorio"
    );

    formatter.set_locale("xx");
    assert_eq!(formatter.locale(), Locale::En);
    assert_eq!(formatter.get_available_locales(), vec!["en", "es", "fr", "de"]);
  }

  #[test]
  fn test_format_for_user() {
    let formatter = ErrorFormatter::default();
    let errors = vec![
      ValidationError::new("email", "Please enter a valid email address", codes::INVALID_EMAIL),
      ValidationError::new("notes", "Looks odd", "UNKNOWN_CODE"),
    ];
    assert_eq!(
      formatter.format_for_user(&errors),
      "email: Please enter a valid email address (Suggestion: Use the format name@example.com)\nnotes: Looks odd"
    );
  }

  #[test]
  fn test_format_as_html_escapes() {
    let formatter = ErrorFormatter::default();
    let errors = vec![ValidationError::new("bio", "<b>bold</b> & 'quoted'", "UNKNOWN_CODE")];
    let html = formatter.format_as_html(&errors);
    assert!(html.starts_with("<ul"));
    assert!(html.contains(
      "<li><strong>bio</strong>: &lt;b&gt;bold&lt;&#x2F;b&gt; &amp; &#x27;quoted&#x27;</li>"
    ));
  }

  #[test]
  fn test_format_as_json() {
    let formatter = ErrorFormatter::default();
    let errors = vec![
      ValidationError::new("email", "bad email", codes::INVALID_EMAIL),
      ValidationError::new("notes", "odd", "UNKNOWN_CODE"),
    ];
    let body = formatter.format_as_json(&errors);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"]["email"]["code"], codes::INVALID_EMAIL);
    assert_eq!(body["details"]["email"]["suggestion"], "Use the format name@example.com");
    assert!(body["details"]["notes"].get("suggestion").is_none());
  }

  #[test]
  fn test_format_for_logging_escapes_quotes_and_newlines() {
    let formatter = ErrorFormatter::default();
    let errors = vec![ValidationError::new("name", "has \"quotes\"\nand a newline", "custom")];
    let line = formatter.format_for_logging(&errors);
    assert_eq!(line.lines().count(), 1);
    assert!(line.contains(r#"message="has \"quotes\"\nand a newline""#));
  }

  #[test]
  fn test_recovery_and_labels() {
    let formatter = ErrorFormatter::default();
    assert_eq!(formatter.get_recovery_instructions(codes::FILE_TOO_LARGE).len(), 3);
    assert_eq!(
      formatter.get_recovery_instructions("UNKNOWN_CODE"),
      vec!["Please review your input and try again"]
    );
    assert_eq!(formatter.get_field_label("dob"), "Date of Birth");
    assert_eq!(formatter.get_field_label("emergencyContact"), "Emergency Contact");
  }
}
