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
use hc_errors::codes;
use hc_errors::{ErrorCategory, ErrorFormatter, Locale, ValidationError};
use regex::Regex;
use serde_json::{json, Value};
use std::collections::HashMap;

fn minimum(value: i64) -> HashMap<String, Value> {
  HashMap::from([("minimum".to_string(), json!(value))])
}

#[test]
fn unknown_code_returns_message_unchanged() {
  for locale in Locale::ALL {
    let formatter = ErrorFormatter::with_locale(locale);
    assert_eq!(formatter.format("fallback msg", "UNKNOWN_CODE", &HashMap::new()), "fallback msg");
  }
}

#[test]
fn too_small_renders_minimum_in_every_locale() {
  let expected = [
    (Locale::En, "Value must be at least 5"),
    (Locale::Es, "El valor debe ser al menos 5"),
    (Locale::Fr, "La valeur doit être au moins 5"),
    (Locale::De, "Der Wert muss mindestens 5 sein"),
  ];
  for (locale, text) in expected {
    let formatter = ErrorFormatter::with_locale(locale);
    assert_eq!(formatter.format("", codes::TOO_SMALL, &minimum(5)), text);
  }
}

#[test]
fn missing_translation_uses_english() {
  let formatter = ErrorFormatter::new("fr");
  let rendered = formatter.format("", codes::METHOD_NOT_ALLOWED, &HashMap::from([(
    "method".to_string(),
    json!("DELETE"),
  )]));
  assert_eq!(rendered, "The DELETE method is not allowed for this endpoint");
}

#[test]
fn html_output_never_contains_raw_script_tags() {
  let formatter = ErrorFormatter::default();
  let errors = vec![ValidationError::new(
    "comment",
    "<script>alert(\"x\")</script>",
    codes::XSS_DETECTED,
  )];
  let html = formatter.format_as_html(&errors);
  assert!(!html.contains("<script>"));
  assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;&#x2F;script&gt;"));
  // Suggestions are escaped as well
  assert!(html.contains("&lt;script&gt; elements"));
}

#[test]
fn log_lines_match_fixed_pattern() {
  let pattern =
    Regex::new(r#"^\[.*\] VALIDATION_ERROR: field="(.*)" code="(.*)" message="(.*)"$"#).unwrap();
  let formatter = ErrorFormatter::default();
  let errors = vec![
    ValidationError::new("email", "Please enter a valid email address", codes::INVALID_EMAIL),
    ValidationError::new("notes", "multi\nline \"input\"", codes::XSS_DETECTED),
  ];

  let output = formatter.format_for_logging(&errors);
  let lines: Vec<&str> = output.lines().collect();
  assert_eq!(lines.len(), 2);
  for line in &lines {
    assert!(pattern.is_match(line), "unparseable log line: {}", line);
  }

  let caps = pattern.captures(lines[0]).unwrap();
  assert_eq!(&caps[1], "email");
  assert_eq!(&caps[2], codes::INVALID_EMAIL);
}

#[test]
fn unknown_locale_falls_back_to_english() {
  let mut formatter = ErrorFormatter::new("de");
  formatter.set_locale("xx");
  assert_eq!(formatter.locale(), Locale::En);
  assert_eq!(
    formatter.format("msg", codes::MISSING_REQUIRED_FIELD, &HashMap::new()),
    "This field is required"
  );
}

#[test]
fn json_output_shape() {
  let formatter = ErrorFormatter::default();
  let errors = vec![ValidationError::new("payload", "Blocked", codes::SQL_INJECTION_DETECTED)];
  let body = formatter.format_as_json(&errors);
  assert_eq!(
    body,
    json!({
      "error": "Validation failed",
      "details": {
        "payload": {
          "message": "Blocked",
          "code": "SQL_INJECTION_DETECTED",
          "suggestion": formatter.get_suggestion(codes::SQL_INJECTION_DETECTED).unwrap(),
        }
      }
    })
  );
}

#[test]
fn every_code_resolves_to_text() {
  let formatter = ErrorFormatter::new("es");
  for code in codes::all() {
    assert_ne!(ErrorCategory::classify(code), ErrorCategory::Unknown);
    let rendered = formatter.format("", code, &HashMap::new());
    assert!(!rendered.is_empty(), "{} rendered empty", code);
  }
}
