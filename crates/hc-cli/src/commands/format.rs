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

use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use hc_core::Config;
use hc_errors::{ErrorCategory, ErrorFormatter, Severity, ValidationError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  Text,
  Html,
  Json,
  Log,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
  /// Error code, e.g. too_small or SQL_INJECTION_DETECTED
  code: String,

  /// Message used when the code has no template
  #[arg(short, long, default_value = "Invalid value")]
  message: String,

  /// Field the error applies to
  #[arg(short, long, default_value = "input")]
  field: String,

  /// Locale tag; defaults to HC_LOCALE
  #[arg(short, long)]
  locale: Option<String>,

  /// Template values as key=value; values are parsed as JSON when possible
  #[arg(short, long = "context", value_parser = parse_context_pair)]
  context: Vec<(String, Value)>,

  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,
}

pub fn execute(args: FormatArgs, config: &Config) -> Result<()> {
  let formatter = ErrorFormatter::new(args.locale.as_deref().unwrap_or(&config.locale));
  debug!(locale = %formatter.locale(), code = %args.code, "Formatting error");

  println!("{}", render(&formatter, &args));

  if args.output == OutputFormat::Text
    && ErrorCategory::classify(&args.code).severity() >= Severity::High
  {
    println!();
    println!("To resolve:");
    for step in formatter.get_recovery_instructions(&args.code) {
      println!("  {}", step);
    }
  }
  Ok(())
}

fn render(formatter: &ErrorFormatter, args: &FormatArgs) -> String {
  let mut context: HashMap<String, Value> = args.context.iter().cloned().collect();
  context.entry("field".to_string()).or_insert_with(|| Value::String(args.field.clone()));

  let message = formatter.format(&args.message, &args.code, &context);
  let errors = [ValidationError::new(formatter.get_field_label(&args.field), message, &args.code)];

  match args.output {
    OutputFormat::Text => formatter.format_for_user(&errors),
    OutputFormat::Html => formatter.format_as_html(&errors),
    OutputFormat::Json => {
      let body = formatter.format_as_json(&errors);
      serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
    }
    OutputFormat::Log => formatter.format_for_logging(&errors),
  }
}

fn parse_context_pair(raw: &str) -> Result<(String, Value)> {
  let (key, value) =
    raw.split_once('=').ok_or_else(|| anyhow!("expected key=value, got '{}'", raw))?;
  if key.is_empty() {
    return Err(anyhow!("empty context key in '{}'", raw));
  }
  let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
  Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn args(code: &str, output: OutputFormat) -> FormatArgs {
    FormatArgs {
      code: code.to_string(),
      message: "Invalid value".to_string(),
      field: "email".to_string(),
      locale: None,
      context: vec![("minimum".to_string(), json!(8))],
      output,
    }
  }

  #[test]
  fn test_parse_context_pair() {
    assert_eq!(parse_context_pair("minimum=5").unwrap(), ("minimum".to_string(), json!(5)));
    assert_eq!(parse_context_pair("name=Jane").unwrap(), ("name".to_string(), json!("Jane")));
    assert_eq!(parse_context_pair("note=a=b").unwrap(), ("note".to_string(), json!("a=b")));
    assert!(parse_context_pair("novalue").is_err());
    assert!(parse_context_pair("=5").is_err());
  }

  #[test]
  fn test_render_text_uses_label_and_example() {
    let formatter = ErrorFormatter::default();
    let text = render(&formatter, &args("INVALID_EMAIL", OutputFormat::Text));
    assert!(text.starts_with("Email Address: Please enter a valid email address (Example: "));
    assert!(text.ends_with("(Suggestion: Use the format name@example.com)"));
  }

  #[test]
  fn test_render_json_and_log() {
    let formatter = ErrorFormatter::new("es");
    let json_out = render(&formatter, &args("too_small", OutputFormat::Json));
    let body: Value = serde_json::from_str(&json_out).unwrap();
    let message = body["details"]["Email Address"]["message"].as_str().unwrap();
    assert!(message.starts_with("El valor debe ser al menos 8"));

    let log = render(&formatter, &args("too_small", OutputFormat::Log));
    assert!(log.contains("VALIDATION_ERROR: field=\"Email Address\" code=\"too_small\""));
  }
}
