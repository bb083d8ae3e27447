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

//! Error code taxonomy.
//!
//! Codes are plain strings so validation layers can emit them without
//! depending on this crate. Each code belongs to exactly one category.

use serde::Serialize;
use std::fmt;

// Type and schema validation
pub const INVALID_TYPE: &str = "invalid_type";
pub const INVALID_LITERAL: &str = "invalid_literal";
pub const INVALID_UNION: &str = "invalid_union";
pub const INVALID_ENUM_VALUE: &str = "invalid_enum_value";
pub const UNRECOGNIZED_KEYS: &str = "unrecognized_keys";
pub const INVALID_DATE: &str = "invalid_date";
pub const INVALID_STRING: &str = "invalid_string";
pub const TOO_SMALL: &str = "too_small";
pub const TOO_BIG: &str = "too_big";
pub const NOT_MULTIPLE_OF: &str = "not_multiple_of";
pub const CUSTOM: &str = "custom";

// Injection and security
pub const SQL_INJECTION_DETECTED: &str = "SQL_INJECTION_DETECTED";
pub const XSS_DETECTED: &str = "XSS_DETECTED";
pub const COMMAND_INJECTION_WARNING: &str = "COMMAND_INJECTION_WARNING";
pub const PATH_TRAVERSAL_DETECTED: &str = "PATH_TRAVERSAL_DETECTED";
pub const NOSQL_INJECTION_DETECTED: &str = "NOSQL_INJECTION_DETECTED";
pub const LDAP_INJECTION_DETECTED: &str = "LDAP_INJECTION_DETECTED";
pub const CSRF_TOKEN_INVALID: &str = "CSRF_TOKEN_INVALID";

// Healthcare compliance
pub const HIPAA_VIOLATION: &str = "HIPAA_VIOLATION";
pub const PII_DETECTED: &str = "PII_DETECTED";
pub const PHI_EXPOSURE_RISK: &str = "PHI_EXPOSURE_RISK";
pub const INVALID_MEDICAL_CODE: &str = "INVALID_MEDICAL_CODE";
pub const CONSENT_REQUIRED: &str = "CONSENT_REQUIRED";

// Field validation
pub const MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
pub const INVALID_PHONE: &str = "INVALID_PHONE";
pub const INVALID_URL: &str = "INVALID_URL";
pub const INVALID_UUID: &str = "INVALID_UUID";
pub const INVALID_DATE_FORMAT: &str = "INVALID_DATE_FORMAT";
pub const INVALID_ZIP_CODE: &str = "INVALID_ZIP_CODE";
pub const VALUE_TOO_LONG: &str = "VALUE_TOO_LONG";
pub const VALUE_TOO_SHORT: &str = "VALUE_TOO_SHORT";
pub const INVALID_FORMAT: &str = "INVALID_FORMAT";

// Transport and request
pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub const REQUEST_TOO_LARGE: &str = "REQUEST_TOO_LARGE";
pub const INVALID_CONTENT_TYPE: &str = "INVALID_CONTENT_TYPE";
pub const INVALID_JSON: &str = "INVALID_JSON";
pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

// System
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
pub const DATABASE_ERROR: &str = "DATABASE_ERROR";

// File upload
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const INVALID_FILE_TYPE: &str = "INVALID_FILE_TYPE";
pub const MALICIOUS_FILE_DETECTED: &str = "MALICIOUS_FILE_DETECTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
  TypeValidation,
  Security,
  Compliance,
  FieldValidation,
  Request,
  System,
  FileUpload,
  Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
  Low,
  Medium,
  High,
  Critical,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Severity::Low => "low",
      Severity::Medium => "medium",
      Severity::High => "high",
      Severity::Critical => "critical",
    };
    f.pad(name)
  }
}

const CATEGORIES: &[(&str, ErrorCategory)] = &[
  (INVALID_TYPE, ErrorCategory::TypeValidation),
  (INVALID_LITERAL, ErrorCategory::TypeValidation),
  (INVALID_UNION, ErrorCategory::TypeValidation),
  (INVALID_ENUM_VALUE, ErrorCategory::TypeValidation),
  (UNRECOGNIZED_KEYS, ErrorCategory::TypeValidation),
  (INVALID_DATE, ErrorCategory::TypeValidation),
  (INVALID_STRING, ErrorCategory::TypeValidation),
  (TOO_SMALL, ErrorCategory::TypeValidation),
  (TOO_BIG, ErrorCategory::TypeValidation),
  (NOT_MULTIPLE_OF, ErrorCategory::TypeValidation),
  (CUSTOM, ErrorCategory::TypeValidation),
  (SQL_INJECTION_DETECTED, ErrorCategory::Security),
  (XSS_DETECTED, ErrorCategory::Security),
  (COMMAND_INJECTION_WARNING, ErrorCategory::Security),
  (PATH_TRAVERSAL_DETECTED, ErrorCategory::Security),
  (NOSQL_INJECTION_DETECTED, ErrorCategory::Security),
  (LDAP_INJECTION_DETECTED, ErrorCategory::Security),
  (CSRF_TOKEN_INVALID, ErrorCategory::Security),
  (HIPAA_VIOLATION, ErrorCategory::Compliance),
  (PII_DETECTED, ErrorCategory::Compliance),
  (PHI_EXPOSURE_RISK, ErrorCategory::Compliance),
  (INVALID_MEDICAL_CODE, ErrorCategory::Compliance),
  (CONSENT_REQUIRED, ErrorCategory::Compliance),
  (MISSING_REQUIRED_FIELD, ErrorCategory::FieldValidation),
  (INVALID_EMAIL, ErrorCategory::FieldValidation),
  (INVALID_PHONE, ErrorCategory::FieldValidation),
  (INVALID_URL, ErrorCategory::FieldValidation),
  (INVALID_UUID, ErrorCategory::FieldValidation),
  (INVALID_DATE_FORMAT, ErrorCategory::FieldValidation),
  (INVALID_ZIP_CODE, ErrorCategory::FieldValidation),
  (VALUE_TOO_LONG, ErrorCategory::FieldValidation),
  (VALUE_TOO_SHORT, ErrorCategory::FieldValidation),
  (INVALID_FORMAT, ErrorCategory::FieldValidation),
  (METHOD_NOT_ALLOWED, ErrorCategory::Request),
  (REQUEST_TOO_LARGE, ErrorCategory::Request),
  (INVALID_CONTENT_TYPE, ErrorCategory::Request),
  (INVALID_JSON, ErrorCategory::Request),
  (RATE_LIMIT_EXCEEDED, ErrorCategory::Request),
  (UNAUTHORIZED, ErrorCategory::Request),
  (INTERNAL_ERROR, ErrorCategory::System),
  (SERVICE_UNAVAILABLE, ErrorCategory::System),
  (DATABASE_ERROR, ErrorCategory::System),
  (FILE_TOO_LARGE, ErrorCategory::FileUpload),
  (INVALID_FILE_TYPE, ErrorCategory::FileUpload),
  (MALICIOUS_FILE_DETECTED, ErrorCategory::FileUpload),
];

impl ErrorCategory {
  pub fn classify(code: &str) -> ErrorCategory {
    CATEGORIES
      .iter()
      .find(|(known, _)| *known == code)
      .map(|(_, category)| *category)
      .unwrap_or(ErrorCategory::Unknown)
  }

  pub fn severity(&self) -> Severity {
    match self {
      ErrorCategory::Security => Severity::Critical,
      ErrorCategory::Compliance => Severity::High,
      ErrorCategory::FileUpload | ErrorCategory::System => Severity::High,
      ErrorCategory::Request | ErrorCategory::Unknown => Severity::Medium,
      ErrorCategory::TypeValidation | ErrorCategory::FieldValidation => Severity::Low,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ErrorCategory::TypeValidation => "type_validation",
      ErrorCategory::Security => "security",
      ErrorCategory::Compliance => "compliance",
      ErrorCategory::FieldValidation => "field_validation",
      ErrorCategory::Request => "request",
      ErrorCategory::System => "system",
      ErrorCategory::FileUpload => "file_upload",
      ErrorCategory::Unknown => "unknown",
    }
  }
}

impl fmt::Display for ErrorCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

/// Every known code, grouped by category.
pub fn all() -> impl Iterator<Item = &'static str> {
  CATEGORIES.iter().map(|(code, _)| *code)
}
