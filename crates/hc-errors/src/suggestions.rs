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

//! Language-neutral remediation metadata: suggestions per code, example
//! values per field, human-readable field labels and recovery steps.

use crate::codes;

const SUGGESTIONS: &[(&str, &str)] = &[
  (codes::INVALID_TYPE, "Check that the value has the expected type"),
  (codes::INVALID_ENUM_VALUE, "Choose one of the listed options"),
  (codes::UNRECOGNIZED_KEYS, "Remove fields that are not part of the form"),
  (codes::INVALID_DATE, "Use a real calendar date"),
  (codes::TOO_SMALL, "Increase the value or add more content"),
  (codes::TOO_BIG, "Reduce the value or shorten the content"),
  (
    codes::SQL_INJECTION_DETECTED,
    "Remove SQL keywords like SELECT, INSERT, UPDATE, DELETE, DROP and special characters like ; and --",
  ),
  (codes::XSS_DETECTED, "Remove HTML tags, <script> elements and javascript: links"),
  (codes::COMMAND_INJECTION_WARNING, "Remove shell characters such as |, &, ; and backticks"),
  (codes::PATH_TRAVERSAL_DETECTED, "Remove ../ sequences and absolute paths"),
  (codes::NOSQL_INJECTION_DETECTED, "Remove query operators such as $where, $ne and $gt"),
  (codes::LDAP_INJECTION_DETECTED, "Remove characters such as *, (, ) and \\"),
  (codes::CSRF_TOKEN_INVALID, "Reload the page and submit the form again"),
  (codes::HIPAA_VIOLATION, "Remove patient names, record numbers and other health identifiers"),
  (codes::PII_DETECTED, "Remove Social Security numbers, card numbers and similar identifiers"),
  (codes::PHI_EXPOSURE_RISK, "Share health details only through the secure patient portal"),
  (codes::INVALID_MEDICAL_CODE, "Use a valid ICD-10 or CPT code, e.g. E11.9"),
  (codes::CONSENT_REQUIRED, "Check the consent box to continue"),
  (codes::MISSING_REQUIRED_FIELD, "Fill in this field"),
  (codes::INVALID_EMAIL, "Use the format name@example.com"),
  (codes::INVALID_PHONE, "Use digits only, including the area code"),
  (codes::INVALID_URL, "Include the scheme, e.g. https://"),
  (codes::INVALID_UUID, "Copy the identifier exactly as shown"),
  (codes::INVALID_DATE_FORMAT, "Use the format YYYY-MM-DD"),
  (codes::INVALID_ZIP_CODE, "Use a 5-digit ZIP code or ZIP+4"),
  (codes::VALUE_TOO_LONG, "Shorten the text"),
  (codes::VALUE_TOO_SHORT, "Add more detail"),
  (codes::REQUEST_TOO_LARGE, "Send less data in a single request"),
  (codes::INVALID_CONTENT_TYPE, "Send the request as application/json"),
  (codes::RATE_LIMIT_EXCEEDED, "Wait a minute before trying again"),
  (codes::FILE_TOO_LARGE, "Compress the file or upload a smaller one"),
  (codes::INVALID_FILE_TYPE, "Upload a PDF, JPG or PNG file"),
  (codes::MALICIOUS_FILE_DETECTED, "Scan the file with antivirus software and upload a clean copy"),
];

const FIELD_EXAMPLES: &[(&str, &str)] = &[
  ("email", "john.doe@example.com"),
  ("phone", "(555) 123-4567"),
  ("uuid", "123e4567-e89b-12d3-a456-426614174000"),
  ("url", "https://example.com"),
  ("website", "https://example.com"),
  ("date", "2024-01-15"),
  ("dob", "1985-06-15"),
  ("dateOfBirth", "1985-06-15"),
  ("zipCode", "12345"),
  ("zip", "12345"),
  ("npi", "1234567893"),
  ("icd10", "E11.9"),
  ("cpt", "99213"),
];

const FIELD_LABELS: &[(&str, &str)] = &[
  ("dob", "Date of Birth"),
  ("dateOfBirth", "Date of Birth"),
  ("ssn", "Social Security Number"),
  ("mrn", "Medical Record Number"),
  ("npi", "National Provider Identifier"),
  ("icd10", "ICD-10 Code"),
  ("cpt", "CPT Code"),
  ("email", "Email Address"),
  ("phone", "Phone Number"),
  ("zip", "ZIP Code"),
  ("zipCode", "ZIP Code"),
  ("url", "URL"),
  ("uuid", "ID"),
];

const RECOVERY_STEPS: &[(&str, &[&str])] = &[
  (
    codes::SQL_INJECTION_DETECTED,
    &[
      "1. Remove SQL keywords and special characters from your input",
      "2. Use plain text only",
      "3. Contact support if you believe this is an error",
    ],
  ),
  (
    codes::XSS_DETECTED,
    &[
      "1. Remove any HTML or script tags",
      "2. Paste your content as plain text",
      "3. Contact support if you need to include formatted content",
    ],
  ),
  (
    codes::COMMAND_INJECTION_WARNING,
    &[
      "1. Remove shell control characters from your input",
      "2. Use letters, numbers and basic punctuation only",
    ],
  ),
  (
    codes::HIPAA_VIOLATION,
    &[
      "1. Remove all patient names, dates and record numbers",
      "2. Describe the situation in general terms",
      "3. Use the secure patient portal for protected health information",
      "4. Contact the privacy officer if you are unsure",
    ],
  ),
  (
    codes::PII_DETECTED,
    &[
      "1. Remove Social Security, card and account numbers",
      "2. Submit the form again",
    ],
  ),
  (
    codes::FILE_TOO_LARGE,
    &[
      "1. Compress the file or reduce image resolution",
      "2. Split large documents into several files",
      "3. Upload the smaller file",
    ],
  ),
  (
    codes::MALICIOUS_FILE_DETECTED,
    &[
      "1. Do not open the file on your device",
      "2. Scan it with up-to-date antivirus software",
      "3. Upload a clean copy or contact support",
    ],
  ),
];

const GENERIC_RECOVERY: &[&str] = &["Please review your input and try again"];

fn find<'a>(table: &'a [(&str, &'a str)], name: &str) -> Option<&'a str> {
  table.iter().find(|(known, _)| *known == name).map(|(_, value)| *value)
}

pub fn suggestion(code: &str) -> Option<&'static str> {
  find(SUGGESTIONS, code)
}

pub fn field_example(field: &str) -> Option<&'static str> {
  find(FIELD_EXAMPLES, field)
}

/// Human-readable label; unknown names are split on camelCase and underscores.
pub fn field_label(field: &str) -> String {
  if let Some(label) = find(FIELD_LABELS, field) {
    return label.to_string();
  }

  let mut words: Vec<String> = Vec::new();
  let mut current = String::new();
  for ch in field.chars() {
    if ch == '_' || ch == '-' || ch == ' ' {
      if !current.is_empty() {
        words.push(std::mem::take(&mut current));
      }
    } else if ch.is_uppercase() && !current.is_empty() {
      words.push(std::mem::take(&mut current));
      current.push(ch);
    } else {
      current.push(ch);
    }
  }
  if !current.is_empty() {
    words.push(current);
  }

  words
    .iter()
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn recovery_steps(code: &str) -> &'static [&'static str] {
  RECOVERY_STEPS
    .iter()
    .find(|(known, _)| *known == code)
    .map(|(_, steps)| *steps)
    .unwrap_or(GENERIC_RECOVERY)
}
