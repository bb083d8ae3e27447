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

pub(super) const MESSAGES: &[(&str, &str)] = &[
  ("invalid_type", "Expected {expected}, received {received}"),
  ("invalid_literal", "Invalid literal value, expected {expected}"),
  ("invalid_union", "Value does not match any of the allowed formats"),
  ("invalid_enum_value", "Invalid option. Expected one of: {options}"),
  ("unrecognized_keys", "Unrecognized fields in request: {keys}"),
  ("invalid_date", "Invalid date"),
  ("invalid_string", "Invalid text format"),
  ("too_small", "Value must be at least {minimum}"),
  ("too_big", "Value must be at most {maximum}"),
  ("not_multiple_of", "Value must be a multiple of {multiple_of}"),
  ("custom", "Invalid value"),
  ("SQL_INJECTION_DETECTED", "Input contains potentially harmful database commands"),
  ("XSS_DETECTED", "Input contains potentially harmful script content"),
  ("COMMAND_INJECTION_WARNING", "Input contains characters that are not allowed"),
  ("PATH_TRAVERSAL_DETECTED", "Input contains an invalid file path"),
  ("NOSQL_INJECTION_DETECTED", "Input contains potentially harmful query operators"),
  ("LDAP_INJECTION_DETECTED", "Input contains potentially harmful directory query characters"),
  ("CSRF_TOKEN_INVALID", "Your session has expired. Please refresh the page"),
  ("HIPAA_VIOLATION", "This submission may expose protected health information"),
  ("PII_DETECTED", "Personal information was detected in a field that does not accept it"),
  ("PHI_EXPOSURE_RISK", "Protected health information cannot be shared in this field"),
  ("INVALID_MEDICAL_CODE", "The medical code {value} is not valid"),
  ("CONSENT_REQUIRED", "Patient consent is required before submitting"),
  ("MISSING_REQUIRED_FIELD", "This field is required"),
  ("INVALID_EMAIL", "Please enter a valid email address"),
  ("INVALID_PHONE", "Please enter a valid phone number"),
  ("INVALID_URL", "Please enter a valid URL"),
  ("INVALID_UUID", "Please enter a valid identifier"),
  ("INVALID_DATE_FORMAT", "Please enter the date as YYYY-MM-DD"),
  ("INVALID_ZIP_CODE", "Please enter a valid ZIP code"),
  ("VALUE_TOO_LONG", "Must be at most {max} characters"),
  ("VALUE_TOO_SHORT", "Must be at least {min} characters"),
  ("INVALID_FORMAT", "The value is not in the expected format"),
  ("METHOD_NOT_ALLOWED", "The {method} method is not allowed for this endpoint"),
  ("REQUEST_TOO_LARGE", "The request is too large"),
  ("INVALID_CONTENT_TYPE", "Unsupported content type {content_type}"),
  ("INVALID_JSON", "The request body is not valid JSON"),
  ("RATE_LIMIT_EXCEEDED", "Too many requests. Please wait and try again"),
  ("UNAUTHORIZED", "You must be signed in to do that"),
  ("INTERNAL_ERROR", "Something went wrong on our side. Please try again later"),
  ("SERVICE_UNAVAILABLE", "The service is temporarily unavailable"),
  ("DATABASE_ERROR", "We could not save your changes. Please try again"),
  ("FILE_TOO_LARGE", "File exceeds the maximum size of {max_size}"),
  ("INVALID_FILE_TYPE", "This file type is not allowed. Allowed types: {allowed}"),
  ("MALICIOUS_FILE_DETECTED", "The uploaded file was rejected by the security scan"),
];
