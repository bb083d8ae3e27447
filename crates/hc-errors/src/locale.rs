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

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
  #[error("Unsupported locale: {0}")]
  Unsupported(String),
}

/// Locales with a message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Es,
  Fr,
  De,
}

impl Locale {
  pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Fr, Locale::De];

  pub fn tag(&self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Es => "es",
      Locale::Fr => "fr",
      Locale::De => "de",
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.tag())
  }
}

impl FromStr for Locale {
  type Err = LocaleError;

  /// Accepts language tags case-insensitively; region subtags are ignored,
  /// so `es-MX` and `fr_CA` resolve to their base language.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let language = s.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    Locale::ALL
      .into_iter()
      .find(|locale| locale.tag() == language)
      .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
  }
}
