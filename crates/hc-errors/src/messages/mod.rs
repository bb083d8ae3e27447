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

//! Per-locale message templates.
//!
//! Templates may contain `{name}` placeholders filled from the formatting
//! context. `en` defines every code; other locales may omit codes and fall
//! back to `en`.

mod de;
mod en;
mod es;
mod fr;

use crate::locale::Locale;

pub type MessageTable = &'static [(&'static str, &'static str)];

pub fn table(locale: Locale) -> MessageTable {
  match locale {
    Locale::En => en::MESSAGES,
    Locale::Es => es::MESSAGES,
    Locale::Fr => fr::MESSAGES,
    Locale::De => de::MESSAGES,
  }
}

/// Template for `code` in `locale` only, without fallback
pub fn lookup(locale: Locale, code: &str) -> Option<&'static str> {
  table(locale).iter().find(|(known, _)| *known == code).map(|(_, template)| *template)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codes;

  #[test]
  fn test_english_covers_every_code() {
    for code in codes::all() {
      assert!(lookup(Locale::En, code).is_some(), "missing en template for {}", code);
    }
  }

  #[test]
  fn test_translations_only_use_known_codes() {
    let known: Vec<&str> = codes::all().collect();
    for locale in Locale::ALL {
      for (code, _) in table(locale) {
        assert!(known.contains(code), "{} defines unknown code {}", locale, code);
      }
    }
  }

  #[test]
  fn test_too_small_keeps_placeholder() {
    for locale in Locale::ALL {
      let template = lookup(locale, codes::TOO_SMALL).unwrap();
      assert!(template.contains("{minimum}"), "{} too_small lost its placeholder", locale);
    }
  }
}
