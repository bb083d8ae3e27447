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
  ("invalid_type", "{expected} erwartet, {received} erhalten"),
  ("invalid_date", "Ungültiges Datum"),
  ("too_small", "Der Wert muss mindestens {minimum} sein"),
  ("too_big", "Der Wert darf höchstens {maximum} sein"),
  ("SQL_INJECTION_DETECTED", "Die Eingabe enthält möglicherweise schädliche Datenbankbefehle"),
  ("XSS_DETECTED", "Die Eingabe enthält möglicherweise schädlichen Skriptcode"),
  ("HIPAA_VIOLATION", "Diese Übermittlung könnte geschützte Gesundheitsdaten offenlegen"),
  ("MISSING_REQUIRED_FIELD", "Dieses Feld ist erforderlich"),
  ("INVALID_EMAIL", "Bitte geben Sie eine gültige E-Mail-Adresse ein"),
  ("INVALID_PHONE", "Bitte geben Sie eine gültige Telefonnummer ein"),
  ("VALUE_TOO_LONG", "Darf höchstens {max} Zeichen lang sein"),
  ("FILE_TOO_LARGE", "Die Datei überschreitet die maximale Größe von {max_size}"),
];
