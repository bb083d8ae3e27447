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
  ("invalid_type", "{expected} attendu, {received} reçu"),
  ("invalid_enum_value", "Option invalide. Valeurs attendues : {options}"),
  ("invalid_date", "Date invalide"),
  ("too_small", "La valeur doit être au moins {minimum}"),
  ("too_big", "La valeur doit être au plus {maximum}"),
  (
    "SQL_INJECTION_DETECTED",
    "La saisie contient des commandes de base de données potentiellement dangereuses",
  ),
  ("XSS_DETECTED", "La saisie contient du code de script potentiellement dangereux"),
  ("HIPAA_VIOLATION", "Cet envoi pourrait exposer des informations de santé protégées"),
  ("MISSING_REQUIRED_FIELD", "Ce champ est obligatoire"),
  ("INVALID_EMAIL", "Veuillez saisir une adresse e-mail valide"),
  ("INVALID_PHONE", "Veuillez saisir un numéro de téléphone valide"),
  ("VALUE_TOO_LONG", "Doit contenir au plus {max} caractères"),
  ("VALUE_TOO_SHORT", "Doit contenir au moins {min} caractères"),
  ("FILE_TOO_LARGE", "Le fichier dépasse la taille maximale de {max_size}"),
];
