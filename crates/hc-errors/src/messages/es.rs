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
  ("invalid_type", "Se esperaba {expected}, se recibió {received}"),
  ("invalid_enum_value", "Opción no válida. Se esperaba una de: {options}"),
  ("invalid_date", "Fecha no válida"),
  ("too_small", "El valor debe ser al menos {minimum}"),
  ("too_big", "El valor debe ser como máximo {maximum}"),
  (
    "SQL_INJECTION_DETECTED",
    "La entrada contiene comandos de base de datos potencialmente dañinos",
  ),
  ("XSS_DETECTED", "La entrada contiene código de script potencialmente dañino"),
  ("HIPAA_VIOLATION", "Este envío podría exponer información de salud protegida"),
  ("PII_DETECTED", "Se detectó información personal en un campo que no la admite"),
  ("MISSING_REQUIRED_FIELD", "Este campo es obligatorio"),
  ("INVALID_EMAIL", "Introduzca una dirección de correo electrónico válida"),
  ("INVALID_PHONE", "Introduzca un número de teléfono válido"),
  ("INVALID_DATE_FORMAT", "Introduzca la fecha como AAAA-MM-DD"),
  ("VALUE_TOO_LONG", "Debe tener como máximo {max} caracteres"),
  ("VALUE_TOO_SHORT", "Debe tener al menos {min} caracteres"),
  ("RATE_LIMIT_EXCEEDED", "Demasiadas solicitudes. Espere e inténtelo de nuevo"),
  ("FILE_TOO_LARGE", "El archivo supera el tamaño máximo de {max_size}"),
  ("INVALID_FILE_TYPE", "Tipo de archivo no permitido. Tipos permitidos: {allowed}"),
];
