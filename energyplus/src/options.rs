/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::TranslatorError;

/// What the [`crate::ForwardTranslator`] writes besides the model
/// objects.
///
/// ## Example options file
///
/// ```json
/// {
///     ip_tabular_output: true,
///     exclude_variable_dictionary: true,
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForwardTranslatorOptions {
    /// Report tabular results in IP units
    pub ip_tabular_output: bool,

    /// Do not request the SQLite output
    pub exclude_sqlite_output_report: bool,

    /// Do not request the HTML tabular report
    pub exclude_html_output_report: bool,

    /// Do not request the variable dictionary
    pub exclude_variable_dictionary: bool,
}

impl ForwardTranslatorOptions {
    /// Reads the options from a JSON (or JSON5) string. Missing fields
    /// keep their defaults.
    ///
    /// ```rust
    /// use energyplus::ForwardTranslatorOptions;
    ///
    /// let options = ForwardTranslatorOptions::from_json5("{ ip_tabular_output: true }").unwrap();
    /// assert!(options.ip_tabular_output);
    /// assert!(!options.exclude_sqlite_output_report);
    /// ```
    pub fn from_json5(source: &str) -> Result<Self, TranslatorError> {
        json5::from_str(source).map_err(|e| TranslatorError::Options {
            path: "<string>".to_string(),
            msg: e.to_string(),
        })
    }

    /// Reads the options from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TranslatorError> {
        let display = path.as_ref().display().to_string();
        let source = std::fs::read_to_string(&path).map_err(|source| TranslatorError::Io {
            path: display.clone(),
            source,
        })?;
        json5::from_str(&source).map_err(|e| TranslatorError::Options {
            path: display,
            msg: e.to_string(),
        })
    }
}
