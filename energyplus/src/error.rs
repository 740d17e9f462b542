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

use thiserror::Error;

/// The errors produced around translations (i.e., reading options or
/// the files being translated). Problems with single objects are not
/// errors; they are logged by the translators.
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// A file could not be read or written
    #[error("could not access file '{path}': {source}")]
    Io {
        /// The file
        path: String,
        /// What went wrong
        #[source]
        source: std::io::Error,
    },

    /// The options file could not be parsed
    #[error("could not parse options file '{path}': {msg}")]
    Options {
        /// The file
        path: String,
        /// What the parser said
        msg: String,
    },

    /// A field the model cannot do without is blank
    #[error("{class_name} '{name}' has no value for field '{field}'")]
    MissingField {
        /// The IDF class of the object
        class_name: String,
        /// The name of the object (empty if it is the blank field)
        name: String,
        /// The name of the field
        field: String,
    },

    /// An IDF problem
    #[error(transparent)]
    Idf(#[from] idf::IdfError),

    /// A model problem
    #[error(transparent)]
    Model(#[from] model::ModelError),
}
