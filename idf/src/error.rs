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

/// The errors produced when reading, writing or editing IDF data
#[derive(Debug, Error)]
pub enum IdfError {
    /// The IDF text could not be parsed
    #[error("Error [in line {line}]: {msg}")]
    Syntax { line: usize, msg: String },

    /// A field index beyond the fixed fields of a non-extensible class
    #[error("field {index} is out of range for class '{class_name}'")]
    FieldOutOfRange { class_name: String, index: usize },

    /// Extensible groups were pushed into a class that has none
    #[error("class '{class_name}' has no extensible groups")]
    NotExtensible { class_name: String },

    /// An extensible group with the wrong number of values
    #[error("extensible groups of '{class_name}' have {expected} fields, found {found}")]
    GroupSize {
        class_name: String,
        expected: usize,
        found: usize,
    },

    /// The file could not be read or written
    #[error("could not access file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
