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

/// The errors produced when building, editing or reading a [`crate::Model`]
#[derive(Debug, Error)]
pub enum ModelError {
    /// A field with no default value was asked for but it is empty
    #[error("{object_type} '{name}' has no value for field '{field}'")]
    MissingField {
        object_type: String,
        name: String,
        field: String,
    },

    /// A value that does not fit within the limits of a field
    #[error("value {value} is out of range for field '{field}' of {object_type} (expected {limit})")]
    OutOfRange {
        object_type: String,
        field: String,
        value: String,
        limit: String,
    },

    /// An object that is not in the model
    #[error("could not find {kind} '{name}' in model")]
    ObjectNotFound { kind: String, name: String },

    /// An object points to another one that is not in the model
    #[error("{object_type} '{name}' references {kind} '{reference}', which is not in the model")]
    MissingReference {
        object_type: String,
        name: String,
        kind: String,
        reference: String,
    },

    /// An object that can only belong to one `AirLoopHVAC` already belongs to another one
    #[error("{object_type} '{name}' already belongs to AirLoopHVAC '{owner}'")]
    AlreadyAssigned {
        object_type: String,
        name: String,
        owner: String,
    },

    /// An object lists the same member more than once
    #[error("{object_type} '{name}' lists {kind} '{member}' more than once")]
    DuplicateMember {
        object_type: String,
        name: String,
        kind: String,
        member: String,
    },

    /// The class has no schedule registered under this display name
    #[error("no '{display_name}' schedule is registered for class {object_type}")]
    UnknownScheduleField {
        object_type: String,
        display_name: String,
    },

    /// The schedule type limits of a schedule do not fit the field it was assigned to
    #[error("schedule '{schedule}' has schedule type limits that are not compatible with the '{display_name}' schedule of {object_type}")]
    IncompatibleSchedule {
        object_type: String,
        display_name: String,
        schedule: String,
    },

    /// A curve evaluated with the wrong number of independent variables
    #[error("curve '{name}' takes {expected} independent variables, found {found}")]
    WrongNumberOfInputs {
        name: String,
        expected: usize,
        found: usize,
    },

    /// Something in an object does not make sense (e.g., lower limit above the upper limit)
    #[error("invalid {object_type} '{name}': {msg}")]
    Invalid {
        object_type: String,
        name: String,
        msg: String,
    },

    /// The model text could not be parsed
    #[error("Error [in line {line}]: {msg}")]
    Syntax { line: usize, msg: String },

    /// The JSON could not be parsed or written
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The file could not be read or written
    #[error("could not access file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
