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

//! Reading, editing and writing EnergyPlus input files (IDF).
//!
//! An IDF file is a sequence of objects, each of them a class name
//! followed by comma-separated fields and terminated by a semicolon.
//! Comments start with `!`.
//!
//! ```
//! use idf::{IddObjectType, Workspace};
//!
//! let ws: Workspace = "Zone, Kitchen; ! a zone".parse().unwrap();
//! let zone = &ws.objects_by_type(IddObjectType::Zone)[0];
//! assert_eq!(zone.name(), Some("Kitchen"));
//! ```

mod error;
pub use error::IdfError;

mod idd;
pub use idd::{IddObject, IddObjectType};

pub mod fields;

mod idf_object;
pub use idf_object::{format_double, IdfObject};

mod scanner;

mod workspace;
pub use workspace::Workspace;

/// The version of EnergyPlus these files are written for
pub const ENERGYPLUS_VERSION: &str = "24.1";
