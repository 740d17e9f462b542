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

#![deny(missing_docs)]

//! Translation between a [`model::Model`] and EnergyPlus input files
//! ([`idf::Workspace`]).
//!
//! The [`ForwardTranslator`] writes a model as IDF objects, adding the
//! objects EnergyPlus needs but the model does not hold (e.g., branches,
//! node names and zone lists). The [`ReverseTranslator`] reads IDF
//! objects back into a model. Neither of them fails on a bad object:
//! problems are logged and the object is skipped.
//!
//! ```rust
//! use energyplus::{ForwardTranslator, ReverseTranslator};
//! use model::{Model, ThermalZone};
//!
//! let mut model = Model::default();
//! model.add_thermal_zone(ThermalZone::new("Kitchen")).unwrap();
//!
//! let workspace = ForwardTranslator::new().translate_model(&model);
//! let back = ReverseTranslator::new().translate_workspace(&workspace);
//! assert!(back.get_thermal_zone("Kitchen").is_ok());
//! ```

/// The errors of this crate
mod error;
pub use error::TranslatorError;

/// The messages translators keep about what they did
mod log;
pub use log::{LogLevel, LogMessage, LogSink};

/// What the `ForwardTranslator` writes besides the model itself
mod options;
pub use options::ForwardTranslatorOptions;

/// From `Model` to `Workspace`
pub mod forward_translator;
pub use forward_translator::ForwardTranslator;

/// From `Workspace` to `Model`
pub mod reverse_translator;
pub use reverse_translator::ReverseTranslator;
