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

use derive::ObjectIO;
use serde::{Deserialize, Serialize};

/// An object representing a multilayer
/// Construction; that is to say, an array of
/// Materials
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// Construction {
///     name: "Exterior Wall",
///     layers: ["Brick", "Gap", "Gypsum"],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Construction {
    /// The name of the Construction object.
    /// Must be unique within the model
    pub name: String,

    /// The names of the Material objects,
    /// from outside to inside
    #[serde(default)]
    pub(crate) layers: Vec<String>,
}

impl Construction {
    /// Appends a layer at the inner side of the construction
    pub fn push_layer<S: Into<String>>(&mut self, layer: S) -> &mut Self {
        self.layers.push(layer.into());
        self
    }

    /// Replaces all the layers, ordered from outside to inside
    pub fn set_layers(&mut self, layers: Vec<String>) -> &mut Self {
        self.layers = layers;
        self
    }
}

/***********/
/* TESTING */
/***********/
