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

use crate::{Autosize, Float};
use derive::ObjectIO;
use serde::{Deserialize, Serialize};

/// An electric resistance heating coil. It can only heat.
///
/// ## Examples
///
/// #### `.sml`
///
/// ```json
/// HVAC {
///     type: "CoilHeatingElectric",
///     name: "Reheat Coil",
///     nominal_capacity: 3000,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoilHeatingElectric {
    /// The name of the coil
    pub name: String,

    /// When the coil can run. Always available if empty.
    #[schedule("Availability")]
    availability_schedule: Option<String>,

    /// Ratio between the heat delivered and the electricity consumed
    #[defaults_to(1.0)]
    #[exclusive_minimum(0.0)]
    #[maximum(1.0)]
    efficiency: Option<Float>,

    /// The heating capacity, in `W`
    #[defaults_to(Autosize::Autosize)]
    nominal_capacity: Option<Autosize>,
}
