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

use crate::Float;
use derive::ObjectIO;
use serde::{Deserialize, Serialize};

/// A volume of air at a uniform temperature, conditioned as one
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// ThermalZone {
///     name: "Kitchen",
///     multiplier: 2,
///     ceiling_height: 2.7,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThermalZone {
    /// The name of the zone
    pub name: String,

    /// The number of identical zones this one represents
    #[defaults_to(1)]
    #[minimum(1)]
    multiplier: Option<usize>,

    /// The ceiling height, in `m`. Calculated by EnergyPlus if empty.
    #[exclusive_minimum(0.0)]
    ceiling_height: Option<Float>,

    /// The volume, in `m3`. Calculated by EnergyPlus if empty.
    #[exclusive_minimum(0.0)]
    volume: Option<Float>,

    /// The floor area, in `m2`. Calculated by EnergyPlus if empty.
    #[exclusive_minimum(0.0)]
    floor_area: Option<Float>,
}
