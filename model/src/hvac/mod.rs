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

use derive::GroupAPI;
use serde::{Deserialize, Serialize};

mod coil_heating_electric;
mod fan_constant_volume;
pub use crate::hvac::coil_heating_electric::CoilHeatingElectric;
pub use crate::hvac::fan_constant_volume::FanConstantVolume;

/// The components that can go in the supply side of an `AirLoopHVAC`
///
/// ## Example `.sml`
///
/// ```json
/// HVAC {
///     type: "FanConstantVolume",
///     name: "Supply Fan",
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, GroupAPI)]
#[serde(tag = "type")]
pub enum HVAC {
    /// A fan moving a constant volume of air
    FanConstantVolume(FanConstantVolume),

    /// An electric heating coil. It can only
    /// heat.
    CoilHeatingElectric(CoilHeatingElectric),
}

/***********/
/* TESTING */
/***********/
