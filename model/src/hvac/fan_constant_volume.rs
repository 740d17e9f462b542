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

/// A fan that moves a constant volume of air whenever it is available
///
/// ## Examples
///
/// #### `.sml`
///
/// ```json
/// HVAC {
///     type: "FanConstantVolume",
///     name: "Supply Fan",
///     pressure_rise: 600,
///     maximum_flow_rate: "autosize",
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FanConstantVolume {
    /// The name of the fan
    pub name: String,

    /// When the fan can run. Always available if empty.
    #[schedule("Availability")]
    availability_schedule: Option<String>,

    /// Ratio between the power delivered to the air and the electric power
    #[defaults_to(0.7)]
    #[exclusive_minimum(0.0)]
    #[maximum(1.0)]
    fan_total_efficiency: Option<Float>,

    /// Pressure rise at full flow, in `Pa`
    #[defaults_to(250.0)]
    pressure_rise: Option<Float>,

    /// The design air flow, in `m3/s`
    #[defaults_to(Autosize::Autosize)]
    maximum_flow_rate: Option<Autosize>,

    /// The efficiency of the motor
    #[defaults_to(0.9)]
    #[exclusive_minimum(0.0)]
    #[maximum(1.0)]
    motor_efficiency: Option<Float>,

    /// The fraction of the motor heat that goes into the air
    #[defaults_to(1.0)]
    #[minimum(0.0)]
    #[maximum(1.0)]
    motor_in_airstream_fraction: Option<Float>,

    /// The end-use category the consumption of the fan is reported under
    #[defaults_to("General")]
    end_use_subcategory: Option<String>,
}
