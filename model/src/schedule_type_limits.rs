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
use strum::{Display, EnumString};

/// Whether a schedule takes any value within its limits or only integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum NumericType {
    /// Any value
    Continuous,

    /// Only integer values
    Discrete,
}

/// The limits and units of the values of the schedules that point to it.
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// ScheduleTypeLimits {
///     name: "Fractional",
///     lower_limit_value: 0.0,
///     upper_limit_value: 1.0,
///     numeric_type: "Continuous",
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleTypeLimits {
    /// The name of the object
    pub name: String,

    /// The minimum value allowed. Empty means there is no lower limit.
    lower_limit_value: Option<Float>,

    /// The maximum value allowed. Empty means there is no upper limit.
    upper_limit_value: Option<Float>,

    /// Whether the values are continuous or discrete
    #[defaults_to(NumericType::Continuous)]
    numeric_type: Option<NumericType>,

    /// The kind of quantity described by the schedule
    /// (e.g., `Dimensionless`, `Temperature`, `Availability`)
    #[defaults_to("Dimensionless")]
    unit_type: Option<String>,
}

impl ScheduleTypeLimits {
    /// Checks that the lower limit is not above the upper one
    pub fn validate(&self) -> Result<(), crate::ModelError> {
        if let (Some(lo), Some(hi)) = (self.lower_limit_value, self.upper_limit_value) {
            if lo > hi {
                return Err(crate::ModelError::Invalid {
                    object_type: Self::OBJECT_TYPE.to_string(),
                    name: self.name.clone(),
                    msg: format!("lower limit {} is above upper limit {}", lo, hi),
                });
            }
        }
        Ok(())
    }
}

/// Maps a unit type onto the physical unit it measures. Unit types
/// that represent states or modes are all dimensionless.
pub fn physical_unit(unit_type: &str) -> Option<&'static str> {
    let u = unit_type.trim().to_ascii_lowercase();
    let ret = match u.as_str() {
        "" | "dimensionless" | "availability" | "onoff" | "controlmode" | "control" | "mode" => {
            ""
        }
        "temperature" => "C",
        "deltatemperature" => "deltaC",
        "precipitationrate" | "velocity" => "m/s",
        "angle" => "deg",
        "convectioncoefficient" => "W/m2-K",
        "activitylevel" => "W/person",
        "capacity" | "power" => "W",
        "percent" => "%",
        _ => return None,
    };
    Some(ret)
}
