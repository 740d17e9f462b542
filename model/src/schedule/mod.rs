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

mod compact;
mod constant;
pub use compact::ScheduleCompact;
pub use constant::ScheduleConstant;

/// The schedules that objects point to (e.g., for their availability)
///
/// ## Example `.sml`
///
/// ```json
/// Schedule {
///     type: "Constant",
///     name: "Always On",
///     schedule_type_limits: "OnOff",
///     value: 1,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, GroupAPI)]
#[serde(tag = "type")]
pub enum Schedule {
    /// Same value all the time
    Constant(ScheduleConstant),

    /// Values written in the compact syntax of EnergyPlus
    Compact(ScheduleCompact),
}

impl Schedule {
    /// The name of the `ScheduleTypeLimits` of this schedule, if any
    pub fn schedule_type_limits(&self) -> Option<&str> {
        match self {
            Self::Constant(s) => s.schedule_type_limits().ok(),
            Self::Compact(s) => s.schedule_type_limits().ok(),
        }
    }

    /// Points the schedule to a `ScheduleTypeLimits` (or to none)
    pub fn set_schedule_type_limits(&mut self, limits: Option<String>) {
        match (self, limits) {
            (Self::Constant(s), Some(l)) => {
                s.set_schedule_type_limits(l);
            }
            (Self::Constant(s), None) => {
                s.reset_schedule_type_limits();
            }
            (Self::Compact(s), Some(l)) => {
                s.set_schedule_type_limits(l);
            }
            (Self::Compact(s), None) => {
                s.reset_schedule_type_limits();
            }
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let s: Schedule = json5::from_str(
            "{
            type: 'Constant',
            name: 'Always On',
            value: 1
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(s, Schedule::from(ScheduleConstant::new("Always On", 1.)));
        assert_eq!(s.name(), "Always On");
        assert_eq!(s.object_type(), "ScheduleConstant");
        assert!(s.schedule_fields().is_empty());

        let s: Schedule = json5::from_str(
            "{
            type: 'Compact',
            name: 'Weekdays',
            fields: ['Through: 12/31', 'For: Weekdays', 'Until: 24:00', '1', 'For: AllOtherDays', 'Until: 24:00', '0']
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(s.object_type(), "ScheduleCompact");
        Ok(())
    }

    #[test]
    fn limits() {
        let mut s: Schedule = ScheduleCompact::constant("Half", 0.5).into();
        assert!(s.schedule_type_limits().is_none());
        s.set_schedule_type_limits(Some("Fractional".into()));
        assert_eq!(s.schedule_type_limits(), Some("Fractional"));
        s.set_schedule_type_limits(None);
        assert!(s.schedule_type_limits().is_none());
    }
}
