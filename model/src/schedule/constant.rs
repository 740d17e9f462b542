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

/// A schedule that holds the same value all the time
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConstant {
    /// The name of the schedule
    pub name: String,

    /// The name of the `ScheduleTypeLimits` bounding the value
    schedule_type_limits: Option<String>,

    /// The value, every hour of the year
    pub value: Float,
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let mut hardcoded_ref = ScheduleConstant::new("Always On", 1.0);
        hardcoded_ref.set_schedule_type_limits("OnOff");

        let from_hardcoded_json: ScheduleConstant = json5::from_str(
            "{
            name: 'Always On',
            schedule_type_limits: 'OnOff',
            value: 1,
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);

        let rust_json = serde_json::to_string(&hardcoded_ref).map_err(|e| e.to_string())?;
        let from_serialized: ScheduleConstant =
            serde_json::from_str(&rust_json).map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_serialized);
        Ok(())
    }

    #[test]
    fn missing_limits() {
        let s = ScheduleConstant::new("No limits", 0.3);
        match s.schedule_type_limits() {
            Err(crate::ModelError::MissingField { field, .. }) => {
                assert_eq!(field, "schedule_type_limits")
            }
            _ => panic!("expected a missing field"),
        }
    }
}
