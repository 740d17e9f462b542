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

/// A schedule written in the compact syntax of EnergyPlus
/// (i.e., `Through: 12/31`, `For: AllDays`, `Until: 24:00`, `1`).
///
/// The fields are kept as they are; they are not interpreted.
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleCompact {
    /// The name of the schedule
    pub name: String,

    /// The name of the `ScheduleTypeLimits` bounding the values
    schedule_type_limits: Option<String>,

    /// The compact fields
    #[serde(default)]
    pub(crate) fields: Vec<String>,
}

impl ScheduleCompact {
    /// Creates a compact schedule holding the same value all year
    pub fn constant<S: Into<String>>(name: S, value: Float) -> Self {
        let mut ret = Self::new(name);
        ret.set_fields(vec![
            "Through: 12/31".to_string(),
            "For: AllDays".to_string(),
            "Until: 24:00".to_string(),
            format!("{}", value),
        ]);
        ret
    }

    /// Replaces the compact fields
    pub fn set_fields(&mut self, fields: Vec<String>) -> &mut Self {
        self.fields = fields;
        self
    }

    /// Appends a compact field
    pub fn push_field<S: Into<String>>(&mut self, field: S) -> &mut Self {
        self.fields.push(field.into());
        self
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let hardcoded_ref = ScheduleCompact::constant("Always Off", 0.);

        let from_hardcoded_json: ScheduleCompact = json5::from_str(
            "{
            name: 'Always Off',
            fields: ['Through: 12/31', 'For: AllDays', 'Until: 24:00', '0'],
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);
        assert_eq!(from_hardcoded_json.fields().len(), 4);

        let no_fields: ScheduleCompact =
            json5::from_str("{name: 'Empty'}").map_err(|e| e.to_string())?;
        assert!(no_fields.fields().is_empty());
        Ok(())
    }
}
