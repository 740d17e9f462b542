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

use crate::{Float, ModelError};
use derive::ObjectIO;
use serde::{Deserialize, Serialize};

/// A layer of air with no thermal mass, described only by its
/// thermal resistance
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirGap {
    /// The name of the material
    pub name: String,

    /// The thermal resistance, in `m2.K/W`
    pub thermal_resistance: Float,
}

impl AirGap {
    /// Checks that the thermal resistance is positive
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.thermal_resistance > 0.0) {
            return Err(ModelError::OutOfRange {
                object_type: Self::OBJECT_TYPE.to_string(),
                field: "thermal_resistance".to_string(),
                value: format!("{}", self.thermal_resistance),
                limit: "> 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde_and_validate() -> Result<(), String> {
        let gap: AirGap = json5::from_str("{name: 'Gap', thermal_resistance: 0.15}")
            .map_err(|e| e.to_string())?;
        assert_eq!(gap, AirGap::new("Gap", 0.15));
        assert!(gap.validate().is_ok());
        assert!(AirGap::new("Bad", -0.1).validate().is_err());
        Ok(())
    }
}
