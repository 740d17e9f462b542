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
use derive::GroupAPI;
use serde::{Deserialize, Serialize};

mod biquadratic;
mod cubic;
mod quadratic;
pub use biquadratic::CurveBiquadratic;
pub use cubic::CurveCubic;
pub use quadratic::CurveQuadratic;

/// Keeps `v` within `[min, max]`. Does not panic if `min > max`.
fn clamp(v: Float, min: Float, max: Float) -> Float {
    v.max(min).min(max)
}

fn clamp_output(v: Float, min: Option<Float>, max: Option<Float>) -> Float {
    let mut v = v;
    if let Some(min) = min {
        v = v.max(min);
    }
    if let Some(max) = max {
        v = v.min(max);
    }
    v
}

/// Performance curves, used by HVAC equipment to modify their
/// rated behaviour
///
/// ## Example `.sml`
///
/// ```json
/// Curve {
///     type: "Quadratic",
///     name: "Fan Curve",
///     coefficient1_constant: 0.1,
///     coefficient2_x: 0.9,
///     coefficient3_x_pow_2: 0.0,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, GroupAPI)]
#[serde(tag = "type")]
pub enum Curve {
    /// One independent variable, second order
    Quadratic(CurveQuadratic),

    /// One independent variable, third order
    Cubic(CurveCubic),

    /// Two independent variables, second order
    Biquadratic(CurveBiquadratic),
}

impl Curve {
    /// The number of independent variables
    pub fn num_variables(&self) -> usize {
        match self {
            Self::Quadratic(_) | Self::Cubic(_) => 1,
            Self::Biquadratic(_) => 2,
        }
    }

    /// Evaluates the curve, clamping the inputs to their limits
    /// and the output to its limits (if any)
    pub fn evaluate(&self, inputs: &[Float]) -> Result<Float, ModelError> {
        let expected = self.num_variables();
        if inputs.len() != expected {
            return Err(ModelError::WrongNumberOfInputs {
                name: self.name().to_string(),
                expected,
                found: inputs.len(),
            });
        }
        let ret = match self {
            Self::Quadratic(c) => c.evaluate(inputs[0]),
            Self::Cubic(c) => c.evaluate(inputs[0]),
            Self::Biquadratic(c) => c.evaluate(inputs[0], inputs[1]),
        };
        Ok(ret)
    }

    /// Checks that the input limits are ordered
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut limits = Vec::new();
        match self {
            Self::Quadratic(c) => limits.push((c.minimum_value_of_x(), c.maximum_value_of_x())),
            Self::Cubic(c) => limits.push((c.minimum_value_of_x(), c.maximum_value_of_x())),
            Self::Biquadratic(c) => {
                limits.push((c.minimum_value_of_x(), c.maximum_value_of_x()));
                limits.push((c.minimum_value_of_y(), c.maximum_value_of_y()));
            }
        }
        for (min, max) in limits {
            if min > max {
                return Err(ModelError::Invalid {
                    object_type: self.object_type().to_string(),
                    name: self.name().to_string(),
                    msg: format!("minimum input {} is above maximum input {}", min, max),
                });
            }
        }
        Ok(())
    }
}
