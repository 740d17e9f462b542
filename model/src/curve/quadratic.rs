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

/// `out = c1 + c2*x + c3*x^2`
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveQuadratic {
    /// The name of the curve
    pub name: String,

    /// The constant coefficient
    #[defaults_to(0.0)]
    coefficient1_constant: Option<Float>,

    /// The coefficient of `x`
    #[defaults_to(0.0)]
    coefficient2_x: Option<Float>,

    /// The coefficient of `x^2`
    #[defaults_to(1.0)]
    coefficient3_x_pow_2: Option<Float>,

    /// Inputs below this value are evaluated as this value
    #[defaults_to(0.0)]
    minimum_value_of_x: Option<Float>,

    /// Inputs above this value are evaluated as this value
    #[defaults_to(1.0)]
    maximum_value_of_x: Option<Float>,

    /// Outputs are never below this
    minimum_curve_output: Option<Float>,

    /// Outputs are never above this
    maximum_curve_output: Option<Float>,
}

impl CurveQuadratic {
    /// Evaluates the curve
    pub fn evaluate(&self, x: Float) -> Float {
        let x = super::clamp(x, self.minimum_value_of_x(), self.maximum_value_of_x());
        let out = self.coefficient1_constant()
            + self.coefficient2_x() * x
            + self.coefficient3_x_pow_2() * x * x;
        super::clamp_output(out, self.minimum_curve_output, self.maximum_curve_output)
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn evaluate() {
        let mut c = CurveQuadratic::new("Quad");
        // defaults to x^2 in [0, 1]
        assert!((c.evaluate(0.5) - 0.25).abs() < 1e-9);
        assert!((c.evaluate(2.0) - 1.0).abs() < 1e-9);

        c.set_coefficient1_constant(1.0)
            .set_coefficient2_x(2.0)
            .set_coefficient3_x_pow_2(0.0)
            .set_maximum_value_of_x(10.)
            .set_maximum_curve_output(5.);
        assert!((c.evaluate(1.0) - 3.0).abs() < 1e-9);
        assert!((c.evaluate(4.0) - 5.0).abs() < 1e-9);
        assert!((c.evaluate(-1.0) - 1.0).abs() < 1e-9);
    }
}
