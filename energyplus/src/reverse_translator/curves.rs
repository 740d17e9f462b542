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

use idf::fields::{curve_biquadratic as bq, curve_cubic as cu, curve_quadratic as qu};
use idf::{IddObjectType, IdfObject};
use model::{Curve, CurveBiquadratic, CurveCubic, CurveQuadratic};

use super::{optional_double, required_name, ReverseTranslator, Reversed};

/// Copies a field into a setter, if it is not blank
macro_rules! copy_field {
    ($curve:ident, $obj:ident, $index:expr, $setter:ident) => {
        if let Some(v) = optional_double($obj, $index) {
            $curve.$setter(v);
        }
    };
}

impl ReverseTranslator {
    pub(super) fn translate_curve(&mut self, obj: &IdfObject) -> Reversed {
        let name = required_name(obj)?;
        let curve: Curve = match obj.object_type() {
            IddObjectType::CurveQuadratic => {
                let mut c = CurveQuadratic::new(name);
                copy_field!(c, obj, qu::COEFFICIENT1_CONSTANT, set_coefficient1_constant);
                copy_field!(c, obj, qu::COEFFICIENT2_X, set_coefficient2_x);
                copy_field!(c, obj, qu::COEFFICIENT3_X2, set_coefficient3_x_pow_2);
                copy_field!(c, obj, qu::MINIMUM_VALUE_OF_X, set_minimum_value_of_x);
                copy_field!(c, obj, qu::MAXIMUM_VALUE_OF_X, set_maximum_value_of_x);
                copy_field!(c, obj, qu::MINIMUM_CURVE_OUTPUT, set_minimum_curve_output);
                copy_field!(c, obj, qu::MAXIMUM_CURVE_OUTPUT, set_maximum_curve_output);
                c.into()
            }
            IddObjectType::CurveCubic => {
                let mut c = CurveCubic::new(name);
                copy_field!(c, obj, cu::COEFFICIENT1_CONSTANT, set_coefficient1_constant);
                copy_field!(c, obj, cu::COEFFICIENT2_X, set_coefficient2_x);
                copy_field!(c, obj, cu::COEFFICIENT3_X2, set_coefficient3_x_pow_2);
                copy_field!(c, obj, cu::COEFFICIENT4_X3, set_coefficient4_x_pow_3);
                copy_field!(c, obj, cu::MINIMUM_VALUE_OF_X, set_minimum_value_of_x);
                copy_field!(c, obj, cu::MAXIMUM_VALUE_OF_X, set_maximum_value_of_x);
                copy_field!(c, obj, cu::MINIMUM_CURVE_OUTPUT, set_minimum_curve_output);
                copy_field!(c, obj, cu::MAXIMUM_CURVE_OUTPUT, set_maximum_curve_output);
                c.into()
            }
            _ => {
                let mut c = CurveBiquadratic::new(name);
                copy_field!(c, obj, bq::COEFFICIENT1_CONSTANT, set_coefficient1_constant);
                copy_field!(c, obj, bq::COEFFICIENT2_X, set_coefficient2_x);
                copy_field!(c, obj, bq::COEFFICIENT3_X2, set_coefficient3_x_pow_2);
                copy_field!(c, obj, bq::COEFFICIENT4_Y, set_coefficient4_y);
                copy_field!(c, obj, bq::COEFFICIENT5_Y2, set_coefficient5_y_pow_2);
                copy_field!(c, obj, bq::COEFFICIENT6_XY, set_coefficient6_x_times_y);
                copy_field!(c, obj, bq::MINIMUM_VALUE_OF_X, set_minimum_value_of_x);
                copy_field!(c, obj, bq::MAXIMUM_VALUE_OF_X, set_maximum_value_of_x);
                copy_field!(c, obj, bq::MINIMUM_VALUE_OF_Y, set_minimum_value_of_y);
                copy_field!(c, obj, bq::MAXIMUM_VALUE_OF_Y, set_maximum_value_of_y);
                copy_field!(c, obj, bq::MINIMUM_CURVE_OUTPUT, set_minimum_curve_output);
                copy_field!(c, obj, bq::MAXIMUM_CURVE_OUTPUT, set_maximum_curve_output);
                c.into()
            }
        };
        Ok(Some(self.model.add_curve(curve)?))
    }
}

#[cfg(test)]
mod testing {
    use crate::ReverseTranslator;
    use idf::Workspace;
    use model::Curve;

    #[test]
    fn curves() -> Result<(), String> {
        let ws: Workspace = "
            Curve:Quadratic, Fan Curve, 0.1, 0.9, 0, 0, 1;
            Curve:Cubic, Part Load, 0.2, 0.3, 0.4, 0.1, 0, 1, , 1.5;
            Curve:Biquadratic, Bad, 1, 0, 0, 0, 0, 0, 1, 0;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);

        let fan = model.get_curve("Fan Curve").map_err(|e| e.to_string())?;
        let y = fan.evaluate(&[0.5]).map_err(|e| e.to_string())?;
        assert!((y - 0.55).abs() < 1e-9);

        match model.get_curve("Part Load").map_err(|e| e.to_string())? {
            Curve::Cubic(c) => {
                assert!(c.minimum_curve_output().is_err());
                assert_eq!(c.maximum_curve_output().map_err(|e| e.to_string())?, 1.5);
            }
            _ => return Err("expected a cubic curve".into()),
        }

        // Its range of x is empty
        assert!(model.get_curve("Bad").is_err());
        assert_eq!(translator.errors().len(), 1);
        Ok(())
    }
}
