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
use idf::{IddObjectType, IdfError, IdfObject};
use model::{Curve, Float, Model, ModelError};

use super::{ForwardTranslator, Translated};

/// Writes an optional output limit
fn set_limit(obj: &mut IdfObject, index: usize, v: Result<Float, ModelError>) -> Result<(), IdfError> {
    if let Ok(v) = v {
        obj.set_double(index, v as f64)?;
    }
    Ok(())
}

impl ForwardTranslator {
    pub(super) fn translate_curve(&mut self, model: &Model, name: &str) -> Translated {
        let obj = match model.get_curve(name)? {
            Curve::Quadratic(c) => {
                let mut obj = IdfObject::new(IddObjectType::CurveQuadratic);
                obj.set_name(&c.name)?;
                obj.set_double(qu::COEFFICIENT1_CONSTANT, c.coefficient1_constant() as f64)?;
                obj.set_double(qu::COEFFICIENT2_X, c.coefficient2_x() as f64)?;
                obj.set_double(qu::COEFFICIENT3_X2, c.coefficient3_x_pow_2() as f64)?;
                obj.set_double(qu::MINIMUM_VALUE_OF_X, c.minimum_value_of_x() as f64)?;
                obj.set_double(qu::MAXIMUM_VALUE_OF_X, c.maximum_value_of_x() as f64)?;
                set_limit(&mut obj, qu::MINIMUM_CURVE_OUTPUT, c.minimum_curve_output())?;
                set_limit(&mut obj, qu::MAXIMUM_CURVE_OUTPUT, c.maximum_curve_output())?;
                obj
            }
            Curve::Cubic(c) => {
                let mut obj = IdfObject::new(IddObjectType::CurveCubic);
                obj.set_name(&c.name)?;
                obj.set_double(cu::COEFFICIENT1_CONSTANT, c.coefficient1_constant() as f64)?;
                obj.set_double(cu::COEFFICIENT2_X, c.coefficient2_x() as f64)?;
                obj.set_double(cu::COEFFICIENT3_X2, c.coefficient3_x_pow_2() as f64)?;
                obj.set_double(cu::COEFFICIENT4_X3, c.coefficient4_x_pow_3() as f64)?;
                obj.set_double(cu::MINIMUM_VALUE_OF_X, c.minimum_value_of_x() as f64)?;
                obj.set_double(cu::MAXIMUM_VALUE_OF_X, c.maximum_value_of_x() as f64)?;
                set_limit(&mut obj, cu::MINIMUM_CURVE_OUTPUT, c.minimum_curve_output())?;
                set_limit(&mut obj, cu::MAXIMUM_CURVE_OUTPUT, c.maximum_curve_output())?;
                obj
            }
            Curve::Biquadratic(c) => {
                let mut obj = IdfObject::new(IddObjectType::CurveBiquadratic);
                obj.set_name(&c.name)?;
                obj.set_double(bq::COEFFICIENT1_CONSTANT, c.coefficient1_constant() as f64)?;
                obj.set_double(bq::COEFFICIENT2_X, c.coefficient2_x() as f64)?;
                obj.set_double(bq::COEFFICIENT3_X2, c.coefficient3_x_pow_2() as f64)?;
                obj.set_double(bq::COEFFICIENT4_Y, c.coefficient4_y() as f64)?;
                obj.set_double(bq::COEFFICIENT5_Y2, c.coefficient5_y_pow_2() as f64)?;
                obj.set_double(bq::COEFFICIENT6_XY, c.coefficient6_x_times_y() as f64)?;
                obj.set_double(bq::MINIMUM_VALUE_OF_X, c.minimum_value_of_x() as f64)?;
                obj.set_double(bq::MAXIMUM_VALUE_OF_X, c.maximum_value_of_x() as f64)?;
                obj.set_double(bq::MINIMUM_VALUE_OF_Y, c.minimum_value_of_y() as f64)?;
                obj.set_double(bq::MAXIMUM_VALUE_OF_Y, c.maximum_value_of_y() as f64)?;
                set_limit(&mut obj, bq::MINIMUM_CURVE_OUTPUT, c.minimum_curve_output())?;
                set_limit(&mut obj, bq::MAXIMUM_CURVE_OUTPUT, c.maximum_curve_output())?;
                obj
            }
        };
        Ok(Some(obj))
    }
}

#[cfg(test)]
mod testing {
    use crate::ForwardTranslator;
    use model::{CurveBiquadratic, Model, ModelError, ModelObjectKind};

    #[test]
    fn biquadratic() -> Result<(), ModelError> {
        let mut model = Model::default();
        let mut c = CurveBiquadratic::new("EIR");
        c.set_coefficient1_constant(0.3)
            .set_coefficient6_x_times_y(-0.01)
            .set_maximum_curve_output(1.2);
        model.add_curve(c.into())?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::Curve, "EIR");
        let obj = &ws.objects()[0];
        assert_eq!(obj.class_name(), "Curve:Biquadratic");
        assert_eq!(obj.get_double(1), Some(0.3));
        assert_eq!(obj.get_double(3), Some(1.0));
        assert_eq!(obj.get_double(6), Some(-0.01));
        assert_eq!(obj.get_double(11), None);
        assert_eq!(obj.get_double(12), Some(1.2));
        Ok(())
    }
}
