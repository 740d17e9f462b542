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

use idf::fields::zone;
use idf::{IddObjectType, IdfObject};
use model::Model;

use super::{ForwardTranslator, Translated};

impl ForwardTranslator {
    pub(super) fn translate_thermal_zone(&mut self, model: &Model, name: &str) -> Translated {
        let z = model.get_thermal_zone(name)?;

        // Blank geometry fields are autocalculated by EnergyPlus
        let mut obj = IdfObject::new(IddObjectType::Zone);
        obj.set_name(&z.name)?;
        if !z.is_multiplier_defaulted() {
            obj.set_double(zone::MULTIPLIER, z.multiplier() as f64)?;
        }
        if let Ok(v) = z.ceiling_height() {
            obj.set_double(zone::CEILING_HEIGHT, v as f64)?;
        }
        if let Ok(v) = z.volume() {
            obj.set_double(zone::VOLUME, v as f64)?;
        }
        if let Ok(v) = z.floor_area() {
            obj.set_double(zone::FLOOR_AREA, v as f64)?;
        }
        Ok(Some(obj))
    }
}

#[cfg(test)]
mod testing {
    use crate::ForwardTranslator;
    use model::{Model, ModelError, ModelObjectKind, ThermalZone};

    #[test]
    fn zone() -> Result<(), ModelError> {
        let mut model = Model::default();
        let mut z = ThermalZone::new("Kitchen");
        z.set_multiplier(2)?.set_volume(60.)?;
        model.add_thermal_zone(z)?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::ThermalZone, "Kitchen");
        let obj = &ws.objects()[0];
        assert_eq!(obj.name(), Some("Kitchen"));
        assert_eq!(obj.get_int(6), Some(2));
        assert_eq!(obj.get_string(7), None);
        assert_eq!(obj.get_double(8), Some(60.));
        assert_eq!(obj.num_fields(), 9);
        Ok(())
    }
}
