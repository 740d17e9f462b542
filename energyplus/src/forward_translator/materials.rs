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

use idf::fields::{construction, material as mat, material_air_gap as gap};
use idf::{IddObjectType, IdfObject};
use model::{Material, Model, ModelObjectKind};

use super::{ForwardTranslator, Translated};

impl ForwardTranslator {
    pub(super) fn translate_material(&mut self, model: &Model, name: &str) -> Translated {
        let obj = match model.get_material(name)? {
            Material::StandardOpaqueMaterial(m) => {
                let mut obj = IdfObject::new(IddObjectType::Material);
                obj.set_name(&m.name)?;
                obj.set_string(mat::ROUGHNESS, m.roughness.to_string())?;
                obj.set_double(mat::THICKNESS, m.thickness as f64)?;
                obj.set_double(mat::CONDUCTIVITY, m.conductivity as f64)?;
                obj.set_double(mat::DENSITY, m.density as f64)?;
                obj.set_double(mat::SPECIFIC_HEAT, m.specific_heat as f64)?;
                if !m.is_thermal_absorptance_defaulted() {
                    obj.set_double(mat::THERMAL_ABSORPTANCE, m.thermal_absorptance() as f64)?;
                }
                if !m.is_solar_absorptance_defaulted() {
                    obj.set_double(mat::SOLAR_ABSORPTANCE, m.solar_absorptance() as f64)?;
                }
                if !m.is_visible_absorptance_defaulted() {
                    obj.set_double(mat::VISIBLE_ABSORPTANCE, m.visible_absorptance() as f64)?;
                }
                obj
            }
            Material::AirGap(m) => {
                let mut obj = IdfObject::new(IddObjectType::MaterialAirGap);
                obj.set_name(&m.name)?;
                obj.set_double(gap::THERMAL_RESISTANCE, m.thermal_resistance as f64)?;
                obj
            }
        };
        Ok(Some(obj))
    }

    pub(super) fn translate_construction(&mut self, model: &Model, name: &str) -> Translated {
        let c = model.get_construction(name)?;

        let mut obj = IdfObject::new(IddObjectType::Construction);
        obj.set_name(&c.name)?;
        let mut n_layers = 0;
        for layer in c.layers() {
            if self
                .translate_and_map_model_object(model, ModelObjectKind::Material, layer)
                .is_none()
            {
                self.log.warn(format!(
                    "Construction '{}' will be written without its layer '{}'",
                    c.name, layer
                ));
                continue;
            }
            // The outside layer is a fixed field; the rest are extensible
            if n_layers == 0 {
                obj.set_string(construction::OUTSIDE_LAYER, layer)?;
            } else {
                obj.push_extensible_group(&[layer])?;
            }
            n_layers += 1;
        }
        if n_layers == 0 {
            self.log.error(format!(
                "Construction '{}' has no layers; it will not be translated",
                c.name
            ));
            return Ok(None);
        }
        Ok(Some(obj))
    }
}
