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
use idf::{IddObjectType, IdfObject, Workspace};
use model::{AirGap, Construction, Roughness, StandardOpaqueMaterial};

use super::{optional_double, required_double, required_name, ReverseTranslator, Reversed};
use crate::TranslatorError;

impl ReverseTranslator {
    pub(super) fn translate_material(&mut self, obj: &IdfObject) -> Reversed {
        let name = required_name(obj)?;
        let roughness = match obj.get_string(mat::ROUGHNESS).map(|r| r.parse::<Roughness>()) {
            Some(Ok(r)) => r,
            _ => {
                return Err(TranslatorError::MissingField {
                    class_name: obj.class_name().to_string(),
                    name,
                    field: obj.idd().field_name(mat::ROUGHNESS),
                })
            }
        };
        let mut material = StandardOpaqueMaterial::new(
            name,
            roughness,
            required_double(obj, mat::THICKNESS)?,
            required_double(obj, mat::CONDUCTIVITY)?,
            required_double(obj, mat::DENSITY)?,
            required_double(obj, mat::SPECIFIC_HEAT)?,
        );
        if let Some(v) = optional_double(obj, mat::THERMAL_ABSORPTANCE) {
            material.set_thermal_absorptance(v)?;
        }
        if let Some(v) = optional_double(obj, mat::SOLAR_ABSORPTANCE) {
            material.set_solar_absorptance(v)?;
        }
        if let Some(v) = optional_double(obj, mat::VISIBLE_ABSORPTANCE) {
            material.set_visible_absorptance(v)?;
        }
        Ok(Some(self.model.add_material(material.into())?))
    }

    pub(super) fn translate_material_air_gap(&mut self, obj: &IdfObject) -> Reversed {
        let gap = AirGap::new(
            required_name(obj)?,
            required_double(obj, gap::THERMAL_RESISTANCE)?,
        );
        Ok(Some(self.model.add_material(gap.into())?))
    }

    pub(super) fn translate_construction(&mut self, workspace: &Workspace, obj: &IdfObject) -> Reversed {
        let mut construction = Construction::new(required_name(obj)?);
        // The outside layer, followed by the extensible ones
        let layers = obj.fields().iter().skip(construction::OUTSIDE_LAYER);
        for layer in layers.map(|l| l.trim()).filter(|l| !l.is_empty()) {
            match self.translate_reference(
                workspace,
                &[IddObjectType::Material, IddObjectType::MaterialAirGap],
                layer,
            ) {
                Some(name) => {
                    construction.push_layer(name);
                }
                None => {
                    self.log.error(format!(
                        "Construction '{}' references material '{}', which could not be translated",
                        construction.name, layer
                    ));
                    return Ok(None);
                }
            }
        }
        Ok(Some(self.model.add_construction(construction)?))
    }
}
