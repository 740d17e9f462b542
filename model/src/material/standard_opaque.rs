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
use strum::{Display, EnumString};

/// The roughness of the outer face of a material, used for
/// calculating exterior convection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Roughness {
    /// e.g., stucco
    VeryRough,
    /// e.g., brick
    Rough,
    /// e.g., concrete
    MediumRough,
    /// e.g., clear pine
    MediumSmooth,
    /// e.g., smooth plaster
    Smooth,
    /// e.g., glass
    VerySmooth,
}

/// An opaque layer with thermal mass
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardOpaqueMaterial {
    /// The name of the material
    pub name: String,

    /// The roughness of its faces
    pub roughness: Roughness,

    /// The thickness, in `m`
    pub thickness: Float,

    /// The thermal conductivity, in `W/m.K`
    pub conductivity: Float,

    /// The density, in `kg/m3`
    pub density: Float,

    /// The specific heat, in `J/kg.K`
    pub specific_heat: Float,

    /// The fraction of long wave radiation absorbed
    #[defaults_to(0.9)]
    #[exclusive_minimum(0.0)]
    #[maximum(0.99999)]
    thermal_absorptance: Option<Float>,

    /// The fraction of solar radiation absorbed
    #[defaults_to(0.7)]
    #[exclusive_minimum(0.0)]
    #[maximum(0.99999)]
    solar_absorptance: Option<Float>,

    /// The fraction of visible light absorbed
    #[defaults_to(0.7)]
    #[exclusive_minimum(0.0)]
    #[maximum(0.99999)]
    visible_absorptance: Option<Float>,
}

impl StandardOpaqueMaterial {
    fn out_of_range(&self, field: &str, value: Float, limit: &str) -> ModelError {
        ModelError::OutOfRange {
            object_type: Self::OBJECT_TYPE.to_string(),
            field: field.to_string(),
            value: format!("{}", value),
            limit: limit.to_string(),
        }
    }

    /// Checks the fields that are set directly, and the absorptances read
    /// from files
    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [
            ("thickness", self.thickness),
            ("conductivity", self.conductivity),
            ("density", self.density),
        ] {
            if !(value > 0.0) {
                return Err(self.out_of_range(field, value, "> 0"));
            }
        }
        if !(self.specific_heat >= 100.0) {
            return Err(self.out_of_range("specific_heat", self.specific_heat, ">= 100"));
        }
        for (field, value) in [
            ("thermal_absorptance", self.thermal_absorptance),
            ("solar_absorptance", self.solar_absorptance),
            ("visible_absorptance", self.visible_absorptance),
        ] {
            if let Some(v) = value {
                if !(v > 0.0 && v <= 0.99999) {
                    return Err(self.out_of_range(field, v, "> 0 and <= 0.99999"));
                }
            }
        }
        Ok(())
    }

    /// The thermal resistance of the layer, in `m2.K/W`
    pub fn thermal_resistance(&self) -> Float {
        self.thickness / self.conductivity
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    fn brick() -> StandardOpaqueMaterial {
        StandardOpaqueMaterial::new("Brick", Roughness::Rough, 0.1, 0.8, 1900., 800.)
    }

    #[test]
    fn serde() -> Result<(), String> {
        let hardcoded_ref = brick();
        let from_hardcoded_json: StandardOpaqueMaterial = json5::from_str(
            "{
            name: 'Brick',
            roughness: 'Rough',
            thickness: 0.1,
            conductivity: 0.8,
            density: 1900,
            specific_heat: 800,
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);
        Ok(())
    }

    #[test]
    fn defaults_and_ranges() -> Result<(), ModelError> {
        let mut m = brick();
        assert_eq!(m.thermal_absorptance(), 0.9);
        assert_eq!(m.solar_absorptance(), 0.7);
        assert_eq!(m.visible_absorptance(), 0.7);
        assert!(m.is_solar_absorptance_defaulted());

        m.set_solar_absorptance(0.5)?;
        assert_eq!(m.solar_absorptance(), 0.5);
        assert!(m.set_solar_absorptance(0.0).is_err());
        assert!(m.set_solar_absorptance(1.0).is_err());
        // failed sets leave the value untouched
        assert_eq!(m.solar_absorptance(), 0.5);
        m.reset_solar_absorptance();
        assert!(m.is_solar_absorptance_defaulted());
        Ok(())
    }

    #[test]
    fn test_validate() {
        let mut m = brick();
        assert!(m.validate().is_ok());
        assert!((m.thermal_resistance() - 0.125).abs() < 1e-9);
        m.specific_heat = 99.;
        assert!(m.validate().is_err());
        m.specific_heat = 100.;
        m.thickness = 0.;
        assert!(m.validate().is_err());
    }
}
