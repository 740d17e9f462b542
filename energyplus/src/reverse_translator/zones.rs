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
use idf::IdfObject;
use model::ThermalZone;

use super::{optional_double, required_name, ReverseTranslator, Reversed};

impl ReverseTranslator {
    /// Only the fields the model keeps are read; origin and north axis
    /// are dropped.
    pub(super) fn translate_zone(&mut self, obj: &IdfObject) -> Reversed {
        let mut z = ThermalZone::new(required_name(obj)?);
        if let Some(m) = obj.get_int(zone::MULTIPLIER) {
            let multiplier = usize::try_from(m).unwrap_or(0);
            if z.set_multiplier(multiplier).is_err() {
                self.log.warn(format!(
                    "Zone '{}' has an invalid multiplier ({}); using 1",
                    z.name, m
                ));
            }
        }
        if let Some(v) = optional_double(obj, zone::CEILING_HEIGHT) {
            z.set_ceiling_height(v)?;
        }
        if let Some(v) = optional_double(obj, zone::VOLUME) {
            z.set_volume(v)?;
        }
        if let Some(v) = optional_double(obj, zone::FLOOR_AREA) {
            z.set_floor_area(v)?;
        }
        Ok(Some(self.model.add_thermal_zone(z)?))
    }
}

#[cfg(test)]
mod testing {
    use crate::ReverseTranslator;
    use idf::Workspace;

    #[test]
    fn zones() -> Result<(), String> {
        let ws: Workspace = "
            Zone, Kitchen, 0, 0, 0, 0, 1, 3, 2.7, autocalculate, 20;
            Zone, Basement, 0, 0, 0, 0, 1, -2;
            Zone, Attic, 0, 0, 0, 0, 1, 1, -1;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);

        let kitchen = model.get_thermal_zone("Kitchen").map_err(|e| e.to_string())?;
        assert_eq!(kitchen.multiplier(), 3);
        assert_eq!(kitchen.ceiling_height().map_err(|e| e.to_string())?, 2.7);
        assert!(kitchen.volume().is_err());
        assert_eq!(kitchen.floor_area().map_err(|e| e.to_string())?, 20.);

        let basement = model.get_thermal_zone("Basement").map_err(|e| e.to_string())?;
        assert!(basement.is_multiplier_defaulted());
        assert_eq!(translator.warnings().len(), 1);

        // A negative ceiling height cannot be stored
        assert!(model.get_thermal_zone("Attic").is_err());
        assert_eq!(translator.errors().len(), 1);
        Ok(())
    }
}
