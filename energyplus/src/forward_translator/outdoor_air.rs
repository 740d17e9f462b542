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

use idf::fields::design_specification_outdoor_air as oa;
use idf::{IddObjectType, IdfObject};
use model::Model;

use super::{ForwardTranslator, Translated};

impl ForwardTranslator {
    pub(super) fn translate_design_specification_outdoor_air(
        &mut self,
        model: &Model,
        name: &str,
    ) -> Translated {
        let dsoa = model.get_design_specification_outdoor_air(name)?;

        let mut obj = IdfObject::new(IddObjectType::DesignSpecificationOutdoorAir);
        obj.set_name(&dsoa.name)?;
        obj.set_string(oa::OUTDOOR_AIR_METHOD, dsoa.outdoor_air_method().to_string())?;
        obj.set_double(
            oa::OUTDOOR_AIR_FLOW_PER_PERSON,
            dsoa.outdoor_air_flow_per_person() as f64,
        )?;
        obj.set_double(
            oa::OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA,
            dsoa.outdoor_air_flow_per_floor_area() as f64,
        )?;
        obj.set_double(oa::OUTDOOR_AIR_FLOW_PER_ZONE, dsoa.outdoor_air_flow_rate() as f64)?;
        obj.set_double(
            oa::OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR,
            dsoa.outdoor_air_flow_air_changes_per_hour() as f64,
        )?;

        let schedule = dsoa.outdoor_air_flow_rate_fraction_schedule().ok();
        if let Some(s) = self.optional_schedule(model, schedule) {
            obj.set_string(oa::OUTDOOR_AIR_SCHEDULE_NAME, s)?;
        } else if let Some(s) = schedule {
            self.log.warn(format!(
                "DesignSpecificationOutdoorAir '{}' will be written without its schedule '{}'",
                dsoa.name, s
            ));
        }
        Ok(Some(obj))
    }
}
