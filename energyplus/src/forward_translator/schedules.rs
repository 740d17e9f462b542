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

use idf::fields::{schedule_compact as sch, schedule_constant as sc, schedule_type_limits as stl};
use idf::{IddObjectType, IdfObject};
use model::{Model, ModelObjectKind, Schedule};

use super::{ForwardTranslator, Translated};

impl ForwardTranslator {
    pub(super) fn translate_schedule_type_limits(&mut self, model: &Model, name: &str) -> Translated {
        let limits = model.get_schedule_type_limits(name)?;

        let mut obj = IdfObject::new(IddObjectType::ScheduleTypeLimits);
        obj.set_name(&limits.name)?;
        if let Ok(v) = limits.lower_limit_value() {
            obj.set_double(stl::LOWER_LIMIT_VALUE, v as f64)?;
        }
        if let Ok(v) = limits.upper_limit_value() {
            obj.set_double(stl::UPPER_LIMIT_VALUE, v as f64)?;
        }
        obj.set_string(stl::NUMERIC_TYPE, limits.numeric_type().to_string())?;
        obj.set_string(stl::UNIT_TYPE, limits.unit_type())?;
        Ok(Some(obj))
    }

    /// Translates the limits of a schedule, returning their name
    fn schedule_limits(&mut self, model: &Model, schedule: &Schedule) -> Option<String> {
        let limits = schedule.schedule_type_limits()?;
        match self.translate_and_map_model_object(model, ModelObjectKind::ScheduleTypeLimits, limits) {
            Some(_) => Some(limits.to_string()),
            None => {
                self.log.warn(format!(
                    "Schedule '{}' will be written without its ScheduleTypeLimits",
                    schedule.name()
                ));
                None
            }
        }
    }

    pub(super) fn translate_schedule(&mut self, model: &Model, name: &str) -> Translated {
        let schedule = model.get_schedule(name)?;
        let limits = self.schedule_limits(model, schedule);

        let obj = match schedule {
            Schedule::Constant(s) => {
                let mut obj = IdfObject::new(IddObjectType::ScheduleConstant);
                obj.set_name(&s.name)?;
                if let Some(l) = limits {
                    obj.set_string(sc::SCHEDULE_TYPE_LIMITS_NAME, l)?;
                }
                obj.set_double(sc::HOURLY_VALUE, s.value as f64)?;
                obj
            }
            Schedule::Compact(s) => {
                let mut obj = IdfObject::new(IddObjectType::ScheduleCompact);
                obj.set_name(&s.name)?;
                if let Some(l) = limits {
                    obj.set_string(sch::SCHEDULE_TYPE_LIMITS_NAME, l)?;
                }
                if s.fields().is_empty() {
                    self.log.warn(format!("Schedule:Compact '{}' has no fields", s.name));
                }
                for f in s.fields() {
                    obj.push_extensible_group(&[f])?;
                }
                obj
            }
        };
        Ok(Some(obj))
    }
}

#[cfg(test)]
mod testing {
    use crate::ForwardTranslator;
    use idf::IddObjectType;
    use model::{Model, ModelError, ModelObjectKind, ScheduleCompact, ScheduleTypeLimits};
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_with_limits() -> Result<(), ModelError> {
        let mut model = Model::default();
        let mut limits = ScheduleTypeLimits::new("Temperature");
        limits.set_unit_type("Temperature");
        model.add_schedule_type_limits(limits)?;

        let mut s = ScheduleCompact::constant("Setpoint", 21.);
        s.set_schedule_type_limits("Temperature");
        model.add_schedule(s.into())?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::Schedule, "Setpoint");
        assert_eq!(ws.len(), 2);
        let limits = &ws.objects()[0];
        assert_eq!(limits.name(), Some("Temperature"));
        assert_eq!(limits.get_string(1), None);
        assert_eq!(limits.get_string(3), Some("Continuous"));
        assert_eq!(limits.get_string(4), Some("Temperature"));

        let schedule = &ws.objects()[1];
        assert_eq!(schedule.get_string(1), Some("Temperature"));
        let fields: Vec<&str> = schedule.extensible_groups().iter().map(|g| g[0].as_str()).collect();
        assert_eq!(fields, vec!["Through: 12/31", "For: AllDays", "Until: 24:00", "21"]);
        assert_eq!(ws.objects()[1].object_type(), IddObjectType::ScheduleCompact);
        Ok(())
    }
}
