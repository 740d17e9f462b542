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

use idf::fields::{schedule_compact as sc, schedule_constant as scst, schedule_type_limits as stl};
use idf::{IddObjectType, IdfObject, Workspace};
use model::{NumericType, ScheduleCompact, ScheduleConstant, ScheduleTypeLimits};

use super::{optional_double, required_name, ReverseTranslator, Reversed};

impl ReverseTranslator {
    pub(super) fn translate_schedule_type_limits(&mut self, obj: &IdfObject) -> Reversed {
        let mut limits = ScheduleTypeLimits::new(required_name(obj)?);
        if let Some(v) = optional_double(obj, stl::LOWER_LIMIT_VALUE) {
            limits.set_lower_limit_value(v);
        }
        if let Some(v) = optional_double(obj, stl::UPPER_LIMIT_VALUE) {
            limits.set_upper_limit_value(v);
        }
        if let Some(t) = obj.get_string(stl::NUMERIC_TYPE) {
            match t.parse::<NumericType>() {
                Ok(t) => {
                    limits.set_numeric_type(t);
                }
                Err(_) => self.log.warn(format!(
                    "ScheduleTypeLimits '{}' has an unknown numeric type '{}'; using the default",
                    limits.name, t
                )),
            }
        }
        if let Some(u) = obj.get_string(stl::UNIT_TYPE) {
            limits.set_unit_type(u);
        }
        Ok(Some(self.model.add_schedule_type_limits(limits)?))
    }

    /// The `ScheduleTypeLimits` referenced by a schedule
    fn schedule_limits_reference(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
        index: usize,
    ) -> Option<String> {
        let name = obj.get_string(index)?;
        let translated =
            self.translate_reference(workspace, &[IddObjectType::ScheduleTypeLimits], name);
        if translated.is_none() {
            self.log.warn(format!(
                "{} '{}' references ScheduleTypeLimits '{}', which could not be translated",
                obj.class_name(),
                obj.name().unwrap_or_default(),
                name
            ));
        }
        translated
    }

    pub(super) fn translate_schedule_constant(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let value = optional_double(obj, scst::HOURLY_VALUE).unwrap_or(0.0);
        let mut schedule = ScheduleConstant::new(required_name(obj)?, value);
        if let Some(l) = self.schedule_limits_reference(workspace, obj, scst::SCHEDULE_TYPE_LIMITS_NAME) {
            schedule.set_schedule_type_limits(l);
        }
        Ok(Some(self.model.add_schedule(schedule.into())?))
    }

    pub(super) fn translate_schedule_compact(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let mut schedule = ScheduleCompact::new(required_name(obj)?);
        if let Some(l) = self.schedule_limits_reference(workspace, obj, sc::SCHEDULE_TYPE_LIMITS_NAME) {
            schedule.set_schedule_type_limits(l);
        }
        for group in obj.extensible_groups() {
            // Trailing blanks are not data
            if let Some(field) = group.first().filter(|f| !f.trim().is_empty()) {
                schedule.push_field(field.trim());
            }
        }
        if schedule.fields().is_empty() {
            self.log.warn(format!("Schedule:Compact '{}' has no data", schedule.name));
        }
        Ok(Some(self.model.add_schedule(schedule.into())?))
    }
}
