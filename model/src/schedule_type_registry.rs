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

use crate::schedule_type_limits::{physical_unit, NumericType};
use crate::{Float, Model, ModelError, Schedule, ScheduleTypeLimits};

/// What the schedule field of a class expects from the schedules
/// assigned to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleType {
    /// The class owning the field (e.g., `AirLoopHVAC`)
    pub class_name: &'static str,

    /// The display name of the field (e.g., `Availability`)
    pub schedule_display_name: &'static str,

    /// Whether the values are continuous or discrete
    pub is_continuous: bool,

    /// The unit type of the values. Empty means dimensionless.
    pub unit_type: &'static str,

    /// The lowest value the field accepts, if bounded
    pub lower_limit_value: Option<Float>,

    /// The highest value the field accepts, if bounded
    pub upper_limit_value: Option<Float>,
}

const fn availability(class_name: &'static str, schedule_display_name: &'static str) -> ScheduleType {
    ScheduleType {
        class_name,
        schedule_display_name,
        is_continuous: false,
        unit_type: "Availability",
        lower_limit_value: Some(0.0),
        upper_limit_value: Some(1.0),
    }
}

static REGISTRY: &[ScheduleType] = &[
    availability("AirLoopHVAC", "Availability"),
    availability("AvailabilityManagerNightCycle", "Applicability Schedule"),
    availability("AvailabilityManagerScheduled", "Availability Manager Scheduled"),
    availability("AvailabilityManagerScheduledOn", "Availability Manager Scheduled On"),
    availability("AvailabilityManagerScheduledOff", "Availability Manager Scheduled Off"),
    availability("CoilHeatingElectric", "Availability"),
    ScheduleType {
        class_name: "DesignSpecificationOutdoorAir",
        schedule_display_name: "Outdoor Air Flow Rate",
        is_continuous: true,
        unit_type: "",
        lower_limit_value: Some(0.0),
        upper_limit_value: Some(1.0),
    },
    availability("FanConstantVolume", "Availability"),
];

/// All the registered schedule fields of a class
pub fn schedule_types(class_name: &str) -> impl Iterator<Item = &'static ScheduleType> + '_ {
    REGISTRY.iter().filter(move |t| t.class_name == class_name)
}

/// The registered schedule field of a class with this display name
pub fn schedule_type(class_name: &str, display_name: &str) -> Option<&'static ScheduleType> {
    REGISTRY
        .iter()
        .find(|t| t.class_name == class_name && t.schedule_display_name == display_name)
}

/// Checks whether the schedules bounded by `candidate` can be used
/// for a field of type `schedule_type`.
///
/// Both must describe the same physical unit, and the candidate limits
/// must lie within the registered ones. The numeric type is not compared,
/// so discrete limits may feed a continuous field. When `stringent`, the
/// candidate can not bound a value that the registry leaves open.
pub fn is_compatible(
    schedule_type: &ScheduleType,
    candidate: &ScheduleTypeLimits,
    stringent: bool,
) -> bool {
    let candidate_unit = if candidate.is_unit_type_defaulted() {
        String::new()
    } else {
        candidate.unit_type()
    };
    let same_units = match (
        physical_unit(&candidate_unit),
        physical_unit(schedule_type.unit_type),
    ) {
        (Some(a), Some(b)) => a == b,
        _ => candidate_unit.eq_ignore_ascii_case(schedule_type.unit_type),
    };
    if !same_units {
        return false;
    }

    match (schedule_type.lower_limit_value, candidate.lower_limit_value()) {
        (Some(reg), Ok(v)) if v < reg => return false,
        (Some(_), Err(_)) => return false,
        (None, Ok(_)) if stringent => return false,
        _ => {}
    }
    match (schedule_type.upper_limit_value, candidate.upper_limit_value()) {
        (Some(reg), Ok(v)) if v > reg => return false,
        (Some(_), Err(_)) => return false,
        (None, Ok(_)) if stringent => return false,
        _ => {}
    }
    true
}

/// The name given to the `ScheduleTypeLimits` created for a field
pub fn default_name(schedule_type: &ScheduleType) -> String {
    if schedule_type.unit_type.eq_ignore_ascii_case("Availability") {
        return "OnOff".to_string();
    }
    if !schedule_type.unit_type.is_empty() {
        return schedule_type.unit_type.to_string();
    }
    let unit_interval =
        schedule_type.lower_limit_value == Some(0.0) && schedule_type.upper_limit_value == Some(1.0);
    match (schedule_type.is_continuous, unit_interval) {
        (true, true) => "Fractional",
        (true, false) => "Dimensionless",
        (false, true) => "Binary",
        (false, false) => "Integer",
    }
    .to_string()
}

/// Checks whether `name` is `base` or `base` followed by a space and a number,
/// as produced when making names unique
fn is_numbered_variant(name: &str, base: &str) -> bool {
    if name == base {
        return true;
    }
    name.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(|n| n.parse::<usize>().is_ok())
        .unwrap_or(false)
}

impl Model {
    /// Returns the name of a `ScheduleTypeLimits` suitable for a schedule field,
    /// reusing one with the default name if it is stringently compatible and
    /// creating it otherwise.
    pub fn get_or_create_schedule_type_limits(
        &mut self,
        schedule_type: &ScheduleType,
    ) -> Result<String, ModelError> {
        let name = default_name(schedule_type);
        if let Some(existing) = self
            .schedule_type_limits
            .iter()
            .find(|l| is_numbered_variant(&l.name, &name) && is_compatible(schedule_type, l, true))
        {
            return Ok(existing.name.clone());
        }

        let mut limits = ScheduleTypeLimits::new(name);
        if let Some(v) = schedule_type.lower_limit_value {
            limits.set_lower_limit_value(v);
        }
        if let Some(v) = schedule_type.upper_limit_value {
            limits.set_upper_limit_value(v);
        }
        limits.set_numeric_type(if schedule_type.is_continuous {
            NumericType::Continuous
        } else {
            NumericType::Discrete
        });
        if !schedule_type.unit_type.is_empty() {
            limits.set_unit_type(schedule_type.unit_type);
        }
        tracing::debug!(
            "creating ScheduleTypeLimits '{}' for the '{}' schedule of {}",
            limits.name,
            schedule_type.schedule_display_name,
            schedule_type.class_name
        );
        self.add_schedule_type_limits(limits)
    }

    /// Makes sure a schedule can be used in the field `display_name` of
    /// `class_name`. If the schedule has `ScheduleTypeLimits`, they must be
    /// compatible; otherwise, suitable limits are assigned to it.
    pub fn check_or_assign_schedule_type_limits(
        &mut self,
        class_name: &str,
        display_name: &str,
        schedule: &str,
    ) -> Result<(), ModelError> {
        let schedule_type = schedule_type(class_name, display_name).ok_or_else(|| {
            ModelError::UnknownScheduleField {
                object_type: class_name.to_string(),
                display_name: display_name.to_string(),
            }
        })?;

        let current = self
            .get_schedule(schedule)?
            .schedule_type_limits()
            .map(|s| s.to_string());
        match current {
            Some(limits) => {
                let limits = self.get_schedule_type_limits(&limits)?;
                if is_compatible(schedule_type, limits, false) {
                    Ok(())
                } else {
                    Err(ModelError::IncompatibleSchedule {
                        object_type: class_name.to_string(),
                        display_name: display_name.to_string(),
                        schedule: schedule.to_string(),
                    })
                }
            }
            None => {
                let limits = self.get_or_create_schedule_type_limits(schedule_type)?;
                self.get_schedule_mut(schedule)?
                    .set_schedule_type_limits(Some(limits));
                Ok(())
            }
        }
    }

    /// The `ScheduleTypeLimits` in the model that fit the field `display_name` of `class_name`
    pub fn compatible_schedule_type_limits(
        &self,
        class_name: &str,
        display_name: &str,
    ) -> Result<Vec<&ScheduleTypeLimits>, ModelError> {
        let schedule_type = schedule_type(class_name, display_name).ok_or_else(|| {
            ModelError::UnknownScheduleField {
                object_type: class_name.to_string(),
                display_name: display_name.to_string(),
            }
        })?;
        Ok(self
            .schedule_type_limits
            .iter()
            .filter(|l| is_compatible(schedule_type, l, false))
            .collect())
    }

    /// The schedules in the model that could be assigned to the field
    /// `display_name` of `class_name`: those with compatible limits and
    /// those with no limits at all.
    pub fn compatible_schedules(
        &self,
        class_name: &str,
        display_name: &str,
    ) -> Result<Vec<&Schedule>, ModelError> {
        let limits = self.compatible_schedule_type_limits(class_name, display_name)?;
        Ok(self
            .schedules
            .iter()
            .filter(|s| match s.schedule_type_limits() {
                None => true,
                Some(l) => limits.iter().any(|c| c.name == l),
            })
            .collect())
    }
}
