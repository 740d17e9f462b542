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

use idf::fields::{availability_manager_night_cycle as nc, availability_manager_scheduled as sch};
use idf::{IddObjectType, IdfObject};
use model::{
    AirLoopHVAC, AvailabilityManager, AvailabilityManagerNightCycle, Model, ModelObjectKind,
    NightCycleControlType, NightCycleZoneRole,
};
use strum::IntoEnumIterator;

use super::{ForwardTranslator, Translated};
use crate::TranslatorError;

/// What happens to each of the zone lists of an `AvailabilityManager:NightCycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneListAction {
    /// The field is left blank
    Skip,

    /// The zones set by the user are written; if there are none, the zones
    /// served by the loop are used instead
    UseOrDefault,
}

/// Decides, based on the control type of a night-cycle manager, whether
/// the zone list for a certain role is written.
///
/// ```rust
/// use energyplus::forward_translator::{zone_list_action, ZoneListAction};
/// use model::{NightCycleControlType, NightCycleZoneRole};
///
/// assert_eq!(
///     zone_list_action(NightCycleControlType::CycleOnControlZone, NightCycleZoneRole::Control),
///     ZoneListAction::UseOrDefault
/// );
/// assert_eq!(
///     zone_list_action(NightCycleControlType::CycleOnAny, NightCycleZoneRole::Control),
///     ZoneListAction::Skip
/// );
/// ```
pub fn zone_list_action(
    control_type: NightCycleControlType,
    role: NightCycleZoneRole,
) -> ZoneListAction {
    use NightCycleControlType as CT;
    use NightCycleZoneRole as R;

    let used = matches!(
        (control_type, role),
        (CT::CycleOnControlZone, R::Control)
            | (CT::CycleOnAnyCoolingZone, R::CoolingControl)
            | (CT::CycleOnAnyHeatingZone, R::HeatingControl)
            | (
                CT::CycleOnAnyCoolingOrHeatingZone,
                R::CoolingControl | R::HeatingControl
            )
            | (CT::CycleOnAnyHeatingZoneFansOnly, R::HeatingZoneFansOnly)
    );
    if used {
        ZoneListAction::UseOrDefault
    } else {
        ZoneListAction::Skip
    }
}

/// The field of `AvailabilityManager:NightCycle` holding the zones of a role
fn zone_list_field(role: NightCycleZoneRole) -> usize {
    match role {
        NightCycleZoneRole::Control => nc::CONTROL_ZONE_OR_ZONE_LIST_NAME,
        NightCycleZoneRole::CoolingControl => nc::COOLING_CONTROL_ZONE_OR_ZONE_LIST_NAME,
        NightCycleZoneRole::HeatingControl => nc::HEATING_CONTROL_ZONE_OR_ZONE_LIST_NAME,
        NightCycleZoneRole::HeatingZoneFansOnly => {
            nc::HEATING_ZONE_FANS_ONLY_ZONE_OR_ZONE_LIST_NAME
        }
    }
}

impl ForwardTranslator {
    /// Managers are written as part of the `AvailabilityManagerAssignmentList`
    /// of their loop. Those without a loop are not translated.
    pub(super) fn translate_availability_manager(&mut self, model: &Model, name: &str) -> Translated {
        let manager = model.get_availability_manager(name)?;
        let Some(air_loop) = model.air_loop_hvac_for_availability_manager(name) else {
            self.log.warn(format!(
                "{} '{}' does not belong to any AirLoopHVAC; it will not be translated",
                manager.object_type(),
                name
            ));
            return Ok(None);
        };

        match manager {
            AvailabilityManager::NightCycle(m) => self.translate_night_cycle(model, m, air_loop),
            AvailabilityManager::Scheduled(m) => self.translate_scheduled_manager(
                model,
                IddObjectType::AvailabilityManagerScheduled,
                &m.name,
                m.schedule().ok(),
            ),
            AvailabilityManager::ScheduledOn(m) => self.translate_scheduled_manager(
                model,
                IddObjectType::AvailabilityManagerScheduledOn,
                &m.name,
                m.schedule().ok(),
            ),
            AvailabilityManager::ScheduledOff(m) => self.translate_scheduled_manager(
                model,
                IddObjectType::AvailabilityManagerScheduledOff,
                &m.name,
                m.schedule().ok(),
            ),
        }
    }

    /// `AvailabilityManager:Scheduled`, `:ScheduledOn` and `:ScheduledOff`
    /// share their layout
    fn translate_scheduled_manager(
        &mut self,
        model: &Model,
        object_type: IddObjectType,
        name: &str,
        schedule: Option<&str>,
    ) -> Translated {
        let schedule = self.schedule_or_always_on(model, schedule)?;
        let mut obj = IdfObject::new(object_type);
        obj.set_name(name)?;
        obj.set_string(sch::SCHEDULE_NAME, schedule)?;
        Ok(Some(obj))
    }

    fn translate_night_cycle(
        &mut self,
        model: &Model,
        m: &AvailabilityManagerNightCycle,
        air_loop: &AirLoopHVAC,
    ) -> Translated {
        let applicability = self.schedule_or_always_on(model, m.applicability_schedule().ok())?;
        let fan_schedule = self.schedule_or_always_on(model, air_loop.availability_schedule().ok())?;
        let control_type = m.control_type();

        let mut obj = IdfObject::new(IddObjectType::AvailabilityManagerNightCycle);
        obj.set_name(&m.name)?;
        obj.set_string(nc::APPLICABILITY_SCHEDULE_NAME, applicability)?;
        obj.set_string(nc::FAN_SCHEDULE_NAME, fan_schedule)?;
        obj.set_string(nc::CONTROL_TYPE, control_type.to_string())?;
        obj.set_double(nc::THERMOSTAT_TOLERANCE, m.thermostat_tolerance() as f64)?;
        obj.set_string(
            nc::CYCLING_RUN_TIME_CONTROL_TYPE,
            m.cycling_run_time_control_type().to_string(),
        )?;
        obj.set_double(nc::CYCLING_RUN_TIME, m.cycling_run_time() as f64)?;

        for role in NightCycleZoneRole::iter() {
            let user_zones = m.thermal_zones_for(role);
            match zone_list_action(control_type, role) {
                ZoneListAction::Skip => {
                    if !user_zones.is_empty() {
                        self.log.warn(format!(
                            "AvailabilityManager:NightCycle '{}' has {} zones, which are not used with control type {}; they will be ignored",
                            m.name,
                            role.label(),
                            control_type
                        ));
                    }
                }
                ZoneListAction::UseOrDefault => {
                    let zones = if !user_zones.is_empty() {
                        user_zones
                    } else if !air_loop.thermal_zones().is_empty() {
                        self.log.info(format!(
                            "AvailabilityManager:NightCycle '{}' has no {} zones; using every zone served by AirLoopHVAC '{}'",
                            m.name,
                            role.label(),
                            air_loop.name
                        ));
                        air_loop.thermal_zones()
                    } else {
                        self.log.error(format!(
                            "AvailabilityManager:NightCycle '{}' needs {} zones for control type {}, but AirLoopHVAC '{}' serves none",
                            m.name,
                            role.label(),
                            control_type,
                            air_loop.name
                        ));
                        continue;
                    };
                    let list_name = format!("{} {} Zones List", m.name, role.label());
                    if let Some(list) = self.zone_list(model, &list_name, zones)? {
                        obj.set_string(zone_list_field(role), list)?;
                    }
                }
            }
        }
        Ok(Some(obj))
    }

    /// Writes a `ZoneList` with the zones that could be translated,
    /// returning its name
    fn zone_list(
        &mut self,
        model: &Model,
        list_name: &str,
        zones: &[String],
    ) -> Result<Option<String>, TranslatorError> {
        let mut list = IdfObject::new(IddObjectType::ZoneList);
        list.set_name(list_name)?;
        for z in zones {
            if self
                .translate_and_map_model_object(model, ModelObjectKind::ThermalZone, z)
                .is_some()
            {
                list.push_extensible_group(&[z])?;
            }
        }
        if list.extensible_groups().is_empty() {
            self.log
                .error(format!("ZoneList '{}' would be empty; it is not written", list_name));
            return Ok(None);
        }
        self.add(list);
        Ok(Some(list_name.to_string()))
    }
}
