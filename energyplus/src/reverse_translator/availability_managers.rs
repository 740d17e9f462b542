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
use idf::{IddObjectType, IdfObject, Workspace};
use model::{
    AvailabilityManager, AvailabilityManagerNightCycle, AvailabilityManagerScheduled,
    AvailabilityManagerScheduledOff, AvailabilityManagerScheduledOn, CyclingRunTimeControlType,
    NightCycleControlType, NightCycleZoneRole,
};

use super::{optional_double, required_name, ReverseTranslator, Reversed};

impl ReverseTranslator {
    pub(super) fn translate_scheduled_manager(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let name = required_name(obj)?;
        let (class_name, display_name) = match obj.object_type() {
            IddObjectType::AvailabilityManagerScheduledOn => (
                AvailabilityManagerScheduledOn::OBJECT_TYPE,
                "Availability Manager Scheduled On",
            ),
            IddObjectType::AvailabilityManagerScheduledOff => (
                AvailabilityManagerScheduledOff::OBJECT_TYPE,
                "Availability Manager Scheduled Off",
            ),
            _ => (
                AvailabilityManagerScheduled::OBJECT_TYPE,
                "Availability Manager Scheduled",
            ),
        };
        let schedule =
            self.schedule_reference(workspace, obj, sch::SCHEDULE_NAME, class_name, display_name);

        let manager: AvailabilityManager = match obj.object_type() {
            IddObjectType::AvailabilityManagerScheduledOn => {
                let mut m = AvailabilityManagerScheduledOn::new(name);
                if let Some(s) = schedule {
                    m.set_schedule(s);
                }
                m.into()
            }
            IddObjectType::AvailabilityManagerScheduledOff => {
                let mut m = AvailabilityManagerScheduledOff::new(name);
                if let Some(s) = schedule {
                    m.set_schedule(s);
                }
                m.into()
            }
            _ => {
                let mut m = AvailabilityManagerScheduled::new(name);
                if let Some(s) = schedule {
                    m.set_schedule(s);
                }
                m.into()
            }
        };
        Ok(Some(self.model.add_availability_manager(manager)?))
    }

    /// The fan schedule is not read: it is the availability schedule of
    /// the loop the manager belongs to.
    pub(super) fn translate_night_cycle(&mut self, workspace: &Workspace, obj: &IdfObject) -> Reversed {
        let mut m = AvailabilityManagerNightCycle::new(required_name(obj)?);

        if let Some(s) = self.schedule_reference(
            workspace,
            obj,
            nc::APPLICABILITY_SCHEDULE_NAME,
            AvailabilityManagerNightCycle::OBJECT_TYPE,
            "Applicability Schedule",
        ) {
            m.set_applicability_schedule(s);
        }
        if let Some(t) = obj.get_string(nc::CONTROL_TYPE) {
            match t.parse::<NightCycleControlType>() {
                Ok(t) => {
                    m.set_control_type(t);
                }
                Err(_) => self.log.warn(format!(
                    "AvailabilityManager:NightCycle '{}' has an unknown control type '{}'; using {}",
                    m.name,
                    t,
                    m.control_type()
                )),
            }
        }
        if let Some(v) = optional_double(obj, nc::THERMOSTAT_TOLERANCE) {
            m.set_thermostat_tolerance(v)?;
        }
        if let Some(t) = obj.get_string(nc::CYCLING_RUN_TIME_CONTROL_TYPE) {
            match t.parse::<CyclingRunTimeControlType>() {
                Ok(t) => {
                    m.set_cycling_run_time_control_type(t);
                }
                Err(_) => self.log.warn(format!(
                    "AvailabilityManager:NightCycle '{}' has an unknown cycling run time control type '{}'",
                    m.name, t
                )),
            }
        }
        if let Some(v) = optional_double(obj, nc::CYCLING_RUN_TIME) {
            m.set_cycling_run_time(v)?;
        }

        for (role, index) in [
            (NightCycleZoneRole::Control, nc::CONTROL_ZONE_OR_ZONE_LIST_NAME),
            (
                NightCycleZoneRole::CoolingControl,
                nc::COOLING_CONTROL_ZONE_OR_ZONE_LIST_NAME,
            ),
            (
                NightCycleZoneRole::HeatingControl,
                nc::HEATING_CONTROL_ZONE_OR_ZONE_LIST_NAME,
            ),
            (
                NightCycleZoneRole::HeatingZoneFansOnly,
                nc::HEATING_ZONE_FANS_ONLY_ZONE_OR_ZONE_LIST_NAME,
            ),
        ] {
            let zones = self.zone_or_zone_list(workspace, obj, index);
            m.set_thermal_zones_for(role, zones);
        }
        Ok(Some(self.model.add_availability_manager(m.into())?))
    }

    /// The zones a `Zone or ZoneList Name` field points to, translated
    fn zone_or_zone_list(&mut self, workspace: &Workspace, obj: &IdfObject, index: usize) -> Vec<String> {
        let Some(name) = obj.get_string(index) else {
            return Vec::new();
        };

        if workspace
            .index_by_name_in(&[IddObjectType::Zone], name)
            .is_some()
        {
            return self
                .translate_reference(workspace, &[IddObjectType::Zone], name)
                .into_iter()
                .collect();
        }

        let Some(list) = workspace.object_by_name_in(&[IddObjectType::ZoneList], name) else {
            self.log.warn(format!(
                "{} '{}' references '{}', which is neither a Zone nor a ZoneList",
                obj.class_name(),
                obj.name().unwrap_or_default(),
                name
            ));
            return Vec::new();
        };
        let mut zones = Vec::new();
        for group in list.extensible_groups() {
            let Some(zone) = group.first().map(|z| z.trim()).filter(|z| !z.is_empty()) else {
                continue;
            };
            match self.translate_reference(workspace, &[IddObjectType::Zone], zone) {
                Some(z) => zones.push(z),
                None => self.log.warn(format!(
                    "ZoneList '{}' references Zone '{}', which could not be translated",
                    name, zone
                )),
            }
        }
        zones
    }
}

#[cfg(test)]
mod testing {
    use crate::ReverseTranslator;
    use idf::Workspace;
    use model::{
        AvailabilityManager, CyclingRunTimeControlType, NightCycleControlType, NightCycleZoneRole,
    };

    #[test]
    fn night_cycle() -> Result<(), String> {
        let ws: Workspace = "
            AvailabilityManager:NightCycle, NC, , Loop Schedule, CycleOnAnyCoolingOrHeatingZone,
                0.5, Thermostat, 1800, , Kitchen, Upstairs;
            Zone, Kitchen;
            ZoneList, Upstairs, Bedroom, Bathroom;
            Zone, Bedroom;
            Zone, Bathroom;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        let m = model
            .get_availability_manager("NC")
            .map_err(|e| e.to_string())?
            .as_night_cycle()
            .ok_or("not a night cycle")?;

        assert_eq!(m.control_type(), NightCycleControlType::CycleOnAnyCoolingOrHeatingZone);
        assert_eq!(m.thermostat_tolerance(), 0.5);
        assert_eq!(
            m.cycling_run_time_control_type(),
            CyclingRunTimeControlType::Thermostat
        );
        assert_eq!(m.cycling_run_time(), 1800.);
        assert!(m.applicability_schedule().is_err());
        assert!(m.thermal_zones_for(NightCycleZoneRole::Control).is_empty());
        assert_eq!(m.thermal_zones_for(NightCycleZoneRole::CoolingControl), &["Kitchen"]);
        assert_eq!(
            m.thermal_zones_for(NightCycleZoneRole::HeatingControl),
            &["Bedroom", "Bathroom"]
        );
        assert_eq!(model.thermal_zones.len(), 3);
        assert!(translator.warnings().is_empty());
        assert!(translator.errors().is_empty());
        Ok(())
    }

    #[test]
    fn scheduled() -> Result<(), String> {
        let ws: Workspace = "
            AvailabilityManager:ScheduledOff, Holidays Off, Holidays;
            AvailabilityManager:Scheduled, Always;
            Schedule:Constant, Holidays, , 0;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);

        match model.get_availability_manager("Holidays Off").map_err(|e| e.to_string())? {
            AvailabilityManager::ScheduledOff(m) => assert_eq!(m.schedule().ok(), Some("Holidays")),
            _ => return Err("expected a ScheduledOff manager".into()),
        }
        match model.get_availability_manager("Always").map_err(|e| e.to_string())? {
            AvailabilityManager::Scheduled(m) => assert!(m.schedule().is_err()),
            _ => return Err("expected a Scheduled manager".into()),
        }
        Ok(())
    }
}
