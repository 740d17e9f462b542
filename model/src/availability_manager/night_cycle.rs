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

use crate::Float;
use derive::ObjectIO;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What makes an [`AvailabilityManagerNightCycle`] turn the system on
/// while it is scheduled off
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum NightCycleControlType {
    /// The system stays off
    #[default]
    StayOff,

    /// Cycles on if any zone served by the system needs it
    CycleOnAny,

    /// Cycles on if the control zones need it
    CycleOnControlZone,

    /// Only the zone fans cycle on
    CycleOnAnyZoneFansOnly,

    /// Cycles on if any of the cooling or heating control zones need it
    CycleOnAnyCoolingOrHeatingZone,

    /// Cycles on if any of the cooling control zones need it
    CycleOnAnyCoolingZone,

    /// Cycles on if any of the heating control zones need it
    CycleOnAnyHeatingZone,

    /// Only the zone fans of the heating zones cycle on
    CycleOnAnyHeatingZoneFansOnly,
}

/// How long the system runs once it cycles on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CyclingRunTimeControlType {
    /// Runs for the cycling run time
    FixedRunTime,

    /// Runs until the thermostat is satisfied
    Thermostat,

    /// Runs until the thermostat is satisfied, but at least for the cycling run time
    ThermostatWithMinimumRunTime,
}

/// The four lists of zones a night cycle manager can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum NightCycleZoneRole {
    /// Used by `CycleOnControlZone`
    Control,

    /// Used by `CycleOnAnyCoolingZone` and `CycleOnAnyCoolingOrHeatingZone`
    CoolingControl,

    /// Used by `CycleOnAnyHeatingZone` and `CycleOnAnyCoolingOrHeatingZone`
    HeatingControl,

    /// Used by `CycleOnAnyHeatingZoneFansOnly`
    HeatingZoneFansOnly,
}

impl NightCycleZoneRole {
    /// A label for the role, as used when naming zone lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::Control => "Control",
            Self::CoolingControl => "Cooling Control",
            Self::HeatingControl => "Heating Control",
            Self::HeatingZoneFansOnly => "Heating Zone Fans Only",
        }
    }
}

/// Cycles an air loop on when it is scheduled off, if the zones it
/// looks at need heating or cooling.
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// AvailabilityManager {
///     type: "NightCycle",
///     name: "Night Cycle",
///     control_type: "CycleOnControlZone",
///     control_thermal_zones: ["Living Room"],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvailabilityManagerNightCycle {
    /// The name of the manager
    pub name: String,

    /// When the manager is active. Always active if empty.
    #[schedule("Applicability Schedule")]
    applicability_schedule: Option<String>,

    /// What makes the system cycle on
    #[defaults_to(NightCycleControlType::StayOff)]
    control_type: Option<NightCycleControlType>,

    /// Temperature difference, in `C`, between the zone and its setpoint
    /// that triggers cycling on
    #[defaults_to(1.0)]
    #[minimum(0.0)]
    thermostat_tolerance: Option<Float>,

    /// How long the system runs once cycled on
    #[defaults_to(CyclingRunTimeControlType::FixedRunTime)]
    cycling_run_time_control_type: Option<CyclingRunTimeControlType>,

    /// How long the system runs once cycled on, in `s`
    #[defaults_to(3600.0)]
    #[minimum(0.0)]
    cycling_run_time: Option<Float>,

    /// Zones looked at by `CycleOnControlZone`
    #[serde(default)]
    pub(crate) control_thermal_zones: Vec<String>,

    /// Zones looked at for cooling
    #[serde(default)]
    pub(crate) cooling_control_thermal_zones: Vec<String>,

    /// Zones looked at for heating
    #[serde(default)]
    pub(crate) heating_control_thermal_zones: Vec<String>,

    /// Zones whose fans cycle on for heating
    #[serde(default)]
    pub(crate) heating_zone_fans_only_thermal_zones: Vec<String>,
}

impl AvailabilityManagerNightCycle {
    /// The zones in one of the four lists
    pub fn thermal_zones_for(&self, role: NightCycleZoneRole) -> &[String] {
        match role {
            NightCycleZoneRole::Control => &self.control_thermal_zones,
            NightCycleZoneRole::CoolingControl => &self.cooling_control_thermal_zones,
            NightCycleZoneRole::HeatingControl => &self.heating_control_thermal_zones,
            NightCycleZoneRole::HeatingZoneFansOnly => &self.heating_zone_fans_only_thermal_zones,
        }
    }

    /// Replaces the zones in one of the four lists. Use `Model::set_night_cycle_thermal_zones`
    /// for checking that the zones exist.
    pub fn set_thermal_zones_for(&mut self, role: NightCycleZoneRole, zones: Vec<String>) -> &mut Self {
        match role {
            NightCycleZoneRole::Control => self.control_thermal_zones = zones,
            NightCycleZoneRole::CoolingControl => self.cooling_control_thermal_zones = zones,
            NightCycleZoneRole::HeatingControl => self.heating_control_thermal_zones = zones,
            NightCycleZoneRole::HeatingZoneFansOnly => {
                self.heating_zone_fans_only_thermal_zones = zones
            }
        }
        self
    }

    /// Removes a zone from the four lists, returning whether it was in any
    pub fn remove_thermal_zone(&mut self, zone: &str) -> bool {
        let mut found = false;
        for list in [
            &mut self.control_thermal_zones,
            &mut self.cooling_control_thermal_zones,
            &mut self.heating_control_thermal_zones,
            &mut self.heating_zone_fans_only_thermal_zones,
        ] {
            let n = list.len();
            list.retain(|z| z != zone);
            found = found || list.len() != n;
        }
        found
    }
}
