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

use derive::GroupAPI;
use serde::{Deserialize, Serialize};

mod night_cycle;
mod scheduled;
pub use night_cycle::{
    AvailabilityManagerNightCycle, CyclingRunTimeControlType, NightCycleControlType,
    NightCycleZoneRole,
};
pub use scheduled::{
    AvailabilityManagerScheduled, AvailabilityManagerScheduledOff, AvailabilityManagerScheduledOn,
};

/// Decides whether an `AirLoopHVAC` may run in a timestep
///
/// ## Example `.sml`
///
/// ```json
/// AvailabilityManager {
///     type: "Scheduled",
///     name: "Office Hours",
///     schedule: "Weekdays",
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, GroupAPI)]
#[serde(tag = "type")]
pub enum AvailabilityManager {
    /// Cycles the system on at night if zones need it
    NightCycle(AvailabilityManagerNightCycle),

    /// Available following a schedule
    Scheduled(AvailabilityManagerScheduled),

    /// Forced on following a schedule
    ScheduledOn(AvailabilityManagerScheduledOn),

    /// Forced off following a schedule
    ScheduledOff(AvailabilityManagerScheduledOff),
}

impl AvailabilityManager {
    /// Borrows the night cycle manager, if this is one
    pub fn as_night_cycle(&self) -> Option<&AvailabilityManagerNightCycle> {
        match self {
            Self::NightCycle(m) => Some(m),
            _ => None,
        }
    }

    /// Borrows the night cycle manager mutably, if this is one
    pub fn as_night_cycle_mut(&mut self) -> Option<&mut AvailabilityManagerNightCycle> {
        match self {
            Self::NightCycle(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let m: AvailabilityManager = json5::from_str(
            "{
            type: 'NightCycle',
            name: 'NC',
            control_type: 'CycleOnAny',
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(m.name(), "NC");
        assert_eq!(m.object_type(), "AvailabilityManagerNightCycle");
        let nc = m.as_night_cycle().ok_or("not a night cycle")?;
        assert_eq!(nc.control_type(), NightCycleControlType::CycleOnAny);

        let m: AvailabilityManager = json5::from_str(
            "{
            type: 'ScheduledOff',
            name: 'Off',
            schedule: 'Holidays',
        }",
        )
        .map_err(|e| e.to_string())?;
        assert!(m.as_night_cycle().is_none());
        assert_eq!(
            m.schedule_fields(),
            vec![("Availability Manager Scheduled Off", "Holidays")]
        );
        Ok(())
    }
}
