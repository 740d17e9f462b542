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

use crate::{Autosize, Float};
use derive::ObjectIO;
use serde::{Deserialize, Serialize};

/// A central air system. It takes air through its supply components
/// (e.g., a fan and a coil) and delivers it to the thermal zones it serves.
///
/// An `AirLoopHVAC` owns its lists of zones, supply components and
/// availability managers. Each of the referenced objects can belong to
/// a single loop; use the `Model` to edit these lists.
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// AirLoopHVAC {
///     name: "Main Loop",
///     thermal_zones: ["Kitchen", "Bedroom"],
///     supply_components: ["Supply Fan", "Heating Coil"],
///     availability_managers: ["Night Cycle"],
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirLoopHVAC {
    /// The name of the loop
    pub name: String,

    /// When the loop can run. Always available if empty.
    #[schedule("Availability")]
    availability_schedule: Option<String>,

    /// The design flow of the supply side, in `m3/s`
    #[defaults_to(Autosize::Autosize)]
    design_supply_air_flow_rate: Option<Autosize>,

    /// The fraction of the supply air that returns
    #[defaults_to(1.0)]
    #[minimum(0.0)]
    #[maximum(1.0)]
    design_return_air_flow_fraction: Option<Float>,

    /// The zones served by the loop
    #[serde(default)]
    pub(crate) thermal_zones: Vec<String>,

    /// The `HVAC` components in the supply side, in flow order
    #[serde(default)]
    pub(crate) supply_components: Vec<String>,

    /// The `AvailabilityManager` objects of the loop, in priority order
    #[serde(default)]
    pub(crate) availability_managers: Vec<String>,
}

impl AirLoopHVAC {
    /// Appends a zone before adding the loop to a `Model`
    pub fn push_thermal_zone<S: Into<String>>(&mut self, zone: S) -> &mut Self {
        self.thermal_zones.push(zone.into());
        self
    }

    /// Appends a component at the end of the supply side, before adding
    /// the loop to a `Model`
    pub fn push_supply_component<S: Into<String>>(&mut self, component: S) -> &mut Self {
        self.supply_components.push(component.into());
        self
    }

    /// Appends an availability manager before adding the loop to a `Model`
    pub fn push_availability_manager<S: Into<String>>(&mut self, manager: S) -> &mut Self {
        self.availability_managers.push(manager.into());
        self
    }

    /// Checks whether the loop serves a zone
    pub fn serves_thermal_zone(&self, zone: &str) -> bool {
        self.thermal_zones.iter().any(|z| z == zone)
    }

    /// Checks whether an `HVAC` component is in the supply side
    pub fn has_supply_component(&self, component: &str) -> bool {
        self.supply_components.iter().any(|c| c == component)
    }

    /// Checks whether an `AvailabilityManager` is in the loop
    pub fn has_availability_manager(&self, manager: &str) -> bool {
        self.availability_managers.iter().any(|m| m == manager)
    }
}
