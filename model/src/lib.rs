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

//! The object model of a building energy study: the HVAC systems
//! serving each thermal zone and the resources they use (i.e.,
//! schedules, materials, constructions and performance curves).
//!
//! Objects point to each other by name. The [`Model`] keeps track of
//! all of them, making sure that names are unique within each kind of
//! object, that references lead somewhere, and that the schedules
//! assigned to objects fit what they are used for (see
//! [`schedule_type_registry`]).
//!
//! Models can be read from JSON or from the text format read by the
//! [`scanner`] (`.sml` files), which looks like this:
//!
//! ```
//! use model::{Model, NightCycleControlType};
//!
//! let text = r#"
//!     ThermalZone { name: "Kitchen" }
//!     ThermalZone { name: "Bedroom" }
//!
//!     HVAC {
//!         type: "FanConstantVolume",
//!         name: "Supply Fan",
//!     }
//!
//!     AirLoopHVAC {
//!         name: "Main Loop",
//!         thermal_zones: ["Kitchen", "Bedroom"],
//!         supply_components: ["Supply Fan"],
//!     }
//! "#;
//!
//! let mut model = Model::from_bytes(text.as_bytes()).unwrap();
//!
//! // Put a night cycle manager in the loop
//! model
//!     .set_night_cycle_control_type("Main Loop", NightCycleControlType::CycleOnAny)
//!     .unwrap();
//! assert_eq!(model.availability_managers.len(), 1);
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The errors produced by this crate
mod error;
pub use error::ModelError;

/// Fields that can be autosized by the simulation engine
mod autosize;
pub use autosize::Autosize;

/// The limits and units of the values of a schedule
mod schedule_type_limits;
pub use schedule_type_limits::{physical_unit, NumericType, ScheduleTypeLimits};

/// Values that change over time
pub mod schedule;
pub use schedule::{Schedule, ScheduleCompact, ScheduleConstant};

/// Layers of constructions
pub mod material;
pub use material::{AirGap, Material, Roughness, StandardOpaqueMaterial};

/// A construction; i.e., a set of materials ordered from outside to inside
mod construction;
pub use construction::Construction;

/// Performance curves
pub mod curve;
pub use curve::{Curve, CurveBiquadratic, CurveCubic, CurveQuadratic};

mod thermal_zone;
pub use thermal_zone::ThermalZone;

/// The outdoor air requirements of zones
mod design_specification_outdoor_air;
pub use design_specification_outdoor_air::{DesignSpecificationOutdoorAir, OutdoorAirMethod};

/// The objects deciding when an `AirLoopHVAC` can run
pub mod availability_manager;
pub use availability_manager::{
    AvailabilityManager, AvailabilityManagerNightCycle, AvailabilityManagerScheduled,
    AvailabilityManagerScheduledOff, AvailabilityManagerScheduledOn, CyclingRunTimeControlType,
    NightCycleControlType, NightCycleZoneRole,
};

/// The components in the supply side of air loops
pub mod hvac;
pub use hvac::{CoilHeatingElectric, FanConstantVolume, HVAC};

mod air_loop_hvac;
pub use air_loop_hvac::AirLoopHVAC;

/// What all the objects in a model have in common
mod model_object;
pub use model_object::{ModelObject, ModelObjectKind};

/// What each schedule field of each class expects from its schedules
pub mod schedule_type_registry;
pub use schedule_type_registry::ScheduleType;

/// The model itself
mod model;
pub use crate::model::Model;

/// The module containing the functions that allow parsing a Model from text files
pub mod scanner;
