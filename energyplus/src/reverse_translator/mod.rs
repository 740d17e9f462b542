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

use std::collections::HashMap;

use idf::{fields, IddObjectType, IdfObject, Workspace, ENERGYPLUS_VERSION};
use model::{schedule_type_registry, Float, Model};

use crate::{LogLevel, LogMessage, LogSink, TranslatorError};

mod availability_managers;
mod curves;
mod hvac;
mod materials;
mod outdoor_air;
mod schedules;
mod zones;

const CHANNEL: &str = "energyplus.ReverseTranslator";

/// The classes a schedule reference can point to
const SCHEDULES: &[IddObjectType] = &[IddObjectType::ScheduleConstant, IddObjectType::ScheduleCompact];

/// What the translation of one `IdfObject` produces: the name of the
/// model object, if any
type Reversed = Result<Option<String>, TranslatorError>;

/// The name of an object. Blank names are errors.
fn required_name(obj: &IdfObject) -> Result<String, TranslatorError> {
    obj.name().map(|n| n.to_string()).ok_or_else(|| TranslatorError::MissingField {
        class_name: obj.class_name().to_string(),
        name: String::new(),
        field: obj.idd().field_name(0),
    })
}

/// A numeric field the model cannot do without
fn required_double(obj: &IdfObject, index: usize) -> Result<Float, TranslatorError> {
    obj.get_double(index)
        .map(|v| v as Float)
        .ok_or_else(|| TranslatorError::MissingField {
            class_name: obj.class_name().to_string(),
            name: obj.name().unwrap_or_default().to_string(),
            field: obj.idd().field_name(index),
        })
}

/// A numeric field that can be left blank
fn optional_double(obj: &IdfObject, index: usize) -> Option<Float> {
    obj.get_double(index).map(|v| v as Float)
}

/// Translates an EnergyPlus [`Workspace`] into a [`Model`].
///
/// Objects are translated on demand, so references can point to objects
/// further down in the file. Unsupported objects are skipped with a
/// warning.
///
/// ```rust
/// use energyplus::ReverseTranslator;
/// use idf::Workspace;
///
/// let workspace: Workspace = "Zone, Kitchen; Zone, Bedroom, , , , , , 2;".parse().unwrap();
///
/// let mut translator = ReverseTranslator::new();
/// let model = translator.translate_workspace(&workspace);
/// assert_eq!(model.thermal_zones.len(), 2);
/// assert_eq!(model.get_thermal_zone("Bedroom").unwrap().multiplier(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ReverseTranslator {
    log: LogSink,

    model: Model,

    /// The name of the model object produced by each `IdfObject`, by index;
    /// `None` if it was not translated
    map: HashMap<usize, Option<String>>,
}

impl Default for ReverseTranslator {
    fn default() -> Self {
        Self {
            log: LogSink::new(CHANNEL),
            model: Model::default(),
            map: HashMap::new(),
        }
    }
}

impl ReverseTranslator {
    /// Creates a new translator
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message logged in the last translation
    pub fn log_messages(&self) -> &[LogMessage] {
        self.log.messages()
    }

    /// The warnings of the last translation
    pub fn warnings(&self) -> Vec<&LogMessage> {
        self.log.messages_at(LogLevel::Warn)
    }

    /// The errors of the last translation
    pub fn errors(&self) -> Vec<&LogMessage> {
        self.log.messages_at(LogLevel::Error)
    }

    /// Translates every object in a [`Workspace`]
    pub fn translate_workspace(&mut self, workspace: &Workspace) -> Model {
        self.log.clear();
        self.model = Model::default();
        self.map.clear();

        for index in 0..workspace.len() {
            self.translate_and_map_workspace_object(workspace, index);
        }

        let translated = self.map.values().filter(|v| v.is_some()).count();
        self.log.debug(format!(
            "translated {} of {} IDF objects",
            translated,
            workspace.len()
        ));
        std::mem::take(&mut self.model)
    }

    /// Translates an object, unless it was translated already. Returns
    /// the name of the resulting model object.
    pub(crate) fn translate_and_map_workspace_object(
        &mut self,
        workspace: &Workspace,
        index: usize,
    ) -> Option<String> {
        if let Some(name) = self.map.get(&index) {
            return name.clone();
        }
        let obj = workspace.get(index)?;

        let result = match obj.object_type() {
            IddObjectType::Version => {
                self.check_version(obj);
                Ok(None)
            }
            IddObjectType::ZoneList
            | IddObjectType::Branch
            | IddObjectType::BranchList
            | IddObjectType::AvailabilityManagerAssignmentList
            | IddObjectType::OutputSQLite
            | IddObjectType::OutputVariableDictionary
            | IddObjectType::OutputControlTableStyle
            | IddObjectType::OutputTableSummaryReports => Ok(None),
            IddObjectType::ScheduleTypeLimits => self.translate_schedule_type_limits(obj),
            IddObjectType::ScheduleConstant => self.translate_schedule_constant(workspace, obj),
            IddObjectType::ScheduleCompact => self.translate_schedule_compact(workspace, obj),
            IddObjectType::Material => self.translate_material(obj),
            IddObjectType::MaterialAirGap => self.translate_material_air_gap(obj),
            IddObjectType::Construction => self.translate_construction(workspace, obj),
            IddObjectType::CurveQuadratic
            | IddObjectType::CurveCubic
            | IddObjectType::CurveBiquadratic => self.translate_curve(obj),
            IddObjectType::Zone => self.translate_zone(obj),
            IddObjectType::DesignSpecificationOutdoorAir => {
                self.translate_design_specification_outdoor_air(workspace, obj)
            }
            IddObjectType::AvailabilityManagerScheduled
            | IddObjectType::AvailabilityManagerScheduledOn
            | IddObjectType::AvailabilityManagerScheduledOff => {
                self.translate_scheduled_manager(workspace, obj)
            }
            IddObjectType::AvailabilityManagerNightCycle => {
                self.translate_night_cycle(workspace, obj)
            }
            IddObjectType::FanConstantVolume => self.translate_fan_constant_volume(workspace, obj),
            IddObjectType::CoilHeatingElectric => {
                self.translate_coil_heating_electric(workspace, obj)
            }
            IddObjectType::AirLoopHVAC | IddObjectType::Unknown => {
                self.log.warn(format!(
                    "{} '{}' is not supported; it will not be translated",
                    obj.class_name(),
                    obj.name().unwrap_or_default()
                ));
                Ok(None)
            }
        };

        let name = match result {
            Ok(name) => name,
            Err(e) => {
                self.log.error(format!(
                    "could not translate {} '{}': {}",
                    obj.class_name(),
                    obj.name().unwrap_or_default(),
                    e
                ));
                None
            }
        };
        self.map.insert(index, name.clone());
        name
    }

    /// Translates the object called `name` among the classes in `object_types`.
    /// Returns the name of the resulting model object.
    fn translate_reference(
        &mut self,
        workspace: &Workspace,
        object_types: &[IddObjectType],
        name: &str,
    ) -> Option<String> {
        let index = workspace.index_by_name_in(object_types, name)?;
        self.translate_and_map_workspace_object(workspace, index)
    }

    /// Translates the schedule referenced by a field, if any, for the
    /// schedule field `display_name` of the model class `class_name`.
    /// Dangling references, and schedules whose limits do not fit the
    /// field, are dropped with a warning.
    fn schedule_reference(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
        index: usize,
        class_name: &str,
        display_name: &str,
    ) -> Option<String> {
        let schedule = obj.get_string(index)?;
        let Some(translated) = self.translate_reference(workspace, SCHEDULES, schedule) else {
            self.log.warn(format!(
                "{} '{}' references schedule '{}', which could not be translated; the field is left blank",
                obj.class_name(),
                obj.name().unwrap_or_default(),
                schedule
            ));
            return None;
        };
        if !self.fits_schedule_field(&translated, class_name, display_name) {
            self.log.warn(format!(
                "{} '{}' references schedule '{}', whose schedule type limits do not fit the '{}' field; the field is left blank",
                obj.class_name(),
                obj.name().unwrap_or_default(),
                schedule,
                display_name
            ));
            return None;
        }
        Some(translated)
    }

    /// Checks the limits of a translated schedule against the registry.
    /// Schedules without limits always fit, as the model assigns them.
    fn fits_schedule_field(&self, schedule: &str, class_name: &str, display_name: &str) -> bool {
        let Some(schedule_type) = schedule_type_registry::schedule_type(class_name, display_name)
        else {
            return true;
        };
        let limits = self
            .model
            .get_schedule(schedule)
            .ok()
            .and_then(|s| s.schedule_type_limits())
            .and_then(|l| self.model.get_schedule_type_limits(l).ok());
        match limits {
            Some(limits) => schedule_type_registry::is_compatible(schedule_type, limits, false),
            None => true,
        }
    }

    fn check_version(&mut self, obj: &IdfObject) {
        let version = obj
            .get_string(fields::version::VERSION_IDENTIFIER)
            .unwrap_or_default();
        let same = version == ENERGYPLUS_VERSION
            || version.starts_with(&format!("{}.", ENERGYPLUS_VERSION));
        if !same {
            self.log.warn(format!(
                "the file is for EnergyPlus version '{}', but version '{}' is expected",
                version, ENERGYPLUS_VERSION
            ));
        }
    }
}
