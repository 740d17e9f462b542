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

use idf::{fields, IddObjectType, IdfError, IdfObject, Workspace, ENERGYPLUS_VERSION};
use model::{schedule_type_registry, Model, ModelObjectKind};

use crate::{ForwardTranslatorOptions, LogLevel, LogMessage, LogSink, TranslatorError};

mod air_loops;
mod availability_managers;
mod curves;
mod hvac;
mod materials;
mod outdoor_air;
mod schedules;
mod zones;

pub use air_loops::supply_component_nodes;
pub use availability_managers::{zone_list_action, ZoneListAction};

const CHANNEL: &str = "energyplus.ForwardTranslator";

/// The name of the schedule used when a schedule is required but none was set
pub const ALWAYS_ON_DISCRETE: &str = "Always On Discrete";

/// The `ScheduleTypeLimits` of [`ALWAYS_ON_DISCRETE`]
pub const ALWAYS_ON_DISCRETE_LIMITS: &str = "Always On Discrete Limits";

/// What the translation of one object produces: the main `IdfObject`, if any
type Translated = Result<Option<IdfObject>, TranslatorError>;

/// Translates a [`Model`] into an EnergyPlus [`Workspace`].
///
/// Objects that cannot be translated are skipped; the reasons are
/// kept in the log of the translator (see [`ForwardTranslator::warnings`]
/// and [`ForwardTranslator::errors`]).
///
/// ```rust
/// use energyplus::ForwardTranslator;
/// use idf::IddObjectType;
/// use model::{Model, ThermalZone};
///
/// let mut model = Model::default();
/// model.add_thermal_zone(ThermalZone::new("Kitchen")).unwrap();
///
/// let mut translator = ForwardTranslator::new();
/// let workspace = translator.translate_model(&model);
/// assert_eq!(workspace.objects_by_type(IddObjectType::Zone).len(), 1);
/// assert!(translator.errors().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ForwardTranslator {
    options: ForwardTranslatorOptions,

    log: LogSink,

    workspace: Workspace,

    /// The index in the workspace of the main object produced by each model
    /// object; `None` if it was not translated
    map: HashMap<(ModelObjectKind, String), Option<usize>>,

    /// The name of the always-on schedule, once it is created
    always_on: Option<String>,
}

impl Default for ForwardTranslator {
    fn default() -> Self {
        Self::with_options(ForwardTranslatorOptions::default())
    }
}

impl ForwardTranslator {
    /// Creates a translator with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a translator with some options
    pub fn with_options(options: ForwardTranslatorOptions) -> Self {
        Self {
            options,
            log: LogSink::new(CHANNEL),
            workspace: Workspace::new(),
            map: HashMap::new(),
            always_on: None,
        }
    }

    /// The options of the translator
    pub fn options(&self) -> ForwardTranslatorOptions {
        self.options
    }

    /// Changes the options used by the next translations
    pub fn set_options(&mut self, options: ForwardTranslatorOptions) {
        self.options = options;
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

    fn reset(&mut self) {
        self.log.clear();
        self.workspace = Workspace::new();
        self.map.clear();
        self.always_on = None;
    }

    /// Translates a whole [`Model`], with the `Version` object and the
    /// output requests set by the options.
    pub fn translate_model(&mut self, model: &Model) -> Workspace {
        self.reset();
        if let Err(e) = self.front_matter() {
            self.log.error(format!("could not write the front matter: {}", e));
        }

        for o in model.schedule_type_limits.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::ScheduleTypeLimits, &o.name);
        }
        for o in model.schedules.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::Schedule, o.name());
        }
        for o in model.materials.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::Material, o.name());
        }
        for o in model.constructions.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::Construction, &o.name);
        }
        for o in model.curves.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::Curve, o.name());
        }
        for o in model.thermal_zones.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::ThermalZone, &o.name);
        }
        for o in model.design_specifications_outdoor_air.iter() {
            self.translate_and_map_model_object(
                model,
                ModelObjectKind::DesignSpecificationOutdoorAir,
                &o.name,
            );
        }
        for o in model.air_loops.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::AirLoopHVAC, &o.name);
        }

        // Whatever is left did not belong to a loop
        for o in model.availability_managers.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::AvailabilityManager, o.name());
        }
        for o in model.hvacs.iter() {
            self.translate_and_map_model_object(model, ModelObjectKind::HVAC, o.name());
        }

        self.log.debug(format!(
            "translated {} model objects into {} IDF objects",
            self.map.len(),
            self.workspace.len()
        ));
        std::mem::take(&mut self.workspace)
    }

    /// Translates a single object, together with the objects it points to.
    /// No `Version` or output requests are written.
    pub fn translate_model_object(
        &mut self,
        model: &Model,
        kind: ModelObjectKind,
        name: &str,
    ) -> Workspace {
        self.reset();
        self.translate_and_map_model_object(model, kind, name);
        std::mem::take(&mut self.workspace)
    }

    fn front_matter(&mut self) -> Result<(), IdfError> {
        let mut version = IdfObject::new(IddObjectType::Version);
        version.set_string(fields::version::VERSION_IDENTIFIER, ENERGYPLUS_VERSION)?;
        self.add(version);

        if !self.options.exclude_sqlite_output_report {
            let mut sqlite = IdfObject::new(IddObjectType::OutputSQLite);
            sqlite.set_string(fields::output_sqlite::OPTION_TYPE, "SimpleAndTabular")?;
            self.add(sqlite);
        }

        if !self.options.exclude_variable_dictionary {
            let mut dictionary = IdfObject::new(IddObjectType::OutputVariableDictionary);
            dictionary.set_string(fields::output_variable_dictionary::KEY_FIELD, "IDF")?;
            dictionary.set_string(fields::output_variable_dictionary::SORT_OPTION, "Unsorted")?;
            self.add(dictionary);
        }

        if !self.options.exclude_html_output_report {
            let mut style = IdfObject::new(IddObjectType::OutputControlTableStyle);
            style.set_string(fields::output_control_table_style::COLUMN_SEPARATOR, "HTML")?;
            if self.options.ip_tabular_output {
                style.set_string(fields::output_control_table_style::UNIT_CONVERSION, "InchPound")?;
            }
            self.add(style);

            let mut reports = IdfObject::new(IddObjectType::OutputTableSummaryReports);
            reports.push_extensible_group(&["AllSummary"])?;
            self.add(reports);
        } else if self.options.ip_tabular_output {
            self.log
                .warn("IP tabular output was requested, but the HTML report is excluded");
        }
        Ok(())
    }

    /// Appends an object to the workspace being written
    fn add(&mut self, obj: IdfObject) -> usize {
        self.workspace.add_object(obj)
    }

    /// Translates an object, unless it was translated already. Returns the
    /// index of its main `IdfObject` in the workspace.
    pub(crate) fn translate_and_map_model_object(
        &mut self,
        model: &Model,
        kind: ModelObjectKind,
        name: &str,
    ) -> Option<usize> {
        let key = (kind, name.to_string());
        if let Some(index) = self.map.get(&key) {
            return *index;
        }

        let result = match kind {
            ModelObjectKind::ScheduleTypeLimits => self.translate_schedule_type_limits(model, name),
            ModelObjectKind::Schedule => self.translate_schedule(model, name),
            ModelObjectKind::Material => self.translate_material(model, name),
            ModelObjectKind::Construction => self.translate_construction(model, name),
            ModelObjectKind::Curve => self.translate_curve(model, name),
            ModelObjectKind::ThermalZone => self.translate_thermal_zone(model, name),
            ModelObjectKind::DesignSpecificationOutdoorAir => {
                self.translate_design_specification_outdoor_air(model, name)
            }
            ModelObjectKind::AvailabilityManager => self.translate_availability_manager(model, name),
            ModelObjectKind::HVAC => self.translate_hvac(model, name),
            ModelObjectKind::AirLoopHVAC => self.translate_air_loop_hvac(model, name),
        };

        let index = match result {
            Ok(Some(obj)) => Some(self.add(obj)),
            Ok(None) => None,
            Err(e) => {
                self.log
                    .error(format!("could not translate {} '{}': {}", kind, name, e));
                None
            }
        };
        self.map.insert(key, index);
        index
    }

    /// Translates the schedule `schedule` points to, returning its name. If
    /// there is no schedule (or it cannot be translated), the always-on
    /// schedule is used.
    fn schedule_or_always_on(
        &mut self,
        model: &Model,
        schedule: Option<&str>,
    ) -> Result<String, TranslatorError> {
        if let Some(s) = schedule {
            if self
                .translate_and_map_model_object(model, ModelObjectKind::Schedule, s)
                .is_some()
            {
                return Ok(s.to_string());
            }
        }
        self.always_on_discrete_schedule(model)
    }

    /// Translates the schedule `schedule` points to, returning its name;
    /// `None` if it is not set or cannot be translated.
    fn optional_schedule(&mut self, model: &Model, schedule: Option<&str>) -> Option<String> {
        let s = schedule?;
        self.translate_and_map_model_object(model, ModelObjectKind::Schedule, s)?;
        Some(s.to_string())
    }

    /// Gets the name of the always-on schedule, writing it (and its limits)
    /// the first time it is needed
    fn always_on_discrete_schedule(&mut self, model: &Model) -> Result<String, TranslatorError> {
        if let Some(name) = &self.always_on {
            return Ok(name.clone());
        }

        // A model schedule with that name takes its place
        if model.get_schedule(ALWAYS_ON_DISCRETE).is_ok()
            && self
                .translate_and_map_model_object(model, ModelObjectKind::Schedule, ALWAYS_ON_DISCRETE)
                .is_some()
        {
            self.always_on = Some(ALWAYS_ON_DISCRETE.to_string());
            return Ok(ALWAYS_ON_DISCRETE.to_string());
        }

        use fields::schedule_constant as sc;
        use fields::schedule_type_limits as stl;

        let limits_name = match self.always_on_discrete_limits(model) {
            Some(name) => name,
            None => {
                let name = unused_name(ALWAYS_ON_DISCRETE_LIMITS, |n| {
                    model.get_schedule_type_limits(n).is_ok()
                });
                let mut limits = IdfObject::new(IddObjectType::ScheduleTypeLimits);
                limits.set_name(&name)?;
                limits.set_double(stl::LOWER_LIMIT_VALUE, 0.0)?;
                limits.set_double(stl::UPPER_LIMIT_VALUE, 1.0)?;
                limits.set_string(stl::NUMERIC_TYPE, "Discrete")?;
                limits.set_string(stl::UNIT_TYPE, "Availability")?;
                self.add(limits);
                name
            }
        };

        let name = unused_name(ALWAYS_ON_DISCRETE, |n| model.get_schedule(n).is_ok());
        let mut schedule = IdfObject::new(IddObjectType::ScheduleConstant);
        schedule.set_name(&name)?;
        schedule.set_string(sc::SCHEDULE_TYPE_LIMITS_NAME, &limits_name)?;
        schedule.set_double(sc::HOURLY_VALUE, 1.0)?;
        self.add(schedule);

        self.always_on = Some(name.clone());
        Ok(name)
    }

    /// Writes the model's [`ALWAYS_ON_DISCRETE_LIMITS`], if it exists and fits
    /// an availability schedule
    fn always_on_discrete_limits(&mut self, model: &Model) -> Option<String> {
        let limits = model.get_schedule_type_limits(ALWAYS_ON_DISCRETE_LIMITS).ok()?;
        let availability = schedule_type_registry::schedule_type("AirLoopHVAC", "Availability")?;
        if !schedule_type_registry::is_compatible(availability, limits, false) {
            return None;
        }
        self.translate_and_map_model_object(
            model,
            ModelObjectKind::ScheduleTypeLimits,
            ALWAYS_ON_DISCRETE_LIMITS,
        )?;
        Some(ALWAYS_ON_DISCRETE_LIMITS.to_string())
    }
}

/// `base`, or `base` followed by the first number that makes it unused
fn unused_name<F: Fn(&str) -> bool>(base: &str, used: F) -> String {
    if !used(base) {
        return base.to_string();
    }
    (1..)
        .map(|i| format!("{} {}", base, i))
        .find(|n| !used(n))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod testing {
    use super::*;
    use model::{AirLoopHVAC, NumericType, ScheduleConstant, ScheduleTypeLimits, ThermalZone};

    #[test]
    fn front_matter() {
        let model = Model::default();
        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);
        let types: Vec<IddObjectType> = ws.objects().iter().map(|o| o.object_type()).collect();
        assert_eq!(
            types,
            vec![
                IddObjectType::Version,
                IddObjectType::OutputSQLite,
                IddObjectType::OutputVariableDictionary,
                IddObjectType::OutputControlTableStyle,
                IddObjectType::OutputTableSummaryReports,
            ]
        );
        assert_eq!(ws.objects()[0].get_string(0), Some(ENERGYPLUS_VERSION));
        assert_eq!(
            ws.objects()[2].get_string(fields::output_variable_dictionary::SORT_OPTION),
            Some("Unsorted")
        );
        assert_eq!(ws.objects()[3].get_string(1), None);
        assert_eq!(
            ws.objects()[4].get_string(fields::output_table_summary_reports::REPORT_NAME),
            Some("AllSummary")
        );
    }

    #[test]
    fn front_matter_options() {
        let model = Model::default();
        let mut translator = ForwardTranslator::with_options(ForwardTranslatorOptions {
            ip_tabular_output: true,
            exclude_sqlite_output_report: true,
            exclude_variable_dictionary: true,
            ..Default::default()
        });
        let ws = translator.translate_model(&model);
        assert_eq!(ws.len(), 3);
        let style = &ws.objects_by_type(IddObjectType::OutputControlTableStyle)[0];
        assert_eq!(style.get_string(1), Some("InchPound"));

        translator.set_options(ForwardTranslatorOptions {
            ip_tabular_output: true,
            exclude_html_output_report: true,
            ..Default::default()
        });
        let ws = translator.translate_model(&model);
        assert!(ws.objects_by_type(IddObjectType::OutputControlTableStyle).is_empty());
        assert!(ws.objects_by_type(IddObjectType::OutputTableSummaryReports).is_empty());
        assert_eq!(translator.warnings().len(), 1);
    }

    #[test]
    fn memoized() -> Result<(), model::ModelError> {
        let mut model = Model::default();
        let mut limits = ScheduleTypeLimits::new("Fraction");
        limits.set_lower_limit_value(0.).set_upper_limit_value(1.);
        model.add_schedule_type_limits(limits)?;
        for name in ["A", "B"] {
            let mut s = ScheduleConstant::new(name, 0.5);
            s.set_schedule_type_limits("Fraction");
            model.add_schedule(s.into())?;
        }

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);
        // Referenced twice, written once
        assert_eq!(ws.objects_by_type(IddObjectType::ScheduleTypeLimits).len(), 1);
        assert_eq!(ws.objects_by_type(IddObjectType::ScheduleConstant).len(), 2);
        Ok(())
    }

    #[test]
    fn single_object() -> Result<(), model::ModelError> {
        let mut model = Model::default();
        model.add_thermal_zone(ThermalZone::new("Kitchen"))?;
        model.add_thermal_zone(ThermalZone::new("Bedroom"))?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::ThermalZone, "Bedroom");
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.objects()[0].name(), Some("Bedroom"));

        let ws = translator.translate_model_object(&model, ModelObjectKind::ThermalZone, "Attic");
        assert!(ws.is_empty());
        assert_eq!(translator.errors().len(), 1);
        Ok(())
    }

    #[test]
    fn always_on_is_shared() -> Result<(), TranslatorError> {
        let model = Model::default();
        let mut translator = ForwardTranslator::new();
        let a = translator.always_on_discrete_schedule(&model)?;
        let b = translator.schedule_or_always_on(&model, None)?;
        assert_eq!(a, ALWAYS_ON_DISCRETE);
        assert_eq!(a, b);
        assert_eq!(translator.workspace.len(), 2);

        // A missing schedule falls back to it... with an error logged
        let c = translator.schedule_or_always_on(&model, Some("Nope"))?;
        assert_eq!(c, ALWAYS_ON_DISCRETE);
        assert_eq!(translator.errors().len(), 1);
        Ok(())
    }

    #[test]
    fn always_on_reuses_model_limits() -> Result<(), model::ModelError> {
        let mut model = Model::default();
        let mut limits = ScheduleTypeLimits::new(ALWAYS_ON_DISCRETE_LIMITS);
        limits
            .set_lower_limit_value(0.)
            .set_upper_limit_value(1.)
            .set_numeric_type(NumericType::Discrete);
        model.add_schedule_type_limits(limits)?;
        model.add_air_loop_hvac(AirLoopHVAC::new("Loop"))?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);
        let limits = ws.objects_by_type(IddObjectType::ScheduleTypeLimits);
        assert_eq!(limits.len(), 1);
        assert_eq!(limits[0].name(), Some(ALWAYS_ON_DISCRETE_LIMITS));
        let schedule = &ws.objects_by_type(IddObjectType::ScheduleConstant)[0];
        assert_eq!(schedule.get_string(1), Some(ALWAYS_ON_DISCRETE_LIMITS));
        Ok(())
    }

    #[test]
    fn always_on_avoids_model_names() -> Result<(), model::ModelError> {
        let mut model = Model::default();
        // Too wide for an availability schedule
        let mut limits = ScheduleTypeLimits::new(ALWAYS_ON_DISCRETE_LIMITS);
        limits.set_lower_limit_value(0.).set_upper_limit_value(5.);
        model.add_schedule_type_limits(limits)?;
        model.add_air_loop_hvac(AirLoopHVAC::new("Loop"))?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);
        let mut names: Vec<&str> = ws
            .objects_by_type(IddObjectType::ScheduleTypeLimits)
            .iter()
            .filter_map(|o| o.name())
            .collect();
        names.sort();
        assert_eq!(names, vec![ALWAYS_ON_DISCRETE_LIMITS, "Always On Discrete Limits 1"]);
        let schedule = &ws.objects_by_type(IddObjectType::ScheduleConstant)[0];
        assert_eq!(schedule.get_string(1), Some("Always On Discrete Limits 1"));
        Ok(())
    }
}
