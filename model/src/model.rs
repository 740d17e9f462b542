use crate::availability_manager::{AvailabilityManagerNightCycle, NightCycleControlType, NightCycleZoneRole};
use crate::model_object::{ModelObject, ModelObjectKind};
use crate::scanner::SimpleScanner;
use crate::schedule_type_registry::schedule_type;
use crate::{
    AirLoopHVAC, AvailabilityManager, Construction, Curve, DesignSpecificationOutdoorAir, Float,
    Material, ModelError, Schedule, ScheduleTypeLimits, ThermalZone, HVAC,
};
use serde::{self, de::Visitor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

/// The objects describing the HVAC systems, zones and resources of a building
///
/// Objects point to each other by name. The [`Model`] makes sure that
/// names are unique within each kind of object and that references
/// point to objects that exist, as long as objects are added, edited and
/// removed through its methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    /// The name of the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The [`ScheduleTypeLimits`] in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule_type_limits: Vec<ScheduleTypeLimits>,

    /// The [`Schedule`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<Schedule>,

    /// The [`Material`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,

    /// The [`Construction`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constructions: Vec<Construction>,

    /// The performance [`Curve`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curves: Vec<Curve>,

    /// The [`ThermalZone`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub thermal_zones: Vec<ThermalZone>,

    /// The [`DesignSpecificationOutdoorAir`] objects in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub design_specifications_outdoor_air: Vec<DesignSpecificationOutdoorAir>,

    /// The [`AvailabilityManager`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub availability_managers: Vec<AvailabilityManager>,

    /// The air-loop components ([`HVAC`]) in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hvacs: Vec<HVAC>,

    /// The [`AirLoopHVAC`]s in the model
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub air_loops: Vec<AirLoopHVAC>,
}

struct ModelVisitor {}

impl<'de> Visitor<'de> for ModelVisitor {
    type Value = Model;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("Could not parse Model from JSON")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut model = Model::default();

        let mut schedule_type_limits: Vec<ScheduleTypeLimits> = Vec::new();
        let mut schedules: Vec<Schedule> = Vec::new();
        let mut materials: Vec<Material> = Vec::new();
        let mut constructions: Vec<Construction> = Vec::new();
        let mut curves: Vec<Curve> = Vec::new();
        let mut thermal_zones: Vec<ThermalZone> = Vec::new();
        let mut outdoor_air: Vec<DesignSpecificationOutdoorAir> = Vec::new();
        let mut managers: Vec<AvailabilityManager> = Vec::new();
        let mut hvacs: Vec<HVAC> = Vec::new();
        let mut air_loops: Vec<AirLoopHVAC> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => model.name = map.next_value()?,
                "schedule_type_limits" => schedule_type_limits = map.next_value()?,
                "schedules" => schedules = map.next_value()?,
                "materials" => materials = map.next_value()?,
                "constructions" => constructions = map.next_value()?,
                "curves" => curves = map.next_value()?,
                "thermal_zones" => thermal_zones = map.next_value()?,
                "design_specifications_outdoor_air" => outdoor_air = map.next_value()?,
                "availability_managers" => managers = map.next_value()?,
                "hvacs" => hvacs = map.next_value()?,
                "air_loops" => air_loops = map.next_value()?,
                _ => {
                    return Err(serde::de::Error::custom(format!(
                        "Field '{}' in model is not serialized",
                        key
                    )))
                }
            }
        }

        // References are checked when adding, so the order matters
        for o in schedule_type_limits {
            model.add_schedule_type_limits(o).map_err(serde::de::Error::custom)?;
        }
        for o in schedules {
            model.add_schedule(o).map_err(serde::de::Error::custom)?;
        }
        for o in materials {
            model.add_material(o).map_err(serde::de::Error::custom)?;
        }
        for o in constructions {
            model.add_construction(o).map_err(serde::de::Error::custom)?;
        }
        for o in curves {
            model.add_curve(o).map_err(serde::de::Error::custom)?;
        }
        for o in thermal_zones {
            model.add_thermal_zone(o).map_err(serde::de::Error::custom)?;
        }
        for o in outdoor_air {
            model
                .add_design_specification_outdoor_air(o)
                .map_err(serde::de::Error::custom)?;
        }
        for o in managers {
            model.add_availability_manager(o).map_err(serde::de::Error::custom)?;
        }
        for o in hvacs {
            model.add_hvac(o).map_err(serde::de::Error::custom)?;
        }
        for o in air_loops {
            model.add_air_loop_hvac(o).map_err(serde::de::Error::custom)?;
        }

        Ok(model)
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ModelVisitor {})
    }
}

/* NAME BOOKKEEPING */

fn not_found(kind: ModelObjectKind, name: &str) -> ModelError {
    ModelError::ObjectNotFound {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

fn missing_reference<T: ModelObject>(obj: &T, kind: ModelObjectKind, reference: &str) -> ModelError {
    ModelError::MissingReference {
        object_type: obj.object_type().to_string(),
        name: obj.name().to_string(),
        kind: kind.to_string(),
        reference: reference.to_string(),
    }
}

/// Fails on the first name of `members` that appears twice
fn check_no_duplicates(
    object_type: &str,
    name: &str,
    kind: ModelObjectKind,
    members: &[String],
) -> Result<(), ModelError> {
    for (i, m) in members.iter().enumerate() {
        if members[..i].contains(m) {
            return Err(ModelError::DuplicateMember {
                object_type: object_type.to_string(),
                name: name.to_string(),
                kind: kind.to_string(),
                member: m.clone(),
            });
        }
    }
    Ok(())
}

fn index_of<T: ModelObject>(v: &[T], kind: ModelObjectKind, name: &str) -> Result<usize, ModelError> {
    v.iter()
        .position(|o| o.name() == name)
        .ok_or_else(|| not_found(kind, name))
}

fn find<'a, T: ModelObject>(v: &'a [T], kind: ModelObjectKind, name: &str) -> Result<&'a T, ModelError> {
    let i = index_of(v, kind, name)?;
    Ok(&v[i])
}

fn find_mut<'a, T: ModelObject>(
    v: &'a mut [T],
    kind: ModelObjectKind,
    name: &str,
) -> Result<&'a mut T, ModelError> {
    let i = index_of(v, kind, name)?;
    Ok(&mut v[i])
}

/// Renames `add` if its name is taken, pushes it and returns its final name
fn push_unique<T: ModelObject>(v: &mut Vec<T>, kind: ModelObjectKind, mut add: T) -> String {
    let taken = |n: &str| v.iter().any(|o| o.name() == n);
    if taken(add.name()) {
        let mut i = 1;
        let mut candidate = format!("{} {}", add.name(), i);
        while taken(&candidate) {
            i += 1;
            candidate = format!("{} {}", add.name(), i);
        }
        tracing::warn!(
            "There is already a {} called '{}'... renaming it to '{}'",
            kind,
            add.name(),
            candidate
        );
        *add.name_mut() = candidate;
    }
    let name = add.name().to_string();
    v.push(add);
    name
}

/// Owned copies of the schedule fields, so they outlive a borrow of the object
fn owned_schedule_fields<T: ModelObject>(obj: &T) -> Vec<(&'static str, String)> {
    obj.schedule_fields()
        .into_iter()
        .map(|(display, schedule)| (display, schedule.to_string()))
        .collect()
}

/// Empties every schedule field of `objs` pointing to `schedule`
fn clear_schedule<T: ModelObject>(objs: &mut [T], schedule: &str) {
    for o in objs.iter_mut() {
        let displays: Vec<&'static str> = o
            .schedule_fields()
            .into_iter()
            .filter(|(_, s)| *s == schedule)
            .map(|(d, _)| d)
            .collect();
        for d in displays {
            o.set_schedule_field(d, None);
        }
    }
}

impl Model {
    /// Parses a model from JSON
    ///
    /// ```rust
    /// use model::Model;
    ///
    /// let json_str = r#"{
    ///     "thermal_zones": [{
    ///         "name": "Kitchen"
    ///     }]
    /// }"#;
    ///
    /// let model = Model::from_json(&json_str).unwrap();
    /// assert_eq!(model.thermal_zones.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a `Model` from a text file containing a JSON
    pub fn from_json_file<P: AsRef<Path>>(filename: P) -> Result<Self, ModelError> {
        let json = fs::read_to_string(&filename).map_err(|source| ModelError::Io {
            path: filename.as_ref().display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Writes the `Model` as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the `Model` into a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), ModelError> {
        let json = self.to_json()?;
        fs::write(&filename, json).map_err(|source| ModelError::Io {
            path: filename.as_ref().display().to_string(),
            source,
        })
    }

    /// Parses a `Model` from an array of bytes written in the model
    /// text format (i.e., `Kind { ... }` blocks)
    ///
    /// ```rust
    /// use model::Model;
    ///
    /// let s = r#"
    ///     // Zones go first... but any order works
    ///     AirLoopHVAC {
    ///         name: "Main Loop",
    ///         thermal_zones: ["Kitchen"],
    ///     }
    ///     ThermalZone {
    ///         name: "Kitchen",
    ///     }
    /// "#;
    ///
    /// let model = Model::from_bytes(s.as_bytes()).unwrap();
    /// assert_eq!(model.air_loops.len(), 1);
    /// assert_eq!(model.thermal_zones.len(), 1);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let mut scanner = SimpleScanner::new(bytes, 1);
        scanner.parse_model()
    }

    /// Parses a `Model` from a text file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, ModelError> {
        let bytes = fs::read(&filename).map_err(|source| ModelError::Io {
            path: filename.as_ref().display().to_string(),
            source,
        })?;
        tracing::debug!("read {} bytes from '{}'", bytes.len(), filename.as_ref().display());
        Self::from_bytes(&bytes)
    }

    /// Checks that the schedules pointed to by an object exist and fit
    /// their fields, assigning `ScheduleTypeLimits` to those that have none
    fn attach_schedules<T: ModelObject>(&mut self, obj: &T) -> Result<(), ModelError> {
        for (display, schedule) in owned_schedule_fields(obj) {
            if self.get_schedule(&schedule).is_err() {
                return Err(missing_reference(obj, ModelObjectKind::Schedule, &schedule));
            }
            self.check_or_assign_schedule_type_limits(obj.object_type(), display, &schedule)?;
        }
        Ok(())
    }

    fn check_thermal_zones<T: ModelObject>(&self, obj: &T, zones: &[String]) -> Result<(), ModelError> {
        for z in zones {
            if self.get_thermal_zone(z).is_err() {
                return Err(missing_reference(obj, ModelObjectKind::ThermalZone, z));
            }
        }
        Ok(())
    }

    /* SCHEDULE TYPE LIMITS */

    /// Adds a [`ScheduleTypeLimits`] to the [`Model`], returning its
    /// name (which changes if it was already taken)
    ///
    /// ```rust
    /// use model::{Model, ScheduleTypeLimits};
    ///
    /// let mut model = Model::default();
    /// let name = model.add_schedule_type_limits(ScheduleTypeLimits::new("OnOff")).unwrap();
    /// assert_eq!(name, "OnOff");
    ///
    /// // Adding something with the same name will warn the user... and rename it
    /// let name = model.add_schedule_type_limits(ScheduleTypeLimits::new("OnOff")).unwrap();
    /// assert_eq!(name, "OnOff 1");
    /// assert_eq!(model.schedule_type_limits.len(), 2);
    /// ```
    pub fn add_schedule_type_limits(&mut self, add: ScheduleTypeLimits) -> Result<String, ModelError> {
        add.validate()?;
        Ok(push_unique(
            &mut self.schedule_type_limits,
            ModelObjectKind::ScheduleTypeLimits,
            add,
        ))
    }

    /// Retrieves a [`ScheduleTypeLimits`] by name
    pub fn get_schedule_type_limits(&self, name: &str) -> Result<&ScheduleTypeLimits, ModelError> {
        find(&self.schedule_type_limits, ModelObjectKind::ScheduleTypeLimits, name)
    }

    /// Retrieves a mutable [`ScheduleTypeLimits`] by name. Schedules that
    /// already point to it are not checked again.
    pub fn get_schedule_type_limits_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut ScheduleTypeLimits, ModelError> {
        find_mut(&mut self.schedule_type_limits, ModelObjectKind::ScheduleTypeLimits, name)
    }

    /// Removes a [`ScheduleTypeLimits`]; the schedules pointing to it are left without limits
    pub fn remove_schedule_type_limits(&mut self, name: &str) -> Result<ScheduleTypeLimits, ModelError> {
        let i = index_of(&self.schedule_type_limits, ModelObjectKind::ScheduleTypeLimits, name)?;
        for s in self.schedules.iter_mut() {
            if s.schedule_type_limits() == Some(name) {
                s.set_schedule_type_limits(None);
            }
        }
        Ok(self.schedule_type_limits.remove(i))
    }

    /* SCHEDULES */

    /// Adds a [`Schedule`] to the [`Model`]. Its `ScheduleTypeLimits`, if any, must exist.
    ///
    /// ```rust
    /// use model::{Model, Schedule, ScheduleConstant};
    ///
    /// let mut model = Model::default();
    /// let mut s = ScheduleConstant::new("Always On", 1.);
    /// s.set_schedule_type_limits("OnOff");
    ///
    /// // 'OnOff' is not there
    /// assert!(model.add_schedule(s.into()).is_err());
    /// ```
    pub fn add_schedule(&mut self, add: Schedule) -> Result<String, ModelError> {
        if let Some(l) = add.schedule_type_limits() {
            if self.get_schedule_type_limits(l).is_err() {
                return Err(missing_reference(&add, ModelObjectKind::ScheduleTypeLimits, l));
            }
        }
        Ok(push_unique(&mut self.schedules, ModelObjectKind::Schedule, add))
    }

    /// Retrieves a [`Schedule`] by name
    pub fn get_schedule(&self, name: &str) -> Result<&Schedule, ModelError> {
        find(&self.schedules, ModelObjectKind::Schedule, name)
    }

    /// Retrieves a mutable [`Schedule`] by name
    pub fn get_schedule_mut(&mut self, name: &str) -> Result<&mut Schedule, ModelError> {
        find_mut(&mut self.schedules, ModelObjectKind::Schedule, name)
    }

    /// Removes a [`Schedule`], emptying every field that points to it
    pub fn remove_schedule(&mut self, name: &str) -> Result<Schedule, ModelError> {
        let i = index_of(&self.schedules, ModelObjectKind::Schedule, name)?;
        clear_schedule(&mut self.design_specifications_outdoor_air, name);
        clear_schedule(&mut self.availability_managers, name);
        clear_schedule(&mut self.hvacs, name);
        clear_schedule(&mut self.air_loops, name);
        Ok(self.schedules.remove(i))
    }

    /* MATERIALS */

    /// Adds a [`Material`] to the [`Model`], after validating it
    pub fn add_material(&mut self, add: Material) -> Result<String, ModelError> {
        add.validate()?;
        Ok(push_unique(&mut self.materials, ModelObjectKind::Material, add))
    }

    /// Retrieves a [`Material`] by name
    ///
    /// ```rust
    /// use model::{Model, AirGap};
    ///
    /// let mut model = Model::default();
    /// model.add_material(AirGap::new("Gap", 0.18).into()).unwrap();
    ///
    /// assert!(model.get_material("Gap").is_ok());
    /// assert!(model.get_material("This inexistent Material").is_err());
    /// ```
    pub fn get_material(&self, name: &str) -> Result<&Material, ModelError> {
        find(&self.materials, ModelObjectKind::Material, name)
    }

    /// Retrieves a mutable [`Material`] by name
    pub fn get_material_mut(&mut self, name: &str) -> Result<&mut Material, ModelError> {
        find_mut(&mut self.materials, ModelObjectKind::Material, name)
    }

    /// Removes a [`Material`], taking it out of the constructions that use it
    pub fn remove_material(&mut self, name: &str) -> Result<Material, ModelError> {
        let i = index_of(&self.materials, ModelObjectKind::Material, name)?;
        for c in self.constructions.iter_mut() {
            let n = c.layers.len();
            c.layers.retain(|l| l != name);
            if c.layers.len() != n {
                tracing::warn!("Material '{}' removed from Construction '{}'", name, c.name);
            }
        }
        Ok(self.materials.remove(i))
    }

    /* CONSTRUCTIONS */

    /// Adds a [`Construction`] to the [`Model`]. All its layers must exist.
    ///
    /// ```rust
    /// use model::{Model, Construction, AirGap};
    ///
    /// let mut model = Model::default();
    /// model.add_material(AirGap::new("Gap", 0.18).into()).unwrap();
    ///
    /// let mut c = Construction::new("Cool Construction");
    /// c.push_layer("Gap");
    /// model.add_construction(c).unwrap();
    ///
    /// let mut c = Construction::new("Leaky Construction");
    /// c.push_layer("Nothing");
    /// assert!(model.add_construction(c).is_err());
    /// ```
    pub fn add_construction(&mut self, add: Construction) -> Result<String, ModelError> {
        for l in add.layers() {
            if self.get_material(l).is_err() {
                return Err(missing_reference(&add, ModelObjectKind::Material, l));
            }
        }
        Ok(push_unique(&mut self.constructions, ModelObjectKind::Construction, add))
    }

    /// Retrieves a [`Construction`] by name
    pub fn get_construction(&self, name: &str) -> Result<&Construction, ModelError> {
        find(&self.constructions, ModelObjectKind::Construction, name)
    }

    /// Removes a [`Construction`]
    pub fn remove_construction(&mut self, name: &str) -> Result<Construction, ModelError> {
        let i = index_of(&self.constructions, ModelObjectKind::Construction, name)?;
        Ok(self.constructions.remove(i))
    }

    /// The thermal resistance of a [`Construction`], in `m2.K/W`,
    /// adding up its layers (surface films not included)
    pub fn construction_thermal_resistance(&self, name: &str) -> Result<Float, ModelError> {
        let c = self.get_construction(name)?;
        let mut r = 0.0;
        for layer in c.layers() {
            r += self.get_material(layer)?.thermal_resistance();
        }
        Ok(r)
    }

    /// The U-factor of a [`Construction`], in `W/m2.K` (surface films not included)
    ///
    /// ```rust
    /// use model::{Model, Construction, AirGap};
    ///
    /// let mut model = Model::default();
    /// model.add_material(AirGap::new("Gap", 0.25).into()).unwrap();
    /// let mut c = Construction::new("Double Gap");
    /// c.push_layer("Gap").push_layer("Gap");
    /// model.add_construction(c).unwrap();
    ///
    /// assert!((model.construction_u_factor("Double Gap").unwrap() - 2.0).abs() < 1e-9);
    /// ```
    pub fn construction_u_factor(&self, name: &str) -> Result<Float, ModelError> {
        let r = self.construction_thermal_resistance(name)?;
        if r <= 0.0 {
            return Err(ModelError::Invalid {
                object_type: Construction::OBJECT_TYPE.to_string(),
                name: name.to_string(),
                msg: "it has no thermal resistance, so its U-factor is undefined".to_string(),
            });
        }
        Ok(1.0 / r)
    }

    /* CURVES */

    /// Adds a [`Curve`] to the [`Model`], after validating it
    pub fn add_curve(&mut self, add: Curve) -> Result<String, ModelError> {
        add.validate()?;
        Ok(push_unique(&mut self.curves, ModelObjectKind::Curve, add))
    }

    /// Retrieves a [`Curve`] by name
    pub fn get_curve(&self, name: &str) -> Result<&Curve, ModelError> {
        find(&self.curves, ModelObjectKind::Curve, name)
    }

    /// Retrieves a mutable [`Curve`] by name
    pub fn get_curve_mut(&mut self, name: &str) -> Result<&mut Curve, ModelError> {
        find_mut(&mut self.curves, ModelObjectKind::Curve, name)
    }

    /// Removes a [`Curve`]
    pub fn remove_curve(&mut self, name: &str) -> Result<Curve, ModelError> {
        let i = index_of(&self.curves, ModelObjectKind::Curve, name)?;
        Ok(self.curves.remove(i))
    }

    /* THERMAL ZONES */

    /// Adds a [`ThermalZone`] to the [`Model`]
    ///
    /// ```rust
    /// use model::{Model, ThermalZone};
    ///
    /// let mut model = Model::default();
    /// model.add_thermal_zone(ThermalZone::new("Bedroom")).unwrap();
    /// assert!(model.get_thermal_zone("Bedroom").is_ok());
    /// assert!(model.get_thermal_zone("Walrus Enclosure").is_err());
    /// ```
    pub fn add_thermal_zone(&mut self, add: ThermalZone) -> Result<String, ModelError> {
        Ok(push_unique(&mut self.thermal_zones, ModelObjectKind::ThermalZone, add))
    }

    /// Retrieves a [`ThermalZone`] by name
    pub fn get_thermal_zone(&self, name: &str) -> Result<&ThermalZone, ModelError> {
        find(&self.thermal_zones, ModelObjectKind::ThermalZone, name)
    }

    /// Retrieves a mutable [`ThermalZone`] by name
    pub fn get_thermal_zone_mut(&mut self, name: &str) -> Result<&mut ThermalZone, ModelError> {
        find_mut(&mut self.thermal_zones, ModelObjectKind::ThermalZone, name)
    }

    /// Removes a [`ThermalZone`], taking it out of the air loops serving
    /// it and of the zone lists of the night cycle managers
    pub fn remove_thermal_zone(&mut self, name: &str) -> Result<ThermalZone, ModelError> {
        let i = index_of(&self.thermal_zones, ModelObjectKind::ThermalZone, name)?;
        for l in self.air_loops.iter_mut() {
            l.thermal_zones.retain(|z| z != name);
        }
        for m in self.availability_managers.iter_mut() {
            if let Some(nc) = m.as_night_cycle_mut() {
                nc.remove_thermal_zone(name);
            }
        }
        Ok(self.thermal_zones.remove(i))
    }

    /* DESIGN SPECIFICATION OUTDOOR AIR */

    /// Adds a [`DesignSpecificationOutdoorAir`] to the [`Model`]
    pub fn add_design_specification_outdoor_air(
        &mut self,
        add: DesignSpecificationOutdoorAir,
    ) -> Result<String, ModelError> {
        self.attach_schedules(&add)?;
        Ok(push_unique(
            &mut self.design_specifications_outdoor_air,
            ModelObjectKind::DesignSpecificationOutdoorAir,
            add,
        ))
    }

    /// Retrieves a [`DesignSpecificationOutdoorAir`] by name
    pub fn get_design_specification_outdoor_air(
        &self,
        name: &str,
    ) -> Result<&DesignSpecificationOutdoorAir, ModelError> {
        find(
            &self.design_specifications_outdoor_air,
            ModelObjectKind::DesignSpecificationOutdoorAir,
            name,
        )
    }

    /// Retrieves a mutable [`DesignSpecificationOutdoorAir`] by name. Use
    /// [`Model::assign_schedule`] for setting its schedule.
    pub fn get_design_specification_outdoor_air_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut DesignSpecificationOutdoorAir, ModelError> {
        find_mut(
            &mut self.design_specifications_outdoor_air,
            ModelObjectKind::DesignSpecificationOutdoorAir,
            name,
        )
    }

    /// Removes a [`DesignSpecificationOutdoorAir`]
    pub fn remove_design_specification_outdoor_air(
        &mut self,
        name: &str,
    ) -> Result<DesignSpecificationOutdoorAir, ModelError> {
        let i = index_of(
            &self.design_specifications_outdoor_air,
            ModelObjectKind::DesignSpecificationOutdoorAir,
            name,
        )?;
        Ok(self.design_specifications_outdoor_air.remove(i))
    }

    /* AVAILABILITY MANAGERS */

    /// Adds an [`AvailabilityManager`] to the [`Model`]. The zones in the
    /// lists of a night cycle manager must exist.
    ///
    /// This does not put it in an [`AirLoopHVAC`]; see
    /// [`Model::add_availability_manager_to_air_loop`]
    pub fn add_availability_manager(&mut self, add: AvailabilityManager) -> Result<String, ModelError> {
        self.attach_schedules(&add)?;
        if let Some(nc) = add.as_night_cycle() {
            for role in NightCycleZoneRole::iter() {
                self.check_thermal_zones(&add, nc.thermal_zones_for(role))?;
            }
        }
        Ok(push_unique(
            &mut self.availability_managers,
            ModelObjectKind::AvailabilityManager,
            add,
        ))
    }

    /// Retrieves an [`AvailabilityManager`] by name
    pub fn get_availability_manager(&self, name: &str) -> Result<&AvailabilityManager, ModelError> {
        find(&self.availability_managers, ModelObjectKind::AvailabilityManager, name)
    }

    /// Retrieves a mutable [`AvailabilityManager`] by name. Use
    /// [`Model::assign_schedule`] for setting its schedules and
    /// [`Model::set_night_cycle_thermal_zones`] for its zones.
    pub fn get_availability_manager_mut(
        &mut self,
        name: &str,
    ) -> Result<&mut AvailabilityManager, ModelError> {
        find_mut(&mut self.availability_managers, ModelObjectKind::AvailabilityManager, name)
    }

    /// Removes an [`AvailabilityManager`], taking it out of its [`AirLoopHVAC`]
    pub fn remove_availability_manager(&mut self, name: &str) -> Result<AvailabilityManager, ModelError> {
        let i = index_of(&self.availability_managers, ModelObjectKind::AvailabilityManager, name)?;
        for l in self.air_loops.iter_mut() {
            l.availability_managers.retain(|m| m != name);
        }
        Ok(self.availability_managers.remove(i))
    }

    /// Replaces the zones in one of the lists of a night cycle manager
    pub fn set_night_cycle_thermal_zones(
        &mut self,
        manager: &str,
        role: NightCycleZoneRole,
        zones: Vec<String>,
    ) -> Result<(), ModelError> {
        let m = self.get_availability_manager(manager)?;
        if m.as_night_cycle().is_none() {
            return Err(ModelError::Invalid {
                object_type: m.object_type().to_string(),
                name: manager.to_string(),
                msg: "only night cycle managers have zone lists".to_string(),
            });
        }
        self.check_thermal_zones(m, &zones)?;
        if let Some(nc) = self.get_availability_manager_mut(manager)?.as_night_cycle_mut() {
            nc.set_thermal_zones_for(role, zones);
        }
        Ok(())
    }

    /* HVAC */

    /// Adds an [`HVAC`] component to the [`Model`]
    ///
    /// This does not put it in an [`AirLoopHVAC`]; see
    /// [`Model::add_supply_component`]
    pub fn add_hvac(&mut self, add: HVAC) -> Result<String, ModelError> {
        self.attach_schedules(&add)?;
        Ok(push_unique(&mut self.hvacs, ModelObjectKind::HVAC, add))
    }

    /// Retrieves an [`HVAC`] component by name
    pub fn get_hvac(&self, name: &str) -> Result<&HVAC, ModelError> {
        find(&self.hvacs, ModelObjectKind::HVAC, name)
    }

    /// Retrieves a mutable [`HVAC`] component by name. Use
    /// [`Model::assign_schedule`] for setting its schedules.
    pub fn get_hvac_mut(&mut self, name: &str) -> Result<&mut HVAC, ModelError> {
        find_mut(&mut self.hvacs, ModelObjectKind::HVAC, name)
    }

    /// Removes an [`HVAC`] component, taking it out of its [`AirLoopHVAC`]
    pub fn remove_hvac(&mut self, name: &str) -> Result<HVAC, ModelError> {
        let i = index_of(&self.hvacs, ModelObjectKind::HVAC, name)?;
        for l in self.air_loops.iter_mut() {
            l.supply_components.retain(|c| c != name);
        }
        Ok(self.hvacs.remove(i))
    }

    /* AIR LOOPS */

    /// Adds an [`AirLoopHVAC`] to the [`Model`]. Its zones, supply components
    /// and availability managers must exist, and the components and managers
    /// can not belong to another loop.
    ///
    /// ```rust
    /// use model::{Model, AirLoopHVAC, FanConstantVolume};
    ///
    /// let mut model = Model::default();
    /// model.add_hvac(FanConstantVolume::new("Fan").into()).unwrap();
    ///
    /// let mut first = AirLoopHVAC::new("First");
    /// first.push_supply_component("Fan");
    /// model.add_air_loop_hvac(first).unwrap();
    ///
    /// // The fan is taken
    /// let mut second = AirLoopHVAC::new("Second");
    /// second.push_supply_component("Fan");
    /// assert!(model.add_air_loop_hvac(second).is_err());
    /// ```
    pub fn add_air_loop_hvac(&mut self, add: AirLoopHVAC) -> Result<String, ModelError> {
        self.attach_schedules(&add)?;
        self.check_thermal_zones(&add, add.thermal_zones())?;
        check_no_duplicates(
            add.object_type(),
            &add.name,
            ModelObjectKind::HVAC,
            add.supply_components(),
        )?;
        check_no_duplicates(
            add.object_type(),
            &add.name,
            ModelObjectKind::AvailabilityManager,
            add.availability_managers(),
        )?;
        for c in add.supply_components() {
            let component = self
                .get_hvac(c)
                .map_err(|_| missing_reference(&add, ModelObjectKind::HVAC, c))?;
            if let Some(owner) = self.air_loop_hvac_for_hvac(c) {
                return Err(ModelError::AlreadyAssigned {
                    object_type: component.object_type().to_string(),
                    name: c.clone(),
                    owner: owner.name.clone(),
                });
            }
        }
        for m in add.availability_managers() {
            let manager = self
                .get_availability_manager(m)
                .map_err(|_| missing_reference(&add, ModelObjectKind::AvailabilityManager, m))?;
            if let Some(owner) = self.air_loop_hvac_for_availability_manager(m) {
                return Err(ModelError::AlreadyAssigned {
                    object_type: manager.object_type().to_string(),
                    name: m.clone(),
                    owner: owner.name.clone(),
                });
            }
        }
        Ok(push_unique(&mut self.air_loops, ModelObjectKind::AirLoopHVAC, add))
    }

    /// Retrieves an [`AirLoopHVAC`] by name
    pub fn get_air_loop_hvac(&self, name: &str) -> Result<&AirLoopHVAC, ModelError> {
        find(&self.air_loops, ModelObjectKind::AirLoopHVAC, name)
    }

    /// Retrieves a mutable [`AirLoopHVAC`] by name. Use the `Model` methods
    /// for editing its zones, components, managers and schedules.
    pub fn get_air_loop_hvac_mut(&mut self, name: &str) -> Result<&mut AirLoopHVAC, ModelError> {
        find_mut(&mut self.air_loops, ModelObjectKind::AirLoopHVAC, name)
    }

    /// Removes an [`AirLoopHVAC`] together with its availability managers
    /// and supply components
    pub fn remove_air_loop_hvac(&mut self, name: &str) -> Result<AirLoopHVAC, ModelError> {
        let i = index_of(&self.air_loops, ModelObjectKind::AirLoopHVAC, name)?;
        let removed = self.air_loops.remove(i);
        self.availability_managers
            .retain(|m| !removed.has_availability_manager(m.name()));
        self.hvacs.retain(|c| !removed.has_supply_component(c.name()));
        Ok(removed)
    }

    /// The [`AirLoopHVAC`] an [`AvailabilityManager`] belongs to, if any
    pub fn air_loop_hvac_for_availability_manager(&self, manager: &str) -> Option<&AirLoopHVAC> {
        self.air_loops
            .iter()
            .find(|l| l.has_availability_manager(manager))
    }

    /// The [`AirLoopHVAC`] an [`HVAC`] component belongs to, if any
    pub fn air_loop_hvac_for_hvac(&self, component: &str) -> Option<&AirLoopHVAC> {
        self.air_loops.iter().find(|l| l.has_supply_component(component))
    }

    /// The [`AirLoopHVAC`]s serving a [`ThermalZone`]
    pub fn air_loop_hvacs_for_thermal_zone(&self, zone: &str) -> Vec<&AirLoopHVAC> {
        self.air_loops
            .iter()
            .filter(|l| l.serves_thermal_zone(zone))
            .collect()
    }

    /// Appends an [`AvailabilityManager`] to the managers of an [`AirLoopHVAC`].
    /// Managers can only belong to one loop; adding it again to the same loop
    /// does nothing.
    pub fn add_availability_manager_to_air_loop(
        &mut self,
        air_loop: &str,
        manager: &str,
    ) -> Result<(), ModelError> {
        let object_type = self.get_availability_manager(manager)?.object_type();
        let i = index_of(&self.air_loops, ModelObjectKind::AirLoopHVAC, air_loop)?;
        if let Some(owner) = self.air_loop_hvac_for_availability_manager(manager) {
            if owner.name == air_loop {
                return Ok(());
            }
            return Err(ModelError::AlreadyAssigned {
                object_type: object_type.to_string(),
                name: manager.to_string(),
                owner: owner.name.clone(),
            });
        }
        self.air_loops[i].availability_managers.push(manager.to_string());
        Ok(())
    }

    /// Takes an [`AvailabilityManager`] out of an [`AirLoopHVAC`], keeping it
    /// in the model. Returns whether it was there.
    pub fn remove_availability_manager_from_air_loop(
        &mut self,
        air_loop: &str,
        manager: &str,
    ) -> Result<bool, ModelError> {
        let l = self.get_air_loop_hvac_mut(air_loop)?;
        let n = l.availability_managers.len();
        l.availability_managers.retain(|m| m != manager);
        Ok(l.availability_managers.len() != n)
    }

    /// Replaces the availability managers of an [`AirLoopHVAC`], in priority
    /// order. Each manager can appear only once.
    pub fn set_availability_managers(
        &mut self,
        air_loop: &str,
        managers: Vec<String>,
    ) -> Result<(), ModelError> {
        let i = index_of(&self.air_loops, ModelObjectKind::AirLoopHVAC, air_loop)?;
        check_no_duplicates(
            AirLoopHVAC::OBJECT_TYPE,
            air_loop,
            ModelObjectKind::AvailabilityManager,
            &managers,
        )?;
        for m in managers.iter() {
            let object_type = self.get_availability_manager(m)?.object_type();
            if let Some(owner) = self.air_loop_hvac_for_availability_manager(m) {
                if owner.name != air_loop {
                    return Err(ModelError::AlreadyAssigned {
                        object_type: object_type.to_string(),
                        name: m.clone(),
                        owner: owner.name.clone(),
                    });
                }
            }
        }
        self.air_loops[i].availability_managers = managers;
        Ok(())
    }

    /// The first night cycle manager of an [`AirLoopHVAC`], if any
    pub fn night_cycle_manager(
        &self,
        air_loop: &str,
    ) -> Result<Option<&AvailabilityManagerNightCycle>, ModelError> {
        let l = self.get_air_loop_hvac(air_loop)?;
        Ok(l.availability_managers()
            .iter()
            .filter_map(|m| self.get_availability_manager(m).ok())
            .find_map(|m| m.as_night_cycle()))
    }

    /// The control type of the night cycle manager of an [`AirLoopHVAC`],
    /// `StayOff` if it has none
    pub fn night_cycle_control_type(&self, air_loop: &str) -> Result<NightCycleControlType, ModelError> {
        Ok(self
            .night_cycle_manager(air_loop)?
            .map(|nc| nc.control_type())
            .unwrap_or(NightCycleControlType::StayOff))
    }

    /// Sets the control type of the night cycle manager of an [`AirLoopHVAC`].
    /// If the loop has none, a manager called `<loop> Night Cycle Manager`
    /// is created and appended to its managers. Returns the name of the manager.
    ///
    /// ```rust
    /// use model::{Model, AirLoopHVAC, NightCycleControlType};
    ///
    /// let mut model = Model::default();
    /// model.add_air_loop_hvac(AirLoopHVAC::new("Main Loop")).unwrap();
    /// assert_eq!(
    ///     model.night_cycle_control_type("Main Loop").unwrap(),
    ///     NightCycleControlType::StayOff
    /// );
    ///
    /// let name = model
    ///     .set_night_cycle_control_type("Main Loop", NightCycleControlType::CycleOnAny)
    ///     .unwrap();
    /// assert_eq!(name, "Main Loop Night Cycle Manager");
    /// assert_eq!(
    ///     model.night_cycle_control_type("Main Loop").unwrap(),
    ///     NightCycleControlType::CycleOnAny
    /// );
    /// ```
    pub fn set_night_cycle_control_type(
        &mut self,
        air_loop: &str,
        control_type: NightCycleControlType,
    ) -> Result<String, ModelError> {
        let existing = self
            .night_cycle_manager(air_loop)?
            .map(|nc| nc.name.clone());
        match existing {
            Some(name) => {
                if let Some(nc) = self.get_availability_manager_mut(&name)?.as_night_cycle_mut() {
                    nc.set_control_type(control_type);
                }
                Ok(name)
            }
            None => {
                let mut nc =
                    AvailabilityManagerNightCycle::new(format!("{} Night Cycle Manager", air_loop));
                nc.set_control_type(control_type);
                let name = self.add_availability_manager(nc.into())?;
                self.add_availability_manager_to_air_loop(air_loop, &name)?;
                Ok(name)
            }
        }
    }

    /// Makes an [`AirLoopHVAC`] serve a [`ThermalZone`]. A zone can be served
    /// by several loops.
    pub fn add_thermal_zone_to_air_loop(&mut self, air_loop: &str, zone: &str) -> Result<(), ModelError> {
        self.get_thermal_zone(zone)?;
        let l = self.get_air_loop_hvac_mut(air_loop)?;
        if !l.serves_thermal_zone(zone) {
            l.thermal_zones.push(zone.to_string());
        }
        Ok(())
    }

    /// Stops an [`AirLoopHVAC`] from serving a [`ThermalZone`]. Returns whether it did.
    pub fn remove_thermal_zone_from_air_loop(
        &mut self,
        air_loop: &str,
        zone: &str,
    ) -> Result<bool, ModelError> {
        let l = self.get_air_loop_hvac_mut(air_loop)?;
        let n = l.thermal_zones.len();
        l.thermal_zones.retain(|z| z != zone);
        Ok(l.thermal_zones.len() != n)
    }

    /// Appends an [`HVAC`] component at the end of the supply side of an
    /// [`AirLoopHVAC`]. A component can only belong to one loop.
    pub fn add_supply_component(&mut self, air_loop: &str, component: &str) -> Result<(), ModelError> {
        let object_type = self.get_hvac(component)?.object_type();
        let i = index_of(&self.air_loops, ModelObjectKind::AirLoopHVAC, air_loop)?;
        if let Some(owner) = self.air_loop_hvac_for_hvac(component) {
            return Err(ModelError::AlreadyAssigned {
                object_type: object_type.to_string(),
                name: component.to_string(),
                owner: owner.name.clone(),
            });
        }
        self.air_loops[i].supply_components.push(component.to_string());
        Ok(())
    }

    /// Takes an [`HVAC`] component out of the supply side of an
    /// [`AirLoopHVAC`], keeping it in the model. Returns whether it was there.
    pub fn remove_supply_component(&mut self, air_loop: &str, component: &str) -> Result<bool, ModelError> {
        let l = self.get_air_loop_hvac_mut(air_loop)?;
        let n = l.supply_components.len();
        l.supply_components.retain(|c| c != component);
        Ok(l.supply_components.len() != n)
    }

    /// Copies an [`AirLoopHVAC`], together with copies of its availability
    /// managers and supply components. The copy serves no zones, and the
    /// zone lists of its night cycle managers are empty. Returns the name
    /// of the copy.
    pub fn clone_air_loop_hvac(&mut self, name: &str) -> Result<String, ModelError> {
        let mut new_loop = self.get_air_loop_hvac(name)?.clone();

        let mut managers = Vec::with_capacity(new_loop.availability_managers.len());
        for m in new_loop.availability_managers.iter() {
            let mut manager = self.get_availability_manager(m)?.clone();
            if let Some(nc) = manager.as_night_cycle_mut() {
                for role in NightCycleZoneRole::iter() {
                    nc.set_thermal_zones_for(role, Vec::new());
                }
            }
            managers.push(self.add_availability_manager(manager)?);
        }

        let mut components = Vec::with_capacity(new_loop.supply_components.len());
        for c in new_loop.supply_components.iter() {
            let component = self.get_hvac(c)?.clone();
            components.push(self.add_hvac(component)?);
        }

        new_loop.thermal_zones.clear();
        new_loop.availability_managers = managers;
        new_loop.supply_components = components;
        self.add_air_loop_hvac(new_loop)
    }

    /* SCHEDULE ASSIGNMENT */

    fn object_mut(&mut self, kind: ModelObjectKind, name: &str) -> Result<&mut dyn ModelObject, ModelError> {
        let o: &mut dyn ModelObject = match kind {
            ModelObjectKind::ScheduleTypeLimits => find_mut(&mut self.schedule_type_limits, kind, name)?,
            ModelObjectKind::Schedule => find_mut(&mut self.schedules, kind, name)?,
            ModelObjectKind::Material => find_mut(&mut self.materials, kind, name)?,
            ModelObjectKind::Construction => find_mut(&mut self.constructions, kind, name)?,
            ModelObjectKind::Curve => find_mut(&mut self.curves, kind, name)?,
            ModelObjectKind::ThermalZone => find_mut(&mut self.thermal_zones, kind, name)?,
            ModelObjectKind::DesignSpecificationOutdoorAir => {
                find_mut(&mut self.design_specifications_outdoor_air, kind, name)?
            }
            ModelObjectKind::AvailabilityManager => {
                find_mut(&mut self.availability_managers, kind, name)?
            }
            ModelObjectKind::HVAC => find_mut(&mut self.hvacs, kind, name)?,
            ModelObjectKind::AirLoopHVAC => find_mut(&mut self.air_loops, kind, name)?,
        };
        Ok(o)
    }

    /// Retrieves any object in the model
    pub fn object(&self, kind: ModelObjectKind, name: &str) -> Result<&dyn ModelObject, ModelError> {
        let o: &dyn ModelObject = match kind {
            ModelObjectKind::ScheduleTypeLimits => find(&self.schedule_type_limits, kind, name)?,
            ModelObjectKind::Schedule => find(&self.schedules, kind, name)?,
            ModelObjectKind::Material => find(&self.materials, kind, name)?,
            ModelObjectKind::Construction => find(&self.constructions, kind, name)?,
            ModelObjectKind::Curve => find(&self.curves, kind, name)?,
            ModelObjectKind::ThermalZone => find(&self.thermal_zones, kind, name)?,
            ModelObjectKind::DesignSpecificationOutdoorAir => {
                find(&self.design_specifications_outdoor_air, kind, name)?
            }
            ModelObjectKind::AvailabilityManager => find(&self.availability_managers, kind, name)?,
            ModelObjectKind::HVAC => find(&self.hvacs, kind, name)?,
            ModelObjectKind::AirLoopHVAC => find(&self.air_loops, kind, name)?,
        };
        Ok(o)
    }

    /// Points the schedule field `display_name` of an object to a schedule
    /// (or empties it, when `schedule` is `None`).
    ///
    /// The schedule is checked against the schedule type registry, and
    /// given `ScheduleTypeLimits` if it has none.
    ///
    /// ```rust
    /// use model::{Model, ModelObjectKind, AirLoopHVAC, ScheduleConstant};
    ///
    /// let mut model = Model::default();
    /// model.add_schedule(ScheduleConstant::new("Always On", 1.).into()).unwrap();
    /// model.add_air_loop_hvac(AirLoopHVAC::new("Main Loop")).unwrap();
    ///
    /// model.assign_schedule(
    ///     ModelObjectKind::AirLoopHVAC,
    ///     "Main Loop",
    ///     "Availability",
    ///     Some("Always On"),
    /// ).unwrap();
    ///
    /// let l = model.get_air_loop_hvac("Main Loop").unwrap();
    /// assert_eq!(l.availability_schedule().unwrap(), "Always On");
    ///
    /// // The schedule got its limits
    /// let s = model.get_schedule("Always On").unwrap();
    /// assert_eq!(s.schedule_type_limits(), Some("OnOff"));
    /// ```
    pub fn assign_schedule(
        &mut self,
        kind: ModelObjectKind,
        name: &str,
        display_name: &str,
        schedule: Option<&str>,
    ) -> Result<(), ModelError> {
        let object_type = self.object(kind, name)?.object_type();
        if schedule_type(object_type, display_name).is_none() {
            return Err(ModelError::UnknownScheduleField {
                object_type: object_type.to_string(),
                display_name: display_name.to_string(),
            });
        }
        if let Some(s) = schedule {
            self.check_or_assign_schedule_type_limits(object_type, display_name, s)?;
        }
        let o = self.object_mut(kind, name)?;
        if !o.set_schedule_field(display_name, schedule.map(|s| s.to_string())) {
            return Err(ModelError::UnknownScheduleField {
                object_type: object_type.to_string(),
                display_name: display_name.to_string(),
            });
        }
        Ok(())
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{
        AirGap, AvailabilityManagerScheduled, CoilHeatingElectric, CurveQuadratic,
        FanConstantVolume, ScheduleConstant, StandardOpaqueMaterial,
    };

    /// A loop with two zones, a fan, a coil and a night cycle manager
    fn loop_model() -> Result<Model, ModelError> {
        let mut model = Model::default();
        model.add_schedule(ScheduleConstant::new("Always On", 1.).into())?;
        model.add_thermal_zone(ThermalZone::new("Kitchen"))?;
        model.add_thermal_zone(ThermalZone::new("Bedroom"))?;
        model.add_hvac(FanConstantVolume::new("Fan").into())?;
        model.add_hvac(CoilHeatingElectric::new("Coil").into())?;

        let mut nc = AvailabilityManagerNightCycle::new("Night Cycle");
        nc.set_control_type(NightCycleControlType::CycleOnControlZone)
            .set_thermal_zones_for(NightCycleZoneRole::Control, vec!["Kitchen".into()]);
        model.add_availability_manager(nc.into())?;

        let mut l = AirLoopHVAC::new("Main Loop");
        l.set_availability_schedule("Always On");
        l.thermal_zones = vec!["Kitchen".into(), "Bedroom".into()];
        l.supply_components = vec!["Fan".into(), "Coil".into()];
        l.availability_managers = vec!["Night Cycle".into()];
        model.add_air_loop_hvac(l)?;
        Ok(model)
    }

    #[test]
    fn unique_names() -> Result<(), ModelError> {
        let mut model = Model::default();
        assert_eq!(model.add_thermal_zone(ThermalZone::new("Kitchen"))?, "Kitchen");
        assert_eq!(model.add_thermal_zone(ThermalZone::new("Kitchen"))?, "Kitchen 1");
        assert_eq!(model.add_thermal_zone(ThermalZone::new("Kitchen"))?, "Kitchen 2");
        // Names are unique within each kind only
        assert_eq!(model.add_hvac(FanConstantVolume::new("Kitchen").into())?, "Kitchen");
        assert_eq!(model.thermal_zones.len(), 3);
        Ok(())
    }

    #[test]
    fn validation_on_add() -> Result<(), ModelError> {
        let mut model = Model::default();
        let bad_material = StandardOpaqueMaterial::new(
            "Bad",
            crate::Roughness::Rough,
            0.0,
            1.0,
            1000.,
            1000.,
        );
        assert!(model.add_material(bad_material.into()).is_err());

        let mut bad_curve = CurveQuadratic::new("Curve");
        bad_curve.set_minimum_value_of_x(2.).set_maximum_value_of_x(1.);
        assert!(model.add_curve(bad_curve.into()).is_err());

        let mut fan = FanConstantVolume::new("Fan");
        fan.set_availability_schedule("Nope");
        match model.add_hvac(fan.into()) {
            Err(ModelError::MissingReference { kind, reference, .. }) => {
                assert_eq!(kind, "Schedule");
                assert_eq!(reference, "Nope");
            }
            other => panic!("expected a MissingReference error, found {:?}", other),
        }

        let mut nc = AvailabilityManagerNightCycle::new("NC");
        nc.set_thermal_zones_for(NightCycleZoneRole::HeatingControl, vec!["Attic".into()]);
        assert!(model.add_availability_manager(nc.into()).is_err());
        assert!(model.availability_managers.is_empty());
        Ok(())
    }

    #[test]
    fn schedules_get_limits_on_add() -> Result<(), ModelError> {
        let model = loop_model()?;
        let s = model.get_schedule("Always On")?;
        assert_eq!(s.schedule_type_limits(), Some("OnOff"));
        let limits = model.get_schedule_type_limits("OnOff")?;
        assert_eq!(limits.unit_type(), "Availability");
        Ok(())
    }

    #[test]
    fn incompatible_schedule() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        let mut limits = ScheduleTypeLimits::new("Temperature");
        limits.set_unit_type("Temperature");
        model.add_schedule_type_limits(limits)?;
        let mut s = ScheduleConstant::new("Setpoint", 21.);
        s.set_schedule_type_limits("Temperature");
        model.add_schedule(s.into())?;

        let mut oa = DesignSpecificationOutdoorAir::new("OA");
        oa.set_outdoor_air_flow_rate_fraction_schedule("Setpoint");
        assert!(matches!(
            model.add_design_specification_outdoor_air(oa),
            Err(ModelError::IncompatibleSchedule { .. })
        ));
        Ok(())
    }

    #[test]
    fn remove_schedule() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.remove_schedule("Always On")?;
        assert!(model.get_air_loop_hvac("Main Loop")?.availability_schedule().is_err());
        assert!(model.remove_schedule("Always On").is_err());

        model.remove_schedule_type_limits("OnOff")?;
        assert!(model.schedule_type_limits.is_empty());
        Ok(())
    }

    #[test]
    fn remove_zone() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.remove_thermal_zone("Kitchen")?;
        assert_eq!(model.get_air_loop_hvac("Main Loop")?.thermal_zones(), &["Bedroom"]);
        let nc = model
            .night_cycle_manager("Main Loop")?
            .ok_or_else(|| not_found(ModelObjectKind::AvailabilityManager, "NC"))?;
        assert!(nc.control_thermal_zones().is_empty());
        Ok(())
    }

    #[test]
    fn remove_members_and_loop() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.remove_hvac("Coil")?;
        assert_eq!(model.get_air_loop_hvac("Main Loop")?.supply_components(), &["Fan"]);

        model.remove_air_loop_hvac("Main Loop")?;
        assert!(model.hvacs.is_empty());
        assert!(model.availability_managers.is_empty());
        assert_eq!(model.thermal_zones.len(), 2);
        Ok(())
    }

    #[test]
    fn remove_material() -> Result<(), ModelError> {
        let mut model = Model::default();
        model.add_material(AirGap::new("Gap", 0.18).into())?;
        let mut c = Construction::new("Wall");
        c.push_layer("Gap").push_layer("Gap");
        model.add_construction(c)?;
        model.remove_material("Gap")?;
        assert!(model.get_construction("Wall")?.layers().is_empty());
        assert!(model.construction_u_factor("Wall").is_err());
        Ok(())
    }

    #[test]
    fn thermal_resistance() -> Result<(), ModelError> {
        let mut model = Model::default();
        model.add_material(AirGap::new("Gap", 0.18).into())?;
        model.add_material(
            StandardOpaqueMaterial::new("Brick", crate::Roughness::Rough, 0.1, 0.5, 1700., 800.)
                .into(),
        )?;
        let mut c = Construction::new("Wall");
        c.push_layer("Brick").push_layer("Gap");
        model.add_construction(c)?;
        let r = model.construction_thermal_resistance("Wall")?;
        assert!((r - 0.38).abs() < 1e-6);
        assert!((model.construction_u_factor("Wall")? - 1. / 0.38).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn managers_belong_to_one_loop() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.add_air_loop_hvac(AirLoopHVAC::new("Other Loop"))?;
        assert!(matches!(
            model.add_availability_manager_to_air_loop("Other Loop", "Night Cycle"),
            Err(ModelError::AlreadyAssigned { .. })
        ));
        // no-op
        model.add_availability_manager_to_air_loop("Main Loop", "Night Cycle")?;
        assert_eq!(
            model.get_air_loop_hvac("Main Loop")?.availability_managers().len(),
            1
        );

        assert!(model.remove_availability_manager_from_air_loop("Main Loop", "Night Cycle")?);
        assert!(model.air_loop_hvac_for_availability_manager("Night Cycle").is_none());
        model.add_availability_manager_to_air_loop("Other Loop", "Night Cycle")?;
        assert_eq!(
            model
                .air_loop_hvac_for_availability_manager("Night Cycle")
                .map(|l| l.name.as_str()),
            Some("Other Loop")
        );

        model.add_availability_manager(AvailabilityManagerScheduled::new("Sched").into())?;
        model.set_availability_managers("Main Loop", vec!["Sched".into()])?;
        assert!(model
            .set_availability_managers("Main Loop", vec!["Night Cycle".into()])
            .is_err());
        Ok(())
    }

    #[test]
    fn duplicated_loop_members() -> Result<(), ModelError> {
        let mut model = Model::default();
        model.add_hvac(FanConstantVolume::new("Fan").into())?;
        model.add_availability_manager(AvailabilityManagerScheduled::new("Sched").into())?;

        let mut l = AirLoopHVAC::new("Loop");
        l.push_supply_component("Fan").push_supply_component("Fan");
        match model.add_air_loop_hvac(l) {
            Err(ModelError::DuplicateMember { kind, member, .. }) => {
                assert_eq!(kind, ModelObjectKind::HVAC.to_string());
                assert_eq!(member, "Fan");
            }
            other => panic!("expected a DuplicateMember error, found {:?}", other),
        }

        let mut l = AirLoopHVAC::new("Loop");
        l.availability_managers = vec!["Sched".into(), "Sched".into()];
        assert!(matches!(
            model.add_air_loop_hvac(l),
            Err(ModelError::DuplicateMember { .. })
        ));
        assert!(model.air_loops.is_empty());
        Ok(())
    }

    #[test]
    fn set_availability_managers() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.add_availability_manager(AvailabilityManagerScheduled::new("Sched").into())?;

        // Priority order is kept
        model.set_availability_managers(
            "Main Loop",
            vec!["Sched".into(), "Night Cycle".into()],
        )?;
        assert_eq!(
            model.get_air_loop_hvac("Main Loop")?.availability_managers(),
            &["Sched", "Night Cycle"]
        );

        // Rejected lists leave the loop untouched
        assert!(matches!(
            model.set_availability_managers(
                "Main Loop",
                vec!["Sched".into(), "Night Cycle".into(), "Sched".into()],
            ),
            Err(ModelError::DuplicateMember { .. })
        ));
        assert!(model
            .set_availability_managers("Main Loop", vec!["Nope".into()])
            .is_err());
        assert!(model
            .set_availability_managers("Other Loop", vec!["Sched".into()])
            .is_err());
        assert_eq!(
            model.get_air_loop_hvac("Main Loop")?.availability_managers(),
            &["Sched", "Night Cycle"]
        );

        model.set_availability_managers("Main Loop", Vec::new())?;
        assert!(model.air_loop_hvac_for_availability_manager("Sched").is_none());
        Ok(())
    }

    #[test]
    fn night_cycle_control_type() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        assert_eq!(
            model.night_cycle_control_type("Main Loop")?,
            NightCycleControlType::CycleOnControlZone
        );
        let name =
            model.set_night_cycle_control_type("Main Loop", NightCycleControlType::CycleOnAny)?;
        assert_eq!(name, "Night Cycle");
        assert_eq!(model.availability_managers.len(), 1);

        // A new one is appended after the existing managers
        model.add_availability_manager(AvailabilityManagerScheduled::new("Sched").into())?;
        model.set_availability_managers("Main Loop", vec!["Sched".into()])?;
        assert_eq!(
            model.night_cycle_control_type("Main Loop")?,
            NightCycleControlType::StayOff
        );
        let name = model
            .set_night_cycle_control_type("Main Loop", NightCycleControlType::CycleOnAnyHeatingZone)?;
        assert_eq!(name, "Main Loop Night Cycle Manager");
        assert_eq!(
            model.get_air_loop_hvac("Main Loop")?.availability_managers(),
            &["Sched", "Main Loop Night Cycle Manager"]
        );
        assert!(model.night_cycle_control_type("Nope").is_err());
        Ok(())
    }

    #[test]
    fn zones_and_components() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.add_air_loop_hvac(AirLoopHVAC::new("Other Loop"))?;
        model.add_thermal_zone_to_air_loop("Other Loop", "Kitchen")?;
        assert_eq!(model.air_loop_hvacs_for_thermal_zone("Kitchen").len(), 2);
        assert!(model.add_thermal_zone_to_air_loop("Other Loop", "Attic").is_err());
        assert!(model.remove_thermal_zone_from_air_loop("Other Loop", "Kitchen")?);
        assert!(!model.remove_thermal_zone_from_air_loop("Other Loop", "Kitchen")?);

        assert!(model.add_supply_component("Other Loop", "Fan").is_err());
        assert!(model.remove_supply_component("Main Loop", "Fan")?);
        model.add_supply_component("Other Loop", "Fan")?;
        assert_eq!(
            model.air_loop_hvac_for_hvac("Fan").map(|l| l.name.as_str()),
            Some("Other Loop")
        );
        Ok(())
    }

    #[test]
    fn night_cycle_zones() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.set_night_cycle_thermal_zones(
            "Night Cycle",
            NightCycleZoneRole::CoolingControl,
            vec!["Bedroom".into()],
        )?;
        assert!(model
            .set_night_cycle_thermal_zones(
                "Night Cycle",
                NightCycleZoneRole::CoolingControl,
                vec!["Attic".into()],
            )
            .is_err());
        model.add_availability_manager(AvailabilityManagerScheduled::new("Sched").into())?;
        assert!(model
            .set_night_cycle_thermal_zones("Sched", NightCycleZoneRole::Control, Vec::new())
            .is_err());
        Ok(())
    }

    #[test]
    fn clone_loop() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        let name = model.clone_air_loop_hvac("Main Loop")?;
        assert_eq!(name, "Main Loop 1");

        let copy = model.get_air_loop_hvac(&name)?;
        assert!(copy.thermal_zones().is_empty());
        assert_eq!(copy.supply_components(), &["Fan 1", "Coil 1"]);
        assert_eq!(copy.availability_managers(), &["Night Cycle 1"]);
        assert_eq!(copy.availability_schedule()?, "Always On");

        let nc = model
            .night_cycle_manager(&name)?
            .ok_or_else(|| not_found(ModelObjectKind::AvailabilityManager, "NC"))?;
        assert_eq!(nc.control_type(), NightCycleControlType::CycleOnControlZone);
        assert!(nc.control_thermal_zones().is_empty());

        // The original is untouched
        let nc = model
            .night_cycle_manager("Main Loop")?
            .ok_or_else(|| not_found(ModelObjectKind::AvailabilityManager, "NC"))?;
        assert_eq!(nc.control_thermal_zones(), &["Kitchen"]);
        assert_eq!(model.hvacs.len(), 4);
        Ok(())
    }

    #[test]
    fn assign_schedule() -> Result<(), ModelError> {
        let mut model = loop_model()?;
        model.assign_schedule(ModelObjectKind::HVAC, "Fan", "Availability", Some("Always On"))?;
        if let HVAC::FanConstantVolume(f) = model.get_hvac("Fan")? {
            assert_eq!(f.availability_schedule()?, "Always On");
        } else {
            panic!("wrong HVAC");
        }

        assert!(matches!(
            model.assign_schedule(ModelObjectKind::HVAC, "Fan", "Applicability Schedule", None),
            Err(ModelError::UnknownScheduleField { .. })
        ));
        assert!(model
            .assign_schedule(ModelObjectKind::HVAC, "Fan", "Availability", Some("Nope"))
            .is_err());
        assert!(model
            .assign_schedule(ModelObjectKind::ThermalZone, "Kitchen", "Availability", None)
            .is_err());

        model.assign_schedule(ModelObjectKind::HVAC, "Fan", "Availability", None)?;
        assert!(model.get_hvac("Fan")?.schedule_fields().is_empty());
        Ok(())
    }

    #[test]
    fn json_roundtrip() -> Result<(), ModelError> {
        let model = loop_model()?;
        let json = model.to_json()?;
        let back = Model::from_json(&json)?;
        assert_eq!(model, back);

        // Unknown fields are rejected
        assert!(Model::from_json(r#"{"surfaces": []}"#).is_err());
        Ok(())
    }

    #[test]
    fn json_order_does_not_matter() -> Result<(), ModelError> {
        let model = Model::from_json(
            r#"{
            "air_loops": [{"name": "Loop", "thermal_zones": ["Kitchen"]}],
            "thermal_zones": [{"name": "Kitchen"}]
        }"#,
        )?;
        assert_eq!(model.air_loops.len(), 1);
        Ok(())
    }
}
