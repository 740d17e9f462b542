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

use std::fmt::Display;
use std::str::FromStr;

use strum::{EnumIter, IntoEnumIterator};

/// The description of an EnergyPlus class: its name and the names of
/// its fields.
#[derive(Debug)]
pub struct IddObject {
    /// The name of the class (e.g., `AvailabilityManager:NightCycle`)
    pub name: &'static str,

    /// The names of the fields that are not extensible, units in braces
    pub fields: &'static [&'static str],

    /// The templates of the names of the fields in each extensible group.
    /// The `#` is replaced by the number of the group.
    pub extensible: &'static [&'static str],

    /// The number the first extensible group is labelled with
    pub extensible_start: usize,

    /// Whether the first field is the name of the object
    pub has_name: bool,

    /// Whether there can only be one of these objects in a file
    pub unique: bool,
}

impl IddObject {
    /// Number of fields in each extensible group (zero if the class
    /// is not extensible)
    pub fn extensible_group_size(&self) -> usize {
        self.extensible.len()
    }

    /// The name of the field at `index`, used when printing IDF files
    pub fn field_name(&self, index: usize) -> String {
        if index < self.fields.len() {
            return self.fields[index].to_string();
        }
        let n = self.extensible_group_size();
        if n == 0 {
            return format!("Field {}", index + 1);
        }
        let i = index - self.fields.len();
        let group = i / n + self.extensible_start;
        self.extensible[i % n].replace('#', &group.to_string())
    }
}

/// The EnergyPlus classes known by this crate.
///
/// Anything else is read as `Unknown`, keeping its class name and fields
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum IddObjectType {
    Version,
    ScheduleTypeLimits,
    ScheduleConstant,
    ScheduleCompact,
    Material,
    MaterialAirGap,
    Construction,
    CurveQuadratic,
    CurveCubic,
    CurveBiquadratic,
    Zone,
    ZoneList,
    DesignSpecificationOutdoorAir,
    AirLoopHVAC,
    BranchList,
    Branch,
    AvailabilityManagerAssignmentList,
    AvailabilityManagerScheduled,
    AvailabilityManagerScheduledOn,
    AvailabilityManagerScheduledOff,
    AvailabilityManagerNightCycle,
    FanConstantVolume,
    CoilHeatingElectric,
    OutputSQLite,
    OutputVariableDictionary,
    OutputControlTableStyle,
    OutputTableSummaryReports,
    Unknown,
}

const VERSION: IddObject = IddObject {
    name: "Version",
    fields: &["Version Identifier"],
    extensible: &[],
    extensible_start: 1,
    has_name: false,
    unique: true,
};

const SCHEDULE_TYPE_LIMITS: IddObject = IddObject {
    name: "ScheduleTypeLimits",
    fields: &[
        "Name",
        "Lower Limit Value",
        "Upper Limit Value",
        "Numeric Type",
        "Unit Type",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const SCHEDULE_CONSTANT: IddObject = IddObject {
    name: "Schedule:Constant",
    fields: &["Name", "Schedule Type Limits Name", "Hourly Value"],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const SCHEDULE_COMPACT: IddObject = IddObject {
    name: "Schedule:Compact",
    fields: &["Name", "Schedule Type Limits Name"],
    extensible: &["Field #"],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const MATERIAL: IddObject = IddObject {
    name: "Material",
    fields: &[
        "Name",
        "Roughness",
        "Thickness {m}",
        "Conductivity {W/m-K}",
        "Density {kg/m3}",
        "Specific Heat {J/kg-K}",
        "Thermal Absorptance",
        "Solar Absorptance",
        "Visible Absorptance",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const MATERIAL_AIR_GAP: IddObject = IddObject {
    name: "Material:AirGap",
    fields: &["Name", "Thermal Resistance {m2-K/W}"],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const CONSTRUCTION: IddObject = IddObject {
    name: "Construction",
    fields: &["Name", "Outside Layer"],
    extensible: &["Layer #"],
    extensible_start: 2,
    has_name: true,
    unique: false,
};

const CURVE_QUADRATIC: IddObject = IddObject {
    name: "Curve:Quadratic",
    fields: &[
        "Name",
        "Coefficient1 Constant",
        "Coefficient2 x",
        "Coefficient3 x**2",
        "Minimum Value of x",
        "Maximum Value of x",
        "Minimum Curve Output",
        "Maximum Curve Output",
        "Input Unit Type for X",
        "Output Unit Type",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const CURVE_CUBIC: IddObject = IddObject {
    name: "Curve:Cubic",
    fields: &[
        "Name",
        "Coefficient1 Constant",
        "Coefficient2 x",
        "Coefficient3 x**2",
        "Coefficient4 x**3",
        "Minimum Value of x",
        "Maximum Value of x",
        "Minimum Curve Output",
        "Maximum Curve Output",
        "Input Unit Type for X",
        "Output Unit Type",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const CURVE_BIQUADRATIC: IddObject = IddObject {
    name: "Curve:Biquadratic",
    fields: &[
        "Name",
        "Coefficient1 Constant",
        "Coefficient2 x",
        "Coefficient3 x**2",
        "Coefficient4 y",
        "Coefficient5 y**2",
        "Coefficient6 x*y",
        "Minimum Value of x",
        "Maximum Value of x",
        "Minimum Value of y",
        "Maximum Value of y",
        "Minimum Curve Output",
        "Maximum Curve Output",
        "Input Unit Type for X",
        "Input Unit Type for Y",
        "Output Unit Type",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const ZONE: IddObject = IddObject {
    name: "Zone",
    fields: &[
        "Name",
        "Direction of Relative North {deg}",
        "X Origin {m}",
        "Y Origin {m}",
        "Z Origin {m}",
        "Type",
        "Multiplier",
        "Ceiling Height {m}",
        "Volume {m3}",
        "Floor Area {m2}",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const ZONE_LIST: IddObject = IddObject {
    name: "ZoneList",
    fields: &["Name"],
    extensible: &["Zone # Name"],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const DESIGN_SPECIFICATION_OUTDOOR_AIR: IddObject = IddObject {
    name: "DesignSpecification:OutdoorAir",
    fields: &[
        "Name",
        "Outdoor Air Method",
        "Outdoor Air Flow per Person {m3/s-person}",
        "Outdoor Air Flow per Zone Floor Area {m3/s-m2}",
        "Outdoor Air Flow per Zone {m3/s}",
        "Outdoor Air Flow Air Changes per Hour {1/hr}",
        "Outdoor Air Schedule Name",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AIR_LOOP_HVAC: IddObject = IddObject {
    name: "AirLoopHVAC",
    fields: &[
        "Name",
        "Controller List Name",
        "Availability Manager List Name",
        "Design Supply Air Flow Rate {m3/s}",
        "Branch List Name",
        "Connector List Name",
        "Supply Side Inlet Node Name",
        "Demand Side Outlet Node Name",
        "Demand Side Inlet Node Names",
        "Supply Side Outlet Node Names",
        "Design Return Air Flow Fraction of Supply Air Flow",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const BRANCH_LIST: IddObject = IddObject {
    name: "BranchList",
    fields: &["Name"],
    extensible: &["Branch # Name"],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const BRANCH: IddObject = IddObject {
    name: "Branch",
    fields: &["Name", "Pressure Drop Curve Name"],
    extensible: &[
        "Component # Object Type",
        "Component # Name",
        "Component # Inlet Node Name",
        "Component # Outlet Node Name",
    ],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AVAILABILITY_MANAGER_ASSIGNMENT_LIST: IddObject = IddObject {
    name: "AvailabilityManagerAssignmentList",
    fields: &["Name"],
    extensible: &[
        "Availability Manager # Object Type",
        "Availability Manager # Name",
    ],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AVAILABILITY_MANAGER_SCHEDULED: IddObject = IddObject {
    name: "AvailabilityManager:Scheduled",
    fields: &["Name", "Schedule Name"],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AVAILABILITY_MANAGER_SCHEDULED_ON: IddObject = IddObject {
    name: "AvailabilityManager:ScheduledOn",
    fields: &["Name", "Schedule Name"],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AVAILABILITY_MANAGER_SCHEDULED_OFF: IddObject = IddObject {
    name: "AvailabilityManager:ScheduledOff",
    fields: &["Name", "Schedule Name"],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const AVAILABILITY_MANAGER_NIGHT_CYCLE: IddObject = IddObject {
    name: "AvailabilityManager:NightCycle",
    fields: &[
        "Name",
        "Applicability Schedule Name",
        "Fan Schedule Name",
        "Control Type",
        "Thermostat Tolerance {deltaC}",
        "Cycling Run Time Control Type",
        "Cycling Run Time {s}",
        "Control Zone or Zone List Name",
        "Cooling Control Zone or Zone List Name",
        "Heating Control Zone or Zone List Name",
        "Heating Zone Fans Only Zone or Zone List Name",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const FAN_CONSTANT_VOLUME: IddObject = IddObject {
    name: "Fan:ConstantVolume",
    fields: &[
        "Name",
        "Availability Schedule Name",
        "Fan Total Efficiency",
        "Pressure Rise {Pa}",
        "Maximum Flow Rate {m3/s}",
        "Motor Efficiency",
        "Motor In Airstream Fraction",
        "Air Inlet Node Name",
        "Air Outlet Node Name",
        "End-Use Subcategory",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const COIL_HEATING_ELECTRIC: IddObject = IddObject {
    name: "Coil:Heating:Electric",
    fields: &[
        "Name",
        "Availability Schedule Name",
        "Efficiency",
        "Nominal Capacity {W}",
        "Air Inlet Node Name",
        "Air Outlet Node Name",
        "Temperature Setpoint Node Name",
    ],
    extensible: &[],
    extensible_start: 1,
    has_name: true,
    unique: false,
};

const OUTPUT_SQLITE: IddObject = IddObject {
    name: "Output:SQLite",
    fields: &["Option Type"],
    extensible: &[],
    extensible_start: 1,
    has_name: false,
    unique: true,
};

const OUTPUT_VARIABLE_DICTIONARY: IddObject = IddObject {
    name: "Output:VariableDictionary",
    fields: &["Key Field", "Sort Option"],
    extensible: &[],
    extensible_start: 1,
    has_name: false,
    unique: true,
};

const OUTPUT_CONTROL_TABLE_STYLE: IddObject = IddObject {
    name: "OutputControl:Table:Style",
    fields: &["Column Separator", "Unit Conversion"],
    extensible: &[],
    extensible_start: 1,
    has_name: false,
    unique: true,
};

const OUTPUT_TABLE_SUMMARY_REPORTS: IddObject = IddObject {
    name: "Output:Table:SummaryReports",
    fields: &[],
    extensible: &["Report # Name"],
    extensible_start: 1,
    has_name: false,
    unique: true,
};

const UNKNOWN: IddObject = IddObject {
    name: "",
    fields: &[],
    extensible: &["Field #"],
    extensible_start: 1,
    has_name: false,
    unique: false,
};

impl IddObjectType {
    /// Gets the description of the class
    pub fn idd(&self) -> &'static IddObject {
        match self {
            Self::Version => &VERSION,
            Self::ScheduleTypeLimits => &SCHEDULE_TYPE_LIMITS,
            Self::ScheduleConstant => &SCHEDULE_CONSTANT,
            Self::ScheduleCompact => &SCHEDULE_COMPACT,
            Self::Material => &MATERIAL,
            Self::MaterialAirGap => &MATERIAL_AIR_GAP,
            Self::Construction => &CONSTRUCTION,
            Self::CurveQuadratic => &CURVE_QUADRATIC,
            Self::CurveCubic => &CURVE_CUBIC,
            Self::CurveBiquadratic => &CURVE_BIQUADRATIC,
            Self::Zone => &ZONE,
            Self::ZoneList => &ZONE_LIST,
            Self::DesignSpecificationOutdoorAir => &DESIGN_SPECIFICATION_OUTDOOR_AIR,
            Self::AirLoopHVAC => &AIR_LOOP_HVAC,
            Self::BranchList => &BRANCH_LIST,
            Self::Branch => &BRANCH,
            Self::AvailabilityManagerAssignmentList => &AVAILABILITY_MANAGER_ASSIGNMENT_LIST,
            Self::AvailabilityManagerScheduled => &AVAILABILITY_MANAGER_SCHEDULED,
            Self::AvailabilityManagerScheduledOn => &AVAILABILITY_MANAGER_SCHEDULED_ON,
            Self::AvailabilityManagerScheduledOff => &AVAILABILITY_MANAGER_SCHEDULED_OFF,
            Self::AvailabilityManagerNightCycle => &AVAILABILITY_MANAGER_NIGHT_CYCLE,
            Self::FanConstantVolume => &FAN_CONSTANT_VOLUME,
            Self::CoilHeatingElectric => &COIL_HEATING_ELECTRIC,
            Self::OutputSQLite => &OUTPUT_SQLITE,
            Self::OutputVariableDictionary => &OUTPUT_VARIABLE_DICTIONARY,
            Self::OutputControlTableStyle => &OUTPUT_CONTROL_TABLE_STYLE,
            Self::OutputTableSummaryReports => &OUTPUT_TABLE_SUMMARY_REPORTS,
            Self::Unknown => &UNKNOWN,
        }
    }

    /// The name of the class, as written in IDF files
    pub fn name(&self) -> &'static str {
        self.idd().name
    }

    /// Finds the type of a class name, ignoring ASCII case. Returns
    /// `Unknown` if the class is not supported.
    pub fn from_class_name(class_name: &str) -> Self {
        Self::iter()
            .filter(|t| *t != Self::Unknown)
            .find(|t| t.name().eq_ignore_ascii_case(class_name.trim()))
            .unwrap_or(Self::Unknown)
    }
}

impl FromStr for IddObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_class_name(s) {
            Self::Unknown => Err(format!("Unknown EnergyPlus class '{}'", s)),
            t => Ok(t),
        }
    }
}

impl Display for IddObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_from_class_name() {
        assert_eq!(
            IddObjectType::from_class_name("AvailabilityManager:NightCycle"),
            IddObjectType::AvailabilityManagerNightCycle
        );
        assert_eq!(
            IddObjectType::from_class_name("availabilitymanager:nightcycle"),
            IddObjectType::AvailabilityManagerNightCycle
        );
        assert_eq!(
            IddObjectType::from_class_name("  ZoneList "),
            IddObjectType::ZoneList
        );
        assert_eq!(
            IddObjectType::from_class_name("Building"),
            IddObjectType::Unknown
        );
        assert!("Building".parse::<IddObjectType>().is_err());
        assert_eq!(
            "schedule:constant".parse::<IddObjectType>(),
            Ok(IddObjectType::ScheduleConstant)
        );
    }

    #[test]
    fn test_field_names() {
        let idd = IddObjectType::Construction.idd();
        assert_eq!(idd.field_name(0), "Name");
        assert_eq!(idd.field_name(1), "Outside Layer");
        assert_eq!(idd.field_name(2), "Layer 2");
        assert_eq!(idd.field_name(4), "Layer 4");

        let idd = IddObjectType::AvailabilityManagerAssignmentList.idd();
        assert_eq!(idd.field_name(1), "Availability Manager 1 Object Type");
        assert_eq!(idd.field_name(2), "Availability Manager 1 Name");
        assert_eq!(idd.field_name(3), "Availability Manager 2 Object Type");

        let idd = IddObjectType::OutputTableSummaryReports.idd();
        assert_eq!(idd.field_name(0), "Report 1 Name");
        assert_eq!(idd.field_name(1), "Report 2 Name");

        let idd = IddObjectType::Unknown.idd();
        assert_eq!(idd.field_name(0), "Field 1");

        let idd = IddObjectType::ScheduleTypeLimits.idd();
        assert_eq!(idd.field_name(7), "Field 8");
    }

    #[test]
    fn test_every_class_name_is_unique() {
        let names: Vec<&str> = IddObjectType::iter()
            .filter(|t| *t != IddObjectType::Unknown)
            .map(|t| t.name())
            .collect();
        for (i, n) in names.iter().enumerate() {
            assert!(!n.is_empty());
            assert!(!names[i + 1..].contains(n), "{} is repeated", n);
            // and they can be found back
            assert_ne!(IddObjectType::from_class_name(n), IddObjectType::Unknown);
        }
    }
}
