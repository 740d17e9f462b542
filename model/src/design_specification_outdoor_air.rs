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

/// How the outdoor air flow rates of a [`DesignSpecificationOutdoorAir`]
/// are combined into the design outdoor air flow of a zone
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum OutdoorAirMethod {
    /// Flow per person times the number of people
    #[serde(rename = "Flow/Person")]
    #[strum(serialize = "Flow/Person")]
    FlowPerPerson,

    /// Flow per floor area times the floor area
    #[serde(rename = "Flow/Area")]
    #[strum(serialize = "Flow/Area")]
    FlowPerArea,

    /// A fixed flow for the zone
    #[serde(rename = "Flow/Zone")]
    #[strum(serialize = "Flow/Zone")]
    FlowPerZone,

    /// Air changes per hour times the zone volume
    #[serde(rename = "AirChanges/Hour")]
    #[strum(serialize = "AirChanges/Hour")]
    AirChangesPerHour,

    /// The sum of all the flows
    Sum,

    /// The maximum of all the flows
    Maximum,

    /// Driven by the indoor CO2 concentration
    IndoorAirQualityProcedure,

    /// Proportional control with the design occupancy
    ProportionalControlBasedOnDesignOccupancy,

    /// Proportional control with the occupancy schedule
    ProportionalControlBasedOnOccupancySchedule,
}

impl OutdoorAirMethod {
    /// Checks whether the method combines every flow field (as opposed to
    /// using a single one)
    pub fn uses_all_fields(&self) -> bool {
        !matches!(
            self,
            Self::FlowPerPerson | Self::FlowPerArea | Self::FlowPerZone | Self::AirChangesPerHour
        )
    }
}

/// The outdoor air requirements of a zone
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// DesignSpecificationOutdoorAir {
///     name: "Office OA",
///     outdoor_air_method: "Sum",
///     outdoor_air_flow_per_person: 0.0025,
///     outdoor_air_flow_per_floor_area: 0.0003,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, ObjectIO, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignSpecificationOutdoorAir {
    /// The name of the object
    pub name: String,

    /// How the flows are combined
    #[defaults_to(OutdoorAirMethod::FlowPerPerson)]
    outdoor_air_method: Option<OutdoorAirMethod>,

    /// Outdoor air flow per person, in `m3/s.person`
    #[defaults_to(0.00944)]
    #[minimum(0.0)]
    outdoor_air_flow_per_person: Option<Float>,

    /// Outdoor air flow per floor area, in `m3/s.m2`
    #[defaults_to(0.0)]
    #[minimum(0.0)]
    outdoor_air_flow_per_floor_area: Option<Float>,

    /// Outdoor air flow for the whole zone, in `m3/s`
    #[defaults_to(0.0)]
    #[minimum(0.0)]
    outdoor_air_flow_rate: Option<Float>,

    /// Air changes per hour, in `1/h`
    #[defaults_to(0.0)]
    #[minimum(0.0)]
    outdoor_air_flow_air_changes_per_hour: Option<Float>,

    /// Multiplies the design outdoor air flow
    #[schedule("Outdoor Air Flow Rate")]
    outdoor_air_flow_rate_fraction_schedule: Option<String>,
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let mut hardcoded_ref = DesignSpecificationOutdoorAir::new("Office OA");
        hardcoded_ref
            .set_outdoor_air_method(OutdoorAirMethod::Sum)
            .set_outdoor_air_flow_per_person(0.0025)
            .map_err(|e| e.to_string())?;

        let from_hardcoded_json: DesignSpecificationOutdoorAir = json5::from_str(
            "{
            name: 'Office OA',
            outdoor_air_method: 'Sum',
            outdoor_air_flow_per_person: 0.0025,
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(hardcoded_ref, from_hardcoded_json);

        let per_area: DesignSpecificationOutdoorAir = json5::from_str(
            "{
            name: 'Per Area',
            outdoor_air_method: 'Flow/Area',
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(per_area.outdoor_air_method(), OutdoorAirMethod::FlowPerArea);
        Ok(())
    }

    #[test]
    fn defaults() {
        let oa = DesignSpecificationOutdoorAir::new("OA");
        assert_eq!(oa.outdoor_air_method(), OutdoorAirMethod::FlowPerPerson);
        assert!(oa.is_outdoor_air_method_defaulted());
        assert!((oa.outdoor_air_flow_per_person() - 0.00944).abs() < 1e-9);
        assert_eq!(oa.outdoor_air_flow_per_floor_area(), 0.0);
        assert!(oa.schedule_fields().is_empty());
    }

    #[test]
    fn method_strings() {
        assert_eq!(OutdoorAirMethod::FlowPerPerson.to_string(), "Flow/Person");
        assert_eq!(
            "airchanges/hour".parse::<OutdoorAirMethod>(),
            Ok(OutdoorAirMethod::AirChangesPerHour)
        );
        assert_eq!("SUM".parse::<OutdoorAirMethod>(), Ok(OutdoorAirMethod::Sum));
        assert!("Flow/Window".parse::<OutdoorAirMethod>().is_err());
        assert!(OutdoorAirMethod::Maximum.uses_all_fields());
        assert!(!OutdoorAirMethod::FlowPerZone.uses_all_fields());
    }

    #[test]
    fn schedule_field() {
        let mut oa = DesignSpecificationOutdoorAir::new("OA");
        assert!(oa.set_schedule_field("Outdoor Air Flow Rate", Some("Occupancy".into())));
        assert_eq!(oa.schedule_fields(), vec![("Outdoor Air Flow Rate", "Occupancy")]);
        assert!(!oa.set_schedule_field("Availability", Some("Occupancy".into())));
    }
}
