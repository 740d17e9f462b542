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

use idf::fields::design_specification_outdoor_air as oa;
use idf::{IdfObject, Workspace};
use model::{DesignSpecificationOutdoorAir, Float, ModelError, OutdoorAirMethod};

use super::{optional_double, required_name, ReverseTranslator, Reversed};
use crate::TranslatorError;

type FlowSetter = for<'a> fn(
    &'a mut DesignSpecificationOutdoorAir,
    Float,
) -> Result<&'a mut DesignSpecificationOutdoorAir, ModelError>;

/// Each flow field, with the single-field method that uses it alone
const FLOW_FIELDS: [(OutdoorAirMethod, usize, FlowSetter); 4] = [
    (
        OutdoorAirMethod::FlowPerPerson,
        oa::OUTDOOR_AIR_FLOW_PER_PERSON,
        DesignSpecificationOutdoorAir::set_outdoor_air_flow_per_person,
    ),
    (
        OutdoorAirMethod::FlowPerArea,
        oa::OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA,
        DesignSpecificationOutdoorAir::set_outdoor_air_flow_per_floor_area,
    ),
    (
        OutdoorAirMethod::FlowPerZone,
        oa::OUTDOOR_AIR_FLOW_PER_ZONE,
        DesignSpecificationOutdoorAir::set_outdoor_air_flow_rate,
    ),
    (
        OutdoorAirMethod::AirChangesPerHour,
        oa::OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR,
        DesignSpecificationOutdoorAir::set_outdoor_air_flow_air_changes_per_hour,
    ),
];

impl ReverseTranslator {
    pub(super) fn translate_design_specification_outdoor_air(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let mut dsoa = DesignSpecificationOutdoorAir::new(required_name(obj)?);

        match obj.get_string(oa::OUTDOOR_AIR_METHOD) {
            // EnergyPlus reads a blank method as Flow/Person
            None => self.copy_flow_fields(obj, &mut dsoa, OutdoorAirMethod::FlowPerPerson, false)?,
            Some(m) => match m.parse::<OutdoorAirMethod>() {
                Ok(method) => {
                    dsoa.set_outdoor_air_method(method);
                    self.copy_flow_fields(obj, &mut dsoa, method, true)?;
                }
                Err(_) => self.log.error(format!(
                    "DesignSpecification:OutdoorAir '{}' has an unknown outdoor air method '{}'",
                    dsoa.name, m
                )),
            },
        }

        if let Some(s) = self.schedule_reference(
            workspace,
            obj,
            oa::OUTDOOR_AIR_SCHEDULE_NAME,
            DesignSpecificationOutdoorAir::OBJECT_TYPE,
            "Outdoor Air Flow Rate",
        ) {
            dsoa.set_outdoor_air_flow_rate_fraction_schedule(s);
        }
        Ok(Some(self.model.add_design_specification_outdoor_air(dsoa)?))
    }

    /// Single-field methods read only their own field; the others read
    /// every flow field that is not blank
    fn copy_flow_fields(
        &mut self,
        obj: &IdfObject,
        dsoa: &mut DesignSpecificationOutdoorAir,
        method: OutdoorAirMethod,
        required: bool,
    ) -> Result<(), TranslatorError> {
        if method.uses_all_fields() {
            for (_, index, setter) in FLOW_FIELDS {
                if let Some(v) = optional_double(obj, index) {
                    setter(dsoa, v)?;
                }
            }
            return Ok(());
        }

        for (owner, index, setter) in FLOW_FIELDS {
            if owner != method {
                continue;
            }
            match optional_double(obj, index) {
                Some(v) => {
                    setter(dsoa, v)?;
                }
                None if required => self.log.error(format!(
                    "DesignSpecification:OutdoorAir '{}' uses method {}, but its '{}' field is blank",
                    dsoa.name,
                    method,
                    obj.idd().field_name(index)
                )),
                None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing {
    use crate::ReverseTranslator;
    use idf::Workspace;
    use model::{DesignSpecificationOutdoorAir, Float, OutdoorAirMethod};
    use rstest::rstest;

    /// The four flow fields, `None` meaning defaulted
    fn flows(dsoa: &DesignSpecificationOutdoorAir) -> [Option<Float>; 4] {
        [
            (!dsoa.is_outdoor_air_flow_per_person_defaulted())
                .then(|| dsoa.outdoor_air_flow_per_person()),
            (!dsoa.is_outdoor_air_flow_per_floor_area_defaulted())
                .then(|| dsoa.outdoor_air_flow_per_floor_area()),
            (!dsoa.is_outdoor_air_flow_rate_defaulted()).then(|| dsoa.outdoor_air_flow_rate()),
            (!dsoa.is_outdoor_air_flow_air_changes_per_hour_defaulted())
                .then(|| dsoa.outdoor_air_flow_air_changes_per_hour()),
        ]
    }

    #[rstest]
    #[case("Flow/Person", Some(OutdoorAirMethod::FlowPerPerson), [Some(0.01), None, None, None], 0)]
    #[case("Flow/Area", Some(OutdoorAirMethod::FlowPerArea), [None, Some(0.0003), None, None], 0)]
    #[case("flow/zone", Some(OutdoorAirMethod::FlowPerZone), [None, None, Some(0.05), None], 0)]
    #[case("AirChanges/Hour", Some(OutdoorAirMethod::AirChangesPerHour), [None, None, None, Some(0.5)], 0)]
    #[case("Sum", Some(OutdoorAirMethod::Sum), [Some(0.01), Some(0.0003), Some(0.05), Some(0.5)], 0)]
    #[case("Maximum", Some(OutdoorAirMethod::Maximum), [Some(0.01), Some(0.0003), Some(0.05), Some(0.5)], 0)]
    #[case(
        "IndoorAirQualityProcedure",
        Some(OutdoorAirMethod::IndoorAirQualityProcedure),
        [Some(0.01), Some(0.0003), Some(0.05), Some(0.5)],
        0
    )]
    #[case("Flow/Window", None, [None, None, None, None], 1)]
    fn method_dispatch(
        #[case] method: &str,
        #[case] expected_method: Option<OutdoorAirMethod>,
        #[case] expected_flows: [Option<Float>; 4],
        #[case] errors: usize,
    ) -> Result<(), String> {
        let ws: Workspace = format!(
            "DesignSpecification:OutdoorAir, OA, {}, 0.01, 0.0003, 0.05, 0.5;",
            method
        )
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        let dsoa = model
            .get_design_specification_outdoor_air("OA")
            .map_err(|e| e.to_string())?;

        match expected_method {
            Some(m) => assert_eq!(dsoa.outdoor_air_method(), m),
            None => assert!(dsoa.is_outdoor_air_method_defaulted()),
        }
        assert_eq!(flows(dsoa), expected_flows);
        assert_eq!(translator.errors().len(), errors);
        Ok(())
    }

    #[test]
    fn blank_fields() -> Result<(), String> {
        let ws: Workspace = "
            DesignSpecification:OutdoorAir, Per Zone, Flow/Zone, 0.01;
            DesignSpecification:OutdoorAir, No Method, , 0.02, 0.0003;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);

        // The object is kept, but the flow it needs is missing
        let per_zone = model
            .get_design_specification_outdoor_air("Per Zone")
            .map_err(|e| e.to_string())?;
        assert_eq!(per_zone.outdoor_air_method(), OutdoorAirMethod::FlowPerZone);
        assert_eq!(flows(per_zone), [None, None, None, None]);
        assert_eq!(translator.errors().len(), 1);

        let no_method = model
            .get_design_specification_outdoor_air("No Method")
            .map_err(|e| e.to_string())?;
        assert!(no_method.is_outdoor_air_method_defaulted());
        assert_eq!(flows(no_method), [Some(0.02), None, None, None]);
        Ok(())
    }

    #[test]
    fn schedule() -> Result<(), String> {
        let ws: Workspace = "
            DesignSpecification:OutdoorAir, Office, Flow/Person, 0.01, , , , Occupancy;
            DesignSpecification:OutdoorAir, Lobby, Flow/Person, 0.01, , , , Nowhere;
            Schedule:Constant, Occupancy, , 0.5;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);

        let office = model
            .get_design_specification_outdoor_air("Office")
            .map_err(|e| e.to_string())?;
        assert_eq!(office.outdoor_air_flow_rate_fraction_schedule().ok(), Some("Occupancy"));

        let lobby = model
            .get_design_specification_outdoor_air("Lobby")
            .map_err(|e| e.to_string())?;
        assert!(lobby.outdoor_air_flow_rate_fraction_schedule().is_err());
        assert_eq!(translator.warnings().len(), 1);
        Ok(())
    }

    #[test]
    fn schedule_limits() -> Result<(), String> {
        let ws: Workspace = "
            ScheduleTypeLimits, OnOff, 0, 1, Discrete, Availability;
            ScheduleTypeLimits, Temperature, -60, 200, Continuous, Temperature;
            Schedule:Constant, Always On, OnOff, 1;
            Schedule:Constant, Setpoint, Temperature, 21;
            DesignSpecification:OutdoorAir, On, Flow/Person, 0.01, , , , Always On;
            DesignSpecification:OutdoorAir, Hot, Flow/Person, 0.02, , , , Setpoint;
        "
        .parse()
        .map_err(|e: idf::IdfError| e.to_string())?;

        let mut translator = ReverseTranslator::new();
        let model = translator.translate_workspace(&ws);
        assert_eq!(model.design_specifications_outdoor_air.len(), 2);

        // Discrete limits within [0, 1] fit the fraction
        let on = model
            .get_design_specification_outdoor_air("On")
            .map_err(|e| e.to_string())?;
        assert_eq!(on.outdoor_air_flow_rate_fraction_schedule().ok(), Some("Always On"));

        // Temperatures do not; the object is kept without its schedule
        let hot = model
            .get_design_specification_outdoor_air("Hot")
            .map_err(|e| e.to_string())?;
        assert!(hot.outdoor_air_flow_rate_fraction_schedule().is_err());
        assert_eq!(hot.outdoor_air_flow_per_person(), 0.02);
        assert_eq!(translator.warnings().len(), 1);
        assert!(translator.errors().is_empty());
        // The schedule itself is still imported
        assert!(model.get_schedule("Setpoint").is_ok());
        Ok(())
    }
}
