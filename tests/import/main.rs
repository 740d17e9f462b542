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

use model::{HVAC, Model, NightCycleControlType, NightCycleZoneRole, OutdoorAirMethod};
use pretty_assertions::assert_eq;
use studio::run_translation::{run_import, run_translate, ImportOptions, TranslateOptions};
use studio::{LogLevel, LogMessage, ReverseTranslator, Workspace};

fn count(messages: &[LogMessage], level: LogLevel) -> usize {
    messages.iter().filter(|m| m.level == level).count()
}

#[test]
fn office() {
    let mut out: Vec<u8> = Vec::new();
    let messages = run_import(
        &ImportOptions {
            input_file: "./tests/import/office.idf".into(),
            output: None,
        },
        &mut out,
    )
    .unwrap();

    // The dangling schedule, the loop and the ideal loads
    assert_eq!(count(&messages, LogLevel::Warn), 3, "{:?}", messages);
    // Flow/Zone without a flow per zone
    assert_eq!(count(&messages, LogLevel::Error), 1, "{:?}", messages);

    let model = Model::from_json(&String::from_utf8(out).unwrap()).unwrap();
    assert_eq!(model.thermal_zones.len(), 2);
    assert!(model.air_loops.is_empty());

    let office = model.get_thermal_zone("Office").unwrap();
    assert_eq!(office.multiplier(), 2);
    assert_eq!(office.floor_area().unwrap(), 60.);
    assert!(office.volume().is_err());

    let wall = model.get_construction("Cavity Wall").unwrap();
    assert_eq!(wall.layers(), &["Brick", "Cavity", "Brick"]);

    // Single-field methods keep only their own field
    let oa = model
        .get_design_specification_outdoor_air("Office Outdoor Air")
        .unwrap();
    assert_eq!(oa.outdoor_air_method(), OutdoorAirMethod::FlowPerArea);
    assert_eq!(oa.outdoor_air_flow_per_floor_area(), 0.0003);
    assert!(oa.is_outdoor_air_flow_per_person_defaulted());
    assert_eq!(
        oa.outdoor_air_flow_rate_fraction_schedule().unwrap(),
        "Office Hours"
    );

    let oa = model
        .get_design_specification_outdoor_air("Meeting Room Outdoor Air")
        .unwrap();
    assert_eq!(oa.outdoor_air_method(), OutdoorAirMethod::Sum);
    assert_eq!(oa.outdoor_air_flow_per_person(), 0.01);
    assert_eq!(oa.outdoor_air_flow_rate(), 0.05);
    assert!(oa.is_outdoor_air_flow_per_floor_area_defaulted());

    let oa = model
        .get_design_specification_outdoor_air("Storage Outdoor Air")
        .unwrap();
    assert_eq!(oa.outdoor_air_method(), OutdoorAirMethod::FlowPerZone);
    assert!(oa.is_outdoor_air_flow_rate_defaulted());

    let nc = model
        .get_availability_manager("Night Cycle")
        .unwrap()
        .as_night_cycle()
        .unwrap();
    assert_eq!(
        nc.control_type(),
        NightCycleControlType::CycleOnAnyCoolingOrHeatingZone
    );
    assert_eq!(nc.thermostat_tolerance(), 1.5);
    assert_eq!(nc.cycling_run_time(), 1800.);
    assert!(nc.thermal_zones_for(NightCycleZoneRole::Control).is_empty());
    assert_eq!(
        nc.thermal_zones_for(NightCycleZoneRole::CoolingControl),
        &["Office", "Meeting Room"]
    );
    assert_eq!(
        nc.thermal_zones_for(NightCycleZoneRole::HeatingControl),
        &["Office"]
    );

    let off = model.get_availability_manager("Holidays Off").unwrap();
    assert!(off.schedule_fields().is_empty());

    match model.get_hvac("Supply Fan").unwrap() {
        HVAC::FanConstantVolume(fan) => {
            assert_eq!(fan.pressure_rise(), 500.);
            assert!(fan.maximum_flow_rate().is_autosized());
            assert_eq!(fan.availability_schedule().unwrap(), "Office Hours");
        }
        _ => panic!("expected a fan"),
    }
}

#[test]
fn round_trip() {
    let mut out: Vec<u8> = Vec::new();
    run_translate(
        &TranslateOptions {
            input_file: "./tests/translate/night_cycle.sml".into(),
            ..TranslateOptions::default()
        },
        &mut out,
    )
    .unwrap();
    let ws: Workspace = String::from_utf8(out).unwrap().parse().unwrap();

    let mut translator = ReverseTranslator::new();
    let model = translator.translate_workspace(&ws);
    assert!(translator.errors().is_empty(), "{:?}", translator.errors());

    assert_eq!(model.thermal_zones.len(), 2);
    assert_eq!(model.get_thermal_zone("Office").unwrap().multiplier(), 2);
    assert_eq!(
        model.get_construction("Cavity Wall").unwrap().layers(),
        &["Brick", "Cavity", "Brick"]
    );

    let oa = model
        .get_design_specification_outdoor_air("Office Outdoor Air")
        .unwrap();
    assert_eq!(oa.outdoor_air_method(), OutdoorAirMethod::FlowPerArea);
    assert_eq!(oa.outdoor_air_flow_per_floor_area(), 0.0003);

    let nc = model
        .get_availability_manager("Night Cycle")
        .unwrap()
        .as_night_cycle()
        .unwrap();
    assert_eq!(nc.control_type(), NightCycleControlType::CycleOnControlZone);
    assert_eq!(
        nc.thermal_zones_for(NightCycleZoneRole::Control),
        &["Office"]
    );
    assert_eq!(
        nc.applicability_schedule().unwrap(),
        "Always On Discrete"
    );
}
