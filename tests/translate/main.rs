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

use idf::{IddObjectType, IdfObject, Workspace};
use pretty_assertions::assert_eq;
use studio::run_translation::{run_translate, TranslateOptions};
use studio::LogLevel;

const MODEL: &str = "./tests/translate/night_cycle.sml";

fn translate(options: TranslateOptions) -> Workspace {
    let mut out: Vec<u8> = Vec::new();
    let messages = run_translate(&options, &mut out).unwrap();
    let errors: Vec<_> = messages
        .iter()
        .filter(|m| m.level == LogLevel::Error)
        .collect();
    assert!(errors.is_empty(), "{:?}", errors);

    let idf = String::from_utf8(out).unwrap();
    idf.parse::<Workspace>().unwrap()
}

fn get<'a>(ws: &'a Workspace, t: IddObjectType, name: &str) -> &'a IdfObject {
    ws.object_by_type_and_name(t, name)
        .unwrap_or_else(|| panic!("no {:?} called '{}'", t, name))
}

fn groups(obj: &IdfObject) -> Vec<Vec<String>> {
    obj.extensible_groups().iter().map(|g| g.to_vec()).collect()
}

#[test]
fn night_cycle_office() {
    let ws = translate(TranslateOptions {
        input_file: MODEL.into(),
        ..TranslateOptions::default()
    });

    // Front matter
    assert_eq!(ws.objects()[0].object_type(), IddObjectType::Version);
    assert_eq!(ws.objects_by_type(IddObjectType::OutputSQLite).len(), 1);
    assert_eq!(ws.objects_by_type(IddObjectType::OutputControlTableStyle).len(), 1);
    let reports = ws.objects_by_type(IddObjectType::OutputTableSummaryReports);
    assert_eq!(groups(reports[0]), vec![vec!["AllSummary".to_string()]]);
    let dictionary = ws.objects_by_type(IddObjectType::OutputVariableDictionary);
    assert_eq!(dictionary[0].get_string(1), Some("Unsorted"));

    // Resources
    assert_eq!(ws.objects_by_type(IddObjectType::Zone).len(), 2);
    let wall = get(&ws, IddObjectType::Construction, "Cavity Wall");
    assert_eq!(
        wall.fields()[1..].to_vec(),
        vec!["Brick".to_string(), "Cavity".into(), "Brick".into()]
    );
    assert_eq!(ws.objects_by_type(IddObjectType::Material).len(), 1);
    assert_eq!(ws.objects_by_type(IddObjectType::MaterialAirGap).len(), 1);

    let oa = get(
        &ws,
        IddObjectType::DesignSpecificationOutdoorAir,
        "Office Outdoor Air",
    );
    assert_eq!(oa.get_string(1), Some("Flow/Area"));
    assert_eq!(oa.get_double(3), Some(0.0003));
    assert_eq!(oa.get_string(6), Some("Half Outdoor Air"));

    // The loop
    let air_loop = get(&ws, IddObjectType::AirLoopHVAC, "Main Loop");
    assert_eq!(air_loop.get_string(2), Some("Main Loop Availability Manager List"));
    assert!(air_loop.is_autosized(3));
    assert_eq!(air_loop.get_string(4), Some("Main Loop Supply Branches"));

    let branch = get(&ws, IddObjectType::Branch, "Main Loop Main Branch");
    assert_eq!(
        groups(branch),
        vec![
            vec![
                "Fan:ConstantVolume".to_string(),
                "Supply Fan".into(),
                "Main Loop Supply Inlet Node".into(),
                "Supply Fan Outlet Node".into(),
            ],
            vec![
                "Coil:Heating:Electric".to_string(),
                "Heating Coil".into(),
                "Supply Fan Outlet Node".into(),
                "Main Loop Supply Outlet Node".into(),
            ],
        ]
    );

    let fan = get(&ws, IddObjectType::FanConstantVolume, "Supply Fan");
    assert_eq!(fan.get_string(1), Some("Office Hours"));
    assert_eq!(fan.get_double(3), Some(500.));

    let coil = get(&ws, IddObjectType::CoilHeatingElectric, "Heating Coil");
    assert_eq!(coil.get_double(3), Some(5000.));
    assert_eq!(coil.get_string(6), Some("Main Loop Supply Outlet Node"));

    // Availability
    let managers = get(
        &ws,
        IddObjectType::AvailabilityManagerAssignmentList,
        "Main Loop Availability Manager List",
    );
    assert_eq!(
        groups(managers),
        vec![
            vec![
                "AvailabilityManager:NightCycle".to_string(),
                "Night Cycle".into()
            ],
            vec![
                "AvailabilityManager:Scheduled".to_string(),
                "Main Loop Availability Manager".into()
            ],
        ]
    );
    let scheduled = get(
        &ws,
        IddObjectType::AvailabilityManagerScheduled,
        "Main Loop Availability Manager",
    );
    assert_eq!(scheduled.get_string(1), Some("Office Hours"));

    let nc = get(&ws, IddObjectType::AvailabilityManagerNightCycle, "Night Cycle");
    assert_eq!(nc.get_string(1), Some("Always On Discrete"));
    assert_eq!(nc.get_string(2), Some("Office Hours"));
    assert_eq!(nc.get_string(3), Some("CycleOnControlZone"));
    assert_eq!(nc.get_string(7), Some("Night Cycle Control Zones List"));
    for i in 8..=10 {
        assert_eq!(nc.get_string(i), None);
    }
    let zones = get(&ws, IddObjectType::ZoneList, "Night Cycle Control Zones List");
    assert_eq!(groups(zones), vec![vec!["Office".to_string()]]);
}

#[test]
fn default_zone_lists() {
    // Without control zones, the manager looks at all the zones of the loop
    let source = std::fs::read_to_string(MODEL)
        .unwrap()
        .replace("control_thermal_zones: [\"Office\"],", "");
    let path = std::env::temp_dir().join("studio_default_zone_lists.sml");
    std::fs::write(&path, source).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let messages = run_translate(
        &TranslateOptions {
            input_file: path.to_string_lossy().to_string(),
            ..TranslateOptions::default()
        },
        &mut out,
    )
    .unwrap();
    assert!(messages
        .iter()
        .any(|m| m.level == LogLevel::Info && m.message.contains("using every zone")));

    let ws: Workspace = String::from_utf8(out).unwrap().parse().unwrap();
    let zones = get(&ws, IddObjectType::ZoneList, "Night Cycle Control Zones List");
    assert_eq!(
        groups(zones),
        vec![vec!["Office".to_string()], vec!["Meeting Room".to_string()]]
    );
}

#[test]
fn output_options() {
    let ws = translate(TranslateOptions {
        input_file: MODEL.into(),
        no_sqlite: true,
        no_variable_dictionary: true,
        ip_units: true,
        ..TranslateOptions::default()
    });
    assert!(ws.objects_by_type(IddObjectType::OutputSQLite).is_empty());
    assert!(ws
        .objects_by_type(IddObjectType::OutputVariableDictionary)
        .is_empty());
    let style = ws.objects_by_type(IddObjectType::OutputControlTableStyle);
    assert_eq!(style[0].get_string(1), Some("InchPound"));
}
