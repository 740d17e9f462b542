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

use idf::fields::{air_loop_hvac as al, availability_manager_scheduled as sch};
use idf::{IddObjectType, IdfObject};
use model::{AirLoopHVAC, Model, ModelObjectKind};

use super::{ForwardTranslator, Translated};

/// The inlet and outlet nodes of a supply component of an [`AirLoopHVAC`].
/// Components are chained in order, from the supply inlet node of the loop
/// to its supply outlet node.
///
/// ```rust
/// use energyplus::forward_translator::supply_component_nodes;
/// use model::AirLoopHVAC;
///
/// let mut air_loop = AirLoopHVAC::new("Loop");
/// air_loop.push_supply_component("Fan").push_supply_component("Coil");
///
/// let (inlet, outlet) = supply_component_nodes(&air_loop, "Fan").unwrap();
/// assert_eq!(inlet, "Loop Supply Inlet Node");
/// assert_eq!(outlet, "Fan Outlet Node");
///
/// let (inlet, outlet) = supply_component_nodes(&air_loop, "Coil").unwrap();
/// assert_eq!(inlet, "Fan Outlet Node");
/// assert_eq!(outlet, "Loop Supply Outlet Node");
///
/// assert!(supply_component_nodes(&air_loop, "Humidifier").is_none());
/// ```
pub fn supply_component_nodes(air_loop: &AirLoopHVAC, component: &str) -> Option<(String, String)> {
    let components = air_loop.supply_components();
    let i = components.iter().position(|c| c == component)?;
    let inlet = if i == 0 {
        supply_inlet_node(air_loop)
    } else {
        format!("{} Outlet Node", components[i - 1])
    };
    let outlet = if i + 1 == components.len() {
        supply_outlet_node(air_loop)
    } else {
        format!("{} Outlet Node", components[i])
    };
    Some((inlet, outlet))
}

fn supply_inlet_node(air_loop: &AirLoopHVAC) -> String {
    format!("{} Supply Inlet Node", air_loop.name)
}

fn supply_outlet_node(air_loop: &AirLoopHVAC) -> String {
    format!("{} Supply Outlet Node", air_loop.name)
}

impl ForwardTranslator {
    /// The class name of the main object written for a model object
    fn class_name_of(&self, index: usize) -> Option<String> {
        self.workspace.get(index).map(|o| o.class_name().to_string())
    }

    pub(super) fn translate_air_loop_hvac(&mut self, model: &Model, name: &str) -> Translated {
        let air_loop = model.get_air_loop_hvac(name)?;
        let loop_name = &air_loop.name;

        for z in air_loop.thermal_zones() {
            self.translate_and_map_model_object(model, ModelObjectKind::ThermalZone, z);
        }

        // Supply side
        let branch_name = format!("{} Main Branch", loop_name);
        let mut branch = IdfObject::new(IddObjectType::Branch);
        branch.set_name(&branch_name)?;
        for c in air_loop.supply_components() {
            let index = self.translate_and_map_model_object(model, ModelObjectKind::HVAC, c);
            let class = index.and_then(|i| self.class_name_of(i));
            let nodes = supply_component_nodes(air_loop, c);
            match (class, nodes) {
                (Some(class), Some((inlet, outlet))) => {
                    branch.push_extensible_group(&[class, c.clone(), inlet, outlet])?;
                }
                _ => self.log.warn(format!(
                    "component '{}' is missing from the supply side of AirLoopHVAC '{}'",
                    c, loop_name
                )),
            }
        }
        let branch_list_name = if branch.extensible_groups().is_empty() {
            self.log.warn(format!(
                "AirLoopHVAC '{}' has no supply components; no Branch is written",
                loop_name
            ));
            None
        } else {
            let list_name = format!("{} Supply Branches", loop_name);
            let mut list = IdfObject::new(IddObjectType::BranchList);
            list.set_name(&list_name)?;
            list.push_extensible_group(&[&branch_name])?;
            self.add(branch);
            self.add(list);
            Some(list_name)
        };

        // Availability
        let managers_name = format!("{} Availability Manager List", loop_name);
        let mut managers = IdfObject::new(IddObjectType::AvailabilityManagerAssignmentList);
        managers.set_name(&managers_name)?;
        for m in air_loop.availability_managers() {
            let index =
                self.translate_and_map_model_object(model, ModelObjectKind::AvailabilityManager, m);
            if let Some(class) = index.and_then(|i| self.class_name_of(i)) {
                managers.push_extensible_group(&[class, m.clone()])?;
            }
        }
        let loop_schedule = air_loop.availability_schedule().ok();
        if loop_schedule.is_some() || managers.extensible_groups().is_empty() {
            let schedule = self.schedule_or_always_on(model, loop_schedule)?;
            let scheduled_name = format!("{} Availability Manager", loop_name);
            let mut scheduled = IdfObject::new(IddObjectType::AvailabilityManagerScheduled);
            scheduled.set_name(&scheduled_name)?;
            scheduled.set_string(sch::SCHEDULE_NAME, schedule)?;
            let class = scheduled.class_name().to_string();
            self.add(scheduled);
            managers.push_extensible_group(&[class, scheduled_name])?;
        }
        self.add(managers);

        let mut obj = IdfObject::new(IddObjectType::AirLoopHVAC);
        obj.set_name(loop_name)?;
        obj.set_string(al::AVAILABILITY_MANAGER_LIST_NAME, managers_name)?;
        match air_loop.design_supply_air_flow_rate().value() {
            Some(v) => obj.set_double(al::DESIGN_SUPPLY_AIR_FLOW_RATE, v as f64)?,
            None => obj.set_autosize(al::DESIGN_SUPPLY_AIR_FLOW_RATE)?,
        }
        if let Some(list_name) = branch_list_name {
            obj.set_string(al::BRANCH_LIST_NAME, list_name)?;
        }
        obj.set_string(al::SUPPLY_SIDE_INLET_NODE_NAME, supply_inlet_node(air_loop))?;
        obj.set_string(
            al::DEMAND_SIDE_OUTLET_NODE_NAME,
            format!("{} Demand Outlet Node", loop_name),
        )?;
        obj.set_string(
            al::DEMAND_SIDE_INLET_NODE_NAMES,
            format!("{} Demand Inlet Node", loop_name),
        )?;
        obj.set_string(al::SUPPLY_SIDE_OUTLET_NODE_NAMES, supply_outlet_node(air_loop))?;
        obj.set_double(
            al::DESIGN_RETURN_AIR_FLOW_FRACTION,
            air_loop.design_return_air_flow_fraction() as f64,
        )?;
        Ok(Some(obj))
    }
}

#[cfg(test)]
mod testing {
    use crate::forward_translator::ALWAYS_ON_DISCRETE;
    use crate::ForwardTranslator;
    use idf::{IddObjectType, Workspace};
    use model::{
        AirLoopHVAC, AvailabilityManagerNightCycle, CoilHeatingElectric, FanConstantVolume, Model,
        ModelError, NightCycleControlType, ScheduleConstant, ThermalZone,
    };
    use pretty_assertions::assert_eq;

    fn loop_model() -> Result<Model, ModelError> {
        let mut model = Model::default();
        model.add_schedule(ScheduleConstant::new("Always On", 1.).into())?;
        model.add_thermal_zone(ThermalZone::new("Kitchen"))?;
        model.add_thermal_zone(ThermalZone::new("Bedroom"))?;
        model.add_hvac(FanConstantVolume::new("Fan").into())?;
        model.add_hvac(CoilHeatingElectric::new("Coil").into())?;
        model.add_hvac(FanConstantVolume::new("Spare Fan").into())?;

        let mut nc = AvailabilityManagerNightCycle::new("Night Cycle");
        nc.set_control_type(NightCycleControlType::CycleOnAny);
        model.add_availability_manager(nc.into())?;

        let mut l = AirLoopHVAC::new("Main Loop");
        l.set_availability_schedule("Always On");
        l.push_thermal_zone("Kitchen")
            .push_thermal_zone("Bedroom")
            .push_supply_component("Fan")
            .push_supply_component("Coil")
            .push_availability_manager("Night Cycle");
        model.add_air_loop_hvac(l)?;
        Ok(model)
    }

    fn groups(ws: &Workspace, object_type: IddObjectType, name: &str) -> Vec<Vec<String>> {
        ws.object_by_type_and_name(object_type, name)
            .map(|o| o.extensible_groups().iter().map(|g| g.to_vec()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn full_loop() -> Result<(), ModelError> {
        let model = loop_model()?;
        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);

        let branch = groups(&ws, IddObjectType::Branch, "Main Loop Main Branch");
        assert_eq!(
            branch,
            vec![
                vec![
                    "Fan:ConstantVolume".to_string(),
                    "Fan".to_string(),
                    "Main Loop Supply Inlet Node".to_string(),
                    "Fan Outlet Node".to_string()
                ],
                vec![
                    "Coil:Heating:Electric".to_string(),
                    "Coil".to_string(),
                    "Fan Outlet Node".to_string(),
                    "Main Loop Supply Outlet Node".to_string()
                ],
            ]
        );
        assert_eq!(
            groups(&ws, IddObjectType::BranchList, "Main Loop Supply Branches"),
            vec![vec!["Main Loop Main Branch".to_string()]]
        );

        let managers = groups(
            &ws,
            IddObjectType::AvailabilityManagerAssignmentList,
            "Main Loop Availability Manager List",
        );
        assert_eq!(
            managers,
            vec![
                vec!["AvailabilityManager:NightCycle".to_string(), "Night Cycle".to_string()],
                vec![
                    "AvailabilityManager:Scheduled".to_string(),
                    "Main Loop Availability Manager".to_string()
                ],
            ]
        );
        let scheduled = ws
            .object_by_type_and_name(
                IddObjectType::AvailabilityManagerScheduled,
                "Main Loop Availability Manager",
            )
            .map(|o| o.get_string(1));
        assert_eq!(scheduled, Some(Some("Always On")));

        let air_loop = &ws.objects_by_type(IddObjectType::AirLoopHVAC)[0];
        assert_eq!(air_loop.get_string(2), Some("Main Loop Availability Manager List"));
        assert!(air_loop.is_autosized(3));
        assert_eq!(air_loop.get_string(4), Some("Main Loop Supply Branches"));
        assert_eq!(air_loop.get_string(6), Some("Main Loop Supply Inlet Node"));
        assert_eq!(air_loop.get_string(9), Some("Main Loop Supply Outlet Node"));
        assert_eq!(air_loop.get_double(10), Some(1.));

        // Everything is written once
        assert_eq!(ws.objects_by_type(IddObjectType::Zone).len(), 2);
        assert_eq!(ws.objects_by_type(IddObjectType::FanConstantVolume).len(), 1);

        // The spare fan is left out
        assert_eq!(translator.warnings().len(), 1);
        assert!(translator.errors().is_empty());
        Ok(())
    }

    #[test]
    fn empty_loop() -> Result<(), ModelError> {
        let mut model = Model::default();
        model.add_air_loop_hvac(AirLoopHVAC::new("Empty"))?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model(&model);
        assert!(ws.objects_by_type(IddObjectType::Branch).is_empty());
        let managers = groups(
            &ws,
            IddObjectType::AvailabilityManagerAssignmentList,
            "Empty Availability Manager List",
        );
        assert_eq!(
            managers,
            vec![vec![
                "AvailabilityManager:Scheduled".to_string(),
                "Empty Availability Manager".to_string()
            ]]
        );
        let scheduled = &ws.objects_by_type(IddObjectType::AvailabilityManagerScheduled)[0];
        assert_eq!(scheduled.get_string(1), Some(ALWAYS_ON_DISCRETE));
        assert_eq!(ws.objects_by_type(IddObjectType::AirLoopHVAC)[0].get_string(4), None);
        assert_eq!(translator.warnings().len(), 1);
        Ok(())
    }
}
