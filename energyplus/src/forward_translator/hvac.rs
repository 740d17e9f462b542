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

use idf::fields::{coil_heating_electric as coil, fan_constant_volume as fan};
use idf::{IddObjectType, IdfObject};
use model::{Autosize, Model, HVAC};

use super::{supply_component_nodes, ForwardTranslator, Translated};

/// Writes a field that can be autosized
fn set_autosizable(obj: &mut IdfObject, index: usize, v: Autosize) -> Result<(), idf::IdfError> {
    match v.value() {
        Some(v) => obj.set_double(index, v as f64),
        None => obj.set_autosize(index),
    }
}

impl ForwardTranslator {
    /// Supply components only exist within an `AirLoopHVAC`, which gives
    /// them their nodes.
    pub(super) fn translate_hvac(&mut self, model: &Model, name: &str) -> Translated {
        let component = model.get_hvac(name)?;
        let nodes = model
            .air_loop_hvac_for_hvac(name)
            .and_then(|l| supply_component_nodes(l, name));
        let Some((inlet, outlet)) = nodes else {
            self.log.warn(format!(
                "{} '{}' is not in the supply side of any AirLoopHVAC; it will not be translated",
                component.object_type(),
                name
            ));
            return Ok(None);
        };

        let obj = match component {
            HVAC::FanConstantVolume(f) => {
                let schedule = self.schedule_or_always_on(model, f.availability_schedule().ok())?;

                let mut obj = IdfObject::new(IddObjectType::FanConstantVolume);
                obj.set_name(&f.name)?;
                obj.set_string(fan::AVAILABILITY_SCHEDULE_NAME, schedule)?;
                obj.set_double(fan::FAN_TOTAL_EFFICIENCY, f.fan_total_efficiency() as f64)?;
                obj.set_double(fan::PRESSURE_RISE, f.pressure_rise() as f64)?;
                set_autosizable(&mut obj, fan::MAXIMUM_FLOW_RATE, f.maximum_flow_rate())?;
                obj.set_double(fan::MOTOR_EFFICIENCY, f.motor_efficiency() as f64)?;
                obj.set_double(
                    fan::MOTOR_IN_AIRSTREAM_FRACTION,
                    f.motor_in_airstream_fraction() as f64,
                )?;
                obj.set_string(fan::AIR_INLET_NODE_NAME, inlet)?;
                obj.set_string(fan::AIR_OUTLET_NODE_NAME, outlet)?;
                obj.set_string(fan::END_USE_SUBCATEGORY, f.end_use_subcategory())?;
                obj
            }
            HVAC::CoilHeatingElectric(c) => {
                let schedule = self.schedule_or_always_on(model, c.availability_schedule().ok())?;

                let mut obj = IdfObject::new(IddObjectType::CoilHeatingElectric);
                obj.set_name(&c.name)?;
                obj.set_string(coil::AVAILABILITY_SCHEDULE_NAME, schedule)?;
                obj.set_double(coil::EFFICIENCY, c.efficiency() as f64)?;
                set_autosizable(&mut obj, coil::NOMINAL_CAPACITY, c.nominal_capacity())?;
                obj.set_string(coil::AIR_INLET_NODE_NAME, inlet)?;
                // The coil controls the temperature at its own outlet
                obj.set_string(coil::TEMPERATURE_SETPOINT_NODE_NAME, outlet.clone())?;
                obj.set_string(coil::AIR_OUTLET_NODE_NAME, outlet)?;
                obj
            }
        };
        Ok(Some(obj))
    }
}

#[cfg(test)]
mod testing {
    use crate::forward_translator::ALWAYS_ON_DISCRETE;
    use crate::ForwardTranslator;
    use idf::IddObjectType;
    use model::{
        AirLoopHVAC, Autosize, CoilHeatingElectric, FanConstantVolume, Model, ModelError,
        ModelObjectKind,
    };

    #[test]
    fn fan_and_coil() -> Result<(), ModelError> {
        let mut model = Model::default();
        let mut fan = FanConstantVolume::new("Fan");
        fan.set_pressure_rise(600.);
        model.add_hvac(fan.into())?;
        let mut coil = CoilHeatingElectric::new("Coil");
        coil.set_nominal_capacity(Autosize::Value(3000.));
        model.add_hvac(coil.into())?;

        let mut l = AirLoopHVAC::new("Loop");
        l.push_supply_component("Fan").push_supply_component("Coil");
        model.add_air_loop_hvac(l)?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::HVAC, "Fan");
        let fan = &ws.objects_by_type(IddObjectType::FanConstantVolume)[0];
        assert_eq!(fan.get_string(1), Some(ALWAYS_ON_DISCRETE));
        assert_eq!(fan.get_double(3), Some(600.));
        assert!(fan.is_autosized(4));
        assert_eq!(fan.get_string(7), Some("Loop Supply Inlet Node"));
        assert_eq!(fan.get_string(8), Some("Fan Outlet Node"));
        assert_eq!(fan.get_string(9), Some("General"));

        let ws = translator.translate_model_object(&model, ModelObjectKind::HVAC, "Coil");
        let coil = &ws.objects_by_type(IddObjectType::CoilHeatingElectric)[0];
        assert_eq!(coil.get_double(3), Some(3000.));
        assert_eq!(coil.get_string(4), Some("Fan Outlet Node"));
        assert_eq!(coil.get_string(5), Some("Loop Supply Outlet Node"));
        assert_eq!(coil.get_string(6), Some("Loop Supply Outlet Node"));
        Ok(())
    }

    #[test]
    fn outside_a_loop() -> Result<(), ModelError> {
        let mut model = Model::default();
        model.add_hvac(FanConstantVolume::new("Lonely Fan").into())?;

        let mut translator = ForwardTranslator::new();
        let ws = translator.translate_model_object(&model, ModelObjectKind::HVAC, "Lonely Fan");
        assert!(ws.is_empty());
        assert_eq!(translator.warnings().len(), 1);
        assert!(translator.errors().is_empty());
        Ok(())
    }
}
