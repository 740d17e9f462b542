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
use idf::{IdfObject, Workspace};
use model::{Autosize, CoilHeatingElectric, FanConstantVolume};

use super::{optional_double, required_name, ReverseTranslator, Reversed};

/// A field that can be autosized; blank fields are autosized too
fn autosizable(obj: &IdfObject, index: usize) -> Autosize {
    match optional_double(obj, index) {
        Some(v) => Autosize::Value(v),
        None => Autosize::Autosize,
    }
}

// Node names are not read: the model derives them from the position of
// the component in its loop.
impl ReverseTranslator {
    pub(super) fn translate_fan_constant_volume(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let mut f = FanConstantVolume::new(required_name(obj)?);
        if let Some(s) = self.schedule_reference(
            workspace,
            obj,
            fan::AVAILABILITY_SCHEDULE_NAME,
            FanConstantVolume::OBJECT_TYPE,
            "Availability",
        ) {
            f.set_availability_schedule(s);
        }
        if let Some(v) = optional_double(obj, fan::FAN_TOTAL_EFFICIENCY) {
            f.set_fan_total_efficiency(v)?;
        }
        if let Some(v) = optional_double(obj, fan::PRESSURE_RISE) {
            f.set_pressure_rise(v);
        }
        f.set_maximum_flow_rate(autosizable(obj, fan::MAXIMUM_FLOW_RATE));
        if let Some(v) = optional_double(obj, fan::MOTOR_EFFICIENCY) {
            f.set_motor_efficiency(v)?;
        }
        if let Some(v) = optional_double(obj, fan::MOTOR_IN_AIRSTREAM_FRACTION) {
            f.set_motor_in_airstream_fraction(v)?;
        }
        if let Some(s) = obj.get_string(fan::END_USE_SUBCATEGORY) {
            f.set_end_use_subcategory(s);
        }
        Ok(Some(self.model.add_hvac(f.into())?))
    }

    pub(super) fn translate_coil_heating_electric(
        &mut self,
        workspace: &Workspace,
        obj: &IdfObject,
    ) -> Reversed {
        let mut c = CoilHeatingElectric::new(required_name(obj)?);
        if let Some(s) = self.schedule_reference(
            workspace,
            obj,
            coil::AVAILABILITY_SCHEDULE_NAME,
            CoilHeatingElectric::OBJECT_TYPE,
            "Availability",
        ) {
            c.set_availability_schedule(s);
        }
        if let Some(v) = optional_double(obj, coil::EFFICIENCY) {
            c.set_efficiency(v)?;
        }
        c.set_nominal_capacity(autosizable(obj, coil::NOMINAL_CAPACITY));
        Ok(Some(self.model.add_hvac(c.into())?))
    }
}
