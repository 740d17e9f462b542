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

//! Indices of the fields of the supported EnergyPlus classes, so that
//! translators do not rely on bare numbers.

pub mod version {
    pub const VERSION_IDENTIFIER: usize = 0;
}

pub mod schedule_type_limits {
    pub const NAME: usize = 0;
    pub const LOWER_LIMIT_VALUE: usize = 1;
    pub const UPPER_LIMIT_VALUE: usize = 2;
    pub const NUMERIC_TYPE: usize = 3;
    pub const UNIT_TYPE: usize = 4;
}

pub mod schedule_constant {
    pub const NAME: usize = 0;
    pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 1;
    pub const HOURLY_VALUE: usize = 2;
}

pub mod schedule_compact {
    pub const NAME: usize = 0;
    pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 1;
}

pub mod material {
    pub const NAME: usize = 0;
    pub const ROUGHNESS: usize = 1;
    pub const THICKNESS: usize = 2;
    pub const CONDUCTIVITY: usize = 3;
    pub const DENSITY: usize = 4;
    pub const SPECIFIC_HEAT: usize = 5;
    pub const THERMAL_ABSORPTANCE: usize = 6;
    pub const SOLAR_ABSORPTANCE: usize = 7;
    pub const VISIBLE_ABSORPTANCE: usize = 8;
}

pub mod material_air_gap {
    pub const NAME: usize = 0;
    pub const THERMAL_RESISTANCE: usize = 1;
}

pub mod construction {
    pub const NAME: usize = 0;
    pub const OUTSIDE_LAYER: usize = 1;
}

pub mod curve_quadratic {
    pub const NAME: usize = 0;
    pub const COEFFICIENT1_CONSTANT: usize = 1;
    pub const COEFFICIENT2_X: usize = 2;
    pub const COEFFICIENT3_X2: usize = 3;
    pub const MINIMUM_VALUE_OF_X: usize = 4;
    pub const MAXIMUM_VALUE_OF_X: usize = 5;
    pub const MINIMUM_CURVE_OUTPUT: usize = 6;
    pub const MAXIMUM_CURVE_OUTPUT: usize = 7;
}

pub mod curve_cubic {
    pub const NAME: usize = 0;
    pub const COEFFICIENT1_CONSTANT: usize = 1;
    pub const COEFFICIENT2_X: usize = 2;
    pub const COEFFICIENT3_X2: usize = 3;
    pub const COEFFICIENT4_X3: usize = 4;
    pub const MINIMUM_VALUE_OF_X: usize = 5;
    pub const MAXIMUM_VALUE_OF_X: usize = 6;
    pub const MINIMUM_CURVE_OUTPUT: usize = 7;
    pub const MAXIMUM_CURVE_OUTPUT: usize = 8;
}

pub mod curve_biquadratic {
    pub const NAME: usize = 0;
    pub const COEFFICIENT1_CONSTANT: usize = 1;
    pub const COEFFICIENT2_X: usize = 2;
    pub const COEFFICIENT3_X2: usize = 3;
    pub const COEFFICIENT4_Y: usize = 4;
    pub const COEFFICIENT5_Y2: usize = 5;
    pub const COEFFICIENT6_XY: usize = 6;
    pub const MINIMUM_VALUE_OF_X: usize = 7;
    pub const MAXIMUM_VALUE_OF_X: usize = 8;
    pub const MINIMUM_VALUE_OF_Y: usize = 9;
    pub const MAXIMUM_VALUE_OF_Y: usize = 10;
    pub const MINIMUM_CURVE_OUTPUT: usize = 11;
    pub const MAXIMUM_CURVE_OUTPUT: usize = 12;
}

pub mod zone {
    pub const NAME: usize = 0;
    pub const DIRECTION_OF_RELATIVE_NORTH: usize = 1;
    pub const X_ORIGIN: usize = 2;
    pub const Y_ORIGIN: usize = 3;
    pub const Z_ORIGIN: usize = 4;
    pub const TYPE: usize = 5;
    pub const MULTIPLIER: usize = 6;
    pub const CEILING_HEIGHT: usize = 7;
    pub const VOLUME: usize = 8;
    pub const FLOOR_AREA: usize = 9;
}

pub mod zone_list {
    pub const NAME: usize = 0;
}

pub mod design_specification_outdoor_air {
    pub const NAME: usize = 0;
    pub const OUTDOOR_AIR_METHOD: usize = 1;
    pub const OUTDOOR_AIR_FLOW_PER_PERSON: usize = 2;
    pub const OUTDOOR_AIR_FLOW_PER_ZONE_FLOOR_AREA: usize = 3;
    pub const OUTDOOR_AIR_FLOW_PER_ZONE: usize = 4;
    pub const OUTDOOR_AIR_FLOW_AIR_CHANGES_PER_HOUR: usize = 5;
    pub const OUTDOOR_AIR_SCHEDULE_NAME: usize = 6;
}

pub mod air_loop_hvac {
    pub const NAME: usize = 0;
    pub const CONTROLLER_LIST_NAME: usize = 1;
    pub const AVAILABILITY_MANAGER_LIST_NAME: usize = 2;
    pub const DESIGN_SUPPLY_AIR_FLOW_RATE: usize = 3;
    pub const BRANCH_LIST_NAME: usize = 4;
    pub const CONNECTOR_LIST_NAME: usize = 5;
    pub const SUPPLY_SIDE_INLET_NODE_NAME: usize = 6;
    pub const DEMAND_SIDE_OUTLET_NODE_NAME: usize = 7;
    pub const DEMAND_SIDE_INLET_NODE_NAMES: usize = 8;
    pub const SUPPLY_SIDE_OUTLET_NODE_NAMES: usize = 9;
    pub const DESIGN_RETURN_AIR_FLOW_FRACTION: usize = 10;
}

pub mod branch_list {
    pub const NAME: usize = 0;
}

pub mod branch {
    pub const NAME: usize = 0;
    pub const PRESSURE_DROP_CURVE_NAME: usize = 1;
}

pub mod availability_manager_assignment_list {
    pub const NAME: usize = 0;
}

/// Shared by `AvailabilityManager:Scheduled`, `:ScheduledOn` and `:ScheduledOff`
pub mod availability_manager_scheduled {
    pub const NAME: usize = 0;
    pub const SCHEDULE_NAME: usize = 1;
}

pub mod availability_manager_night_cycle {
    pub const NAME: usize = 0;
    pub const APPLICABILITY_SCHEDULE_NAME: usize = 1;
    pub const FAN_SCHEDULE_NAME: usize = 2;
    pub const CONTROL_TYPE: usize = 3;
    pub const THERMOSTAT_TOLERANCE: usize = 4;
    pub const CYCLING_RUN_TIME_CONTROL_TYPE: usize = 5;
    pub const CYCLING_RUN_TIME: usize = 6;
    pub const CONTROL_ZONE_OR_ZONE_LIST_NAME: usize = 7;
    pub const COOLING_CONTROL_ZONE_OR_ZONE_LIST_NAME: usize = 8;
    pub const HEATING_CONTROL_ZONE_OR_ZONE_LIST_NAME: usize = 9;
    pub const HEATING_ZONE_FANS_ONLY_ZONE_OR_ZONE_LIST_NAME: usize = 10;
}

pub mod fan_constant_volume {
    pub const NAME: usize = 0;
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 1;
    pub const FAN_TOTAL_EFFICIENCY: usize = 2;
    pub const PRESSURE_RISE: usize = 3;
    pub const MAXIMUM_FLOW_RATE: usize = 4;
    pub const MOTOR_EFFICIENCY: usize = 5;
    pub const MOTOR_IN_AIRSTREAM_FRACTION: usize = 6;
    pub const AIR_INLET_NODE_NAME: usize = 7;
    pub const AIR_OUTLET_NODE_NAME: usize = 8;
    pub const END_USE_SUBCATEGORY: usize = 9;
}

pub mod coil_heating_electric {
    pub const NAME: usize = 0;
    pub const AVAILABILITY_SCHEDULE_NAME: usize = 1;
    pub const EFFICIENCY: usize = 2;
    pub const NOMINAL_CAPACITY: usize = 3;
    pub const AIR_INLET_NODE_NAME: usize = 4;
    pub const AIR_OUTLET_NODE_NAME: usize = 5;
    pub const TEMPERATURE_SETPOINT_NODE_NAME: usize = 6;
}

pub mod output_sqlite {
    pub const OPTION_TYPE: usize = 0;
}

pub mod output_variable_dictionary {
    pub const KEY_FIELD: usize = 0;
    pub const SORT_OPTION: usize = 1;
}

pub mod output_control_table_style {
    pub const COLUMN_SEPARATOR: usize = 0;
    pub const UNIT_CONVERSION: usize = 1;
}

pub mod output_table_summary_reports {
    pub const REPORT_NAME: usize = 0;
}
