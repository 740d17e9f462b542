use crate::{
    AirLoopHVAC, AvailabilityManager, Construction, Curve, DesignSpecificationOutdoorAir,
    Material, Schedule, ScheduleTypeLimits, ThermalZone, HVAC,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The kinds of objects a [`crate::Model`] holds. Names are unique
/// within each kind.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum ModelObjectKind {
    /// [`crate::ScheduleTypeLimits`]
    ScheduleTypeLimits,

    /// [`crate::Schedule`]
    Schedule,

    /// [`crate::Material`]
    Material,

    /// [`crate::Construction`]
    Construction,

    /// [`crate::Curve`]
    Curve,

    /// [`crate::ThermalZone`]
    ThermalZone,

    /// [`crate::DesignSpecificationOutdoorAir`]
    DesignSpecificationOutdoorAir,

    /// [`crate::AvailabilityManager`]
    AvailabilityManager,

    /// [`crate::HVAC`]
    #[strum(serialize = "HVAC")]
    HVAC,

    /// [`crate::AirLoopHVAC`]
    AirLoopHVAC,
}

/// What every object stored in a [`crate::Model`] can do, whatever its kind
pub trait ModelObject {
    /// The name of the object
    fn name(&self) -> &str;

    /// Mutable access to the name. Renaming does not update references.
    fn name_mut(&mut self) -> &mut String;

    /// The class of the object (e.g., `FanConstantVolume`)
    fn object_type(&self) -> &'static str;

    /// The `(display name, schedule name)` pairs of the schedules it points to
    fn schedule_fields(&self) -> Vec<(&'static str, &str)>;

    /// Points a schedule field to a schedule, or empties it
    fn set_schedule_field(&mut self, display_name: &str, schedule: Option<String>) -> bool;
}

macro_rules! model_object_struct {
    ($($t:ident),*) => {
        $(
            impl ModelObject for $t {
                fn name(&self) -> &str {
                    &self.name
                }
                fn name_mut(&mut self) -> &mut String {
                    &mut self.name
                }
                fn object_type(&self) -> &'static str {
                    Self::OBJECT_TYPE
                }
                fn schedule_fields(&self) -> Vec<(&'static str, &str)> {
                    <$t>::schedule_fields(self)
                }
                fn set_schedule_field(&mut self, display_name: &str, schedule: Option<String>) -> bool {
                    <$t>::set_schedule_field(self, display_name, schedule)
                }
            }
        )*
    };
}

macro_rules! model_object_group {
    ($($t:ident),*) => {
        $(
            impl ModelObject for $t {
                fn name(&self) -> &str {
                    <$t>::name(self)
                }
                fn name_mut(&mut self) -> &mut String {
                    <$t>::name_mut(self)
                }
                fn object_type(&self) -> &'static str {
                    <$t>::object_type(self)
                }
                fn schedule_fields(&self) -> Vec<(&'static str, &str)> {
                    <$t>::schedule_fields(self)
                }
                fn set_schedule_field(&mut self, display_name: &str, schedule: Option<String>) -> bool {
                    <$t>::set_schedule_field(self, display_name, schedule)
                }
            }
        )*
    };
}

model_object_struct!(
    ScheduleTypeLimits,
    Construction,
    ThermalZone,
    DesignSpecificationOutdoorAir,
    AirLoopHVAC
);
model_object_group!(Schedule, Material, Curve, AvailabilityManager, HVAC);

#[cfg(test)]
mod testing {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names() {
        for k in ModelObjectKind::iter() {
            let s = k.to_string();
            assert_eq!(s.parse::<ModelObjectKind>(), Ok(k));
        }
        assert_eq!(ModelObjectKind::AirLoopHVAC.to_string(), "AirLoopHVAC");
        assert!("Surface".parse::<ModelObjectKind>().is_err());
    }

    #[test]
    fn trait_objects() {
        let mut l = AirLoopHVAC::new("Loop");
        l.set_availability_schedule("Always On");
        let o: &mut dyn ModelObject = &mut l;
        assert_eq!(o.name(), "Loop");
        assert_eq!(o.schedule_fields(), vec![("Availability", "Always On")]);
        assert!(o.set_schedule_field("Availability", None));
        assert!(o.schedule_fields().is_empty());
        assert!(!o.set_schedule_field("Applicability Schedule", None));

        let mut fan: HVAC = crate::FanConstantVolume::new("Fan").into();
        let o: &mut dyn ModelObject = &mut fan;
        o.name_mut().push_str(" 1");
        assert_eq!(o.object_type(), "FanConstantVolume");
        assert_eq!(fan.name(), "Fan 1");
    }
}
