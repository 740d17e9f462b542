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

use crate::{Float, ModelError};
use derive::GroupAPI;
use serde::{Deserialize, Serialize};

mod air_gap;
mod standard_opaque;
pub use air_gap::AirGap;
pub use standard_opaque::{Roughness, StandardOpaqueMaterial};

/// The representation of a physical layer-Material.
/// That is to say, a layer of a certain thickness
/// made of a certain substance, or a gap of air.
///
/// ## Examples
///
/// ##### `.sml`
/// ```json
/// Material {
///     type: "StandardOpaqueMaterial",
///     name: "Brick",
///     roughness: "Rough",
///     thickness: 0.1,
///     conductivity: 0.8,
///     density: 1900,
///     specific_heat: 800,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, GroupAPI)]
#[serde(tag = "type")]
pub enum Material {
    /// A layer with mass
    StandardOpaqueMaterial(StandardOpaqueMaterial),

    /// A layer of air
    AirGap(AirGap),
}

impl Material {
    /// The thermal resistance of the layer, in `m2.K/W`
    pub fn thermal_resistance(&self) -> Float {
        match self {
            Self::StandardOpaqueMaterial(m) => m.thermal_resistance(),
            Self::AirGap(m) => m.thermal_resistance,
        }
    }

    /// Checks the values of the material
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::StandardOpaqueMaterial(m) => m.validate(),
            Self::AirGap(m) => m.validate(),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let m: Material = json5::from_str(
            "{
            type: 'AirGap',
            name: 'Gap',
            thermal_resistance: 0.18
        }",
        )
        .map_err(|e| e.to_string())?;
        assert_eq!(m.name(), "Gap");
        assert_eq!(m.object_type(), "AirGap");
        assert!((m.thermal_resistance() - 0.18).abs() < 1e-9);

        let bad = json5::from_str::<Material>(
            "{
            type: 'AirGap',
            name: 'Gap',
            thermal_resistance: 0.18,
            thickness: 0.1
        }",
        );
        assert!(bad.is_err());
        Ok(())
    }
}
