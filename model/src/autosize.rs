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
use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A value that can be left for EnergyPlus to size.
///
/// It is written as `"autosize"` or as a number in model files.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Autosize {
    /// Sized by EnergyPlus
    #[default]
    Autosize,

    /// A hard value
    Value(Float),
}

impl Autosize {
    /// Checks whether this is left for EnergyPlus to size
    pub fn is_autosized(&self) -> bool {
        matches!(self, Self::Autosize)
    }

    /// The hard value, if any
    pub fn value(&self) -> Option<Float> {
        match self {
            Self::Autosize => None,
            Self::Value(v) => Some(*v),
        }
    }
}

impl From<Float> for Autosize {
    fn from(v: Float) -> Self {
        Self::Value(v)
    }
}

impl Display for Autosize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Autosize => write!(f, "Autosize"),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Autosize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Autosize => serializer.serialize_str("autosize"),
            Self::Value(v) => serializer.serialize_f64(*v as f64),
        }
    }
}

struct AutosizeVisitor {}

impl<'de> Visitor<'de> for AutosizeVisitor {
    type Value = Autosize;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a number or \"autosize\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.eq_ignore_ascii_case("autosize") || v.eq_ignore_ascii_case("autocalculate") {
            Ok(Autosize::Autosize)
        } else {
            Err(E::custom(format!("expecting a number or \"autosize\", found '{}'", v)))
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Autosize::Value(v as Float))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Autosize::Value(v as Float))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Autosize::Value(v as Float))
    }
}

impl<'de> Deserialize<'de> for Autosize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(AutosizeVisitor {})
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn serde() -> Result<(), String> {
        let a: Autosize = serde_json::from_str("\"autosize\"").map_err(|e| e.to_string())?;
        assert!(a.is_autosized());
        let a: Autosize = json5::from_str("'Autosize'").map_err(|e| e.to_string())?;
        assert!(a.is_autosized());
        let a: Autosize = serde_json::from_str("1.5").map_err(|e| e.to_string())?;
        assert_eq!(a.value(), Some(1.5));
        let a: Autosize = serde_json::from_str("2").map_err(|e| e.to_string())?;
        assert_eq!(a, Autosize::Value(2.));
        assert!(serde_json::from_str::<Autosize>("\"big\"").is_err());

        assert_eq!(
            serde_json::to_string(&Autosize::Autosize).map_err(|e| e.to_string())?,
            "\"autosize\""
        );
        assert_eq!(
            serde_json::to_string(&Autosize::Value(0.5)).map_err(|e| e.to_string())?,
            "0.5"
        );
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!(Autosize::Autosize.to_string(), "Autosize");
        assert_eq!(Autosize::Value(3.).to_string(), "3");
    }
}
