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

use std::fmt::Display;

use crate::idd::{IddObject, IddObjectType};
use crate::IdfError;

/// Width of the column holding the field values when printing
const PRINTED_FIELD_SPACE: usize = 30;

/// Checks whether a field value is `Autosize` or `Autocalculate`
fn is_auto(value: &str) -> bool {
    value.eq_ignore_ascii_case("autosize") || value.eq_ignore_ascii_case("autocalculate")
}

/// Writes a number the way it is expected in IDF files
pub fn format_double(v: f64) -> String {
    format!("{}", v)
}

/// A single object in an IDF file: its class and its fields, all kept as text.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfObject {
    object_type: IddObjectType,

    /// The class name as written (it matters for `Unknown` objects)
    class_name: String,

    fields: Vec<String>,

    /// Comment lines printed right before the object
    comment: Option<String>,
}

impl IdfObject {
    /// Creates an object with all its fixed fields empty
    pub fn new(object_type: IddObjectType) -> Self {
        let idd = object_type.idd();
        Self {
            object_type,
            class_name: idd.name.to_string(),
            fields: vec![String::new(); idd.fields.len()],
            comment: None,
        }
    }

    /// Creates an object from a class name and its raw fields, as read
    /// from a file. Classes that are not supported are kept as `Unknown`.
    pub fn from_fields(class_name: &str, fields: Vec<String>) -> Self {
        let object_type = IddObjectType::from_class_name(class_name);
        let class_name = match object_type {
            IddObjectType::Unknown => class_name.trim().to_string(),
            t => t.name().to_string(),
        };
        let mut fields: Vec<String> = fields.into_iter().map(|f| f.trim().to_string()).collect();
        let n = object_type.idd().fields.len();
        if fields.len() < n {
            fields.resize(n, String::new());
        }
        Self {
            object_type,
            class_name,
            fields,
            comment: None,
        }
    }

    /// The type of this object
    pub fn object_type(&self) -> IddObjectType {
        self.object_type
    }

    /// The class name, as it will be printed
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The description of the class of this object
    pub fn idd(&self) -> &'static IddObject {
        self.object_type.idd()
    }

    /// The number of fields, blank ones included
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// All the fields
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The name of the object, if its class has names and it is not blank
    pub fn name(&self) -> Option<&str> {
        if self.idd().has_name {
            self.get_string(0)
        } else {
            None
        }
    }

    /// Gets a field as text. Returns `None` if the field is
    /// blank or does not exist.
    pub fn get_string(&self, index: usize) -> Option<&str> {
        match self.fields.get(index) {
            Some(v) if !v.trim().is_empty() => Some(v.trim()),
            _ => None,
        }
    }

    /// Gets a field as a number. Returns `None` if the field is blank,
    /// is not a number or is `Autosize`/`Autocalculate`.
    pub fn get_double(&self, index: usize) -> Option<f64> {
        let v = self.get_string(index)?;
        if is_auto(v) {
            return None;
        }
        v.parse::<f64>().ok()
    }

    /// Gets a field as an integer. Numbers with no fractional part
    /// (e.g., `2.0`) are accepted.
    pub fn get_int(&self, index: usize) -> Option<i64> {
        let v = self.get_string(index)?;
        if let Ok(i) = v.parse::<i64>() {
            return Some(i);
        }
        match v.parse::<f64>() {
            Ok(f) if f.fract() == 0.0 => Some(f as i64),
            _ => None,
        }
    }

    /// Checks whether a field reads `Autosize` or `Autocalculate`
    pub fn is_autosized(&self, index: usize) -> bool {
        self.get_string(index).map(is_auto).unwrap_or(false)
    }

    fn check_index(&self, index: usize) -> Result<(), IdfError> {
        let idd = self.idd();
        if index < idd.fields.len() || idd.extensible_group_size() > 0 {
            Ok(())
        } else {
            Err(IdfError::FieldOutOfRange {
                class_name: self.class_name.clone(),
                index,
            })
        }
    }

    /// Sets a field. Fields between the current last one and `index`
    /// are filled with blanks.
    pub fn set_string<S: Into<String>>(&mut self, index: usize, v: S) -> Result<(), IdfError> {
        self.check_index(index)?;
        if index >= self.fields.len() {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = v.into();
        Ok(())
    }

    /// Sets a numeric field
    pub fn set_double(&mut self, index: usize, v: f64) -> Result<(), IdfError> {
        self.set_string(index, format_double(v))
    }

    /// Sets a field to `Autosize`
    pub fn set_autosize(&mut self, index: usize) -> Result<(), IdfError> {
        self.set_string(index, "Autosize")
    }

    /// Sets the name of the object (i.e., the first field)
    pub fn set_name<S: Into<String>>(&mut self, v: S) -> Result<(), IdfError> {
        self.set_string(0, v)
    }

    /// Appends an extensible group at the end of the object, returning
    /// the index of the group.
    pub fn push_extensible_group<S: AsRef<str>>(&mut self, values: &[S]) -> Result<usize, IdfError> {
        let idd = self.idd();
        let n = idd.extensible_group_size();
        if n == 0 {
            return Err(IdfError::NotExtensible {
                class_name: self.class_name.clone(),
            });
        }
        if values.len() != n {
            return Err(IdfError::GroupSize {
                class_name: self.class_name.clone(),
                expected: n,
                found: values.len(),
            });
        }
        let fixed = idd.fields.len();
        if self.fields.len() < fixed {
            self.fields.resize(fixed, String::new());
        }
        // incomplete groups are completed with blanks
        let partial = (self.fields.len() - fixed) % n;
        if partial != 0 {
            self.fields.resize(self.fields.len() + n - partial, String::new());
        }
        self.fields
            .extend(values.iter().map(|v| v.as_ref().to_string()));
        Ok((self.fields.len() - fixed) / n - 1)
    }

    /// The extensible groups of this object. The last one may be
    /// shorter than the group size if the file was truncated.
    pub fn extensible_groups(&self) -> Vec<&[String]> {
        let idd = self.idd();
        let n = idd.extensible_group_size();
        let fixed = idd.fields.len();
        if n == 0 || self.fields.len() <= fixed {
            return Vec::new();
        }
        self.fields[fixed..].chunks(n).collect()
    }

    /// Removes all the extensible groups
    pub fn clear_extensible_groups(&mut self) {
        let fixed = self.idd().fields.len();
        self.fields.truncate(fixed);
    }

    /// The comment printed right before the object
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets the comment of the object. Lines that do not start with
    /// `!` are prefixed with `! `.
    pub fn set_comment(&mut self, comment: &str) {
        let lines: Vec<String> = comment
            .lines()
            .map(|l| {
                let l = l.trim();
                if l.starts_with('!') {
                    l.to_string()
                } else {
                    format!("! {}", l)
                }
            })
            .collect();
        self.comment = if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        };
    }

    /// The number of fields that are printed: trailing blanks are
    /// dropped, but one field is kept if there are any.
    fn printed_fields(&self) -> usize {
        match self.fields.iter().rposition(|f| !f.trim().is_empty()) {
            Some(i) => i + 1,
            None => self.fields.len().min(1),
        }
    }
}

impl Display for IdfObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(c) = &self.comment {
            writeln!(f, "{}", c)?;
        }
        let n = self.printed_fields();
        if n == 0 {
            return writeln!(f, "{};", self.class_name);
        }
        writeln!(f, "{},", self.class_name)?;
        let idd = self.idd();
        for (i, value) in self.fields.iter().take(n).enumerate() {
            let delim = if i + 1 == n { ';' } else { ',' };
            let value_and_delim = format!("{}{}", value.trim(), delim);
            writeln!(
                f,
                "  {:<width$} !- {}",
                value_and_delim,
                idd.field_name(i),
                width = PRINTED_FIELD_SPACE + 1
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::fields::{availability_manager_night_cycle as nc, construction};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() {
        let obj = IdfObject::new(IddObjectType::AvailabilityManagerNightCycle);
        assert_eq!(obj.num_fields(), 11);
        assert_eq!(obj.class_name(), "AvailabilityManager:NightCycle");
        assert!(obj.name().is_none());
        assert!(obj.get_string(nc::CONTROL_TYPE).is_none());
        assert!(obj.get_string(100).is_none());
    }

    #[test]
    fn test_get_set() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::AvailabilityManagerNightCycle);
        obj.set_name("Night Cycle 1")?;
        obj.set_string(nc::CONTROL_TYPE, "CycleOnAny")?;
        obj.set_double(nc::THERMOSTAT_TOLERANCE, 1.5)?;
        obj.set_double(nc::CYCLING_RUN_TIME, 3600.)?;

        assert_eq!(obj.name(), Some("Night Cycle 1"));
        assert_eq!(obj.get_string(nc::CONTROL_TYPE), Some("CycleOnAny"));
        assert_eq!(obj.get_double(nc::THERMOSTAT_TOLERANCE), Some(1.5));
        assert_eq!(obj.get_string(nc::CYCLING_RUN_TIME), Some("3600"));
        assert_eq!(obj.get_int(nc::CYCLING_RUN_TIME), Some(3600));
        assert!(obj.get_double(nc::CONTROL_TYPE).is_none());

        // No extensible groups in NightCycle
        assert!(obj.set_string(11, "Zone").is_err());
        assert!(obj.push_extensible_group(&["Zone"]).is_err());
        Ok(())
    }

    #[test]
    fn test_autosize() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::FanConstantVolume);
        obj.set_autosize(4)?;
        assert!(obj.is_autosized(4));
        assert!(obj.get_double(4).is_none());
        obj.set_string(4, "autocalculate")?;
        assert!(obj.is_autosized(4));
        obj.set_double(4, 1.2)?;
        assert!(!obj.is_autosized(4));
        assert_eq!(obj.get_double(4), Some(1.2));
        Ok(())
    }

    #[test]
    fn test_extensible_groups() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::Construction);
        obj.set_name("Wall")?;
        obj.set_string(construction::OUTSIDE_LAYER, "Brick")?;
        assert_eq!(obj.push_extensible_group(&["Insulation"])?, 0);
        assert_eq!(obj.push_extensible_group(&["Gypsum"])?, 1);
        let groups = obj.extensible_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][0], "Gypsum");

        let mut list = IdfObject::new(IddObjectType::AvailabilityManagerAssignmentList);
        assert!(list.push_extensible_group(&["AvailabilityManager:Scheduled"]).is_err());
        list.push_extensible_group(&["AvailabilityManager:Scheduled", "Always On"])?;
        assert_eq!(list.extensible_groups().len(), 1);
        list.clear_extensible_groups();
        assert!(list.extensible_groups().is_empty());
        Ok(())
    }

    #[test]
    fn test_print() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::ScheduleConstant);
        obj.set_name("Always On")?;
        obj.set_double(2, 1.0)?;
        obj.set_comment("A constant schedule");
        let expected = "! A constant schedule
Schedule:Constant,
  Always On,                      !- Name
  ,                               !- Schedule Type Limits Name
  1;                              !- Hourly Value
";
        assert_eq!(format!("{}", obj), expected);
        Ok(())
    }

    #[test]
    fn test_print_trims_trailing_blanks() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::ScheduleTypeLimits);
        obj.set_name("Fraction")?;
        let expected = "ScheduleTypeLimits,
  Fraction;                       !- Name
";
        assert_eq!(format!("{}", obj), expected);

        // Everything is blank, but one field is kept
        let obj = IdfObject::new(IddObjectType::OutputSQLite);
        assert_eq!(
            format!("{}", obj),
            "Output:SQLite,\n  ;                               !- Option Type\n"
        );

        let obj = IdfObject::from_fields("Site:Location", Vec::new());
        assert_eq!(obj.object_type(), IddObjectType::Unknown);
        assert_eq!(format!("{}", obj), "Site:Location;\n");
        Ok(())
    }

    #[test]
    fn test_long_values_are_not_padded() -> Result<(), IdfError> {
        let mut obj = IdfObject::new(IddObjectType::ZoneList);
        let name = "A very long name for a list of zones that exceeds the column";
        obj.set_name(name)?;
        assert_eq!(format!("{}", obj), format!("ZoneList,\n  {}; !- Name\n", name));
        Ok(())
    }
}
