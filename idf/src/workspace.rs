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
use std::str::FromStr;

use crate::scanner::IdfScanner;
use crate::{IddObjectType, IdfError, IdfObject};

/// An ordered collection of [`IdfObject`]s; i.e., the contents of an IDF file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    objects: Vec<IdfObject>,
}

impl Workspace {
    /// Creates an empty [`Workspace`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object at the end of the workspace, returning its index
    pub fn add_object(&mut self, obj: IdfObject) -> usize {
        self.objects.push(obj);
        self.objects.len() - 1
    }

    /// All the objects, in order
    pub fn objects(&self) -> &[IdfObject] {
        &self.objects
    }

    /// Borrows the object at `index`
    pub fn get(&self, index: usize) -> Option<&IdfObject> {
        self.objects.get(index)
    }

    /// Borrows the object at `index` mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut IdfObject> {
        self.objects.get_mut(index)
    }

    /// The objects of a certain type, in order
    pub fn objects_by_type(&self, object_type: IddObjectType) -> Vec<&IdfObject> {
        self.objects
            .iter()
            .filter(|o| o.object_type() == object_type)
            .collect()
    }

    /// Finds an object by type and name. Names are compared
    /// ignoring ASCII case, as EnergyPlus does.
    pub fn object_by_type_and_name(
        &self,
        object_type: IddObjectType,
        name: &str,
    ) -> Option<&IdfObject> {
        self.object_by_name_in(&[object_type], name)
    }

    /// Finds the first object named `name` whose type is one of
    /// `object_types`. This is how references to lists of classes
    /// (e.g., "a Zone or a ZoneList") are resolved.
    pub fn object_by_name_in(
        &self,
        object_types: &[IddObjectType],
        name: &str,
    ) -> Option<&IdfObject> {
        let i = self.index_by_name_in(object_types, name)?;
        self.objects.get(i)
    }

    /// Like [`Workspace::object_by_name_in`], but returns the index of the object
    pub fn index_by_name_in(&self, object_types: &[IddObjectType], name: &str) -> Option<usize> {
        let name = name.trim();
        self.objects.iter().position(|o| {
            object_types.contains(&o.object_type())
                && o.name().map(|n| n.eq_ignore_ascii_case(name)).unwrap_or(false)
        })
    }

    /// Removes the object at `index`, returning it
    pub fn remove_object(&mut self, index: usize) -> Option<IdfObject> {
        if index < self.objects.len() {
            Some(self.objects.remove(index))
        } else {
            None
        }
    }

    /// The number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Checks whether there are no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Reads a [`Workspace`] from IDF text in bytes
    pub fn from_bytes(source: &[u8]) -> Result<Self, IdfError> {
        let mut scanner = IdfScanner::new(source, 1);
        scanner.parse_workspace()
    }

    /// Reads a [`Workspace`] from an IDF file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, IdfError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| IdfError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let ws = Self::from_bytes(&data)?;
        tracing::debug!("read {} objects from '{}'", ws.len(), path.display());
        Ok(ws)
    }

    /// Writes the [`Workspace`] into an IDF file
    pub fn to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), IdfError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_string()).map_err(|source| IdfError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

impl FromStr for Workspace {
    type Err = IdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl Display for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, o) in self.objects.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", o)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use pretty_assertions::assert_eq;

    const SRC: &str = "Version,24.1;

! Zones
Zone,
  Kitchen;                        !- Name

Zone,
  Bedroom;                        !- Name

ZoneList,
  All Zones,                      !- Name
  Kitchen,                        !- Zone 1 Name
  Bedroom;                        !- Zone 2 Name
";

    #[test]
    fn test_read() -> Result<(), IdfError> {
        let ws: Workspace = SRC.parse()?;
        assert_eq!(ws.len(), 4);
        assert_eq!(ws.objects_by_type(IddObjectType::Zone).len(), 2);
        assert_eq!(
            ws.object_by_type_and_name(IddObjectType::Zone, "KITCHEN")
                .and_then(|o| o.name()),
            Some("Kitchen")
        );
        assert!(ws
            .object_by_type_and_name(IddObjectType::ZoneList, "Kitchen")
            .is_none());
        let found = ws
            .object_by_name_in(&[IddObjectType::Zone, IddObjectType::ZoneList], "all zones")
            .unwrap();
        assert_eq!(found.object_type(), IddObjectType::ZoneList);
        Ok(())
    }

    #[test]
    fn test_print_round_trip() -> Result<(), IdfError> {
        let ws: Workspace = SRC.parse()?;
        let expected = "Version,
  24.1;                           !- Version Identifier

! Zones
Zone,
  Kitchen;                        !- Name

Zone,
  Bedroom;                        !- Name

ZoneList,
  All Zones,                      !- Name
  Kitchen,                        !- Zone 1 Name
  Bedroom;                        !- Zone 2 Name
";
        assert_eq!(ws.to_string(), expected);
        // Printing is stable
        let again: Workspace = expected.parse()?;
        assert_eq!(again.to_string(), expected);
        Ok(())
    }

    #[test]
    fn test_remove() -> Result<(), IdfError> {
        let mut ws: Workspace = SRC.parse()?;
        let removed = ws.remove_object(1).map(|o| o.name().map(String::from));
        assert_eq!(removed, Some(Some("Kitchen".to_string())));
        assert_eq!(ws.len(), 3);
        assert!(ws.remove_object(10).is_none());
        assert!(!ws.is_empty());
        Ok(())
    }

    #[test]
    fn test_files() -> Result<(), IdfError> {
        let ws: Workspace = SRC.parse()?;
        let path = std::env::temp_dir().join("idf_workspace_test_files.idf");
        ws.to_file(&path)?;
        let back = Workspace::from_file(&path)?;
        assert_eq!(back, ws);
        assert!(Workspace::from_file("./this/does/not/exist.idf").is_err());
        Ok(())
    }
}
