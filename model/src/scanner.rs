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

use std::collections::HashMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::{Model, ModelError};

/// The order in which the kinds of objects are added to the [`Model`].
/// Objects can only point to kinds read before them.
const READ_ORDER: [&str; 11] = [
    "Model",
    "ScheduleTypeLimits",
    "Schedule",
    "Material",
    "Construction",
    "Curve",
    "ThermalZone",
    "DesignSpecificationOutdoorAir",
    "AvailabilityManager",
    "HVAC",
    "AirLoopHVAC",
];

/// Reads the model text format; that is, a sequence of
/// `Identifier { json5 }` blocks with `//` and `/* */` comments
pub(crate) struct SimpleScanner<'a> {
    /// The line being read
    line: usize,

    source: &'a [u8],

    current_index: usize,

    start_index: usize,

    finished: bool,
}

/// The fields of the `Model { ... }` block
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelHeader {
    name: Option<String>,
}

impl<'a> SimpleScanner<'a> {
    /// Creates a new [`SimpleScanner`]
    pub(crate) fn new(source: &'a [u8], line: usize) -> Self {
        Self {
            finished: source.is_empty(),
            source,
            line,
            current_index: 0,
            start_index: 0,
        }
    }

    fn make_error<S: Display>(msg: S, ln: usize) -> ModelError {
        ModelError::Syntax {
            line: ln,
            msg: msg.to_string(),
        }
    }

    fn eof(&self) -> ModelError {
        Self::make_error("Unexpected EOF when scanning", self.line)
    }

    /// Advances one `char` in the `source`, returning the consumed
    /// `char` inside of an `Option`. If finished, it will mark the
    /// [`SimpleScanner`] as finished and return `None`
    fn advance(&mut self) -> Option<char> {
        if let Some(v) = self.source.get(self.current_index) {
            self.current_index += 1;
            if self.current_index == self.source.len() {
                self.finished = true;
            }
            Some(*v as char)
        } else {
            self.finished = true;
            None
        }
    }

    /// Gets the `char` at the `current_index`. Returns `\0` if
    /// finished.
    fn peek(&self) -> char {
        if self.finished {
            return '\0';
        }
        self.source[self.current_index] as char
    }

    /// Gets the `char` following the `current_index`. Returns `\0` if
    /// finished.
    fn peek_next(&self) -> char {
        if self.finished || self.current_index + 1 == self.source.len() {
            return '\0';
        }
        self.source[self.current_index + 1] as char
    }

    /// Skips white spaces and comments
    fn skip_white_space(&mut self) -> Result<(), ModelError> {
        if self.finished {
            return Ok(());
        }

        loop {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance().ok_or_else(|| self.eof())?;
                }
                '\n' => {
                    self.line += 1;
                    self.advance().ok_or_else(|| self.eof())?;
                }
                '/' => {
                    if self.peek_next() == '/' {
                        // Single line comment
                        while self.peek() != '\n' && !self.finished {
                            self.advance().ok_or_else(|| self.eof())?;
                        }
                    } else if self.peek_next() == '*' {
                        // Consume slash and star
                        self.advance().ok_or_else(|| self.eof())?;
                        self.advance().ok_or_else(|| self.eof())?;
                        loop {
                            if self.finished {
                                return Ok(());
                            }
                            if self.peek() == '*' && self.peek_next() == '/' {
                                self.advance().ok_or_else(|| self.eof())?;
                                self.advance().ok_or_else(|| self.eof())?;
                                break;
                            }
                            if let '\n' = self.advance().ok_or_else(|| self.eof())? {
                                self.line += 1;
                            }
                        }
                    } else {
                        return Ok(());
                    }
                }
                _ => return Ok(()),
            };
        }
    }

    /// Consumes a whole Identifier
    fn identifier(&mut self) -> Result<(usize, usize), ModelError> {
        // until we find something that is not a number, letter or '_'
        let mut c = self.peek();
        while c.is_ascii_alphabetic() || c.is_ascii_digit() || c == '_' {
            match self.advance() {
                Some(_) => c = self.peek(),
                None => return Err(self.eof()),
            }
        }
        if self.start_index == self.current_index {
            return Err(Self::make_error(
                format!("Expecting an identifier, found '{}'", c),
                self.line,
            ));
        }
        Ok((self.start_index, self.current_index))
    }

    /// Consumes an object and returns the start and end of that object.
    fn object(&mut self) -> Result<(usize, usize), ModelError> {
        let mut levels = 0;
        let mut started = false;

        while levels > 0 || !started {
            let next = self.peek();
            if !started && next != '{' {
                return Err(Self::make_error(
                    format!("Expecting '{{' to open an object, found '{}'", next),
                    self.line,
                ));
            }
            match next {
                '{' => {
                    levels += 1;
                    started = true;
                }
                '}' => levels -= 1,
                '\n' => self.line += 1,
                _ => {}
            }
            self.current_index += 1;

            if self.current_index == self.source.len() {
                self.finished = true;
                break;
            }
        }
        if levels > 0 {
            return Err(Self::make_error("Unclosed object at the end of the file", self.line));
        }

        Ok((self.start_index, self.current_index))
    }

    /// Updates the start index; i.e., sets the `start_index` to the `current_index`
    fn update_start_index(&mut self) {
        self.start_index = self.current_index;
    }

    /// Reads one object
    fn read<T: DeserializeOwned>(obj_str: &str, ln: usize) -> Result<T, ModelError> {
        json5::from_str(obj_str).map_err(|e| Self::make_error(e, ln))
    }

    /// Parses a whole [`Model`] from a text file
    pub(crate) fn parse_model(&mut self) -> Result<Model, ModelError> {
        let mut data = HashMap::<String, Vec<(&str, usize)>>::new();

        loop {
            self.skip_white_space()?;
            self.update_start_index();

            if self.finished {
                break;
            }

            let (ini, fin) = self.identifier()?;
            let ident = &self.source[ini..fin];

            self.skip_white_space()?;
            self.update_start_index();

            let ln = self.line;
            let (ini, fin) = self.object()?;
            let obj = &self.source[ini..fin];

            let obj_str = std::str::from_utf8(obj).map_err(|e| Self::make_error(e, ln))?;
            let key = String::from_utf8_lossy(ident).to_string();
            if !READ_ORDER.contains(&key.as_str()) {
                return Err(Self::make_error(format!("unknown identifier '{}'", key), ln));
            }
            data.entry(key).or_default().push((obj_str, ln));
        }

        // Now, build the model
        let mut model = Model::default();
        for ident in READ_ORDER {
            let objects = match data.get(ident) {
                Some(v) => v,
                None => continue,
            };

            for (obj_str, ln) in objects.iter() {
                let ln = *ln;
                // Errors when adding point to the object's line
                let at = |e: ModelError| Self::make_error(e, ln);
                match ident {
                    "Model" => {
                        let header: ModelHeader = Self::read(obj_str, ln)?;
                        model.name = header.name;
                    }
                    "ScheduleTypeLimits" => {
                        model.add_schedule_type_limits(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "Schedule" => {
                        model.add_schedule(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "Material" => {
                        model.add_material(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "Construction" => {
                        model.add_construction(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "Curve" => {
                        model.add_curve(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "ThermalZone" => {
                        model.add_thermal_zone(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "DesignSpecificationOutdoorAir" => {
                        model
                            .add_design_specification_outdoor_air(Self::read(obj_str, ln)?)
                            .map_err(at)?;
                    }
                    "AvailabilityManager" => {
                        model.add_availability_manager(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "HVAC" => {
                        model.add_hvac(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    "AirLoopHVAC" => {
                        model.add_air_loop_hvac(Self::read(obj_str, ln)?).map_err(at)?;
                    }
                    _ => {
                        return Err(Self::make_error(
                            format!("unknown identifier '{}'", ident),
                            ln,
                        ))
                    }
                }
            }
        }

        Ok(model)
    }
}
