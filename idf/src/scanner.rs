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

use crate::{IddObjectType, IdfError, IdfObject, Workspace};

/// Reads IDF text, object by object
pub(crate) struct IdfScanner<'a> {
    /// The line being read (initialized as 1 by default)
    line: usize,

    source: &'a [u8],

    current_index: usize,

    finished: bool,
}

impl<'a> IdfScanner<'a> {
    /// Creates a new [`IdfScanner`]
    pub(crate) fn new(source: &'a [u8], line: usize) -> Self {
        Self {
            finished: source.is_empty(),
            source,
            line,
            current_index: 0,
        }
    }

    fn make_error<S: Into<String>>(msg: S, line: usize) -> IdfError {
        IdfError::Syntax {
            line,
            msg: msg.into(),
        }
    }

    /// Advances one byte in the `source`, returning it. If finished, marks
    /// the [`IdfScanner`] as finished and returns `None`
    fn advance(&mut self) -> Option<u8> {
        if let Some(v) = self.source.get(self.current_index) {
            self.current_index += 1;
            if self.current_index == self.source.len() {
                self.finished = true;
            }
            if *v == b'\n' {
                self.line += 1;
            }
            Some(*v)
        } else {
            self.finished = true;
            None
        }
    }

    /// Gets the byte at the `current_index`. Returns `\0` if finished.
    fn peek(&self) -> u8 {
        if self.finished {
            return b'\0';
        }
        self.source[self.current_index]
    }

    /// Consumes everything until the end of the line (the newline included),
    /// returning what was consumed before it
    fn rest_of_line(&mut self) -> Vec<u8> {
        let mut ret = Vec::new();
        while !self.finished {
            match self.advance() {
                Some(b'\n') | None => break,
                Some(c) => ret.push(c),
            }
        }
        ret
    }

    fn decode(&self, bytes: Vec<u8>, line: usize) -> Result<String, IdfError> {
        String::from_utf8(bytes).map_err(|e| Self::make_error(format!("{}", e), line))
    }

    /// Skips white space, collecting the comment lines found on the way.
    /// Field-name comments (i.e., `!- Name`) and comments trailing something
    /// else on their line are not collected, and a blank line drops the
    /// comments collected before it.
    fn skip_white_space_and_comments(&mut self) -> Result<Vec<String>, IdfError> {
        let mut comments = Vec::new();
        // Whether nothing but white space was found since the last newline
        let mut blank = self.current_index == 0
            || self.source.get(self.current_index - 1) == Some(&b'\n');
        loop {
            match self.peek() {
                b'\n' => {
                    if blank {
                        comments.clear();
                    }
                    blank = true;
                    self.advance();
                }
                b' ' | b'\r' | b'\t' => {
                    self.advance();
                }
                b'!' => {
                    let ln = self.line;
                    let own_line = blank;
                    let bytes = self.rest_of_line();
                    let c = self.decode(bytes, ln)?;
                    let c = c.trim_end();
                    if own_line && !c.starts_with("!-") {
                        comments.push(c.to_string());
                    }
                    blank = true;
                }
                _ => return Ok(comments),
            }
        }
    }

    /// Consumes a whole object: its class name and its fields, until a `;`.
    fn object(&mut self) -> Result<IdfObject, IdfError> {
        let start_line = self.line;
        let mut tokens: Vec<String> = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        loop {
            if self.finished {
                let class_name = tokens.first().map(|s| s.as_str()).unwrap_or("");
                return Err(Self::make_error(
                    format!(
                        "object '{}' starting in this line was not terminated by ';'",
                        class_name
                    ),
                    start_line,
                ));
            }
            let ln = self.line;
            match self.advance() {
                Some(b'!') => {
                    // comment until end of line
                    self.rest_of_line();
                }
                Some(b',') => {
                    let t = std::mem::take(&mut current);
                    tokens.push(self.decode(t, ln)?.trim().to_string());
                }
                Some(b';') => {
                    let t = std::mem::take(&mut current);
                    tokens.push(self.decode(t, ln)?.trim().to_string());
                    break;
                }
                Some(c) => current.push(c),
                None => {}
            }
        }

        let mut tokens = tokens.into_iter();
        let class_name = tokens.next().unwrap_or_default();
        if class_name.is_empty() {
            return Err(Self::make_error("object with no class name", start_line));
        }
        let obj = IdfObject::from_fields(&class_name, tokens.collect());
        if obj.object_type() == IddObjectType::Unknown {
            tracing::debug!("reading unsupported class '{}' as Unknown", class_name);
        }
        Ok(obj)
    }

    /// Parses a whole [`Workspace`]
    pub(crate) fn parse_workspace(&mut self) -> Result<Workspace, IdfError> {
        let mut ws = Workspace::default();
        loop {
            let comments = self.skip_white_space_and_comments()?;
            if self.finished {
                break;
            }
            let mut obj = self.object()?;
            if !comments.is_empty() {
                obj.set_comment(&comments.join("\n"));
            }
            ws.add_object(obj);
        }
        Ok(ws)
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_error() {
        let err = IdfScanner::make_error("the error", 1);
        assert_eq!(format!("{}", err), "Error [in line 1]: the error")
    }

    #[test]
    fn scan_object() -> Result<(), IdfError> {
        let source = b"Zone, Kitchen , 0 ; ";
        let mut scan = IdfScanner::new(source, 1);
        let obj = scan.object()?;
        assert_eq!(obj.object_type(), IddObjectType::Zone);
        assert_eq!(obj.name(), Some("Kitchen"));
        assert_eq!(obj.get_double(1), Some(0.0));
        // Padded to the fixed fields
        assert_eq!(obj.num_fields(), 10);
        Ok(())
    }

    #[test]
    fn scan_comments() -> Result<(), IdfError> {
        let source = "
! The kitchen
! is small
Zone,
  Kitchen;   !- Name

ZoneList,
  All Zones, !- Name
  Kitchen,   ! a comment, with a comma
  Bedroom;   !- Zone 2 Name
"
        .as_bytes();
        let mut scan = IdfScanner::new(source, 1);
        let ws = scan.parse_workspace()?;
        assert_eq!(ws.len(), 2);
        let zone = &ws.objects()[0];
        assert_eq!(zone.comment(), Some("! The kitchen\n! is small"));
        let list = &ws.objects()[1];
        assert!(list.comment().is_none());
        assert_eq!(list.extensible_groups().len(), 2);
        assert_eq!(list.get_string(2), Some("Bedroom"));
        Ok(())
    }

    #[test]
    fn scan_separated_comments() -> Result<(), IdfError> {
        let source = "! Written by hand

Version, 24.1; ! the version

! The kitchen

! is small
Zone, Kitchen;
! The bedroom
Zone, Bedroom;
"
        .as_bytes();
        let mut scan = IdfScanner::new(source, 1);
        let ws = scan.parse_workspace()?;
        assert_eq!(ws.len(), 3);
        assert!(ws.objects()[0].comment().is_none());
        assert_eq!(ws.objects()[1].comment(), Some("! is small"));
        assert_eq!(ws.objects()[2].comment(), Some("! The bedroom"));
        Ok(())
    }

    #[test]
    fn scan_unterminated() {
        let source = "Version, 24.1;\n\nZone,\n  Kitchen,\n  0".as_bytes();
        let mut scan = IdfScanner::new(source, 1);
        match scan.parse_workspace() {
            Err(IdfError::Syntax { line, msg }) => {
                assert_eq!(line, 3);
                assert!(msg.contains("Zone"));
            }
            _ => panic!("expected a syntax error"),
        }
    }

    #[test]
    fn scan_unknown_and_utf8() -> Result<(), IdfError> {
        let source = "Site:Location, Valparaíso, -33.0;".as_bytes();
        let mut scan = IdfScanner::new(source, 1);
        let ws = scan.parse_workspace()?;
        let obj = &ws.objects()[0];
        assert_eq!(obj.object_type(), IddObjectType::Unknown);
        assert_eq!(obj.class_name(), "Site:Location");
        assert_eq!(obj.get_string(0), Some("Valparaíso"));
        assert_eq!(obj.get_double(1), Some(-33.0));
        Ok(())
    }
}
