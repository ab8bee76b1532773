//! Recursive-descent parser for qualified type names.
//!
//! ```text
//! Type         := Name TemplatePart? ArrayPart?
//! Name         := Ident (('.' | '/') Ident)*
//! TemplatePart := '`' Arity '<' Type (',' Type)* '>'
//! ArrayPart    := ('[' ']')+
//! ```
//!
//! The parser works on byte offsets into the input and only ever advances by
//! whole characters, so every slice it takes is on a char boundary. Template
//! arguments nest at most [`MAX_TEMPLATE_DEPTH`] levels.

use super::MAX_TEMPLATE_DEPTH;
use crate::errors::TypeNameError;
use std::collections::BTreeSet;

pub(super) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    namespaces: &'a BTreeSet<String>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str, namespaces: &'a BTreeSet<String>) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            namespaces,
        }
    }

    pub(super) fn run(mut self) -> Result<String, TypeNameError> {
        let simplified = self.read_type()?;
        if self.pos < self.input.len() {
            return Err(TypeNameError::ExtraContents {
                rest: self.input[self.pos..].to_string(),
            });
        }
        Ok(simplified)
    }

    fn read_type(&mut self) -> Result<String, TypeNameError> {
        let mut out = self.read_name()?;
        out.push_str(&self.read_template_part()?);
        out.push_str(self.read_array_part()?);
        Ok(out)
    }

    /// Reads `Ident (Sep Ident)*` and drops a well-known namespace prefix.
    fn read_name(&mut self) -> Result<String, TypeNameError> {
        let start = self.pos;
        if !self.read_ident() {
            return Ok(String::new());
        }

        let mut last_sep = None;
        while let Some(sep @ ('.' | '/')) = self.peek() {
            last_sep = Some(self.pos);
            self.bump(sep);
            if !self.read_ident() {
                return Err(TypeNameError::NameCharMissing { offset: self.pos });
            }
        }

        let input = self.input;
        let name = match last_sep {
            Some(sep) if self.namespaces.contains(&input[start..sep]) => &input[sep + 1..self.pos],
            _ => &input[start..self.pos],
        };
        Ok(name.to_string())
    }

    fn read_ident(&mut self) -> bool {
        match self.peek() {
            Some(c) if is_name_lead(c) => self.bump(c),
            _ => return false,
        }
        while let Some(c) = self.peek().filter(|c| is_name_char(*c)) {
            self.bump(c);
        }
        true
    }

    fn read_template_part(&mut self) -> Result<String, TypeNameError> {
        if !self.eat('`') {
            return Ok(String::new());
        }

        let arity_offset = self.pos;
        let mut arity = match self.peek().and_then(|c| c.to_digit(10)) {
            Some(d) if d > 0 => d as usize,
            _ => {
                return Err(TypeNameError::NonZeroDigitMissing {
                    offset: arity_offset,
                })
            }
        };
        self.advance();
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            arity = arity.saturating_mul(10).saturating_add(d as usize);
            self.advance();
        }

        if !self.eat('<') {
            return Err(TypeNameError::LessThanMissing { offset: self.pos });
        }

        let mut args = Vec::new();
        args.push(self.read_template_argument()?);
        for _ in 1..arity {
            if !self.eat(',') {
                return Err(TypeNameError::CommaMissing { offset: self.pos });
            }
            args.push(self.read_template_argument()?);
        }

        if !self.eat('>') {
            return Err(TypeNameError::GreaterThanMissing { offset: self.pos });
        }
        Ok(format!("<{}>", args.join(",")))
    }

    fn read_template_argument(&mut self) -> Result<String, TypeNameError> {
        let offset = self.pos;
        if self.depth >= MAX_TEMPLATE_DEPTH {
            return Err(TypeNameError::TooDeep { offset });
        }
        self.depth += 1;
        let arg = self.read_type();
        self.depth -= 1;
        let arg = arg?;
        if arg.is_empty() {
            return Err(TypeNameError::TemplateTypeMissing { offset });
        }
        Ok(arg)
    }

    /// Reads one or more `[]` groups, returned verbatim.
    fn read_array_part(&mut self) -> Result<&'a str, TypeNameError> {
        let start = self.pos;
        if self.peek() != Some('[') {
            return Ok("");
        }
        while self.eat('[') {
            if !self.eat(']') {
                return Err(TypeNameError::ClosingBracketMissing { offset: self.pos });
            }
        }
        let input = self.input;
        Ok(&input[start..self.pos])
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.bump(c);
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump(expected);
            true
        } else {
            false
        }
    }
}

fn is_name_lead(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
