// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Console input - parsing and re-prompting for primitive values

use crate::error::InputError;
use std::io::{BufRead, Write};

/// Characters not allowed in a destination name
pub const FORBIDDEN_CHARS: &str = "!@#$%^&*()+=[]{}|;:,.<>?/\\\"'~`";

fn trimmed(raw: &str) -> Result<&str, InputError> {
    let value = raw.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\n' || c == '\r');
    if value.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(value)
}

fn all_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Validate a destination name
pub fn validate_destination(raw: &str) -> Result<String, InputError> {
    let value = trimmed(raw)?;
    if let Some(c) = value.chars().find(|c| FORBIDDEN_CHARS.contains(*c)) {
        return Err(InputError::ForbiddenCharacter(c));
    }
    Ok(value.to_string())
}

/// Parse a positive price; `,` is accepted as the decimal separator
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    let value = trimmed(raw)?.replace(',', ".");
    let separators = value.chars().filter(|c| *c == '.').count();
    if separators > 1 || !value.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(InputError::NotANumber);
    }
    // "." alone has no digits
    let price: f64 = value.parse().map_err(|_| InputError::NotANumber)?;
    if price <= 0.0 {
        return Err(InputError::NotPositive);
    }
    Ok(price)
}

/// Parse a whole discount percentage in `0..=100`
pub fn parse_percent(raw: &str) -> Result<u8, InputError> {
    let value = trimmed(raw)?;
    if !all_digits(value) {
        return Err(InputError::NotAnInteger);
    }
    value
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= 100)
        .ok_or(InputError::PercentOutOfRange)
}

/// Parse a positive menu selection
pub fn parse_menu_choice(raw: &str) -> Result<u32, InputError> {
    let value = trimmed(raw)?;
    if !all_digits(value) {
        return Err(InputError::NotAnInteger);
    }
    match value.parse::<u32>() {
        Ok(0) => Err(InputError::NotPositive),
        Ok(choice) => Ok(choice),
        Err(_) => Err(InputError::Overflow),
    }
}

/// Line-oriented prompter that asks again until the parser accepts
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output side, for text between prompts
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Ask until `parse` succeeds
    ///
    /// # Errors
    ///
    /// [`InputError::Closed`] at end of input, [`InputError::Io`] on read or
    /// write failure. Parse errors are printed and never returned.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Closed);
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::debug!(input = line.trim_end(), %err, "input rejected");
                    writeln!(self.writer, "Error: {err}")?;
                }
            }
        }
    }
}
