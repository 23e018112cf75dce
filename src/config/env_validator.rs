//! Environment variable validation with helpful warnings
//!
//! Invalid `SOLPIPE_*` values never abort loading. The validator logs a warning
//! with a typo suggestion and the caller keeps its previous value.

use std::io::Write;

use tracing::warn;

use crate::domain::services::closest_match;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// `valid_values` is only used for messages; `parser` decides validity.
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` if invalid (with a `warn!` log)
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                warn!("{}", self.warning(value));
                default
            }
        }
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let _ = writeln!(writer, "Warning: {}", self.warning(value));
                default
            }
        }
    }

    fn warning(&self, value: &str) -> String {
        let mut message = format!(
            "Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        if !self.valid_values.is_empty() {
            message.push_str(&format!("; valid values: {}", self.valid_values.join(", ")));
        }
        message
    }

    fn suggest(&self, value: &str) -> String {
        match closest_match(value, self.valid_values.iter().copied(), 2) {
            Some(suggested) if !suggested.eq_ignore_ascii_case(value) => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}
