// Copyright 2025 the VizMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Error returned when a string option does not name a known value.
///
/// Options such as `orient` or a symbol name usually arrive as strings from a
/// declarative chart description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptionError {
    option: &'static str,
    value: String,
}

impl ParseOptionError {
    /// Creates an error for `option` holding the unrecognized `value`.
    pub fn new(option: &'static str, value: impl Into<String>) -> Self {
        Self {
            option,
            value: value.into(),
        }
    }

    /// The option name, e.g. `"orient"`.
    pub fn option(&self) -> &'static str {
        self.option
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value `{}` for option `{}`", self.value, self.option)
    }
}

impl core::error::Error for ParseOptionError {}
