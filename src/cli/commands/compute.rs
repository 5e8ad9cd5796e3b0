use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::modthree::{ModThree, Remainder};

/// JSON shape of a successful computation
#[derive(Debug, Serialize)]
pub struct ComputeReport<'a> {
    pub input: &'a str,
    pub remainder: u8,
    pub state: Remainder,
}

pub struct ComputeCommand<'a> {
    pub machine: &'a ModThree,
    pub format: OutputFormat,
}

impl<'a> ComputeCommand<'a> {
    pub fn new(machine: &'a ModThree) -> Self {
        Self {
            machine,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn execute(&self, input: &str, out: &mut impl Write) -> Result<u8> {
        tracing::info!(input, "Computing remainder");

        let state = self
            .machine
            .final_state(input)
            .with_context(|| format!("could not compute {input:?} mod 3"))?;
        let remainder = state.value();

        match self.format {
            OutputFormat::Text => {
                writeln!(out, "The result of {} mod 3 is: {}", input, remainder)?;
            }
            OutputFormat::Json => {
                let report = ComputeReport { input, remainder, state };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
        }

        tracing::info!(input, remainder, state = %state, "Remainder computed");
        Ok(remainder)
    }
}
