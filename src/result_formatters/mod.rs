pub mod json;
pub mod plain;

use color_eyre::Result;
use std::io::{self, Write};

use crate::command::Answer;
use crate::config::{Config, OutputFormat};
use crate::session::SessionResult;

/// Writes a single answer while the session is still running.
pub fn answer(config: &Config, answer: &Answer, out: &mut dyn Write) -> Result<()> {
    match config.output_format {
        OutputFormat::Plain => self::plain::answer(answer, out),
        OutputFormat::Json => Ok(()),
    }
}

pub fn call(config: &Config, result: &SessionResult) -> Result<()> {
    let formatter = match config.output_format {
        OutputFormat::Plain => self::plain::call,
        OutputFormat::Json => self::json::call,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    formatter(config, result, &mut out)?;
    out.flush()?;
    Ok(())
}
