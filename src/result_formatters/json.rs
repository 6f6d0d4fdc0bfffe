use color_eyre::Result;
use serde::Serialize;
use std::io::Write;

use crate::command::Answer;
use crate::config::Config;
use crate::prefix_store::PrefixStore;
use crate::session::SessionResult;

#[derive(Serialize)]
struct Report<'a> {
    answers: &'a [Answer],
    operations: usize,
    took_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a PrefixStore>,
}

pub fn call(config: &Config, result: &SessionResult, out: &mut dyn Write) -> Result<()> {
    let report = Report {
        answers: &result.answers,
        operations: result.operations,
        took_ms: result.took.as_millis(),
        tree: if config.tree { Some(&result.store) } else { None },
    };

    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
