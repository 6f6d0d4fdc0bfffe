use color_eyre::eyre::{eyre, Context as _};
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::BufRead;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::command::{Answer, Command};
use crate::config::Config;
use crate::prefix_store::PrefixStore;

#[derive(Debug)]
pub struct SessionResult {
    pub store: PrefixStore,
    pub answers: Vec<Answer>,
    pub operations: usize,
    pub took: Duration,
}

/// Applies the operations read from `input` to a fresh store.
///
/// The first non-blank line holds the number of operations, each following
/// non-blank line one operation. Input after the last counted operation is
/// never read. Every answer is handed to `on_answer` as soon as it is known.
pub fn run<R, F>(config: &Config, input: R, mut on_answer: F) -> Result<SessionResult>
where
    R: BufRead,
    F: FnMut(&Answer) -> Result<()>,
{
    let now = Instant::now();
    let mut lines = numbered_lines(input);

    let operations = match lines.next() {
        None => return Err(eyre!("missing operation count")),
        Some(line) => {
            let (number, line) = line?;
            line.trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("line {}: invalid operation count {:?}", number, line))?
        }
    };
    debug!("Expecting {} operations", operations);

    let bar = if config.progress {
        ProgressBar::new(operations as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {wide_bar} {pos}/{len} ({percent}%) [ETA: {eta_precise}]")
            .wrap_err("failed to set progress bar style")?,
    );

    let mut store = PrefixStore::new();
    let mut answers = Vec::new();

    for applied in 0..operations {
        let (number, line) = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(eyre!(
                    "expected {} operations, input ended after {}",
                    operations,
                    applied
                ))
            }
        };

        let command = Command::parse(&line).wrap_err_with(|| format!("line {}", number))?;
        if let Some(answer) = command
            .apply(&mut store)
            .wrap_err_with(|| format!("line {}", number))?
        {
            on_answer(&answer)?;
            answers.push(answer);
        }

        bar.inc(1);
    }

    bar.finish();

    let took = now.elapsed();
    info!(
        "Applied {} operations ({} finds) in {}",
        operations,
        answers.len(),
        humantime::format_duration(took)
    );

    Ok(SessionResult {
        store,
        answers,
        operations,
        took,
    })
}

fn numbered_lines<R: BufRead>(input: R) -> impl Iterator<Item = Result<(usize, String)>> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|line| (i + 1, line))
                .wrap_err_with(|| format!("reading line {}", i + 1))
        })
        .filter(|line| match line {
            Ok((_, line)) => !line.trim().is_empty(),
            Err(_) => true,
        })
}
