use color_eyre::eyre::Context as _;
use color_eyre::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::Config;

pub mod command;
pub mod config;
pub mod prefix_store;
pub mod result_formatters;
pub mod session;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::new();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let result = session::run(&config, open_input(&config)?, |answer| {
        result_formatters::answer(&config, answer, &mut stdout.lock())
    })?;

    result_formatters::call(&config, &result)
}

fn open_input(config: &Config) -> Result<Box<dyn BufRead>> {
    match &config.input {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let file = File::open(path)
                .wrap_err_with(|| format!("opening input ({})", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_operations_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3\nadd ed\nadd eddie\nfind ed\n").unwrap();

        let config = Config {
            input: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let result = session::run(&config, open_input(&config).unwrap(), |_| Ok(())).unwrap();

        assert_eq!(result.answers.len(), 1);
        assert_eq!(result.answers[0].count, 2);
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: Some(dir.path().join("missing.txt")),
            ..Config::default()
        };

        let err = open_input(&config).err().unwrap();
        assert!(err.to_string().starts_with("opening input"), "{}", err);
    }
}
