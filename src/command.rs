use serde::Serialize;
use thiserror::Error;

use crate::prefix_store::{InvalidInputError, PrefixStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Find(String),
}

/// Result of a single `find`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub prefix: String,
    pub count: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown operation {0:?}, expected \"add\" or \"find\"")]
    UnknownOperation(String),

    #[error("expected \"<operation> <contact>\", got {0:?}")]
    Malformed(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();

        let (operation, argument) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(operation), Some(argument), None) => (operation, argument),
            _ => return Err(CommandError::Malformed(line.trim().to_string())),
        };

        let command = match operation {
            "add" => Command::Add(argument.to_string()),
            "find" => Command::Find(argument.to_string()),
            other => return Err(CommandError::UnknownOperation(other.to_string())),
        };

        Ok(command)
    }

    pub fn apply(&self, store: &mut PrefixStore) -> Result<Option<Answer>, CommandError> {
        match self {
            Command::Add(contact) => {
                store.insert(contact)?;
                Ok(None)
            }
            Command::Find(prefix) => {
                let count = store.count_with_prefix(prefix)?;
                Ok(Some(Answer {
                    prefix: prefix.clone(),
                    count,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_operations() {
        assert_eq!(
            Command::parse("add hack").unwrap(),
            Command::Add("hack".to_string())
        );
        assert_eq!(
            Command::parse("  find   hac \r").unwrap(),
            Command::Find("hac".to_string())
        );
    }

    #[test]
    fn rejects_unknown_operation() {
        assert_eq!(
            Command::parse("remove hack").unwrap_err(),
            CommandError::UnknownOperation("remove".to_string())
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            Command::parse("add").unwrap_err(),
            CommandError::Malformed(_)
        ));
        assert!(matches!(
            Command::parse("add hack rank").unwrap_err(),
            CommandError::Malformed(_)
        ));
        assert!(matches!(
            Command::parse("").unwrap_err(),
            CommandError::Malformed(_)
        ));
    }

    #[test]
    fn invalid_contact_surfaces_on_apply() {
        let mut store = PrefixStore::new();
        let command = Command::parse("add Hack").unwrap();

        assert!(matches!(
            command.apply(&mut store).unwrap_err(),
            CommandError::InvalidInput(InvalidInputError { character: 'H', position: 0 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn find_yields_answer() {
        let mut store = PrefixStore::new();
        assert_eq!(Command::Add("hack".into()).apply(&mut store).unwrap(), None);

        let answer = Command::Find("ha".into()).apply(&mut store).unwrap();
        assert_eq!(
            answer,
            Some(Answer {
                prefix: "ha".to_string(),
                count: 1
            })
        );
    }
}
