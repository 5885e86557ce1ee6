/// Console command parsing
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} needs an argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid argument for {command}: {value:?}")]
    InvalidArgument { command: &'static str, value: String },
}

/// One line of console input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play,
    Next,
    Prev,
    Shuffle,
    Repeat,
    Like,
    /// Click on the progress track at a fraction of its width
    Seek(f64),
    /// Raw volume input, validated by the controller
    Volume(String),
    Upload(Vec<PathBuf>),
    Card(usize),
    /// Advance the simulated clock
    Tick(f64),
    End,
    Reject(String),
    Status,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Blank lines and lines starting with `#` yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "play" | "pause" => Self::Play,
            "next" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "shuffle" => Self::Shuffle,
            "repeat" => Self::Repeat,
            "like" => Self::Like,
            "seek" => Self::Seek(number(rest, "seek", "<fraction>")?),
            "volume" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "volume",
                        expected: "<value>",
                    });
                }
                Self::Volume(rest.to_string())
            }
            "upload" => Self::Upload(rest.split_whitespace().map(PathBuf::from).collect()),
            "card" => {
                let value = required(rest, "card", "<n>")?;
                Self::Card(value.parse().map_err(|_| CommandError::InvalidArgument {
                    command: "card",
                    value: value.to_string(),
                })?)
            }
            "tick" => {
                let seconds = number(rest, "tick", "<seconds>")?;
                if seconds < 0.0 {
                    return Err(CommandError::InvalidArgument {
                        command: "tick",
                        value: rest.to_string(),
                    });
                }
                Self::Tick(seconds)
            }
            "end" => Self::End,
            "reject" => {
                let reason = if rest.is_empty() {
                    "NotAllowedError"
                } else {
                    rest
                };
                Self::Reject(reason.to_string())
            }
            "status" => Self::Status,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn number(rest: &str, command: &'static str, expected: &'static str) -> Result<f64, CommandError> {
    let value = required(rest, command, expected)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidArgument {
            command,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("play").unwrap(), Some(Command::Play));
        assert_eq!(Command::parse("  NEXT ").unwrap(), Some(Command::Next));
        assert_eq!(Command::parse("previous").unwrap(), Some(Command::Prev));
        assert_eq!(Command::parse("end").unwrap(), Some(Command::End));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# warm up").unwrap(), None);
    }

    #[test]
    fn parses_arguments() {
        assert_eq!(Command::parse("seek 0.5").unwrap(), Some(Command::Seek(0.5)));
        assert_eq!(Command::parse("tick 2.5").unwrap(), Some(Command::Tick(2.5)));
        assert_eq!(Command::parse("card 3").unwrap(), Some(Command::Card(3)));
        assert_eq!(
            Command::parse("reject AbortError").unwrap(),
            Some(Command::Reject("AbortError".to_string()))
        );
        assert_eq!(
            Command::parse("upload a.mp3 b/c.flac").unwrap(),
            Some(Command::Upload(vec![
                PathBuf::from("a.mp3"),
                PathBuf::from("b/c.flac")
            ]))
        );
    }

    #[test]
    fn volume_is_passed_through_raw() {
        // Range checks happen in the controller
        assert_eq!(
            Command::parse("volume 1.5").unwrap(),
            Some(Command::Volume("1.5".to_string()))
        );
        assert_eq!(
            Command::parse("volume abc").unwrap(),
            Some(Command::Volume("abc".to_string()))
        );
    }

    #[test]
    fn upload_without_paths_is_empty_selection() {
        assert_eq!(
            Command::parse("upload").unwrap(),
            Some(Command::Upload(Vec::new()))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert!(matches!(
            Command::parse("seek"),
            Err(CommandError::MissingArgument { command: "seek", .. })
        ));
        assert!(matches!(
            Command::parse("seek far"),
            Err(CommandError::InvalidArgument { command: "seek", .. })
        ));
        assert!(matches!(
            Command::parse("card -1"),
            Err(CommandError::InvalidArgument { command: "card", .. })
        ));
        assert!(matches!(
            Command::parse("tick -3"),
            Err(CommandError::InvalidArgument { command: "tick", .. })
        ));
        assert!(matches!(
            Command::parse("tick inf"),
            Err(CommandError::InvalidArgument { command: "tick", .. })
        ));
    }
}
