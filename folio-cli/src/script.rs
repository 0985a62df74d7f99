//! Line-oriented commands accepted by `folio play` on stdin.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    Next,
    Previous,
    GoTo(usize),
    Hover,
    Leave,
    Resize(u32),
    Swipe { from: f32, to: f32 },
    /// Stop reading input for a while; the carousel keeps running.
    Wait(Duration),
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ScriptError::Unknown(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let command = match head.to_ascii_lowercase().as_str() {
            "next" | "n" => ScriptCommand::Next,
            "prev" | "previous" | "p" => ScriptCommand::Previous,
            "goto" | "go" => ScriptCommand::GoTo(
                one(&args)
                    .and_then(|raw| raw.parse().ok())
                    .ok_or(bad("goto", "an indicator number"))?,
            ),
            "hover" => ScriptCommand::Hover,
            "leave" => ScriptCommand::Leave,
            "resize" => ScriptCommand::Resize(
                one(&args)
                    .and_then(|raw| raw.parse().ok())
                    .ok_or(bad("resize", "a width in pixels"))?,
            ),
            "swipe" => match args.as_slice() {
                [from, to] => match (from.parse(), to.parse()) {
                    (Ok(from), Ok(to)) => ScriptCommand::Swipe { from, to },
                    _ => return Err(bad("swipe", "two x coordinates")),
                },
                _ => return Err(bad("swipe", "two x coordinates")),
            },
            "wait" => ScriptCommand::Wait(
                one(&args)
                    .and_then(|raw| humantime::parse_duration(raw).ok())
                    .ok_or(bad("wait", "a duration such as 5s"))?,
            ),
            "quit" | "exit" | "q" => ScriptCommand::Quit,
            _ => return Err(ScriptError::Unknown(head.to_string())),
        };
        Ok(command)
    }
}

fn one<'a>(args: &[&'a str]) -> Option<&'a str> {
    match args {
        [only] => Some(only),
        _ => None,
    }
}

fn bad(command: &'static str, expected: &'static str) -> ScriptError {
    ScriptError::BadArgument { command, expected }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let cases = [
            ("next", ScriptCommand::Next),
            ("prev", ScriptCommand::Previous),
            ("goto 3", ScriptCommand::GoTo(3)),
            ("hover", ScriptCommand::Hover),
            ("leave", ScriptCommand::Leave),
            ("resize 375", ScriptCommand::Resize(375)),
            (
                "swipe 200 120.5",
                ScriptCommand::Swipe {
                    from: 200.0,
                    to: 120.5,
                },
            ),
            ("wait 1500ms", ScriptCommand::Wait(Duration::from_millis(1500))),
            ("  QUIT  ", ScriptCommand::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse::<ScriptCommand>(), Ok(expected), "{line}");
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            "goto".parse::<ScriptCommand>(),
            Err(bad("goto", "an indicator number"))
        );
        assert_eq!(
            "resize wide".parse::<ScriptCommand>(),
            Err(bad("resize", "a width in pixels"))
        );
        assert_eq!(
            "swipe 1".parse::<ScriptCommand>(),
            Err(bad("swipe", "two x coordinates"))
        );
        assert_eq!(
            "dance".parse::<ScriptCommand>(),
            Err(ScriptError::Unknown("dance".into()))
        );
    }
}
