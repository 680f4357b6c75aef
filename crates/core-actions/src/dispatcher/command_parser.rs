//! Structured command line parsing.
//!
//! Converts the raw command buffer (normally beginning with ':') into a
//! `ParsedCommand`. Matching is exact and case-sensitive: no trimming, no
//! abbreviations, no arguments. Pure classification; side effects live in
//! `command.rs`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    Quit,
    WriteQuit,
    /// Bare ':' or an emptied buffer; nothing to execute.
    Empty,
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        if raw.is_empty() || raw == ":" {
            return ParsedCommand::Empty;
        }
        let Some(body) = raw.strip_prefix(':') else {
            return ParsedCommand::Unknown(raw.to_string());
        };
        match body {
            "w" => ParsedCommand::Write,
            "q" => ParsedCommand::Quit,
            "wq" => ParsedCommand::WriteQuit,
            _ => ParsedCommand::Unknown(body.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(CommandParser::parse(":q"), ParsedCommand::Quit);
    }

    #[test]
    fn parse_write() {
        assert_eq!(CommandParser::parse(":w"), ParsedCommand::Write);
    }

    #[test]
    fn parse_write_quit() {
        assert_eq!(CommandParser::parse(":wq"), ParsedCommand::WriteQuit);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(CommandParser::parse(":"), ParsedCommand::Empty);
        assert_eq!(CommandParser::parse(""), ParsedCommand::Empty);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(
            CommandParser::parse(":w "),
            ParsedCommand::Unknown("w ".into())
        );
        assert_eq!(CommandParser::parse(":Q"), ParsedCommand::Unknown("Q".into()));
        assert_eq!(CommandParser::parse("w"), ParsedCommand::Unknown("w".into()));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            CommandParser::parse(":doesnotexist"),
            ParsedCommand::Unknown("doesnotexist".into())
        );
    }
}
