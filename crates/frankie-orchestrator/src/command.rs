//! Built-in REPL commands.

use crate::shortcuts::normalize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Clear,
    Shortcuts,
    /// `!`-prefixed shell escape; the command may be empty.
    Shell(String),
    Blank,
    Text(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Command::Blank;
        }
        if let Some(rest) = trimmed.strip_prefix('!') {
            return Command::Shell(rest.trim().to_string());
        }
        match normalize(trimmed).as_str() {
            "exit" | "quit" | "bye" => Command::Exit,
            "help" | "?" => Command::Help,
            "clear" => Command::Clear,
            "shortcuts" | "shortcut" | "macros" | "list shortcuts" => Command::Shortcuts,
            _ => Command::Text(trimmed.to_string()),
        }
    }

    /// Commands that discard a pending research topic.
    pub fn clears_research(&self) -> bool {
        matches!(
            self,
            Command::Exit | Command::Help | Command::Clear | Command::Shortcuts | Command::Shell(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtins() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse(" QUIT "), Command::Exit);
        assert_eq!(Command::parse("bye"), Command::Exit);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("Help"), Command::Help);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("macros"), Command::Shortcuts);
        assert_eq!(Command::parse("list   shortcuts"), Command::Shortcuts);
    }

    #[test]
    fn test_parse_shell_and_text() {
        assert_eq!(Command::parse("!ls -la"), Command::Shell("ls -la".into()));
        assert_eq!(Command::parse("  !  "), Command::Shell(String::new()));
        assert_eq!(Command::parse("   "), Command::Blank);
        assert_eq!(
            Command::parse("  exit the building "),
            Command::Text("exit the building".into())
        );
    }

    #[test]
    fn test_clears_research() {
        assert!(Command::Help.clears_research());
        assert!(Command::Shell(String::new()).clears_research());
        assert!(!Command::Blank.clears_research());
        assert!(!Command::Text("x".into()).clears_research());
    }
}
