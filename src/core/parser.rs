// src/core/parser.rs

use crate::{constants::MAX_SUGGESTIONS, models::ParsedCommand};

/// Linux-style command names the shell recognizes for translation.
const LINUX_COMMANDS: &[&str] = &[
    "ls", "ps", "kill", "rm", "cp", "mv", "cd", "pwd", "cat", "grep", "find", "tail", "head",
    "top", "df", "du", "free", "which", "whoami", "uname", "chmod", "chown", "mkdir", "rmdir",
    "touch", "ln", "tar", "gzip", "gunzip", "wget", "curl", "ping", "netstat", "ssh", "scp",
    "rsync", "cron", "history",
];

/// Docker CLI verbs accepted directly (with or without the `docker` prefix).
const DOCKER_COMMANDS: &[&str] = &[
    "docker", "run", "build", "pull", "push", "ps", "images", "rmi", "rm", "start", "stop",
    "restart", "kill", "logs", "exec", "cp", "commit", "create", "pause", "unpause", "wait",
    "export", "import", "save", "load", "tag", "inspect", "stats", "top", "port", "network",
    "volume", "system",
];

/// Commands handled inside the shell itself.
const BUILTIN_COMMANDS: &[&str] = &[
    "exit", "quit", "help", "version", "alias", "unalias", "theme", "lang", "config", "mapping",
    "search", "list", "pwd", "clear", "cls",
];

/// Short options that never take a value. Any other `-x` consumes the next
/// token as its value unless that token itself looks like an option.
const FLAG_OPTIONS: &[&str] = &[
    "f",
    "follow",
    "a",
    "all",
    "l",
    "long",
    "h",
    "help",
    "v",
    "verbose",
    "q",
    "quiet",
    "r",
    "recursive",
    "i",
    "interactive",
    "force",
    "dry-run",
];

/// Tokenizes raw input lines and classifies command names against the fixed
/// builtin/Linux/Docker vocabularies.
///
/// Tokenization is whitespace-only: there is no quoting, piping, or
/// redirection support.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses one input line. Blank or whitespace-only input yields `None`,
    /// which is not an error.
    pub fn parse(&self, input: &str) -> Option<ParsedCommand> {
        let mut tokens = input.split_whitespace();
        let command = tokens.next()?.to_string();

        let mut args = Vec::new();
        let mut options = std::collections::HashMap::new();
        let mut tokens = tokens.peekable();

        while let Some(token) = tokens.next() {
            if let Some(rest) = token.strip_prefix("--") {
                // Long option: `--name` or `--name=value`.
                match rest.split_once('=') {
                    Some((key, value)) => {
                        options.insert(key.to_string(), value.to_string());
                    }
                    None => {
                        options.insert(rest.to_string(), "true".to_string());
                    }
                }
            } else if let Some(key) = token.strip_prefix('-').filter(|k| !k.is_empty()) {
                if is_flag_option(key) {
                    options.insert(key.to_string(), "true".to_string());
                } else if let Some(next) = tokens.peek().filter(|next| !next.starts_with('-')) {
                    options.insert(key.to_string(), next.to_string());
                    tokens.next();
                } else {
                    options.insert(key.to_string(), "true".to_string());
                }
            } else {
                args.push(token.to_string());
            }
        }

        Some(ParsedCommand {
            is_builtin: self.is_builtin_command(&command),
            is_linux: self.is_linux_command(&command),
            is_docker: self.is_docker_command(&command),
            command,
            args,
            options,
        })
    }

    pub fn is_linux_command(&self, cmd: &str) -> bool {
        LINUX_COMMANDS.contains(&cmd)
    }

    pub fn is_docker_command(&self, cmd: &str) -> bool {
        DOCKER_COMMANDS.contains(&cmd)
    }

    pub fn is_builtin_command(&self, cmd: &str) -> bool {
        BUILTIN_COMMANDS.contains(&cmd)
    }

    /// Case-insensitive substring match across all three vocabularies,
    /// builtins first, capped at [`MAX_SUGGESTIONS`]. For completion use only.
    pub fn suggest(&self, input: &str) -> Vec<&'static str> {
        let needle = input.to_lowercase();
        BUILTIN_COMMANDS
            .iter()
            .chain(LINUX_COMMANDS.iter())
            .chain(DOCKER_COMMANDS.iter())
            .filter(|cmd| cmd.to_lowercase().contains(&needle))
            .copied()
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

fn is_flag_option(option: &str) -> bool {
    FLAG_OPTIONS.contains(&option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_no_command() {
        let parser = CommandParser::new();
        assert!(parser.parse("").is_none());
        assert!(parser.parse("   ").is_none());
        assert!(parser.parse("\t \n").is_none());
    }

    #[test]
    fn splits_command_args_and_long_options() {
        let parser = CommandParser::new();
        let parsed = parser.parse("ls --color=auto --all src lib").unwrap();
        assert_eq!(parsed.command, "ls");
        assert_eq!(parsed.args, vec!["src", "lib"]);
        assert_eq!(parsed.options.get("color").map(String::as_str), Some("auto"));
        assert_eq!(parsed.options.get("all").map(String::as_str), Some("true"));
    }

    #[test]
    fn flag_vocabulary_never_consumes_a_value() {
        let parser = CommandParser::new();
        let parsed = parser.parse("tail -f app.log").unwrap();
        assert_eq!(parsed.options.get("f").map(String::as_str), Some("true"));
        assert_eq!(parsed.args, vec!["app.log"]);
    }

    #[test]
    fn non_flag_short_option_consumes_following_token() {
        let parser = CommandParser::new();
        let parsed = parser.parse("find -name pattern").unwrap();
        assert_eq!(
            parsed.options.get("name").map(String::as_str),
            Some("pattern")
        );
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn short_option_does_not_consume_another_option() {
        let parser = CommandParser::new();
        let parsed = parser.parse("find -name -type").unwrap();
        assert_eq!(parsed.options.get("name").map(String::as_str), Some("true"));
        assert_eq!(parsed.options.get("type").map(String::as_str), Some("true"));
    }

    #[test]
    fn classification_is_set_membership() {
        let parser = CommandParser::new();
        let parsed = parser.parse("tail -f app").unwrap();
        assert!(parsed.is_linux);
        assert!(!parsed.is_docker);
        assert!(!parsed.is_builtin);

        // `ps` lives in both the Linux and Docker vocabularies.
        let parsed = parser.parse("ps -a").unwrap();
        assert!(parsed.is_linux);
        assert!(parsed.is_docker);

        let parsed = parser.parse("mapping search logs").unwrap();
        assert!(parsed.is_builtin);
    }

    #[test]
    fn suggestions_are_capped_and_builtin_first() {
        let parser = CommandParser::new();
        let suggestions = parser.suggest("p");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        // "help" (builtin) must come before "ps" (linux).
        let help_pos = suggestions.iter().position(|s| *s == "help");
        let ps_pos = suggestions.iter().position(|s| *s == "ps");
        if let (Some(h), Some(p)) = (help_pos, ps_pos) {
            assert!(h < p);
        }
        assert!(parser.suggest("zzzz").is_empty());
    }

    #[test]
    fn suggestions_match_case_insensitively() {
        let parser = CommandParser::new();
        assert!(parser.suggest("MAPP").contains(&"mapping"));
    }
}
