//! Recognized-flag extraction from a foreign argument list.
//!
//! Responsibilities:
//! - Pull the values of the recognized flags (`--config`/`-c`,
//!   `--workspace`/`-w`) out of the host application's argv.
//!
//! Does NOT handle:
//! - Full argument parsing. The host application owns its argv; anything
//!   this module does not recognize is left alone, which is why a strict
//!   parser is not usable here.
//!
//! Invariants:
//! - Supported forms: `--flag value`, `--flag=value`, `-f value`.
//! - The first occurrence wins; a flag at the end of argv with no value
//!   following it is treated as absent.

/// Extract the value of a recognized flag (or its alias) from `argv`.
pub(crate) fn flag_value(argv: &[String], flag: &str, alias: &str) -> Option<String> {
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        if arg == flag || arg == alias {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn separate_value_form() {
        let args = argv(&["--verbose", "--config", "custom.env", "positional"]);
        assert_eq!(
            flag_value(&args, "--config", "-c").as_deref(),
            Some("custom.env")
        );
    }

    #[test]
    fn equals_form() {
        let args = argv(&["--config=custom.env"]);
        assert_eq!(
            flag_value(&args, "--config", "-c").as_deref(),
            Some("custom.env")
        );
    }

    #[test]
    fn short_alias() {
        let args = argv(&["-c", "custom.env"]);
        assert_eq!(
            flag_value(&args, "--config", "-c").as_deref(),
            Some("custom.env")
        );
    }

    #[test]
    fn absent_flag() {
        let args = argv(&["--workspace", "/tmp/ws"]);
        assert_eq!(flag_value(&args, "--config", "-c"), None);
    }

    #[test]
    fn trailing_flag_without_value_is_absent() {
        let args = argv(&["--config"]);
        assert_eq!(flag_value(&args, "--config", "-c"), None);
    }

    #[test]
    fn unrecognized_flags_are_ignored() {
        let args = argv(&["--color=always", "-v", "-w", "/tmp/ws"]);
        assert_eq!(
            flag_value(&args, "--workspace", "-w").as_deref(),
            Some("/tmp/ws")
        );
    }
}
