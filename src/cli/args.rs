//! Command-line argument parsing for the MediVibe CLI.

use crate::models::AssistantKind;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Compute a BMI reading
    Bmi { height_cm: f64, weight_kg: f64 },
    /// List the hospital directory (optionally narrowed to a state/city)
    Directory {
        state: Option<String>,
        city: Option<String>,
    },
    /// Run the interactive chat (default)
    Chat { kind: AssistantKind },
    /// Arguments could not be parsed
    Invalid { message: String },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use medivibe::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["medivibe".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--version") | Some("-V") => CliCommand::Version,
        Some("--help") | Some("-h") | Some("help") => CliCommand::Help,
        Some("bmi") => parse_bmi(&args[1..]),
        Some("directory") => CliCommand::Directory {
            state: args.get(1).cloned(),
            city: args.get(2).cloned(),
        },
        Some("chat") | None => parse_chat(&args),
        Some(other) => CliCommand::Invalid {
            message: format!("unknown command '{}'", other),
        },
    }
}

fn parse_bmi(args: &[String]) -> CliCommand {
    let (Some(height), Some(weight)) = (args.first(), args.get(1)) else {
        return CliCommand::Invalid {
            message: "bmi requires <height-cm> <weight-kg>".to_string(),
        };
    };
    match (height.parse(), weight.parse()) {
        (Ok(height_cm), Ok(weight_kg)) => CliCommand::Bmi { height_cm, weight_kg },
        _ => CliCommand::Invalid {
            message: "bmi arguments must be numbers".to_string(),
        },
    }
}

fn parse_chat(args: &[String]) -> CliCommand {
    let mut kind = AssistantKind::Health;
    for arg in args {
        match arg.as_str() {
            "--meal" => kind = AssistantKind::Meal,
            "--health" | "chat" => {}
            other => {
                return CliCommand::Invalid {
                    message: format!("unknown chat option '{}'", other),
                }
            }
        }
    }
    CliCommand::Chat { kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut full = vec!["medivibe".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        parse_args(full.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["help"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args_defaults_to_health_chat() {
        assert_eq!(
            parse(&[]),
            CliCommand::Chat {
                kind: AssistantKind::Health
            }
        );
    }

    #[test]
    fn test_parse_meal_chat() {
        assert_eq!(
            parse(&["chat", "--meal"]),
            CliCommand::Chat {
                kind: AssistantKind::Meal
            }
        );
    }

    #[test]
    fn test_parse_bmi() {
        assert_eq!(
            parse(&["bmi", "170", "70"]),
            CliCommand::Bmi {
                height_cm: 170.0,
                weight_kg: 70.0
            }
        );
    }

    #[test]
    fn test_parse_bmi_missing_args() {
        assert!(matches!(parse(&["bmi", "170"]), CliCommand::Invalid { .. }));
        assert!(matches!(
            parse(&["bmi", "tall", "70"]),
            CliCommand::Invalid { .. }
        ));
    }

    #[test]
    fn test_parse_directory() {
        assert_eq!(
            parse(&["directory"]),
            CliCommand::Directory {
                state: None,
                city: None
            }
        );
        assert_eq!(
            parse(&["directory", "Delhi", "New Delhi"]),
            CliCommand::Directory {
                state: Some("Delhi".to_string()),
                city: Some("New Delhi".to_string())
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(parse(&["frobnicate"]), CliCommand::Invalid { .. }));
    }
}
