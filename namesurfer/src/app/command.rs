//! Text commands of the interactive mode, each turned into an event.

use std::path::PathBuf;

use app_core::{event::AppEvent, string_error::ErrorStringExt};

use super::{events::*, NameSurfer};

pub type DynEvent = Box<dyn AppEvent<App = NameSurfer>>;

pub const HELP: &str = "\
commands:
  graph NAME      add NAME to the chart
  clear           remove all names from the chart
  resize W H      change the viewport size
  show NAME       print the ranks of NAME
  list            print the names on display
  list all        print every name of the dataset
  export PATH     write the chart as svg
  save [PATH]     save the session as json
  load [PATH]     restore a saved session
  quit            leave";

/// Parse one input line. Blank lines and `help` yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<DynEvent>, String> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let event: DynEvent = match (cmd.to_lowercase().as_str(), args.as_slice()) {
        ("graph" | "add", [name]) => Box::new(AddName::new(name.to_string())),
        ("clear", []) => Box::new(ClearChart::new()),
        ("resize", [width, height]) => {
            let width = width.parse().err_to_string("could not parse width")?;
            let height = height.parse().err_to_string("could not parse height")?;
            Box::new(ResizeViewport::new(width, height))
        }
        ("show", [name]) => Box::new(ShowName::new(name.to_string())),
        ("list", []) => Box::new(ListNames::new(false)),
        ("list", ["all"]) => Box::new(ListNames::new(true)),
        ("export", [path]) => Box::new(ExportSvg::new(PathBuf::from(path))),
        ("save", []) => Box::new(SaveSession::new(None)),
        ("save", [path]) => Box::new(SaveSession::new(Some(PathBuf::from(path)))),
        ("load", []) => Box::new(LoadSession::new(None)),
        ("load", [path]) => Box::new(LoadSession::new(Some(PathBuf::from(path)))),
        ("quit" | "exit", []) => Box::new(Quit::new()),
        ("help", _) => return Ok(None),
        (cmd, args) => {
            return Err(format!(
                "unknown command '{}' with {} argument(s), try 'help'",
                cmd,
                args.len()
            ))
        }
    };
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(line: &str) -> Option<String> {
        parse_command(line).unwrap().map(|event| event.describe())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(describe("graph Jean").as_deref(), Some("add name 'Jean'"));
        assert_eq!(describe("  ADD eric ").as_deref(), Some("add name 'eric'"));
        assert_eq!(describe("clear").as_deref(), Some("clear chart"));
        assert_eq!(describe("resize 1100 500").as_deref(), Some("resize to 1100x500"));
        assert_eq!(describe("show Sam").as_deref(), Some("show name 'Sam'"));
        assert_eq!(describe("list").as_deref(), Some("list names"));
        assert_eq!(describe("list all").as_deref(), Some("list dataset names"));
        assert_eq!(
            describe("export chart.svg").as_deref(),
            Some("export svg to \"chart.svg\"")
        );
        assert_eq!(describe("save").as_deref(), Some("save session to None"));
        assert_eq!(
            describe("save s.json").as_deref(),
            Some("save session to Some(\"s.json\")")
        );
        assert_eq!(describe("load").as_deref(), Some("load session from None"));
        assert_eq!(
            describe("load s.json").as_deref(),
            Some("load session from Some(\"s.json\")")
        );
        assert_eq!(describe("quit").as_deref(), Some("quit"));
        assert_eq!(describe("exit").as_deref(), Some("quit"));
        assert_eq!(describe(""), None);
        assert_eq!(describe("help"), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("graph").is_err());
        assert!(parse_command("graph Mary Ann").is_err());
        assert!(parse_command("resize wide 500").is_err());
        assert!(parse_command("resize 500 tall").is_err());
        assert!(parse_command("resize 500").is_err());
        assert!(parse_command("list some").is_err());
        assert!(parse_command("dance").is_err());
    }
}
