//! Render options from a config file and command-line flags.
//!
//! Precedence: library defaults, then the `--config` JSON file (any subset
//! of `RenderOptions` fields), then explicit flags.

use anyhow::Context;
use clap::ArgMatches;
use tableviewlib::{HeaderPlacement, Label, Orientation, RenderOptions};

/// Labels typed on the command line: integers address index labels, which
/// include numeric JSON object keys.
fn parse_label(s: &str) -> Label {
    s.parse::<Label>().unwrap_or_else(|never| match never {})
}

/// Load render options from a JSON file
pub fn load_options(path: &str) -> anyhow::Result<RenderOptions> {
    log::debug!("loading render options from {}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config '{}'", path))
}

/// Build the effective options from matches
pub fn build_options(matches: &ArgMatches) -> anyhow::Result<RenderOptions> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => load_options(path)?,
        None => RenderOptions::default(),
    };

    if let Some(orientation) = matches.get_one::<String>("orientation") {
        options.orientation = orientation
            .parse::<Orientation>()
            .map_err(anyhow::Error::msg)?;
    }

    if let Some(headers) = matches.get_one::<String>("headers") {
        options.headers = headers
            .parse::<HeaderPlacement>()
            .map_err(anyhow::Error::msg)?;
    }

    if let Some(order) = matches.get_many::<String>("sort") {
        options.sort_order = Some(order.map(|s| parse_label(s)).collect());
    }

    if let Some(labels) = matches.get_many::<String>("extra-header") {
        options
            .extra_headers
            .extend(labels.map(|s| parse_label(s)));
    }

    if matches.get_flag("label-classes") {
        options.label_classes = true;
    }

    if let Some(prefix) = matches.get_one::<String>("class-prefix") {
        options.class_prefix = prefix.clone();
    }

    if let Some(id) = matches.get_one::<String>("id") {
        options.table_id = id.clone();
    }

    if let Some(class) = matches.get_one::<String>("class") {
        options.table_class = class.clone();
    }

    log::debug!("effective render options: {:?}", options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn options_from(args: &[&str]) -> anyhow::Result<RenderOptions> {
        let mut argv = vec!["tableview"];
        argv.extend(args);
        let matches = crate::build_command().try_get_matches_from(argv)?;
        build_options(&matches)
    }

    #[test]
    fn test_defaults_without_flags() {
        assert_eq!(options_from(&[]).unwrap(), RenderOptions::default());
    }

    #[test]
    fn test_flags_map_to_options() {
        let options = options_from(&[
            "-o",
            "horizontal",
            "-H",
            "both",
            "--sort",
            "b,0,a",
            "-x",
            "total",
            "-x",
            "2",
            "--label-classes",
            "--class-prefix",
            "col-",
            "--id",
            "t",
            "--class",
            "grid",
        ])
        .unwrap();

        assert_eq!(options.orientation, Orientation::Horizontal);
        assert_eq!(options.headers, HeaderPlacement::Both);
        assert_eq!(
            options.sort_order,
            Some(vec![Label::from("b"), Label::Index(0), Label::from("a")])
        );
        assert!(options.extra_headers.contains(&Label::from("total")));
        assert!(options.extra_headers.contains(&Label::Index(2)));
        assert!(options.label_classes);
        assert_eq!(options.class_prefix, "col-");
        assert_eq!(options.table_id, "t");
        assert_eq!(options.table_class, "grid");
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"orientation": "horizontal", "table_id": "from-file", "class_prefix": "f-"}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let options = options_from(&["--config", path, "--id", "from-flag"]).unwrap();
        assert_eq!(options.orientation, Orientation::Horizontal);
        assert_eq!(options.table_id, "from-flag");
        assert_eq!(options.class_prefix, "f-");
    }

    #[test]
    fn test_bad_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"headers": "sideways"}}"#).unwrap();
        let path = file.path().to_str().unwrap();
        let err = options_from(&["--config", path]).unwrap_err();
        assert!(err.to_string().contains("invalid config"));

        assert!(options_from(&["--config", "/nonexistent/table.json"]).is_err());
    }
}
