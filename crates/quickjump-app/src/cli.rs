use clap::{Parser, Subcommand, ValueEnum};
use quickjump_config::schema::HighlightStyle;
use std::path::PathBuf;

/// QuickJump -- jump to an open browser tab by typing part of its title or URL.
#[derive(Parser, Debug)]
#[command(name = "quickjump", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "quickjump=debug").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank a JSON array of tabs against a query and print the result.
    Search {
        /// Tabs JSON file, or "-" for stdin.
        #[arg(long, default_value = "-")]
        tabs: String,

        /// Query text; whitespace separates keywords.
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show at most this many entries (overrides picker.max_results).
        #[arg(short, long)]
        limit: Option<u32>,

        /// Highlight style (overrides highlight.style).
        #[arg(long, value_enum)]
        style: Option<StyleArg>,

        /// Print the picker snapshot as JSON instead of rendered rows.
        #[arg(long)]
        json: bool,
    },

    /// Speak JSON lines on stdin/stdout with a platform host.
    Bridge,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleArg {
    Ansi,
    Markers,
    Plain,
}

impl From<StyleArg> for HighlightStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Ansi => HighlightStyle::Ansi,
            StyleArg::Markers => HighlightStyle::Markers,
            StyleArg::Plain => HighlightStyle::Plain,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_overrides() {
        let args = Args::try_parse_from([
            "quickjump", "search", "--tabs", "tabs.json", "-q", "git pr", "--limit", "5",
            "--style", "markers",
        ])
        .unwrap();
        match args.command {
            Command::Search {
                tabs,
                query,
                limit,
                style,
                json,
            } => {
                assert_eq!(tabs, "tabs.json");
                assert_eq!(query, "git pr");
                assert_eq!(limit, Some(5));
                assert_eq!(style, Some(StyleArg::Markers));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "quickjump", "bridge", "--log-level", "quickjump=debug", "--config", "/tmp/q.toml",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Bridge));
        assert_eq!(args.log_level.as_deref(), Some("quickjump=debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/q.toml")));
    }

    #[test]
    fn search_defaults_to_stdin() {
        let args = Args::try_parse_from(["quickjump", "search"]).unwrap();
        assert!(matches!(args.command, Command::Search { ref tabs, .. } if tabs == "-"));
    }

    #[test]
    fn style_arg_maps_to_config_style() {
        assert_eq!(HighlightStyle::from(StyleArg::Plain), HighlightStyle::Plain);
    }
}
