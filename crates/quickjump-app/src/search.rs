//! One-shot search: load a tab list, rank it, print it.

use std::io::{Read, Write};
use std::path::Path;

use quickjump_common::{Result, Tab};
use quickjump_config::QuickJumpConfig;
use quickjump_picker::{renderer_for, Picker};

/// Read a JSON array of tabs from a file, or from `stdin` when `source` is "-".
pub fn load_tabs(source: &str, mut stdin: impl Read) -> Result<Vec<Tab>> {
    let raw = if source == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(Path::new(source))?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Run the picker once over `tabs` and write the visible rows to `out`.
pub fn run(
    config: &QuickJumpConfig,
    tabs: Vec<Tab>,
    query: &str,
    json: bool,
    mut out: impl Write,
) -> Result<usize> {
    let mut picker = Picker::new(&config.picker);
    picker.open(tabs, query);

    if json {
        serde_json::to_writer_pretty(&mut out, &picker.snapshot())?;
        writeln!(out)?;
        return Ok(picker.visible_entries().len());
    }

    let renderer = renderer_for(&config.highlight);
    let active = picker.active_index();
    for (i, entry) in picker.visible_entries().iter().enumerate() {
        writeln!(out, "{}", renderer.render(entry, Some(i) == active))?;
    }

    let shown = picker.visible_entries().len();
    tracing::info!(
        shown,
        total = picker.entries().len(),
        query = %picker.query(),
        "search finished"
    );
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickjump_common::QuickJumpError;
    use quickjump_config::schema::HighlightStyle;

    const TABS: &str = r#"[
        {"id": 1, "title": "GitHub - Pull Requests", "url": "https://github.com/pr"},
        {"id": 2, "title": "Docs", "url": "https://a.com"},
        {"id": 3, "title": "Docs Docs", "url": "https://b.com"},
        {"id": 4, "url": "https://untitled.example"}
    ]"#;

    fn plain_config() -> QuickJumpConfig {
        let mut config = QuickJumpConfig::default();
        config.highlight.style = HighlightStyle::Markers;
        config
    }

    #[test]
    fn load_tabs_from_reader() {
        let tabs = load_tabs("-", TABS.as_bytes()).unwrap();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[3].title, "");
    }

    #[test]
    fn load_tabs_rejects_bad_json() {
        let err = load_tabs("-", "[{".as_bytes()).unwrap_err();
        assert!(matches!(err, QuickJumpError::Bridge(_)));
    }

    #[test]
    fn load_tabs_missing_file_is_io_error() {
        let err = load_tabs("/tmp/no_such_quickjump_tabs.json", std::io::empty()).unwrap_err();
        assert!(matches!(err, QuickJumpError::Io(_)));
    }

    #[test]
    fn prints_ranked_rows() {
        let tabs = load_tabs("-", TABS.as_bytes()).unwrap();
        let mut out = Vec::new();
        let shown = run(&plain_config(), tabs, "Docs", false, &mut out).unwrap();

        assert_eq!(shown, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "> [Docs]\n    https://a.com\n  [Docs] Docs\n    https://b.com\n"
        );
    }

    #[test]
    fn whitespace_query_prints_nothing() {
        let tabs = load_tabs("-", TABS.as_bytes()).unwrap();
        let mut out = Vec::new();
        let shown = run(&plain_config(), tabs, "   ", false, &mut out).unwrap();
        assert_eq!(shown, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn json_output_is_a_snapshot() {
        let tabs = load_tabs("-", TABS.as_bytes()).unwrap();
        let mut out = Vec::new();
        run(&plain_config(), tabs, "git", true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["query"], "git");
        assert_eq!(value["active"], 1);
        assert_eq!(
            value["entries"][0]["urlMatches"],
            serde_json::json!([{"start": 8, "end": 11}])
        );
        assert_eq!(value["entries"][0]["titleMatches"], serde_json::json!([]));
    }
}
