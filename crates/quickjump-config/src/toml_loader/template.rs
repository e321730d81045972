//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# QuickJump Configuration
# Only override what you want to change -- missing fields use defaults.

[picker]
# max_results = 50           # 1-200
# remember_last_query = true # reopen with the last query typed this session

[highlight]
# style = "ansi"             # ansi, markers, plain
# color = "#00d4ff"          # matched text colour for ansi style
# open_marker = "["          # used by markers style
# close_marker = "]"

[keybinds]
# open_picker = "Cmd+Shift+K"
# select_next = "Down"
# select_prev = "Up"
# confirm = "Enter"
# close = "Escape"

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}
