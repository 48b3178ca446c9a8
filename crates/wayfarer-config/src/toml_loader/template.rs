//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Wayfarer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[general]
home_url = "https://google.com"
# search_url = "https://www.google.com/search?q="

[window]
# title = "Wayfarer"
# width = 1200           # 400-7680
# height = 800           # 300-4320
# nav_bar_height = 44    # 24-120

[sidebar]
# visible = true
# width = 250            # between min_width and max_width
# min_width = 200
# max_width = 500

[zoom]
# step = 0.1
# min = 0.1
# max = 5.0
# default = 1.0

[auth]
# settle_delay_ms = 1500 # 0-10000
# login_path = "/login"

[session]
# partition = "persist:main"

[permissions]
# auto_approve = ["notifications", "fullscreen", "clipboard-read", "clipboard-write", "popup"]
# default_allow = true

[keybinds]
# new_tab = "Cmd+T"
# close_tab = "Cmd+W"
# back = "Alt+Left"
# forward = "Alt+Right"
# reload = "Cmd+R"
# hard_reload = "Cmd+Shift+R"
# zoom_in = "Cmd+="
# zoom_out = "Cmd+-"
# zoom_reset = "Cmd+0"
# focus_address_bar = "Cmd+L"
# switch_tab_1 = "Cmd+1"   # ... through switch_tab_8
# last_tab = "Cmd+9"
# toggle_sidebar = "Cmd+S"
# switch_account = "Cmd+Shift+A"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
