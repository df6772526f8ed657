//! Test fixtures - reusable menu definitions.

/// The Settings/Exit menu, with a nested Audio level.
pub const SETTINGS_TOML: &str = r#"
[[menu]]
label = "Settings"

[[menu.children]]
label = "Audio"

[[menu.children.children]]
label = "Volume"
resolve = "VOLUME"

[[menu.children]]
label = "Graphics"
resolve = "GRAPHICS_SETTINGS"

[[menu]]
label = "Exit"
resolve = "EXIT"
"#;

/// Same structure as `SETTINGS_TOML`, flat enough for JSON.
pub const SETTINGS_JSON: &str = r#"{
  "menu": [
    {"label": "Settings", "children": [
      {"label": "Audio", "children": [{"label": "Volume", "resolve": "VOLUME"}]},
      {"label": "Graphics", "resolve": "GRAPHICS_SETTINGS"}
    ]},
    {"label": "Exit", "resolve": "EXIT"}
  ]
}"#;

pub const SETTINGS_YAML: &str = "\
menu:
  - label: Settings
    children:
      - label: Audio
        children:
          - label: Volume
            resolve: VOLUME
      - label: Graphics
        resolve: GRAPHICS_SETTINGS
  - label: Exit
    resolve: EXIT
";

/// Menu file that asks for identity injection itself.
pub const INJECTING_TOML: &str = r#"
[resolver]
inject_id_key = "key"

[[menu]]
label = "Exit"
resolve = "EXIT"
"#;

/// Typo in an entry key.
pub const TYPO_TOML: &str = r#"
[[menu]]
lable = "Exit"
resolve = "EXIT"
"#;
