use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for treemenu output.
///
/// All markers must be sourced from this module so ASCII mode stays
/// consistent across commands.
pub mod icons {
    pub const BRANCH: &str = "▸";
    pub const LEAF: &str = "•";
    pub const ARROW: &str = "↳";
    pub const BACK: &str = "←";
    pub const QUIT: &str = "✗";
    pub const SEPARATOR: &str = "›";
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "✗";

    // Tree guides.
    pub const TEE: &str = "├─ ";
    pub const ELBOW: &str = "└─ ";
    pub const PIPE: &str = "│  ";
}

pub mod icons_ascii {
    pub const BRANCH: &str = ">";
    pub const LEAF: &str = "-";
    pub const ARROW: &str = "->";
    pub const BACK: &str = "<-";
    pub const QUIT: &str = "x";
    pub const SEPARATOR: &str = "/";
    pub const WARNING: &str = "[WARN]";
    pub const ERROR: &str = "[ERROR]";

    pub const TEE: &str = "|- ";
    pub const ELBOW: &str = "`- ";
    pub const PIPE: &str = "|  ";
}

/// Marker set chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub branch: &'static str,
    pub leaf: &'static str,
    pub arrow: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub separator: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub tee: &'static str,
    pub elbow: &'static str,
    pub pipe: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                branch: icons::BRANCH,
                leaf: icons::LEAF,
                arrow: icons::ARROW,
                back: icons::BACK,
                quit: icons::QUIT,
                separator: icons::SEPARATOR,
                warning: icons::WARNING,
                error: icons::ERROR,
                tee: icons::TEE,
                elbow: icons::ELBOW,
                pipe: icons::PIPE,
            }
        } else {
            Self {
                branch: icons_ascii::BRANCH,
                leaf: icons_ascii::LEAF,
                arrow: icons_ascii::ARROW,
                back: icons_ascii::BACK,
                quit: icons_ascii::QUIT,
                separator: icons_ascii::SEPARATOR,
                warning: icons_ascii::WARNING,
                error: icons_ascii::ERROR,
                tee: icons_ascii::TEE,
                elbow: icons_ascii::ELBOW,
                pipe: icons_ascii::PIPE,
            }
        }
    }

    /// Marker for a menu entry: branch when it opens a sub-level.
    pub fn entry(&self, has_children: bool) -> &'static str {
        if has_children {
            self.branch
        } else {
            self.leaf
        }
    }
}

/// Prompt theme for `dialoguer` selections.
///
/// ASCII mode falls back to `SimpleTheme`, which draws no glyphs.
pub fn prompt_theme(unicode: bool) -> Box<dyn Theme> {
    if unicode {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}
