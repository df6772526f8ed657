use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Icons;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_ascii: bool, config: &treemenu::Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_ascii: bool,
        config: &treemenu::Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && !config.ui.ascii && caps.supports_unicode;

        Self {
            json,
            caps,
            unicode,
        }
    }

    pub fn icons(&self) -> Icons {
        Icons::new(self.unicode)
    }

    /// Interactive prompts need a terminal on both ends.
    pub fn interactive(&self) -> bool {
        !self.json && self.caps.stdin_tty && self.caps.stdout_tty
    }
}
