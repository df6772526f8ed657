use treemenu::MenuError;

use crate::ui::json::events::ErrorEvent;
use crate::ui::theme::Icons;

/// Stable code for `--json` error events.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<MenuError>() {
        Some(MenuError::NodeNotFound { .. }) => "NODE_NOT_FOUND",
        Some(MenuError::NoSelection) => "NO_SELECTION",
        Some(MenuError::CircularReference { .. }) => "CIRCULAR_REFERENCE",
        Some(MenuError::InternalConsistency { .. }) => "INTERNAL_CONSISTENCY",
        Some(MenuError::Io(_)) => "IO",
        Some(MenuError::InvalidMenuFile { .. }) => "INVALID_MENU_FILE",
        Some(MenuError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(MenuError::UnsupportedFormat { .. }) => "UNSUPPORTED_FORMAT",
        None => "ERROR",
    }
}

pub fn format_error(err: &anyhow::Error, icons: Icons) -> String {
    let mut out = format!("{} {}\n", icons.error, err);

    if let Some(MenuError::CircularReference { .. }) = err.downcast_ref::<MenuError>() {
        out.push_str("  A submenu contains itself. Break the loop in the menu definition.\n");
    }

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool, icons: Icons) {
    if json {
        let event = ErrorEvent::new(command, error_code(err), err.to_string());
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, icons));
}
