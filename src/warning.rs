/// User-facing payload shown when a task is stopped over its screen ratio.
/// Opaque to the guard; emitted verbatim on rejection.
pub const ASPECT_RATIO_WARNING: &str = include_str!("../assets/warning_message.html");

/// Rendering seam for the rejection warning. The host decides how the
/// payload reaches the user (webview, toast, terminal).
pub trait WarningSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Default sink: prints the payload to stdout.
#[derive(Debug, Default)]
pub struct StdoutWarning;

impl WarningSink for StdoutWarning {
    fn emit(&self, message: &str) {
        println!("{message}");
    }
}
