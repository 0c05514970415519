//! Clipboard targets for armored text output.

use std::io::Write;

use tracing::debug;

use crate::error::ClipboardError;

/// Somewhere to put an armored message.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` when the target is unavailable.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// Opened lazily so that commands which never copy do not need a display.
/// On X11 the process owns the selection, so the write blocks until another
/// application takes the clipboard over; see [`SYSTEM_HOLDS_SELECTION`].
#[derive(Default)]
pub struct System {
    on_hold: Option<fn()>,
}

/// Whether [`System`] keeps serving the clipboard after the write.
pub const SYSTEM_HOLDS_SELECTION: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `notice` once the clipboard is open, before blocking on it.
    pub fn on_hold(mut self, notice: fn()) -> Self {
        self.on_hold = Some(notice);
        self
    }
}

impl Clipboard for System {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        write_selection(&mut clipboard, text, self.on_hold)
            .map_err(|e| ClipboardError(e.to_string()))?;
        debug!(text_len = text.len(), "copied to clipboard");
        Ok(())
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn write_selection(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    on_hold: Option<fn()>,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if let Some(notice) = on_hold {
        notice();
    }
    debug!("serving clipboard until replaced");
    clipboard.set().wait().text(text.to_owned())
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn write_selection(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _on_hold: Option<fn()>,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// Standard output, for pipelines and headless machines.
#[derive(Default)]
pub struct Stdout;

impl Clipboard for Stdout {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut out = std::io::stdout().lock();
        write_line(&mut out, text).map_err(|e| ClipboardError(e.to_string()))
    }
}

fn write_line(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// In-memory clipboard.
#[derive(Debug, Default)]
pub struct Memory {
    pub contents: Option<String>,
    pub fail: bool,
}

impl Memory {
    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl Clipboard for Memory {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError("write rejected".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
