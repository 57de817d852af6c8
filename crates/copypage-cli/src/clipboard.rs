//! Clipboard delivery with fallbacks.
//!
//! Strategies are tried in order until one succeeds: a plain-text write, a
//! rich write that offers HTML plus the Markdown as plain-text alternative,
//! and finally printing the Markdown so it can be selected by hand.
//!
//! On X11 and Wayland the clipboard contents are served by the process that
//! set them. A clipboard write there blocks until another application takes
//! ownership (a clipboard manager, or the user's next copy), so the Markdown
//! is still pasteable after this process exits.

use std::io::{self, Write};

use arboard::Clipboard;
use log::{debug, warn};

/// Errors that can occur while delivering Markdown to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Failed to access clipboard
    #[error("Clipboard access error: {0}")]
    Access(String),

    /// Failed to set clipboard content
    #[error("Clipboard write error: {0}")]
    Write(String),

    /// Every strategy failed
    #[error("Unable to access clipboard ({}). Please allow clipboard permissions and try again.", .attempts.join("; "))]
    Exhausted { attempts: Vec<String> },
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Write(err.to_string())
    }
}

/// One way of getting text onto the clipboard
pub trait ClipboardStrategy {
    fn name(&self) -> &'static str;

    fn write(&mut self, markdown: &str) -> Result<(), ClipboardError>;
}

/// Direct plain-text clipboard write
pub struct PlainTextClipboard;

impl ClipboardStrategy for PlainTextClipboard {
    fn name(&self) -> &'static str {
        "plain text"
    }

    fn write(&mut self, markdown: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        set_text(&mut clipboard, markdown)?;
        Ok(())
    }
}

/// Multi-format write: HTML flavour with the Markdown as plain-text alternative
pub struct RichClipboard;

impl ClipboardStrategy for RichClipboard {
    fn name(&self) -> &'static str {
        "rich text"
    }

    fn write(&mut self, markdown: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        let html = format!("<pre>{}</pre>", escape_html(markdown));
        set_html(&mut clipboard, &html, markdown)?;
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, markdown: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    log::info!("serving clipboard contents until another application takes them over");
    clipboard.set().wait().text(markdown)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, markdown: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(markdown)
}

#[cfg(target_os = "linux")]
fn set_html(clipboard: &mut Clipboard, html: &str, markdown: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    log::info!("serving clipboard contents until another application takes them over");
    clipboard.set().wait().html(html, Some(markdown))
}

#[cfg(not(target_os = "linux"))]
fn set_html(clipboard: &mut Clipboard, html: &str, markdown: &str) -> Result<(), arboard::Error> {
    clipboard.set_html(html, Some(markdown))
}

/// Last resort: write the Markdown out for manual selection
pub struct SelectionFallback<W: Write> {
    out: W,
}

impl SelectionFallback<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> SelectionFallback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardStrategy for SelectionFallback<W> {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn write(&mut self, markdown: &str) -> Result<(), ClipboardError> {
        writeln!(self.out, "{}", markdown)
            .and_then(|_| self.out.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// The default chain, most capable first
pub fn default_strategies() -> Vec<Box<dyn ClipboardStrategy>> {
    vec![
        Box::new(PlainTextClipboard),
        Box::new(RichClipboard),
        Box::new(SelectionFallback::stdout()),
    ]
}

/// Try each strategy in order; returns the name of the one that succeeded.
pub fn copy_with_fallback(
    strategies: &mut [Box<dyn ClipboardStrategy>],
    markdown: &str,
) -> Result<&'static str, ClipboardError> {
    let mut attempts = Vec::new();

    for strategy in strategies.iter_mut() {
        match strategy.write(markdown) {
            Ok(()) => {
                debug!("copied {} bytes via {}", markdown.len(), strategy.name());
                return Ok(strategy.name());
            }
            Err(e) => {
                warn!("{} clipboard strategy failed: {}", strategy.name(), e);
                attempts.push(format!("{}: {}", strategy.name(), e));
            }
        }
    }

    Err(ClipboardError::Exhausted { attempts })
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
