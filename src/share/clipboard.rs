//! Clipboard share tier.

use arboard::Clipboard;

use super::{ShareError, ShareOutcome, SharePayload, ShareTarget};

/// Copies the payload's text block to the system clipboard.
///
/// The clipboard handle is opened on first probe and kept for the life of
/// the tier: on X11 the selection is only served while it is alive.
pub struct ClipboardShare {
    clipboard: Option<Clipboard>,
    probed: bool,
}

impl Default for ClipboardShare {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardShare {
    pub fn new() -> Self {
        Self {
            clipboard: None,
            probed: false,
        }
    }
}

impl ShareTarget for ClipboardShare {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn is_available(&mut self) -> bool {
        if !self.probed {
            self.probed = true;
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => tracing::debug!("System clipboard unavailable: {}", e),
            }
        }
        self.clipboard.is_some()
    }

    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let clipboard = self.clipboard.as_mut().ok_or(ShareError::Unavailable)?;
        clipboard
            .set_text(payload.clipboard_text.clone())
            .map_err(|e| ShareError::Clipboard(format!("Failed to set clipboard text: {}", e)))?;
        Ok(ShareOutcome::Copied {
            notice: payload.confirmation,
        })
    }
}
