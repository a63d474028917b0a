use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str =
    " ↑/↓: Move │ Enter/i: Details │ s: Share │ r: Refresh │ a: Aggregate │ b: Background │ q: Quit";
const DETAIL_HINTS: &str = " Esc: Close │ ↑/↓: Scroll │ s: Share │ o: Open │ b: Background │ q: Quit";

/// Transient footer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterNotice<'a> {
    pub text: &'a str,
    pub is_error: bool,
}

pub struct Footer<'a> {
    detail_open: bool,
    notice: Option<FooterNotice<'a>>,
}

impl<'a> Footer<'a> {
    pub fn new(detail_open: bool, notice: Option<FooterNotice<'a>>) -> Self {
        Self {
            detail_open,
            notice,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match &self.notice {
            Some(notice) => {
                let color = if notice.is_error { STATUS_ERROR } else { STATUS_OK };
                (format!(" {}", notice.text), Style::default().fg(color))
            }
            None if self.detail_open => (DETAIL_HINTS.to_string(), text_style),
            None => (LIST_HINTS.to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // char count, not bytes: the hints contain box-drawing glyphs
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
