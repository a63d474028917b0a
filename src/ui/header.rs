use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Connection indicator shown next to the service URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Ready,
    Failed,
}

pub struct Header<'a> {
    base_url: &'a str,
    article_count: usize,
    status: FeedStatus,
    in_flight: bool,
    tick: u64,
}

impl<'a> Header<'a> {
    pub fn new(base_url: &'a str, article_count: usize, status: FeedStatus) -> Self {
        Self {
            base_url,
            article_count,
            status,
            in_flight: false,
            tick: 0,
        }
    }

    /// Show the activity spinner for in-flight requests.
    pub fn busy(mut self, in_flight: bool, tick: u64) -> Self {
        self.in_flight = in_flight;
        self.tick = tick;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_color) = match self.status {
            FeedStatus::Loading => ("○", HEADER_SEPARATOR),
            FeedStatus::Ready => ("●", STATUS_OK),
            FeedStatus::Failed => ("●", STATUS_ERROR),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "newsdesk",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(" ", text_style),
            Span::styled(self.base_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(article_label(self.article_count), text_style),
        ];

        if self.in_flight {
            let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(frame, Style::default().fg(STATUS_OK)));
            spans.push(Span::styled(" Refreshing", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn article_label(count: usize) -> String {
    match count {
        1 => "1 article".to_string(),
        n => format!("{} articles", n),
    }
}
