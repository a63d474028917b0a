//! Detail overlay rendering.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::news::DetailView;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACCENT, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, TAG_CHIP, TAG_PRIMARY,
};

use super::state::DetailState;

/// Render the detail overlay when a detail article is open.
pub fn render_detail_dialog(frame: &mut Frame, state: &DetailState) {
    let DetailState::Open { article, scroll } = state else {
        return;
    };

    let view = DetailView::local(article);
    let lines = detail_lines(&view);
    let scroll = (*scroll).min(lines.len().saturating_sub(1) as u16);

    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Article ", Style::default().fg(ACCENT)))
        .title_bottom(Line::from(hints(view.url.is_some())).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Logical lines of the detail body, before wrapping.
pub fn detail_lines(view: &DetailView) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let heading = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];

    if !view.tags.is_empty() {
        let mut chips = Vec::with_capacity(view.tags.len() * 2);
        for (idx, tag) in view.tags.iter().enumerate() {
            let color = if idx == 0 { TAG_PRIMARY } else { TAG_CHIP };
            chips.push(Span::styled(format!("[{}]", tag), Style::default().fg(color)));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(view.description.clone(), text)));

    if !view.sources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Sources", heading)));
        for source in &view.sources {
            lines.push(Line::from(vec![
                Span::styled("  • ", muted),
                Span::styled(source.name.clone(), text),
            ]));
            if !source.url.is_empty() {
                lines.push(Line::from(Span::styled(format!("    {}", source.url), muted)));
            }
            if !source.citation.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", source.citation),
                    muted.add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    if !view.history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Update History", heading)));
        for entry in &view.history {
            lines.push(Line::from(Span::styled(format!("  {}", entry.when), muted)));
            lines.push(Line::from(Span::styled(
                format!("    {}", entry.description),
                text,
            )));
        }
    }

    if let Some(last) = &view.last_updated {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Last Updated: ", muted),
            Span::styled(last.clone(), text),
        ]));
    }

    if let Some(url) = &view.url {
        lines.push(Line::from(vec![
            Span::styled("Original: ", muted),
            Span::styled(url.clone(), Style::default().fg(ACCENT)),
        ]));
    }

    lines
}

fn hints(can_open: bool) -> Vec<Span<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);
    let mut spans = vec![
        Span::styled(" Esc: Close", text),
        Span::styled(" │ ", separator),
        Span::styled("↑/↓: Scroll", text),
        Span::styled(" │ ", separator),
        Span::styled("s: Share", text),
    ];
    if can_open {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled("o: Open original", text));
    }
    spans.push(Span::raw(" "));
    spans
}
