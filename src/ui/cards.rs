//! Summary card grid.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::news::{CardTags, ListDisplayItem};
use crate::ui::layout::grid_columns;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TAG_CHIP,
};

/// Rows per card, borders included.
pub const CARD_HEIGHT: u16 = 7;

pub struct CardGrid<'a> {
    items: &'a [ListDisplayItem],
    selected: usize,
    max_tags: usize,
}

impl<'a> CardGrid<'a> {
    pub fn new(items: &'a [ListDisplayItem], selected: usize, max_tags: usize) -> Self {
        Self {
            items,
            selected,
            max_tags,
        }
    }

    /// Index of the first card row drawn, keeping the selection visible.
    fn first_row(&self, columns: usize, visible_rows: usize) -> usize {
        let selected_row = self.selected / columns;
        selected_row.saturating_sub(visible_rows.saturating_sub(1))
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < CARD_HEIGHT || self.items.is_empty() {
            return;
        }

        let columns = usize::from(grid_columns(area.width));
        let card_width = area.width / columns as u16;
        let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
        let first_row = self.first_row(columns, visible_rows);

        for row in 0..visible_rows {
            for col in 0..columns {
                let idx = (first_row + row) * columns + col;
                let Some(item) = self.items.get(idx) else {
                    return;
                };
                let rect = Rect {
                    x: area.x + col as u16 * card_width,
                    y: area.y + row as u16 * CARD_HEIGHT,
                    width: card_width,
                    height: CARD_HEIGHT,
                };
                render_card(item, idx == self.selected, self.max_tags, rect, buf);
            }
        }
    }
}

fn render_card(item: &ListDisplayItem, selected: bool, max_tags: usize, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    let (border, title_style) = if selected {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(GLOBAL_BORDER),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", item.title), title_style))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    block.render(area, buf);

    let [meta, excerpt, tags] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .areas(inner);

    let muted = Style::default().fg(MUTED_TEXT);
    Paragraph::new(Line::from(vec![
        Span::styled(item.author.clone(), muted),
        Span::styled(" · ", muted),
        Span::styled(item.date.clone(), muted),
    ]))
    .render(meta, buf);

    Paragraph::new(item.excerpt.as_str())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: true })
        .render(excerpt, buf);

    Paragraph::new(tag_line(item, max_tags)).render(tags, buf);
}

fn tag_line(item: &ListDisplayItem, max_tags: usize) -> Line<'static> {
    let card_tags = CardTags::for_item(item, max_tags);
    let chip = Style::default().fg(TAG_CHIP);
    let mut spans: Vec<Span> = card_tags
        .visible
        .iter()
        .flat_map(|tag| [Span::styled(format!("[{}]", tag), chip), Span::raw(" ")])
        .collect();
    if let Some(label) = card_tags.overflow_label() {
        spans.push(Span::styled(label, Style::default().fg(MUTED_TEXT)));
    }
    Line::from(spans)
}
