use crate::ui::app::App;
use crate::ui::background::Background;
use crate::ui::cards::CardGrid;
use crate::ui::detail::render_detail_dialog;
use crate::ui::feed::FeedState;
use crate::ui::footer::Footer;
use crate::ui::header::{FeedStatus, Header};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let status = match app.feed() {
        FeedState::Loading => FeedStatus::Loading,
        FeedState::Ready { .. } => FeedStatus::Ready,
        FeedState::Failed { .. } => FeedStatus::Failed,
    };
    let header_widget =
        Header::new(app.base_url(), app.feed().len(), status).busy(app.in_flight() > 0, app.tick());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    if app.context().background_enabled() {
        frame.render_widget(Background::new(app.tick()), body);
    }

    match app.feed() {
        FeedState::Loading => render_message(frame, body, "Loading news...", MUTED_TEXT),
        FeedState::Failed { message } => {
            render_message(frame, body, &format!("Error: {}", message), STATUS_ERROR)
        }
        FeedState::Ready { batch } if batch.is_empty() => {
            render_message(frame, body, "No articles available", HEADER_TEXT)
        }
        FeedState::Ready { .. } => {
            let items = app.items();
            frame.render_widget(
                CardGrid::new(&items, app.selected(), app.context().max_card_tags()),
                body,
            );
        }
    }

    let footer_widget = Footer::new(app.detail().is_open(), app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_detail_dialog(frame, app.detail());
}

/// One centered line in the middle of the body.
fn render_message(frame: &mut Frame<'_>, body: Rect, text: &str, color: ratatui::style::Color) {
    if body.height == 0 {
        return;
    }
    let line_area = Rect {
        y: body.y + body.height / 2,
        height: 1,
        ..body
    };
    frame.render_widget(Clear, line_area);
    frame.render_widget(
        Paragraph::new(Line::styled(text.to_string(), Style::default().fg(color)))
            .alignment(Alignment::Center),
        line_area,
    );
}
