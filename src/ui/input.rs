use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Char('b') {
        app.toggle_background();
        return;
    }

    if app.detail().is_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => app.dismiss_detail(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
            KeyCode::Char('s') => app.share_open_article(),
            KeyCode::Char('o') => app.open_original(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_row_above(),
        KeyCode::Down | KeyCode::Char('j') => app.select_row_below(),
        KeyCode::Enter | KeyCode::Char('i') => app.activate_selected(),
        KeyCode::Char('s') => app.share_selected_card(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('a') => app.request_aggregation(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
