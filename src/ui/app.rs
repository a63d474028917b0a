use crate::api::{AggregateArticle, AggregationOutcome};
use crate::config::Config;
use crate::launch;
use crate::news::{project_batch, DetailView, ListDisplayItem};
use crate::share::{ShareChain, SharePayload};
use crate::ui::context::DisplayContext;
use crate::ui::detail::{detail_lines, DetailIntent, DetailReducer, DetailState};
use crate::ui::feed::{FeedIntent, FeedReducer, FeedState};
use crate::ui::footer::FooterNotice;
use crate::ui::layout::grid_columns;
use crate::ui::mvi::Reducer;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Network work requested by the UI, executed off the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchNews,
    TriggerAggregation,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

struct Notice {
    text: String,
    is_error: bool,
    expires_at: Instant,
}

pub struct App {
    should_quit: bool,
    /// News list page state (MVI pattern).
    feed: FeedState,
    /// Detail overlay state (MVI pattern).
    detail: DetailState,
    context: DisplayContext,
    selected: usize,
    columns: usize,
    /// Requests sent but not yet answered.
    in_flight: usize,
    tick: u64,
    notice: Option<Notice>,
    notice_ttl: Duration,
    base_url: String,
    page_url: String,
    open_command: Option<String>,
    share: ShareChain,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config, base_url: &str) -> Self {
        Self {
            should_quit: false,
            feed: FeedState::default(),
            detail: DetailState::default(),
            context: DisplayContext::new(config.display.background, config.display.max_card_tags),
            selected: 0,
            columns: 1,
            in_flight: 0,
            tick: 0,
            notice: None,
            notice_ttl: Duration::from_secs(config.display.notice_seconds),
            base_url: base_url.to_string(),
            page_url: config.share.page_url(base_url),
            open_command: config.share.open_command.clone(),
            share: ShareChain::from_config(&config.share),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn context(&self) -> &DisplayContext {
        &self.context
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Summary cards for the current batch.
    pub fn items(&self) -> Vec<ListDisplayItem> {
        project_batch(&self.feed.batch())
    }

    pub fn notice(&self) -> Option<FooterNotice<'_>> {
        self.notice.as_ref().map(|n| FooterNotice {
            text: &n.text,
            is_error: n.is_error,
        })
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn set_share_chain(&mut self, share: ShareChain) {
        self.share = share;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self
            .notice
            .as_ref()
            .is_some_and(|n| Instant::now() >= n.expires_at)
        {
            self.notice = None;
        }
    }

    /// Body width in columns; decides how many cards share a row.
    pub fn on_resize(&mut self, cols: u16, _rows: u16) {
        self.columns = usize::from(grid_columns(cols));
    }

    // ========================================================================
    // Network
    // ========================================================================

    pub fn request_refresh(&mut self) {
        if self.send_command(UiCommand::FetchNews) {
            self.in_flight += 1;
        }
    }

    pub fn request_aggregation(&mut self) {
        if self.send_command(UiCommand::TriggerAggregation) {
            self.in_flight += 1;
            self.set_notice("Aggregation requested", false);
        }
    }

    pub fn on_news_loaded(&mut self, articles: Vec<AggregateArticle>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch_feed(FeedIntent::Loaded { articles });
        self.clamp_selection();
    }

    pub fn on_news_failed(&mut self, message: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch_feed(FeedIntent::Failed { message });
        self.selected = 0;
    }

    /// Report the outcome and reload the list on success.
    pub fn on_aggregation_finished(&mut self, result: Result<AggregationOutcome, String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(outcome) => {
                if let Some(error) = outcome.error() {
                    self.set_notice(format!("Aggregation failed: {}", error), true);
                    return;
                }
                let message = outcome.message().unwrap_or("Aggregation complete").to_string();
                self.set_notice(message, false);
                self.request_refresh();
            }
            Err(message) => self.set_notice(format!("Aggregation failed: {}", message), true),
        }
    }

    // ========================================================================
    // List navigation
    // ========================================================================

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn select_row_below(&mut self) {
        self.move_selection(self.columns as isize);
    }

    pub fn select_row_above(&mut self) {
        self.move_selection(-(self.columns as isize));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.feed.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.feed.len().saturating_sub(1));
    }

    // ========================================================================
    // Detail (MVI pattern)
    // ========================================================================

    /// Open the detail view for the highlighted card.
    pub fn activate_selected(&mut self) {
        let Some(item) = self.items().into_iter().nth(self.selected) else {
            return;
        };
        self.activate(&item);
    }

    /// Open the detail view for `item`, resolved against the current batch.
    pub fn activate(&mut self, item: &ListDisplayItem) {
        let batch: Arc<[AggregateArticle]> = self.feed.batch();
        self.dispatch_detail(DetailIntent::Activate {
            title: item.title.clone(),
            batch,
        });
    }

    pub fn dismiss_detail(&mut self) {
        self.dispatch_detail(DetailIntent::Dismiss);
    }

    pub fn scroll_detail_up(&mut self) {
        self.dispatch_detail(DetailIntent::ScrollUp);
    }

    pub fn scroll_detail_down(&mut self) {
        let Some(article) = self.detail.article() else {
            return;
        };
        let line_count = detail_lines(&DetailView::local(article)).len();
        if usize::from(self.detail.scroll()) + 1 < line_count {
            self.dispatch_detail(DetailIntent::ScrollDown);
        }
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    fn dispatch_feed(&mut self, intent: FeedIntent) {
        dispatch_mvi!(self, feed, FeedReducer, intent);
    }

    // ========================================================================
    // Share / open
    // ========================================================================

    pub fn share_selected_card(&mut self) {
        let Some(item) = self.items().into_iter().nth(self.selected) else {
            return;
        };
        let payload = SharePayload::for_card(&item, &self.page_url);
        self.run_share(&payload);
    }

    pub fn share_open_article(&mut self) {
        let Some(article) = self.detail.article() else {
            return;
        };
        let payload = SharePayload::for_article(article, &self.page_url);
        self.run_share(&payload);
    }

    fn run_share(&mut self, payload: &SharePayload) {
        match self.share.share(payload) {
            Ok(outcome) => {
                if let Some(notice) = outcome.notice() {
                    self.set_notice(notice, false);
                }
            }
            Err(err) => self.set_notice(format!("Share failed: {}", err), true),
        }
    }

    /// Open the canonical link of the open article, if it has one.
    pub fn open_original(&mut self) {
        let Some(url) = self.detail.article().and_then(|a| a.canonical_url()) else {
            return;
        };
        if let Err(err) = launch::open_url(url, self.open_command.as_deref()) {
            tracing::warn!("Failed to open {}: {}", url, err);
            self.set_notice(err.to_string(), true);
        }
    }

    pub fn toggle_background(&mut self) {
        self.context.toggle_background();
    }

    fn set_notice(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error,
            expires_at: Instant::now() + self.notice_ttl,
        });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Dropping {:?}: {}", command, err);
                self.set_notice("Busy, try again", true);
                false
            }
        }
    }
}
