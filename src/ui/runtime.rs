use crate::api::NewsClient;
use crate::config::Config;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Queue depth for UI commands; extra key presses beyond it are dropped.
const COMMAND_QUEUE: usize = 16;

/// Run the full-screen reader until the user quits.
///
/// Network calls run as tasks on `runtime`; the UI loop stays on the
/// calling thread.
pub fn run(config: &Config, client: NewsClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.display.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(process_commands(client.clone(), command_rx, events.sender()));

    let mut app = App::new(config, client.base_url());
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::NewsLoaded(articles)) => app.on_news_loaded(articles),
            Ok(AppEvent::NewsFailed(message)) => app.on_news_failed(message),
            Ok(AppEvent::AggregationFinished(result)) => app.on_aggregation_finished(result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Execute UI commands. Each one gets its own task: no deduplication, and
/// whichever response arrives last is what the UI shows.
pub async fn process_commands(
    client: NewsClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(&client, command).await;
            // receiver gone means the UI has exited
            let _ = events.send(event);
        });
    }
}

async fn execute(client: &NewsClient, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::FetchNews => match client.get_news().await {
            Ok(articles) => AppEvent::NewsLoaded(articles),
            Err(err) => {
                tracing::warn!(error_type = err.error_type(), "News fetch failed: {}", err);
                AppEvent::NewsFailed(err.user_message())
            }
        },
        UiCommand::TriggerAggregation => AppEvent::AggregationFinished(
            client
                .trigger_aggregation()
                .await
                .map_err(|err| err.user_message()),
        ),
    }
}
