use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use folio_core::notify::Notification;
use folio_core::render::LinkKind;
use folio_core::{AppConfig, PageContext, Site};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{ContactWidget, DetailWidget, GalleryWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig, page: &str) -> Result<()> {
    let site = Site::open(config)?;
    let event_handler = EventHandler::new(
        site.config().ui.tick_rate_ms,
        site.config().scroll.animation_fps,
    );
    let mut app = App::new(site, PageContext::from_path(page));
    tracing::info!(page = app.site.page().as_str(), "starting terminal browser");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Folio"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &event_handler).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Finished contact submissions
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel::<Notification>();

    loop {
        while let Ok(notification) = contact_rx.try_recv() {
            app.finish_contact_submit(notification);
        }

        app.on_tick();

        terminal.draw(|frame| {
            let size = frame.area();

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // Gallery block borders take two rows
            app.viewport_height = main_layout[0].height.saturating_sub(2);

            GalleryWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[1], app);

            if app.details_open() {
                DetailWidget::render(frame, main_layout[0], app);
            }
            match app.mode {
                Mode::Contact(_) => ContactWidget::render(frame, main_layout[0], app),
                Mode::Help => PopupWidget::render_help(frame, &app.theme),
                Mode::Normal => {}
            }
        })?;

        if let Some(event) = event_handler.next(app.needs_fast_tick())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app);
                    handle_action(app, action, &contact_tx);
                }
                // Next draw picks up the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action, contact_tx: &mpsc::UnboundedSender<Notification>) {
    // Any key other than the first 'g' cancels a pending "gg"
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::ScrollDown => app.scroll_by_lines(true),
        Action::ScrollUp => app.scroll_by_lines(false),
        Action::OpenDetails => app.open_details(),
        Action::CloseDetails => app.close_details(),
        Action::OpenGithub => app.open_link(LinkKind::Github),
        Action::OpenLive => app.open_link(LinkKind::Live),
        Action::ToggleTheme => app.toggle_theme(),
        Action::TogglePage => app.toggle_page(),
        Action::OpenContact => app.open_contact(),
        Action::NextField => app.next_contact_field(),
        Action::Submit => app.submit_contact(contact_tx),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::ExitMode => match app.mode {
            Mode::Contact(_) => app.close_contact(),
            _ => app.mode = Mode::Normal,
        },
        Action::InputChar(c) => app.contact_input(c),
        Action::Backspace => app.contact_backspace(),
        Action::None => {}
    }
}
