use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Themes;
use crate::domain::services::WeatherCard;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 20;
const CHAT_WIDTH: u16 = 64;
const CHAT_HEIGHT: u16 = 26;

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    return Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
}

/// The chat window floats above the bottom right corner, next to its toggle.
fn chat_window(area: Rect) -> Rect {
    let width = CHAT_WIDTH.min(area.width);
    let height = CHAT_HEIGHT.min(area.height);
    return Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );
}

fn key_status(app_state: &AppState) -> &'static str {
    if app_state.chat.has_credential_override() {
        return "your key";
    }
    if Config::get(ConfigKey::GeminiToken).trim().is_empty() {
        return "demo mode";
    }
    return "configured key";
}

fn render_footer(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let theme = &app_state.theme;
    frame.render_widget(
        Paragraph::new(" Powered by OpenWeather, Gemini").style(Style::default().fg(theme.muted)),
        rect,
    );

    let toggle = if app_state.chat.is_open() {
        " ✕ Esc "
    } else {
        " 💬 Ctrl+O "
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            toggle,
            Style::default()
                .fg(theme.text)
                .bg(theme.user_bubble)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        rect,
    );
}

fn render_chat(
    frame: &mut Frame,
    rect: Rect,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
    loading: &Loading,
) {
    let theme = app_state.theme.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" WeatherBot · {} ", key_status(app_state)));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let notice_height = match &app_state.notice {
        Some(notice) => (notice.lines().count() as u16).min(inner.height / 2),
        None => 0,
    };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(notice_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(inner);

    if let Some(notice) = &app_state.notice {
        frame.render_widget(
            Paragraph::new(notice.to_string())
                .style(Style::default().fg(theme.warning))
                .wrap(Wrap { trim: false }),
            layout[0],
        );
    }

    if layout[1].width != app_state.last_known_width
        || layout[1].height != app_state.last_known_height
    {
        app_state.set_rect(layout[1]);
    }
    app_state
        .bubble_list
        .render(frame, layout[1], app_state.scroll.position);

    if app_state.chat.is_pending() {
        loading.render(frame, layout[2], &theme);
    } else {
        frame.render_widget(textarea.widget(), layout[2]);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut textarea = TextArea::new(&app_state.theme);
    let mut loading = Loading::default();
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
                .split(frame.size());

            WeatherCard::render(
                frame,
                centered(layout[0], CARD_WIDTH, CARD_HEIGHT),
                &app_state.weather,
                &app_state.theme,
            );
            render_footer(frame, layout[1], app_state);

            if app_state.chat.is_open() {
                render_chat(
                    frame,
                    chat_window(layout[0]),
                    app_state,
                    &textarea,
                    &loading,
                );
            }
        })?;

        match events.next().await? {
            Event::ChatReply(generation, reply) => {
                app_state.handle_chat_reply(generation, &reply);
            }
            Event::WeatherLoaded(res) => {
                app_state.handle_weather(res);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLO() => {
                app_state.toggle_chat(&tx)?;
                textarea = TextArea::new(&app_state.theme);
            }
            Event::KeyboardEsc() => {
                app_state.close_chat(&tx)?;
                textarea = TextArea::new(&app_state.theme);
            }
            Event::KeyboardEnter() => {
                if !app_state.chat.is_open() || app_state.chat.is_pending() {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }

                textarea = TextArea::new(&app_state.theme);
                if app_state.submit(&input_str, &tx)? {
                    break;
                }
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.chat.is_open() {
                    if input.key == Key::Char('q') && !input.ctrl && !input.alt {
                        break;
                    }
                    continue;
                }

                if !app_state.chat.is_pending() {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.chat.is_open() && !app_state.chat.is_pending() {
                    textarea.insert_str(text);
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                loading.tick();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let theme = Themes::get(&Config::get(ConfigKey::Theme))?;
    let mut app_state = AppState::new(theme);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    tx.send(Action::FetchWeather())?;
    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
