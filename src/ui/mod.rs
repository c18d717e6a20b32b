use std::{
    error::Error,
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
        KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use wordgrove::{config, types::Tint, Game, GameConfig, GameMode, SharedGame, WordSnapshot};

use crate::render::{self, ColorId, HitBox, Projection, WIDE_TAIL};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Longest wall-clock gap the simulation thread will try to catch up on.
const MAX_FRAME_SECS: f32 = 0.25;

pub fn run(config: GameConfig, mode: GameMode) -> Result<(), Box<dyn Error>> {
    let game = SharedGame::new(Game::new(config)?);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let running = Arc::new(AtomicBool::new(true));
    let sim = spawn_simulation(game.clone(), Arc::clone(&running));

    let result = event_loop(&mut terminal, &game, mode);

    running.store(false, Ordering::Relaxed);
    if sim.join().is_err() {
        log::error!("simulation thread panicked");
    }
    game.stop();
    shutdown_terminal(&mut terminal)?;
    result
}

/// Ticks `game` at a fixed step until `running` is cleared.
fn spawn_simulation(game: SharedGame, running: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut accumulator = 0.0_f32;
        let mut last_tick = Instant::now();
        while running.load(Ordering::Relaxed) {
            let now = Instant::now();
            accumulator = (accumulator + (now - last_tick).as_secs_f32()).min(MAX_FRAME_SECS);
            last_tick = now;

            while accumulator >= config::DT {
                game.tick(config::DT);
                accumulator -= config::DT;
            }
            thread::sleep(Duration::from_millis(1));
        }
        log::info!("simulation thread exiting");
    })
}

fn event_loop(terminal: &mut Term, game: &SharedGame, mode: GameMode) -> Result<(), Box<dyn Error>> {
    let mut ui_state = UiState::new();
    let mut snapshot: Vec<WordSnapshot> = Vec::new();
    let render_interval = Duration::from_secs_f32(1.0 / config::RENDER_HZ);
    let mut last_render = Instant::now()
        .checked_sub(render_interval)
        .unwrap_or_else(Instant::now);
    let mut render_counter = 0_u32;
    let mut last_fps_sample = Instant::now();
    let mut render_fps = 0.0_f32;
    let mut started = false;

    loop {
        if last_render.elapsed() >= render_interval {
            game.snapshot(&mut snapshot);
            let stats = game.stats();
            if last_fps_sample.elapsed() >= Duration::from_secs(1) {
                render_fps = render_counter as f32 / last_fps_sample.elapsed().as_secs_f32();
                render_counter = 0;
                last_fps_sample = Instant::now();
            }
            let pointer = game.with(|g| g.pointer());

            terminal.draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(3),
                        Constraint::Length(3),
                    ])
                    .split(frame.size());

                let mode_label = stats.mode.map_or("-", GameMode::label);
                let header = Paragraph::new(format!(
                    "score: {} | words: {} | mode: {} | pointer: {} | ticks: {} | render fps: {:.1}",
                    stats.score,
                    stats.population,
                    mode_label,
                    if stats.pointer_active { "on" } else { "off" },
                    stats.ticks,
                    render_fps
                ))
                .block(Block::default().borders(Borders::ALL).title("wordgrove"));
                frame.render_widget(header, chunks[0]);

                let block = Block::default().borders(Borders::ALL).title("Grove");
                let area = block.inner(chunks[1]);
                ui_state.area = area;
                let viewport = render::Viewport {
                    width: area.width,
                    height: area.height,
                };
                render::draw(
                    &snapshot,
                    pointer,
                    &ui_state.projection,
                    viewport,
                    &mut ui_state.framebuf,
                    &mut ui_state.hits,
                );

                let framebuf = &ui_state.framebuf;
                let lines: Vec<Line> = (0..framebuf.height())
                    .map(|y| {
                        let spans: Vec<Span> = (0..framebuf.width())
                            .map(|x| framebuf.get(x, y))
                            .filter(|cell| cell.ch != WIDE_TAIL)
                            .map(|cell| {
                                Span::styled(cell.ch.to_string(), Style::default().fg(color_for(cell.color)))
                            })
                            .collect();
                        Line::from(spans)
                    })
                    .collect();
                frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);

                let footer = Paragraph::new(
                    "click: collect | drag: lure | 1-4: English/漢字/ひらがな/Mixed | s: start | x: stop | q: quit",
                )
                .block(Block::default().borders(Borders::ALL).title("Controls"));
                frame.render_widget(footer, chunks[2]);
            })?;

            game.update_viewport(ui_state.projection.world_size(render::Viewport {
                width: ui_state.area.width,
                height: ui_state.area.height,
            }));
            if !started && ui_state.area.width > 0 {
                game.start(Some(mode));
                started = true;
            }

            last_render = Instant::now();
            render_counter += 1;
        }

        let timeout = render_interval.saturating_sub(last_render.elapsed());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(ch @ '1'..='4') => {
                    let idx = ch as usize - '1' as usize;
                    game.start(Some(GameMode::ALL[idx]));
                    started = true;
                }
                KeyCode::Char('s') => {
                    game.start(Some(GameMode::Mixed));
                    started = true;
                }
                KeyCode::Char('x') => game.stop(),
                _ => {}
            },
            CrosstermEvent::Mouse(mouse) => handle_mouse(game, &ui_state, mouse),
            _ => {}
        }
    }
}

fn handle_mouse(game: &SharedGame, ui_state: &UiState, mouse: MouseEvent) {
    let Some((col, row)) = local_cell(ui_state.area, mouse.column, mouse.row) else {
        return;
    };
    let location = ui_state.projection.to_world(col, row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = render::hit_test(&ui_state.hits, col, row) {
                game.remove_word(id);
            }
            game.update_pointer(Some(location));
        }
        MouseEventKind::Drag(MouseButton::Left) => game.update_pointer(Some(location)),
        _ => {}
    }
}

/// Converts a terminal position into a cell inside `area`.
fn local_cell(area: Rect, column: u16, row: u16) -> Option<(u16, u16)> {
    let inside = column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height);
    inside.then(|| (column - area.x, row - area.y))
}

fn shutdown_terminal(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

struct UiState {
    projection: Projection,
    framebuf: render::FrameBuffer,
    hits: Vec<HitBox>,
    area: Rect,
}

impl UiState {
    fn new() -> Self {
        Self {
            projection: Projection::default(),
            framebuf: render::FrameBuffer::new(0, 0),
            hits: Vec::new(),
            area: Rect::default(),
        }
    }
}

fn color_for(color: ColorId) -> Color {
    match color {
        ColorId::Word(tint) => match tint {
            Tint::Ink => Color::White,
            Tint::Blue => Color::LightBlue,
            Tint::Purple => Color::Magenta,
            Tint::Green => Color::Green,
            Tint::Red => Color::Red,
            Tint::Orange => Color::LightYellow,
            Tint::Brown => Color::Yellow,
            Tint::Gray => Color::Gray,
        },
        ColorId::Reading => Color::DarkGray,
        ColorId::Pointer => Color::Cyan,
    }
}
