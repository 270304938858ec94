use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use octoseek_core::{update, Msg, NamePolicy, WidgetState};
use octoseek_engine::SearchSettings;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use seek_logging::{seek_info, seek_warn};
use throbber_widgets_tui::ThrobberState;

use crate::cli::Args;
use crate::effects::EffectRunner;
use crate::ui::input::QueryInput;
use crate::ui::motion::MotionTimeline;
use crate::ui::render;

const TICK: Duration = Duration::from_millis(16);

pub fn run(args: Args) -> Result<()> {
    let settings = SearchSettings {
        endpoint: args.endpoint,
        token: args.token,
        ..SearchSettings::default()
    };
    let mut app = App::new(settings, args.include_nameless, args.query)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

struct App {
    state: WidgetState,
    runner: EffectRunner,
    input: QueryInput,
    timeline: MotionTimeline,
    throbber: ThrobberState,
    selected: usize,
}

impl App {
    fn new(
        settings: SearchSettings,
        include_nameless: bool,
        initial_query: Option<String>,
    ) -> Result<Self> {
        let policy = if include_nameless {
            NamePolicy::All
        } else {
            NamePolicy::NamedOnly
        };
        let runner = EffectRunner::new(settings).context("starting the search engine")?;
        let mut app = Self {
            state: WidgetState::with_name_policy(policy),
            runner,
            input: QueryInput::new(initial_query.as_deref().unwrap_or("")),
            timeline: MotionTimeline::new(),
            throbber: ThrobberState::default(),
            selected: 0,
        };
        // An initial query takes the ordinary debounce path.
        if let Some(query) = initial_query {
            if !query.is_empty() {
                app.dispatch(Msg::InputEdited(query));
            }
        }
        Ok(app)
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !self.handle_key(key) {
                        return Ok(());
                    }
                }
            }

            let now = Instant::now();
            for msg in self.runner.poll(now) {
                self.dispatch(msg);
            }

            let view = self.state.view();
            self.selected = match view.rows.len() {
                0 => 0,
                len => self.selected.min(len - 1),
            };

            self.timeline.observe(view.phase, now);
            let motion = self.timeline.advance(now);
            self.throbber.calc_next();

            terminal.draw(|frame| {
                render::draw(
                    frame,
                    &mut self.input,
                    &view,
                    motion,
                    self.selected,
                    &self.throbber,
                )
            })?;

            std::thread::sleep(TICK);
        }
    }

    /// Returns false when the key asks the app to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match classify_key(key) {
            KeyAction::Quit => return false,
            KeyAction::ClearInput => {
                self.input.clear();
                self.selected = 0;
                self.dispatch(Msg::InputEdited(String::new()));
            }
            KeyAction::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            KeyAction::SelectNext => self.selected = self.selected.saturating_add(1),
            KeyAction::OpenSelected => self.open_selected(),
            KeyAction::Edit => {
                if self.input.input(key) {
                    self.dispatch(Msg::InputEdited(self.input.text()));
                }
            }
        }
        true
    }

    fn open_selected(&mut self) {
        let view = self.state.view();
        let Some(row) = view.rows.get(self.selected) else {
            return;
        };
        seek_info!("opening profile url={}", row.profile_url);
        if let Err(err) = open::that(&row.profile_url) {
            seek_warn!("could not open {}: {}", row.profile_url, err);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects, Instant::now());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    ClearInput,
    SelectPrevious,
    SelectNext,
    OpenSelected,
    Edit,
}

fn classify_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::ClearInput
        }
        KeyCode::Up => KeyAction::SelectPrevious,
        KeyCode::Down => KeyAction::SelectNext,
        KeyCode::Enter => KeyAction::OpenSelected,
        _ => KeyAction::Edit,
    }
}
