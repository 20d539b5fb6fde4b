pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use env_logger::{Env, Target};
use log::{info, warn};
use marmoset_type::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, CrosstermEventSource, Runner, Step, TICK_RATE_MS},
    session::Session,
    vocabulary::{SupportedLanguage, Vocabulary},
    word_generator::WordGenerator,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};

/// Setting this enables the log file
const LOG_ENV: &str = "MARMOSET_LOG";

/// fifty random words, one text box, and a wpm chart
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type fifty random words as fast as you can. \
                  Speed is sampled every second and charted when you finish."
)]
pub struct Cli {
    /// built-in word list to pull words from
    #[clap(short = 'l', long, value_enum)]
    language: Option<SupportedLanguage>,

    /// read words from a file instead (json, or whitespace separated text)
    #[clap(long)]
    words_file: Option<PathBuf>,

    /// keep the cursor steady while idle
    #[clap(long)]
    no_blink: bool,

    /// remember these options for next time
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command line flags over the stored config
    fn apply(&self, mut config: Config) -> Config {
        if let Some(language) = self.language {
            config.language = language;
            config.words_file = None;
        }
        if let Some(ref path) = self.words_file {
            config.words_file = Some(path.clone());
        }
        if self.no_blink {
            config.blink_cursor = false;
        }
        config
    }
}

fn load_vocabulary(config: &Config) -> Result<Vocabulary, Box<dyn Error>> {
    match config.words_file {
        Some(ref path) => Vocabulary::from_file(path),
        None => Vocabulary::builtin(config.language),
    }
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub generator: WordGenerator,
    pub session: Session,
    pub blink_cursor: bool,
}

impl App {
    pub fn new(generator: WordGenerator, blink_cursor: bool) -> Self {
        let session = Session::new(generator.generate());
        Self {
            generator,
            session,
            blink_cursor,
        }
    }

    /// Start over with freshly drawn words
    pub fn reset(&mut self) {
        info!("session reset");
        self.session = Session::new(self.generator.generate());
    }

    /// Keys edit the text box value; each edit is handed to the session whole.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Tab => self.reset(),
            _ if self.session.has_finished() => match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.reset(),
                _ => {}
            },
            KeyCode::Char('w') | KeyCode::Backspace if ctrl => {
                self.session.on_input_change_at("", now);
            }
            KeyCode::Backspace => {
                let mut raw = self.session.buffer().to_owned();
                raw.pop();
                self.session.on_input_change_at(&raw, now);
            }
            KeyCode::Char(c) if !ctrl => {
                let mut raw = self.session.buffer().to_owned();
                raw.push(c);
                self.session.on_input_change_at(&raw, now);
            }
            _ => {}
        }

        Control::Continue
    }

    /// Apply one runner step. The session clock catches up to `step.at`
    /// before the event itself is handled.
    pub fn on_step(&mut self, step: Step) -> Control {
        self.session.advance_clock(step.at);

        match step.event {
            AppEvent::Tick | AppEvent::Resize => Control::Continue,
            AppEvent::Key(key) => self.handle_key(key, step.at),
            AppEvent::Closed => {
                warn!("terminal input closed, quitting");
                Control::Quit
            }
        }
    }
}

fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    // the terminal belongs to the ui, so logs go to a file
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = env_logger::Builder::from_env(Env::new().filter(LOG_ENV))
            .target(Target::Pipe(Box::new(file)))
            .try_init();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging();

    let store = FileConfigStore::new();
    let config = cli.apply(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!("saved config to {}", store.path().display());
    }

    let vocabulary = load_vocabulary(&config)?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(WordGenerator::new(vocabulary), config.blink_cursor);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!("exiting on error: {e}");
    }
    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        if app.on_step(runner.step()) == Control::Quit {
            break;
        }

        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
