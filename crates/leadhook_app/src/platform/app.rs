use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Context};
use clap::Parser;
use leadhook_core::{update, AppState, Msg, Route};
use leadhook_engine::{ensure_data_dir, EngineHandle, StorageBackend};
use leadhook_logging::{hook_error, hook_info, hook_warn};

use super::cli::Args;
use super::config::{self, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::persistence::Persistence;
use super::ui::command::{self, Command};
use super::ui::console::Console;
use super::ui::constants::{FORM_PROMPT, RENDER_FAILURE_MESSAGE, WEBHOOK_PROMPT};
use super::ui::layout::{self, Line, Tone};
use super::ui::render;

const DATA_DIR_NAME: &str = "leadhook";

/// Everything the shell thread waits on.
#[derive(Debug)]
enum ShellEvent {
    Input(String),
    InputClosed,
    Msg(Msg),
}

impl From<Msg> for ShellEvent {
    fn from(msg: Msg) -> Self {
        ShellEvent::Msg(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let data_dir = resolve_data_dir(args.data_dir.as_deref())?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILENAME));
    let (file_config, config_problem) = config::load(&config_path);
    let settings = config::resolve(&file_config, &args);

    logging::initialize(settings.log, settings.log_level, &logging::default_log_path());
    if let Some(problem) = config_problem {
        hook_warn!("{}", problem);
    }

    ensure_data_dir(&data_dir)
        .with_context(|| format!("could not prepare data directory {}", data_dir.display()))?;
    hook_info!("Using data directory {:?}", data_dir);

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let (engine, engine_events) = EngineHandle::new(settings.send);
    let runner = EffectRunner::new(
        engine,
        engine_events,
        Persistence::open(&data_dir),
        event_tx.clone(),
    );

    let mut shell = Shell::new(runner);
    shell.start();
    spawn_input_reader(event_tx);

    shell.prompt();
    while let Ok(event) = event_rx.recv() {
        let flow = match event {
            ShellEvent::Input(line) => shell.handle_line(&line),
            ShellEvent::Msg(msg) => {
                shell.dispatch(msg);
                Flow::Continue
            }
            ShellEvent::InputClosed => Flow::Quit,
        };
        if flow == Flow::Quit {
            break;
        }
        shell.prompt();
    }

    hook_info!("Shell exiting");
    Ok(())
}

fn resolve_data_dir(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::data_dir()
            .map(|dir| dir.join(DATA_DIR_NAME))
            .ok_or_else(|| anyhow!("no user data directory on this system; pass --data-dir")),
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => ShellEvent::Input(line),
                Err(err) => {
                    hook_error!("Failed to read input: {}", err);
                    break;
                }
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        let _ = event_tx.send(ShellEvent::InputClosed);
    });
}

struct Shell<B> {
    state: AppState,
    runner: EffectRunner<B>,
    console: Console,
}

impl<B: StorageBackend> Shell<B> {
    fn new(runner: EffectRunner<B>) -> Self {
        Self {
            state: AppState::new(),
            runner,
            console: Console::new(),
        }
    }

    fn start(&mut self) {
        let restore = self.runner.persistence().restore_msg();
        let route = self.runner.router().current_msg();
        hook_info!("Starting at {}", self.runner.router().hash());
        self.apply(restore);
        self.apply(route);
        self.state.consume_dirty();
        self.redraw();
        self.print_notices();
    }

    fn prompt(&mut self) {
        let prompt = match self.state.route() {
            Route::Form => FORM_PROMPT,
            Route::Webhook => WEBHOOK_PROMPT,
        };
        report(self.console.prompt(prompt));
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let command = match command::parse(line, self.state.route()) {
            Ok(Some(command)) => command,
            Ok(None) => return Flow::Continue,
            Err(err) => {
                self.print(vec![Line::new(err.to_string(), Tone::Error)]);
                return Flow::Continue;
            }
        };

        match command {
            Command::Dispatch(msg) => self.dispatch(msg),
            Command::Navigate(hash) => {
                let msg = self.runner.navigate(hash);
                self.dispatch(msg);
            }
            Command::SaveUrl(name) => {
                let suggested = self.state.tester().suggested_name().map(ToOwned::to_owned);
                match name.or(suggested) {
                    Some(name) => self.dispatch(Msg::SaveWebhookConfirmed(name)),
                    None => self.print(vec![Line::new("usage: save-url <name>", Tone::Error)]),
                }
            }
            Command::ListSets => self.print(render::render_saved_sets(&self.state.view())),
            Command::ListWebhooks => {
                self.print(render::render_saved_webhooks(&self.state.view().webhook))
            }
            Command::ShowPayload => self.print(render::render_payload(&self.state.view().webhook)),
            Command::Show => self.redraw(),
            Command::Help => self.print(layout::help(self.state.route())),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Applies `msg` and its follow-ups, then redraws if anything changed.
    fn dispatch(&mut self, msg: Msg) {
        self.apply(msg);
        if self.state.consume_dirty() {
            self.redraw();
        }
        self.print_notices();
    }

    fn print_notices(&mut self) {
        let notices = self.state.take_notices();
        if !notices.is_empty() {
            self.print(render::render_notices(&notices));
        }
    }

    fn apply(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }
    }

    fn redraw(&mut self) {
        let view = self.state.view();
        let lines = panic::catch_unwind(AssertUnwindSafe(|| render::render(&view)))
            .unwrap_or_else(|_| {
                hook_error!("Rendering failed");
                vec![Line::new(RENDER_FAILURE_MESSAGE, Tone::Error)]
            });
        report(self.console.draw(&lines));
    }

    fn print(&mut self, lines: Vec<Line>) {
        report(self.console.print(&lines));
    }
}

fn report(result: io::Result<()>) {
    if let Err(err) = result {
        hook_warn!("Console write failed: {}", err);
    }
}
