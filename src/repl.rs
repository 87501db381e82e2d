//! Console front-end — reads lines from stdin, prints role-tagged replies
//! to stdout.
//!
//! This is the thin collaborator around the core: it supplies the selected
//! module and the question text, renders assistant output, and writes the
//! transcript file on `/save`. Runs until `/quit`, Ctrl-C, or stdin closes.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::controller::{Mentor, TurnOutcome};
use crate::error::AppError;
use crate::registry::{self, Module};
use crate::session::Session;
use crate::transcript;

// ── Line parsing ──────────────────────────────────────────────────────────────

/// One parsed line of console input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Question(String),
    ListModules,
    SelectModule(String),
    NewChat,
    Save,
    Quit,
    Unknown(String),
}

/// Classify a line: `/`-prefixed lines are commands, everything else is a
/// question for the active module.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Input::Question(line.to_string());
    };
    let (cmd, arg) = match rest.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (rest, ""),
    };
    match cmd {
        "modules" => Input::ListModules,
        "module" => Input::SelectModule(arg.to_string()),
        "new" => Input::NewChat,
        "save" => Input::Save,
        "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

// ── Repl ──────────────────────────────────────────────────────────────────────

pub struct Repl {
    mentor: Mentor,
    module: &'static Module,
    session: Option<Session>,
}

impl Repl {
    /// Start with the first registry module selected.
    pub fn new(mentor: Mentor) -> Self {
        Self {
            mentor,
            module: &registry::all_modules()[0],
            session: None,
        }
    }

    /// Write the current transcript into `dir`, returning the written path.
    /// A session is created first if none exists yet.
    pub fn save_transcript(&mut self, dir: &Path) -> Result<PathBuf, AppError> {
        let session = Session::ensure_initialized(&mut self.session, self.module);
        let payload = transcript::export(session);
        let path = dir.join(&payload.file_name);
        std::fs::write(&path, &payload.content)?;
        Ok(path)
    }

    fn print_modules(&self) {
        for m in registry::all_modules() {
            let marker = if m.name() == self.module.name() { "*" } else { " " };
            println!("{marker} {} {}", m.icon(), m.name());
        }
    }

    fn select_module(&mut self, name: &str) {
        match registry::find(name) {
            Some(m) => {
                self.module = m;
                println!("{} {} mentor selected — fresh conversation.", m.icon(), m.name());
            }
            None => println!("unknown module: '{name}' — try /modules"),
        }
    }

    async fn ask(&mut self, question: &str) {
        let session = Session::ensure_initialized(&mut self.session, self.module);
        match self.mentor.take_turn(session, question).await {
            Ok(TurnOutcome::Noop) => {}
            Ok(_) => {
                // Refusals and answers render identically: last assistant entry.
                if let Some(msg) = session.visible_messages().last() {
                    println!("{}", msg.content);
                }
            }
            Err(e) => {
                warn!(error = %e, "turn failed");
                println!("[error] {e}");
            }
        }
    }

    /// Main loop. Returns when the user quits, Ctrl-C arrives, or stdin
    /// closes.
    pub async fn run(&mut self) -> Result<(), AppError> {
        info!(module = self.module.name(), "console started");
        println!("─────────────────────────────────");
        println!(" Mentor console  (/modules, /module <name>, /new, /save, /quit)");
        println!("─────────────────────────────────");
        println!("Active module: {} {}", self.module.icon(), self.module.name());

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        loop {
            print!("> ");
            use std::io::Write as _;
            let _ = std::io::stdout().flush();

            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c() => {
                    println!();
                    info!("interrupt received, closing console");
                    break;
                }

                line = lines.next_line() => {
                    let Some(line) = line? else {
                        info!("stdin closed");
                        break;
                    };
                    match parse_line(&line) {
                        Input::Quit => break,
                        Input::ListModules => self.print_modules(),
                        Input::SelectModule(name) => self.select_module(&name),
                        Input::NewChat => {
                            Session::ensure_initialized(&mut self.session, self.module)
                                .reset(self.module);
                            println!("fresh conversation for {}.", self.module.name());
                        }
                        Input::Save => match self.save_transcript(Path::new(".")) {
                            Ok(path) => println!("saved {}", path.display()),
                            Err(e) => println!("[error] {e}"),
                        },
                        Input::Unknown(cmd) => println!("unknown command: /{cmd}"),
                        Input::Question(q) => self.ask(&q).await,
                    }
                }
            }
        }

        Ok(())
    }
}
