//! Interactive prompt loop.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Color;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{info, warn};

use frankie_orchestrator::{Command, Prompter, Session, Turn};
use frankie_protocols::Agent;

use crate::BoxError;
use crate::output;

const PROMPT: &str = "🎯 F.R.A.N.K.I.E. > ";
const EXIT_QUESTION: &str = "Exit F.R.A.N.K.I.E.? (y/N) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Asks questions on the terminal with the spinner paused.
///
/// The question is read through rustyline, so Ctrl-C ends it at once; the
/// interrupt is remembered and the exit confirmation follows the turn.
struct TerminalPrompter {
    spinner: ProgressBar,
    interrupted: AtomicBool,
}

impl TerminalPrompter {
    fn new(spinner: ProgressBar) -> Self {
        Self {
            spinner,
            interrupted: AtomicBool::new(false),
        }
    }

    fn was_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl Prompter for TerminalPrompter {
    fn show(&self, title: &str, body: &str) {
        self.spinner.suspend(|| output::panel(title, body, Color::Green));
    }

    fn ask(&self, question: &str) -> Option<String> {
        let line = self.spinner.suspend(|| read_line(&format!("{question} ")));
        answer(line, &self.interrupted)
    }
}

fn read_line(prompt: &str) -> rustyline::Result<String> {
    DefaultEditor::new()?.readline(prompt)
}

/// `None` for an interrupted or closed prompt; an interrupt sets `interrupted`.
fn answer(line: rustyline::Result<String>, interrupted: &AtomicBool) -> Option<String> {
    match line {
        Ok(line) => Some(line.trim().to_string()),
        Err(ReadlineError::Interrupted) => {
            interrupted.store(true, Ordering::SeqCst);
            None
        }
        Err(ReadlineError::Eof) => None,
        Err(e) => {
            warn!("Prompt failed: {}", e);
            None
        }
    }
}

/// Ask whether to quit. A second Ctrl-C or Ctrl-D counts as yes.
fn confirm_exit() -> bool {
    match read_line(EXIT_QUESTION) {
        Ok(answer) => is_yes(Some(&answer)),
        Err(_) => true,
    }
}

fn is_yes(answer: Option<&str>) -> bool {
    matches!(
        answer.map(|a| a.trim().to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    )
}

fn spinner(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
        .template("{spinner:.cyan} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message("🤔 F.R.A.N.K.I.E. is working on it...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run one line through the session and print the result.
///
/// Ctrl-C while a turn is in flight asks whether to exit; answering no
/// resumes the same turn.
pub(crate) async fn process(session: &mut Session, line: &str, bypass_consent: bool) -> Flow {
    let busy = matches!(Command::parse(line), Command::Text(_) | Command::Shell(_));
    let spinner = spinner(busy);
    let prompter = TerminalPrompter::new(spinner.clone());

    let turn = {
        let handle = session.handle(line, &prompter);
        tokio::pin!(handle);
        loop {
            tokio::select! {
                turn = &mut handle => break Some(turn),
                _ = tokio::signal::ctrl_c() => {
                    if spinner.suspend(confirm_exit) {
                        break None;
                    }
                }
            }
        }
    };
    spinner.finish_and_clear();

    match turn {
        None => {
            output::goodbye();
            Flow::Exit
        }
        Some(turn) => {
            output::render(&turn);
            if prompter.was_interrupted() && confirm_exit() {
                output::goodbye();
                return Flow::Exit;
            }
            match turn {
                Turn::Exit => Flow::Exit,
                Turn::Clear => {
                    output::welcome(
                        &session.dispatch().target().descriptor().name,
                        bypass_consent,
                    );
                    Flow::Continue
                }
                _ => Flow::Continue,
            }
        }
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".frankie").join("history.txt"))
}

pub(crate) async fn run(mut session: Session, bypass_consent: bool) -> Result<(), BoxError> {
    output::welcome(&session.dispatch().target().descriptor().name, bypass_consent);

    let mut editor = DefaultEditor::new()?;
    let history = history_path();
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            info!("No history at {}", path.display());
        }
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if process(&mut session, &line, bypass_consent).await == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if confirm_exit() {
                    output::goodbye();
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::goodbye();
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Err(e) = editor.save_history(path) {
            warn!("Could not save history: {}", e);
        }
    }
    Ok(())
}
