//! Interactive guided session on the terminal.
//!
//! Input is line based: Enter finishes a set or skips a rest, the final set
//! takes a rep count, `q` abandons the workout. End of input also abandons
//! it; nothing is written unless the session completes.

use std::{
    io::{self, BufRead},
    thread,
};

use anyhow::Result;
use log::{debug, info};
use pushups_core::{
    display::{LoggedResult, OperationStatus, RestClock, SessionProgress},
    Phase, Session, SessionState,
};
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

/// Rest seconds that get their own line while counting down.
fn announce_rest(left: u32) -> bool {
    left <= 3 || left % 15 == 0
}

/// Reads stdin on a plain thread so a pending read never holds up runtime
/// shutdown.
fn spawn_line_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

enum Input {
    Continue,
    Quit,
}

pub async fn run(session: Session, renderer: &TerminalRenderer) -> Result<()> {
    let labels = session.set_labels();
    if session.is_plan_missing() {
        return renderer.render(&SessionProgress::new(&labels, &session.state()).to_string());
    }
    if let Some(entry) = session.plan() {
        renderer.render(&entry.to_string())?;
    }

    let mut states = session.subscribe();
    let mut lines = spawn_line_reader();
    let mut shown = states.borrow_and_update().clone();
    show(renderer, &labels, &shown)?;

    loop {
        tokio::select! {
            biased;

            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                let moved_on = state.phase() != shown.phase()
                    || state.current_index != shown.current_index;
                if moved_on && !state.is_complete {
                    show(renderer, &labels, &state)?;
                } else if let Some(left) = state.rest_seconds_left.filter(|&s| announce_rest(s)) {
                    renderer.render(&format!("Rest {}\n", RestClock(left)))?;
                }
                shown = state;
            }
            line = lines.recv() => {
                let input = match line {
                    Some(line) => line?,
                    None => {
                        info!("Input closed; abandoning session");
                        return abandoned(renderer);
                    }
                };
                if let Input::Quit = handle_input(renderer, &session, &labels, input.trim())? {
                    return abandoned(renderer);
                }
                if session.state().is_complete {
                    break;
                }
            }
        }
    }

    let finished = session.state();
    renderer.render(&SessionProgress::new(&labels, &finished).to_string())?;
    match session.saved().await {
        Some(attempt) => renderer.render(&LoggedResult::new(attempt).to_string()),
        None => renderer.render(
            &OperationStatus::failure("The attempt could not be saved").to_string(),
        ),
    }
}

fn abandoned(renderer: &TerminalRenderer) -> Result<()> {
    renderer.render(&OperationStatus::notice("Session abandoned; nothing was logged").to_string())
}

fn handle_input(
    renderer: &TerminalRenderer,
    session: &Session,
    labels: &[String],
    input: &str,
) -> Result<Input> {
    if input.eq_ignore_ascii_case("q") {
        return Ok(Input::Quit);
    }

    let state = session.state();
    match state.phase() {
        Phase::Resting => {
            debug!("Skipping rest");
            session.skip_rest();
        }
        Phase::ActiveSet if is_final(labels, &state) => match input.parse::<u32>() {
            Ok(reps) => session.submit_final_set(reps),
            Err(_) => {
                renderer.render(
                    &OperationStatus::notice(format!("'{input}' is not a rep count")).to_string(),
                )?;
                renderer.prompt("Reps on the final set:")?;
            }
        },
        Phase::ActiveSet => session.complete_set(),
        Phase::Complete => {}
    }
    Ok(Input::Continue)
}

fn is_final(labels: &[String], state: &SessionState) -> bool {
    state.current_index + 1 == labels.len()
}

fn show(renderer: &TerminalRenderer, labels: &[String], state: &SessionState) -> Result<()> {
    renderer.render(&SessionProgress::new(labels, state).to_string())?;
    match state.phase() {
        Phase::ActiveSet if is_final(labels, state) => renderer.prompt("Reps on the final set:"),
        Phase::ActiveSet => renderer.prompt("Press Enter when the set is done."),
        Phase::Resting => renderer.prompt("Press Enter to skip the rest."),
        Phase::Complete => Ok(()),
    }
}
