use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use storefront_core::{Msg, ProductId};
use storefront_logging::sf_debug;

/// Everything the main loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Msg(Msg),
    Unrecognized(String),
    QuitRequested,
}

pub const COMMAND_HELP: &str = "Commands: r = retry, a <id> = add to cart, q = quit";

/// Map one typed line to an event. Blank lines map to `None`.
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let argument = words.next();

    let event = match (command.to_ascii_lowercase().as_str(), argument) {
        ("r" | "retry", None) => UiEvent::Msg(Msg::RetryClicked),
        ("a" | "add", Some(id)) => match id.parse::<u64>() {
            Ok(id) => UiEvent::Msg(Msg::AddToCartClicked {
                product_id: ProductId(id),
            }),
            Err(_) => UiEvent::Unrecognized(line.trim().to_string()),
        },
        ("q" | "quit" | "exit", None) => UiEvent::QuitRequested,
        _ => UiEvent::Unrecognized(line.trim().to_string()),
    };
    Some(event)
}

/// Forward parsed stdin lines to the main loop. End of input quits.
pub fn spawn_stdin_reader(tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = parse_command(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        sf_debug!("stdin closed");
        let _ = tx.send(UiEvent::QuitRequested);
    });
}
