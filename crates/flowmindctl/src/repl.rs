//! Chat REPL with proactive suggestions
//!
//! Each line the user types is resolved against the intent rule table;
//! matching suggestions render as numbered cards under the message.
//! Typing a card number dispatches that action. Dispatch failures show
//! an error toast and the loop keeps running.

use anyhow::Result;
use console::style;
use flowmind_common::{resolve, Dispatcher, PortalConfig, SuggestedAction};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use uuid::Uuid;

use crate::display::{render_suggestions, TerminalNotify};
use crate::navigator::TerminalNavigator;

fn print_prompt() {
    print!("{} ", style("you>").cyan().bold());
    io::stdout().flush().ok();
}

/// Run the interactive chat loop until EOF or an exit command.
pub fn run(config: &PortalConfig) -> Result<()> {
    let session_id = Uuid::new_v4();
    let mut dispatcher = Dispatcher::new(
        TerminalNavigator::from_config(config),
        TerminalNotify,
        move |name: &str| {
            info!(
                target: "analytics",
                session = %session_id,
                action = name,
                at = %chrono::Utc::now().to_rfc3339(),
                "action taken"
            );
        },
    );

    println!("FlowMindAI portal chat. Ask about leave, expenses, IT help, or documents.");
    println!("{}", style("Type a suggestion number to start an action; 'exit' to quit.").dim());
    print_prompt();

    let stdin = io::stdin();
    let mut pending: Vec<SuggestedAction> = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            print_prompt();
            continue;
        }
        if matches!(input, "exit" | "quit" | "bye") {
            break;
        }

        if let Ok(number) = input.parse::<usize>() {
            match number.checked_sub(1).and_then(|i| pending.get(i)) {
                Some(action) => {
                    // Error toast is already shown by the dispatcher;
                    // the loop must survive a failed dispatch.
                    if let Err(err) = dispatcher.dispatch(action) {
                        warn!(error = %err, "dispatch failed");
                    }
                }
                None => println!("No suggestion #{number} on screen."),
            }
            print_prompt();
            continue;
        }

        pending = resolve(input);
        if pending.is_empty() {
            println!("{}", style("No suggested actions for that message.").dim());
        } else {
            print!("{}", render_suggestions(&pending, config.max_suggestions));
        }
        print_prompt();
    }

    println!();
    Ok(())
}
