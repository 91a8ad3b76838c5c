//! Operator commands read from stdin.
//!
//! | Command | Effect |
//! |---|---|
//! | `order <x, y>` | send a single-node order |
//! | `pause` / `resume` / `stop` | send an instant action |
//! | `factsheet` | request the factsheet again |
//! | `status` | print the dashboard summary |
//! | `errors` | print the error log |
//! | `help` | list commands |
//! | `quit` / `exit` | disconnect and exit |

use std::io::{self, BufRead};
use std::ops::ControlFlow;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::connection::Publisher;
use crate::dashboard::Dashboard;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_action::ActionType;

/// Reads operator lines from stdin on a dedicated thread.
pub fn spawn_stdin_reader(buffer: usize) -> mpsc::Receiver<String> {
    spawn_line_reader(io::BufReader::new(io::stdin()), buffer)
}

/// Forwards lines from `reader` until it ends or the receiver is dropped.
/// The thread is detached, so a read blocked on a terminal never holds up
/// shutdown. The receiver yields `None` once input is exhausted.
pub fn spawn_line_reader<R>(reader: R, buffer: usize) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(buffer);
    let spawned = thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to read console input");
                        break;
                    }
                }
            }
            debug!("console input closed");
        });
    if let Err(err) = spawned {
        warn!(error = %err, "console input unavailable");
    }
    rx
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Order(String),
    Action(ActionType),
    Factsheet,
    Status,
    Errors,
    Help,
    Quit,
    Unknown(String),
}

/// Returns `None` for blank lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "order" => Command::Order(rest.to_string()),
        "pause" => Command::Action(ActionType::Pause),
        "resume" => Command::Action(ActionType::Resume),
        "stop" => Command::Action(ActionType::Stop),
        "factsheet" => Command::Factsheet,
        "status" => Command::Status,
        "errors" => Command::Errors,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

pub fn run_command(
    dashboard: &mut Dashboard,
    publisher: &dyn Publisher,
    command: Command,
) -> ControlFlow<()> {
    match command {
        Command::Order(coordinates) => {
            let _ = dashboard.submit_order(publisher, &coordinates);
            println!("{}", dashboard.message());
        }
        Command::Action(action_type) => {
            let _ = dashboard.send_instant_action(publisher, action_type);
            println!("{}", dashboard.message());
        }
        Command::Factsheet => dashboard.request_factsheet(publisher),
        Command::Status => println!("{}", dashboard.summary()),
        Command::Errors => print_errors(dashboard),
        Command::Help => print_help(),
        Command::Quit => return ControlFlow::Break(()),
        Command::Unknown(line) => println!("Unknown command: '{}'. Type help for available commands.", line),
    }
    ControlFlow::Continue(())
}

fn print_errors(dashboard: &Dashboard) {
    let log = dashboard.error_log();
    if log.is_empty() {
        println!("No errors reported");
        return;
    }
    for error in log.entries() {
        println!(
            "[{}] {} #{}: {} ({})",
            error.error_level,
            error.error_type,
            error.error_code,
            error.error_description,
            error.header.timestamp,
        );
    }
}

fn print_help() {
    println!("order <x, y>              send the AGV to x, y");
    println!("pause | resume | stop     send an instant action");
    println!("factsheet                 request the vehicle factsheet");
    println!("status                    show the current AGV state");
    println!("errors                    show reported errors");
    println!("quit                      disconnect and exit");
}
