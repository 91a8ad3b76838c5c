use futures_util::StreamExt;
use tracing::{debug, info};

use crate::config::Config;
use crate::connection::ConnectionManager;
use crate::console;
use crate::dashboard::Dashboard;
use crate::error::TransportError;
use crate::router::TopicTable;

const CONSOLE_BUFFER: usize = 8;

/// Runs one broker session until the operator quits, Ctrl-C is pressed or
/// the connection is lost. Inbound messages are handled strictly one after
/// another on this task.
pub async fn run_dashboard(config: Config) -> Result<(), TransportError> {
    let topics = TopicTable::new(&config.mqtt_broker.vda_interface);
    let mut dashboard = Dashboard::new(&config);
    let mut connection = ConnectionManager::new(config.mqtt_broker.clone(), topics);

    let mut message_stream = match connection.create_session() {
        Ok(stream) => stream,
        Err(err) => {
            dashboard.on_transport_error(&err);
            return Err(err);
        }
    };
    if let Err(err) = connection.connect().await {
        dashboard.on_transport_error(&err);
        connection.disconnect().await?;
        return Err(err);
    }
    dashboard.on_connected(&connection);
    info!(status = %connection.status(), "{}", dashboard.message());

    let mut console_lines = console::spawn_stdin_reader(CONSOLE_BUFFER);
    let mut console_open = true;

    let outcome = loop {
        tokio::select! {
            inbound = message_stream.next() => match inbound {
                Some(Some(msg)) => {
                    if msg.retained() {
                        debug!(topic = msg.topic(), "retained message");
                    }
                    dashboard.handle_message(&connection, msg.topic(), msg.payload());
                }
                Some(None) | None => {
                    connection.mark_lost();
                    let err = TransportError::ConnectionLost;
                    dashboard.on_transport_error(&err);
                    break Err(err);
                }
            },
            line = console_lines.recv(), if console_open => match line {
                Some(line) => {
                    if let Some(command) = console::parse_command(&line) {
                        if console::run_command(&mut dashboard, &connection, command).is_break() {
                            break Ok(());
                        }
                    }
                }
                None => console_open = false,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break Ok(());
            }
        }
    };

    connection.disconnect().await?;
    outcome
}
