use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::events::commands::{CommandHandler, CommandResponse};
use crate::events::{Event, ServerListener};

/// Drives a listener from a line based console.
///
/// Lines starting with `{` are JSON events, everything else is a console
/// command. Fires `ServerLoad` before reading the first line and returns
/// on `exit` or end of input.
pub async fn run<R, L>(
    reader: R,
    listener: &L,
    commands: &CommandHandler,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    L: ServerListener,
{
    listener.handle(&Event::ServerLoad);
    info!("Server loaded. Type 'help' for a list of commands.");

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line.starts_with('{') {
            match serde_json::from_str::<Event>(line) {
                Ok(event) => listener.handle(&event),
                Err(e) => error!("Ignoring malformed event '{}': {}", line, e),
            }
            continue;
        }

        match line {
            "exit" => {
                info!("Shutting down.");
                break;
            }
            "help" => {
                for command in commands.commands() {
                    info!("  {} - {}", command.name, command.description);
                }
            }
            _ => {
                if let CommandResponse::UnknownCommand(name) = commands.handle_message(line) {
                    error!("Invalid command '{}'. Type 'help' for help.", name);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Player;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingListener {
        events: Mutex<Vec<Event>>,
    }

    impl ServerListener for RecordingListener {
        fn on_server_load(&self) {
            self.events.lock().unwrap().push(Event::ServerLoad);
        }

        fn on_chat(&self, player: &Player, text: &str) {
            self.events.lock().unwrap().push(Event::ChatMessage {
                player: player.clone(),
                text: text.to_string(),
            });
        }

        fn on_join(&self, player: &Player) {
            self.events.lock().unwrap().push(Event::PlayerJoin {
                player: player.clone(),
            });
        }

        fn on_leave(&self, player: &Player) {
            self.events.lock().unwrap().push(Event::PlayerLeave {
                player: player.clone(),
            });
        }
    }

    #[tokio::test]
    async fn routes_events_and_commands() {
        let input = b"{\"event\":\"join\",\"player\":{\"name\":\"Guest\"}}\n\
                      not json {\n\
                      {broken\n\
                      ping\n\
                      {\"event\":\"leave\",\"player\":{\"name\":\"Guest\"}}\n\
                      exit\n\
                      ping\n";

        let pings = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pings);
        let mut commands = CommandHandler::new();
        commands.register("ping", "Counts pings.", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let listener = RecordingListener::default();
        run(&input[..], &listener, &commands).await.unwrap();

        let guest = Player::new("Guest", false);
        assert_eq!(
            *listener.events.lock().unwrap(),
            vec![
                Event::ServerLoad,
                Event::PlayerJoin {
                    player: guest.clone()
                },
                Event::PlayerLeave { player: guest },
            ]
        );
        assert_eq!(pings.load(Ordering::SeqCst), 1);
    }
}
