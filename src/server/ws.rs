//! WebSocket fan-out endpoint

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use crate::domain::Command;

use super::routes::AppState;

/// Event name pushed to every listener
const VOICE_COMMAND_EVENT: &str = "voice_command";

/// Frame sent to listeners for each broadcast command
#[derive(Debug, Serialize)]
struct BroadcastFrame<'a> {
    event: &'static str,
    data: &'a Command,
}

/// `GET /ws` - register a real-time listener.
///
/// The subscription is taken before the upgrade completes, so a command
/// broadcast during the handshake is not lost.
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let rx = state.pipeline.broadcaster().subscribe();
    ws.on_upgrade(move |socket| listen(socket, rx))
}

/// Forward every broadcast command to one connected listener until either
/// side goes away. Inbound frames are ignored; connect and disconnect are
/// only observability events.
async fn listen(mut socket: WebSocket, mut rx: broadcast::Receiver<Command>) {
    tracing::info!("listener connected");

    loop {
        tokio::select! {
            inbound = socket.recv() => match inbound {
                Some(Ok(_)) => {}
                Some(Err(_)) | None => break,
            },
            command = rx.recv() => match command {
                Ok(command) => {
                    let frame = BroadcastFrame {
                        event: VOICE_COMMAND_EVENT,
                        data: &command,
                    };
                    let Ok(text) = serde_json::to_string(&frame) else {
                        continue;
                    };
                    if socket.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // best-effort delivery: slow listeners miss commands
                    tracing::warn!(skipped, "listener lagged behind broadcasts");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("listener disconnected");
}
