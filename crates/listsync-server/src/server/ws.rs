use crate::codec;
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use listsync_core::Snapshot;

#[derive(Clone, Copy)]
enum SnapshotEncoding {
    Json,
    Base64,
}

impl SnapshotEncoding {
    fn frame(self, snapshot: &Snapshot) -> Result<String, serde_json::Error> {
        match self {
            Self::Json => serde_json::to_string(snapshot),
            Self::Base64 => codec::encode(snapshot),
        }
    }
}

/// WebSocket handler for the list-change subscription. The client
/// receives the current snapshot immediately, then one frame per
/// mutation.
pub async fn changes_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| stream_changes(socket, state, SnapshotEncoding::Json))
}

/// Same stream as `changes_handler`, frames base64-encoded.
pub async fn binary_changes_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| stream_changes(socket, state, SnapshotEncoding::Base64))
}

async fn stream_changes(socket: WebSocket, state: AppState, encoding: SnapshotEncoding) {
    let (mut sender, mut receiver) = socket.split();

    // Subscribing before the first frame is sent guarantees the replay
    // snapshot arrives ahead of any concurrent mutation's update.
    let mut snapshots = state.service.subscribe();

    // Snapshot forwarding task
    let send_task = tokio::spawn(async move {
        while let Some(snapshot) = snapshots.recv().await {
            let frame = match encoding.frame(&snapshot) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("failed to encode snapshot frame: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    // Receive task (drain client frames until close)
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Close(_) => break,
                other => {
                    tracing::trace!("ignoring client frame: {:?}", other);
                }
            }
        }
    });

    tokio::select! {
        _ = send_task => {
            tracing::debug!("snapshot stream ended");
        }
        _ = recv_task => {
            tracing::debug!("subscriber disconnected");
        }
    }
}

/// WebSocket handler for the informational side channel. Plain text
/// frames, no replay; events published while nobody is connected are
/// dropped.
pub async fn notifications_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| stream_notifications(socket, state))
}

async fn stream_notifications(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    let mut notifications = state.service.subscribe_notifications();

    let send_task = tokio::spawn(async move {
        while let Some(message) = notifications.recv().await {
            if sender.send(Message::Text(message)).await.is_err() {
                break;
            }
        }
    });

    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if matches!(msg, Message::Close(_)) {
                break;
            }
        }
    });

    tokio::select! {
        _ = send_task => {
            tracing::debug!("notification stream ended");
        }
        _ = recv_task => {
            tracing::debug!("notification subscriber disconnected");
        }
    }
}
