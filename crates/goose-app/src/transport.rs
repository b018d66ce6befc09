//! WebSocket client for the assistant service.
//!
//! One request per connection: send the JSON frame, then hand every text
//! frame to the caller until the server closes or the caller stops.

use std::ops::ControlFlow;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use goose_common::{Result, TransportError};
use goose_config::schema::ServerConfig;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::protocol::HelpRequest;

/// Send `request` and feed each inbound text frame to `on_chunk`, in
/// arrival order. Returning `ControlFlow::Break` closes the connection.
pub async fn request_help<F>(
    server: &ServerConfig,
    request: &HelpRequest,
    mut on_chunk: F,
) -> Result<()>
where
    F: FnMut(String) -> ControlFlow<()>,
{
    let url = server.help_url();
    let timeout_secs = u64::from(server.connect_timeout_secs);
    tracing::info!(url = %url, "Connecting to assistant service");

    let (ws, _) = tokio::time::timeout(Duration::from_secs(timeout_secs), connect_async(&url))
        .await
        .map_err(|_| TransportError::Timeout(timeout_secs))?
        .map_err(|e| TransportError::Connect(e.to_string()))?;

    let (mut sink, mut stream) = ws.split();

    let frame = request.to_frame()?;
    sink.send(Message::Text(frame.into()))
        .await
        .map_err(|e| TransportError::Send(e.to_string()))?;
    tracing::debug!(
        message_len = request.message.len(),
        code_len = request.code.len(),
        "Help request sent"
    );

    let mut frames = 0usize;
    loop {
        match stream.next().await {
            Some(Ok(Message::Text(text))) => {
                frames += 1;
                if on_chunk(text.as_str().to_owned()).is_break() {
                    tracing::debug!(frames, "Caller finished, closing");
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }
            }
            Some(Ok(Message::Ping(data))) => {
                let _ = sink.send(Message::Pong(data)).await;
            }
            Some(Ok(Message::Close(_))) | None => {
                tracing::debug!(frames, "Server closed the connection");
                break;
            }
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(TransportError::Closed(e.to_string()).into()),
        }
    }

    Ok(())
}
