//! Minimal WebSocket client for subscribing to the hub's snapshot push stream.

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};
use url::Url;

use crate::error::TransportError;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub fn parse_hub_url(url: &str) -> Result<Url, TransportError> {
    let parsed = Url::parse(url).map_err(|source| TransportError::Url {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "ws" | "wss" => Ok(parsed),
        other => Err(TransportError::Scheme(other.to_string())),
    }
}

// Connect to the hub and return the WS stream
pub async fn connect(url: &str) -> Result<WsStream, TransportError> {
    let parsed = parse_hub_url(url)?;
    let (ws, _) = connect_async(parsed.as_str())
        .await
        .map_err(TransportError::Connect)?;
    info!(url = %parsed, "connected to hub");
    Ok(ws)
}

/// Wait for the next pushed payload. `None` once the hub closes the stream.
pub async fn next_payload(ws: &mut WsStream) -> Result<Option<String>, TransportError> {
    while let Some(msg) = ws.next().await {
        match msg.map_err(TransportError::Stream)? {
            Message::Text(text) => return Ok(Some(text)),
            Message::Binary(bytes) => match String::from_utf8(bytes) {
                Ok(text) => return Ok(Some(text)),
                Err(_) => debug!("skipping non-utf8 binary frame"),
            },
            Message::Close(_) => return Ok(None),
            // pings are answered by tungstenite itself
            _ => {}
        }
    }
    Ok(None)
}
