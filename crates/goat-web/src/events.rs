//! Live-update stream (`GET /events`).
//!
//! Each connection registers with the [`EventHub`](crate::hub::EventHub),
//! sends a `connected` record, then forwards every broadcast as a
//! `data: <payload>` record until the peer goes away or the server shuts
//! down. Dropping the stream (peer disconnect) drops the subscription,
//! which unregisters it.

use axum::{
    extract::State,
    http::header,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use futures::stream::{self, Stream, StreamExt};
use std::convert::Infallible;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::hub::Subscription;
use crate::state::AppState;

/// Payload of the first record on every stream.
pub const CONNECTED_EVENT: &str = "connected";

/// SSE handler.
pub async fn live_stream(State(state): State<AppState>) -> impl IntoResponse {
    let subscription = state.hub.register();
    info!(
        subscriber_id = subscription.id(),
        active = state.hub.active_count(),
        "Live stream opened"
    );

    let sse = Sse::new(record_stream(subscription, state.shutdown.child_token()));
    if let Some(interval) = state.keep_alive {
        let sse = sse.keep_alive(KeepAlive::new().interval(interval));
        return ([(header::CONNECTION, "keep-alive")], sse).into_response();
    }

    ([(header::CONNECTION, "keep-alive")], sse).into_response()
}

/// The initial `connected` record followed by one record per hub message.
///
/// Ends when `cancel` fires or the subscription's queue is closed.
pub fn record_stream(
    subscription: Subscription,
    cancel: CancellationToken,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let connected = stream::once(async { Ok(Event::default().data(CONNECTED_EVENT)) });

    let updates = stream::unfold((subscription, cancel), |(mut subscription, cancel)| async move {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            message = subscription.recv() => message,
        };

        match next {
            Some(message) => Some((Ok(Event::default().data(message)), (subscription, cancel))),
            None => {
                info!(subscriber_id = subscription.id(), "Live stream closed");
                None
            }
        }
    });

    connected.chain(updates)
}
