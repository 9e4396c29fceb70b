//! In-process fan-out of change notifications to live-stream subscribers.
//!
//! Every subscriber owns a bounded queue. Broadcasting never waits on a
//! queue: if a subscriber is behind and its queue is full, that subscriber
//! misses the message and everybody else still gets it.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

/// Default number of pending messages a subscriber may hold.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Identifier of a registered subscriber.
pub type SubscriberId = u64;

/// Registry of live subscribers and their outbound queues.
pub struct EventHub {
    subscribers: RwLock<HashMap<SubscriberId, mpsc::Sender<String>>>,
    queue_capacity: usize,
    next_id: AtomicU64,
}

impl EventHub {
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            queue_capacity: queue_capacity.max(1),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a new subscriber.
    ///
    /// The returned [`Subscription`] unregisters itself when dropped, so a
    /// connection that goes away for any reason leaves the registry.
    pub fn register(self: &Arc<Self>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.queue_capacity);

        let active = {
            let mut subscribers = self.subscribers.write();
            subscribers.insert(id, tx);
            subscribers.len()
        };
        debug!(subscriber_id = id, active, "Subscriber registered");

        Subscription {
            id,
            rx,
            hub: Arc::clone(self),
        }
    }

    /// Remove a subscriber and close its queue.
    ///
    /// Pending messages can still be drained by the receiver, after which it
    /// observes closure. Unknown ids are ignored. Returns whether the id was
    /// registered.
    pub fn unregister(&self, id: SubscriberId) -> bool {
        let (removed, active) = {
            let mut subscribers = self.subscribers.write();
            let removed = subscribers.remove(&id).is_some();
            (removed, subscribers.len())
        };
        if removed {
            debug!(subscriber_id = id, active, "Subscriber unregistered");
        }
        removed
    }

    /// Offer `message` to every active subscriber without waiting.
    ///
    /// Returns how many subscribers accepted it.
    pub fn broadcast(&self, message: &str) -> usize {
        let subscribers = self.subscribers.read();
        let mut delivered = 0;

        for (id, tx) in subscribers.iter() {
            match tx.try_send(message.to_owned()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(subscriber_id = id, "Subscriber queue full, dropping message");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(subscriber_id = id, "Subscriber queue closed, skipping");
                }
            }
        }

        debug!(delivered, total = subscribers.len(), "Broadcast sent");
        delivered
    }

    /// Number of registered subscribers.
    pub fn active_count(&self) -> usize {
        self.subscribers.read().len()
    }

    #[cfg(test)]
    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}

/// One live connection's registration with the hub.
pub struct Subscription {
    id: SubscriberId,
    rx: mpsc::Receiver<String>,
    hub: Arc<EventHub>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next message. Returns `None` once the subscriber has
    /// been unregistered and its queue is drained.
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    #[cfg(test)]
    fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unregister(self.id);
    }
}
