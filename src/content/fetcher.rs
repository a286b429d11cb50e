//! One-shot message fetch for a session.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::message::AffectionMessage;
use super::store::ContentStore;

/// Name of the collection holding the greeting's messages
pub const DEFAULT_COLLECTION: &str = "affectionmessages";

/// Published result of the session's fetch.
///
/// Starts out loading; the fetcher replaces it exactly once with a loaded
/// feed. The message slice is shared and never mutated after publication.
#[derive(Debug, Clone)]
pub struct MessageFeed {
    loading: bool,
    messages: Arc<[AffectionMessage]>,
}

impl MessageFeed {
    /// Feed before the fetch has finished
    pub fn pending() -> Self {
        Self {
            loading: true,
            messages: Arc::from(Vec::new()),
        }
    }

    /// Loaded feed. Orders the records ascending by display order, keeping
    /// fetch order among equal keys.
    pub fn loaded(mut messages: Vec<AffectionMessage>) -> Self {
        messages.sort_by_key(AffectionMessage::sort_key);
        Self {
            loading: false,
            messages: Arc::from(messages),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn messages(&self) -> &[AffectionMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageFeed {
    fn default() -> Self {
        Self::pending()
    }
}

/// Fetch the collection once and build the feed.
///
/// A failed fetch is logged and published as an empty, loaded feed so the
/// flow never waits on the store.
pub async fn load_feed(store: &dyn ContentStore, collection: &str) -> MessageFeed {
    match store.fetch_all(collection).await {
        Ok(messages) => {
            tracing::info!(
                store = %store.describe(),
                collection,
                count = messages.len(),
                "Loaded messages"
            );
            MessageFeed::loaded(messages)
        }
        Err(e) => {
            tracing::error!(
                store = %store.describe(),
                collection,
                error = %e,
                "Error loading messages"
            );
            MessageFeed::loaded(Vec::new())
        }
    }
}

/// Run [`load_feed`] in the background and post the feed to `tx`.
pub fn spawn_fetch<E>(
    store: Arc<dyn ContentStore>,
    collection: String,
    tx: mpsc::UnboundedSender<E>,
) -> JoinHandle<()>
where
    E: From<MessageFeed> + Send + 'static,
{
    tokio::spawn(async move {
        let feed = load_feed(store.as_ref(), &collection).await;
        if tx.send(E::from(feed)).is_err() {
            tracing::debug!("Feed receiver dropped before messages arrived");
        }
    })
}
