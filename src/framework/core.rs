//! # Core Cache Framework
//!
//! This module defines the generic building blocks for the local cache.
//!
//! ## Key Types
//!
//! - [`RemoteEntity`]: The trait that all cached record types must implement.
//! - [`ResourceActor`]: The generic actor that owns the cached collection.
//! - [`ResourceClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, Validation).
//!
//! ## Completion Ordering
//!
//! The actor never awaits the network inside its loop. Each request that needs I/O is
//! spawned as its own task, and the task's result comes back to the actor as a
//! [`Completion`] on an internal queue. The actor applies completions one at a time,
//! in the order they arrive, against whatever the state is at that moment. Two
//! requests issued A then B may therefore be applied B then A, and a stale response
//! can overwrite a newer one. Nothing is deduplicated or cancelled.

use crate::remote::{RemoteCollection, RemoteError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record type must implement to be cached by a [`ResourceActor`].
///
/// # Architecture Note
/// The actor loop, the client and the mock are written once against this contract.
/// Associated types keep payloads apart: a product cache accepts a `ProductDraft` for
/// creation and nothing else.
///
/// # Provided Methods (Hooks)
/// - [`RemoteEntity::validate_draft`]
/// - [`RemoteEntity::validate`]
///
/// Both run inside the actor before any request is sent. A rejection is reported as
/// [`FrameworkError::Validation`] and never reaches the network. The defaults accept
/// everything.
pub trait RemoteEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The server-assigned identifier.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The payload submitted to create a record (everything but the identifier).
    type Draft: Send + Sync + Debug + Serialize + 'static;

    /// Singular noun used in fallback messages, e.g. `"product"`.
    const NOUN: &'static str;

    /// Plural noun used in fallback messages, e.g. `"products"`.
    const PLURAL: &'static str;

    fn id(&self) -> &Self::Id;

    /// Checks a creation payload.
    fn validate_draft(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }

    /// Checks a full record before it is submitted as a replacement.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// The remote operations the actor performs, used to pick fallback messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// The generic message used when a failure carries no text of its own.
    pub fn fallback_message<T: RemoteEntity>(self) -> String {
        match self {
            Operation::FetchAll => format!("Failed to fetch {}", T::PLURAL),
            Operation::FetchOne => format!("Failed to load {}", T::NOUN),
            Operation::Create => format!("Failed to create {}", T::NOUN),
            Operation::Update => format!("Failed to update {}", T::NOUN),
            Operation::Delete => format!("Failed to delete {}", T::NOUN),
        }
    }
}

// =============================================================================
// 2. STATE, MESSAGES & ERRORS
// =============================================================================

/// The cached collection as seen by consumers.
///
/// Consumers only ever hold copies of this; the actor owns the original.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    /// Records in server order, at most one per identifier.
    pub items: Vec<T>,
    /// True while at least one full fetch is in flight.
    pub loading: bool,
    /// The last failure, as a displayable message.
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T: RemoteEntity> CollectionState<T> {
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors that can occur within the framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// Rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The remote call failed; the payload is the displayable message.
    #[error("{0}")]
    Remote(String),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Intents sent to the actor.
///
/// Each variant maps to one remote operation, plus local bookkeeping requests that
/// never leave the process (`DismissError`, `Snapshot`).
#[derive(Debug)]
pub enum ResourceRequest<T: RemoteEntity> {
    FetchAll {
        respond_to: Response<Vec<T>>,
    },
    FetchOne {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Update {
        record: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DismissError {
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<CollectionState<T>>,
    },
}

/// The result of a spawned request, queued back to the actor for application.
#[derive(Debug)]
pub enum Completion<T: RemoteEntity> {
    Fetched {
        result: Result<Vec<T>, RemoteError>,
        respond_to: Response<Vec<T>>,
    },
    FetchedOne {
        id: T::Id,
        result: Result<Option<T>, RemoteError>,
        respond_to: Response<Option<T>>,
    },
    Created {
        result: Result<T, RemoteError>,
        respond_to: Response<T>,
    },
    Updated {
        id: T::Id,
        result: Result<T, RemoteError>,
        respond_to: Response<T>,
    },
    Deleted {
        id: T::Id,
        result: Result<(), RemoteError>,
        respond_to: Response<()>,
    },
    /// The request task panicked or was cancelled. Its caller sees
    /// [`FrameworkError::ActorDropped`].
    Aborted { op: Operation, error: String },
}

// =============================================================================
// 3. THE GENERIC ACTOR
// =============================================================================

/// The generic actor that owns a cached collection.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the state and both receiving ends:
/// intents from clients and completions from its own request tasks. Because a
/// single loop applies every transition, the state needs no `Mutex`; consumers
/// read published copies through a `watch` channel.
pub struct ResourceActor<T: RemoteEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    completions: mpsc::UnboundedReceiver<Completion<T>>,
    completion_sender: mpsc::UnboundedSender<Completion<T>>,
    remote: Arc<dyn RemoteCollection<T>>,
    state: CollectionState<T>,
    publisher: watch::Sender<CollectionState<T>>,
    in_flight: usize,
    fetches_in_flight: usize,
}

impl<T: RemoteEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        remote: Arc<dyn RemoteCollection<T>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let (publisher, subscriber) = watch::channel(CollectionState::default());
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            remote,
            state: CollectionState::default(),
            publisher,
            in_flight: 0,
            fetches_in_flight: 0,
        };
        let client = ResourceClient::new(sender, subscriber);
        (actor, client)
    }

    /// Runs the actor's event loop.
    ///
    /// The loop ends once every client is dropped and every in-flight request has
    /// been applied.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        let mut accepting = true;
        loop {
            tokio::select! {
                biased;
                Some(done) = self.completions.recv() => {
                    self.in_flight -= 1;
                    self.apply(done, entity_type);
                }
                msg = self.receiver.recv(), if accepting => match msg {
                    Some(msg) => self.dispatch(msg, entity_type),
                    None => accepting = false,
                },
                else => break,
            }
            if !accepting && self.in_flight == 0 {
                break;
            }
        }

        info!(entity_type, size = self.state.len(), "Shutdown");
    }

    /// Spawns the I/O for one request; its completion re-enters the loop later.
    ///
    /// Every spawned request sends exactly one completion, even if it panics.
    fn spawn_request<F>(&mut self, op: Operation, request: F)
    where
        F: Future<Output = Completion<T>> + Send + 'static,
    {
        self.in_flight += 1;
        let completions = self.completion_sender.clone();
        let task = tokio::spawn(request);
        tokio::spawn(async move {
            let done = match task.await {
                Ok(done) => done,
                Err(e) => Completion::Aborted {
                    op,
                    error: e.to_string(),
                },
            };
            let _ = completions.send(done);
        });
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    fn dispatch(&mut self, msg: ResourceRequest<T>, entity_type: &'static str) {
        match msg {
            ResourceRequest::FetchAll { respond_to } => {
                debug!(entity_type, "FetchAll");
                self.fetches_in_flight += 1;
                self.state.loading = true;
                self.state.error = None;
                self.publish();
                let remote = Arc::clone(&self.remote);
                self.spawn_request(Operation::FetchAll, async move {
                    let result = remote.list().await;
                    Completion::Fetched { result, respond_to }
                });
            }
            ResourceRequest::FetchOne { id, respond_to } => {
                debug!(entity_type, %id, "FetchOne");
                let remote = Arc::clone(&self.remote);
                self.spawn_request(Operation::FetchOne, async move {
                    let result = remote.get(&id).await;
                    Completion::FetchedOne {
                        id,
                        result,
                        respond_to,
                    }
                });
            }
            ResourceRequest::Create { draft, respond_to } => {
                debug!(entity_type, ?draft, "Create");
                if let Err(e) = T::validate_draft(&draft) {
                    warn!(entity_type, error = %e, "Create rejected");
                    let _ = respond_to.send(Err(FrameworkError::Validation(e)));
                    return;
                }
                let remote = Arc::clone(&self.remote);
                self.spawn_request(Operation::Create, async move {
                    let result = remote.create(&draft).await;
                    Completion::Created { result, respond_to }
                });
            }
            ResourceRequest::Update { record, respond_to } => {
                let id = record.id().clone();
                debug!(entity_type, %id, ?record, "Update");
                if let Err(e) = record.validate() {
                    warn!(entity_type, %id, error = %e, "Update rejected");
                    let _ = respond_to.send(Err(FrameworkError::Validation(e)));
                    return;
                }
                let remote = Arc::clone(&self.remote);
                self.spawn_request(Operation::Update, async move {
                    let result = remote.replace(&id, &record).await;
                    Completion::Updated {
                        id,
                        result,
                        respond_to,
                    }
                });
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                self.state.error = None;
                self.publish();
                let remote = Arc::clone(&self.remote);
                self.spawn_request(Operation::Delete, async move {
                    let result = remote.delete(&id).await;
                    Completion::Deleted {
                        id,
                        result,
                        respond_to,
                    }
                });
            }
            ResourceRequest::DismissError { respond_to } => {
                self.state.error = None;
                self.publish();
                let _ = respond_to.send(Ok(()));
            }
            ResourceRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.state.clone()));
            }
        }
    }

    /// Records a failure in the state and converts it for the caller.
    fn fail(&mut self, op: Operation, error: RemoteError) -> FrameworkError {
        let message = error.user_message(&op.fallback_message::<T>());
        self.state.error = Some(message.clone());
        FrameworkError::Remote(message)
    }

    /// Replaces the cached record with `id` by `record`. Never inserts.
    fn replace_cached(&mut self, id: &T::Id, record: T) -> bool {
        match self.state.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, done: Completion<T>, entity_type: &'static str) {
        match done {
            Completion::Fetched { result, respond_to } => {
                self.fetches_in_flight -= 1;
                self.state.loading = self.fetches_in_flight > 0;
                let reply = match result {
                    Ok(items) => {
                        let items = dedup_by_id(items, entity_type);
                        self.state.items = items.clone();
                        self.state.error = None;
                        info!(entity_type, size = self.state.len(), "Fetched");
                        Ok(items)
                    }
                    Err(e) => {
                        warn!(entity_type, error = %e, "Fetch failed");
                        Err(self.fail(Operation::FetchAll, e))
                    }
                };
                self.publish();
                let _ = respond_to.send(reply);
            }
            Completion::FetchedOne {
                id,
                result,
                respond_to,
            } => {
                let reply = match result {
                    Ok(Some(record)) => {
                        let cached = self.replace_cached(&id, record.clone());
                        debug!(entity_type, %id, cached, "Fetched one");
                        Ok(Some(record))
                    }
                    Ok(None) => {
                        info!(entity_type, %id, "Not found");
                        Ok(None)
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Fetch one failed");
                        Err(self.fail(Operation::FetchOne, e))
                    }
                };
                self.publish();
                let _ = respond_to.send(reply);
            }
            Completion::Created { result, respond_to } => {
                let reply = match result {
                    Ok(record) => {
                        info!(entity_type, id = %record.id(), "Created");
                        Ok(record)
                    }
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let err = self.fail(Operation::Create, e);
                        self.publish();
                        Err(err)
                    }
                };
                let _ = respond_to.send(reply);
            }
            Completion::Updated {
                id,
                result,
                respond_to,
            } => {
                let reply = match result {
                    Ok(record) => {
                        let cached = self.replace_cached(&id, record.clone());
                        info!(entity_type, %id, cached, "Updated");
                        Ok(record)
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        Err(self.fail(Operation::Update, e))
                    }
                };
                self.publish();
                let _ = respond_to.send(reply);
            }
            Completion::Deleted {
                id,
                result,
                respond_to,
            } => {
                let reply = match result {
                    Ok(()) => {
                        self.state.items.retain(|item| item.id() != &id);
                        info!(entity_type, %id, size = self.state.len(), "Deleted");
                        Ok(())
                    }
                    Err(e) => {
                        warn!(entity_type, %id, error = %e, "Delete failed");
                        Err(self.fail(Operation::Delete, e))
                    }
                };
                self.publish();
                let _ = respond_to.send(reply);
            }
            Completion::Aborted { op, error } => {
                warn!(entity_type, ?op, %error, "Request aborted");
                if op == Operation::FetchAll {
                    self.fetches_in_flight -= 1;
                    self.state.loading = self.fetches_in_flight > 0;
                }
                self.state.error = Some(op.fallback_message::<T>());
                self.publish();
            }
        }
    }
}

/// Keeps the first record for each identifier.
fn dedup_by_id<T: RemoteEntity>(items: Vec<T>, entity_type: &'static str) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let total = items.len();
    let unique: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(item.id().clone()))
        .collect();
    if unique.len() != total {
        warn!(
            entity_type,
            dropped = total - unique.len(),
            "Server returned duplicate identifiers"
        );
    }
    unique
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
///
/// Cheap to clone: it holds the intent sender and a state subscription.
#[derive(Clone)]
pub struct ResourceClient<T: RemoteEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    state: watch::Receiver<CollectionState<T>>,
}

impl<T: RemoteEntity> ResourceClient<T> {
    pub fn new(
        sender: mpsc::Sender<ResourceRequest<T>>,
        state: watch::Receiver<CollectionState<T>>,
    ) -> Self {
        Self { sender, state }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FetchAll { respond_to })
            .await
    }

    pub async fn fetch_one(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FetchOne { id, respond_to })
            .await
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { draft, respond_to })
            .await
    }

    pub async fn update(&self, record: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { record, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn dismiss_error(&self) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::DismissError { respond_to })
            .await
    }

    /// Asks the actor for its state, ordered after every request sent before it.
    pub async fn snapshot(&self) -> Result<CollectionState<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    /// The most recently published state, without a round trip.
    pub fn current(&self) -> CollectionState<T> {
        self.state.borrow().clone()
    }

    /// A receiver that wakes on every published transition.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.state.clone()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockRemote;
    use serde::Deserialize;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug, Serialize)]
    struct NoteDraft {
        text: String,
    }

    impl RemoteEntity for Note {
        type Id = u32;
        type Draft = NoteDraft;
        const NOUN: &'static str = "note";
        const PLURAL: &'static str = "notes";

        fn id(&self) -> &u32 {
            &self.id
        }

        fn validate_draft(draft: &NoteDraft) -> Result<(), String> {
            if draft.text.is_empty() {
                return Err("Text is required".into());
            }
            Ok(())
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.into(),
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let mut mock = MockRemote::<Note>::new();
        mock.expect_list()
            .return_ok(vec![note(1, "first"), note(2, "second")]);
        mock.expect_create().return_ok(note(3, "third"));
        mock.expect_replace(2).return_ok(note(2, "SECOND"));
        mock.expect_delete(1).return_ok(());

        let (actor, client) = ResourceActor::new(10, mock.remote());
        let handle = tokio::spawn(actor.run());

        // 1. Fetch
        let items = client.fetch_all().await.unwrap();
        assert_eq!(items.len(), 2);

        // 2. Create does not insert
        let created = client
            .create(NoteDraft {
                text: "third".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert!(!client.snapshot().await.unwrap().contains(&3));

        // 3. Update applies the server's version
        client.update(note(2, "second")).await.unwrap();
        let state = client.snapshot().await.unwrap();
        assert_eq!(state.get(&2).unwrap().text, "SECOND");

        // 4. Delete
        client.delete(1).await.unwrap();
        let state = client.snapshot().await.unwrap();
        assert_eq!(state.items, vec![note(2, "SECOND")]);
        assert_eq!(client.current(), state);

        mock.verify();
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_remote() {
        let mock = MockRemote::<Note>::new();
        let (actor, client) = ResourceActor::new(10, mock.remote());
        tokio::spawn(actor.run());

        let result = client.create(NoteDraft { text: String::new() }).await;
        assert_eq!(
            result,
            Err(FrameworkError::Validation("Text is required".into()))
        );
        assert!(mock.calls().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_message() {
        let mut mock = MockRemote::<Note>::new();
        mock.expect_list()
            .return_err(RemoteError::Transport(String::new()));

        let (actor, client) = ResourceActor::new(10, mock.remote());
        tokio::spawn(actor.run());

        let result = client.fetch_all().await;
        assert_eq!(
            result,
            Err(FrameworkError::Remote("Failed to fetch notes".into()))
        );
        let state = client.snapshot().await.unwrap();
        assert_eq!(state.error.as_deref(), Some("Failed to fetch notes"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_duplicate_identifiers_keep_first() {
        let mut mock = MockRemote::<Note>::new();
        mock.expect_list()
            .return_ok(vec![note(1, "a"), note(2, "b"), note(1, "c")]);

        let (actor, client) = ResourceActor::new(10, mock.remote());
        tokio::spawn(actor.run());

        let items = client.fetch_all().await.unwrap();
        assert_eq!(items, vec![note(1, "a"), note(2, "b")]);
    }

    /// Answers every list with a panic.
    struct PanickingRemote;

    #[async_trait::async_trait]
    impl RemoteCollection<Note> for PanickingRemote {
        async fn list(&self) -> Result<Vec<Note>, RemoteError> {
            panic!("list exploded");
        }

        async fn get(&self, _id: &u32) -> Result<Option<Note>, RemoteError> {
            Ok(None)
        }

        async fn create(&self, _draft: &NoteDraft) -> Result<Note, RemoteError> {
            Err(RemoteError::Transport("unused".into()))
        }

        async fn replace(&self, _id: &u32, record: &Note) -> Result<Note, RemoteError> {
            Ok(record.clone())
        }

        async fn delete(&self, _id: &u32) -> Result<(), RemoteError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_panicking_request_releases_its_slot() {
        let (actor, client) = ResourceActor::new(10, Arc::new(PanickingRemote));
        let handle = tokio::spawn(actor.run());
        let mut updates = client.subscribe();

        let result = client.fetch_all().await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));

        let state = updates
            .wait_for(|state| !state.loading && state.error.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(state.error.as_deref(), Some("Failed to fetch notes"));
        assert_eq!(client.fetch_one(7).await, Ok(None));

        drop(client);
        tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("actor did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_drop() {
        let mock = MockRemote::<Note>::new();
        let (actor, client) = ResourceActor::new(10, mock.remote());
        let handle = tokio::spawn(actor.run());

        drop(client);
        handle.await.unwrap();
    }
}
