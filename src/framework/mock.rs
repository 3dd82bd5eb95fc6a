//! # Mock Remote & Testing Guide
//!
//! [`MockRemote<T>`] implements [`RemoteCollection<T>`] entirely in memory. You queue
//! expectations with canned responses, hand [`MockRemote::remote`] to a
//! [`ResourceActor`](crate::framework::ResourceActor), and assert on what the actor did.
//!
//! ## When to use the Mock vs a Real Server
//!
//! | Feature | MockRemote | HTTP stub server |
//! |---------|------------|------------------|
//! | **Speed** | Instant (in-memory) | Fast (binds a socket) |
//! | **Determinism** | Responses held and released by the test | Subject to the scheduler |
//! | **Payload checks** | Every `replace` body is recorded | Inspect server state |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing route |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 1: Store with a scripted remote</b></summary>
//!
//! ```rust
//! use catalog_sync::framework::mock::MockRemote;
//! use catalog_sync::framework::ResourceActor;
//! use catalog_sync::model::Product;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRemote::<Product>::new();
//!     mock.expect_list().return_ok(vec![Product::new(1, "Lamp", 2)]);
//!
//!     let (actor, client) = ResourceActor::new(10, mock.remote());
//!     tokio::spawn(actor.run());
//!
//!     let items = client.fetch_all().await.unwrap();
//!     assert_eq!(items.len(), 1);
//!     mock.verify();
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Controlling completion order</b></summary>
//!
//! A held expectation does not answer until the test releases it, which lets a test
//! deliver responses in a different order than the requests were issued.
//!
//! ```rust
//! use catalog_sync::framework::mock::MockRemote;
//! use catalog_sync::framework::ResourceActor;
//! use catalog_sync::model::Product;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRemote::<Product>::new();
//!     let release = mock.expect_list().return_ok_held(vec![]);
//!
//!     let (actor, client) = ResourceActor::new(10, mock.remote());
//!     tokio::spawn(actor.run());
//!
//!     let pending = tokio::spawn({
//!         let client = client.clone();
//!         async move { client.fetch_all().await }
//!     });
//!     mock.wait_for_calls(1).await;
//!     assert!(client.snapshot().await.unwrap().loading);
//!
//!     release.release();
//!     pending.await.unwrap().unwrap();
//!     assert!(!client.snapshot().await.unwrap().loading);
//! }
//! ```
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use catalog_sync::framework::mock::MockRemote;
//! use catalog_sync::model::{Product, ProductId};
//! use catalog_sync::remote::{RemoteCollection, RemoteError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockRemote::<Product>::new();
//!     mock.expect_delete(ProductId::from(1))
//!         .return_err(RemoteError::from_status(500, r#"{"message":"locked"}"#));
//!
//!     let result = mock.delete(&ProductId::from(1)).await;
//!     assert!(matches!(result, Err(RemoteError::Status { status: 500, .. })));
//! }
//! ```

use crate::framework::RemoteEntity;
use crate::remote::{RemoteCollection, RemoteError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A request observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call<Id> {
    List,
    Get(Id),
    Create,
    Replace(Id),
    Delete(Id),
}

/// The canned response of one expectation.
enum Reply<T: RemoteEntity> {
    List(Result<Vec<T>, RemoteError>),
    Get(Result<Option<T>, RemoteError>),
    Create(Result<T, RemoteError>),
    Replace(Result<T, RemoteError>),
    Delete(Result<(), RemoteError>),
}

/// An expected request and what to answer.
struct Expectation<T: RemoteEntity> {
    call: Call<T::Id>,
    reply: Reply<T>,
    gate: Option<oneshot::Receiver<()>>,
}

struct MockState<T: RemoteEntity> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<Call<T::Id>>,
    replacements: Vec<T>,
    created: Vec<serde_json::Value>,
    unexpected: Vec<String>,
}

/// A scripted remote collection for tests.
///
/// # Example
/// ```ignore
/// let mut mock = MockRemote::<Product>::new();
/// mock.expect_get(ProductId::from(1)).return_ok(Some(product));
/// mock.expect_replace(ProductId::from(1)).return_ok(updated);
///
/// let (actor, client) = ResourceActor::new(10, mock.remote());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
///
/// Requests are matched against the first queued expectation of the same kind and
/// identifier, so expectations for different records may be queued in any order.
pub struct MockRemote<T: RemoteEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: RemoteEntity> Clone for MockRemote<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: RemoteEntity> Default for MockRemote<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockRemote<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                expectations: VecDeque::new(),
                calls: Vec::new(),
                replacements: Vec::new(),
                created: Vec::new(),
                unexpected: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the mock as a shareable remote for an actor.
    pub fn remote(&self) -> Arc<dyn RemoteCollection<T>> {
        Arc::new(self.clone())
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self, Call::List, Reply::List)
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self, Call::Get(id), Reply::Get)
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self, Call::Create, Reply::Create)
    }

    /// Expects a `replace` request for `id`.
    pub fn expect_replace(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self, Call::Replace(id), Reply::Replace)
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self, Call::Delete(id), Reply::Delete)
    }

    /// Every request received so far.
    pub fn calls(&self) -> Vec<Call<T::Id>> {
        self.lock().calls.clone()
    }

    /// The bodies of every `replace` request, in arrival order.
    pub fn replacements(&self) -> Vec<T> {
        self.lock().replacements.clone()
    }

    /// The bodies of every `create` request, as JSON.
    pub fn created(&self) -> Vec<serde_json::Value> {
        self.lock().created.clone()
    }

    /// Waits until at least `count` requests have arrived.
    ///
    /// # Panics
    /// Panics after five seconds, which in a test means the request never came.
    pub async fn wait_for_calls(&self, count: usize) {
        let waiting = async {
            while self.lock().calls.len() < count {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        };
        if tokio::time::timeout(Duration::from_secs(5), waiting)
            .await
            .is_err()
        {
            panic!("Timed out waiting for {count} remote calls");
        }
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    ///
    /// # Panics
    /// Panics with the list of problems otherwise.
    pub fn verify(&self) {
        let state = self.lock();
        if !state.unexpected.is_empty() {
            panic!("Unexpected remote requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<_> = state.expectations.iter().map(|e| &e.call).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }

    /// Records `call` and takes the matching expectation, if any.
    fn take(
        &self,
        call: Call<T::Id>,
    ) -> Result<(Reply<T>, Option<oneshot::Receiver<()>>), RemoteError> {
        let mut state = self.lock();
        state.calls.push(call.clone());
        let index = state.expectations.iter().position(|e| e.call == call);
        match index.and_then(|index| state.expectations.remove(index)) {
            Some(expectation) => Ok((expectation.reply, expectation.gate)),
            None => {
                let description = format!("{call:?}");
                state.unexpected.push(description.clone());
                Err(RemoteError::Transport(format!("unexpected request {description}")))
            }
        }
    }

    async fn answer(&self, call: Call<T::Id>) -> Result<Reply<T>, RemoteError> {
        let (reply, gate) = self.take(call)?;
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(reply)
    }
}

fn mismatch<R>() -> Result<R, RemoteError> {
    Err(RemoteError::Transport("mock reply kind mismatch".into()))
}

#[async_trait]
impl<T: RemoteEntity> RemoteCollection<T> for MockRemote<T> {
    async fn list(&self) -> Result<Vec<T>, RemoteError> {
        match self.answer(Call::List).await? {
            Reply::List(result) => result,
            _ => mismatch(),
        }
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>, RemoteError> {
        match self.answer(Call::Get(id.clone())).await? {
            Reply::Get(result) => result,
            _ => mismatch(),
        }
    }

    async fn create(&self, draft: &T::Draft) -> Result<T, RemoteError> {
        if let Ok(body) = serde_json::to_value(draft) {
            self.lock().created.push(body);
        }
        match self.answer(Call::Create).await? {
            Reply::Create(result) => result,
            _ => mismatch(),
        }
    }

    async fn replace(&self, id: &T::Id, record: &T) -> Result<T, RemoteError> {
        self.lock().replacements.push(record.clone());
        match self.answer(Call::Replace(id.clone())).await? {
            Reply::Replace(result) => result,
            _ => mismatch(),
        }
    }

    async fn delete(&self, id: &T::Id) -> Result<(), RemoteError> {
        match self.answer(Call::Delete(id.clone())).await? {
            Reply::Delete(result) => result,
            _ => mismatch(),
        }
    }
}

/// Releases a held response.
#[derive(Debug)]
pub struct Release(oneshot::Sender<()>);

impl Release {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

/// Builder for one expectation. Finish it with `return_ok`, `return_err` or
/// `return_ok_held`.
pub struct ExpectationBuilder<T: RemoteEntity, R> {
    state: Arc<Mutex<MockState<T>>>,
    call: Call<T::Id>,
    wrap: fn(Result<R, RemoteError>) -> Reply<T>,
    _reply: PhantomData<R>,
}

impl<T: RemoteEntity, R> ExpectationBuilder<T, R> {
    fn new(
        mock: &MockRemote<T>,
        call: Call<T::Id>,
        wrap: fn(Result<R, RemoteError>) -> Reply<T>,
    ) -> Self {
        Self {
            state: Arc::clone(&mock.state),
            call,
            wrap,
            _reply: PhantomData,
        }
    }

    fn push(self, response: Result<R, RemoteError>, gate: Option<oneshot::Receiver<()>>) {
        let expectation = Expectation {
            call: self.call,
            reply: (self.wrap)(response),
            gate,
        };
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .expectations
            .push_back(expectation);
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value), None);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        self.push(Err(error), None);
    }

    /// Like [`return_ok`](Self::return_ok), but the response is held until the
    /// returned [`Release`] is released (or dropped).
    pub fn return_ok_held(self, value: R) -> Release {
        let (release, gate) = oneshot::channel();
        self.push(Ok(value), Some(gate));
        Release(release)
    }

    /// Like [`return_err`](Self::return_err), but held until released.
    pub fn return_err_held(self, error: RemoteError) -> Release {
        let (release, gate) = oneshot::channel();
        self.push(Err(error), Some(gate));
        Release(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    #[tokio::test]
    async fn test_mock_remote_with_expectations() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_get(ProductId::from(1))
            .return_ok(Some(Product::new(1, "Lamp", 1)));
        mock.expect_replace(ProductId::from(1))
            .return_ok(Product::new(1, "LAMP", 1));

        let fetched = mock.get(&ProductId::from(1)).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Lamp");

        let replaced = mock
            .replace(&ProductId::from(1), &Product::new(1, "lamp", 1))
            .await
            .unwrap();
        assert_eq!(replaced.name, "LAMP");
        assert_eq!(mock.replacements()[0].name, "lamp");
        assert_eq!(
            mock.calls(),
            vec![Call::Get(ProductId::from(1)), Call::Replace(ProductId::from(1))]
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_an_error() {
        let mock = MockRemote::<Product>::new();
        let result = mock.list().await;
        assert!(matches!(result, Err(RemoteError::Transport(_))));
        assert_eq!(mock.calls(), vec![Call::List]);
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_held_response_waits_for_release() {
        let mut mock = MockRemote::<Product>::new();
        let release = mock.expect_list().return_ok_held(vec![Product::new(1, "Lamp", 1)]);

        let pending = tokio::spawn({
            let mock = mock.clone();
            async move { mock.list().await }
        });
        mock.wait_for_calls(1).await;
        assert!(!pending.is_finished());

        release.release();
        let items = pending.await.unwrap().unwrap();
        assert_eq!(items.len(), 1);
    }
}
