//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of an actor. Use it to test logic *around* a client (the
//! fulfillment workflow, the request actor's `on_create` check) without spawning the actors
//! it depends on.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, scripted replies | Real collection |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires arranging state |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic (pure mock)**: wrap `mock.client()` in a typed client and assert on the
//!    mapped results.
//! 2. **Single actor**: spawn one `ResourceActor` with `()` context.
//! 3. **Actor with mocked dependencies**: spawn the real request actor with a mocked
//!    inventory client as context (see `crates/stockroom/tests/request_actor_test.rs`).
//! 4. **Full system**: `StockroomSystem` with all actors (see
//!    `crates/stockroom/tests/integration_test.rs`).
//!
//! ```rust,ignore
//! let mut inventory = MockClient::<InventoryItem>::new();
//! inventory.expect_get(ItemId(1)).return_ok(Some(item));
//!
//! let client = InventoryClient::new(inventory.client());
//! assert_eq!(client.get(ItemId(1)).await?.quantity, 5);
//! inventory.verify();
//! ```
//!
//! Expectations are consumed in order; a request that does not match the next expectation
//! panics the mock task and the caller sees `FrameworkError::ActorDropped`.
//!
//! ## Low-level helpers
//!
//! [`create_mock_client`] returns a client plus the raw receiver, and [`expect_create`],
//! [`expect_get`], [`expect_action`] pull the next request off it so the test can reply by
//! hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn assert_id<I: PartialEq + std::fmt::Debug>(op: &str, expected: &I, actual: &I) {
    assert_eq!(expected, actual, "{op} called with unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the replies are produced by a spawned task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_id("get", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: want, response })) => {
                        assert_id("update", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response })) => {
                        assert_id("delete", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: want, response })) => {
                        assert_id("action", &want, &id);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that queues one expectation once its reply is chosen.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R: 'static> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests with the `expect_*` helpers below, inspects
/// them, and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Book {
        id: u32,
        title: String,
    }

    #[derive(Debug)]
    struct BookCreate {
        title: String,
    }

    #[derive(Debug)]
    struct BookUpdate;

    #[derive(Debug)]
    enum BookAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Book error")]
    struct BookError;

    #[async_trait]
    impl ActorEntity for Book {
        type Id = u32;
        type Create = BookCreate;
        type Update = BookUpdate;
        type Action = BookAction;
        type ActionResult = ();
        type Context = ();
        type Error = BookError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: BookCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                title: params.title,
            })
        }

        async fn on_update(&mut self, _update: BookUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: BookAction, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn book(id: u32, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Book>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(BookCreate {
                    title: "Atlas".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.title, "Atlas");
        responder.send(Ok(book(1, "Atlas"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), book(1, "Atlas"));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Book>::new();

        mock.expect_create().return_ok(book(1, "Atlas"));
        mock.expect_list().return_ok(vec![book(1, "Atlas")]);
        mock.expect_delete(1).return_ok(());
        mock.expect_get(1).return_ok(None);

        let client = mock.client();

        let created = client
            .create(BookCreate {
                title: "Atlas".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
        client.delete(1).await.unwrap();
        assert!(client.get(1).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_error_injection() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_update(3)
            .return_err(FrameworkError::NotFound("3".into()));

        let result = mock.client().update(3, BookUpdate).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "3"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Book>::new();
        mock.expect_list().return_ok(vec![]);

        let result = mock.client().get(1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
