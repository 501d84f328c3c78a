//! # ActorClient Trait
//!
//! Common interface for resource-specific clients. Implementors supply the inner
//! `ResourceClient` and the error mapping; the trait provides `get`, `list` and `delete`
//! with the stockroom service semantics (a missing record is an error, not an `Option`).
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Acknowledgment returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted<I> {
    pub id: I,
}

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<User> for UserClient {
///     type Error = UserError;
///
///     fn inner(&self) -> &ResourceClient<User> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         UserError::ActorCommunicationError(e.to_string())
///     }
///
///     fn not_found(id: &UserId) -> Self::Error {
///         UserError::NotFound(id.to_string())
///     }
/// }
///
/// // get(), list() and delete() are provided automatically.
/// let user = client.get(UserId(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The error reported when `id` is absent from the collection.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Fetch an entity by ID. Fails with [`ActorClient::not_found`] if absent.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Self::not_found(&id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Snapshot of the whole collection in collection order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<Deleted<T::Id>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .delete(id.clone())
            .await
            .map(|()| Deleted { id })
            .map_err(Self::map_error)
    }
}
