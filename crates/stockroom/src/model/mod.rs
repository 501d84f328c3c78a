//! Records managed by the stockroom actors, with their create and patch payloads.

pub mod item;
pub mod request;
pub mod user;

pub use item::*;
pub use request::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Reads a present field into `Some`, so an explicit `null` becomes `Some(None)` and an
/// absent field stays `None` through `#[serde(default)]`.
fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
