//! Read models over collection snapshots: filtering and sorting for the inventory and
//! request lists, the reports summary and the dashboard snapshot.
//!
//! Everything here is a pure function of the records passed in. Callers fetch snapshots
//! through the clients and hand them over; nothing is cached.

pub mod dashboard;
pub mod filters;
pub mod reports;

pub use dashboard::*;
pub use filters::*;
pub use reports::*;
