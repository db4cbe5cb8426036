//! Pure domain logic for the campaign-brief intake service.
//!
//! No I/O lives here: the option catalog, the brief data model, the
//! conditional validator, the plain-text summary formatter, and the admin
//! statistics are all synchronous functions over plain values so they can
//! be tested without a database or network.

pub mod brief;
pub mod catalog;
pub mod error;
pub mod stats;
pub mod summary;
pub mod validation;
