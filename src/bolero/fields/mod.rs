//! # Search Field State
//!
//! The mutable state behind a search form, kept apart from any UI framework:
//!
//! - **Fixed values** ([`FixedValues`]): the always-present named filters of an
//!   entity (title, publisher, year...). Keys never change after initialisation.
//! - **Dynamic rows** ([`FieldRows`]): an ordered, growable list of ad-hoc
//!   `(key, value)` filters whose keys come from the entity's catalog.
//! - **Availability** ([`available_choices`]): which catalog fields a given row
//!   may still pick, so that no two rows end up sharing a key.
//!
//! All of this is owned by the caller. Mutations happen through `&mut`
//! methods; a rendering layer re-reads the state after each call.
//!
//! Row indexes are checked: every index-taking operation returns
//! [`SearchError::RowOutOfRange`](crate::error::SearchError::RowOutOfRange)
//! instead of silently doing nothing.

mod availability;
mod fixed;
mod rows;

pub use availability::available_choices;
pub use fixed::FixedValues;
pub use rows::{FieldRow, FieldRows};
