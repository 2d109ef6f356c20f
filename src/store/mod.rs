//! The observable handle the rendering layer holds.
//!
//! A [`ListStore`] wraps a [`ListState`](crate::ListState), exposes the same
//! operations and tells subscribers whenever one of them changed something.

mod store;

pub use store::{ListStore, Subscription};
