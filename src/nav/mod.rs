//! Page navigation: the tour graph and the controller that walks it.

mod controller;
mod graph;

pub use controller::{NavEvent, NavOutcome, NavTimings, Navigator, PageRequest};
pub use graph::{Edge, TourGraph};
