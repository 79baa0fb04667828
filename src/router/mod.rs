//! Next-Step Router (C7, §4.7): maps a [`crate::model::StateSnapshot`]
//! to a routable next-step category.

mod route;

pub use route::{route, RoutedStep, SAFETY_NET_COPY};
