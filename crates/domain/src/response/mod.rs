//! HTTP Response domain types

mod spec;

pub use spec::{ResponseSpec, empty_object, parse_body_or_empty};
