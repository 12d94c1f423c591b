//! Policy evaluation and policy rule management.
//!
//! Evaluation is done by the server. [`Client::enforce`](crate::Client::enforce)
//! and [`Client::batch_enforce`](crate::Client::batch_enforce) only forward
//! requests and read back the decisions.

pub mod enforce;
pub mod rules;

pub use enforce::{CasbinRequest, EnforceTarget};
pub use rules::CasbinRule;
