pub mod decision;
pub mod handler;

pub use decision::{Decision, RatioPolicy};
pub use handler::RatioGuard;
