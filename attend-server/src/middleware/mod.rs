//! HTTP middleware

pub mod logging;
pub mod page_gate;

pub use logging::logging_middleware;
pub use page_gate::page_gate;
