pub mod config;
pub mod logging;

// Pipeline stages, in processing order.
pub mod error;
pub mod source;
pub mod fetch;
pub mod extract;
pub mod persist;
pub mod output;
pub mod progress;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod test_support;
