pub mod client;
pub mod poller;

pub use client::{Invocation, RuntimeClient};
pub use poller::Poller;
