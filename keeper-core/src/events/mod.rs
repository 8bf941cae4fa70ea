//! Synchronous progress events emitted by the engines.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::KeeperEventHandler;
