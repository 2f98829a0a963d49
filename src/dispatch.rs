#[path = "dispatch/config.rs"]
mod config;

#[path = "dispatch/dispatcher.rs"]
mod dispatcher;

pub use config::DispatchConfig;
pub use dispatcher::ResilientDispatcher;
