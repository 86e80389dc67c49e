pub mod page;
pub mod message;
pub mod proxy;
pub mod event;
pub mod config;
pub mod error;


pub use error::DemoError;
pub type Result<T> = std::result::Result<T, DemoError>;
