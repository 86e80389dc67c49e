pub mod compute;
pub mod proxy;
