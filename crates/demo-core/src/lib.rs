//! Core of the WASM demo: the backend loading handshake and everything that
//! only talks to the page through port traits.

pub mod ports;
pub mod backend;
pub mod display;
pub mod edge;
pub mod number;
