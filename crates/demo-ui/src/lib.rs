pub mod controller;
pub mod input;
pub mod panels;
pub mod render;
