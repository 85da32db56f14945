// Library exports for testing
pub mod colors;
pub mod config;
pub mod constants;
pub mod density;
pub mod descriptor;
pub mod icon;
pub mod setup;
