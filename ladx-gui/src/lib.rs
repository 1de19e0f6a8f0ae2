pub mod config;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod region;
pub mod route;
pub mod screen;
pub mod services;
pub mod session;
pub mod storage;
pub mod validation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
