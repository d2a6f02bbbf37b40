mod app;
mod camera;
mod canvas;
mod config;
mod detector;
mod hooks;
mod logging;
mod platform;

pub use app::App;
pub use logging::init as init_logging;
