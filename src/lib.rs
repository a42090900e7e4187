pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod state;

pub use controller::{ModalController, ModalView};
pub use error::{ModalError, ModalResult};
pub use state::{DisplayRequest, InteractionOrigin, Visibility};

/// Logging and panic reporting to the browser console.
pub fn init_console() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
