mod gallery;
mod photo_modal;

pub use gallery::Gallery;
pub use photo_modal::{PhotoModal, SignalModalView};
