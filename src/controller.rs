use crate::state::{DisplayRequest, InteractionOrigin, Visibility};

/// The surface a `ModalController` drives.
///
/// Implementations hold the four page elements (or their reactive stand-ins)
/// and own the visibility marker, which is the only record of whether the
/// modal is shown.
pub trait ModalView {
    fn set_image_source(&self, src: &str);
    fn set_title(&self, text: &str);
    fn set_description(&self, text: &str);
    fn set_shown(&self, shown: bool);
    fn is_shown(&self) -> bool;
}

/// Show/hide logic for a single modal overlay.
#[derive(Clone, Copy, Debug)]
pub struct ModalController<V: ModalView> {
    view: V,
}

impl<V: ModalView> ModalController<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Replace the displayed content and show the overlay.
    pub fn open(&self, request: DisplayRequest) {
        log::debug!("modal open: {}", request.image_source);
        self.view.set_image_source(&request.image_source);
        self.view.set_title(&request.title);
        self.view.set_description(&request.description);
        self.view.set_shown(true);
    }

    /// Hide the overlay unless the click landed on inner content.
    /// `None` is an unconditional close.
    pub fn close(&self, origin: Option<InteractionOrigin>) {
        match origin {
            None => {
                log::debug!("modal close (programmatic)");
                self.view.set_shown(false);
            }
            Some(origin) if origin.dismisses() => {
                log::debug!("modal close ({:?})", origin);
                self.view.set_shown(false);
            }
            Some(origin) => {
                log::trace!("modal stays open ({:?})", origin);
            }
        }
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_shown(self.view.is_shown())
    }
}
