//! JS entry points for pages that ship their own modal markup instead of
//! mounting the Leptos app. The exports live on the generated JS module, not
//! on `window`, so the page wires them up from a module script:
//!
//! ```html
//! <script type="module">
//!   import init, { installModal, openModal, closeModal } from "./photo_modal_ui.js";
//!   await init();
//!   installModal();
//!   for (const img of document.querySelectorAll(".gallery-item img")) {
//!     img.addEventListener("click", () =>
//!       openModal(img.src, img.dataset.title, img.dataset.description));
//!   }
//!   document.getElementById("photoModal").addEventListener("click", closeModal);
//! </script>
//! ```

use crate::config::PAGE_CONFIG_ID;
use crate::controller::ModalController;
use crate::dom::{self, DomModalView};
use crate::error::{ModalError, ModalResult};
use crate::state::DisplayRequest;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static PAGE_MODAL: RefCell<Option<ModalController<DomModalView>>> = const { RefCell::new(None) };
}

fn with_modal<R>(f: impl FnOnce(&ModalController<DomModalView>) -> R) -> ModalResult<R> {
    PAGE_MODAL.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(f)
            .ok_or(ModalError::NotInstalled)
    })
}

fn install() -> ModalResult<()> {
    crate::init_console();
    let document = dom::document()?;
    let config = dom::read_page_config(&document, PAGE_CONFIG_ID)?;
    let view = DomModalView::bind(&document, &config)?;
    PAGE_MODAL.with(|slot| *slot.borrow_mut() = Some(ModalController::new(view)));
    log::info!("modal installed on #{}", config.overlay_id);
    Ok(())
}

/// Bind the modal to the page's elements. Calling it again rebinds.
#[wasm_bindgen(js_name = installModal)]
pub fn install_modal() -> Result<(), JsValue> {
    install().map_err(|err| {
        log::error!("installModal failed: {}", err);
        err.into()
    })
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(
    src: Option<String>,
    title: Option<String>,
    description: Option<String>,
) -> Result<(), JsValue> {
    let request = request_from_args(src, title, description)?;
    with_modal(|modal| modal.open(request))?;
    Ok(())
}

/// Without an event this always closes; with one it closes only for
/// backdrop or close-control clicks.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(event: Option<web_sys::Event>) -> Result<(), JsValue> {
    with_modal(|modal| {
        let origin = event.as_ref().map(|ev| modal.view().origin_of(ev));
        modal.close(origin);
    })?;
    Ok(())
}

fn request_from_args(
    src: Option<String>,
    title: Option<String>,
    description: Option<String>,
) -> ModalResult<DisplayRequest> {
    Ok(DisplayRequest::new(
        src.ok_or(ModalError::MissingArgument("src"))?,
        title.ok_or(ModalError::MissingArgument("title"))?,
        description.ok_or(ModalError::MissingArgument("description"))?,
    ))
}
