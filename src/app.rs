use crate::components::{Gallery, PhotoModal, SignalModalView};
use crate::config::{ModalConfig, GALLERY_DATA_ID, PAGE_CONFIG_ID};
use crate::controller::ModalController;
use crate::dom;
use crate::error::ModalResult;
use crate::state::{sort_newest_first, Photo};
use leptos::prelude::*;

/// Shared by the gallery tiles and the modal.
#[derive(Clone, Copy)]
pub struct GalleryCtx {
    pub photos: ReadSignal<Vec<Photo>>,
    pub modal: ModalController<SignalModalView>,
    pub config: StoredValue<ModalConfig>,
}

fn load_config() -> ModalConfig {
    dom::document()
        .and_then(|doc| dom::read_page_config(&doc, PAGE_CONFIG_ID))
        .unwrap_or_else(|err| {
            log::warn!("using default modal config: {}", err);
            ModalConfig::default()
        })
}

fn load_photos() -> Vec<Photo> {
    let loaded: ModalResult<Option<Vec<Photo>>> =
        dom::document().and_then(|doc| dom::read_embedded_json(&doc, GALLERY_DATA_ID));
    let mut photos = match loaded {
        Ok(Some(photos)) => photos,
        Ok(None) => {
            log::debug!("no #{} on page, gallery is empty", GALLERY_DATA_ID);
            Vec::new()
        }
        Err(err) => {
            log::error!("failed to load gallery: {}", err);
            Vec::new()
        }
    };
    sort_newest_first(&mut photos);
    photos
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let (photos, _) = signal(load_photos());
    log::info!("gallery loaded with {} photos", photos.get_untracked().len());

    provide_context(GalleryCtx {
        photos,
        modal: ModalController::new(SignalModalView::new()),
        config: StoredValue::new(config),
    });

    view! {
        <main style="max-width: 1100px; margin: 0 auto; padding: 24px; font-family: system-ui, sans-serif;">
            <h1 style="margin-top: 0;">"Gallery"</h1>
            <Gallery />
            <PhotoModal />
        </main>
    }
}
