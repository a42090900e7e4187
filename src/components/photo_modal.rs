use leptos::prelude::*;
use crate::app::GalleryCtx;
use crate::controller::ModalView;
use crate::dom;

/// Modal view backed by signals; `PhotoModal` renders whatever these hold.
#[derive(Clone, Copy, Debug)]
pub struct SignalModalView {
    pub image_source: RwSignal<String>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub shown: RwSignal<bool>,
}

impl SignalModalView {
    pub fn new() -> Self {
        Self {
            image_source: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            shown: RwSignal::new(false),
        }
    }
}

impl Default for SignalModalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalView for SignalModalView {
    fn set_image_source(&self, src: &str) {
        self.image_source.set(src.to_string());
    }

    fn set_title(&self, text: &str) {
        self.title.set(text.to_string());
    }

    fn set_description(&self, text: &str) {
        self.description.set(text.to_string());
    }

    fn set_shown(&self, shown: bool) {
        self.shown.set(shown);
    }

    fn is_shown(&self) -> bool {
        self.shown.get_untracked()
    }
}

#[component]
pub fn PhotoModal() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().expect("GalleryCtx provided by App");
    let config = ctx.config.get_value();
    let modal = ctx.modal;
    let view_state = *modal.view();
    let overlay_ref = NodeRef::<leptos::html::Div>::new();

    let shown_class = config.shown_class.clone();
    let close_class = config.close_class.clone();
    let overlay_class = move || {
        if view_state.shown.get() {
            format!("modal {}", shown_class)
        } else {
            "modal".to_string()
        }
    };

    let on_overlay_click = move |ev: web_sys::MouseEvent| {
        let Some(overlay) = overlay_ref.get_untracked() else {
            return;
        };
        modal.close(Some(dom::origin_of(&ev, &overlay, &close_class)));
    };

    view! {
        <div
            node_ref=overlay_ref
            id=config.overlay_id
            class=overlay_class
            style=move || format!(
                "position: fixed; inset: 0; background: rgba(0,0,0,0.85); \
                 align-items: center; justify-content: center; z-index: 1000; \
                 display: {};",
                if view_state.shown.get() { "flex" } else { "none" }
            )
            on:click=on_overlay_click
        >
            <div
                class="modal-content"
                style="position: relative; max-width: 90vw; max-height: 90vh; \
                       background: #fff; padding: 16px; border-radius: 6px; \
                       display: flex; flex-direction: column; gap: 8px;"
            >
                <span
                    class=config.close_class
                    style="position: absolute; top: 4px; right: 12px; \
                           font-size: 28px; cursor: pointer; user-select: none;"
                >
                    "×"
                </span>
                <img
                    id=config.image_id
                    src=move || view_state.image_source.get()
                    alt=move || view_state.title.get()
                    style="max-width: 85vw; max-height: 70vh; object-fit: contain;"
                />
                <h3 id=config.title_id style="margin: 0;">
                    {move || view_state.title.get()}
                </h3>
                <p id=config.description_id style="margin: 0;">
                    {move || view_state.description.get()}
                </p>
            </div>
        </div>
    }
}
