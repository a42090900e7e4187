use leptos::prelude::*;
use crate::app::GalleryCtx;

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<GalleryCtx>().expect("GalleryCtx provided by App");
    let upload_base = ctx.config.get_value().upload_base;

    move || {
        let photos = ctx.photos.get();
        if photos.is_empty() {
            return view! {
                <p class="gallery-empty" style="color: #666;">"No photos yet."</p>
            }
            .into_any();
        }

        let modal = ctx.modal;
        let tiles = photos
            .into_iter()
            .map(|photo| {
                let thumb_url = photo.image_url(&upload_base);
                let request = photo.display_request(&upload_base);
                let caption = format!("{} · {}", photo.date, photo.author);
                let title = photo.title;
                let alt = title.clone();
                view! {
                    <figure
                        class="gallery-item"
                        style="margin: 0; cursor: pointer;"
                        on:click=move |_| modal.open(request.clone())
                    >
                        <img
                            src=thumb_url
                            alt=alt
                            loading="lazy"
                            style="width: 100%; aspect-ratio: 4 / 3; object-fit: cover;"
                        />
                        <figcaption style="font-size: 13px;">
                            <strong>{title}</strong>
                            <br />
                            <small style="color: #666;">{caption}</small>
                        </figcaption>
                    </figure>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div
                class="gallery-grid"
                style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;"
            >
                {tiles}
            </div>
        }
        .into_any()
    }
}
