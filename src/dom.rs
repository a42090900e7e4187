use crate::config::ModalConfig;
use crate::controller::ModalView;
use crate::error::{ModalError, ModalResult};
use crate::state::InteractionOrigin;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

pub fn document() -> ModalResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ModalError::NoDocument)
}

fn element_by_id(document: &Document, id: &str) -> ModalResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ModalError::MissingElement(id.to_string()))
}

fn html_element_by_id(document: &Document, id: &str) -> ModalResult<HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ModalError::WrongElementKind {
            id: id.to_string(),
            expected: "HtmlElement",
        })
}

/// Classify the target of a click that reached the overlay.
pub fn origin_of(event: &Event, overlay: &Element, close_class: &str) -> InteractionOrigin {
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok());

    match target {
        Some(el) => InteractionOrigin::classify(
            el.is_same_node(Some(overlay.as_ref())),
            &el.class_name(),
            close_class,
        ),
        // Text nodes and other non-elements count as content.
        None => InteractionOrigin::InnerContent,
    }
}

/// Modal view over static page markup, with all four elements injected up front.
pub struct DomModalView {
    overlay: Element,
    image: Element,
    title: HtmlElement,
    description: HtmlElement,
    close_class: String,
    shown_class: String,
}

impl DomModalView {
    pub fn new(
        overlay: Element,
        image: Element,
        title: HtmlElement,
        description: HtmlElement,
        config: &ModalConfig,
    ) -> Self {
        Self {
            overlay,
            image,
            title,
            description,
            close_class: config.close_class.clone(),
            shown_class: config.shown_class.clone(),
        }
    }

    /// Look up the configured elements once, at install time.
    pub fn bind(document: &Document, config: &ModalConfig) -> ModalResult<Self> {
        Ok(Self::new(
            element_by_id(document, &config.overlay_id)?,
            element_by_id(document, &config.image_id)?,
            html_element_by_id(document, &config.title_id)?,
            html_element_by_id(document, &config.description_id)?,
            config,
        ))
    }

    pub fn origin_of(&self, event: &Event) -> InteractionOrigin {
        origin_of(event, &self.overlay, &self.close_class)
    }
}

impl ModalView for DomModalView {
    fn set_image_source(&self, src: &str) {
        if let Err(err) = self.image.set_attribute("src", src) {
            log::warn!("failed to set image src: {:?}", err);
        }
    }

    fn set_title(&self, text: &str) {
        self.title.set_inner_text(text);
    }

    fn set_description(&self, text: &str) {
        self.description.set_inner_text(text);
    }

    fn set_shown(&self, shown: bool) {
        let classes = self.overlay.class_list();
        let result = if shown {
            classes.add_1(&self.shown_class)
        } else {
            classes.remove_1(&self.shown_class)
        };
        if let Err(err) = result {
            log::warn!("failed to toggle .{}: {:?}", self.shown_class, err);
        }
    }

    fn is_shown(&self) -> bool {
        self.overlay.class_list().contains(&self.shown_class)
    }
}

/// Parse the JSON body of `<script type="application/json" id=...>`.
/// `Ok(None)` when the page has no such script.
pub fn read_embedded_json<T: DeserializeOwned>(
    document: &Document,
    id: &str,
) -> ModalResult<Option<T>> {
    let Some(script) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let text = script.text_content().unwrap_or_default();
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| ModalError::InvalidJson {
            id: id.to_string(),
            source,
        })
}

pub fn read_page_config(document: &Document, id: &str) -> ModalResult<ModalConfig> {
    Ok(read_embedded_json::<ModalConfig>(document, id)?.unwrap_or_default())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::controller::ModalController;
    use crate::state::{DisplayRequest, Visibility};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div id="photoModal" class="modal">
            <div class="modal-content">
                <span id="closeBtn" class="close">x</span>
                <img id="modalImg" />
                <h3 id="modalTitle"></h3>
                <p id="modalDesc"></p>
            </div>
        </div>
    "#;

    fn mount(markup: &str) -> Document {
        let document = document().unwrap();
        document.body().unwrap().set_inner_html(markup);
        document
    }

    fn click_on(document: &Document, id: &str) -> Event {
        let target = document.get_element_by_id(id).unwrap();
        let event = Event::new("click").unwrap();
        target.dispatch_event(&event).unwrap();
        event
    }

    #[wasm_bindgen_test]
    fn bind_reports_missing_element() {
        let document = mount(r#"<div id="photoModal"></div>"#);
        let err = DomModalView::bind(&document, &ModalConfig::default()).err().unwrap();
        assert!(matches!(err, ModalError::MissingElement(id) if id == "modalImg"));
    }

    #[wasm_bindgen_test]
    fn open_writes_dom_and_adds_show_class() {
        let document = mount(MARKUP);
        let view = DomModalView::bind(&document, &ModalConfig::default()).unwrap();
        let controller = ModalController::new(view);

        controller.open(DisplayRequest::new("/uploads/a.jpg", "<b>A</b>", "desc"));

        let img = document.get_element_by_id("modalImg").unwrap();
        let title = document.get_element_by_id("modalTitle").unwrap();
        let overlay = document.get_element_by_id("photoModal").unwrap();
        assert_eq!(img.get_attribute("src").as_deref(), Some("/uploads/a.jpg"));
        assert_eq!(title.text_content().as_deref(), Some("<b>A</b>"));
        assert!(overlay.class_list().contains("show"));
        assert_eq!(controller.visibility(), Visibility::Shown);
    }

    #[wasm_bindgen_test]
    fn clicks_are_classified_by_target() {
        let document = mount(MARKUP);
        let view = DomModalView::bind(&document, &ModalConfig::default()).unwrap();

        assert_eq!(
            view.origin_of(&click_on(&document, "photoModal")),
            InteractionOrigin::Backdrop
        );
        assert_eq!(
            view.origin_of(&click_on(&document, "closeBtn")),
            InteractionOrigin::CloseControl
        );
        assert_eq!(
            view.origin_of(&click_on(&document, "modalImg")),
            InteractionOrigin::InnerContent
        );
    }

    fn shown_modal(document: &Document) -> ModalController<DomModalView> {
        let view = DomModalView::bind(document, &ModalConfig::default()).unwrap();
        let controller = ModalController::new(view);
        controller.open(DisplayRequest::new("/uploads/a.jpg", "A", "desc"));
        controller
    }

    fn overlay_has_show(document: &Document) -> bool {
        document
            .get_element_by_id("photoModal")
            .unwrap()
            .class_list()
            .contains("show")
    }

    #[wasm_bindgen_test]
    fn backdrop_click_removes_show_class() {
        let document = mount(MARKUP);
        let controller = shown_modal(&document);

        let ev = click_on(&document, "photoModal");
        controller.close(Some(controller.view().origin_of(&ev)));

        assert!(!overlay_has_show(&document));
        assert_eq!(controller.visibility(), Visibility::Hidden);
    }

    #[wasm_bindgen_test]
    fn close_control_click_removes_show_class() {
        let document = mount(MARKUP);
        let controller = shown_modal(&document);

        let ev = click_on(&document, "closeBtn");
        controller.close(Some(controller.view().origin_of(&ev)));

        assert!(!overlay_has_show(&document));
    }

    #[wasm_bindgen_test]
    fn inner_click_keeps_show_class() {
        let document = mount(MARKUP);
        let controller = shown_modal(&document);

        let ev = click_on(&document, "modalImg");
        controller.close(Some(controller.view().origin_of(&ev)));

        assert!(overlay_has_show(&document));
        assert_eq!(controller.visibility(), Visibility::Shown);
    }

    #[wasm_bindgen_test]
    fn programmatic_close_hides_and_stays_hidden() {
        let document = mount(MARKUP);
        let controller = shown_modal(&document);

        controller.close(None);
        assert!(!overlay_has_show(&document));

        controller.close(None);
        assert!(!overlay_has_show(&document));
        assert_eq!(controller.visibility(), Visibility::Hidden);
    }

    #[wasm_bindgen_test]
    fn is_shown_reads_class_set_outside_controller() {
        let document = mount(MARKUP);
        let view = DomModalView::bind(&document, &ModalConfig::default()).unwrap();
        assert!(!view.is_shown());

        let overlay = document.get_element_by_id("photoModal").unwrap();
        overlay.class_list().add_1("show").unwrap();
        assert!(view.is_shown());
    }

    #[wasm_bindgen_test]
    fn bad_gallery_date_is_invalid_json() {
        let document = mount(
            r#"<script type="application/json" id="gallery-data">
                [{"id": 1, "filename": "a.jpg", "title": "t", "description": "d", "date": "not a date"}]
            </script>"#,
        );
        let err = read_embedded_json::<Vec<crate::state::Photo>>(&document, "gallery-data")
            .unwrap_err();
        assert!(matches!(err, ModalError::InvalidJson { id, .. } if id == "gallery-data"));
    }

    #[wasm_bindgen_test]
    fn page_config_falls_back_to_default() {
        let document = mount(MARKUP);
        let config = read_page_config(&document, "modal-config").unwrap();
        assert_eq!(config, ModalConfig::default());
    }

    #[wasm_bindgen_test]
    fn page_config_reads_embedded_json() {
        let document = mount(
            r#"<script type="application/json" id="modal-config">{"shown_class": "open"}</script>"#,
        );
        let config = read_page_config(&document, "modal-config").unwrap();
        assert_eq!(config.shown_class, "open");
        assert_eq!(config.overlay_id, "photoModal");
    }
}
