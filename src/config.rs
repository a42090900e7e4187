use serde::Deserialize;

pub const PAGE_CONFIG_ID: &str = "modal-config";
pub const GALLERY_DATA_ID: &str = "gallery-data";

const DEFAULT_UPLOAD_BASE: &str = "/uploads";

/// Element identities and marker classes the modal binds to.
///
/// Every field has a default matching the stock gallery page, so embedded
/// config only needs to name what differs.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ModalConfig {
    pub overlay_id: String,
    pub image_id: String,
    pub title_id: String,
    pub description_id: String,
    /// Class marking an in-overlay element as a dismiss control.
    pub close_class: String,
    /// Class present on the overlay while the modal is visible.
    pub shown_class: String,
    pub upload_base: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            overlay_id: "photoModal".to_string(),
            image_id: "modalImg".to_string(),
            title_id: "modalTitle".to_string(),
            description_id: "modalDesc".to_string(),
            close_class: "close".to_string(),
            shown_class: "show".to_string(),
            upload_base: DEFAULT_UPLOAD_BASE.to_string(),
        }
    }
}

impl ModalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let config = ModalConfig::default();
        assert_eq!(config.overlay_id, "photoModal");
        assert_eq!(config.image_id, "modalImg");
        assert_eq!(config.title_id, "modalTitle");
        assert_eq!(config.description_id, "modalDesc");
        assert_eq!(config.close_class, "close");
        assert_eq!(config.shown_class, "show");
        assert_eq!(config.upload_base, "/uploads");
    }

    #[test]
    fn empty_object_is_default() {
        let config = ModalConfig::from_json("{}").unwrap();
        assert_eq!(config, ModalConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            ModalConfig::from_json(r#"{"overlay_id": "lightbox", "shown_class": "is-open"}"#)
                .unwrap();
        assert_eq!(config.overlay_id, "lightbox");
        assert_eq!(config.shown_class, "is-open");
        assert_eq!(config.image_id, "modalImg");
        assert_eq!(config.close_class, "close");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = ModalConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config, ModalConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ModalConfig::from_json("{overlay_id:").is_err());
        assert!(ModalConfig::from_json(r#"{"overlay_id": 3}"#).is_err());
    }
}
