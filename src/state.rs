use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Data shown by one `open` call. Written into the view and then dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayRequest {
    pub image_source: String,
    pub title: String,
    pub description: String,
}

impl DisplayRequest {
    pub fn new(
        image_source: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image_source: image_source.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_shown(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Where a dismissal click landed inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOrigin {
    /// The overlay element itself, outside the dialog content.
    Backdrop,
    /// Any element carrying the close marker class.
    CloseControl,
    /// Image, title, description or other content inside the dialog.
    InnerContent,
}

impl InteractionOrigin {
    /// Classify a click target. The overlay check wins over the class check.
    /// `class_name` is the target's raw `class` attribute; the marker must
    /// match one whitespace-separated token exactly.
    pub fn classify(is_overlay: bool, class_name: &str, close_class: &str) -> Self {
        if is_overlay {
            InteractionOrigin::Backdrop
        } else if class_name.split_whitespace().any(|c| c == close_class) {
            InteractionOrigin::CloseControl
        } else {
            InteractionOrigin::InnerContent
        }
    }

    pub fn dismisses(self) -> bool {
        matches!(
            self,
            InteractionOrigin::Backdrop | InteractionOrigin::CloseControl
        )
    }
}

/// One gallery entry as embedded in the page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Photo {
    pub id: u32,
    pub filename: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_author() -> String {
    "Admin".to_string()
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-padded `YYYY-MM-DD` only; chrono alone also takes `2025-9-30`.
fn iso_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.len() != 10 {
        return Err(serde::de::Error::custom(format!("expected YYYY-MM-DD, got {raw:?}")));
    }
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
}

impl Photo {
    pub fn image_url(&self, upload_base: &str) -> String {
        format!(
            "{}/{}",
            upload_base.trim_end_matches('/'),
            self.filename.trim_start_matches('/')
        )
    }

    pub fn display_request(&self, upload_base: &str) -> DisplayRequest {
        DisplayRequest::new(
            self.image_url(upload_base),
            self.title.clone(),
            self.description.clone(),
        )
    }
}

/// Newest first. The sort is stable so same-day photos keep page order.
pub fn sort_newest_first(photos: &mut [Photo]) {
    photos.sort_by(|a, b| b.date.cmp(&a.date));
}
