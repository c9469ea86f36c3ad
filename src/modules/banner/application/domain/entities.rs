use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Visual style of a site banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    #[default]
    Info,
    Warning,
    Success,
}

impl BannerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerVariant::Info => "info",
            BannerVariant::Warning => "warning",
            BannerVariant::Success => "success",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(BannerVariant::Info),
            "warning" => Some(BannerVariant::Warning),
            "success" => Some(BannerVariant::Success),
            _ => None,
        }
    }
}

/// A site-wide announcement strip. `page_path` of `None` means the banner
/// shows on every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: Uuid,
    pub message: String,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub variant: BannerVariant,
    pub page_path: Option<String>,
    pub active: bool,
    pub order: i32,
}

fn default_active() -> bool {
    true
}

/// Payload for creating a banner; everything but the message is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBanner {
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_text: Option<String>,
    #[serde(default)]
    pub variant: BannerVariant,
    #[serde(default)]
    pub page_path: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub order: i32,
}

// Distinguishes an absent field (outer None, keep stored value) from an
// explicit null (Some(None), clear the column).
fn explicit<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial banner update. Absent fields keep their stored values; for the
/// nullable columns an explicit JSON `null` clears the value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPatch {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "explicit")]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub link_text: Option<Option<String>>,
    #[serde(default)]
    pub variant: Option<BannerVariant>,
    #[serde(default, deserialize_with = "explicit")]
    pub page_path: Option<Option<String>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub order: Option<i32>,
}
