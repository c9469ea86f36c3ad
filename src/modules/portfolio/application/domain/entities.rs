use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One portfolio entry as shown on the public scroller and the admin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub subdomain: String,
    pub tagline: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub hero_image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: String,
    pub order: i32,
}

/// A project as submitted in a collection replace; ids and order are
/// assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub slug: String,
    pub title: String,
    pub subdomain: String,
    pub tagline: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub live_url: String,
}
