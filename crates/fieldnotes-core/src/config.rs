use serde::{Deserialize, Serialize};

/// Site-level configuration for the notes engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory under the site root holding one subdirectory per note
    #[serde(default = "default_notes_dir")]
    pub notes_dir: String,
    /// Document file name inside each note directory
    #[serde(default = "default_document_file")]
    pub document_file: String,
    /// Notes per page in list views
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Seconds a built index stays cached; 0 disables caching
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Absolute base URL used when generating the sitemap
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Human-readable site name
    #[serde(default)]
    pub site_name: String,
}

fn default_notes_dir() -> String {
    "notes".to_string()
}

fn default_document_file() -> String {
    "index.md".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_cache_ttl() -> u64 {
    60
}

fn default_base_url() -> String {
    "https://example.com".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            document_file: default_document_file(),
            page_size: default_page_size(),
            cache_ttl_secs: default_cache_ttl(),
            base_url: default_base_url(),
            site_name: String::new(),
        }
    }
}

impl SiteConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
