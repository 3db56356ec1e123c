use std::rc::Rc;

use log::Level;
use serde::Deserialize;
use yew::prelude::*;

use crate::error::SiteError;

const BUNDLED_SITE: &str = include_str!("../site.json");

pub const MAP_KEY_PLACEHOLDER: &str = "YOUR_GOOGLE_MAPS_API_KEY_HERE";
const MAP_EMBED_BASE: &str = "https://www.google.com/maps/embed/v1/place";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    pub socials: Socials,
    pub contact: ContactDetails,
    pub map: MapSettings,
    pub hero_video: String,
    pub gallery: Vec<ImageItem>,
    #[serde(default)]
    pub videos: Vec<VideoGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub initials: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Socials {
    pub instagram: String,
    pub tiktok: String,
    pub whatsapp: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email_label: String,
    pub whatsapp_label: String,
    pub location: String,
    pub image: ImageItem,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapSettings {
    pub heading: String,
    pub address: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageItem {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoGroup {
    pub title: String,
    pub label: String,
    pub sources: Vec<String>,
}

impl SiteConfig {
    /// Parses the bundled `site.json`. A map key given at build time through
    /// `GOOGLE_MAPS_EMBED_API_KEY` replaces the one in the file.
    pub fn load() -> Result<Self, SiteError> {
        let mut config = Self::from_json(BUNDLED_SITE)?;
        if let Some(key) = option_env!("GOOGLE_MAPS_EMBED_API_KEY") {
            config.map.api_key = Some(key.to_string());
        }
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl MapSettings {
    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != MAP_KEY_PLACEHOLDER)
    }

    /// `None` means no key is configured and the placeholder panel is shown.
    pub fn embed_url(&self) -> Option<String> {
        self.usable_key().map(|key| {
            format!(
                "{}?key={}&q={}",
                MAP_EMBED_BASE,
                key,
                urlencoding::encode(&self.address)
            )
        })
    }
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}
