//! Core types for the Folio gallery

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Layout hint controlling how many grid cells a tile spans.
///
/// Unknown or missing values fall back to [`TileSize::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TileSize {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "wide")]
    Wide,
    #[serde(rename = "tall")]
    Tall,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "3x2")]
    ThreeByTwo,
    #[serde(rename = "2x3")]
    TwoByThree,
}

impl TileSize {
    /// Parse a size hint, falling back to `Default` for anything unrecognised.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "wide" => TileSize::Wide,
            "tall" => TileSize::Tall,
            "xl" => TileSize::Xl,
            "3x2" => TileSize::ThreeByTwo,
            "2x3" => TileSize::TwoByThree,
            _ => TileSize::Default,
        }
    }

    /// Name used in data files and CSS modifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileSize::Default => "default",
            TileSize::Wide => "wide",
            TileSize::Tall => "tall",
            TileSize::Xl => "xl",
            TileSize::ThreeByTwo => "3x2",
            TileSize::TwoByThree => "2x3",
        }
    }

    /// CSS modifier class (`tile--wide`), `None` for the default footprint.
    pub fn css_modifier(&self) -> Option<String> {
        match self {
            TileSize::Default => None,
            other => Some(format!("tile--{}", other.as_str())),
        }
    }

    /// Placement weight used by [`crate::filter::layout_order`]: big tiles first.
    pub fn layout_weight(&self) -> u8 {
        match self {
            TileSize::Xl => 2,
            TileSize::Wide => 1,
            _ => 0,
        }
    }
}

impl<'de> Deserialize<'de> for TileSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(TileSize::parse).unwrap_or_default())
    }
}

/// A single portfolio project as published in `projects.json`.
///
/// Records are immutable once loaded; a new fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Stable identifier
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Identifier used by older data files
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    /// External link to the full case study
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover: Option<String>,
    /// Legacy name for `cover`
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub videos: Vec<String>,
    #[serde(default)]
    pub size: TileSize,
    /// Only an explicit `false` hides a record
    #[serde(default = "visible_default", deserialize_with = "visible_flag")]
    pub visible: bool,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_label: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand: Option<String>,
}

impl ProjectRecord {
    /// Create a visible record with just a title; used by tests and fixtures.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            visible: true,
            ..Default::default()
        }
    }

    /// URL of the grid cover: `cover`, falling back to `image`.
    pub fn cover_src(&self) -> Option<&str> {
        non_empty(self.cover.as_deref()).or_else(|| non_empty(self.image.as_deref()))
    }

    /// Category slug, `None` when uncategorized.
    pub fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    /// `id`, or `slug` when no `id` is set.
    pub fn identifier(&self) -> Option<&str> {
        non_empty(self.id.as_deref()).or_else(|| non_empty(self.slug.as_deref()))
    }

    /// Key used to tag rendered elements; falls back to the title.
    pub fn key(&self) -> &str {
        self.identifier().unwrap_or(&self.title)
    }

    /// Badge text: `brandLabel`, or `brand` with dashes turned into
    /// capitalised words (`acme-coffee` -> `Acme Coffee`).
    pub fn brand_text(&self) -> Option<String> {
        if let Some(label) = non_empty(self.brand_label.as_deref()) {
            return Some(label.to_string());
        }
        non_empty(self.brand.as_deref()).map(title_case)
    }

    /// Lightbox media: every image in order, then every video in order.
    pub fn media_items(&self) -> Vec<MediaItem> {
        self.images
            .iter()
            .map(|src| MediaItem::image(src.clone()))
            .chain(self.videos.iter().map(|src| MediaItem::video(src.clone())))
            .collect()
    }

    /// Whether opening this record in the lightbox would show anything.
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || !self.videos.is_empty()
    }
}

/// Kind of a lightbox media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One entry in the lightbox carousel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
}

impl MediaItem {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
        }
    }
}

/// Turn a dashed slug into capitalised words.
pub fn title_case(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn visible_default() -> bool {
    true
}

fn visible_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(!matches!(value, Value::Bool(false)))
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
