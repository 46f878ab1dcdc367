//! Request Options
//!
//! A single options struct stands in for every combination of size, default
//! image, rating and flags a caller might want.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MIN_IMAGE_SIZE: i32 = 1;
pub const MAX_IMAGE_SIZE: i32 = 2048;

pub const DEFAULT_IMAGE_IDENTICON: &str = "identicon";
pub const DEFAULT_IMAGE_MYSTERY_PERSON: &str = "mp";
pub const DEFAULT_IMAGE_MONSTER_ID: &str = "monsterid";
pub const DEFAULT_IMAGE_WAVATAR: &str = "wavatar";
pub const DEFAULT_IMAGE_RETRO: &str = "retro";
pub const DEFAULT_IMAGE_BLANK: &str = "blank";
pub const DEFAULT_IMAGE_NOT_FOUND: &str = "404";

/// Content rating filter. Gravatar serves the best image at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    G,
    PG,
    R,
    X,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::PG => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::PG),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            other => Err(format!("Unknown rating: {}", other)),
        }
    }
}

/// Fallback image served when no Gravatar exists for the hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultImage {
    Identicon,
    MysteryPerson,
    MonsterId,
    Wavatar,
    Retro,
    Blank,
    /// Respond with HTTP 404 instead of an image.
    NotFound,
    /// Absolute URL of a caller-hosted image. Passed through unchecked.
    Custom(String),
}

impl DefaultImage {
    pub fn as_str(&self) -> &str {
        match self {
            DefaultImage::Identicon => DEFAULT_IMAGE_IDENTICON,
            DefaultImage::MysteryPerson => DEFAULT_IMAGE_MYSTERY_PERSON,
            DefaultImage::MonsterId => DEFAULT_IMAGE_MONSTER_ID,
            DefaultImage::Wavatar => DEFAULT_IMAGE_WAVATAR,
            DefaultImage::Retro => DEFAULT_IMAGE_RETRO,
            DefaultImage::Blank => DEFAULT_IMAGE_BLANK,
            DefaultImage::NotFound => DEFAULT_IMAGE_NOT_FOUND,
            DefaultImage::Custom(url) => url,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DefaultImage::Custom(_))
    }
}

impl From<&str> for DefaultImage {
    fn from(s: &str) -> Self {
        match s {
            DEFAULT_IMAGE_IDENTICON => DefaultImage::Identicon,
            DEFAULT_IMAGE_MYSTERY_PERSON => DefaultImage::MysteryPerson,
            DEFAULT_IMAGE_MONSTER_ID => DefaultImage::MonsterId,
            DEFAULT_IMAGE_WAVATAR => DefaultImage::Wavatar,
            DEFAULT_IMAGE_RETRO => DefaultImage::Retro,
            DEFAULT_IMAGE_BLANK => DefaultImage::Blank,
            DEFAULT_IMAGE_NOT_FOUND => DefaultImage::NotFound,
            other => DefaultImage::Custom(other.to_string()),
        }
    }
}

impl From<String> for DefaultImage {
    fn from(s: String) -> Self {
        DefaultImage::from(s.as_str())
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DefaultImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DefaultImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DefaultImage::from(s))
    }
}

/// Digest used for the email path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Sha256,
}

/// Options for an avatar image URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarOptions {
    #[serde(default)]
    pub size: Option<i32>,
    #[serde(default)]
    pub default_image: Option<DefaultImage>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub add_extension: bool,
    #[serde(default)]
    pub force_default: bool,
    #[serde(default)]
    pub force_secure: bool,
    #[serde(default)]
    pub hash: HashAlgorithm,
}

impl AvatarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_default_image(mut self, image: impl Into<DefaultImage>) -> Self {
        self.default_image = Some(image.into());
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_extension(mut self, add_extension: bool) -> Self {
        self.add_extension = add_extension;
        self
    }

    pub fn with_force_default(mut self, force_default: bool) -> Self {
        self.force_default = force_default;
        self
    }

    pub fn with_force_secure(mut self, force_secure: bool) -> Self {
        self.force_secure = force_secure;
        self
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }
}

/// Alternative representations of a Gravatar profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileFormat {
    Json,
    Xml,
    #[serde(rename = "vcf")]
    VCard,
    #[serde(rename = "qr")]
    QrCode,
    Php,
}

impl ProfileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ProfileFormat::Json => "json",
            ProfileFormat::Xml => "xml",
            ProfileFormat::VCard => "vcf",
            ProfileFormat::QrCode => "qr",
            ProfileFormat::Php => "php",
        }
    }
}

impl FromStr for ProfileFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ProfileFormat::Json),
            "xml" => Ok(ProfileFormat::Xml),
            "vcf" | "vcard" => Ok(ProfileFormat::VCard),
            "qr" => Ok(ProfileFormat::QrCode),
            "php" => Ok(ProfileFormat::Php),
            other => Err(format!("Unknown profile format: {}", other)),
        }
    }
}

/// Options for a profile URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptions {
    #[serde(default)]
    pub format: Option<ProfileFormat>,
    /// Appended to the query string in this order.
    #[serde(default)]
    pub parameters: Vec<(String, String)>,
    #[serde(default)]
    pub force_secure: bool,
    #[serde(default)]
    pub hash: HashAlgorithm,
}

impl ProfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ProfileFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    pub fn with_force_secure(mut self, force_secure: bool) -> Self {
        self.force_secure = force_secure;
        self
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }
}
