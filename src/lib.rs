//! Gravatar Helper - Avatar URLs and Tags
//!
//! # Guarantees
//! 1. Emitted sizes always lie in `[MIN_IMAGE_SIZE, MAX_IMAGE_SIZE]`
//! 2. Equal addresses (ignoring case and surrounding whitespace) hash equally
//! 3. Query parameters appear in a fixed order
//! 4. Only an empty email address is an error (plus a malformed attribute
//!    name when rendering an `<img>` tag)
//! 5. No global state: the secure-connection signal is passed per call

pub mod builder;
pub mod config;
pub mod context;
pub mod hashing;
pub mod helpers;
pub mod html;
pub mod options;
pub mod validation;

pub use builder::{avatar_url, profile_url, GravatarError, GRAVATAR_HOST};
pub use config::GravatarConfig;
pub use context::{NoContext, RequestContext, RequestUrl};
pub use hashing::{email_hash, normalize_email};
pub use helpers::{HtmlHelpers, UrlHelpers};
pub use html::{img_tag, GravatarImage};
pub use options::{
    AvatarOptions, DefaultImage, HashAlgorithm, ProfileFormat, ProfileOptions, Rating,
    DEFAULT_IMAGE_BLANK, DEFAULT_IMAGE_IDENTICON, DEFAULT_IMAGE_MONSTER_ID,
    DEFAULT_IMAGE_MYSTERY_PERSON, DEFAULT_IMAGE_NOT_FOUND, DEFAULT_IMAGE_RETRO,
    DEFAULT_IMAGE_WAVATAR, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE,
};
pub use validation::clamp_image_size;

pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
