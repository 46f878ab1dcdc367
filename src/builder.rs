//! URL Builder - Single Entry Point
//!
//! Every avatar and profile URL is assembled here. The functions are pure:
//! output depends only on the arguments and the request context's answer
//! to "is this connection secure?".

use log::trace;
use thiserror::Error;
use url::form_urlencoded;

use crate::context::RequestContext;
use crate::hashing::email_hash;
use crate::options::{AvatarOptions, ProfileOptions};
use crate::validation::{clamp_image_size, validate_email};

pub const GRAVATAR_HOST: &str = "www.gravatar.com";

#[derive(Debug, Error)]
pub enum GravatarError {
    #[error("Email address must not be empty")]
    EmptyEmail,

    #[error("Invalid HTML attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn scheme(force_secure: bool, ctx: &impl RequestContext) -> &'static str {
    if force_secure || ctx.is_secure() {
        "https"
    } else {
        "http"
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn append_query(url: &mut String, params: &[(String, String)]) {
    for (i, (name, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(name);
        url.push('=');
        url.push_str(value);
    }
}

/// Build the URL of an avatar image.
///
/// Query parameters are emitted in the fixed order `s`, `d`, `r`, `f` and
/// only when set. The `?` is omitted if none are present.
pub fn avatar_url(
    email: &str,
    options: &AvatarOptions,
    ctx: &impl RequestContext,
) -> Result<String, GravatarError> {
    let email = validate_email(email)?;
    let hash = email_hash(email, options.hash);

    let mut url = format!(
        "{}://{}/avatar/{}",
        scheme(options.force_secure, ctx),
        GRAVATAR_HOST,
        hash
    );
    if options.add_extension {
        url.push_str(".jpg");
    }

    let mut params = Vec::new();
    if let Some(size) = options.size {
        params.push(("s".to_string(), clamp_image_size(size).to_string()));
    }
    if let Some(image) = &options.default_image {
        params.push(("d".to_string(), encode(image.as_str())));
    }
    if let Some(rating) = options.rating {
        params.push(("r".to_string(), rating.as_str().to_string()));
    }
    if options.force_default {
        params.push(("f".to_string(), "y".to_string()));
    }
    append_query(&mut url, &params);

    trace!("built avatar url {}", url);
    Ok(url)
}

/// Build the URL of a profile page or one of its data formats.
///
/// Caller parameters are URL-encoded and appended in insertion order.
pub fn profile_url(
    email: &str,
    options: &ProfileOptions,
    ctx: &impl RequestContext,
) -> Result<String, GravatarError> {
    let email = validate_email(email)?;
    let hash = email_hash(email, options.hash);

    let mut url = format!(
        "{}://{}/{}",
        scheme(options.force_secure, ctx),
        GRAVATAR_HOST,
        hash
    );
    if let Some(format) = options.format {
        url.push('.');
        url.push_str(format.extension());
    }

    let params: Vec<_> = options
        .parameters
        .iter()
        .map(|(name, value)| (encode(name), encode(value)))
        .collect();
    append_query(&mut url, &params);

    trace!("built profile url {}", url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NoContext;
    use crate::options::{DefaultImage, HashAlgorithm, ProfileFormat, Rating};

    const EMAIL: &str = "MyEmailAddress@example.com";
    const HASH: &str = "0bc83cb571cd1c50ba6f3e8a78ef1346";

    #[test]
    fn test_plain_url_with_size() {
        let url = avatar_url(EMAIL, &AvatarOptions::new().with_size(80), &NoContext).unwrap();
        assert_eq!(url, format!("http://www.gravatar.com/avatar/{}?s=80", HASH));
    }

    #[test]
    fn test_secure_url_with_extension() {
        let options = AvatarOptions::new().with_size(80).with_extension(true);
        let url = avatar_url(EMAIL, &options, &true).unwrap();
        assert_eq!(url, format!("https://www.gravatar.com/avatar/{}.jpg?s=80", HASH));
    }

    #[test]
    fn test_no_query_without_parameters() {
        let url = avatar_url(EMAIL, &AvatarOptions::new(), &NoContext).unwrap();
        assert_eq!(url, format!("http://www.gravatar.com/avatar/{}", HASH));
    }

    #[test]
    fn test_force_secure_overrides_context() {
        let options = AvatarOptions::new().with_force_secure(true);
        let url = avatar_url(EMAIL, &options, &false).unwrap();
        assert!(url.starts_with("https://"));
    }

    #[test]
    fn test_full_parameter_order() {
        let options = AvatarOptions::new()
            .with_size(5000)
            .with_default_image("http://example.com/logo.jpg")
            .with_rating(Rating::PG)
            .with_force_default(true);
        let url = avatar_url(EMAIL, &options, &NoContext).unwrap();
        assert_eq!(
            url,
            format!(
                "http://www.gravatar.com/avatar/{}?s=2048&d=http%3A%2F%2Fexample.com%2Flogo.jpg&r=pg&f=y",
                HASH
            )
        );
    }

    #[test]
    fn test_keyword_default_image() {
        let options = AvatarOptions::new().with_default_image(DefaultImage::Identicon);
        let url = avatar_url(EMAIL, &options, &NoContext).unwrap();
        assert!(url.ends_with("?d=identicon"));
    }

    #[test]
    fn test_empty_email_is_error() {
        let err = avatar_url("", &AvatarOptions::new(), &NoContext).unwrap_err();
        assert!(matches!(err, GravatarError::EmptyEmail));
        let err = profile_url("   ", &ProfileOptions::new(), &NoContext).unwrap_err();
        assert!(matches!(err, GravatarError::EmptyEmail));
    }

    #[test]
    fn test_sha256_hash_segment() {
        let options = AvatarOptions::new().with_hash(HashAlgorithm::Sha256);
        let url = avatar_url(EMAIL, &options, &NoContext).unwrap();
        let segment = url.rsplit('/').next().unwrap();
        assert_eq!(segment.len(), 64);
    }

    #[test]
    fn test_profile_urls() {
        let url = profile_url(EMAIL, &ProfileOptions::new(), &NoContext).unwrap();
        assert_eq!(url, format!("http://www.gravatar.com/{}", HASH));

        let options = ProfileOptions::new()
            .with_format(ProfileFormat::Json)
            .with_parameter("callback", "show profile");
        let url = profile_url(EMAIL, &options, &true).unwrap();
        assert_eq!(
            url,
            format!("https://www.gravatar.com/{}.json?callback=show+profile", HASH)
        );
    }

    #[test]
    fn test_profile_parameters_keep_insertion_order() {
        let options = ProfileOptions::new()
            .with_format(ProfileFormat::QrCode)
            .with_parameter("z", "1")
            .with_parameter("a", "2");
        let url = profile_url(EMAIL, &options, &NoContext).unwrap();
        assert!(url.ends_with(".qr?z=1&a=2"));
    }

    #[test]
    fn test_profile_parameters_are_encoded() {
        let options = ProfileOptions::new()
            .with_parameter("a&b", "c=d")
            .with_parameter("frag", "x#y z");
        let url = profile_url(EMAIL, &options, &NoContext).unwrap();
        assert_eq!(
            url,
            format!("http://www.gravatar.com/{}?a%26b=c%3Dd&frag=x%23y+z", HASH)
        );

        let parsed = ::url::Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs, options.parameters);
        assert_eq!(parsed.fragment(), None);
    }
}
