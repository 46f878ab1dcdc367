//! View Helpers - Request-Bound Adapters
//!
//! Thin wrappers a web framework hands to its views. Each holds the current
//! request context so templates never pass the secure flag themselves.

use crate::builder::{avatar_url, profile_url, GravatarError};
use crate::context::{NoContext, RequestContext};
use crate::html::{img_tag, GravatarImage};
use crate::options::{AvatarOptions, ProfileFormat, ProfileOptions};

/// URL-producing helpers.
#[derive(Debug, Clone)]
pub struct UrlHelpers<C> {
    context: C,
}

impl<C: RequestContext> UrlHelpers<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn gravatar(&self, email: &str, options: &AvatarOptions) -> Result<String, GravatarError> {
        avatar_url(email, options, &self.context)
    }

    pub fn profile(&self, email: &str, options: &ProfileOptions) -> Result<String, GravatarError> {
        profile_url(email, options, &self.context)
    }

    fn profile_as(
        &self,
        email: &str,
        format: ProfileFormat,
        force_secure: bool,
    ) -> Result<String, GravatarError> {
        let options = ProfileOptions::new()
            .with_format(format)
            .with_force_secure(force_secure);
        self.profile(email, &options)
    }

    pub fn profile_json(&self, email: &str, force_secure: bool) -> Result<String, GravatarError> {
        self.profile_as(email, ProfileFormat::Json, force_secure)
    }

    /// JSON profile wrapped in a call to the named JavaScript function.
    pub fn profile_json_with_callback(
        &self,
        email: &str,
        callback: &str,
        force_secure: bool,
    ) -> Result<String, GravatarError> {
        let options = ProfileOptions::new()
            .with_format(ProfileFormat::Json)
            .with_parameter("callback", callback)
            .with_force_secure(force_secure);
        self.profile(email, &options)
    }

    pub fn profile_vcard(&self, email: &str, force_secure: bool) -> Result<String, GravatarError> {
        self.profile_as(email, ProfileFormat::VCard, force_secure)
    }

    pub fn profile_xml(&self, email: &str, force_secure: bool) -> Result<String, GravatarError> {
        self.profile_as(email, ProfileFormat::Xml, force_secure)
    }

    /// Image of a QR code linking back to the profile.
    pub fn profile_qr_code(&self, email: &str, force_secure: bool) -> Result<String, GravatarError> {
        self.profile_as(email, ProfileFormat::QrCode, force_secure)
    }

    pub fn profile_qr_code_sized(
        &self,
        email: &str,
        size: u32,
        force_secure: bool,
    ) -> Result<String, GravatarError> {
        let options = ProfileOptions::new()
            .with_format(ProfileFormat::QrCode)
            .with_parameter("s", size.to_string())
            .with_force_secure(force_secure);
        self.profile(email, &options)
    }
}

impl Default for UrlHelpers<NoContext> {
    fn default() -> Self {
        Self::new(NoContext)
    }
}

/// Markup-producing helpers.
#[derive(Debug, Clone)]
pub struct HtmlHelpers<C> {
    context: C,
}

impl<C: RequestContext> HtmlHelpers<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn gravatar<K, V>(
        &self,
        email: &str,
        options: &AvatarOptions,
        attributes: &[(K, V)],
    ) -> Result<GravatarImage, GravatarError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        img_tag(email, options, attributes, &self.context)
    }
}

impl Default for HtmlHelpers<NoContext> {
    fn default() -> Self {
        Self::new(NoContext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestUrl;

    const EMAIL: &str = "MyEmailAddress@example.com";
    const HASH: &str = "0bc83cb571cd1c50ba6f3e8a78ef1346";

    fn secure_helpers() -> UrlHelpers<RequestUrl> {
        UrlHelpers::new(RequestUrl(url::Url::parse("https://app.example.com/team").unwrap()))
    }

    #[test]
    fn test_context_drives_scheme() {
        let options = AvatarOptions::new().with_size(80);
        let secure = secure_helpers().gravatar(EMAIL, &options).unwrap();
        let plain = UrlHelpers::new(NoContext).gravatar(EMAIL, &options).unwrap();
        assert!(secure.starts_with("https://"));
        assert!(plain.starts_with("http://"));
    }

    #[test]
    fn test_profile_formats() {
        let helpers = UrlHelpers::new(NoContext);
        assert_eq!(
            helpers.profile_json(EMAIL, false).unwrap(),
            format!("http://www.gravatar.com/{}.json", HASH)
        );
        assert!(helpers.profile_vcard(EMAIL, false).unwrap().ends_with(".vcf"));
        assert!(helpers.profile_xml(EMAIL, false).unwrap().ends_with(".xml"));
        assert!(helpers.profile_qr_code(EMAIL, true).unwrap().starts_with("https://"));
    }

    #[test]
    fn test_profile_extras() {
        let helpers = secure_helpers();
        assert_eq!(
            helpers.profile_json_with_callback(EMAIL, "render", false).unwrap(),
            format!("https://www.gravatar.com/{}.json?callback=render", HASH)
        );
        assert_eq!(
            helpers.profile_qr_code_sized(EMAIL, 200, false).unwrap(),
            format!("https://www.gravatar.com/{}.qr?s=200", HASH)
        );
    }

    #[test]
    fn test_html_helpers_without_request() {
        let helpers = HtmlHelpers::new(NoContext);
        let img = helpers
            .gravatar(EMAIL, &AvatarOptions::new().with_size(80), &[("class", "avatar")])
            .unwrap();
        assert_eq!(
            img.as_html(),
            format!(
                "<img src=\"http://www.gravatar.com/avatar/{}?s=80\" class=\"avatar\" />",
                HASH
            )
        );
    }

    #[test]
    fn test_html_helpers_propagate_errors() {
        let helpers = HtmlHelpers::new(true);
        let result = helpers.gravatar("", &AvatarOptions::new(), &[("alt", "x")]);
        assert!(matches!(result, Err(GravatarError::EmptyEmail)));
    }
}
