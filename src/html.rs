//! HTML Output - `<img>` Tags
//!
//! Attribute values are HTML-escaped with maud's `Escaper`; the finished tag
//! renders verbatim inside `html!` templates.

use maud::{Escaper, Markup, PreEscaped, Render};
use std::fmt::{self, Write};

use crate::builder::{avatar_url, GravatarError};
use crate::context::RequestContext;
use crate::options::AvatarOptions;
use crate::validation::validate_attribute_name;

/// A rendered Gravatar `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravatarImage {
    src: String,
    html: String,
}

impl GravatarImage {
    /// The unescaped image URL.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    pub fn into_markup(self) -> Markup {
        PreEscaped(self.html)
    }
}

impl Render for GravatarImage {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.html);
    }
}

impl fmt::Display for GravatarImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

fn write_attribute(tag: &mut String, name: &str, value: &str) -> fmt::Result {
    write!(tag, " {}=\"", name)?;
    Escaper::new(tag).write_str(value)?;
    tag.push('"');
    Ok(())
}

/// Render an `<img>` tag for `src` with the extra attributes in caller order.
///
/// Values are escaped; names must already be well-formed.
pub fn render_img<K, V>(src: &str, attributes: &[(K, V)]) -> Result<String, GravatarError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut tag = String::from("<img");
    // Writing into a String cannot fail.
    let _ = write_attribute(&mut tag, "src", src);
    for (name, value) in attributes {
        let name = validate_attribute_name(name.as_ref())?;
        let _ = write_attribute(&mut tag, name, value.as_ref());
    }
    tag.push_str(" />");
    Ok(tag)
}

/// Build the avatar URL and wrap it in an `<img>` tag.
///
/// Errors from the URL builder propagate unchanged. A malformed attribute
/// name fails with `GravatarError::InvalidAttributeName`.
pub fn img_tag<K, V>(
    email: &str,
    options: &AvatarOptions,
    attributes: &[(K, V)],
    ctx: &impl RequestContext,
) -> Result<GravatarImage, GravatarError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let src = avatar_url(email, options, ctx)?;
    let html = render_img(&src, attributes)?;
    Ok(GravatarImage { src, html })
}
