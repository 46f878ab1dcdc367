//! Request Context - Secure Connection Signal
//!
//! The builders ask the host environment whether the current request arrived
//! over a secure transport. Callers pass the answer per call; with no host
//! request at all the answer is "not secure".

/// Capability supplied by the host web framework.
pub trait RequestContext {
    fn is_secure(&self) -> bool;
}

/// Used when building URLs outside of any request. Always non-secure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContext;

impl RequestContext for NoContext {
    fn is_secure(&self) -> bool {
        false
    }
}

impl RequestContext for bool {
    fn is_secure(&self) -> bool {
        *self
    }
}

impl<C: RequestContext + ?Sized> RequestContext for &C {
    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }
}

impl<C: RequestContext> RequestContext for Option<C> {
    fn is_secure(&self) -> bool {
        self.as_ref().map_or(false, |ctx| ctx.is_secure())
    }
}

/// Context derived from the scheme of the request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(pub url::Url);

impl RequestContext for RequestUrl {
    fn is_secure(&self) -> bool {
        self.0.scheme() == "https"
    }
}
