//! Deployment classification and access to the page address and cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The staging gate and token capture both need the current address, and
//! token capture also needs to rewrite it. Those reads go through
//! [`EnvironmentReader`] so the flows can run against [`StaticEnvironment`]
//! outside a browser.

#[cfg(test)]
#[path = "environment_test.rs"]
mod environment_test;

use std::cell::{Cell, RefCell};

use url::{Url, form_urlencoded};

/// Host-name fragments that mark a non-production deployment: the preview
/// host suffix, a `staging.` prefix, and loopback names.
pub const RESTRICTED_HOST_MARKERS: &[&str] = &[".pages.dev", "staging.", "localhost", "127.0.0.1"];

/// True when `host` belongs to a restricted (staging) deployment.
pub fn is_restricted_host(host: &str) -> bool {
    RESTRICTED_HOST_MARKERS.iter().any(|marker| host.contains(marker))
}

/// Host name portion of an absolute address.
pub fn host_name(href: &str) -> Option<String> {
    Url::parse(href).ok()?.host_str().map(str::to_owned)
}

/// Scheme, host and port of an absolute address, e.g. `https://ironforged.gg`.
pub fn origin(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.has_host().then(|| url.origin().ascii_serialization())
}

/// First value of query parameter `name` in `href`.
pub fn query_value(href: &str, name: &str) -> Option<String> {
    Url::parse(href)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// `href` with every `name` query parameter removed, or `None` when there was
/// nothing to remove. Other parameters keep their exact original spelling.
pub fn without_query_param(href: &str, name: &str) -> Option<String> {
    let mut url = Url::parse(href).ok()?;
    let query = url.query()?.to_owned();
    let segments: Vec<&str> = query.split('&').collect();
    let kept: Vec<&str> = segments
        .iter()
        .copied()
        .filter(|segment| !segment_has_key(segment, name))
        .collect();
    if kept.len() == segments.len() {
        return None;
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&kept.join("&")));
    }
    Some(url.into())
}

fn segment_has_key(segment: &str, name: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == name)
}

/// Value of cookie `name` in a `document.cookie` style header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
}

/// Read access to the page address and cookies, plus address rewriting.
pub trait EnvironmentReader {
    /// Full current address, if one is known.
    fn href(&self) -> Option<String>;

    /// Replace the visible address without navigating or adding history.
    fn replace_href(&self, href: &str);

    /// Raw cookie header visible to scripts.
    fn cookie_header(&self) -> Option<String>;

    /// Classify the current deployment. Evaluated fresh on every call.
    ///
    /// An unknown address is treated as restricted so protected content is
    /// never rendered when the host cannot be established.
    fn is_restricted(&self) -> bool {
        self.href()
            .as_deref()
            .and_then(host_name)
            .map_or(true, |host| is_restricted_host(&host))
    }
}

/// Live browser environment backed by `window.location`, `window.history`
/// and `document.cookie`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

#[cfg(feature = "csr")]
impl EnvironmentReader for BrowserEnvironment {
    fn href(&self) -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    fn replace_href(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href));
    }

    fn cookie_header(&self) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        html.cookie().ok()
    }
}

/// In-memory environment for non-browser builds and tests.
#[derive(Debug, Default)]
pub struct StaticEnvironment {
    href: RefCell<Option<String>>,
    cookie: Option<String>,
    rewrites: Cell<usize>,
}

impl StaticEnvironment {
    pub fn new(href: &str) -> Self {
        Self { href: RefCell::new(Some(href.to_owned())), ..Self::default() }
    }

    #[must_use]
    pub fn with_cookie(mut self, header: &str) -> Self {
        self.cookie = Some(header.to_owned());
        self
    }

    /// Number of times the address has been rewritten.
    pub fn rewrites(&self) -> usize {
        self.rewrites.get()
    }
}

impl EnvironmentReader for StaticEnvironment {
    fn href(&self) -> Option<String> {
        self.href.borrow().clone()
    }

    fn replace_href(&self, href: &str) {
        *self.href.borrow_mut() = Some(href.to_owned());
        self.rewrites.set(self.rewrites.get() + 1);
    }

    fn cookie_header(&self) -> Option<String> {
        self.cookie.clone()
    }
}
