//! Full-page navigation to the identity service.

/// Navigate the browser to the address `build` derives from the current one.
/// No-op outside the browser.
pub(crate) fn redirect_to(build: impl FnOnce(&str) -> String) {
    #[cfg(feature = "csr")]
    {
        use crate::util::environment::{BrowserEnvironment, EnvironmentReader};

        let here = BrowserEnvironment.href().unwrap_or_default();
        let target = build(&here);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&target);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = build;
    }
}

/// Replace the current history entry with `path` on this origin.
/// Does nothing when the browser is already there.
pub(crate) fn replace_with_path(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().is_ok_and(|current| current == path) {
                return;
            }
            let _ = location.replace(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
