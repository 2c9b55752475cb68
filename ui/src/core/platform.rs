//! Platform detection and the host capabilities the report delegates to.
//!
//! The report never talks to the window directly. It asks a [`ReportPlatform`]
//! to show a notice or open the print dialog; hosts can swap the default
//! [`NativePlatform`] out by providing a [`ReportHost`] through context.

use std::rc::Rc;

use thiserror::Error;
#[cfg(not(target_arch = "wasm32"))]
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux")) {
            Self::Desktop
        } else {
            Self::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("{capability} is unavailable on the {platform} platform")]
    Unavailable {
        capability: &'static str,
        platform: &'static str,
    },
    #[error("the host rejected {0}")]
    Rejected(&'static str),
}

/// Side-effecting capabilities the report hands off to its host.
pub trait ReportPlatform {
    /// Show a transient, user-facing notice.
    fn notify(&self, message: &str) -> Result<(), PlatformError>;

    /// Open the host's native print/export dialog.
    fn print(&self) -> Result<(), PlatformError>;
}

/// Context handle carrying the platform capability into the component tree.
#[derive(Clone)]
pub struct ReportHost(pub Rc<dyn ReportPlatform>);

impl ReportHost {
    pub fn new(platform: impl ReportPlatform + 'static) -> Self {
        Self(Rc::new(platform))
    }

    pub fn native() -> Self {
        Self::new(NativePlatform)
    }

    pub fn platform(&self) -> &dyn ReportPlatform {
        self.0.as_ref()
    }
}

/// Browser alerts and `window.print()` on web; the webview equivalents on desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePlatform;

#[cfg(target_arch = "wasm32")]
impl ReportPlatform for NativePlatform {
    fn notify(&self, message: &str) -> Result<(), PlatformError> {
        browser_window("notifications")?
            .alert_with_message(message)
            .map_err(|_| PlatformError::Rejected("the alert"))
    }

    fn print(&self) -> Result<(), PlatformError> {
        browser_window("printing")?
            .print()
            .map_err(|_| PlatformError::Rejected("the print request"))
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_window(capability: &'static str) -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::Unavailable {
        capability,
        platform: Platform::current().label(),
    })
}

/// Print request for the webview; throws when no print API is exposed.
#[cfg(not(target_arch = "wasm32"))]
const PRINT_SCRIPT: &str = r#"
if (typeof window.print !== "function") {
    throw new Error("window.print is not available");
}
window.print();
return true;
"#;

#[cfg(not(target_arch = "wasm32"))]
impl ReportPlatform for NativePlatform {
    fn notify(&self, message: &str) -> Result<(), PlatformError> {
        let script = alert_script(message)?;
        run_script(&script, "notifications", || {})
    }

    fn print(&self) -> Result<(), PlatformError> {
        run_script(PRINT_SCRIPT, "printing", || {
            if let Err(err) = NativePlatform.notify(&crate::t!("notice-print-unavailable")) {
                warn!(%err, "could not report the failed print request");
            }
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert_script(message: &str) -> Result<String, PlatformError> {
    let literal =
        serde_json::to_string(message).map_err(|_| PlatformError::Rejected("the alert"))?;
    Ok(format!("alert({literal});\nreturn true;"))
}

/// Evaluate `script` in the webview and watch its outcome; `on_failure` runs if it throws.
#[cfg(not(target_arch = "wasm32"))]
fn run_script(
    script: &str,
    capability: &'static str,
    on_failure: impl FnOnce() + 'static,
) -> Result<(), PlatformError> {
    use dioxus::prelude::{current_scope_id, document, spawn};

    if current_scope_id().is_err() {
        return Err(PlatformError::Unavailable {
            capability,
            platform: Platform::current().label(),
        });
    }

    let eval = document::eval(script);
    spawn(async move {
        if let Err(err) = eval.await {
            warn!(?err, capability, "webview script failed");
            on_failure();
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_names_capability_and_platform() {
        let err = PlatformError::Unavailable {
            capability: "printing",
            platform: "web",
        };
        assert_eq!(err.to_string(), "printing is unavailable on the web platform");
    }

    #[test]
    fn native_build_reports_desktop_or_unknown() {
        assert_ne!(Platform::current(), Platform::Web);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn alert_script_quotes_the_message() {
        let script = alert_script("Say \"hi\"\n</script>").unwrap();
        assert!(script.starts_with(r#"alert("Say \"hi\"\n</script>");"#));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn print_script_fails_loudly_without_a_print_api() {
        assert!(PRINT_SCRIPT.contains("throw new Error"));
        assert!(PRINT_SCRIPT.contains("window.print();"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn webview_capabilities_need_a_running_report() {
        let platform = Platform::current().label();
        assert_eq!(
            NativePlatform.print(),
            Err(PlatformError::Unavailable {
                capability: "printing",
                platform,
            })
        );
        assert_eq!(
            NativePlatform.notify("Report saved successfully!"),
            Err(PlatformError::Unavailable {
                capability: "notifications",
                platform,
            })
        );
    }
}
