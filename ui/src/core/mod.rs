//! Report data model and host-facing helpers shared by every view.

pub mod category;
pub mod format;
pub mod platform;
pub mod responses;
pub mod scores;

pub use category::{Category, UnknownCategory};
pub use platform::{NativePlatform, PlatformError, ReportHost, ReportPlatform};
pub use responses::{fallback_responses, resolve_responses, ResponseEntry};
pub use scores::{ScoreMap, ScoreOverrides};
