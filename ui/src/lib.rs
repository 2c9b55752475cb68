//! Shared UI crate for Wellspring. The report component and everything it renders live here.

pub mod core;
pub mod i18n;
pub mod report;
pub mod views;

pub use views::Report;
