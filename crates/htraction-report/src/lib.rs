//! htraction-report
//!
//! Field projection over form groups, the investor report layout, Markdown
//! rendering and DOCX export.

pub mod data;
pub mod docx;
pub mod error;
pub mod format;
pub mod layout;
pub mod projector;
pub mod render;
pub mod styles;
pub mod view;

pub use data::ReportData;
pub use error::ReportError;
pub use layout::ReportLayout;
pub use projector::{Projector, Resolved};
pub use view::{ReportView, build_view};
