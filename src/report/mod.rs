//! Result records and the vocabulary downstream consumers share.

mod issues;
mod provider;
mod suffix;
mod types;

pub use issues::{detect_issues, level_for, Issue, IssueLevel, Severity};
pub use provider::{provider_tag, PROVIDER_TAGS};
pub use suffix::{decorate, display_name, suffixes_for, Suffix};
pub use types::*;
