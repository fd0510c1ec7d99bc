//! # siteforms
//!
//! Contact and newsletter form handling for the marketing site.
//!
//! - [`siteforms_validate`] holds the rule tables and pure validators.
//! - [`controller`] tracks edits, touched fields and gates submission.
//! - [`submit`] is the boundary a validated record is handed to.
//! - [`config`] loads contact form limits from `SITEFORMS_*` variables.
//!
//! ## Quick Start
//!
//! ```rust
//! use siteforms::prelude::*;
//!
//! let mut form = NewsletterForm::new(NewsletterRecord::default());
//! form.change(|r| r.email = "reader@example.com".to_string());
//! form.blur("email");
//!
//! let outcome = form.submit(&AlertSubmitter::new()).unwrap();
//! assert!(outcome.is_submitted());
//! ```

pub mod config;
pub mod controller;
pub mod submit;

// Re-export the validation core
pub use siteforms_validate::*;

pub use config::{load_dotenv, load_limits, Config, ConfigError, LimitsFromEnv};
pub use controller::{ContactForm, FormController, NewsletterForm, SubmitOutcome};
pub use submit::{AlertSubmitter, Receipt, SubmitError, Submitter};

/// Prelude module for form handling
pub mod prelude {
    pub use crate::config::{load_dotenv, load_limits, ConfigError, LimitsFromEnv};
    pub use crate::controller::{ContactForm, FormController, NewsletterForm, SubmitOutcome};
    pub use crate::submit::{AlertSubmitter, Receipt, SubmitError, Submitter};
    pub use siteforms_validate::prelude::*;
}
