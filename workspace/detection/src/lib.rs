//! Form state and result presentation for the anomaly detection page.
//!
//! Nothing in here knows about HTTP libraries or widgets. Each surface (CLI,
//! server, wasm frontend) plugs in its own transport and renders the
//! [`presenter::Presentation`] its own way.

pub mod client;
pub mod error;
pub mod form;
pub mod locale;
pub mod presenter;
pub mod view;

pub use client::{decode_response, DetectionClient};
pub use error::{DetectionError, Result};
pub use form::{parse_float, FormField, FormState};
pub use locale::{Locale, UnknownLocale};
pub use view::{Completion, DetectionView, SubmitTicket};
