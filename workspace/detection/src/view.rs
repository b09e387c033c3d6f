//! State of one detection page: the form, the busy flag, and the outcome of
//! the last submission.
//!
//! A submission is split into [`DetectionView::begin_submit`] and
//! [`DetectionView::complete`] so that callers who own their own async
//! runtime (the wasm frontend) can drive it, while [`DetectionView::submit`]
//! runs the whole round trip against a [`DetectionClient`].
//!
//! Concurrent submissions resolve as latest-wins: every ticket carries a
//! generation number and outcomes for anything but the newest generation are
//! dropped without touching the state.

use common::{AnomalyResponse, DetectionRequest};
use tracing::{debug, error, info, instrument};

use crate::client::DetectionClient;
use crate::error::Result;
use crate::form::{FormField, FormState};
use crate::locale::Locale;

/// Handed out by [`DetectionView::begin_submit`]; pass the generation back to
/// [`DetectionView::complete`] together with the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub request: DetectionRequest,
}

/// What [`DetectionView::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the stored one
    Applied,
    /// The failure message was stored; the previous response was kept
    Failed,
    /// A newer submission is in flight, the outcome was dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetectionView {
    form: FormState,
    busy: bool,
    response: Option<AnomalyResponse>,
    error: Option<String>,
    generation: u64,
    locale: Locale,
}

impl DetectionView {
    pub fn new(locale: Locale) -> Self {
        Self { locale, ..Default::default() }
    }

    pub fn with_form(form: FormState, locale: Locale) -> Self {
        Self { form, locale, ..Default::default() }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last successfully received response, if any.
    pub fn response(&self) -> Option<&AnomalyResponse> {
        self.response.as_ref()
    }

    /// Localized failure message of the last submission, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn update_field(&mut self, field: FormField, raw: impl Into<String>) {
        self.form.update_field(field, raw);
    }

    /// Marks the view busy, clears the previous error and builds the request.
    pub fn begin_submit(&mut self) -> SubmitTicket {
        self.busy = true;
        self.error = None;
        self.generation += 1;

        let request = self.form.to_request();
        info!(generation = self.generation, ?request, "Submitting detection request");

        SubmitTicket { generation: self.generation, request }
    }

    /// Applies the outcome of a submission.
    ///
    /// Clears the busy flag as its last step for every outcome of the newest
    /// generation.
    pub fn complete(&mut self, generation: u64, outcome: Result<AnomalyResponse>) -> Completion {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "Dropping stale detection outcome");
            return Completion::Stale;
        }

        let completion = match outcome {
            Ok(response) => {
                info!(
                    generation,
                    anomaly_detected = response.anomaly_detected,
                    has_chart = response.chart.is_some(),
                    "Detection succeeded"
                );
                self.response = Some(response);
                self.error = None;
                Completion::Applied
            }
            Err(err) => {
                error!(generation, %err, "Detection failed");
                self.error = Some(self.locale.connection_error().to_string());
                Completion::Failed
            }
        };

        self.busy = false;
        completion
    }

    /// Runs one full submission against `client`.
    #[instrument(skip_all)]
    pub async fn submit<C>(&mut self, client: &C) -> Completion
    where
        C: DetectionClient + ?Sized,
    {
        let ticket = self.begin_submit();
        let outcome = client.detect(&ticket.request).await;
        self.complete(ticket.generation, outcome)
    }
}
