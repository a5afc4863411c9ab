use crate::prediction::PredictionResult;
use std::fmt::Display;
use strum_macros::{Display as StrumDisplay, EnumString};

/// Which completed request is allowed to update the popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, StrumDisplay)]
pub enum RenderPolicy {
    /// Every completion renders; the last one to resolve wins.
    #[default]
    #[strum(serialize = "last-resolved")]
    LastResolved,
    /// Only the most recently issued request renders.
    #[strum(serialize = "latest-issued")]
    LatestIssued,
}

/// Hands out monotonically increasing request numbers.
#[derive(Debug, Default, Clone)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn should_render(&self, policy: RenderPolicy, seq: u64) -> bool {
        match policy {
            RenderPolicy::LastResolved => true,
            RenderPolicy::LatestIssued => seq == self.latest,
        }
    }
}

/// State behind the result popup and the error banner.
///
/// Every mutating method returns whether the view needs re-rendering.
#[derive(Debug, Default, Clone)]
pub struct PredictionDisplay {
    policy: RenderPolicy,
    sequencer: RequestSequencer,
    result_text: String,
    confidence_text: String,
    popup_visible: bool,
    error: Option<String>,
}

impl PredictionDisplay {
    pub fn new(policy: RenderPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Registers a new submission and returns its sequence number.
    pub fn begin_submission(&mut self) -> u64 {
        self.error = None;
        self.sequencer.issue()
    }

    /// Applies the outcome of request `seq`. Stale outcomes are dropped when
    /// the policy says so.
    pub fn apply<E: Display>(&mut self, seq: u64, outcome: Result<PredictionResult, E>) -> bool {
        if !self.sequencer.should_render(self.policy, seq) {
            log::warn!(
                "Dropping response #{} superseded by #{}",
                seq,
                self.sequencer.latest()
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result_text = result.severity_text();
                self.confidence_text = result.confidence_text();
                self.popup_visible = true;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.popup_visible;
        self.popup_visible = false;
        was_visible
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn confidence_text(&self) -> &str {
        &self.confidence_text
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
