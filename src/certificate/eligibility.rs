//! Eligibility cards and the claim flow

use async_trait::async_trait;

use super::api::CertificateApi;
use super::issuance::ClaimRequest;
use super::types::{
    AnyCertificate, CertificateEligibility, Platform, Progress, Track, TrackCertificateEligibility,
};

pub const EARNED_LABEL: &str = "\u{2713} Certificate earned";
pub const LOCKED_MESSAGE: &str = "Complete all tracks to earn this certificate";

/// Reloads the data behind the certificates page
#[async_trait]
pub trait PageRefresher: Send + Sync {
    async fn refresh(&self);
}

/// Whether a claim request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimState {
    #[default]
    Idle,
    Claiming,
}

/// What the card offers below its track rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Earned,
    Claim { label: &'static str, disabled: bool },
    Locked(&'static str),
}

#[derive(Debug, Clone)]
pub enum ClaimOutcome {
    /// Nothing to claim, or a claim is already in flight
    Ignored,
    Claimed(AnyCertificate),
    Failed(String),
}

/// One track's progress line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRow {
    pub name: &'static str,
    pub complete: bool,
    pub progress: Progress,
}

impl TrackRow {
    /// `completed/total`
    pub fn progress_label(&self) -> String {
        self.progress.to_string()
    }
}

fn claim_action(state: ClaimState) -> CardAction {
    match state {
        ClaimState::Idle => CardAction::Claim {
            label: "Claim Certificate",
            disabled: false,
        },
        ClaimState::Claiming => CardAction::Claim {
            label: "Claiming...",
            disabled: true,
        },
    }
}

/// POST the claim, then refresh once whatever the result
async fn run_claim(api: &dyn CertificateApi, refresher: &dyn PageRefresher, request: &ClaimRequest) -> ClaimOutcome {
    let result = api.claim(request).await;
    refresher.refresh().await;
    match result {
        Ok(certificate) => {
            tracing::info!(slug = certificate.slug(), "claimed certificate");
            ClaimOutcome::Claimed(certificate)
        }
        Err(e) => {
            tracing::error!(platform = %request.platform, track = ?request.track, error = %e, "Error claiming certificate");
            ClaimOutcome::Failed(e.to_string())
        }
    }
}

/// Master certificate eligibility for one platform
#[derive(Debug, Clone)]
pub struct EligibilityCard {
    eligibility: CertificateEligibility,
    state: ClaimState,
}

impl EligibilityCard {
    pub fn new(eligibility: CertificateEligibility) -> Self {
        Self {
            eligibility,
            state: ClaimState::Idle,
        }
    }

    pub fn eligibility(&self) -> &CertificateEligibility {
        &self.eligibility
    }

    pub fn platform(&self) -> Platform {
        self.eligibility.platform
    }

    pub fn title(&self) -> String {
        self.eligibility.platform.title()
    }

    pub fn state(&self) -> ClaimState {
        self.state
    }

    pub fn is_earned(&self) -> bool {
        self.eligibility.certificate.is_some()
    }

    pub fn tracks(&self) -> [TrackRow; 3] {
        Track::ALL.map(|track| TrackRow {
            name: track.title(),
            complete: self.eligibility.is_complete(track),
            progress: self.eligibility.progress(track),
        })
    }

    pub fn action(&self) -> CardAction {
        if self.is_earned() {
            CardAction::Earned
        } else if self.eligibility.eligible {
            claim_action(self.state)
        } else {
            CardAction::Locked(LOCKED_MESSAGE)
        }
    }

    /// Enter the claiming state, returning the request to send
    ///
    /// `None` while a claim is in flight or when there is nothing to claim.
    pub fn begin_claim(&mut self) -> Option<ClaimRequest> {
        if self.state == ClaimState::Claiming || !self.eligibility.eligible || self.is_earned() {
            return None;
        }
        self.state = ClaimState::Claiming;
        Some(ClaimRequest {
            platform: self.eligibility.platform,
            track: None,
        })
    }

    pub fn finish_claim(&mut self) {
        self.state = ClaimState::Idle;
    }

    pub async fn claim(&mut self, api: &dyn CertificateApi, refresher: &dyn PageRefresher) -> ClaimOutcome {
        let Some(request) = self.begin_claim() else {
            return ClaimOutcome::Ignored;
        };
        let outcome = run_claim(api, refresher, &request).await;
        self.finish_claim();
        outcome
    }
}

/// Eligibility for a single track certificate
#[derive(Debug, Clone)]
pub struct TrackEligibilityCard {
    eligibility: TrackCertificateEligibility,
    state: ClaimState,
}

impl TrackEligibilityCard {
    pub fn new(eligibility: TrackCertificateEligibility) -> Self {
        Self {
            eligibility,
            state: ClaimState::Idle,
        }
    }

    pub fn eligibility(&self) -> &TrackCertificateEligibility {
        &self.eligibility
    }

    /// `Web Design Track`
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            self.eligibility.platform.name(),
            self.eligibility.track.card_title()
        )
    }

    pub fn state(&self) -> ClaimState {
        self.state
    }

    pub fn row(&self) -> TrackRow {
        TrackRow {
            name: self.eligibility.track.title(),
            complete: self.eligibility.eligible,
            progress: self.eligibility.progress,
        }
    }

    pub fn action(&self) -> CardAction {
        if self.eligibility.certificate.is_some() {
            CardAction::Earned
        } else if self.eligibility.eligible {
            claim_action(self.state)
        } else {
            CardAction::Locked(LOCKED_MESSAGE)
        }
    }

    pub fn begin_claim(&mut self) -> Option<ClaimRequest> {
        if self.state == ClaimState::Claiming || !matches!(self.action(), CardAction::Claim { .. }) {
            return None;
        }
        self.state = ClaimState::Claiming;
        Some(ClaimRequest {
            platform: self.eligibility.platform,
            track: Some(self.eligibility.track),
        })
    }

    pub fn finish_claim(&mut self) {
        self.state = ClaimState::Idle;
    }

    pub async fn claim(&mut self, api: &dyn CertificateApi, refresher: &dyn PageRefresher) -> ClaimOutcome {
        let Some(request) = self.begin_claim() else {
            return ClaimOutcome::Ignored;
        };
        let outcome = run_claim(api, refresher, &request).await;
        self.finish_claim();
        outcome
    }
}
