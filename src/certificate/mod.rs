//! Course certificates
//!
//! Eligibility is derived from lesson progress, certificates are issued
//! through a [`CertificateIssuer`] and claimed over HTTP, and issued
//! certificates are rendered as an A4 landscape PDF.
//!
//! The view models ([`CertificateCard`], [`EligibilityCard`],
//! [`VerifyPage`]) hold display strings and drive their side effects through
//! small traits so the flows can be exercised without a browser.

mod api;
mod card;
mod document;
mod eligibility;
mod issuance;
mod page;
mod pdf;
mod requirements;
mod store;
mod types;
mod verify;

pub use api::{CertificateApi, HttpCertificateApi, CLAIM_PATH};
pub use card::{
    certificate_filename, verification_url, CardState, CertificateCard, DownloadSink, FileSink,
    ShareData, ShareOutcome, ShareTarget, TrackCertificateCard,
};
pub use document::{CertificateDocument, FooterColumn, TextLine, Tone, PAGE_HEIGHT, PAGE_WIDTH};
pub use eligibility::{
    CardAction, ClaimOutcome, ClaimState, EligibilityCard, PageRefresher, TrackEligibilityCard,
    TrackRow, EARNED_LABEL, LOCKED_MESSAGE,
};
pub use issuance::{
    certificate_slug, certificate_title, generate_certificate_number, handle_claim,
    not_eligible_message, track_certificate_slug, track_certificate_title,
    track_not_eligible_message, CertificateIssuer, ClaimRequest, ClaimResponse, UserIdentity,
    DEFAULT_USER_NAME,
};
pub use page::{load_certificates_page, CertificatesPage, StoreRefresher, SIGN_IN_REDIRECT};
pub use pdf::{render_pdf, PdfError};
pub use requirements::{
    compute_eligibility, compute_track_eligibility, track_completion_status, IssuedCertificates,
    LessonProgress, LessonStatus, PlatformRequirements, Requirements, TrackStatus, UserProgress,
};
pub use store::{CertificateStore, InMemoryCertificateStore};
pub use types::{
    format_date_gb, format_date_us, format_duration, format_hours, format_platform_name,
    format_track_hours, format_track_name, AnyCertificate, Certificate, CertificateEligibility,
    CertificateMetadata, Platform, Progress, Track, TrackCertificate, TrackCertificateEligibility,
    TrackCertificateMetadata,
};
pub use verify::{VerifyPage, NOT_FOUND_TITLE};

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Errors from certificate issuance, claiming and rendering
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Invalid platform '{0}' (expected web, ios or android)")]
    InvalidPlatform(String),

    #[error("Invalid track '{0}' (expected design, engineering or convergence)")]
    InvalidTrack(String),

    /// The student has not finished the required lessons
    #[error("{0}")]
    NotEligible(String),

    #[error("Unauthorized")]
    Unauthorized,
}
