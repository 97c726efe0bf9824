//! Certificate records, eligibility views and their display strings

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CertificateError;

/// Platform a certificate is issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Web, Platform::Ios, Platform::Android];

    pub fn id(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Display name: `Web`, `iOS`, `Android`
    pub fn name(self) -> &'static str {
        match self {
            Platform::Web => "Web",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }

    /// `"{Platform} Design Engineer"`
    pub fn title(self) -> String {
        format!("{} Design Engineer", self.name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = CertificateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| CertificateError::InvalidPlatform(s.to_string()))
    }
}

/// Course track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    Design,
    Engineering,
    Convergence,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Design, Track::Engineering, Track::Convergence];

    pub fn id(self) -> &'static str {
        match self {
            Track::Design => "design",
            Track::Engineering => "engineering",
            Track::Convergence => "convergence",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Track::Design => "Design",
            Track::Engineering => "Engineering",
            Track::Convergence => "Convergence",
        }
    }

    /// Heading used on the printed certificate
    pub fn title(self) -> &'static str {
        match self {
            Track::Design => "Design Track",
            Track::Engineering => "Engineering Track",
            Track::Convergence => "Convergence Track",
        }
    }

    /// Shorter heading used on cards, filenames and issuance messages
    pub fn card_title(self) -> &'static str {
        match self {
            Track::Design => "Design Track",
            Track::Engineering => "Engineering Track",
            Track::Convergence => "Convergence",
        }
    }

    /// What completing the track demonstrates
    pub fn description(self) -> &'static str {
        match self {
            Track::Design => "mastering visual design principles and creating beautiful interfaces",
            Track::Engineering => "building robust, performant, and accessible applications",
            Track::Convergence => "bridging design and development with a holistic approach",
        }
    }

    /// First path segment of this track's lessons
    pub fn lesson_dir(self) -> &'static str {
        match self {
            Track::Design => "design-track",
            Track::Engineering => "engineering-track",
            Track::Convergence => "convergence",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Track {
    type Err = CertificateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| CertificateError::InvalidTrack(s.to_string()))
    }
}

pub fn format_platform_name(platform: Platform) -> &'static str {
    platform.name()
}

pub fn format_track_name(track: Track) -> &'static str {
    track.name()
}

/// Master certificate metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateMetadata {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub platform: Platform,
    pub issued_at: NaiveDate,
    pub certificate_number: String,
    pub design_completed_at: String,
    pub engineering_completed_at: String,
    pub convergence_completed_at: String,
    pub total_time_spent_seconds: u64,
}

/// Certificate for completing all three tracks of a platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub created_at: String,
    pub metadata: CertificateMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCertificateMetadata {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub platform: Platform,
    pub track: Track,
    pub issued_at: NaiveDate,
    pub certificate_number: String,
    pub completed_at: String,
    pub total_time_spent_seconds: u64,
}

/// Certificate for completing a single track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCertificate {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub created_at: String,
    pub metadata: TrackCertificateMetadata,
}

/// Either kind of certificate, as read from a record of unknown kind
///
/// Track certificates are tried first since only they carry `track`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyCertificate {
    Track(TrackCertificate),
    Master(Certificate),
}

impl AnyCertificate {
    pub fn slug(&self) -> &str {
        match self {
            AnyCertificate::Track(c) => &c.slug,
            AnyCertificate::Master(c) => &c.slug,
        }
    }

    pub fn user_name(&self) -> &str {
        match self {
            AnyCertificate::Track(c) => &c.metadata.user_name,
            AnyCertificate::Master(c) => &c.metadata.user_name,
        }
    }

    /// Title used in share text, e.g. `Web Design Engineer`
    pub fn display_title(&self) -> String {
        match self {
            AnyCertificate::Track(c) => format!("{} {}", c.metadata.platform.name(), c.metadata.track.card_title()),
            AnyCertificate::Master(c) => c.metadata.platform.title(),
        }
    }
}

/// Completed and required lesson counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
}

impl Progress {
    pub fn new(completed: u32, total: u32) -> Self {
        Self { completed, total }
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// Master certificate eligibility for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateEligibility {
    pub platform: Platform,
    pub eligible: bool,
    pub design_complete: bool,
    pub engineering_complete: bool,
    pub convergence_complete: bool,
    pub design_progress: Progress,
    pub engineering_progress: Progress,
    pub convergence_progress: Progress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_certificate: Option<TrackCertificate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering_certificate: Option<TrackCertificate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence_certificate: Option<TrackCertificate>,
}

impl CertificateEligibility {
    pub fn progress(&self, track: Track) -> Progress {
        match track {
            Track::Design => self.design_progress,
            Track::Engineering => self.engineering_progress,
            Track::Convergence => self.convergence_progress,
        }
    }

    pub fn is_complete(&self, track: Track) -> bool {
        match track {
            Track::Design => self.design_complete,
            Track::Engineering => self.engineering_complete,
            Track::Convergence => self.convergence_complete,
        }
    }

    pub fn track_certificate(&self, track: Track) -> Option<&TrackCertificate> {
        match track {
            Track::Design => self.design_certificate.as_ref(),
            Track::Engineering => self.engineering_certificate.as_ref(),
            Track::Convergence => self.convergence_certificate.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCertificateEligibility {
    pub platform: Platform,
    pub track: Track,
    pub eligible: bool,
    pub progress: Progress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<TrackCertificate>,
}

/// `January 5, 2025`
pub fn format_date_us(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `5 January 2025`
pub fn format_date_gb(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Whole hours, as printed on master certificates
pub fn format_hours(seconds: u64) -> String {
    format!("{} hours", seconds / 3600)
}

/// Whole hours with a floor message, as printed on track certificates
pub fn format_track_hours(seconds: u64) -> String {
    match seconds / 3600 {
        0 => "< 1 hour".to_string(),
        hours => format!("{hours} hours"),
    }
}

/// Hours and minutes, as shown on the verification page
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
