//! Certificate issuance: numbers, slugs, titles and the claim endpoint

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::types::{Certificate, Platform, Progress, Track, TrackCertificate};
use super::CertificateError;

/// Name used when the account has neither a full nor a first name
pub const DEFAULT_USER_NAME: &str = "Student";

/// The signed-in account claiming a certificate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
}

impl UserIdentity {
    pub fn display_name(&self) -> &str {
        [&self.full_name, &self.first_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|n| !n.is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }

    pub fn primary_email(&self) -> &str {
        self.emails.first().map(String::as_str).unwrap_or_default()
    }
}

/// Render a number in upper-case base 36
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

const ALPHANUMERIC: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// `len` random alphanumeric characters
///
/// Drawn from v4 UUID bytes, skipping the version and variant bytes.
fn random_suffix(len: usize) -> String {
    let mut out = String::with_capacity(len);
    while out.len() < len {
        let bytes = Uuid::new_v4().into_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            if i == 6 || i == 8 {
                continue;
            }
            if out.len() == len {
                break;
            }
            out.push(ALPHANUMERIC[*byte as usize % ALPHANUMERIC.len()] as char);
        }
    }
    out
}

/// `DE-{base36 milliseconds}-{6 random}`, all upper case
pub fn generate_certificate_number(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    format!("DE-{}-{}", to_base36(millis), random_suffix(6).to_uppercase())
}

pub fn certificate_slug(platform: Platform, user_id: &str) -> String {
    format!("cert-{}-{}-{}", platform.id(), user_id, random_suffix(8)).to_lowercase()
}

pub fn track_certificate_slug(platform: Platform, track: Track, user_id: &str) -> String {
    format!("cert-{}-{}-{}-{}", platform.id(), track.id(), user_id, random_suffix(8)).to_lowercase()
}

pub fn certificate_title(platform: Platform, user_name: &str) -> String {
    format!("{} Design Engineer Certificate - {}", platform.name(), user_name)
}

pub fn track_certificate_title(platform: Platform, track: Track, user_name: &str) -> String {
    format!("{} {} Track Certificate - {}", platform.name(), track.name(), user_name)
}

pub fn not_eligible_message(platform: Platform) -> String {
    format!(
        "Complete all three tracks (Design, Engineering, and Convergence) to earn your {} Design Engineer certificate.",
        platform.id()
    )
}

pub fn track_not_eligible_message(track: Track, progress: Progress) -> String {
    format!(
        "Complete all lessons in the {} to earn your certificate. Progress: {}/{} lessons.",
        track.card_title(),
        progress.completed,
        progress.total
    )
}

/// Issues certificates; an existing certificate is returned instead of a new one
#[async_trait]
pub trait CertificateIssuer: Send + Sync {
    async fn issue_certificate(&self, user: &UserIdentity, platform: Platform) -> Result<Certificate, CertificateError>;

    async fn issue_track_certificate(
        &self,
        user: &UserIdentity,
        platform: Platform,
        track: Track,
    ) -> Result<TrackCertificate, CertificateError>;
}

/// JSON body of a claim request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<Track>,
}

/// Status code and JSON body produced by [`handle_claim`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimResponse {
    pub status: u16,
    pub body: Value,
}

impl ClaimResponse {
    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    fn created(certificate: impl Serialize) -> Self {
        match serde_json::to_value(certificate) {
            Ok(certificate) => Self {
                status: 201,
                body: json!({ "certificate": certificate }),
            },
            Err(e) => Self::error(500, e.to_string()),
        }
    }
}

/// Handle `POST /api/course/certificate`
///
/// 401 without a user, 400 for an unknown platform or track or when the
/// student is not eligible, 201 with the (possibly pre-existing) certificate
/// otherwise.
pub async fn handle_claim<I>(issuer: &I, user: Option<&UserIdentity>, body: &Value) -> ClaimResponse
where
    I: CertificateIssuer + ?Sized,
{
    let Some(user) = user else {
        return ClaimResponse::error(401, "Unauthorized");
    };
    let Some(platform) = body
        .get("platform")
        .and_then(Value::as_str)
        .and_then(|p| p.parse::<Platform>().ok())
    else {
        return ClaimResponse::error(400, "Invalid platform");
    };

    let result = match body.get("track").filter(|t| !t.is_null()) {
        Some(track) => {
            let Some(track) = track.as_str().and_then(|t| t.parse::<Track>().ok()) else {
                return ClaimResponse::error(400, "Invalid track");
            };
            issuer
                .issue_track_certificate(user, platform, track)
                .await
                .map(ClaimResponse::created)
        }
        None => issuer
            .issue_certificate(user, platform)
            .await
            .map(ClaimResponse::created),
    };

    result.unwrap_or_else(|e| {
        tracing::error!(user = %user.id, %platform, error = %e, "Error issuing certificate");
        ClaimResponse::error(400, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_736_071_200_000), "M5JFYV40");
    }

    #[test]
    fn test_random_suffix_uses_full_alphabet() {
        assert_eq!(random_suffix(0), "");
        assert_eq!(random_suffix(30).len(), 30);
        let sample: String = (0..50).map(|_| random_suffix(8)).collect();
        assert!(sample.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| matches!(c, 'g'..='z')));
    }

    #[test]
    fn test_certificate_number_shape() {
        let now = Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap();
        let number = generate_certificate_number(now);
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "DE");
        assert_eq!(parts[1], to_base36(now.timestamp_millis() as u64));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_slugs_are_lowercase() {
        let slug = certificate_slug(Platform::Ios, "User_ABC");
        assert!(slug.starts_with("cert-ios-user_abc-"));
        assert_eq!(slug.len(), "cert-ios-user_abc-".len() + 8);
        let slug = track_certificate_slug(Platform::Web, Track::Design, "u1");
        assert!(slug.starts_with("cert-web-design-u1-"));
        assert_eq!(slug, slug.to_lowercase());
    }

    #[test]
    fn test_titles_and_messages() {
        assert_eq!(certificate_title(Platform::Ios, "Ada"), "iOS Design Engineer Certificate - Ada");
        assert_eq!(
            track_certificate_title(Platform::Android, Track::Convergence, "Ada"),
            "Android Convergence Track Certificate - Ada"
        );
        assert_eq!(
            track_not_eligible_message(Track::Convergence, Progress::new(2, 5)),
            "Complete all lessons in the Convergence to earn your certificate. Progress: 2/5 lessons."
        );
        assert!(not_eligible_message(Platform::Web).ends_with("earn your web Design Engineer certificate."));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = UserIdentity {
            id: "u1".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Student");
        assert_eq!(user.primary_email(), "");
        user.first_name = Some("Ada".into());
        assert_eq!(user.display_name(), "Ada");
        user.full_name = Some("Ada Lovelace".into());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }
}
