//! Public verification page for an issued certificate

use chrono::NaiveDate;

use crate::clipboard::{Clipboard, ClipboardError};

use super::card::verification_url;
use super::requirements::Requirements;
use super::store::InMemoryCertificateStore;
use super::types::{format_date_us, format_duration, AnyCertificate, Platform};

/// Title used when no certificate matches the slug
pub const NOT_FOUND_TITLE: &str = "Certificate Not Found";

/// Everything the verification page shows about one certificate
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyPage {
    certificate: AnyCertificate,
    url: String,
    total_lessons: u32,
}

impl VerifyPage {
    pub fn new(certificate: AnyCertificate, origin: &str, requirements: &Requirements) -> Self {
        let total_lessons = match &certificate {
            AnyCertificate::Master(c) => requirements.total_lessons(c.metadata.platform),
            AnyCertificate::Track(c) => requirements.platform(c.metadata.platform).for_track(c.metadata.track),
        };
        let url = verification_url(origin, certificate.slug());
        Self {
            certificate,
            url,
            total_lessons,
        }
    }

    /// Look the slug up; `None` renders the not-found page
    pub async fn load(store: &InMemoryCertificateStore, slug: &str, origin: &str) -> Option<Self> {
        let certificate = store.get_certificate_by_slug(slug).await;
        if certificate.is_none() {
            tracing::debug!(slug, "no certificate for slug");
        }
        certificate.map(|c| Self::new(c, origin, store.requirements()))
    }

    /// Document title, or [`NOT_FOUND_TITLE`]
    pub fn page_title(page: Option<&Self>) -> String {
        match page {
            Some(page) => format!(
                "{} - {} | Design Engineer",
                page.certificate.user_name(),
                page.certificate.display_title()
            ),
            None => NOT_FOUND_TITLE.to_string(),
        }
    }

    pub fn meta_description(&self) -> String {
        format!("Verify {}'s Design Engineer certificate", self.certificate.user_name())
    }

    pub fn certificate(&self) -> &AnyCertificate {
        &self.certificate
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_name(&self) -> &str {
        self.certificate.user_name()
    }

    pub fn title(&self) -> String {
        self.certificate.display_title()
    }

    pub fn platform(&self) -> Platform {
        match &self.certificate {
            AnyCertificate::Master(c) => c.metadata.platform,
            AnyCertificate::Track(c) => c.metadata.platform,
        }
    }

    fn issued_at(&self) -> NaiveDate {
        match &self.certificate {
            AnyCertificate::Master(c) => c.metadata.issued_at,
            AnyCertificate::Track(c) => c.metadata.issued_at,
        }
    }

    pub fn issued_date(&self) -> String {
        format_date_us(self.issued_at())
    }

    /// `3h 25m` or `42m`
    pub fn time_invested(&self) -> String {
        let seconds = match &self.certificate {
            AnyCertificate::Master(c) => c.metadata.total_time_spent_seconds,
            AnyCertificate::Track(c) => c.metadata.total_time_spent_seconds,
        };
        format_duration(seconds)
    }

    pub fn lessons_completed(&self) -> String {
        format!("{} lessons", self.total_lessons)
    }

    pub fn certificate_number(&self) -> String {
        let number = match &self.certificate {
            AnyCertificate::Master(c) => &c.metadata.certificate_number,
            AnyCertificate::Track(c) => &c.metadata.certificate_number,
        };
        format!("Certificate #{number}")
    }

    pub fn share_title(&self) -> String {
        format!("{}'s {} Certificate", self.user_name(), self.title())
    }

    pub fn share_text(&self) -> String {
        format!("I earned my {} certificate from the Design Engineer Course!", self.title())
    }

    pub fn linkedin_url(&self) -> String {
        format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            urlencoding::encode(&self.url)
        )
    }

    pub fn twitter_url(&self) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(&self.share_text()),
            urlencoding::encode(&self.url)
        )
    }

    pub fn copy_link(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::types::{Certificate, CertificateMetadata, Track, TrackCertificate, TrackCertificateMetadata};
    use crate::clipboard::MemoryClipboard;
    use pretty_assertions::assert_eq;

    fn master() -> AnyCertificate {
        AnyCertificate::Master(Certificate {
            id: "1".into(),
            slug: "cert-web-u1-abcd1234".into(),
            title: "Web Design Engineer Certificate - Ada".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: CertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada".into(),
                user_email: "ada@example.com".into(),
                platform: Platform::Web,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-AB12CD".into(),
                design_completed_at: "2025-01-01".into(),
                engineering_completed_at: "2025-01-02".into(),
                convergence_completed_at: "2025-01-03".into(),
                total_time_spent_seconds: 3 * 3600 + 25 * 60,
            },
        })
    }

    fn track() -> AnyCertificate {
        AnyCertificate::Track(TrackCertificate {
            id: "2".into(),
            slug: "cert-android-convergence-u1-abcd1234".into(),
            title: "Android Convergence Track Certificate - Ada".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: TrackCertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada".into(),
                user_email: "ada@example.com".into(),
                platform: Platform::Android,
                track: Track::Convergence,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-XY98ZW".into(),
                completed_at: "2025-01-04".into(),
                total_time_spent_seconds: 42 * 60,
            },
        })
    }

    #[test]
    fn test_master_page() {
        let page = VerifyPage::new(master(), "https://designengineer.xyz", &Requirements::default());
        assert_eq!(VerifyPage::page_title(Some(&page)), "Ada - Web Design Engineer | Design Engineer");
        assert_eq!(VerifyPage::page_title(None), "Certificate Not Found");
        assert_eq!(page.meta_description(), "Verify Ada's Design Engineer certificate");
        assert_eq!(page.issued_date(), "January 5, 2025");
        assert_eq!(page.time_invested(), "3h 25m");
        assert_eq!(page.lessons_completed(), "84 lessons");
        assert_eq!(page.certificate_number(), "Certificate #DE-M5JFYV40-AB12CD");
        assert_eq!(page.share_title(), "Ada's Web Design Engineer Certificate");
    }

    #[test]
    fn test_track_page() {
        let page = VerifyPage::new(track(), "https://designengineer.xyz", &Requirements::default());
        assert_eq!(page.title(), "Android Convergence");
        assert_eq!(page.time_invested(), "42m");
        assert_eq!(page.lessons_completed(), "5 lessons");
        assert_eq!(page.platform(), Platform::Android);
    }

    #[test]
    fn test_social_links() {
        let page = VerifyPage::new(master(), "https://designengineer.xyz", &Requirements::default());
        assert_eq!(
            page.linkedin_url(),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fdesignengineer.xyz%2Fverify%2Fcert-web-u1-abcd1234"
        );
        assert_eq!(
            page.twitter_url(),
            "https://twitter.com/intent/tweet?text=I%20earned%20my%20Web%20Design%20Engineer%20certificate%20from%20the%20Design%20Engineer%20Course%21&url=https%3A%2F%2Fdesignengineer.xyz%2Fverify%2Fcert-web-u1-abcd1234"
        );
        let mut clipboard = MemoryClipboard::default();
        page.copy_link(&mut clipboard).unwrap();
        assert_eq!(clipboard.last(), Some("https://designengineer.xyz/verify/cert-web-u1-abcd1234"));
    }

    #[tokio::test]
    async fn test_load_unknown_slug() {
        let store = InMemoryCertificateStore::default();
        assert!(VerifyPage::load(&store, "cert-nope", "https://designengineer.xyz").await.is_none());
    }
}
