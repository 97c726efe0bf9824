//! Issued certificate cards: display strings, PDF download and sharing

use std::fs;
use std::path::PathBuf;

use crate::clipboard::Clipboard;

use super::document::CertificateDocument;
use super::types::{format_date_gb, format_date_us, Certificate, TrackCertificate};
use super::CertificateError;

/// Download button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Idle,
    Downloading,
}

/// Title, text and link handed to a share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    fn for_title(title: &str, url: String) -> Self {
        Self {
            title: format!("{title} Certificate"),
            text: format!("I earned my {title} certificate from the Design Engineer Course!"),
            url,
        }
    }
}

/// How a share request was fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No share target; the verification link was copied instead
    Copied,
}

/// Receives generated PDF files
pub trait DownloadSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), CertificateError>;
}

/// A native share sheet
pub trait ShareTarget {
    fn share(&mut self, data: &ShareData) -> Result<(), CertificateError>;
}

/// Writes downloads into a directory, or to one fixed path
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    file: Option<PathBuf>,
    pub saved: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file: None,
            saved: Vec::new(),
        }
    }

    /// Ignore the suggested filename and write to `path`
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            dir: PathBuf::new(),
            file: Some(path.into()),
            saved: Vec::new(),
        }
    }

    fn target(&self, filename: &str) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => self.dir.join(filename),
        }
    }
}

impl DownloadSink for FileSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), CertificateError> {
        let path = self.target(filename);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved certificate");
        self.saved.push(path);
        Ok(())
    }
}

/// `{origin}/verify/{slug}`
pub fn verification_url(origin: &str, slug: &str) -> String {
    format!("{}/verify/{}", origin.trim_end_matches('/'), slug)
}

/// `Web Design Engineer` -> `Web-Design-Engineer-Certificate.pdf`
pub fn certificate_filename(title: &str) -> String {
    format!("{}-Certificate.pdf", title.replace(' ', "-"))
}

fn deliver(document: &CertificateDocument, filename: &str, sink: &mut dyn DownloadSink) -> Result<(), CertificateError> {
    let bytes = document.to_pdf()?;
    sink.save(filename, &bytes)
}

fn share_or_copy(
    data: &ShareData,
    target: Option<&mut dyn ShareTarget>,
    clipboard: &mut dyn Clipboard,
) -> Result<ShareOutcome, CertificateError> {
    match target {
        Some(target) => {
            target.share(data)?;
            Ok(ShareOutcome::Shared)
        }
        None => {
            clipboard.write_text(&data.url)?;
            Ok(ShareOutcome::Copied)
        }
    }
}

/// Card for an issued master certificate
#[derive(Debug, Clone)]
pub struct CertificateCard {
    certificate: Certificate,
    origin: String,
    state: CardState,
}

impl CertificateCard {
    pub fn new(certificate: Certificate, origin: impl Into<String>) -> Self {
        Self {
            certificate,
            origin: origin.into(),
            state: CardState::Idle,
        }
    }

    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// `Web Design Engineer`
    pub fn title(&self) -> String {
        self.certificate.metadata.platform.title()
    }

    pub fn issued_date(&self) -> String {
        format_date_us(self.certificate.metadata.issued_at)
    }

    /// `#DE-...`
    pub fn certificate_number(&self) -> String {
        format!("#{}", self.certificate.metadata.certificate_number)
    }

    pub fn awarded_to(&self) -> String {
        format!(
            "Awarded to {} for completing the Design, Engineering, and Convergence tracks for {}.",
            self.certificate.metadata.user_name,
            self.certificate.metadata.platform.name()
        )
    }

    pub fn verify_url(&self) -> String {
        verification_url(&self.origin, &self.certificate.slug)
    }

    /// Site-relative link used by the View button
    pub fn view_path(&self) -> String {
        format!("/verify/{}", self.certificate.slug)
    }

    pub fn filename(&self) -> String {
        certificate_filename(&self.title())
    }

    pub fn download_label(&self) -> &'static str {
        match self.state {
            CardState::Idle => "Download PDF",
            CardState::Downloading => "Generating...",
        }
    }

    pub fn document(&self) -> CertificateDocument {
        CertificateDocument::master(&self.certificate, &self.origin)
    }

    pub fn share_data(&self) -> ShareData {
        ShareData::for_title(&self.title(), self.verify_url())
    }

    /// Generate the PDF and hand it to `sink`
    ///
    /// Failures are logged and reported as `false`; the card is idle again
    /// either way.
    pub fn download(&mut self, sink: &mut dyn DownloadSink) -> bool {
        self.state = CardState::Downloading;
        let result = deliver(&self.document(), &self.filename(), sink);
        self.state = CardState::Idle;
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(slug = %self.certificate.slug, error = %e, "Error generating PDF");
                false
            }
        }
    }

    pub fn share(
        &self,
        target: Option<&mut dyn ShareTarget>,
        clipboard: &mut dyn Clipboard,
    ) -> Result<ShareOutcome, CertificateError> {
        share_or_copy(&self.share_data(), target, clipboard)
    }
}

/// Card for an issued track certificate
#[derive(Debug, Clone)]
pub struct TrackCertificateCard {
    certificate: TrackCertificate,
    origin: String,
    state: CardState,
}

impl TrackCertificateCard {
    pub fn new(certificate: TrackCertificate, origin: impl Into<String>) -> Self {
        Self {
            certificate,
            origin: origin.into(),
            state: CardState::Idle,
        }
    }

    pub fn certificate(&self) -> &TrackCertificate {
        &self.certificate
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// `iOS Convergence`, `Web Design Track`
    pub fn title(&self) -> String {
        let meta = &self.certificate.metadata;
        format!("{} {}", meta.platform.name(), meta.track.card_title())
    }

    pub fn issued_date(&self) -> String {
        format_date_gb(self.certificate.metadata.issued_at)
    }

    pub fn certificate_number(&self) -> String {
        format!("#{}", self.certificate.metadata.certificate_number)
    }

    pub fn verify_url(&self) -> String {
        verification_url(&self.origin, &self.certificate.slug)
    }

    pub fn view_path(&self) -> String {
        format!("/verify/{}", self.certificate.slug)
    }

    pub fn filename(&self) -> String {
        certificate_filename(&self.title())
    }

    pub fn download_label(&self) -> &'static str {
        match self.state {
            CardState::Idle => "PDF",
            CardState::Downloading => "...",
        }
    }

    pub fn document(&self) -> CertificateDocument {
        CertificateDocument::track(&self.certificate, &self.origin)
    }

    pub fn share_data(&self) -> ShareData {
        ShareData::for_title(&self.title(), self.verify_url())
    }

    pub fn download(&mut self, sink: &mut dyn DownloadSink) -> bool {
        self.state = CardState::Downloading;
        let result = deliver(&self.document(), &self.filename(), sink);
        self.state = CardState::Idle;
        result
            .map_err(|e| tracing::error!(slug = %self.certificate.slug, error = %e, "Error generating PDF"))
            .is_ok()
    }

    pub fn share(
        &self,
        target: Option<&mut dyn ShareTarget>,
        clipboard: &mut dyn Clipboard,
    ) -> Result<ShareOutcome, CertificateError> {
        share_or_copy(&self.share_data(), target, clipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::types::{CertificateMetadata, Platform, Track, TrackCertificateMetadata};
    use crate::clipboard::MemoryClipboard;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn certificate(platform: Platform) -> Certificate {
        Certificate {
            id: "1".into(),
            slug: "cert-web-u1-abcd1234".into(),
            title: "Web Design Engineer Certificate - Ada".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: CertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada".into(),
                user_email: "ada@example.com".into(),
                platform,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-AB12CD".into(),
                design_completed_at: "2025-01-01".into(),
                engineering_completed_at: "2025-01-02".into(),
                convergence_completed_at: "2025-01-03".into(),
                total_time_spent_seconds: 36_000,
            },
        }
    }

    fn track_certificate(track: Track) -> TrackCertificate {
        TrackCertificate {
            id: "2".into(),
            slug: "cert-ios-design-u1-abcd1234".into(),
            title: "iOS Design Track Certificate - Ada".into(),
            created_at: "2025-01-05T10:00:00Z".into(),
            metadata: TrackCertificateMetadata {
                user_id: "u1".into(),
                user_name: "Ada".into(),
                user_email: "ada@example.com".into(),
                platform: Platform::Ios,
                track,
                issued_at: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                certificate_number: "DE-M5JFYV40-XY98ZW".into(),
                completed_at: "2025-01-04".into(),
                total_time_spent_seconds: 1800,
            },
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        files: Vec<(String, Vec<u8>)>,
    }

    impl DownloadSink for RecordingSink {
        fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), CertificateError> {
            self.files.push((filename.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    struct FailingSink;

    impl DownloadSink for FailingSink {
        fn save(&mut self, _filename: &str, _bytes: &[u8]) -> Result<(), CertificateError> {
            Err(CertificateError::Io(std::io::Error::other("disk full")))
        }
    }

    #[derive(Default)]
    struct RecordingShare {
        shared: Vec<ShareData>,
    }

    impl ShareTarget for RecordingShare {
        fn share(&mut self, data: &ShareData) -> Result<(), CertificateError> {
            self.shared.push(data.clone());
            Ok(())
        }
    }

    #[test]
    fn test_card_strings() {
        let card = CertificateCard::new(certificate(Platform::Web), "https://designengineer.xyz");
        assert_eq!(card.title(), "Web Design Engineer");
        assert_eq!(card.issued_date(), "January 5, 2025");
        assert_eq!(card.certificate_number(), "#DE-M5JFYV40-AB12CD");
        assert_eq!(
            card.awarded_to(),
            "Awarded to Ada for completing the Design, Engineering, and Convergence tracks for Web."
        );
        assert_eq!(card.verify_url(), "https://designengineer.xyz/verify/cert-web-u1-abcd1234");
        assert_eq!(card.view_path(), "/verify/cert-web-u1-abcd1234");
        assert_eq!(card.filename(), "Web-Design-Engineer-Certificate.pdf");
        assert_eq!(card.download_label(), "Download PDF");
    }

    #[test]
    fn test_track_card_strings() {
        let card = TrackCertificateCard::new(track_certificate(Track::Design), "https://designengineer.xyz/");
        assert_eq!(card.title(), "iOS Design Track");
        assert_eq!(card.issued_date(), "5 January 2025");
        assert_eq!(card.filename(), "iOS-Design-Track-Certificate.pdf");
        assert_eq!(card.verify_url(), "https://designengineer.xyz/verify/cert-ios-design-u1-abcd1234");
        let convergence = TrackCertificateCard::new(track_certificate(Track::Convergence), "https://x.test");
        assert_eq!(convergence.filename(), "iOS-Convergence-Certificate.pdf");
        assert_eq!(convergence.download_label(), "PDF");
    }

    #[test]
    fn test_download_delivers_pdf() {
        let mut card = CertificateCard::new(certificate(Platform::Android), "https://designengineer.xyz");
        let mut sink = RecordingSink::default();
        assert!(card.download(&mut sink));
        assert_eq!(card.state(), CardState::Idle);
        let (name, bytes) = &sink.files[0];
        assert_eq!(name, "Android-Design-Engineer-Certificate.pdf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_failed_download_returns_to_idle() {
        let mut card = TrackCertificateCard::new(track_certificate(Track::Design), "https://designengineer.xyz");
        assert!(!card.download(&mut FailingSink));
        assert_eq!(card.state(), CardState::Idle);
    }

    #[test]
    fn test_share_prefers_target() {
        let card = CertificateCard::new(certificate(Platform::Ios), "https://designengineer.xyz");
        let mut target = RecordingShare::default();
        let mut clipboard = MemoryClipboard::default();
        let outcome = card.share(Some(&mut target), &mut clipboard).unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(
            target.shared[0],
            ShareData {
                title: "iOS Design Engineer Certificate".into(),
                text: "I earned my iOS Design Engineer certificate from the Design Engineer Course!".into(),
                url: "https://designengineer.xyz/verify/cert-web-u1-abcd1234".into(),
            }
        );
        assert_eq!(clipboard.last(), None);
    }

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let card = TrackCertificateCard::new(track_certificate(Track::Convergence), "https://designengineer.xyz");
        let mut clipboard = MemoryClipboard::default();
        let outcome = card.share(None, &mut clipboard).unwrap();
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.last(), Some("https://designengineer.xyz/verify/cert-ios-design-u1-abcd1234"));
        assert_eq!(card.share_data().title, "iOS Convergence Certificate");
    }
}
