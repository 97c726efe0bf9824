//! Certificate data access
//!
//! Pages reach certificate data only through [`CertificateStore`]. The
//! in-memory implementation backs the CLI and tests; a hosted deployment
//! would put its CMS behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::issuance::{
    certificate_slug, certificate_title, generate_certificate_number, not_eligible_message,
    track_certificate_slug, track_certificate_title, track_not_eligible_message, CertificateIssuer,
    UserIdentity,
};
use super::requirements::{
    compute_eligibility, compute_track_eligibility, track_completion_status, IssuedCertificates,
    Requirements, UserProgress,
};
use super::types::{
    AnyCertificate, Certificate, CertificateEligibility, CertificateMetadata, Platform, Track,
    TrackCertificate, TrackCertificateEligibility, TrackCertificateMetadata,
};
use super::CertificateError;

#[async_trait]
pub trait CertificateStore: Send + Sync {
    /// Master certificates held by a user
    async fn get_user_certificates(&self, user_id: &str) -> Result<Vec<Certificate>, CertificateError>;

    async fn get_user_track_certificates(&self, user_id: &str) -> Result<Vec<TrackCertificate>, CertificateError>;

    async fn check_certificate_eligibility(
        &self,
        user_id: &str,
        platform: Platform,
    ) -> Result<CertificateEligibility, CertificateError>;

    async fn check_track_certificate_eligibility(
        &self,
        user_id: &str,
        platform: Platform,
        track: Track,
    ) -> Result<TrackCertificateEligibility, CertificateError>;
}

#[derive(Debug, Default)]
struct StoreState {
    progress: HashMap<String, UserProgress>,
    certificates: Vec<Certificate>,
    track_certificates: Vec<TrackCertificate>,
}

/// Store holding progress and issued certificates in memory
#[derive(Debug, Default)]
pub struct InMemoryCertificateStore {
    requirements: Requirements,
    state: RwLock<StoreState>,
}

impl InMemoryCertificateStore {
    pub fn new(requirements: Requirements) -> Self {
        Self {
            requirements,
            state: RwLock::default(),
        }
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Replace a user's lesson progress
    pub async fn set_progress(&self, user_id: impl Into<String>, progress: UserProgress) {
        self.state.write().await.progress.insert(user_id.into(), progress);
    }

    pub async fn progress(&self, user_id: &str) -> Option<UserProgress> {
        self.state.read().await.progress.get(user_id).cloned()
    }

    /// Look a certificate of either kind up by its slug
    pub async fn get_certificate_by_slug(&self, slug: &str) -> Option<AnyCertificate> {
        let state = self.state.read().await;
        if let Some(cert) = state.certificates.iter().find(|c| c.slug == slug) {
            return Some(AnyCertificate::Master(cert.clone()));
        }
        state
            .track_certificates
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .map(AnyCertificate::Track)
    }

    fn master_for(state: &StoreState, user_id: &str, platform: Platform) -> Option<Certificate> {
        state
            .certificates
            .iter()
            .find(|c| c.metadata.user_id == user_id && c.metadata.platform == platform)
            .cloned()
    }

    fn track_for(state: &StoreState, user_id: &str, platform: Platform, track: Track) -> Option<TrackCertificate> {
        state
            .track_certificates
            .iter()
            .find(|c| c.metadata.user_id == user_id && c.metadata.platform == platform && c.metadata.track == track)
            .cloned()
    }
}

#[async_trait]
impl CertificateStore for InMemoryCertificateStore {
    async fn get_user_certificates(&self, user_id: &str) -> Result<Vec<Certificate>, CertificateError> {
        let state = self.state.read().await;
        Ok(state
            .certificates
            .iter()
            .filter(|c| c.metadata.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_user_track_certificates(&self, user_id: &str) -> Result<Vec<TrackCertificate>, CertificateError> {
        let state = self.state.read().await;
        Ok(state
            .track_certificates
            .iter()
            .filter(|c| c.metadata.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn check_certificate_eligibility(
        &self,
        user_id: &str,
        platform: Platform,
    ) -> Result<CertificateEligibility, CertificateError> {
        let state = self.state.read().await;
        let issued = IssuedCertificates {
            master: Self::master_for(&state, user_id, platform),
            design: Self::track_for(&state, user_id, platform, Track::Design),
            engineering: Self::track_for(&state, user_id, platform, Track::Engineering),
            convergence: Self::track_for(&state, user_id, platform, Track::Convergence),
        };
        Ok(compute_eligibility(
            platform,
            self.requirements.platform(platform),
            state.progress.get(user_id),
            issued,
        ))
    }

    async fn check_track_certificate_eligibility(
        &self,
        user_id: &str,
        platform: Platform,
        track: Track,
    ) -> Result<TrackCertificateEligibility, CertificateError> {
        let state = self.state.read().await;
        Ok(compute_track_eligibility(
            platform,
            track,
            self.requirements.platform(platform),
            state.progress.get(user_id),
            Self::track_for(&state, user_id, platform, track),
        ))
    }
}

#[async_trait]
impl CertificateIssuer for InMemoryCertificateStore {
    async fn issue_certificate(&self, user: &UserIdentity, platform: Platform) -> Result<Certificate, CertificateError> {
        let eligibility = self.check_certificate_eligibility(&user.id, platform).await?;
        if !eligibility.eligible {
            return Err(CertificateError::NotEligible(not_eligible_message(platform)));
        }
        if let Some(existing) = eligibility.certificate {
            return Ok(existing);
        }

        let now = Utc::now();
        let today = now.date_naive();
        let mut state = self.state.write().await;
        let progress = state.progress.get(&user.id);
        let completed_at = |track: Track| {
            track_completion_status(progress, platform, track)
                .completed_at
                .unwrap_or_else(|| today.to_string())
        };
        let user_name = user.display_name();
        let certificate = Certificate {
            id: Uuid::new_v4().to_string(),
            slug: certificate_slug(platform, &user.id),
            title: certificate_title(platform, user_name),
            created_at: now.to_rfc3339(),
            metadata: CertificateMetadata {
                user_id: user.id.clone(),
                user_name: user_name.to_string(),
                user_email: user.primary_email().to_string(),
                platform,
                issued_at: today,
                certificate_number: generate_certificate_number(now),
                design_completed_at: completed_at(Track::Design),
                engineering_completed_at: completed_at(Track::Engineering),
                convergence_completed_at: completed_at(Track::Convergence),
                total_time_spent_seconds: progress.map_or(0, |p| p.total_time_spent_seconds),
            },
        };
        tracing::info!(
            user = %user.id,
            %platform,
            number = %certificate.metadata.certificate_number,
            "issued certificate"
        );
        state.certificates.push(certificate.clone());
        Ok(certificate)
    }

    async fn issue_track_certificate(
        &self,
        user: &UserIdentity,
        platform: Platform,
        track: Track,
    ) -> Result<TrackCertificate, CertificateError> {
        let eligibility = self
            .check_track_certificate_eligibility(&user.id, platform, track)
            .await?;
        if !eligibility.eligible {
            return Err(CertificateError::NotEligible(track_not_eligible_message(
                track,
                eligibility.progress,
            )));
        }
        if let Some(existing) = eligibility.certificate {
            return Ok(existing);
        }

        let now = Utc::now();
        let today = now.date_naive();
        let mut state = self.state.write().await;
        let progress = state.progress.get(&user.id);
        let user_name = user.display_name();
        let certificate = TrackCertificate {
            id: Uuid::new_v4().to_string(),
            slug: track_certificate_slug(platform, track, &user.id),
            title: track_certificate_title(platform, track, user_name),
            created_at: now.to_rfc3339(),
            metadata: TrackCertificateMetadata {
                user_id: user.id.clone(),
                user_name: user_name.to_string(),
                user_email: user.primary_email().to_string(),
                platform,
                track,
                issued_at: today,
                certificate_number: generate_certificate_number(now),
                completed_at: track_completion_status(progress, platform, track)
                    .completed_at
                    .unwrap_or_else(|| today.to_string()),
                total_time_spent_seconds: progress.map_or(0, |p| p.total_time_spent_seconds),
            },
        };
        tracing::info!(
            user = %user.id,
            %platform,
            %track,
            number = %certificate.metadata.certificate_number,
            "issued track certificate"
        );
        state.track_certificates.push(certificate.clone());
        Ok(certificate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::issuance::handle_claim;
    use crate::certificate::requirements::LessonProgress;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user(id: &str) -> UserIdentity {
        UserIdentity {
            id: id.to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            first_name: None,
            emails: vec!["ada@example.com".to_string()],
        }
    }

    fn finished(platform: Platform, tracks: &[Track], requirements: &Requirements) -> UserProgress {
        let mut progress = UserProgress {
            total_time_spent_seconds: 12 * 3600,
            ..Default::default()
        };
        for track in tracks {
            for i in 0..requirements.platform(platform).for_track(*track) {
                progress.lessons.insert(
                    format!("{}/{}/m/{i:02}", track.lesson_dir(), platform.id()),
                    LessonProgress::completed("2025-01-04T09:00:00Z"),
                );
            }
        }
        progress
    }

    #[tokio::test]
    async fn test_ineligible_user_gets_error() {
        let store = InMemoryCertificateStore::default();
        let err = store.issue_certificate(&user("u1"), Platform::Web).await.unwrap_err();
        assert_eq!(err.to_string(), not_eligible_message(Platform::Web));
    }

    #[tokio::test]
    async fn test_issue_then_return_existing() {
        let store = InMemoryCertificateStore::default();
        let progress = finished(Platform::Ios, &Track::ALL, store.requirements());
        store.set_progress("u1", progress).await;

        let first = store.issue_certificate(&user("u1"), Platform::Ios).await.unwrap();
        assert_eq!(first.title, "iOS Design Engineer Certificate - Ada Lovelace");
        assert!(first.slug.starts_with("cert-ios-u1-"));
        assert!(first.metadata.certificate_number.starts_with("DE-"));
        assert_eq!(first.metadata.design_completed_at, "2025-01-04T09:00:00Z");
        assert_eq!(first.metadata.total_time_spent_seconds, 12 * 3600);

        let second = store.issue_certificate(&user("u1"), Platform::Ios).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(store.get_user_certificates("u1").await.unwrap().len(), 1);

        let eligibility = store.check_certificate_eligibility("u1", Platform::Ios).await.unwrap();
        assert_eq!(eligibility.certificate, Some(first.clone()));
        assert!(matches!(
            store.get_certificate_by_slug(&first.slug).await,
            Some(AnyCertificate::Master(c)) if c == first
        ));
    }

    #[tokio::test]
    async fn test_track_certificate_issuance() {
        let store = InMemoryCertificateStore::default();
        let progress = finished(Platform::Web, &[Track::Design], store.requirements());
        store.set_progress("u2", progress).await;

        let cert = store
            .issue_track_certificate(&user("u2"), Platform::Web, Track::Design)
            .await
            .unwrap();
        assert_eq!(cert.title, "Web Design Track Certificate - Ada Lovelace");
        assert!(cert.slug.starts_with("cert-web-design-u2-"));

        let err = store
            .issue_track_certificate(&user("u2"), Platform::Web, Track::Engineering)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Complete all lessons in the Engineering Track to earn your certificate. Progress: 0/33 lessons."
        );
        let eligibility = store.check_certificate_eligibility("u2", Platform::Web).await.unwrap();
        assert_eq!(eligibility.design_certificate, Some(cert));
        assert_eq!(store.get_user_track_certificates("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_handle_claim_statuses() {
        let store = InMemoryCertificateStore::default();
        let progress = finished(Platform::Android, &Track::ALL, store.requirements());
        store.set_progress("u3", progress).await;
        let ada = user("u3");

        let unauthorized = handle_claim(&store, None, &json!({ "platform": "web" })).await;
        assert_eq!(unauthorized.status, 401);
        assert_eq!(unauthorized.body, json!({ "error": "Unauthorized" }));

        let bad_platform = handle_claim(&store, Some(&ada), &json!({ "platform": "mac" })).await;
        assert_eq!(bad_platform.status, 400);
        assert_eq!(bad_platform.body["error"], "Invalid platform");

        let bad_track = handle_claim(&store, Some(&ada), &json!({ "platform": "web", "track": "art" })).await;
        assert_eq!(bad_track.body["error"], "Invalid track");

        let ineligible = handle_claim(&store, Some(&ada), &json!({ "platform": "web" })).await;
        assert_eq!(ineligible.status, 400);

        let created = handle_claim(&store, Some(&ada), &json!({ "platform": "android" })).await;
        assert_eq!(created.status, 201);
        assert_eq!(created.body["certificate"]["metadata"]["platform"], "android");

        let track = handle_claim(
            &store,
            Some(&ada),
            &json!({ "platform": "android", "track": "convergence" }),
        )
        .await;
        assert_eq!(track.status, 201);
        assert_eq!(track.body["certificate"]["metadata"]["track"], "convergence");
    }
}
