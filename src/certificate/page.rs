//! The signed-in "Your Certificates" page

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::card::CertificateCard;
use super::eligibility::{EligibilityCard, PageRefresher};
use super::store::CertificateStore;
use super::types::Platform;
use super::CertificateError;

/// Where anonymous visitors are sent
pub const SIGN_IN_REDIRECT: &str = "/sign-in?redirect_url=/course/certificate";

/// Issued certificates plus one eligibility card per platform
#[derive(Debug, Clone)]
pub struct CertificatesPage {
    pub certificates: Vec<CertificateCard>,
    pub eligibility: Vec<EligibilityCard>,
}

impl CertificatesPage {
    /// Heading above the eligibility cards
    pub fn eligibility_heading(&self) -> &'static str {
        if self.certificates.is_empty() {
            "Available Certificates"
        } else {
            "Other Certificates"
        }
    }
}

/// Fetch certificates and the eligibility of every platform concurrently
///
/// Without a signed-in user this fails with [`CertificateError::Unauthorized`];
/// callers redirect to [`SIGN_IN_REDIRECT`].
pub async fn load_certificates_page(
    store: &dyn CertificateStore,
    user_id: Option<&str>,
    origin: &str,
) -> Result<CertificatesPage, CertificateError> {
    let user_id = user_id.ok_or(CertificateError::Unauthorized)?;
    let (certificates, web, ios, android) = tokio::join!(
        store.get_user_certificates(user_id),
        store.check_certificate_eligibility(user_id, Platform::Web),
        store.check_certificate_eligibility(user_id, Platform::Ios),
        store.check_certificate_eligibility(user_id, Platform::Android),
    );
    let certificates = certificates?;
    tracing::debug!(user = user_id, certificates = certificates.len(), "loaded certificates page");
    Ok(CertificatesPage {
        certificates: certificates
            .into_iter()
            .map(|c| CertificateCard::new(c, origin))
            .collect(),
        eligibility: vec![
            EligibilityCard::new(web?),
            EligibilityCard::new(ios?),
            EligibilityCard::new(android?),
        ],
    })
}

/// Refreshes by reloading the page from a store
pub struct StoreRefresher {
    store: Arc<dyn CertificateStore>,
    user_id: String,
    origin: String,
    latest: Mutex<Option<CertificatesPage>>,
}

impl StoreRefresher {
    pub fn new(store: Arc<dyn CertificateStore>, user_id: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            origin: origin.into(),
            latest: Mutex::new(None),
        }
    }

    /// The page as of the last refresh
    pub async fn latest(&self) -> Option<CertificatesPage> {
        self.latest.lock().await.clone()
    }
}

#[async_trait]
impl PageRefresher for StoreRefresher {
    async fn refresh(&self) {
        match load_certificates_page(self.store.as_ref(), Some(&self.user_id), &self.origin).await {
            Ok(page) => *self.latest.lock().await = Some(page),
            Err(e) => tracing::error!(user = %self.user_id, error = %e, "Error refreshing certificates page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::eligibility::CardAction;
    use crate::certificate::issuance::{CertificateIssuer, UserIdentity};
    use crate::certificate::requirements::{LessonProgress, UserProgress};
    use crate::certificate::store::InMemoryCertificateStore;
    use crate::certificate::types::Track;
    use pretty_assertions::assert_eq;

    async fn store_with_finished_ios() -> Arc<InMemoryCertificateStore> {
        let store = Arc::new(InMemoryCertificateStore::default());
        let mut progress = UserProgress::default();
        for track in Track::ALL {
            for i in 0..store.requirements().ios.for_track(track) {
                progress.lessons.insert(
                    format!("{}/ios/m/{i}", track.lesson_dir()),
                    LessonProgress::completed("2025-01-04T09:00:00Z"),
                );
            }
        }
        store.set_progress("u1", progress).await;
        store
    }

    #[tokio::test]
    async fn test_anonymous_visitor_is_rejected() {
        let store = InMemoryCertificateStore::default();
        let err = load_certificates_page(&store, None, "https://designengineer.xyz")
            .await
            .unwrap_err();
        assert!(matches!(err, CertificateError::Unauthorized));
    }

    #[tokio::test]
    async fn test_page_lists_every_platform() {
        let store = store_with_finished_ios().await;
        let page = load_certificates_page(store.as_ref(), Some("u1"), "https://designengineer.xyz")
            .await
            .unwrap();
        assert!(page.certificates.is_empty());
        assert_eq!(page.eligibility_heading(), "Available Certificates");
        let platforms: Vec<Platform> = page.eligibility.iter().map(|c| c.platform()).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
        assert!(matches!(page.eligibility[1].action(), CardAction::Claim { .. }));
        assert!(matches!(page.eligibility[0].action(), CardAction::Locked(_)));
    }

    #[tokio::test]
    async fn test_refresher_sees_new_certificate() {
        let store = store_with_finished_ios().await;
        let user = UserIdentity {
            id: "u1".into(),
            first_name: Some("Ada".into()),
            ..Default::default()
        };
        store.issue_certificate(&user, Platform::Ios).await.unwrap();

        let refresher = StoreRefresher::new(store.clone(), "u1", "https://designengineer.xyz");
        assert!(refresher.latest().await.is_none());
        refresher.refresh().await;
        let page = refresher.latest().await.unwrap();
        assert_eq!(page.certificates.len(), 1);
        assert_eq!(page.eligibility_heading(), "Other Certificates");
        assert_eq!(page.eligibility[1].action(), CardAction::Earned);
    }
}
