//! End-to-end certificate flows against the in-memory store

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use design_engineer::certificate::{
    handle_claim, load_certificates_page, AnyCertificate, CardAction, CertificateApi, CertificateCard,
    CertificateError, CertificateIssuer, CertificateStore, ClaimOutcome, ClaimRequest, FileSink,
    InMemoryCertificateStore, LessonProgress, PageRefresher, Platform, PlatformRequirements,
    Requirements, StoreRefresher, Track, TrackEligibilityCard, UserIdentity, UserProgress, VerifyPage,
};
use pretty_assertions::assert_eq;

const ORIGIN: &str = "https://designengineer.xyz";

fn small_requirements() -> Requirements {
    let one_each = PlatformRequirements {
        design: 1,
        engineering: 1,
        convergence: 1,
    };
    Requirements {
        web: one_each,
        ios: one_each,
        android: one_each,
    }
}

fn ada() -> UserIdentity {
    UserIdentity {
        id: "user_ada".into(),
        full_name: Some("Ada Lovelace".into()),
        emails: vec!["ada@example.com".into()],
        ..Default::default()
    }
}

async fn store_with(tracks: &[Track], platform: Platform) -> Arc<InMemoryCertificateStore> {
    let store = Arc::new(InMemoryCertificateStore::new(small_requirements()));
    let mut progress = UserProgress {
        total_time_spent_seconds: 5400,
        ..Default::default()
    };
    for track in tracks {
        progress.lessons.insert(
            format!("{}/{}/basics/intro", track.lesson_dir(), platform.id()),
            LessonProgress::completed("2025-02-10T18:00:00Z"),
        );
    }
    store.set_progress("user_ada", progress).await;
    store
}

/// Claims through the route handler, the way the HTTP client reaches the server
struct RouteApi {
    store: Arc<InMemoryCertificateStore>,
    user: UserIdentity,
}

#[async_trait]
impl CertificateApi for RouteApi {
    async fn claim(&self, request: &ClaimRequest) -> Result<AnyCertificate, CertificateError> {
        let body = serde_json::to_value(request)?;
        let response = handle_claim(self.store.as_ref(), Some(&self.user), &body).await;
        if response.status != 201 {
            return Err(CertificateError::Server {
                status: response.status,
                message: response.body["error"].as_str().unwrap_or_default().to_string(),
            });
        }
        Ok(serde_json::from_value(response.body["certificate"].clone())?)
    }
}

#[derive(Default)]
struct CountingRefresher(AtomicUsize);

#[async_trait]
impl PageRefresher for CountingRefresher {
    async fn refresh(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_claim_from_page_then_verify() {
    let store = store_with(&Track::ALL, Platform::Web).await;
    let api = RouteApi {
        store: store.clone(),
        user: ada(),
    };
    let refresher = StoreRefresher::new(store.clone(), "user_ada", ORIGIN);

    let mut page = load_certificates_page(store.as_ref(), Some("user_ada"), ORIGIN)
        .await
        .unwrap();
    let web = &mut page.eligibility[0];
    assert_eq!(web.platform(), Platform::Web);
    assert!(matches!(web.action(), CardAction::Claim { disabled: false, .. }));

    let ClaimOutcome::Claimed(certificate) = web.claim(&api, &refresher).await else {
        panic!("claim should succeed");
    };
    assert!(certificate.slug().starts_with("cert-web-user_ada-"));

    let refreshed = refresher.latest().await.unwrap();
    assert_eq!(refreshed.certificates.len(), 1);
    assert_eq!(refreshed.eligibility[0].action(), CardAction::Earned);

    let verify = VerifyPage::load(store.as_ref(), certificate.slug(), ORIGIN).await.unwrap();
    assert_eq!(
        VerifyPage::page_title(Some(&verify)),
        "Ada Lovelace - Web Design Engineer | Design Engineer"
    );
    assert_eq!(verify.lessons_completed(), "3 lessons");
    assert_eq!(verify.url(), format!("{ORIGIN}/verify/{}", certificate.slug()));
}

#[tokio::test]
async fn test_failed_claim_still_refreshes_once() {
    let store = store_with(&[Track::Design], Platform::Ios).await;
    let api = RouteApi {
        store: store.clone(),
        user: ada(),
    };
    let refresher = CountingRefresher::default();

    let eligibility = store
        .check_track_certificate_eligibility("user_ada", Platform::Ios, Track::Engineering)
        .await
        .unwrap();
    // Force the card into a claimable state so the server gets to say no
    let mut forced = eligibility.clone();
    forced.eligible = true;
    let mut card = TrackEligibilityCard::new(forced);

    let outcome = card.claim(&api, &refresher).await;
    assert!(matches!(outcome, ClaimOutcome::Failed(ref msg) if msg.contains("Progress: 0/1 lessons")));
    assert_eq!(refresher.0.load(Ordering::SeqCst), 1);
    assert!(!eligibility.eligible);
}

#[tokio::test]
async fn test_claiming_twice_returns_the_same_certificate() {
    let store = store_with(&[Track::Convergence], Platform::Android).await;
    let first = store
        .issue_track_certificate(&ada(), Platform::Android, Track::Convergence)
        .await
        .unwrap();
    let second = store
        .issue_track_certificate(&ada(), Platform::Android, Track::Convergence)
        .await
        .unwrap();
    assert_eq!(first.slug, second.slug);
    assert_eq!(store.get_user_track_certificates("user_ada").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_issued_certificate_downloads_as_pdf() {
    let store = store_with(&Track::ALL, Platform::Ios).await;
    let certificate = store.issue_certificate(&ada(), Platform::Ios).await.unwrap();

    let mut card = CertificateCard::new(certificate, ORIGIN);
    assert_eq!(card.filename(), "iOS-Design-Engineer-Certificate.pdf");
    assert!(card.verify_url().starts_with("https://designengineer.xyz/verify/cert-ios-user_ada-"));

    let dir = std::env::temp_dir().join(format!("design-engineer-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let mut sink = FileSink::new(&dir);
    assert!(card.download(&mut sink));

    let bytes = std::fs::read(dir.join("iOS-Design-Engineer-Certificate.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    std::fs::remove_dir_all(&dir).unwrap();
}
