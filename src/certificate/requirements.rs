//! Lesson requirements and eligibility computation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{
    Certificate, CertificateEligibility, Platform, Progress, Track, TrackCertificate,
    TrackCertificateEligibility,
};

/// Lessons required per track on one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRequirements {
    pub design: u32,
    pub engineering: u32,
    pub convergence: u32,
}

impl PlatformRequirements {
    pub fn for_track(&self, track: Track) -> u32 {
        match track {
            Track::Design => self.design,
            Track::Engineering => self.engineering,
            Track::Convergence => self.convergence,
        }
    }

    pub fn total(&self) -> u32 {
        self.design + self.engineering + self.convergence
    }
}

/// Requirements for every platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub web: PlatformRequirements,
    pub ios: PlatformRequirements,
    pub android: PlatformRequirements,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            web: PlatformRequirements {
                design: 24,
                engineering: 33,
                convergence: 27,
            },
            ios: PlatformRequirements {
                design: 17,
                engineering: 17,
                convergence: 5,
            },
            android: PlatformRequirements {
                design: 17,
                engineering: 17,
                convergence: 5,
            },
        }
    }
}

impl Requirements {
    pub fn platform(&self, platform: Platform) -> &PlatformRequirements {
        match platform {
            Platform::Web => &self.web,
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }

    /// Lessons across all three tracks of a platform
    pub fn total_lessons(&self, platform: Platform) -> u32 {
        self.platform(platform).total()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub status: LessonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl LessonProgress {
    pub fn completed(at: impl Into<String>) -> Self {
        Self {
            status: LessonStatus::Completed,
            completed_at: Some(at.into()),
        }
    }
}

/// A student's lesson progress, keyed by lesson path
/// (`{track dir}/{platform}/{module}/{lesson}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    #[serde(default)]
    pub lessons: HashMap<String, LessonProgress>,
    #[serde(default)]
    pub total_time_spent_seconds: u64,
}

/// Completion of one track by one student
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackStatus {
    pub completed: u32,
    /// Latest completion timestamp among the track's lessons
    pub completed_at: Option<String>,
}

/// Count completed lessons under a track and platform
pub fn track_completion_status(progress: Option<&UserProgress>, platform: Platform, track: Track) -> TrackStatus {
    let Some(progress) = progress else {
        return TrackStatus::default();
    };
    let prefix = format!("{}/{}/", track.lesson_dir(), platform.id());
    let mut status = TrackStatus::default();
    for (path, lesson) in &progress.lessons {
        if !path.starts_with(&prefix) || lesson.status != LessonStatus::Completed {
            continue;
        }
        status.completed += 1;
        if let Some(at) = &lesson.completed_at {
            if status.completed_at.as_ref().map_or(true, |latest| at > latest) {
                status.completed_at = Some(at.clone());
            }
        }
    }
    status
}

/// Track progress against the required total
///
/// Progress entries are keyed by path, so stale or renamed lessons under the
/// track prefix can outnumber the requirement; the count is capped at it.
fn track_progress(
    progress: Option<&UserProgress>,
    platform: Platform,
    track: Track,
    requirements: &PlatformRequirements,
) -> Progress {
    let total = requirements.for_track(track);
    let completed = track_completion_status(progress, platform, track).completed;
    Progress::new(completed.min(total), total)
}

/// Existing certificates that feed an eligibility view
#[derive(Debug, Clone, Default)]
pub struct IssuedCertificates {
    pub master: Option<Certificate>,
    pub design: Option<TrackCertificate>,
    pub engineering: Option<TrackCertificate>,
    pub convergence: Option<TrackCertificate>,
}

/// Master eligibility: every track must meet its lesson total
pub fn compute_eligibility(
    platform: Platform,
    requirements: &PlatformRequirements,
    progress: Option<&UserProgress>,
    issued: IssuedCertificates,
) -> CertificateEligibility {
    let progress_for = |track: Track| track_progress(progress, platform, track, requirements);
    let design_progress = progress_for(Track::Design);
    let engineering_progress = progress_for(Track::Engineering);
    let convergence_progress = progress_for(Track::Convergence);
    let design_complete = design_progress.is_complete();
    let engineering_complete = engineering_progress.is_complete();
    let convergence_complete = convergence_progress.is_complete();

    CertificateEligibility {
        platform,
        eligible: design_complete && engineering_complete && convergence_complete,
        design_complete,
        engineering_complete,
        convergence_complete,
        design_progress,
        engineering_progress,
        convergence_progress,
        certificate: issued.master,
        design_certificate: issued.design,
        engineering_certificate: issued.engineering,
        convergence_certificate: issued.convergence,
    }
}

pub fn compute_track_eligibility(
    platform: Platform,
    track: Track,
    requirements: &PlatformRequirements,
    progress: Option<&UserProgress>,
    certificate: Option<TrackCertificate>,
) -> TrackCertificateEligibility {
    let progress = track_progress(progress, platform, track, requirements);
    TrackCertificateEligibility {
        platform,
        track,
        eligible: progress.is_complete(),
        progress,
        certificate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn progress_with(lessons: &[(&str, LessonProgress)]) -> UserProgress {
        UserProgress {
            lessons: lessons.iter().map(|(p, l)| (p.to_string(), l.clone())).collect(),
            total_time_spent_seconds: 0,
        }
    }

    fn complete_track(progress: &mut UserProgress, platform: Platform, track: Track, count: u32) {
        for i in 0..count {
            progress.lessons.insert(
                format!("{}/{}/01-module/{i:02}-lesson", track.lesson_dir(), platform.id()),
                LessonProgress::completed(format!("2025-01-{:02}", i % 28 + 1)),
            );
        }
    }

    #[test]
    fn test_default_requirements() {
        let requirements = Requirements::default();
        assert_eq!(requirements.total_lessons(Platform::Web), 84);
        assert_eq!(requirements.total_lessons(Platform::Ios), 39);
        assert_eq!(requirements.platform(Platform::Android).for_track(Track::Convergence), 5);
    }

    #[test]
    fn test_track_status_counts_matching_completed_lessons() {
        let progress = progress_with(&[
            ("design-track/web/01-foundations/01-a", LessonProgress::completed("2025-01-03T10:00:00Z")),
            ("design-track/web/01-foundations/02-b", LessonProgress::completed("2025-01-07T10:00:00Z")),
            (
                "design-track/web/01-foundations/03-c",
                LessonProgress {
                    status: LessonStatus::InProgress,
                    completed_at: None,
                },
            ),
            ("design-track/ios/01-hig/01-a", LessonProgress::completed("2025-02-01T10:00:00Z")),
            ("engineering-track/web/00-setup/01-a", LessonProgress::completed("2025-03-01T10:00:00Z")),
        ]);
        let status = track_completion_status(Some(&progress), Platform::Web, Track::Design);
        assert_eq!(status.completed, 2);
        assert_eq!(status.completed_at.as_deref(), Some("2025-01-07T10:00:00Z"));
    }

    #[test]
    fn test_no_progress_means_nothing_completed() {
        let status = track_completion_status(None, Platform::Ios, Track::Convergence);
        assert_eq!(status, TrackStatus::default());
    }

    #[test]
    fn test_compute_eligibility() {
        let requirements = Requirements::default();
        let mut progress = UserProgress::default();
        complete_track(&mut progress, Platform::Ios, Track::Design, 17);
        complete_track(&mut progress, Platform::Ios, Track::Engineering, 17);
        complete_track(&mut progress, Platform::Ios, Track::Convergence, 4);

        let eligibility = compute_eligibility(
            Platform::Ios,
            requirements.platform(Platform::Ios),
            Some(&progress),
            IssuedCertificates::default(),
        );
        assert!(eligibility.design_complete && eligibility.engineering_complete);
        assert!(!eligibility.convergence_complete);
        assert!(!eligibility.eligible);
        assert_eq!(eligibility.convergence_progress, Progress::new(4, 5));

        complete_track(&mut progress, Platform::Ios, Track::Convergence, 5);
        let eligibility = compute_eligibility(
            Platform::Ios,
            requirements.platform(Platform::Ios),
            Some(&progress),
            IssuedCertificates::default(),
        );
        assert!(eligibility.eligible);
    }

    #[test]
    fn test_stray_lessons_do_not_exceed_total() {
        let requirements = Requirements::default();
        let mut progress = UserProgress::default();
        complete_track(&mut progress, Platform::Ios, Track::Convergence, 8);
        assert_eq!(
            track_completion_status(Some(&progress), Platform::Ios, Track::Convergence).completed,
            8
        );

        let eligibility = compute_eligibility(
            Platform::Ios,
            requirements.platform(Platform::Ios),
            Some(&progress),
            IssuedCertificates::default(),
        );
        assert_eq!(eligibility.convergence_progress, Progress::new(5, 5));
        let track = compute_track_eligibility(
            Platform::Ios,
            Track::Convergence,
            requirements.platform(Platform::Ios),
            Some(&progress),
            None,
        );
        assert_eq!(track.progress.to_string(), "5/5");
        assert!(track.eligible);
    }

    #[test]
    fn test_compute_track_eligibility() {
        let requirements = Requirements::default();
        let mut progress = UserProgress::default();
        complete_track(&mut progress, Platform::Android, Track::Design, 17);
        let design = compute_track_eligibility(
            Platform::Android,
            Track::Design,
            requirements.platform(Platform::Android),
            Some(&progress),
            None,
        );
        assert!(design.eligible);
        assert_eq!(design.progress, Progress::new(17, 17));
        let engineering = compute_track_eligibility(
            Platform::Android,
            Track::Engineering,
            requirements.platform(Platform::Android),
            Some(&progress),
            None,
        );
        assert!(!engineering.eligible);
    }
}
