/// A video submission awaiting official verification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub athlete: AssessedAthlete,
    pub submission: Submission,
    pub analysis: AiAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessedAthlete {
    pub name: &'static str,
    pub id: &'static str,
    pub age: u8,
    pub sport: &'static str,
    pub specialization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub exercise: &'static str,
    pub duration: &'static str,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiAnalysis {
    pub detected_time: &'static str,
    pub confidence: f64,
    pub key_points: &'static [KeyPoint],
    pub anomalies: &'static [Anomaly],
    pub metrics: MotionMetrics,
}

/// A timestamped checkpoint the analysis passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPoint {
    pub time: &'static str,
    pub description: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyLevel {
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub level: AnomalyLevel,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionMetrics {
    pub avg_speed: &'static str,
    pub max_speed: &'static str,
    pub acceleration: &'static str,
    pub technique: &'static str,
}

/// Submissions still in the review queue.
pub const PENDING_REVIEWS: u32 = 23;

pub const PENDING_ASSESSMENT: Assessment = Assessment {
    athlete: AssessedAthlete {
        name: "Priya Sharma",
        id: "ATH001",
        age: 19,
        sport: "Athletics",
        specialization: "100m Sprint",
    },
    submission: Submission {
        date: "2024-01-15",
        time: "14:30",
        location: "SAI Training Center, Mumbai",
        exercise: "100m Sprint Time Trial",
        duration: "45 seconds",
        duration_secs: 45,
    },
    analysis: AiAnalysis {
        detected_time: "11.84 seconds",
        confidence: 97.2,
        key_points: &[
            KeyPoint { time: "0:02", description: "Start position verified", passed: true },
            KeyPoint { time: "0:08", description: "Peak speed achieved", passed: true },
            KeyPoint { time: "0:11", description: "Finish line crossed", passed: true },
        ],
        anomalies: &[
            Anomaly {
                level: AnomalyLevel::Warning,
                message: "Slight wind assistance detected (0.8 m/s)",
            },
            Anomaly {
                level: AnomalyLevel::Info,
                message: "Camera angle optimal for analysis",
            },
        ],
        metrics: MotionMetrics {
            avg_speed: "9.7 m/s",
            max_speed: "10.2 m/s",
            acceleration: "4.8 m/s²",
            technique: "Excellent",
        },
    },
};

/// Outcome an official records for a submission.
///
/// Decisions only change what the verification screen shows; nothing is
/// sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationDecision {
    Approved,
    Rejected,
    ResubmissionRequested,
    Draft,
}

impl VerificationDecision {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationDecision::Approved => "Performance approved",
            VerificationDecision::Rejected => "Submission rejected",
            VerificationDecision::ResubmissionRequested => "Re-submission requested",
            VerificationDecision::Draft => "Draft saved",
        }
    }
}

/// Playback position of the review video, advanced in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    pub playing: bool,
    pub position_secs: u32,
}

impl Playback {
    pub fn toggle(self) -> Self {
        Self {
            playing: !self.playing,
            ..self
        }
    }

    /// Advance one second while playing, stopping at `duration_secs`.
    pub fn tick(self, duration_secs: u32) -> Self {
        if !self.playing {
            return self;
        }
        let position_secs = (self.position_secs + 1).min(duration_secs);
        Self {
            playing: position_secs < duration_secs,
            position_secs,
        }
    }

    /// Fraction of the video watched, in `0.0..=100.0`.
    pub fn percent(&self, duration_secs: u32) -> f64 {
        if duration_secs == 0 {
            return 0.0;
        }
        self.position_secs as f64 / duration_secs as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_playback_does_not_advance() {
        let p = Playback::default().tick(45);
        assert_eq!(p.position_secs, 0);
    }

    #[test]
    fn playback_stops_at_end() {
        let mut p = Playback { playing: true, position_secs: 43 };
        p = p.tick(45);
        assert!(p.playing);
        p = p.tick(45);
        assert_eq!(p.position_secs, 45);
        assert!(!p.playing);
        assert_eq!(p.tick(45).position_secs, 45);
    }

    #[test]
    fn playback_percent() {
        let p = Playback { playing: false, position_secs: 9 };
        assert!((p.percent(45) - 20.0).abs() < 1e-9);
        assert_eq!(p.percent(0), 0.0);
    }

    #[test]
    fn all_key_points_pass() {
        assert!(PENDING_ASSESSMENT.analysis.key_points.iter().all(|k| k.passed));
    }
}
