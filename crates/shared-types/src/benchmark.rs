/// The athlete whose results the benchmarking screen analyses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkSubject {
    pub name: &'static str,
    pub id: &'static str,
    pub sport: &'static str,
    pub specialization: &'static str,
    pub time: &'static str,
    pub ranking: u32,
    pub percentile: u32,
}

pub const BENCHMARK_SUBJECT: BenchmarkSubject = BenchmarkSubject {
    name: "Priya Sharma",
    id: "ATH001",
    sport: "Athletics",
    specialization: "100m Sprint",
    time: "11.84s",
    ranking: 12,
    percentile: 88,
};

/// One spoke of the performance profile radar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileAxis {
    pub subject: &'static str,
    pub athlete: f64,
    pub benchmark: f64,
}

/// Radar values are scored out of this maximum.
pub const PROFILE_FULL_MARK: f64 = 100.0;

pub const PROFILE_AXES: &[ProfileAxis] = &[
    ProfileAxis { subject: "Speed", athlete: 88.0, benchmark: 85.0 },
    ProfileAxis { subject: "Acceleration", athlete: 92.0, benchmark: 80.0 },
    ProfileAxis { subject: "Technique", athlete: 85.0, benchmark: 75.0 },
    ProfileAxis { subject: "Consistency", athlete: 78.0, benchmark: 70.0 },
    ProfileAxis { subject: "Power", athlete: 90.0, benchmark: 82.0 },
    ProfileAxis { subject: "Endurance", athlete: 82.0, benchmark: 78.0 },
];

/// Month-by-month 100 m times against the benchmark time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub date: &'static str,
    pub performance: f64,
    pub benchmark: f64,
}

pub const PROGRESS_DATA: &[ProgressPoint] = &[
    ProgressPoint { date: "Jan", performance: 12.1, benchmark: 12.0 },
    ProgressPoint { date: "Feb", performance: 12.0, benchmark: 12.0 },
    ProgressPoint { date: "Mar", performance: 11.95, benchmark: 12.0 },
    ProgressPoint { date: "Apr", performance: 11.89, benchmark: 12.0 },
    ProgressPoint { date: "May", performance: 11.84, benchmark: 12.0 },
];

/// Y-axis domain of the progress chart, in seconds.
pub const PROGRESS_DOMAIN: (f64, f64) = (11.5, 12.2);

/// How close the athlete is to a given competitive standard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardComparison {
    pub category: &'static str,
    pub value: u32,
    pub color: &'static str,
}

pub const COMPARISON_DATA: &[StandardComparison] = &[
    StandardComparison { category: "Regional (Maharashtra)", value: 85, color: "#10b981" },
    StandardComparison { category: "National (India)", value: 68, color: "#f59e0b" },
    StandardComparison { category: "International", value: 45, color: "#ef4444" },
    StandardComparison { category: "Olympic Standard", value: 25, color: "#8b5cf6" },
];

/// Rating badge for a comparison score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardRating {
    Excellent,
    Good,
    NeedsFocus,
}

impl StandardRating {
    pub fn for_value(value: u32) -> Self {
        if value >= 80 {
            StandardRating::Excellent
        } else if value >= 60 {
            StandardRating::Good
        } else {
            StandardRating::NeedsFocus
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StandardRating::Excellent => "Excellent",
            StandardRating::Good => "Good",
            StandardRating::NeedsFocus => "Needs Focus",
        }
    }
}

pub const COMPARISON_INSIGHTS: &[&str] = &[
    "Strong regional performance - top 15% in Maharashtra",
    "National ranking places athlete in top third",
    "International standards require 0.5s improvement",
    "Olympic qualification needs significant advancement",
];

/// Short labelled finding ("Strengths", "Training Goal", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub tone: &'static str,
}

pub const PROFILE_HIGHLIGHTS: &[Highlight] = &[
    Highlight { title: "Strengths", body: "Speed, Power", tone: "success" },
    Highlight { title: "Improvement", body: "Consistency", tone: "warning" },
    Highlight { title: "Above Avg", body: "4/6 Areas", tone: "primary" },
];

pub const TRAINING_RECOMMENDATIONS: &[Highlight] = &[
    Highlight {
        title: "Priority Focus",
        body: "Improve consistency in sprint starts and acceleration phase",
        tone: "success",
    },
    Highlight {
        title: "Training Goal",
        body: "Target 11.70s to reach top 10 national ranking",
        tone: "warning",
    },
    Highlight {
        title: "Timeline",
        body: "6-month intensive program recommended",
        tone: "primary",
    },
];

/// Figures under the progress chart.
pub const PROGRESS_SUMMARY: &[Highlight] = &[
    Highlight { title: "-0.26s", body: "Improvement (5 months)", tone: "success" },
    Highlight { title: "2.2%", body: "Performance Gain", tone: "primary" },
];
