/// Enrollment state of an athlete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AthleteStatus {
    Active,
    Pending,
    Review,
}

impl AthleteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AthleteStatus::Active => "active",
            AthleteStatus::Pending => "pending",
            AthleteStatus::Review => "review",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AthleteStatus::Active => "Active",
            AthleteStatus::Pending => "Pending",
            AthleteStatus::Review => "Review",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AthleteStatus::Active),
            "pending" => Some(AthleteStatus::Pending),
            "review" => Some(AthleteStatus::Review),
            _ => None,
        }
    }
}

pub const ATHLETE_STATUSES: &[AthleteStatus] = &[
    AthleteStatus::Active,
    AthleteStatus::Pending,
    AthleteStatus::Review,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Athlete {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub sport: &'static str,
    pub specialization: &'static str,
    pub location: &'static str,
    pub last_assessment: &'static str,
    pub status: AthleteStatus,
    /// Composite performance score out of 100.
    pub performance: u8,
    pub assessments: u32,
}

pub const ATHLETES: &[Athlete] = &[
    Athlete {
        id: "ATH001",
        name: "Priya Sharma",
        age: 19,
        sport: "Athletics",
        specialization: "100m Sprint",
        location: "Mumbai, Maharashtra",
        last_assessment: "2024-01-15",
        status: AthleteStatus::Active,
        performance: 92,
        assessments: 12,
    },
    Athlete {
        id: "ATH002",
        name: "Rahul Kumar",
        age: 21,
        sport: "Swimming",
        specialization: "Freestyle",
        location: "Delhi, NCT",
        last_assessment: "2024-01-14",
        status: AthleteStatus::Pending,
        performance: 87,
        assessments: 8,
    },
    Athlete {
        id: "ATH003",
        name: "Anjali Patel",
        age: 18,
        sport: "Gymnastics",
        specialization: "Artistic",
        location: "Ahmedabad, Gujarat",
        last_assessment: "2024-01-13",
        status: AthleteStatus::Active,
        performance: 95,
        assessments: 15,
    },
    Athlete {
        id: "ATH004",
        name: "Vikram Singh",
        age: 22,
        sport: "Wrestling",
        specialization: "Freestyle 74kg",
        location: "Chandigarh, Punjab",
        last_assessment: "2024-01-12",
        status: AthleteStatus::Review,
        performance: 89,
        assessments: 10,
    },
    Athlete {
        id: "ATH005",
        name: "Sneha Reddy",
        age: 20,
        sport: "Badminton",
        specialization: "Singles",
        location: "Hyderabad, Telangana",
        last_assessment: "2024-01-11",
        status: AthleteStatus::Active,
        performance: 91,
        assessments: 14,
    },
];

/// Sports offered in the directory's sport filter.
pub const ATHLETE_SPORTS: &[&str] = &["Athletics", "Swimming", "Gymnastics", "Wrestling", "Badminton"];

/// Colour band for a performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Excellent,
    Good,
    NeedsWork,
}

impl PerformanceBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 90 {
            PerformanceBand::Excellent
        } else if score >= 80 {
            PerformanceBand::Good
        } else {
            PerformanceBand::NeedsWork
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "excellent",
            PerformanceBand::Good => "good",
            PerformanceBand::NeedsWork => "needs-work",
        }
    }
}

/// Directory filter state. `None` in a select means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteFilter {
    pub search: String,
    pub sport: Option<String>,
    pub status: Option<AthleteStatus>,
}

impl AthleteFilter {
    /// Case-insensitive substring search over name, id and specialization,
    /// combined with exact sport and status matches.
    pub fn matches(&self, athlete: &Athlete) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = athlete.name.to_lowercase().contains(&needle)
            || athlete.id.to_lowercase().contains(&needle)
            || athlete.specialization.to_lowercase().contains(&needle);
        let matches_sport = self
            .sport
            .as_deref()
            .map_or(true, |sport| athlete.sport == sport);
        let matches_status = self.status.map_or(true, |status| athlete.status == status);

        matches_search && matches_sport && matches_status
    }

    pub fn apply<'a>(&self, athletes: &'a [Athlete]) -> Vec<&'a Athlete> {
        athletes.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Convert a select value into a filter option, treating "all" as no filter.
pub fn select_value(value: &str) -> Option<String> {
    if value.is_empty() || value == "all" {
        None
    } else {
        Some(value.to_string())
    }
}

/// A summary card above the directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStat {
    pub label: &'static str,
    pub value: &'static str,
    /// Share of the total, shown as a badge.
    pub share: Option<&'static str>,
    pub tone: &'static str,
}

pub const DIRECTORY_STATS: &[DirectoryStat] = &[
    DirectoryStat { label: "Total Athletes", value: "2,847", share: None, tone: "primary" },
    DirectoryStat { label: "Active Athletes", value: "2,156", share: Some("76%"), tone: "success" },
    DirectoryStat { label: "Pending Review", value: "423", share: Some("15%"), tone: "warning" },
    DirectoryStat { label: "Top Performers", value: "268", share: Some("9%"), tone: "accent" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(found: &[&Athlete]) -> Vec<&'static str> {
        found.iter().map(|a| a.id).collect()
    }

    #[test]
    fn empty_filter_returns_everyone() {
        let found = AthleteFilter::default().apply(ATHLETES);
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let by_name = AthleteFilter { search: "PRIYA".into(), ..Default::default() };
        assert_eq!(ids(&by_name.apply(ATHLETES)), vec!["ATH001"]);

        let by_id = AthleteFilter { search: "ath004".into(), ..Default::default() };
        assert_eq!(ids(&by_id.apply(ATHLETES)), vec!["ATH004"]);

        let by_specialization = AthleteFilter { search: "freestyle".into(), ..Default::default() };
        assert_eq!(ids(&by_specialization.apply(ATHLETES)), vec!["ATH002", "ATH004"]);
    }

    #[test]
    fn sport_and_status_combine() {
        let filter = AthleteFilter {
            search: String::new(),
            sport: Some("Athletics".into()),
            status: Some(AthleteStatus::Pending),
        };
        assert!(filter.apply(ATHLETES).is_empty());

        let filter = AthleteFilter {
            status: Some(AthleteStatus::Active),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(ATHLETES)), vec!["ATH001", "ATH003", "ATH005"]);
    }

    #[test]
    fn all_select_value_means_no_filter() {
        assert_eq!(select_value("all"), None);
        assert_eq!(select_value(""), None);
        assert_eq!(select_value("Swimming").as_deref(), Some("Swimming"));
    }

    #[test]
    fn performance_bands() {
        assert_eq!(PerformanceBand::for_score(95), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::for_score(90), PerformanceBand::Excellent);
        assert_eq!(PerformanceBand::for_score(87), PerformanceBand::Good);
        assert_eq!(PerformanceBand::for_score(79), PerformanceBand::NeedsWork);
    }
}
