use serde::Serialize;

/// One of the three labor pools that share the monthly claim demand.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    Analyst,
    Adjuster,
    Registration,
}

impl Pool {
    pub const ALL: [Pool; 3] = [Pool::Analyst, Pool::Adjuster, Pool::Registration];

    pub fn label(self) -> &'static str {
        match self {
            Pool::Analyst => "Analyst",
            Pool::Adjuster => "Adjuster",
            Pool::Registration => "Registration",
        }
    }

    /// Column header used for this pool's required hours in exported tables.
    pub fn hours_column(self) -> &'static str {
        match self {
            Pool::Analyst => "Analyst Hours",
            Pool::Adjuster => "Adjuster Hours",
            Pool::Registration => "Registration Hours",
        }
    }

    /// File name stem of this pool's required-hours chart.
    pub fn file_stem(self) -> &'static str {
        match self {
            Pool::Analyst => "analyst_hours",
            Pool::Adjuster => "adjuster_hours",
            Pool::Registration => "registration_hours",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_pools_in_display_order() {
        let labels: Vec<&str> = Pool::ALL.iter().map(|pool| pool.label()).collect();
        assert_eq!(labels, vec!["Analyst", "Adjuster", "Registration"]);
    }

    #[test]
    fn hours_column_matches_export_headers() {
        assert_eq!(Pool::Analyst.hours_column(), "Analyst Hours");
        assert_eq!(Pool::Adjuster.hours_column(), "Adjuster Hours");
        assert_eq!(Pool::Registration.hours_column(), "Registration Hours");
    }
}
