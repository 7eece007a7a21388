use serde::Deserialize;

use crate::progression::{AnimeEntry, Progression};

/// Watch status counts as served by the api. The status codes
/// are a closed enumeration; absent codes count as zero.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct StatusCounts {
    #[serde(rename = "1", default)]
    pub watching: u32,
    #[serde(rename = "2", default)]
    pub to_watch: u32,
    #[serde(rename = "3", default)]
    pub completed: u32,
    #[serde(rename = "4", default)]
    pub paused: u32,
    #[serde(rename = "5", default)]
    pub dropped: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct AggregatedStats {
    /// Amount of titles on the list
    pub total_episodes: u32,
    /// Sum of all episode progressions
    pub total_progression: u32,
    /// Sum of `progression * rewatch` over all titles
    pub rewatched_episodes: u32,
    /// Sum of all rewatch counts
    pub rewatched_animes: u32,
}

impl AggregatedStats {
    /// Fold a progression list into its counters.
    ///
    /// The result does not depend on the order of the entries.
    pub fn aggregate(entries: &[AnimeEntry]) -> Self {
        entries.iter().fold(
            Self {
                total_episodes: entries.len() as u32,
                ..Default::default()
            },
            |mut stats, entry| {
                let Progression {
                    progression,
                    rewatch,
                } = entry.progression;

                stats.total_progression += progression;
                stats.rewatched_episodes += rewatch * progression;
                stats.rewatched_animes += rewatch;

                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(progression: u32, rewatch: u32) -> AnimeEntry {
        AnimeEntry {
            progression: Progression {
                progression,
                rewatch,
            },
        }
    }

    #[test]
    fn aggregate_empty() {
        assert_eq!(AggregatedStats::aggregate(&[]), AggregatedStats::default());
    }

    #[test]
    fn aggregate_counters() {
        let entries = [entry(5, 2), entry(3, 0)];

        let stats = AggregatedStats::aggregate(&entries);

        assert_eq!(
            stats,
            AggregatedStats {
                total_episodes: 2,
                total_progression: 8,
                rewatched_episodes: 10,
                rewatched_animes: 2,
            }
        );
    }

    #[test]
    fn aggregate_order_independent() {
        let entries = [entry(12, 1), entry(7, 0), entry(26, 3), entry(1, 5)];
        let reversed: Vec<_> = entries.iter().rev().cloned().collect();

        assert_eq!(
            AggregatedStats::aggregate(&entries),
            AggregatedStats::aggregate(&reversed),
        );
    }

    #[test]
    fn status_counts_absent_codes() {
        let counts: StatusCounts =
            serde_json::from_str(r#"{"1":3,"3":14,"total":17}"#).unwrap();

        assert_eq!(
            counts,
            StatusCounts {
                watching: 3,
                completed: 14,
                total: 17,
                ..Default::default()
            }
        );
    }
}
