//! Dominant zone selection and the signal state derived from it.

use serde_derive::{Deserialize, Serialize};

/// Index of the busiest zone.
///
/// Ties go to the lowest index, and an all-zero vector still selects zone 0.
/// `None` only when there are no zones at all.
pub fn select(counts: &[usize]) -> Option<usize> {
    let mut iter = counts.iter().enumerate();
    let (mut best, mut max) = iter.next().map(|(i, c)| (i, *c))?;

    for (idx, &c) in iter {
        if c > max {
            best = idx;
            max = c;
        }
    }

    Some(best)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    Green,
    Red,
}

impl SignalState {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, SignalState::Green)
    }
}

/// One state per zone: green for the selected zone, red for every other one.
pub fn signal_states(selected: Option<usize>, zones: usize) -> Vec<SignalState> {
    (0..zones)
        .map(|k| {
            if Some(k) == selected {
                SignalState::Green
            } else {
                SignalState::Red
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegionSignal {
    pub region: String,
    pub state: SignalState,
}

/// Signal board as reported to the outside: `region_1` .. `region_N`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct SignalStatus(pub Vec<RegionSignal>);

impl SignalStatus {
    pub fn from_counts(counts: &[usize]) -> Self {
        Self::new(select(counts), counts.len())
    }

    pub fn new(selected: Option<usize>, zones: usize) -> Self {
        let signals = signal_states(selected, zones)
            .into_iter()
            .enumerate()
            .map(|(k, state)| RegionSignal {
                region: format!("region_{}", k + 1),
                state,
            })
            .collect();

        SignalStatus(signals)
    }

    pub fn get(&self, region: &str) -> Option<SignalState> {
        self.0.iter().find(|s| s.region == region).map(|s| s.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_empty() {
        assert_eq!(select(&[]), None);
    }

    #[test]
    fn select_all_zero_picks_first() {
        assert_eq!(select(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn select_ties_go_low() {
        assert_eq!(select(&[2, 5, 5, 1]), Some(1));
        assert_eq!(select(&[1, 3, 2, 7]), Some(3));
        assert_eq!(select(&[4]), Some(0));
    }

    #[test]
    fn exactly_one_green() {
        let states = signal_states(select(&[0, 0, 0, 0]), 4);

        assert_eq!(states.iter().filter(|s| s.is_active()).count(), 1);
        assert_eq!(states[0], SignalState::Green);
    }

    #[test]
    fn no_selection_all_red() {
        assert_eq!(signal_states(None, 2), vec![SignalState::Red, SignalState::Red]);
        assert!(signal_states(None, 0).is_empty());
    }

    #[test]
    fn status_names_regions_from_one() {
        let status = SignalStatus::from_counts(&[1, 4, 0, 4]);

        assert_eq!(status.get("region_2"), Some(SignalState::Green));
        assert_eq!(status.get("region_4"), Some(SignalState::Red));
        assert_eq!(status.get("region_5"), None);

        let json = serde_json::to_string(&SignalStatus::from_counts(&[0, 1])).unwrap();
        assert_eq!(
            json,
            r#"[{"region":"region_1","state":"red"},{"region":"region_2","state":"green"}]"#
        );
    }
}
