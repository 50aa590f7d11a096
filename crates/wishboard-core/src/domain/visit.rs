//! Visited-Region Records
//!
//! One logical record per (board, user, region), upserted on toggle and never
//! deleted. The map overlay reads two sets derived from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::identity::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub board_id: String,
    pub user_id: String,
    pub pref_code: String,
    #[serde(default)]
    pub visited: bool,
}

/// Whose visits the map highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    #[default]
    Mine,
    All,
}

/// How a region is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionShade {
    Unvisited,
    VisitedByMe,
    VisitedBySomeone,
}

impl RegionShade {
    /// CSS class for the region path
    pub fn class(&self) -> &'static str {
        match self {
            RegionShade::Unvisited => "",
            RegionShade::VisitedByMe => "visited-me",
            RegionShade::VisitedBySomeone => "visited-other",
        }
    }
}

/// Region codes visited by the local identity and by anyone on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSets {
    pub mine: BTreeSet<String>,
    pub anyone: BTreeSet<String>,
}

impl VisitedSets {
    pub fn from_records(records: &[VisitRecord], me: Option<&AuthorId>) -> Self {
        let mut sets = Self::default();
        for record in records.iter().filter(|r| r.visited) {
            sets.anyone.insert(record.pref_code.clone());
            if me.is_some_and(|me| me.as_str() == record.user_id) {
                sets.mine.insert(record.pref_code.clone());
            }
        }
        sets
    }

    pub fn is_mine(&self, code: &str) -> bool {
        self.mine.contains(code)
    }

    pub fn shade(&self, code: &str, mode: MapMode) -> RegionShade {
        match mode {
            MapMode::Mine if self.mine.contains(code) => RegionShade::VisitedByMe,
            _ if self.anyone.contains(code) => RegionShade::VisitedBySomeone,
            _ => RegionShade::Unvisited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(user: &str, code: &str, visited: bool) -> VisitRecord {
        VisitRecord {
            board_id: "b".into(),
            user_id: user.into(),
            pref_code: code.into(),
            visited,
        }
    }

    #[test]
    fn test_partition_by_identity() {
        let me = AuthorId::parse("me").unwrap();
        let records = vec![rec("me", "13", true), rec("other", "27", true), rec("me", "01", false)];
        let sets = VisitedSets::from_records(&records, Some(&me));
        assert_eq!(sets.mine.iter().collect::<Vec<_>>(), vec!["13"]);
        assert_eq!(sets.anyone.len(), 2);
        assert!(!sets.anyone.contains("01"));

        let anonymous = VisitedSets::from_records(&records, None);
        assert!(anonymous.mine.is_empty());
    }

    #[test]
    fn test_shade_per_mode() {
        let me = AuthorId::parse("me").unwrap();
        let sets = VisitedSets::from_records(&[rec("me", "13", true), rec("x", "27", true)], Some(&me));
        assert_eq!(sets.shade("13", MapMode::Mine), RegionShade::VisitedByMe);
        assert_eq!(sets.shade("13", MapMode::All), RegionShade::VisitedBySomeone);
        assert_eq!(sets.shade("27", MapMode::Mine), RegionShade::VisitedBySomeone);
        assert_eq!(sets.shade("01", MapMode::All), RegionShade::Unvisited);
    }
}
