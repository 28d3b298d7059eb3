//! Regions: named groups of cantons used as the unit of selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::canton::Canton;

/// Opaque, stable region key.
///
/// In flat mode this is the canton short code, in grouped mode the region
/// abbreviation. The human readable label lives in [`RegionName`] and is
/// never used for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<Canton> for RegionId {
    fn from(canton: Canton) -> Self {
        Self::new(canton.code())
    }
}

/// Identifier plus display label of a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionName {
    pub id: RegionId,
    pub display_name: String,
}

impl RegionName {
    pub fn new(id: impl Into<RegionId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A named, ordered group of cantons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: RegionName,
    pub members: Vec<Canton>,
}

impl Region {
    pub fn id(&self) -> &RegionId {
        &self.name.id
    }

    pub fn display_name(&self) -> &str {
        &self.name.display_name
    }

    pub fn contains(&self, canton: Canton) -> bool {
        self.members.contains(&canton)
    }
}

/// How cantons are grouped into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionMode {
    /// One region per canton.
    #[default]
    Flat,
    /// The curated ski regions.
    Grouped,
}

/// The curated ski regions: abbreviation, label, members.
pub const SKI_REGIONS: &[(&str, &str, &[Canton])] = &[
    ("WW", "Waadt und Wallis", &[Canton::VD, Canton::VS]),
    ("BE", "Berner Oberland", &[Canton::BE]),
    (
        "ZS",
        "Zentralschweiz",
        &[Canton::LU, Canton::UR, Canton::SZ, Canton::OW, Canton::NW, Canton::ZG],
    ),
    ("GR", "Graubünden", &[Canton::GR]),
    ("OS", "Ostschweiz", &[Canton::SG, Canton::GL]),
    ("TI", "Tessin", &[Canton::TI]),
];

/// Build the regions for `mode`, in display order.
///
/// Grouped mode lists the ski regions first; cantons outside every ski
/// region follow as single-canton regions so each canton stays reachable.
pub fn group_into_regions(mode: RegionMode) -> Vec<Region> {
    let single = |canton: Canton| Region {
        name: RegionName::new(canton, canton.name()),
        members: vec![canton],
    };

    match mode {
        RegionMode::Flat => Canton::ALL.into_iter().map(single).collect(),
        RegionMode::Grouped => {
            let mut regions: Vec<Region> = SKI_REGIONS
                .iter()
                .map(|(id, label, members)| Region {
                    name: RegionName::new(*id, *label),
                    members: members.to_vec(),
                })
                .collect();

            let rest: Vec<Region> = Canton::ALL
                .into_iter()
                .filter(|canton| !regions.iter().any(|r| r.contains(*canton)))
                .map(single)
                .collect();
            regions.extend(rest);
            regions
        }
    }
}
