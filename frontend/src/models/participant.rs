//! Participant Models
//!
//! Roster entries and where each entry's portrait lives on disk.

use std::path::{Path, PathBuf};

/// Roster shown when the configuration does not provide one.
pub const DEFAULT_ROSTER: [&str; 14] = [
    "Jenelia",
    "Joe Carlson",
    "Lucy Sera",
    "Michael Smith",
    "Jennifer David",
    "Robert Johnson",
    "Rachel Green",
    "Daniel Williams",
    "Carol Mark",
    "Chris Harris",
    "Phoebe Buffay",
    "Andrew Brown",
    "Ross Geller",
    "Chandler Bing",
];

// Portrait sets are numbered 1..=PORTRAITS_PER_SET
const PORTRAITS_PER_SET: usize = 50;

/// Participant information
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Upper-cased first letter, shown when the portrait can't be loaded.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Builds the roster from configured names.
pub fn roster_from_names(names: &[String]) -> Vec<Participant> {
    names.iter().map(Participant::new).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortraitSet {
    Women,
    Men,
}

impl PortraitSet {
    pub fn dir_name(&self) -> &'static str {
        match self {
            PortraitSet::Women => "women",
            PortraitSet::Men => "men",
        }
    }
}

/// Deterministic portrait for a roster position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortraitSource {
    pub set: PortraitSet,
    pub image_id: usize,
}

impl PortraitSource {
    /// Even positions take `women`, odd ones `men`; ids wrap after 50.
    pub fn for_index(index: usize) -> Self {
        let set = if index % 2 == 0 {
            PortraitSet::Women
        } else {
            PortraitSet::Men
        };

        Self {
            set,
            image_id: (index % PORTRAITS_PER_SET) + 1,
        }
    }

    /// `<root>/<set>/<id>.jpg`
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.set.dir_name())
            .join(format!("{}.jpg", self.image_id))
    }
}
