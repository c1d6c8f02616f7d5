//! Read-only index over the existing association snapshot.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Internal marker record key.
pub type MarkerKey = i64;

/// Groupings over the existing (accession ID, marker) associations.
///
/// Built once per run from the ground-truth snapshot and never mutated
/// afterwards; the classifier and the generator read the same snapshot.
#[derive(Debug, Default)]
pub struct AssociationIndex {
    markers_by_id: HashMap<String, BTreeSet<MarkerKey>>,
    /// Markers holding more than one accession ID across the whole index.
    shared_markers: HashSet<MarkerKey>,
    len: usize,
}

impl AssociationIndex {
    /// Build the index from the full association snapshot.
    ///
    /// Duplicate pairs in the snapshot collapse to one association.
    pub fn build<I, S>(associations: I) -> Self
    where
        I: IntoIterator<Item = (S, MarkerKey)>,
        S: Into<String>,
    {
        let mut markers_by_id: HashMap<String, BTreeSet<MarkerKey>> = HashMap::new();
        let mut ids_by_marker: HashMap<MarkerKey, HashSet<String>> = HashMap::new();
        let mut len = 0;

        for (accession, marker) in associations {
            let accession = accession.into();
            if markers_by_id
                .entry(accession.clone())
                .or_default()
                .insert(marker)
            {
                len += 1;
            }
            ids_by_marker.entry(marker).or_default().insert(accession);
        }

        let shared_markers = ids_by_marker
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(marker, _)| marker)
            .collect();

        Self {
            markers_by_id,
            shared_markers,
            len,
        }
    }

    /// Markers currently associated with an accession ID, ascending.
    pub fn markers_for<'a>(&'a self, accession: &str) -> impl Iterator<Item = MarkerKey> + 'a {
        self.markers_by_id
            .get(accession)
            .into_iter()
            .flatten()
            .copied()
    }

    /// How many markers the accession ID is associated with.
    pub fn marker_count(&self, accession: &str) -> usize {
        self.markers_by_id
            .get(accession)
            .map_or(0, |markers| markers.len())
    }

    /// The single associated marker, or `None` when the ID has zero or
    /// multiple associations.
    pub fn sole_marker(&self, accession: &str) -> Option<MarkerKey> {
        match self.markers_by_id.get(accession) {
            Some(markers) if markers.len() == 1 => markers.first().copied(),
            _ => None,
        }
    }

    /// Whether the marker holds more than one accession ID anywhere in the
    /// snapshot, not just among the requested IDs.
    pub fn is_shared_marker(&self, marker: MarkerKey) -> bool {
        self.shared_markers.contains(&marker)
    }

    /// Number of distinct associations in the snapshot.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
