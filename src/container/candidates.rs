//! Deduplication of fonts extracted from one container.

use std::collections::BTreeMap;

use tracing::debug;

use crate::font::FontData;

/// Fonts collected during a container walk, keyed by display name.
///
/// Archives often bundle the same face twice (a TrueType and an
/// OpenType build, or an OS-specific variant). When two entries claim
/// the same display name the OpenType one wins regardless of arrival
/// order; on an extension tie the entry seen first is kept. A TrueType
/// never displaces an OpenType.
#[derive(Debug, Default)]
pub struct CandidateSet {
    fonts: BTreeMap<String, FontData>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one extracted font, applying the tie-break policy.
    pub fn offer(&mut self, font: FontData) {
        match self.fonts.get(&font.name) {
            None => {
                self.fonts.insert(font.name.clone(), font);
            }
            Some(existing) => {
                let first = existing.extension();
                let second = font.extension();
                if first != second && second == "otf" {
                    debug!(
                        "replacing {} with OpenType variant {} for \"{}\"",
                        existing.file_name, font.file_name, font.name
                    );
                    self.fonts.insert(font.name.clone(), font);
                } else {
                    debug!(
                        "keeping {} over {} for \"{}\"",
                        existing.file_name, font.file_name, font.name
                    );
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Consume the set in display-name order. Install order does not
    /// affect correctness, but a deterministic order keeps failure
    /// short-circuiting reproducible.
    pub fn into_fonts(self) -> impl Iterator<Item = FontData> {
        self.fonts.into_values()
    }
}
