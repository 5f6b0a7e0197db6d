use std::collections::BTreeSet;

use crate::extract::ExtractionResult;

/// Tokens merged across every input of a run.
///
/// All three groups are sets, so absorbing results in any order (or absorbing
/// the same result twice) yields the same harvest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Harvest {
    pub words: BTreeSet<String>,
    pub hyphen_words: BTreeSet<String>,
    pub filenames: BTreeSet<String>,
}

impl Harvest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, result: ExtractionResult) {
        self.words.extend(result.words);
        self.hyphen_words.extend(result.hyphen_words);
        self.filenames.extend(result.filenames);
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.hyphen_words.is_empty() && self.filenames.is_empty()
    }
}

impl FromIterator<ExtractionResult> for Harvest {
    fn from_iter<I: IntoIterator<Item = ExtractionResult>>(iter: I) -> Self {
        let mut harvest = Harvest::new();
        for result in iter {
            harvest.absorb(result);
        }
        harvest
    }
}
