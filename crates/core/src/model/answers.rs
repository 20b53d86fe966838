use std::collections::BTreeMap;

use crate::model::ids::OptionId;

/// Sparse mapping from question index to the chosen option.
///
/// Only answered questions are present. Option ids are stored as given; they are
/// never checked against the question's options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    chosen: BTreeMap<usize, OptionId>,
}

impl Answers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice, replacing any earlier one for the same question.
    pub fn choose(&mut self, question_index: usize, option_id: OptionId) {
        self.chosen.insert(question_index, option_id);
    }

    #[must_use]
    pub fn get(&self, question_index: usize) -> Option<OptionId> {
        self.chosen.get(&question_index).copied()
    }

    /// Number of distinct answered question indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, OptionId)> + '_ {
        self.chosen.iter().map(|(index, option)| (*index, *option))
    }
}

impl FromIterator<(usize, OptionId)> for Answers {
    fn from_iter<T: IntoIterator<Item = (usize, OptionId)>>(iter: T) -> Self {
        Self {
            chosen: iter.into_iter().collect(),
        }
    }
}
