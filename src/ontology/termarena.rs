use crate::term::internal::TermInternal;
use crate::term::TermId;
use std::collections::hash_map::{Values, ValuesMut};
use std::collections::HashMap;

use crate::DEFAULT_NUM_TERMS;

pub(crate) struct Arena {
    terms: HashMap<TermId, TermInternal>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn insert(&mut self, term: TermInternal) {
        self.terms.insert(term.id().clone(), term);
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.terms.contains_key(id)
    }

    pub fn get(&self, id: &TermId) -> Option<&TermInternal> {
        self.terms.get(id)
    }

    pub fn get_mut(&mut self, id: &TermId) -> Option<&mut TermInternal> {
        self.terms.get_mut(id)
    }

    pub fn values(&self) -> Values<'_, TermId, TermInternal> {
        self.terms.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, TermId, TermInternal> {
        self.terms.values_mut()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: HashMap::with_capacity(DEFAULT_NUM_TERMS),
        }
    }
}
