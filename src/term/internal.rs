use crate::term::{Namespace, RelationType, Relations, TermId};

#[derive(Debug, Clone)]
pub(crate) struct TermInternal {
    id: TermId,
    name: String,
    namespace: Namespace,
    parents: Relations,
    children: Relations,
    depth: Option<u32>,
    obsolete: bool,
}

impl TermInternal {
    pub fn new<I: Into<TermId>>(id: I, name: &str) -> TermInternal {
        TermInternal {
            id: id.into(),
            name: name.to_string(),
            namespace: Namespace::default(),
            parents: Relations::new(),
            children: Relations::new(),
            depth: None,
            obsolete: false,
        }
    }

    pub fn root_sentinel() -> TermInternal {
        let mut term = TermInternal::new(TermId::root_sentinel(), crate::ROOT_SENTINEL);
        term.depth = Some(0);
        term
    }

    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    pub fn parents(&self) -> &Relations {
        &self.parents
    }

    pub fn children(&self) -> &Relations {
        &self.children
    }

    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    pub fn depth_mut(&mut self) -> &mut Option<u32> {
        &mut self.depth
    }

    pub fn obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn obsolete_mut(&mut self) -> &mut bool {
        &mut self.obsolete
    }

    /// Adds a parent, returns `false` if the exact relation is already present
    pub fn add_parent(&mut self, parent_id: TermId, relation: RelationType) -> bool {
        if self
            .parents
            .iter()
            .any(|(id, rel)| id == &parent_id && rel == &relation)
        {
            return false;
        }
        self.parents.push((parent_id, relation));
        true
    }

    pub fn add_child(&mut self, child_id: TermId, relation: RelationType) -> bool {
        if self
            .children
            .iter()
            .any(|(id, rel)| id == &child_id && rel == &relation)
        {
            return false;
        }
        self.children.push((child_id, relation));
        true
    }
}

impl PartialEq for TermInternal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TermInternal {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_parents_are_ignored() {
        let mut term = TermInternal::new("GO:1", "Foo");
        assert!(term.add_parent("GO:2".into(), RelationType::IsA));
        assert!(!term.add_parent("GO:2".into(), RelationType::IsA));
        assert!(term.add_parent("GO:2".into(), RelationType::PartOf));
        assert_eq!(term.parents().len(), 2);
    }

    #[test]
    fn sentinel_has_depth_zero() {
        let term = TermInternal::root_sentinel();
        assert!(term.id().is_root_sentinel());
        assert_eq!(term.depth(), Some(0));
    }
}
