use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object the document writer emits
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    /// (page index, link index on that page)
    LinkAnnotation(usize, usize),
    Font(usize),
    CidFont(usize),
    ToUnicode(usize),
    FontDescriptor(usize),
    FontData(usize),
}

/// Hands out sequential object ids and remembers which object each id was generated for
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }

    /// Returns the ref already generated for `ref_type`, generating one if there is none yet
    pub fn gen_or_get(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_refs_are_unique_and_remembered() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let page = refs.gen(RefType::Page(0));
        assert_ne!(catalog, page);
        assert_eq!(refs.get(RefType::Page(0)), Some(page));
        assert_eq!(refs.get(RefType::Page(1)), None);
        assert_eq!(refs.gen_or_get(RefType::Catalog), catalog);
    }
}
