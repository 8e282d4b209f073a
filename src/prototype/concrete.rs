use super::Prototype;

/// A prototype that owns all of its data, so shallow and deep copies coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototype {
    id: u32,
    tags: Vec<String>,
}

impl ConcretePrototype {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

impl Prototype for ConcretePrototype {
    fn shallow_copy(&self) -> Self {
        self.clone()
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}
