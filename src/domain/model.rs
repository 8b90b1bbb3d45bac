/// A validated invocation: the name to greet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
}

impl Invocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
