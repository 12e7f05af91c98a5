use std::fmt;

pub(super) const FRONT_MATTER_MARKER: &str = "---";
pub(super) const PLACEHOLDER_BODY: &str = "Write your content here.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeneratedDocument {
    front_matter: String,
    body: &'static str,
}

impl GeneratedDocument {
    pub(super) fn new(front_matter: String) -> Self {
        Self {
            front_matter,
            body: PLACEHOLDER_BODY,
        }
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // front_matter already ends with the closing marker line
        write!(f, "{}\n{}\n", self.front_matter, self.body)
    }
}
