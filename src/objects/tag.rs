use std::fmt;

variant! {
    /// A label that can be attached to cards.
    pub struct Tag;
    fields {
        id: str,
        team_id: str,
        project_id: str,
        name: str,
        slug: str,
        color: str,
        total_cards: i64,
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}
