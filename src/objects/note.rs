variant! {
    /// A meeting or free-form note.
    pub struct Note;
    fields {
        id: str,
        team_id: str,
        title: str,
        content: str,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Note {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }
}
