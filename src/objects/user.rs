variant! {
    /// A workspace user.
    pub struct User;
    fields {
        user_id: str,
        display_name: str,
        email: str,
        avatar: json,
        role: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl User {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    /// Same as [`User::user_id`]; users have no separate `id`.
    pub fn id(&self) -> Option<&str> {
        self.user_id()
    }
}
