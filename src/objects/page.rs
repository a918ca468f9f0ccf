use crate::object::DynamicObject;

variant! {
    /// A documentation page inside a space.
    pub struct Page;
    fields {
        id: str,
        team_id: str,
        space_id: str,
        title: str,
        content: str,
        icon: json,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Page {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn archived(&self) -> Option<DynamicObject> {
        self.object.object_field("archived")
    }

    pub fn is_archived(&self) -> bool {
        self.object.truthy("archived")
    }
}
