use crate::object::DynamicObject;

variant! {
    /// A project, called an epic in the API.
    pub struct Project;
    fields {
        id: str,
        team_id: str,
        space_id: str,
        title: str,
        description: str,
        status: str,
        icon: json,
        user_id: str,
        start_date: millis,
        due_date: millis,
        time_created: millis,
        time_updated: millis,
    }
}

impl Project {
    time_accessor! {
        start_time => start_date,
        due_time => due_date,
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
