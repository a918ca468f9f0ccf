use crate::object::DynamicObject;
use crate::objects::Member;

variant! {
    /// A space. The API addresses spaces under `/projects`.
    pub struct Space;
    fields {
        id: str,
        team_id: str,
        title: str,
        description: str,
        icon: json,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Space {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn members(&self) -> Vec<Member> {
        self.object.variant_list("members")
    }

    pub fn archived(&self) -> Option<DynamicObject> {
        self.object.object_field("archived")
    }

    pub fn is_archived(&self) -> bool {
        self.object.truthy("archived")
    }
}
