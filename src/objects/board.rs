use crate::object::DynamicObject;

variant! {
    /// A board: lists of cards inside a space.
    pub struct Board;
    fields {
        id: str,
        team_id: str,
        space_id: str,
        title: str,
        description: str,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Board {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    /// Board columns, in board order.
    pub fn lists(&self) -> Vec<List> {
        self.object.variant_list("lists")
    }

    pub fn archived(&self) -> Option<DynamicObject> {
        self.object.object_field("archived")
    }

    pub fn is_archived(&self) -> bool {
        self.object.truthy("archived")
    }
}

variant! {
    /// A board column. Cards sit in exactly one list.
    pub struct List;
    fields {
        id: str,
        board_id: str,
        title: str,
        color: str,
        position: f64,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl List {
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
