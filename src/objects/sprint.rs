variant! {
    /// A time-boxed sprint within a space.
    pub struct Sprint;
    fields {
        id: str,
        team_id: str,
        space_id: str,
        title: str,
        description: str,
        status: str,
        start_date: millis,
        due_date: millis,
        user_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Sprint {
    time_accessor! {
        start_time => start_date,
        due_time => due_date,
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn is_active(&self) -> bool {
        self.status() == Some("active")
    }

    pub fn is_complete(&self) -> bool {
        self.status() == Some("complete")
    }

    /// Not started yet.
    pub fn is_planned(&self) -> bool {
        self.status() == Some("planned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Variant;
    use serde_json::json;

    fn sprint(status: &str) -> Sprint {
        Sprint::from_map(json!({"status": status}).as_object().unwrap().clone())
    }

    #[test]
    fn test_status_predicates() {
        assert!(sprint("active").is_active());
        assert!(sprint("complete").is_complete());
        assert!(sprint("planned").is_planned());

        let other = sprint("cancelled");
        assert!(!other.is_active() && !other.is_complete() && !other.is_planned());
        assert!(!Sprint::default().is_active());
    }
}
