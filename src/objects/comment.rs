variant! {
    /// A comment on a card. Replies carry the id of their parent.
    pub struct Comment;
    fields {
        id: str,
        content: str,
        user_id: str,
        card_id: str,
        parent_id: str,
        time_created: millis,
        time_updated: millis,
    }
}

impl Comment {
    time_accessor! {
        created_at => time_created,
        updated_at => time_updated,
    }

    pub fn replies(&self) -> Vec<Comment> {
        self.object.variant_list("replies")
    }

    pub fn is_reply(&self) -> bool {
        self.object.truthy("parent_id")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Variant;
    use serde_json::json;

    #[test]
    fn test_replies_and_reply_flag() {
        let raw = json!({
            "type": "comment",
            "id": "cm1",
            "content": "Looks good",
            "replies": [{"id": "cm2", "parent_id": "cm1", "content": "Thanks"}]
        });
        let comment = Comment::from_map(raw.as_object().unwrap().clone());

        assert_eq!(comment.content(), Some("Looks good"));
        assert!(!comment.is_reply());

        let replies = comment.replies();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].is_reply());
        assert_eq!(replies[0].parent_id(), Some("cm1"));
    }
}
