//! See [`Todo`].

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A todo item as stored in the document store.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Todo {
    /// The item's store-assigned identifier. `None` only before insertion; skipping the field
    /// when serializing lets the store assign it.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// The item's text.
    pub body: String,

    /// Whether the item is completed.
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, oid::ObjectId};

    use super::*;

    #[test]
    fn completed_defaults_to_false_on_decode() {
        let id = ObjectId::new();
        let document = doc! { "_id": id, "body": "buy milk" };

        let todo: Todo = mongodb::bson::from_document(document)
            .expect("document without a `completed` field should decode");

        assert_eq!(
            todo,
            Todo {
                id: Some(id),
                body: "buy milk".into(),
                completed: false,
            },
            "decoded todo should default to incomplete"
        );
    }

    #[test]
    fn unsaved_todo_serializes_without_an_id() {
        let todo = Todo {
            id: None,
            body: "buy milk".into(),
            completed: false,
        };

        let document =
            mongodb::bson::to_document(&todo).expect("unsaved todo should serialize");

        assert!(
            !document.contains_key("_id"),
            "`_id` should be left for the store to assign"
        );
    }
}
