//! Todo records as exchanged with the remote resource.

use serde::{Deserialize, Serialize};

/// A todo as stored on the server.
///
/// The identifier is assigned by the server on creation and serialized under
/// the `_id` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

/// The payload of a creation request: a todo without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

impl NewTodo {
    /// Attach a server-assigned identifier.
    pub fn with_id(self, id: impl Into<String>) -> Todo {
        Todo {
            id: id.into(),
            owner: self.owner,
            status: self.status,
            category: self.category,
            body: self.body,
        }
    }
}

/// Body of a successful creation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_uses_underscore_id_key() {
        let json = r#"{"_id":"Frys_id","owner":"Fry","status":true,"category":"video games","body":"Catch five fish"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, "Frys_id");
        assert!(todo.status);

        let back = serde_json::to_value(&todo).unwrap();
        assert_eq!(back["_id"], "Frys_id");
        assert!(back.get("id").is_none());
    }

    #[test]
    fn new_todo_has_no_identifier() {
        let todo = NewTodo {
            owner: "Barry".into(),
            status: false,
            category: "groceries".into(),
            body: "Milk".into(),
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(value["status"], false);
    }

    #[test]
    fn with_id_keeps_fields() {
        let todo = NewTodo {
            owner: "Blanche".into(),
            status: true,
            category: "software design".into(),
            body: "Finish lab 4".into(),
        }
        .with_id("abc");
        assert_eq!(todo.id, "abc");
        assert_eq!(todo.owner, "Blanche");
        assert_eq!(todo.body, "Finish lab 4");
    }
}
