use serde::Serialize;
use serde_json::Value;
use summit_models::fun::{FunQuestion, FunQuestions};

/// The two free-text fields of a fun request, taken from any JSON value.
///
/// Values that are not strings are replaced by their JSON text. Missing
/// fields, `null` fields and bodies that are not objects count as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFunQuestions {
    pub universe_question: String,
    pub idea_awake: String,
}

impl From<Value> for ApiFunQuestions {
    fn from(mut value: Value) -> Self {
        let mut field = |key: &str| into_text(value.get_mut(key).map(Value::take));
        Self {
            universe_question: field("universeQuestion"),
            idea_awake: field("ideaAwake"),
        }
    }
}

fn into_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

impl From<ApiFunQuestions> for FunQuestions {
    fn from(value: ApiFunQuestions) -> Self {
        Self {
            universe_question: FunQuestion::new(value.universe_question),
            idea_awake: FunQuestion::new(value.idea_awake),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiFunAnswer {
    pub ok: bool,
    pub answer: String,
}
