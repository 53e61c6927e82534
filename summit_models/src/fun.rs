use nutype::nutype;

/// Maximum number of characters (Unicode scalar values) kept from each fun
/// question.
pub const FUN_QUESTION_MAX_CHARS: usize = 500;

/// Free-text question for the fun endpoint. Longer input is silently cut off
/// after [`FUN_QUESTION_MAX_CHARS`] characters.
#[nutype(
    sanitize(with = |s: String| s.chars().take(FUN_QUESTION_MAX_CHARS).collect::<String>()),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Display)
)]
pub struct FunQuestion(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunQuestions {
    pub universe_question: FunQuestion,
    pub idea_awake: FunQuestion,
}

impl FunQuestions {
    pub fn is_empty(&self) -> bool {
        self.universe_question.is_empty() && self.idea_awake.is_empty()
    }
}
