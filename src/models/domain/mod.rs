pub mod question;
pub use question::{
    Answer, ClosedQuestion, ErrorPayload, OpenQuestion, QuestionItem, QuestionRequest,
    QuestionSet, QuestionType,
};
