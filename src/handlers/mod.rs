pub mod question_handler;

pub use question_handler::{check_open_answer, generate_questions, health_check};
