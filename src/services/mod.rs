pub mod answer_mix;
pub mod completion_gateway;
pub mod question_service;
pub mod response_validator;
pub mod sanitizer;
pub mod scoring_service;
