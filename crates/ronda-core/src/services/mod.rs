pub mod question_builder;
pub mod round_service;

pub use question_builder::{build_question, build_question_set, select_target};
pub use round_service::RoundService;
