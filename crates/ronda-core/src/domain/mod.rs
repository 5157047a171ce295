pub mod answer;
pub mod question;
pub mod round;
pub mod track;

pub use answer::AnswerText;
pub use question::{Question, QuizTarget};
pub use round::Round;
pub use track::Track;
