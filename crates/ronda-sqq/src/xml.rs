//! XML rendering of a round into the SpeedQuizzing document shape.

use serde::Serialize;

use ronda_core::domain::question::Question;
use ronda_core::domain::round::Round;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// Document root. Field order is the element order in the file.
#[derive(Debug, Serialize)]
#[serde(rename = "round")]
struct RoundXml<'a> {
  game: &'a str,
  title: &'a str,
  points_per_question: u32,
  go_wide: bool,
  speed_bonus: bool,
  questions: QuestionsXml<'a>,
}

#[derive(Debug, Serialize)]
struct QuestionsXml<'a> {
  question: Vec<QuestionXml<'a>>,
}

#[derive(Debug, Serialize)]
struct QuestionXml<'a> {
  user_view: &'a str,
  q: &'a str,
  short_answer: String,
  long_answer: &'a str,
  picture: &'a str,
  id: u32,
}

impl<'a> From<&'a Question> for QuestionXml<'a> {
  fn from(question: &'a Question) -> Self {
    QuestionXml {
      user_view: &question.user_view,
      q: &question.prompt,
      short_answer: question.short_answer.to_string(),
      long_answer: &question.long_answer,
      picture: &question.picture,
      id: question.number,
    }
  }
}

/// Serializes the round to the full document text, declaration included.
pub fn render_round(round: &Round) -> Result<String, String> {
  let doc = RoundXml {
    game: &round.game,
    title: &round.title,
    points_per_question: round.points_per_question,
    go_wide: round.go_wide,
    speed_bonus: round.speed_bonus,
    questions: QuestionsXml { question: round.questions.iter().map(QuestionXml::from).collect() },
  };

  let body = quick_xml::se::to_string(&doc).map_err(|e| e.to_string())?;

  Ok(format!("{XML_DECLARATION}\n{body}"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use ronda_core::domain::question::{Question, QuizTarget};

  fn sample_round() -> Round {
    let question = Question {
      target: QuizTarget::Artist,
      number: 1,
      prompt: "MUSIC ROUND #1 - Tap on the first letter of the ARTIST name".to_string(),
      short_answer: 'B',
      long_answer: "The Beatles with \"Let It Be\"".to_string(),
      user_view: "letters".to_string(),
      picture: "AAAA".to_string(),
    };
    Round::new("01 02 2026", vec![question])
  }

  #[test]
  fn renders_the_round_envelope() {
    let doc = render_round(&sample_round()).unwrap();

    assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(doc.contains("<game>Quizsentials</game>"));
    assert!(doc.contains("<title>SQ Music Round 01 02 2026</title>"));
    assert!(doc.contains("<points_per_question>10</points_per_question>"));
    assert!(doc.contains("<go_wide>true</go_wide>"));
    assert!(doc.contains("<speed_bonus>true</speed_bonus>"));
  }

  #[test]
  fn renders_one_question_element_per_question() {
    let doc = render_round(&sample_round()).unwrap();

    assert!(doc.contains("<questions><question>"));
    assert!(doc.contains("<user_view>letters</user_view>"));
    assert!(doc.contains("<short_answer>B</short_answer>"));
    assert!(doc.contains("<picture>AAAA</picture>"));
    assert!(doc.contains("<id>1</id>"));
  }
}
