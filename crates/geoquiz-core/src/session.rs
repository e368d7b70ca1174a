//! Per-session answer state and scoring.

use crate::error::SessionError;
use crate::model::{Question, ScoreResult};

/// The questions for one resolved country plus the answers typed so far.
///
/// `answers.len() == questions.len()` holds for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<String>,
}

impl QuizSession {
    /// Start a session with one empty answer slot per question.
    pub fn start(questions: Vec<Question>) -> Self {
        let answers = vec![String::new(); questions.len()];
        Self { questions, answers }
    }

    /// Overwrite the answer at `index`. No trimming or length limit is applied.
    pub fn set_answer(&mut self, index: usize, text: impl Into<String>) -> Result<(), SessionError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Score the current answers. Does not lock the session; calling again
    /// with the same answers yields the same result.
    pub fn submit(&self) -> ScoreResult {
        score(&self.questions, &self.answers)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Compare index-aligned answers against their questions.
pub fn score(questions: &[Question], answers: &[String]) -> ScoreResult {
    let missed: Vec<Question> = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| !answer_matches(answer, &question.expected_answer))
        .map(|(question, _)| question.clone())
        .collect();

    let total_count = questions.len();
    ScoreResult {
        correct_count: total_count - missed.len(),
        total_count,
        missed,
    }
}

/// Case-insensitive comparison after trimming the given answer.
///
/// The expected answer is lower-cased but not trimmed, so catalog entries
/// with stray whitespace can never be matched.
pub fn answer_matches(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QuizCatalog;
    use crate::model::Country;

    fn france() -> QuizSession {
        QuizSession::start(
            QuizCatalog::builtin()
                .lookup(&Country::named("France"))
                .to_vec(),
        )
    }

    fn answer_all(session: &mut QuizSession, answers: &[&str]) {
        for (i, a) in answers.iter().enumerate() {
            session.set_answer(i, *a).unwrap();
        }
    }

    #[test]
    fn start_fills_empty_answers() {
        for n in 0..5 {
            let questions = (0..n)
                .map(|i| Question::new(format!("q{i}"), format!("a{i}")))
                .collect();
            let session = QuizSession::start(questions);
            assert_eq!(session.answers().len(), n);
            assert!(session.answers().iter().all(String::is_empty));
        }
    }

    #[test]
    fn all_correct() {
        let mut session = france();
        answer_all(&mut session, &["Paris", "101", "Torre Eiffel"]);

        let result = session.submit();
        assert_eq!(result.correct_count, 3);
        assert_eq!(result.total_count, 3);
        assert!(result.missed.is_empty());
    }

    #[test]
    fn one_wrong() {
        let mut session = france();
        answer_all(&mut session, &["paris", "100", "Torre Eiffel"]);

        let result = session.submit();
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.total_count, 3);
        assert_eq!(
            result.missed,
            vec![Question::new("Quantos departamentos a França tem?", "101")]
        );
    }

    #[test]
    fn unanswered_questions_are_missed() {
        let result = france().submit();
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.missed.len(), 3);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert!(answer_matches(" Paris ", "Paris"));
        assert!(answer_matches("paris", "Paris"));
        assert!(answer_matches("\tTÓQUIO\n", "Tóquio"));
        assert!(!answer_matches("Pariss", "Paris"));
    }

    #[test]
    fn expected_answer_is_not_trimmed() {
        assert!(!answer_matches("Paris", "Paris "));
        assert!(!answer_matches("Paris ", "Paris "));
    }

    #[test]
    fn submit_is_repeatable_and_does_not_lock() {
        let mut session = france();
        answer_all(&mut session, &["Paris", "wrong", ""]);

        let first = session.submit();
        let second = session.submit();
        assert_eq!(first, second);

        session.set_answer(1, "101").unwrap();
        let third = session.submit();
        assert_eq!(third.correct_count, 2);
    }

    #[test]
    fn counts_always_add_up() {
        let mut session = france();
        let attempts: [[&str; 3]; 4] = [
            ["", "", ""],
            ["Paris", "", ""],
            ["x", "101", "torre eiffel"],
            ["PARIS", " 101 ", "Torre Eiffel"],
        ];
        for attempt in attempts {
            answer_all(&mut session, &attempt);
            let result = session.submit();
            assert_eq!(result.correct_count + result.missed.len(), result.total_count);
        }
    }

    #[test]
    fn set_answer_out_of_range() {
        let mut session = france();
        let err = session.set_answer(3, "x").unwrap_err();
        assert_eq!(err, SessionError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(session.answers().len(), 3);

        let mut empty = QuizSession::start(Vec::new());
        assert!(empty.set_answer(0, "x").is_err());
    }

    #[test]
    fn set_answer_keeps_text_verbatim() {
        let mut session = france();
        let long = "x".repeat(10_000);
        session.set_answer(0, "  <b>Paris</b>  ").unwrap();
        session.set_answer(2, long.clone()).unwrap();
        assert_eq!(session.answer(0), Some("  <b>Paris</b>  "));
        assert_eq!(session.answer(2), Some(long.as_str()));
        assert_eq!(session.answer(1), Some(""));
    }
}
