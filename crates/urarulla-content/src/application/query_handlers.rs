//! Queries over loaded content.

use urarulla_core::rng::DeterministicRng;

use crate::domain::records::{
    CharacteristicQuestion, IndustryQuestion, QuestionCategory, TrickyQuestion,
};
use crate::domain::store::ContentStore;

/// A borrowed question of any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRef<'a> {
    /// A characteristic question.
    Characteristic(&'a CharacteristicQuestion),
    /// An industry question.
    Industry(&'a IndustryQuestion),
    /// A tricky question.
    Tricky(&'a TrickyQuestion),
}

impl QuestionRef<'_> {
    /// The question text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Characteristic(q) => &q.question,
            Self::Industry(q) => &q.question,
            Self::Tricky(q) => &q.question,
        }
    }
}

fn pick<'a, T>(items: &'a [T], rng: &mut dyn DeterministicRng) -> Option<&'a T> {
    let last = u32::try_from(items.len().checked_sub(1)?).unwrap_or(u32::MAX);
    let index = usize::try_from(rng.next_u32_range(0, last)).ok()?;
    items.get(index)
}

/// Draws a uniformly random question from `category`.
///
/// Returns `None` if the category is empty.
pub fn draw_question<'a>(
    store: &'a ContentStore,
    category: QuestionCategory,
    rng: &mut dyn DeterministicRng,
) -> Option<QuestionRef<'a>> {
    let questions = store.questions();
    let drawn = match category {
        QuestionCategory::Characteristic => {
            pick(&questions.characteristic, rng).map(QuestionRef::Characteristic)
        }
        QuestionCategory::Industry => pick(&questions.industry, rng).map(QuestionRef::Industry),
        QuestionCategory::Tricky => pick(&questions.tricky, rng).map(QuestionRef::Tricky),
    };
    if drawn.is_none() {
        tracing::warn!(?category, "no questions available in category");
    }
    drawn
}

/// Industry questions for one industry, in file order.
pub fn industry_questions<'a>(
    store: &'a ContentStore,
    industry: &'a str,
) -> impl Iterator<Item = &'a IndustryQuestion> {
    store
        .questions()
        .industry
        .iter()
        .filter(move |q| q.industry.eq_ignore_ascii_case(industry))
}

#[cfg(test)]
mod tests {
    use urarulla_test_support::{MockRng, SequenceRng};

    use super::*;
    use crate::domain::records::Questions;

    fn tricky(text: &str) -> TrickyQuestion {
        TrickyQuestion {
            question: text.to_owned(),
            answers: vec!["yes".to_owned(), "no".to_owned()],
            correct_answer: 1,
        }
    }

    fn industry(industry: &str, text: &str) -> IndustryQuestion {
        IndustryQuestion {
            industry: industry.to_owned(),
            question: text.to_owned(),
            answers: vec!["a".to_owned()],
            correct_answer: 0,
        }
    }

    fn store() -> ContentStore {
        ContentStore::new(
            Questions {
                characteristic: Vec::new(),
                industry: vec![
                    industry("Health", "h1"),
                    industry("Tech", "t1"),
                    industry("health", "h2"),
                ],
                tricky: vec![tricky("first"), tricky("second"), tricky("third")],
            },
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_draw_question_uses_rng_index() {
        // Arrange
        let store = store();
        let mut rng = SequenceRng::new(vec![2]);

        // Act
        let drawn = draw_question(&store, QuestionCategory::Tricky, &mut rng);

        // Assert
        assert_eq!(drawn.map(|q| q.text().to_owned()), Some("third".to_owned()));
    }

    #[test]
    fn test_draw_question_returns_none_for_empty_category() {
        let store = store();

        let drawn = draw_question(&store, QuestionCategory::Characteristic, &mut MockRng);

        assert!(drawn.is_none());
    }

    #[test]
    fn test_industry_questions_match_case_insensitively() {
        let store = store();

        let texts: Vec<&str> = industry_questions(&store, "HEALTH")
            .map(|q| q.question.as_str())
            .collect();

        assert_eq!(texts, ["h1", "h2"]);
    }
}
