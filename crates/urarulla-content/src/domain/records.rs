//! Content records as they appear in the bundled JSON files.

use serde::{Deserialize, Serialize};
use urarulla_core::characteristic::{Characteristic, Characteristics};

/// One answer to a characteristic question and the score it awards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicAnswer {
    /// Answer text shown to the player.
    pub text: String,
    /// Characteristic the answer contributes to.
    pub characteristic: Characteristic,
    /// Points awarded when chosen.
    pub points: i32,
}

/// A personality question; every answer moves one characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicQuestion {
    /// Question text.
    pub question: String,
    /// Possible answers.
    pub answers: Vec<CharacteristicAnswer>,
}

/// A knowledge question about an industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryQuestion {
    /// Industry the question belongs to.
    pub industry: String,
    /// Question text.
    pub question: String,
    /// Possible answers.
    pub answers: Vec<String>,
    /// Index into `answers`.
    pub correct_answer: usize,
}

/// A trick question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickyQuestion {
    /// Question text.
    pub question: String,
    /// Possible answers.
    pub answers: Vec<String>,
    /// Index into `answers`.
    pub correct_answer: usize,
}

/// A degree or career path a player can be matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    /// Display name.
    pub name: String,
    /// Industry the degree leads into.
    pub industry: String,
    /// Short description.
    pub description: String,
    /// Characteristic profile the degree suits.
    pub characteristics: Characteristics,
}

/// Definition of a characteristic for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicInfo {
    /// Which characteristic this describes.
    pub characteristic: Characteristic,
    /// Display title.
    pub title: String,
    /// Description.
    pub description: String,
}

/// A skill associated with a characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicSkill {
    /// Which characteristic the skill belongs to.
    pub characteristic: Characteristic,
    /// Skill name.
    pub skill: String,
    /// Description.
    pub description: String,
}

/// The three question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionCategory {
    /// See [`CharacteristicQuestion`].
    Characteristic,
    /// See [`IndustryQuestion`].
    Industry,
    /// See [`TrickyQuestion`].
    Tricky,
}

/// All questions, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questions {
    /// Characteristic questions.
    pub characteristic: Vec<CharacteristicQuestion>,
    /// Industry questions.
    pub industry: Vec<IndustryQuestion>,
    /// Tricky questions.
    pub tricky: Vec<TrickyQuestion>,
}

impl Questions {
    /// Number of questions in `category`.
    #[must_use]
    pub fn len(&self, category: QuestionCategory) -> usize {
        match category {
            QuestionCategory::Characteristic => self.characteristic.len(),
            QuestionCategory::Industry => self.industry.len(),
            QuestionCategory::Tricky => self.tricky.len(),
        }
    }

    /// Whether `category` has no questions.
    #[must_use]
    pub fn is_empty(&self, category: QuestionCategory) -> bool {
        self.len(category) == 0
    }
}

// File-level wrappers. Each bundled file holds a single named array.

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DegreesFile {
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CharacteristicInfosFile {
    pub characteristic_infos: Vec<CharacteristicInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CharacteristicSkillsFile {
    pub characteristic_skills: Vec<CharacteristicSkill>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CharacteristicsQuestionsFile {
    pub characteristics_questions: Vec<CharacteristicQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndustryQuestionsFile {
    pub industry_questions: Vec<IndustryQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrickyQuestionsFile {
    pub tricky_questions: Vec<TrickyQuestion>,
}
