//! The loaded, immutable content store.

use urarulla_core::characteristic::Characteristic;
use urarulla_core::event::ContentCounts;

use super::records::{CharacteristicInfo, CharacteristicSkill, Degree, Questions};

/// Read-only reference content.
///
/// Only [`crate::application::loader::load_content`] builds one, and only
/// after every resource parsed, so a `ContentStore` value is always complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    questions: Questions,
    degrees: Vec<Degree>,
    characteristic_infos: Vec<CharacteristicInfo>,
    characteristic_skills: Vec<CharacteristicSkill>,
}

impl ContentStore {
    pub(crate) fn new(
        questions: Questions,
        degrees: Vec<Degree>,
        characteristic_infos: Vec<CharacteristicInfo>,
        characteristic_skills: Vec<CharacteristicSkill>,
    ) -> Self {
        Self {
            questions,
            degrees,
            characteristic_infos,
            characteristic_skills,
        }
    }

    /// All questions.
    #[must_use]
    pub fn questions(&self) -> &Questions {
        &self.questions
    }

    /// Degrees, in file order.
    #[must_use]
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Characteristic definitions, in file order.
    #[must_use]
    pub fn characteristic_infos(&self) -> &[CharacteristicInfo] {
        &self.characteristic_infos
    }

    /// Characteristic skills, in file order.
    #[must_use]
    pub fn characteristic_skills(&self) -> &[CharacteristicSkill] {
        &self.characteristic_skills
    }

    /// First definition for `kind`, if any.
    #[must_use]
    pub fn characteristic_info(&self, kind: Characteristic) -> Option<&CharacteristicInfo> {
        self.characteristic_infos
            .iter()
            .find(|info| info.characteristic == kind)
    }

    /// Skills belonging to `kind`, in file order.
    pub fn skills_for(&self, kind: Characteristic) -> impl Iterator<Item = &CharacteristicSkill> {
        self.characteristic_skills
            .iter()
            .filter(move |skill| skill.characteristic == kind)
    }

    /// Record counts per resource.
    #[must_use]
    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            degrees: self.degrees.len(),
            characteristic_infos: self.characteristic_infos.len(),
            characteristic_skills: self.characteristic_skills.len(),
            characteristic_questions: self.questions.characteristic.len(),
            industry_questions: self.questions.industry.len(),
            tricky_questions: self.questions.tricky.len(),
        }
    }
}
