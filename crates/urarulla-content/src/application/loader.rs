//! One-shot content loading.
//!
//! Every resource is read and parsed before anything is exposed. The store
//! is returned and `DataLoaded` published only once the whole batch has
//! succeeded.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use urarulla_core::event::{DataLoaded, EventBus, GameEventKind};

use crate::application::source::{ContentResource, ContentSource};
use crate::domain::records::{
    CharacteristicInfosFile, CharacteristicSkillsFile, CharacteristicsQuestionsFile, DegreesFile,
    IndustryQuestionsFile, Questions, TrickyQuestionsFile,
};
use crate::domain::store::ContentStore;
use crate::error::LoadError;

fn parse<T: DeserializeOwned>(
    source: &dyn ContentSource,
    resource: ContentResource,
) -> Result<T, LoadError> {
    let text = source.read(resource)?;
    serde_json::from_str(&text).map_err(|source| LoadError::Deserialize { resource, source })
}

/// Loads all content from `source` and publishes `DataLoaded` on `bus`.
///
/// # Errors
///
/// Returns the first `LoadError` encountered. Nothing is published on
/// failure.
pub fn load_content(
    source: &dyn ContentSource,
    bus: &mut EventBus,
) -> Result<Arc<ContentStore>, LoadError> {
    let degrees: DegreesFile = parse(source, ContentResource::Degrees)?;
    let infos: CharacteristicInfosFile = parse(source, ContentResource::CharacteristicInfos)?;
    let skills: CharacteristicSkillsFile = parse(source, ContentResource::CharacteristicSkills)?;
    let characteristic: CharacteristicsQuestionsFile =
        parse(source, ContentResource::CharacteristicQuestions)?;
    let industry: IndustryQuestionsFile = parse(source, ContentResource::IndustryQuestions)?;
    let tricky: TrickyQuestionsFile = parse(source, ContentResource::TrickyQuestions)?;

    let store = Arc::new(ContentStore::new(
        Questions {
            characteristic: characteristic.characteristics_questions,
            industry: industry.industry_questions,
            tricky: tricky.tricky_questions,
        },
        degrees.degrees,
        infos.characteristic_infos,
        skills.characteristic_skills,
    ));

    let counts = store.counts();
    tracing::info!(
        degrees = counts.degrees,
        characteristic_infos = counts.characteristic_infos,
        characteristic_skills = counts.characteristic_skills,
        characteristic_questions = counts.characteristic_questions,
        industry_questions = counts.industry_questions,
        tricky_questions = counts.tricky_questions,
        "game content loaded"
    );
    bus.publish(GameEventKind::DataLoaded(DataLoaded { counts }));

    Ok(store)
}
