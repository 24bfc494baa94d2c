pub mod backend;
pub mod cache;
pub mod error;

pub use backend::ModelBackend;
pub use cache::DrsCache;
pub use error::PipelineError;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Source of DRS strings for natural-language premises.
pub trait DrsGenerator {
    fn generate(&mut self, premise: &str) -> Result<String, PipelineError>;
}

/// One premise carried through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiseTranslation {
    pub premise: String,
    pub drs: String,
    pub fol: String,
}

/// Record written by the DRS generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrsRecord {
    pub syllogism: String,
    pub drs: String,
    #[serde(default)]
    pub validity: Option<bool>,
}

/// One entry of a combined syllogism dataset. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllogismRecord {
    pub syllogism: String,
    #[serde(default)]
    pub validity: Option<bool>,
}

/// A [`DrsRecord`] with its translated formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolRecord {
    pub syllogism: String,
    pub drs: String,
    pub fol: String,
    pub validity: Option<bool>,
}

// ─── Shared pipeline: text → premises → DRS → FOL ───

/// Split a syllogism into premises on `.`, dropping empty pieces.
pub fn split_premises(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn compile_pipeline(
    text: &str,
    generator: &mut dyn DrsGenerator,
) -> Result<Vec<PremiseTranslation>, PipelineError> {
    let premises = split_premises(text);
    debug!(count = premises.len(), "premises found");

    premises
        .into_iter()
        .map(|premise| {
            let drs = generator.generate(premise)?;
            let fol = drs_semantics::translate(&drs);
            Ok(PremiseTranslation {
                premise: premise.to_string(),
                drs,
                fol,
            })
        })
        .collect()
}

/// Generate a DRS for every syllogism, in order. Stops at the first failure.
pub fn generate_records(
    records: &[SyllogismRecord],
    generator: &mut dyn DrsGenerator,
) -> Result<Vec<DrsRecord>, PipelineError> {
    let total = records.len();
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            info!(index = i + 1, total, syllogism = %record.syllogism, "generating DRS");
            let drs = generator.generate(&record.syllogism)?;
            debug!(drs = %drs, "generated DRS");
            Ok(DrsRecord {
                syllogism: record.syllogism.clone(),
                drs,
                validity: record.validity,
            })
        })
        .collect()
}

pub fn translate_record(record: &DrsRecord) -> FolRecord {
    FolRecord {
        syllogism: record.syllogism.clone(),
        drs: record.drs.clone(),
        fol: drs_semantics::translate(&record.drs),
        validity: record.validity,
    }
}

pub fn translate_records(records: &[DrsRecord]) -> Vec<FolRecord> {
    records.iter().map(translate_record).collect()
}
