//! Combined syllogism dataset assembly.
//!
//! Reads two line-delimited JSON source files (believable and unbelievable
//! syllogisms), turns every record into a single-sentence syllogism with one
//! sampled conclusion, and writes the shuffled union as a JSON array.
//!
//! Within each source file, even-indexed records become valid syllogisms
//! (conclusion drawn from the correct answers) and odd-indexed records become
//! invalid ones (conclusion drawn from all listed options). One seeded RNG
//! drives every choice, so a given seed always yields the same dataset.

pub mod error;

pub use error::DatasetError;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const DEFAULT_SEED: u64 = 32;

/// One record of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceItem {
    pub text: String,
    pub answer: String,
}

/// One record of the combined dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllogismItem {
    pub syllogism: String,
    pub validity: bool,
    pub plausibility: bool,
}

/// The pieces of a source record's `text` and `answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource<'a> {
    pub premise_1: &'a str,
    pub premise_2: &'a str,
    /// Every listed option, normalized.
    pub options: Vec<String>,
    /// The correct answers, normalized.
    pub answers: Vec<String>,
}

fn normalize(option: &str) -> String {
    option.trim().to_lowercase().replace('.', "")
}

pub fn parse_source(item: &SourceItem, index: usize) -> Result<ParsedSource<'_>, DatasetError> {
    let mut premise_1 = None;
    let mut premise_2 = None;
    let mut options = Vec::new();

    let lines: Vec<&str> = item.text.lines().collect();
    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("Premise 1:") {
            premise_1 = Some(rest.trim());
        } else if let Some(rest) = line.strip_prefix("Premise 2:") {
            premise_2 = Some(rest.trim());
        } else if line.starts_with("Options:") {
            options = lines[i + 1..]
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty() && !l.starts_with("Answer:"))
                .map(normalize)
                .filter(|o| !o.is_empty() && !o.contains("answer:"))
                .collect();
            break;
        }
    }

    let answers = item
        .answer
        .split(" or ")
        .map(normalize)
        .filter(|a| !a.is_empty())
        .collect();

    Ok(ParsedSource {
        premise_1: premise_1.ok_or(DatasetError::MissingPremise {
            index,
            which: "Premise 1:",
        })?,
        premise_2: premise_2.ok_or(DatasetError::MissingPremise {
            index,
            which: "Premise 2:",
        })?,
        options,
        answers,
    })
}

/// Build one dataset item, sampling its conclusion uniformly at random.
pub fn build_item<R: Rng + ?Sized>(
    item: &SourceItem,
    index: usize,
    plausibility: bool,
    validity: bool,
    rng: &mut R,
) -> Result<SyllogismItem, DatasetError> {
    let parsed = parse_source(item, index)?;
    let candidates = if validity {
        &parsed.answers
    } else {
        &parsed.options
    };
    let conclusion = candidates
        .choose(rng)
        .ok_or(DatasetError::NoCandidates { index })?;

    Ok(SyllogismItem {
        syllogism: format!(
            "{} {} Therefore, {}.",
            parsed.premise_1, parsed.premise_2, conclusion
        ),
        validity,
        plausibility,
    })
}

/// Split one source file into (valid, invalid) items by index parity.
fn label_source<R: Rng + ?Sized>(
    items: &[SourceItem],
    plausibility: bool,
    rng: &mut R,
) -> Result<(Vec<SyllogismItem>, Vec<SyllogismItem>), DatasetError> {
    let mut valid = Vec::with_capacity(items.len() / 2 + 1);
    let mut invalid = Vec::with_capacity(items.len() / 2);

    for (index, item) in items.iter().enumerate() {
        let validity = index % 2 == 0;
        let built = build_item(item, index, plausibility, validity, rng)?;
        if validity {
            valid.push(built);
        } else {
            invalid.push(built);
        }
    }

    Ok((valid, invalid))
}

/// Assemble the shuffled combined dataset.
pub fn combine(
    believable: &[SourceItem],
    unbelievable: &[SourceItem],
    seed: u64,
) -> Result<Vec<SyllogismItem>, DatasetError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let (true_plausible, false_plausible) = label_source(believable, true, &mut rng)?;
    let (true_implausible, false_implausible) = label_source(unbelievable, false, &mut rng)?;

    info!(
        true_plausible = true_plausible.len(),
        false_plausible = false_plausible.len(),
        true_implausible = true_implausible.len(),
        false_implausible = false_implausible.len(),
        "parsed source records"
    );

    let mut combined = true_plausible;
    combined.extend(false_plausible);
    combined.extend(true_implausible);
    combined.extend(false_implausible);
    combined.shuffle(&mut rng);

    Ok(combined)
}

/// Read a line-delimited JSON source file. Blank lines are skipped.
pub fn load_jsonl(path: &Path) -> Result<Vec<SourceItem>, DatasetError> {
    let io_err = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);

    let mut items = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        items.push(item);
    }
    Ok(items)
}

/// Write the dataset as a JSON array indented by four spaces.
pub fn write_dataset(path: &Path, items: &[SyllogismItem]) -> Result<(), DatasetError> {
    let io_err = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    items.serialize(&mut ser)?;

    writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn source(answer: &str) -> SourceItem {
        SourceItem {
            text: "Premise 1: All daisies are plants.\n\
                   Premise 2: Some plants are green.\n\
                   Options:\n\
                   Some daisies are green.\n\
                   No daisies are green.\n\
                   \n\
                   Answer:"
                .to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn parses_premises_options_and_answers() {
        let item = source("Some daisies are green. or No daisies are green.");
        let parsed = parse_source(&item, 0).unwrap();
        assert_eq!(parsed.premise_1, "All daisies are plants.");
        assert_eq!(parsed.premise_2, "Some plants are green.");
        assert_eq!(
            parsed.options,
            vec!["some daisies are green", "no daisies are green"]
        );
        assert_eq!(
            parsed.answers,
            vec!["some daisies are green", "no daisies are green"]
        );
    }

    #[test]
    fn option_lines_mentioning_answer_are_dropped() {
        let item = SourceItem {
            text: "Premise 1: a\nPremise 2: b\nOptions:\nx\nThe answer: y\n".to_string(),
            answer: "x".to_string(),
        };
        let parsed = parse_source(&item, 0).unwrap();
        assert_eq!(parsed.options, vec!["x"]);
    }

    #[test]
    fn missing_premise_is_reported_with_index() {
        let item = SourceItem {
            text: "Premise 1: a\nOptions:\nx".to_string(),
            answer: "x".to_string(),
        };
        let err = parse_source(&item, 7).unwrap_err();
        assert_eq!(err.to_string(), "record 7: missing \"Premise 2:\" line");
    }

    #[test]
    fn valid_item_draws_from_answers() {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let item = build_item(&source("No daisies are green."), 0, true, true, &mut rng).unwrap();
        assert_eq!(
            item.syllogism,
            "All daisies are plants. Some plants are green. Therefore, no daisies are green."
        );
        assert!(item.validity);
        assert!(item.plausibility);
    }

    #[test]
    fn invalid_item_draws_from_options() {
        let mut rng = StdRng::seed_from_u64(1);
        let item = build_item(&source("x"), 1, false, false, &mut rng).unwrap();
        assert!(
            item.syllogism.ends_with("Therefore, some daisies are green.")
                || item.syllogism.ends_with("Therefore, no daisies are green.")
        );
    }

    #[test]
    fn no_options_is_an_error() {
        let item = SourceItem {
            text: "Premise 1: a\nPremise 2: b".to_string(),
            answer: "x".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let err = build_item(&item, 3, true, false, &mut rng).unwrap_err();
        assert!(matches!(err, DatasetError::NoCandidates { index: 3 }));
    }
}
