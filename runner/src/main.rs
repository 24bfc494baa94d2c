mod config;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use drs_pipeline::{
    compile_pipeline, generate_records, translate_records, DrsCache, DrsGenerator, DrsRecord,
    ModelBackend, SyllogismRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use syllogism_dataset::DEFAULT_SEED;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "drs2fol", version, about = "Translate DRS strings into first-order logic")]
struct Cli {
    /// DRS model backend (host:port); overrides DRS2FOL_MODEL_ADDR
    #[arg(long, global = true)]
    model_addr: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Interactive session (default)
    Repl,
    /// Translate one DRS string and print the formula
    Translate { drs: String },
    /// Add a `fol` field to every record of a DRS JSON file
    TranslateFile { input: PathBuf, output: PathBuf },
    /// Generate a DRS for every syllogism of a combined dataset file
    GenerateDrs {
        input: PathBuf,
        output: PathBuf,
        /// Read DRS strings from a JSON file of {syllogism, drs} records instead of the backend
        #[arg(long)]
        drs_cache: Option<PathBuf>,
    },
    /// Split text into premises, generate a DRS for each and translate it
    Premises {
        text: String,
        /// Read DRS strings from a JSON file of {syllogism, drs} records instead of the backend
        #[arg(long)]
        drs_cache: Option<PathBuf>,
    },
    /// Combine believable/unbelievable source files into one shuffled dataset
    CreateDataset {
        believable: PathBuf,
        unbelievable: PathBuf,
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("reading records from {}", path.display()))
}

/// Pretty JSON with four-space indentation, like the dataset files.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut ser)
        .with_context(|| format!("writing {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn generator(config: &Config, drs_cache: Option<&Path>) -> Result<Box<dyn DrsGenerator>> {
    Ok(match drs_cache {
        Some(path) => Box::new(DrsCache::from_records(read_json::<Vec<DrsRecord>>(path)?)),
        None => Box::new(ModelBackend::new(config.model_addr.clone())),
    })
}

fn translate_file(input: &Path, output: &Path) -> Result<()> {
    let records: Vec<DrsRecord> = read_json(input)?;
    let translated = translate_records(&records);
    write_json(output, &translated)?;

    info!(count = translated.len(), output = %output.display(), "FOL records saved");
    Ok(())
}

fn generate_drs(
    config: &Config,
    input: &Path,
    output: &Path,
    drs_cache: Option<&Path>,
) -> Result<()> {
    let records: Vec<SyllogismRecord> = read_json(input)?;
    let mut generator = generator(config, drs_cache)?;
    let generated = generate_records(&records, generator.as_mut())?;
    write_json(output, &generated)?;

    info!(count = generated.len(), output = %output.display(), "DRS records saved");
    Ok(())
}

fn premises(config: &Config, text: &str, drs_cache: Option<&Path>) -> Result<()> {
    let mut generator = generator(config, drs_cache)?;

    let translations = compile_pipeline(text, generator.as_mut())?;
    println!("Sentence: {}", text);
    for t in translations {
        println!("Premise: {}", t.premise);
        println!("DRS: {}", t.drs);
        println!("FOL: {}", t.fol);
    }
    Ok(())
}

fn create_dataset(believable: &Path, unbelievable: &Path, output: &Path, seed: u64) -> Result<()> {
    let believable = syllogism_dataset::load_jsonl(believable)?;
    let unbelievable = syllogism_dataset::load_jsonl(unbelievable)?;
    let items = syllogism_dataset::combine(&believable, &unbelievable, seed)?;
    syllogism_dataset::write_dataset(output, &items)?;

    info!(total = items.len(), seed, output = %output.display(), "combined dataset saved");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_model_addr(cli.model_addr);
    init_tracing(&config);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run(&config),
        Command::Translate { drs } => {
            println!("{}", drs_semantics::translate(&drs));
            Ok(())
        }
        Command::TranslateFile { input, output } => translate_file(&input, &output),
        Command::GenerateDrs {
            input,
            output,
            drs_cache,
        } => generate_drs(&config, &input, &output, drs_cache.as_deref()),
        Command::Premises { text, drs_cache } => premises(&config, &text, drs_cache.as_deref()),
        Command::CreateDataset {
            believable,
            unbelievable,
            output,
            seed,
        } => create_dataset(&believable, &unbelievable, &output, seed),
    }
}
