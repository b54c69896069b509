//! Solve every instance file in a directory and write one plan file per input.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SolverConfig;
use crate::format::{self, FormatError};
use crate::model::group::Plan;
use crate::model::instance::Instance;
use crate::search;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("{path}: {source}")]
    Format { path: PathBuf, source: FormatError },
}

impl BatchError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> BatchError + '_ {
        move |source| BatchError::Io { path: path.to_path_buf(), source }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceFile {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub score: u64,
    pub group_count: usize,
}

/// Lists `*.{input_ext}` files under `input_dir`, sorted by name, each paired
/// with `<output_dir>/<stem>.{output_ext}`.
pub fn discover(
    input_dir: &Path,
    output_dir: &Path,
    input_ext: &str,
    output_ext: &str,
) -> Result<Vec<InstanceFile>, BatchError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(BatchError::io(input_dir))? {
        let path = entry.map_err(BatchError::io(input_dir))?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(input_ext) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        let output = output_dir.join(format!("{}.{}", name, output_ext));
        files.push(InstanceFile { name, input: path, output });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

pub fn process<R: Rng + ?Sized>(instance: &Instance, trial_count: usize, rng: &mut R) -> Plan {
    search::solve(instance, trial_count, rng)
}

pub fn read(path: &Path) -> Result<Instance, BatchError> {
    let file = File::open(path).map_err(BatchError::io(path))?;
    format::read_instance(BufReader::new(file)).map_err(|source| BatchError::Format {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write(path: &Path, plan: &Plan) -> Result<(), BatchError> {
    let file = File::create(path).map_err(BatchError::io(path))?;
    format::write_plan(BufWriter::new(file), plan).map_err(BatchError::io(path))
}

fn rng_for(config: &SolverConfig) -> SmallRng {
    match config.random_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

pub fn solve_file(file: &InstanceFile, config: &SolverConfig) -> Result<Report, BatchError> {
    let instance = read(&file.input)?;
    let plan = process(&instance, config.trial_count, &mut rng_for(config));
    write(&file.output, &plan)?;
    info!(file = %file.name, score = plan.score, groups = plan.group_count(), "Done");
    Ok(Report {
        name: file.name.clone(),
        score: plan.score,
        group_count: plan.group_count(),
    })
}

pub fn run(config: &SolverConfig) -> Result<Vec<Report>, BatchError> {
    let files = discover(
        &config.input_dir,
        &config.output_dir,
        &config.input_extension,
        &config.output_extension,
    )?;
    fs::create_dir_all(&config.output_dir).map_err(BatchError::io(&config.output_dir))?;
    if files.is_empty() {
        warn!(dir = %config.input_dir.display(), "no instance files found");
    }

    let reports = files
        .iter()
        .map(|file| solve_file(file, config))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        files = reports.len(),
        total_score = reports.iter().map(|report| report.score).sum::<u64>(),
        "Done and dusted"
    );
    Ok(reports)
}
