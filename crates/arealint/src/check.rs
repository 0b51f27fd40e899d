use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ArgParser;
use nsmbu_course::{analyze, Analysis, Containment, CourseSet, DirArchive, RunMode, TraversalConfig};
use tracing::{error, info, warn};

use crate::Args as AppArgs;


#[derive(Debug, Clone, ArgParser)]
pub(crate) struct Args {
    /// Extracted level archives, or directories holding several of them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Widen every area by 8 tiles on each side when placing portals
    #[arg(long, default_value_t = false)]
    padded: bool,

    /// Ignore links made by actor 432
    #[arg(long, default_value_t = false)]
    no_area_warp_links: bool,

    /// Write a Graphviz file per level and run into this directory
    #[arg(long)]
    dot: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> TraversalConfig {
        TraversalConfig {
            containment: if self.padded {
                Containment::Padded
            } else {
                Containment::Strict
            },
            area_warp_links: !self.no_area_warp_links,
        }
    }
}


pub(crate) fn execute(app_args: &AppArgs, args: &Args) -> Result<()> {
    let config = args.config();
    let mut levels = Vec::new();

    for path in &args.paths {
        if !path.exists() {
            anyhow::bail!("Could not find {}", path.display());
        }
        collect_levels(path, &mut levels)?;
    }

    if levels.is_empty() {
        anyhow::bail!("No extracted level archives found");
    }

    let mut failed = 0;
    let mut flagged = 0;
    let stems = dot_stems(&levels);

    for (level, stem) in levels.iter().zip(&stems) {
        match check_level(app_args, args, config, level, stem) {
            Ok(true) => flagged += 1,
            Ok(false) => (),
            Err(err) => {
                error!("{}: {:#}", level.display(), err);
                failed += 1;
            }
        }
    }

    info!(levels = levels.len(), flagged, failed, "check finished");
    println!(
        "Checked {} levels: {} with unreachable areas, {} failed to load",
        levels.len(),
        flagged,
        failed
    );

    Ok(())
}


/// A directory is a level if it holds `course/course1.bin`; otherwise its
/// direct subdirectories are tried.
fn collect_levels(path: &Path, levels: &mut Vec<PathBuf>) -> Result<()> {
    if is_level(path) {
        levels.push(path.to_path_buf());
        return Ok(());
    }

    let mut children = fs::read_dir(path)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    children.sort();

    levels.extend(children.into_iter().filter(|child| is_level(child)));

    Ok(())
}

fn is_level(path: &Path) -> bool {
    path.join("course").join("course1.bin").is_file()
}


#[tracing::instrument(skip_all, fields(level = %path.display()))]
fn check_level(
    app_args: &AppArgs,
    args: &Args,
    config: TraversalConfig,
    path: &Path,
    stem: &str,
) -> Result<bool> {
    let archive = DirArchive::new(path);
    let set = CourseSet::load(&archive, app_args.variant())
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let analysis = analyze(&set, config);

    println!("Loading: {}", path.display());
    print!("{}", analysis);
    println!();
    info!("report\n{}", analysis);

    if let Some(dir) = &args.dot {
        write_dot(dir, stem, &analysis)?;
    }

    if analysis.has_findings() {
        warn!("level has unreachable areas");
    }

    Ok(analysis.has_findings())
}


/// Output file stem per level. Levels sharing a directory name are told
/// apart by their parent directory, then by position.
fn dot_stems(levels: &[PathBuf]) -> Vec<String> {
    let mut counts = HashMap::new();
    for level in levels {
        *counts.entry(dir_name(level)).or_insert(0) += 1;
    }

    let mut used = HashSet::new();
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let name = dir_name(level);
            let mut stem = match level.parent() {
                Some(parent) if counts[&name] > 1 => format!("{}_{}", dir_name(parent), name),
                _ => name,
            };

            if !used.insert(stem.clone()) {
                stem = format!("{}_{}", stem, index);
                used.insert(stem.clone());
            }
            stem
        })
        .collect()
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level".to_string())
}


fn write_dot(dir: &Path, stem: &str, analysis: &Analysis) -> Result<()> {
    fs::create_dir_all(dir)?;

    for run in analysis.runs() {
        let suffix = match run.mode {
            RunMode::Normal => "",
            RunMode::CoinBoost => "_coin_boost",
        };

        let out_path = dir.join(format!("{}{}.dot", stem, suffix));
        fs::write(&out_path, run.view().dot().to_string())
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
    }

    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;

    fn stems(paths: &[&str]) -> Vec<String> {
        dot_stems(&paths.iter().map(PathBuf::from).collect::<Vec<_>>())
    }

    #[test]
    fn unique_names_are_kept() {
        assert_eq!(stems(&["wiiu/1-1", "wiiu/1-2"]), ["1-1", "1-2"]);
    }

    #[test]
    fn shared_names_use_parent() {
        assert_eq!(
            stems(&["wiiu/1-1", "deluxe/1-1", "deluxe/1-2"]),
            ["wiiu_1-1", "deluxe_1-1", "1-2"]
        );
    }

    #[test]
    fn shared_parents_fall_back_to_position() {
        assert_eq!(
            stems(&["a/levels/1-1", "b/levels/1-1"]),
            ["levels_1-1", "levels_1-1_1"]
        );
    }
}
