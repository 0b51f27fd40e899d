use std::path::PathBuf;

use anyhow::Result;
use clap::Parser as ArgParser;
use nsmbu_course::{CourseFile, CourseSet, DirArchive, Layer};

use crate::Args as AppArgs;


#[derive(Debug, Clone, ArgParser)]
pub(crate) struct Args {
    path: PathBuf,

    /// Also list every area and NextGoto
    #[arg(long, default_value_t = false)]
    records: bool,
}


pub(crate) fn execute(app_args: &AppArgs, args: &Args) -> Result<()> {
    if !args.path.exists() {
        anyhow::bail!("Could not find directory at given path");
    }

    let archive = DirArchive::new(&args.path);
    let set = CourseSet::load(&archive, app_args.variant())?;

    println!("------======::::: AREALINT :::::======------\n");

    for index in 0..nsmbu_course::COURSE_FILE_COUNT {
        match set.file(index) {
            Some(file) => course_file(index, file, args.records),
            None => println!("File {}: absent", index),
        }
        println!("\n---===---===---===---===---===---===---===---\n");
    }

    for (index, err) in set.load_errors() {
        println!("File {} failed to load: {}", index, err);
    }

    println!("Other archive entries: {}", set.resources().len());
    for name in set.resources().keys() {
        println!("  {}", name);
    }

    println!("\n------======::::::::::::::::::::======------");

    Ok(())
}


fn course_file(index: usize, file: &CourseFile, records: bool) {
    let options = &file.options;

    println!("File {}", index);
    println!("Start NextGoto: {:<10}", options.start_next_goto);
    println!("Coin/Boost Start NextGoto: {:<10}", options.start_next_goto_coin_boost);
    println!("Time Limit: {:<10}", options.time_0);
    println!(
        "Environment: {}",
        file.environment
            .slot_names()
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("Areas: {:<10}", file.areas.len());
    println!("NextGotos: {:<10}", file.next_gotos.len());
    println!("Map Actors: {:<10}", file.map_actors.len());
    println!("Scroll Data: {:<10}", file.scroll_data.len());
    println!("Distant Views: {:<10}", file.distant_views.len());
    println!("Locations: {:<10}", file.locations.len());
    println!("Rails: {} ({} points)", file.rail_infos.len(), file.rail_points.len());
    for layer in Layer::ALL {
        println!("Backgrounds {}: {:<10}", layer, file.backgrounds(layer).len());
    }

    if records {
        areas(file);
        next_gotos(file);
    }
}

fn areas(file: &CourseFile) {
    println!();
    for area in &file.areas {
        println!(
            "Area {:3} at ({}, {}) size ({}, {})",
            area.id, area.offset_x, area.offset_y, area.size_x, area.size_y
        );
    }
}

fn next_gotos(file: &CourseFile) {
    println!();
    for next_goto in &file.next_gotos {
        println!(
            "NextGoto {:3} at ({}, {}) area {:3} -> file {} nextGoto {}{}",
            next_goto.id,
            next_goto.offset_x,
            next_goto.offset_y,
            next_goto.area,
            next_goto.destination_file,
            next_goto.destination_next_goto,
            if next_goto.is_disabled() { " (disabled)" } else { "" }
        );
    }
}
