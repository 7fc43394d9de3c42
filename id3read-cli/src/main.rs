#![forbid(unsafe_code)]

mod stdout;
mod show;

use clap::{App, Arg};
use log::LevelFilter;
use show::Options;
use std::path::Path;
use std::process;
use stdout::PedanticLogger;

fn main() {
    let matches = App::new("id3read")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the metadata of ID3v2-tagged music files")
        .arg(
            Arg::with_name("files")
                .value_name("FILES")
                .help("Files to read")
                .required(true)
                .multiple(true),
        )
        .arg(
            Arg::with_name("cover")
                .long("cover")
                .value_name("DIR")
                .help("Write the cover image of each file into DIR")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frames")
                .long("frames")
                .help("List every frame in the tag"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every frame that is read")
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Only log errors"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else if matches.is_present("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    PedanticLogger::setup(level);

    let opts = Options {
        cover_dir: matches.value_of("cover").map(Path::new),
        frames: matches.is_present("frames"),
    };

    // clap enforces that FILES is present.
    let paths = match matches.values_of("files") {
        Some(paths) => paths,
        None => process::exit(1),
    };

    if !show::show(paths, &opts) {
        process::exit(1);
    }
}
