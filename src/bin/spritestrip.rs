use spritestrip::codec::{load_strip, save_canvas};
use spritestrip::naming::{base_name, output_dir, output_filename};
use spritestrip::{segment_and_composite, Alignment, ExtractOptions};
use std::path::PathBuf;
use std::process;

extern crate clap;

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info};

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new("spritestrip")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Extract sprites from a strip using alpha detection with face locking")
        .arg(
            Arg::with_name("file")
                .help("Path to the sprite strip image")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("count")
                .long("count")
                .takes_value(true)
                .default_value("9")
                .help("Target number of frames"),
        )
        .arg(
            Arg::with_name("mode")
                .long("mode")
                .takes_value(true)
                .possible_values(&["face", "body"])
                .default_value("face")
                .help(
                    "Centering mode: 'face' locks the head X position, \
                     'body' centers the whole sprite width",
                ),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .help("Custom output base name. Defaults to the input filename"),
        )
        .arg(
            Arg::with_name("start-index")
                .long("start-index")
                .takes_value(true)
                .default_value("0")
                .help("Starting index for file numbering"),
        )
        .arg(
            Arg::with_name("out-dir")
                .long("out-dir")
                .takes_value(true)
                .help("Directory for the frames. Defaults to the strip's directory"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let source = PathBuf::from(matches.value_of("file").unwrap_or_default());
    let options = ExtractOptions {
        target_count: value_t!(matches, "count", usize)?,
        alignment: value_t!(matches, "mode", Alignment)?,
    };
    let start_index = value_t!(matches, "start-index", usize)?;
    let base = base_name(&source, matches.value_of("name"));
    let out_dir = matches
        .value_of("out-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| output_dir(&source));

    let strip = load_strip(&source)?;
    let extraction = segment_and_composite(&strip, &options)?;

    for frame in &extraction.frames {
        let path = out_dir.join(output_filename(&base, frame.index, start_index));
        save_canvas(&frame.canvas, &path)?;
        info!(
            "Saved: {} (size: {}x{})",
            path.display(),
            frame.width,
            frame.height
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        error!("{}", e);
        for cause in e.iter_causes() {
            error!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
