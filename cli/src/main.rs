extern crate clap;
extern crate meshline;

mod build;
mod commands;
mod pick;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use commands::*;
use meshline::algorithms::raycast::Raycaster;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stdin, stdout};
use std::process;

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    let width_profile_arg = || {
        Arg::with_name("WIDTH_PROFILE")
            .long("width-profile")
            .help("Width along the line: constant (default), linear or taper")
            .value_name("PROFILE")
            .takes_value(true)
    };

    App::new("meshline command-line interface")
        .version("0.1")
        .about("Builds and queries thick line meshes")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("build")
                .about("Builds the buffers of a line and prints them")
                .arg(width_profile_arg())
                .arg(
                    Arg::with_name("ADVANCE")
                        .short("a")
                        .long("advance")
                        .help("Advances the line by a point after building it, can be repeated")
                        .value_name("X,Y,Z")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1),
                )
                .arg(
                    Arg::with_name("COUNT")
                        .short("c")
                        .long("count")
                        .help("Prints the number of points, vertices and triangles"),
                ),
        )
        .subcommand(
            SubCommand::with_name("pick")
                .about("Finds the first segment of the line close to a ray")
                .arg(width_profile_arg())
                .arg(
                    Arg::with_name("RAY")
                        .short("r")
                        .long("ray")
                        .help("Origin and direction of the ray")
                        .value_name("OX,OY,OZ,DX,DY,DZ")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("LINE_WIDTH")
                        .short("w")
                        .long("line-width")
                        .help("Sets the line width (1 by default)")
                        .value_name("WIDTH")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("THRESHOLD")
                        .short("t")
                        .long("threshold")
                        .help("Sets the picking threshold (1 by default)")
                        .value_name("THRESHOLD")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("SEGMENTS")
                        .long("segments")
                        .help("Reads the index buffer as disconnected segments"),
                ),
        )
        .arg(
            Arg::with_name("POINTS")
                .value_name("POINTS")
                .help("Coordinates of the points: x0,y0,z0 x1,y1,z1 ...")
                .takes_value(true)
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Reads the points from a file, or from stdin with -")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let mut input = matches.value_of("POINTS").unwrap_or("").to_string();

    match matches.value_of("INPUT") {
        Some("-") => {
            stdin().read_to_string(&mut input)?;
        }
        Some(input_file) => {
            File::open(input_file)?.read_to_string(&mut input)?;
        }
        None => {}
    }

    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    if let Some(build_matches) = matches.subcommand_matches("build") {
        let mut advance = Vec::new();
        if let Some(values) = build_matches.values_of("ADVANCE") {
            for value in values {
                advance.push(parse_point(value)?);
            }
        }

        let cmd = BuildCmd {
            input,
            output,
            width_profile: get_width_profile(build_matches)?,
            advance,
            count: build_matches.is_present("COUNT"),
        };

        build::build(cmd)
    } else if let Some(pick_matches) = matches.subcommand_matches("pick") {
        let cmd = PickCmd {
            input,
            output,
            width_profile: get_width_profile(pick_matches)?,
            ray: parse_ray(pick_matches.value_of("RAY").unwrap_or(""))?,
            line_width: get_float(pick_matches, "LINE_WIDTH", 1.0)?,
            threshold: get_float(
                pick_matches,
                "THRESHOLD",
                Raycaster::DEFAULT_LINE_THRESHOLD,
            )?,
            segments: pick_matches.is_present("SEGMENTS"),
        };

        pick::pick(cmd)
    } else {
        Ok(())
    }
}

fn get_width_profile(matches: &ArgMatches) -> Result<WidthProfileKind, CliError> {
    match matches.value_of("WIDTH_PROFILE") {
        Some(name) => name.parse(),
        None => Ok(WidthProfileKind::Constant),
    }
}

fn get_float(matches: &ArgMatches, name: &str, default: f32) -> Result<f32, CliError> {
    match matches.value_of(name) {
        Some(value) => parse_float(value, name),
        None => Ok(default),
    }
}

#[cfg(test)]
fn run_with(name: &str, input: &str, args: &[&str]) -> Result<String, CliError> {
    let dir = std::env::temp_dir();
    let input_path = dir.join(format!("meshline_cli_{}.in", name));
    let output_path = dir.join(format!("meshline_cli_{}.out", name));
    std::fs::write(&input_path, input)?;

    let mut argv = vec![
        "meshline".to_string(),
        "-i".to_string(),
        input_path.to_string_lossy().into_owned(),
        "-o".to_string(),
        output_path.to_string_lossy().into_owned(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));

    let matches = app()
        .get_matches_from_safe(argv)
        .map_err(|e| CliError::Parse(e.message))?;
    run(&matches)?;

    Ok(std::fs::read_to_string(&output_path)?)
}

#[test]
fn build_and_count() {
    let output = run_with(
        "count",
        "# a line\n0,0,0\n1,0,0\n2,1,0\n",
        &["build", "--count", "-a", "3,1,0"],
    )
    .unwrap();

    assert_eq!(output, "points: 3\nvertices: 6\ntriangles: 4\n");
}

#[test]
fn pick_a_line() {
    let output = run_with(
        "pick",
        "0,0,0 1,0,0",
        &["pick", "-r", "0.5,0.1,5,0,0,-1", "-t", "0"],
    )
    .unwrap();
    assert!(output.starts_with("index: 1\n"), "{}", output);

    let output = run_with(
        "miss",
        "0,0,0 1,0,0",
        &["pick", "-r", "0.5,3,5,0,0,-1", "-t", "0"],
    )
    .unwrap();
    assert_eq!(output, "no hit\n");
}

#[test]
fn invalid_input() {
    assert!(run_with("invalid", "0,0,0 1,0", &["build"]).is_err());
    assert!(run_with("profile", "0,0,0", &["build", "--width-profile", "round"]).is_err());
}
