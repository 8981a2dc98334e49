mod cli;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::ArgMatches;
use om2rdf::{BatchOptions, Error, RenderFormat};

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli::cli();
    let result = match matches.subcommand() {
        Some(("convert", sub)) => convert(sub),
        Some(("batch", sub)) => batch(sub),
        Some(("render", sub)) => match sub.subcommand() {
            Some((format, sub)) => render(format, sub),
            None => Err(Error::InvalidType("missing render format".to_string())),
        },
        Some((other, _)) => Err(Error::InvalidType(other.to_string())),
        None => Ok(ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

/// The document text and, when it came from a file, its path.
fn read_input(matches: &ArgMatches) -> Result<(String, Option<PathBuf>), Error> {
    match matches.get_one::<PathBuf>("file") {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            Ok((source, Some(path.clone())))
        }
        None => {
            let inline = matches
                .get_one::<String>("input")
                .cloned()
                .unwrap_or_default();
            Ok((inline, None))
        }
    }
}

fn write(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn convert(matches: &ArgMatches) -> Result<ExitCode, Error> {
    let (source, file) = read_input(matches)?;
    let graph = om2rdf::convert_str(&source)?;
    let turtle = om2rdf::to_turtle(&graph)?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .or_else(|| file.map(|f| f.with_extension("ttl")));

    match output {
        Some(output) => {
            write(&output, turtle)?;
            println!(
                "✅ {} statements written to {}",
                graph.len(),
                output.display()
            );
        }
        None => print!("{turtle}"),
    }

    Ok(ExitCode::SUCCESS)
}

fn batch(matches: &ArgMatches) -> Result<ExitCode, Error> {
    let dir = matches
        .get_one::<PathBuf>("DIR")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut options = BatchOptions::default();
    if let Some(ext) = matches.get_one::<String>("ext") {
        options.input_extension = ext.clone();
    }
    options.output_dir = matches.get_one::<PathBuf>("out-dir").cloned();

    let reports = om2rdf::convert_dir(&dir, &options)?;
    let mut failed = 0;
    for report in &reports {
        if report.is_success() {
            println!("  {report}");
        } else {
            failed += 1;
            eprintln!("  {report}");
        }
    }

    if failed > 0 {
        eprintln!("❌ {failed} of {} documents failed", reports.len());
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render(format: &str, matches: &ArgMatches) -> Result<ExitCode, Error> {
    let format = RenderFormat::from_ext(format)?;
    let (source, file) = read_input(matches)?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .or_else(|| file.map(|f| f.with_extension(format.ext())))
        .unwrap_or_else(|| PathBuf::from("graph").with_extension(format.ext()));

    om2rdf::render_document(&source, &output, format)?;
    println!("✅ Rendered to {}", output.display());

    Ok(ExitCode::SUCCESS)
}
