use std::path::PathBuf;

use clap::{ArgGroup, ArgMatches, Command, arg, command, value_parser};

fn with_input(cmd: Command, output_help: &'static str) -> Command {
    cmd.arg(arg!(-i --input <INPUT> "Raw input (inline)"))
        .arg(arg!(-f --file <INPUT> "Source file to process").value_parser(value_parser!(PathBuf)))
        .group(
            ArgGroup::new("input-source")
                .args(["input", "file"])
                .required(true)
                .multiple(false),
        )
        .arg(arg!(-o --output <OUTPUT>).help(output_help).value_parser(value_parser!(PathBuf)))
}

pub(crate) fn cli() -> ArgMatches {
    command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(with_input(
            command!("convert").about("Convert one OpenMath document to Turtle"),
            "Output Turtle file (defaults to the source file with a .ttl extension, or stdout)",
        ))
        .subcommand(
            command!("batch")
                .about("Convert every OpenMath document of a directory")
                .arg(
                    arg!([DIR] "Directory to scan")
                        .value_parser(value_parser!(PathBuf))
                        .default_value("."),
                )
                .arg(arg!(--ext <EXT> "Extension of the documents to convert").default_value("xml"))
                .arg(
                    arg!(--"out-dir" <OUT_DIR> "Write the Turtle files to this directory")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            command!("render")
                .about("Draw the RDF graph of a document")
                .subcommand_required(true)
                .subcommand(with_input(
                    command!("pdf").about("Render to PDF file"),
                    "Output PDF file",
                ))
                .subcommand(with_input(
                    command!("svg").about("Render to SVG file"),
                    "Output SVG file",
                ))
                .subcommand(with_input(
                    command!("dot").about("Render to Graphviz DOT file"),
                    "Output DOT file",
                )),
        )
        .get_matches()
}
