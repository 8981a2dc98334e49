//! OpenMath to RDF
//!
//! Reads an OpenMath XML document, translates its expression into RDF
//! statements and writes them as Turtle.
//!
//! ```no_run
//! let graph = om2rdf::convert_str(
//!     r#"<OMOBJ><OMA><OMS cd="arith1" name="plus"/><OMI>2</OMI><OMI>3</OMI></OMA></OMOBJ>"#,
//! )?;
//! println!("{}", om2rdf::to_turtle(&graph)?);
//! # Ok::<(), om2rdf::Error>(())
//! ```

mod batch;
mod error;
pub mod graph;
pub mod openmath;
pub mod parser;
pub mod render;
mod translate;
mod turtle;

use std::fs;
use std::path::Path;

use log::debug;

pub use batch::{BatchOptions, Outcome, Report, convert_dir};
pub use error::Error;
pub use graph::{GraphBuilder, NodeId, RdfGraph};
pub use parser::{Document, Element, parse};
pub use render::RenderFormat;
pub use translate::translate;
pub use turtle::{to_turtle, write_turtle};

/// Translates the expression of `document`, the first child of its root.
///
/// Every call starts from a fresh [`GraphBuilder`]; nothing is returned for a
/// document that fails anywhere.
pub fn convert_document(document: &Document) -> Result<RdfGraph, Error> {
    let expression = document.root.children.first().ok_or_else(|| {
        Error::StructuralViolation(format!("<{}> holds no expression", document.root.tag))
    })?;

    let mut builder = GraphBuilder::new();
    let root = translate(expression, &mut builder)?;
    let graph = builder.drain();
    debug!(
        "<{}> translated into {} statements, rooted at {root}",
        expression.tag,
        graph.len()
    );

    Ok(graph)
}

pub fn convert_str(input: &str) -> Result<RdfGraph, Error> {
    convert_document(&parse(input)?)
}

/// Converts one file and returns the number of statements written.
///
/// `output` is only created once the whole document converted.
pub fn process_file_to_turtle(input: &Path, output: &Path) -> Result<usize, Error> {
    let source = fs::read_to_string(input).map_err(Error::io(input))?;
    let graph = convert_str(&source)?;
    let turtle = to_turtle(&graph)?;

    fs::write(output, turtle).map_err(Error::io(output))?;
    Ok(graph.len())
}

pub fn render_document(input: &str, output: &Path, format: RenderFormat) -> Result<(), Error> {
    let graph = convert_str(input)?;
    let diagram = render::to_petgraph(&graph);

    match format {
        RenderFormat::Dot => {
            fs::write(output, render::render_graph(&diagram)).map_err(Error::io(output))
        }
        RenderFormat::Svg => {
            let svg = render::render_to_svg(&diagram)?;
            fs::write(output, svg).map_err(Error::io(output))
        }
        RenderFormat::Pdf => {
            let svg = render::render_to_svg(&diagram)?;
            render::render_svg_to_pdf(svg, output)
        }
    }
}
