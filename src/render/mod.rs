//! Graph visualization
//!
//! Draws an [`RdfGraph`] for inspection: every IRI and blank node becomes one
//! vertex labeled with its compacted name, every literal its own vertex, every
//! statement an edge labeled with its predicate.

pub mod pdf;

use std::collections::HashMap;

use layout::backends::svg::SVGWriter;
use layout::gv::{DotParser, GraphBuilder};
use layout::topo::layout::VisualGraph;
use petgraph::Directed;
use petgraph::dot::Dot;
use petgraph::graph::{Graph as PetGraph, NodeIndex};

use crate::Error;
use crate::graph::{Object, RdfGraph, vocab};

pub use pdf::render_svg_to_pdf;

pub type Diagram = PetGraph<String, String, Directed>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Dot,
    Svg,
    Pdf,
}

impl RenderFormat {
    pub fn from_ext(ext: &str) -> Result<Self, Error> {
        match ext {
            "dot" | "gv" => Ok(RenderFormat::Dot),
            "svg" => Ok(RenderFormat::Svg),
            "pdf" => Ok(RenderFormat::Pdf),
            _ => Err(Error::InvalidType(ext.to_string())),
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            RenderFormat::Dot => "dot",
            RenderFormat::Svg => "svg",
            RenderFormat::Pdf => "pdf",
        }
    }
}

pub fn to_petgraph(graph: &RdfGraph) -> Diagram {
    let mut diagram = Diagram::new();
    let mut named: HashMap<String, NodeIndex> = HashMap::new();

    for statement in graph.statements() {
        let subject = vertex(&mut diagram, &mut named, statement.subject.to_string());
        let object = match &statement.object {
            Object::Node(node) => vertex(&mut diagram, &mut named, node.to_string()),
            Object::Class(class) => {
                vertex(&mut diagram, &mut named, vocab::compact(class.iri().as_str()))
            }
            // literals are values, not shared resources
            Object::Literal(literal) => diagram.add_node(sanitize(literal.value())),
        };
        diagram.add_edge(
            subject,
            object,
            vocab::compact(statement.predicate.iri().as_str()),
        );
    }

    diagram
}

fn vertex(diagram: &mut Diagram, named: &mut HashMap<String, NodeIndex>, label: String) -> NodeIndex {
    *named
        .entry(label)
        .or_insert_with_key(|label| diagram.add_node(sanitize(label)))
}

fn sanitize(label: &str) -> String {
    label.replace(['"', '\\'], "'")
}

pub fn render_graph(diagram: &Diagram) -> String {
    Dot::new(diagram).to_string()
}

pub fn render_to_svg(diagram: &Diagram) -> Result<String, Error> {
    let dot_string = render_graph(diagram);
    let mut parser = DotParser::new(&dot_string);

    let tree = parser
        .process()
        .map_err(|e| Error::RenderError(format!("Unable to lay out the graph: {e}")))?;
    let mut gb = GraphBuilder::new();
    gb.visit_graph(&tree);
    let mut visual_graph = gb.get();
    Ok(generate_svg(&mut visual_graph))
}

fn generate_svg(graph: &mut VisualGraph) -> String {
    let mut svg = SVGWriter::new();
    graph.do_it(false, false, false, &mut svg);
    svg.finalize()
}
