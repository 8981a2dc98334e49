use std::io::Write;

use oxrdfio::{RdfFormat, RdfSerializer};

use crate::Error;
use crate::graph::RdfGraph;

/// Serializes `graph` as Turtle into `writer` and hands the writer back.
pub fn write_turtle<W: Write>(graph: &RdfGraph, writer: W) -> Result<W, Error> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, namespace) in graph.prefixes() {
        serializer = serializer
            .with_prefix(*prefix, *namespace)
            .map_err(|e| Error::SerializeError(format!("prefix {prefix}: {e}")))?;
    }

    let mut writer = serializer.for_writer(writer);
    for triple in graph.triples() {
        writer
            .serialize_triple(&triple)
            .map_err(|e| Error::SerializeError(e.to_string()))?;
    }

    writer
        .finish()
        .map_err(|e| Error::SerializeError(e.to_string()))
}

pub fn to_turtle(graph: &RdfGraph) -> Result<String, Error> {
    let buffer = write_turtle(graph, Vec::new())?;
    String::from_utf8(buffer).map_err(|e| Error::SerializeError(e.to_string()))
}
