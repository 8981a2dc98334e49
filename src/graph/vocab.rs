//! Namespaces and terms of the output vocabulary.

pub const OM: &str = "http://openmath.org/vocab/math#";
pub const CD: &str = "http://www.openmath.org/cd/";
pub const EX: &str = "http://example.org/ontology#";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Prefix bindings written into every serialized graph. They only shorten the
/// text; a prefixed name and its expanded IRI are the same term.
pub const PREFIXES: [(&str, &str); 4] = [("om", OM), ("cd", CD), ("ex", EX), ("rdf", RDF)];

pub mod om {
    use oxrdf::NamedNodeRef;

    pub const VARIABLE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#Variable");
    pub const LITERAL: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#Literal");
    pub const APPLICATION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#Application");

    pub const NAME: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#name");
    pub const VALUE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#value");
    pub const OPERATOR: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#operator");
    pub const ARGUMENTS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://openmath.org/vocab/math#arguments");
}

pub use oxrdf::vocab::rdf;

/// Shortens `iri` with the first matching prefix binding.
pub fn compact(iri: &str) -> String {
    PREFIXES
        .iter()
        .find_map(|(prefix, ns)| {
            iri.strip_prefix(*ns)
                .map(|local| format!("{prefix}:{local}"))
        })
        .unwrap_or_else(|| format!("<{iri}>"))
}
