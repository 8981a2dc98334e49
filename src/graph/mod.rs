use std::fmt;

use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, Subject, Term, Triple};
use uuid::Uuid;

mod triples;
pub mod vocab;

pub use triples::RdfGraph;

/// A node only meaningful inside the graph of one document.
///
/// Written as the blank node `_:n<k>`; `k` restarts at zero for every
/// [`GraphBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnonymousId(u64);

impl AnonymousId {
    pub fn index(self) -> u64 {
        self.0
    }

    pub fn to_blank_node(self) -> BlankNode {
        BlankNode::new_unchecked(format!("n{}", self.0))
    }
}

/// A globally unique IRI minted for one application node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressableId(NamedNode);

impl AddressableId {
    pub fn as_iri(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }
}

/// The IRI a symbol reference stands for: `cd:<cd>#<name>`.
///
/// Derived from the content dictionary and name only, so every reference to
/// the same symbol, in any document, gets the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolId(NamedNode);

impl SymbolId {
    pub fn derive(cd: &str, name: &str) -> Result<Self, crate::Error> {
        let iri = format!("{}{cd}#{name}", vocab::CD);
        NamedNode::new(&iri)
            .map(SymbolId)
            .map_err(|source| crate::Error::InvalidSymbol { iri, source })
    }

    pub fn as_iri(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    Anonymous(AnonymousId),
    Addressable(AddressableId),
    Symbol(SymbolId),
    /// The empty list, shared by the whole graph.
    Nil,
}

impl NodeId {
    pub fn to_subject(&self) -> Subject {
        match self {
            NodeId::Anonymous(id) => id.to_blank_node().into(),
            NodeId::Addressable(id) => id.0.clone().into(),
            NodeId::Symbol(id) => id.0.clone().into(),
            NodeId::Nil => NamedNode::from(vocab::rdf::NIL).into(),
        }
    }

    pub fn to_term(&self) -> Term {
        self.to_subject().into()
    }
}

impl From<AnonymousId> for NodeId {
    fn from(id: AnonymousId) -> Self {
        NodeId::Anonymous(id)
    }
}

impl From<AddressableId> for NodeId {
    fn from(id: AddressableId) -> Self {
        NodeId::Addressable(id)
    }
}

impl From<SymbolId> for NodeId {
    fn from(id: SymbolId) -> Self {
        NodeId::Symbol(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Anonymous(id) => write!(f, "_:n{}", id.0),
            NodeId::Addressable(id) => f.write_str(&vocab::compact(id.0.as_str())),
            NodeId::Symbol(id) => f.write_str(&vocab::compact(id.0.as_str())),
            NodeId::Nil => f.write_str("rdf:nil"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Type,
    Name,
    Value,
    Operator,
    Arguments,
    First,
    Rest,
}

impl Predicate {
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Predicate::Type => vocab::rdf::TYPE,
            Predicate::Name => vocab::om::NAME,
            Predicate::Value => vocab::om::VALUE,
            Predicate::Operator => vocab::om::OPERATOR,
            Predicate::Arguments => vocab::om::ARGUMENTS,
            Predicate::First => vocab::rdf::FIRST,
            Predicate::Rest => vocab::rdf::REST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Variable,
    Literal,
    Application,
}

impl Class {
    pub fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Class::Variable => vocab::om::VARIABLE,
            Class::Literal => vocab::om::LITERAL,
            Class::Application => vocab::om::APPLICATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Node(NodeId),
    Class(Class),
    Literal(Literal),
}

impl Object {
    pub fn as_node(&self) -> Option<&NodeId> {
        match self {
            Object::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn to_term(&self) -> Term {
        match self {
            Object::Node(node) => node.to_term(),
            Object::Class(class) => NamedNode::from(class.iri()).into(),
            Object::Literal(literal) => literal.clone().into(),
        }
    }
}

impl From<NodeId> for Object {
    fn from(node: NodeId) -> Self {
        Object::Node(node)
    }
}

impl From<AnonymousId> for Object {
    fn from(id: AnonymousId) -> Self {
        Object::Node(id.into())
    }
}

impl From<AddressableId> for Object {
    fn from(id: AddressableId) -> Self {
        Object::Node(id.into())
    }
}

impl From<SymbolId> for Object {
    fn from(id: SymbolId) -> Self {
        Object::Node(id.into())
    }
}

impl From<Class> for Object {
    fn from(class: Class) -> Self {
        Object::Class(class)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub subject: NodeId,
    pub predicate: Predicate,
    pub object: Object,
}

impl Statement {
    pub fn to_triple(&self) -> Triple {
        Triple::new(
            self.subject.to_subject(),
            self.predicate.iri(),
            self.object.to_term(),
        )
    }
}

/// Collects the statements of one document.
///
/// A builder is used for exactly one conversion and consumed by
/// [`GraphBuilder::drain`], so anonymous identities never leak between
/// documents.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    next_anonymous: u64,
    statements: Vec<Statement>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_anonymous(&mut self) -> AnonymousId {
        let id = AnonymousId(self.next_anonymous);
        self.next_anonymous += 1;
        id
    }

    /// `role_suffix` is appended verbatim for readability; a suffix that does
    /// not fit in an IRI is rejected.
    pub fn allocate_addressable(
        &self,
        role_suffix: &str,
    ) -> Result<AddressableId, crate::Error> {
        let iri = format!("{}{}{role_suffix}", vocab::EX, Uuid::new_v4());
        NamedNode::new(&iri)
            .map(AddressableId)
            .map_err(|source| crate::Error::InvalidAddressable { iri, source })
    }

    pub fn add_statement(
        &mut self,
        subject: impl Into<NodeId>,
        predicate: Predicate,
        object: impl Into<Object>,
    ) {
        self.statements.push(Statement {
            subject: subject.into(),
            predicate,
            object: object.into(),
        });
    }

    /// Encodes `elements` as an RDF collection and returns its head.
    ///
    /// An empty sequence is `rdf:nil` itself and allocates nothing.
    pub fn build_ordered_list(&mut self, elements: Vec<NodeId>) -> NodeId {
        if elements.is_empty() {
            return NodeId::Nil;
        }

        let cells: Vec<AnonymousId> = elements.iter().map(|_| self.allocate_anonymous()).collect();
        let rests = cells
            .iter()
            .skip(1)
            .map(|&cell| NodeId::from(cell))
            .chain(std::iter::once(NodeId::Nil));

        for ((&cell, element), rest) in cells.iter().zip(elements).zip(rests) {
            self.add_statement(cell, Predicate::First, element);
            self.add_statement(cell, Predicate::Rest, rest);
        }

        NodeId::from(cells[0])
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn drain(self) -> RdfGraph {
        RdfGraph::new(self.statements)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_anonymous_ids_are_sequential_and_unique() {
        let mut builder = GraphBuilder::new();
        let ids: Vec<_> = (0..100).map(|_| builder.allocate_anonymous()).collect();

        assert_eq!(ids[0].index(), 0);
        assert_eq!(ids[99].index(), 99);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 100);

        // A new document starts over.
        assert_eq!(GraphBuilder::new().allocate_anonymous().index(), 0);
    }

    #[test]
    fn test_addressable_ids_never_collide() {
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let builder = GraphBuilder::new();
            for _ in 0..20 {
                let id = builder.allocate_addressable("_app").unwrap();
                assert!(id.as_iri().as_str().starts_with(vocab::EX));
                assert!(id.as_iri().as_str().ends_with("_app"));
                assert!(seen.insert(id));
            }
        }
    }

    #[test]
    fn test_addressable_suffix_must_fit_an_iri() {
        let builder = GraphBuilder::new();
        for suffix in ["_my app", "_a#b#c", "_<x>"] {
            assert!(
                matches!(
                    builder.allocate_addressable(suffix),
                    Err(crate::Error::InvalidAddressable { .. })
                ),
                "{suffix}"
            );
        }
        assert!(builder.allocate_addressable("").is_ok());
    }

    #[test]
    fn test_node_terms() {
        let app = GraphBuilder::new().allocate_addressable("_app").unwrap();
        for node in [
            NodeId::from(AnonymousId(3)),
            NodeId::from(app),
            NodeId::from(SymbolId::derive("arith1", "plus").unwrap()),
            NodeId::Nil,
        ] {
            assert_eq!(node.to_term(), Term::from(node.to_subject()), "{node}");
        }
        assert_eq!(
            NodeId::Nil.to_term(),
            Term::from(NamedNode::from(vocab::rdf::NIL))
        );
    }

    #[test]
    fn test_symbol_identity_is_derived() {
        let a = SymbolId::derive("arith1", "plus").unwrap();
        let b = SymbolId::derive("arith1", "plus").unwrap();
        let c = SymbolId::derive("arith1", "times").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_iri().as_str(), "http://www.openmath.org/cd/arith1#plus");
        assert_eq!(NodeId::from(a).to_string(), "cd:arith1#plus");
    }

    #[test]
    fn test_symbol_identity_must_be_an_iri() {
        assert!(matches!(
            SymbolId::derive("arith 1", "plus"),
            Err(crate::Error::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_empty_list_is_nil() {
        let mut builder = GraphBuilder::new();
        assert_eq!(builder.build_ordered_list(vec![]), NodeId::Nil);
        assert!(builder.is_empty());
        assert_eq!(builder.allocate_anonymous().index(), 0);
    }

    #[test]
    fn test_list_has_one_cell_per_element() {
        let mut builder = GraphBuilder::new();
        let elements: Vec<NodeId> = (0..3).map(|_| builder.allocate_anonymous().into()).collect();

        let head = builder.build_ordered_list(elements.clone());

        // Three cells, each with a first and a rest.
        assert_eq!(builder.len(), 6);
        assert_eq!(head, NodeId::Anonymous(AnonymousId(3)));

        let graph = builder.drain();
        assert_eq!(graph.read_list(&head), Some(elements));

        let cells: HashSet<_> = graph
            .statements()
            .iter()
            .map(|s| s.subject.clone())
            .collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(
            graph
                .statements()
                .iter()
                .filter(|s| s.predicate == Predicate::Rest && s.object == Object::Node(NodeId::Nil))
                .count(),
            1
        );
    }

    #[test]
    fn test_statement_to_triple() {
        let statement = Statement {
            subject: AnonymousId(4).into(),
            predicate: Predicate::Type,
            object: Class::Literal.into(),
        };
        assert_eq!(
            statement.to_triple().to_string(),
            "_:n4 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://openmath.org/vocab/math#Literal>"
        );
    }
}
