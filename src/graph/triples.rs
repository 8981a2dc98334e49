use oxrdf::Triple;

use super::{NodeId, Object, Predicate, Statement, vocab};

/// The finished graph of one document.
///
/// Produced by [`GraphBuilder::drain`](super::GraphBuilder::drain); never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RdfGraph {
    statements: Vec<Statement>,
}

impl RdfGraph {
    pub(super) fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Namespace bindings to use when serializing.
    pub fn prefixes(&self) -> &'static [(&'static str, &'static str)] {
        &vocab::PREFIXES
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        self.statements.iter().map(Statement::to_triple)
    }

    pub fn objects<'a>(
        &'a self,
        subject: &'a NodeId,
        predicate: Predicate,
    ) -> impl Iterator<Item = &'a Object> + 'a {
        self.statements
            .iter()
            .filter(move |s| s.subject == *subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    pub fn object(&self, subject: &NodeId, predicate: Predicate) -> Option<&Object> {
        self.statements
            .iter()
            .find(|s| s.subject == *subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Whether any statement has `node` as its subject.
    pub fn describes(&self, node: &NodeId) -> bool {
        self.statements.iter().any(|s| s.subject == *node)
    }

    /// Follows `rdf:first`/`rdf:rest` from `head` back to the element sequence.
    ///
    /// Returns `None` if a cell is missing either edge or the chain never
    /// reaches `rdf:nil`.
    pub fn read_list(&self, head: &NodeId) -> Option<Vec<NodeId>> {
        let mut elements = vec![];
        let mut cell = head;

        while *cell != NodeId::Nil {
            if elements.len() > self.statements.len() {
                return None;
            }
            elements.push(self.object(cell, Predicate::First)?.as_node()?.clone());
            cell = self.object(cell, Predicate::Rest)?.as_node()?;
        }

        Some(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Class, GraphBuilder};

    #[test]
    fn test_lookup() {
        let mut builder = GraphBuilder::new();
        let n = builder.allocate_anonymous();
        builder.add_statement(n, Predicate::Type, Class::Variable);
        builder.add_statement(n, Predicate::Name, oxrdf::Literal::new_simple_literal("x"));
        let graph = builder.drain();

        let n = NodeId::from(n);
        assert!(graph.describes(&n));
        assert!(!graph.describes(&NodeId::Nil));
        assert_eq!(
            graph.object(&n, Predicate::Type),
            Some(&Object::Class(Class::Variable))
        );
        assert_eq!(graph.objects(&n, Predicate::Value).count(), 0);
        assert_eq!(graph.triples().count(), 2);
        assert_eq!(graph.prefixes().len(), 4);
    }

    #[test]
    fn test_read_list_rejects_broken_chain() {
        let mut builder = GraphBuilder::new();
        let cell = builder.allocate_anonymous();
        let element = builder.allocate_anonymous();
        builder.add_statement(cell, Predicate::First, element);
        let graph = builder.drain();

        assert_eq!(graph.read_list(&cell.into()), None);
        assert_eq!(graph.read_list(&NodeId::Nil), Some(vec![]));
    }

    #[test]
    fn test_read_list_rejects_cycle() {
        let mut builder = GraphBuilder::new();
        let cell = builder.allocate_anonymous();
        let element = builder.allocate_anonymous();
        builder.add_statement(cell, Predicate::First, element);
        builder.add_statement(cell, Predicate::Rest, cell);
        let graph = builder.drain();

        assert_eq!(graph.read_list(&cell.into()), None);
    }
}
