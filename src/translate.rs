//! Tree-to-graph translation
//!
//! | construct | graph                                                        | result       |
//! |-----------|--------------------------------------------------------------|--------------|
//! | `OMV`     | `_:n a om:Variable ; om:name "x"`                            | `_:n`        |
//! | `OMS`     | nothing                                                      | `cd:<cd>#<name>` |
//! | `OMI`     | `_:n a om:Literal ; om:value 2`                              | `_:n`        |
//! | `OMF`     | `_:n a om:Literal ; om:value 2.5E0`                          | `_:n`        |
//! | `OMA`     | `ex:<uuid>_app a om:Application ; om:operator .. ; om:arguments (..)` | `ex:<uuid>_app` |
//!
//! An application without arguments has no `om:arguments` edge at all, so the
//! edge's presence tells consumers whether the operator was applied to
//! anything.
//!
//! The descent runs on an explicit stack instead of the call stack. Frames are
//! processed in the same order plain recursion would visit them: the
//! application node is minted first, then its operator, then its arguments
//! from left to right.

use log::trace;
use oxrdf::Literal;
use oxrdf::vocab::xsd;

use crate::Error;
use crate::graph::{AddressableId, Class, GraphBuilder, NodeId, Predicate, SymbolId};
use crate::openmath::Construct;
use crate::parser::Element;

const APPLICATION_ROLE: &str = "_app";

enum Frame<'a> {
    Enter(&'a Element),
    /// The operator's identity is on top of the value stack.
    Operator {
        application: AddressableId,
        arguments: &'a [Element],
    },
    /// The identities of the last `count` translated arguments are on top of
    /// the value stack, leftmost first.
    Arguments {
        application: AddressableId,
        count: usize,
    },
}

/// Translates `element` and everything below it into `builder`, returning the
/// identity that stands for the whole subtree.
///
/// On error the builder holds an incomplete graph and must be discarded.
pub fn translate(element: &Element, builder: &mut GraphBuilder) -> Result<NodeId, Error> {
    let mut frames = vec![Frame::Enter(element)];
    let mut values: Vec<NodeId> = vec![];

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(element) => {
                trace!("translating <{}>", element.tag);
                match Construct::classify(element)? {
                    Construct::Variable { name } => values.push(variable(builder, name)),
                    Construct::Symbol { cd, name } => {
                        values.push(SymbolId::derive(cd, name)?.into());
                    }
                    Construct::Integer(digits) => values.push(literal(
                        builder,
                        Literal::new_typed_literal(digits, xsd::INTEGER),
                    )),
                    Construct::Decimal(value) => values.push(literal(builder, value.into())),
                    Construct::Application {
                        operator,
                        arguments,
                    } => {
                        let application = builder.allocate_addressable(APPLICATION_ROLE)?;
                        builder.add_statement(
                            application.clone(),
                            Predicate::Type,
                            Class::Application,
                        );
                        frames.push(Frame::Operator {
                            application,
                            arguments,
                        });
                        frames.push(Frame::Enter(operator));
                    }
                }
            }
            Frame::Operator {
                application,
                arguments,
            } => {
                let operator = pop(&mut values)?;
                builder.add_statement(application.clone(), Predicate::Operator, operator);

                if arguments.is_empty() {
                    values.push(application.into());
                } else {
                    frames.push(Frame::Arguments {
                        application,
                        count: arguments.len(),
                    });
                    frames.extend(arguments.iter().rev().map(Frame::Enter));
                }
            }
            Frame::Arguments { application, count } => {
                // every Enter frame pushes exactly one value
                let arguments = values.split_off(values.len() - count);
                let list = builder.build_ordered_list(arguments);
                builder.add_statement(application.clone(), Predicate::Arguments, list);
                values.push(application.into());
            }
        }
    }

    pop(&mut values)
}

fn variable(builder: &mut GraphBuilder, name: &str) -> NodeId {
    let node = builder.allocate_anonymous();
    builder.add_statement(node, Predicate::Type, Class::Variable);
    builder.add_statement(node, Predicate::Name, Literal::new_simple_literal(name));
    node.into()
}

fn literal(builder: &mut GraphBuilder, value: Literal) -> NodeId {
    let node = builder.allocate_anonymous();
    builder.add_statement(node, Predicate::Type, Class::Literal);
    builder.add_statement(node, Predicate::Value, value);
    node.into()
}

fn pop(values: &mut Vec<NodeId>) -> Result<NodeId, Error> {
    values
        .pop()
        .ok_or_else(|| Error::StructuralViolation("expression produced no node".to_string()))
}
