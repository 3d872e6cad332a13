//! Pattern scanning over a syntax corpus.
//!
//! The scanner visits every node once and keeps the ones a [`Predicate`]
//! accepts. It never consults type information; a candidate is only a
//! structural match and may still fail resolution.

use crate::config::{HandlerConfig, MappingConfig};
use crate::corpus::{Invocation, SyntaxCorpus, SyntaxNode, SyntaxUnit, TypeDeclaration};

/// A structural test over a single node.
pub trait Predicate {
    fn matches(&self, node: &SyntaxNode) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&SyntaxNode) -> bool,
{
    fn matches(&self, node: &SyntaxNode) -> bool {
        self(node)
    }
}

/// A node accepted by a predicate, with the unit it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub unit: &'a SyntaxUnit,
    pub node: &'a SyntaxNode,
}

impl<'a> Candidate<'a> {
    pub fn declaration(&self) -> Option<&'a TypeDeclaration> {
        match self.node {
            SyntaxNode::TypeDeclaration(decl) => Some(decl),
            SyntaxNode::Invocation(_) => None,
        }
    }

    pub fn invocation(&self) -> Option<&'a Invocation> {
        match self.node {
            SyntaxNode::Invocation(call) => Some(call),
            SyntaxNode::TypeDeclaration(_) => None,
        }
    }
}

/// Declaration mode: an extensible type carrying one of the marker attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedDeclaration {
    markers: Vec<String>,
}

impl MarkedDeclaration {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &HandlerConfig) -> Self {
        Self::new(config.markers.iter().cloned())
    }
}

impl Predicate for MarkedDeclaration {
    fn matches(&self, node: &SyntaxNode) -> bool {
        let SyntaxNode::TypeDeclaration(decl) = node else {
            return false;
        };
        decl.extensible && self.markers.iter().any(|m| decl.has_marker(m))
    }
}

/// Call-site mode: `Receiver::method::<A, B>()` or
/// `qualifier::Receiver::method::<A, B>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCall {
    method: String,
    receivers: Vec<String>,
    qualifier: String,
}

impl RegistrationCall {
    pub fn new<I, S>(method: impl Into<String>, receivers: I, qualifier: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method: method.into(),
            receivers: receivers.into_iter().map(Into::into).collect(),
            qualifier: qualifier.into(),
        }
    }

    pub fn from_config(config: &MappingConfig) -> Self {
        Self::new(
            config.method.clone(),
            config.receivers.iter().cloned(),
            config.qualifier.clone(),
        )
    }

    fn is_receiver(&self, name: &str) -> bool {
        self.receivers.iter().any(|r| r == name)
    }
}

impl Predicate for RegistrationCall {
    fn matches(&self, node: &SyntaxNode) -> bool {
        let SyntaxNode::Invocation(call) = node else {
            return false;
        };
        if call.method != self.method || call.type_arguments.len() != 2 {
            return false;
        }
        match call.receiver.as_slice() {
            [name] => self.is_receiver(name),
            [qualifier, name] => *qualifier == self.qualifier && self.is_receiver(name),
            _ => false,
        }
    }
}

/// Collects the nodes of a corpus accepted by `P`.
#[derive(Debug, Clone)]
pub struct Scanner<P> {
    predicate: P,
}

impl<P: Predicate> Scanner<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Candidates in unit order, then node order within each unit.
    pub fn scan<'a>(&self, corpus: &'a SyntaxCorpus) -> Vec<Candidate<'a>> {
        corpus
            .units()
            .iter()
            .flat_map(|unit| unit.nodes.iter().map(move |node| Candidate { unit, node }))
            .filter(|candidate| self.predicate.matches(candidate.node))
            .collect()
    }
}
