//! Entity, mapping and handler descriptions.
//!
//! These are the resolved inputs of the template synthesizer. Every value is
//! built once and never mutated; synthesis is a pure function of them.

use crate::error::{GenerateError, GenerateResult};
use crate::naming::is_identifier;
use std::collections::HashSet;

/// Whether a member is read, written, or both by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberRole {
    Readable,
    Writable,
    #[default]
    Both,
}

/// A member of an [`EntityDescription`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescription {
    /// Member name as written in the schema (`OrderId`).
    pub name: String,

    /// Type name, opaque to the engine apart from alias lookup.
    pub type_name: String,

    /// Part of the entity's identity (API generation).
    pub is_key: bool,

    /// Access role (mapping generation).
    pub role: MemberRole,
}

impl MemberDescription {
    /// Create a non-key member readable and writable by generated code.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_key: false,
            role: MemberRole::Both,
        }
    }

    /// Mark the member as part of the key.
    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }
}

/// One generatable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescription {
    pub name: String,
    pub members: Vec<MemberDescription>,
}

impl EntityDescription {
    pub fn new(name: impl Into<String>, members: Vec<MemberDescription>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Key members in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &MemberDescription> {
        self.members.iter().filter(|m| m.is_key)
    }

    /// Check the structural invariants that do not depend on generation kind.
    ///
    /// Key presence is checked by API synthesis, not here.
    pub fn validate(&self) -> GenerateResult<()> {
        if !is_identifier(&self.name) {
            return Err(GenerateError::InvalidIdentifier {
                name: self.name.clone(),
                context: "entity name".to_string(),
            });
        }

        if self.members.is_empty() {
            return Err(GenerateError::NoMembers {
                entity: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for member in &self.members {
            if !is_identifier(&member.name) {
                return Err(GenerateError::InvalidIdentifier {
                    name: member.name.clone(),
                    context: self.name.clone(),
                });
            }
            if !seen.insert(member.name.as_str()) {
                return Err(GenerateError::DuplicateMember {
                    entity: self.name.clone(),
                    member: member.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// How generated code reaches a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAccess {
    /// Stored field, read by clone and assigned directly.
    Field,
    /// `fn name(&self) -> T`
    Getter,
    /// `fn set_name(&mut self, value: T)`
    Setter,
}

/// A source member matched by name to a destination member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPair {
    pub source: String,
    pub source_access: MemberAccess,
    pub dest: String,
    pub dest_access: MemberAccess,
}

/// Everything needed to emit one mapping function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescriptor {
    /// Module containing the source type (`crate::models`).
    pub source_namespace: String,

    /// Fully-qualified source type (`crate::models::Thing`).
    pub source_type_name: String,

    /// Fully-qualified destination type.
    pub dest_type_name: String,

    /// Bare destination name used in generated names (`Stuff`).
    pub dest_display_name: String,

    /// Matched members in source declaration order.
    pub member_pairs: Vec<MemberPair>,
}

/// An eligible member of a handler struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMember {
    pub label: String,
    pub type_name: String,
}

/// A marked struct that gets handler plumbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDescription {
    pub class_name: String,
    pub namespace: String,

    /// Fully-qualified struct path (`crate::things::Thing`).
    pub type_path: String,

    pub members: Vec<HandlerMember>,

    /// The struct has stored fields outside `members`; the generated
    /// constructor fills them from `Default`.
    pub fills_remaining: bool,
}

/// One unit of emitted source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Unique per run; used as the file name by drivers.
    pub artifact_id: String,
    pub text: String,
}

impl GeneratedArtifact {
    pub fn new(artifact_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
