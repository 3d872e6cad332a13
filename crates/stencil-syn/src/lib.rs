//! stencil-syn - Rust source front end for stencil
//!
//! Reads a tree of Rust source files with [`syn`] and exposes it to the engine
//! in the two forms it needs:
//! - a [`SyntaxCorpus`](stencil_core::SyntaxCorpus) of struct and enum
//!   declarations plus turbofish call sites, one unit per file
//! - a [`TypeResolver`](stencil_core::TypeResolver) backed by a symbol table
//!   built from the same files (modules, `use` declarations, struct fields and
//!   inherent accessor methods)
//!
//! Resolution is purely lexical. Paths that leave the crate are kept as
//! absolute external paths (`::uuid::Uuid`) and never looked into.
//!
//! # Example
//!
//! ```rust,no_run
//! use stencil_core::{GeneratorConfig, generate_handlers};
//! use stencil_syn::SourceTree;
//!
//! let tree = SourceTree::from_dir("src")?;
//! let generation = generate_handlers(tree.corpus(), &tree, &GeneratorConfig::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod lower;
mod symbols;
mod tree;

pub use error::{SourceError, SourceResult};
pub use tree::{SourceFile, SourceTree, module_path_for};
