//! Source trees: loading, lowering, and the resolver the engine queries.

use crate::error::{SourceError, SourceResult};
use crate::lower::lower_file;
use crate::symbols::{CRATE, SymbolTable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use stencil_core::{
    LookupContext, MemberInfo, SyntaxCorpus, SyntaxUnit, TypeDeclaration, TypeInfo, TypeRef,
    TypeResolver,
};

/// One Rust source file and the module it defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Module path (`crate::models`).
    pub module: String,

    /// Shown in diagnostics.
    pub origin: String,

    pub text: String,
}

impl SourceFile {
    pub fn new(
        module: impl Into<String>,
        origin: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// A parsed crate: its corpus plus the symbol table that resolves it.
#[derive(Debug)]
pub struct SourceTree {
    corpus: SyntaxCorpus,
    symbols: SymbolTable,
}

impl SourceTree {
    /// Load every `.rs` file under `root`, a crate's `src` directory.
    ///
    /// Files are visited in sorted path order; `src/bin` is skipped since
    /// each binary there is its own crate root.
    pub fn from_dir(root: impl AsRef<Path>) -> SourceResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SourceError::NotADirectory(root.to_path_buf()));
        }

        let mut relative = Vec::new();
        collect_rust_files(root, root, &mut relative)?;
        relative.sort();

        let files = relative
            .into_iter()
            .map(|rel| {
                let path = root.join(&rel);
                let text = fs::read_to_string(&path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(SourceFile::new(
                    module_path_for(&rel),
                    path.display().to_string(),
                    text,
                ))
            })
            .collect::<SourceResult<Vec<_>>>()?;

        Self::from_sources(files)
    }

    /// Parse and lower in-memory sources, one corpus unit per file.
    pub fn from_sources(files: impl IntoIterator<Item = SourceFile>) -> SourceResult<Self> {
        let mut corpus = SyntaxCorpus::new();
        let mut symbols = SymbolTable::default();

        for file in files {
            let syntax = syn::parse_file(&file.text).map_err(|source| SourceError::Parse {
                origin: file.origin.clone(),
                source,
            })?;
            let nodes = lower_file(&syntax, &file.module, &mut symbols);
            corpus.push(file.origin, nodes);
        }
        symbols.finalize();

        Ok(Self { corpus, symbols })
    }

    pub fn corpus(&self) -> &SyntaxCorpus {
        &self.corpus
    }
}

impl TypeResolver for SourceTree {
    fn lookup_context<'a>(&'a self, _unit: &'a SyntaxUnit) -> Box<dyn LookupContext + 'a> {
        Box::new(UnitContext {
            symbols: &self.symbols,
            resolved: RefCell::default(),
        })
    }

    fn members_of(&self, ty: &TypeInfo) -> Vec<MemberInfo> {
        self.symbols.members(&ty.path)
    }
}

/// Lookups for one unit, memoized by `(scope, text)`.
struct UnitContext<'a> {
    symbols: &'a SymbolTable,
    resolved: RefCell<HashMap<(String, String), Option<TypeInfo>>>,
}

impl LookupContext for UnitContext<'_> {
    fn resolve_type(&self, ty: &TypeRef) -> Option<TypeInfo> {
        let key = (ty.scope.clone(), ty.text.clone());
        let cached = self.resolved.borrow().get(&key).cloned();
        if let Some(hit) = cached {
            return hit;
        }

        let info = self.symbols.resolve_type(&ty.text, &ty.scope);
        self.resolved.borrow_mut().insert(key, info.clone());
        info
    }

    fn declared_type(&self, decl: &TypeDeclaration) -> Option<TypeInfo> {
        self.symbols.type_info(&decl.path())
    }

    fn resolves_receiver(&self, receiver: &[String], scope: &str) -> bool {
        self.symbols.resolves_receiver(receiver, scope)
    }
}

/// Module path of a file given its path relative to `src`.
///
/// `lib.rs` and `main.rs` are the crate root; `a/mod.rs` and `a.rs` are
/// both `crate::a`.
pub fn module_path_for(relative: &Path) -> String {
    let components: Vec<String> = relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let last = components.len().saturating_sub(1);
    let mut segments = vec![CRATE.to_string()];
    for (i, part) in components.into_iter().enumerate() {
        let root_file = i == 0 && (part == "lib" || part == "main");
        if i == last && (part == "mod" || root_file) {
            continue;
        }
        segments.push(part);
    }
    segments.join("::")
}

fn collect_rust_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> SourceResult<()> {
    let io_error = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            if dir == root && path.file_name().is_some_and(|n| n == "bin") {
                continue;
            }
            collect_rust_files(root, &path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && let Ok(rel) = path.strip_prefix(root)
        {
            out.push(rel.to_path_buf());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tree/tree_tests.rs"]
mod tree_tests;
