//! Symbol Table: per-scope symbol store with parent-linked scopes.
//!
//! Names are borrowed slices into the single source buffer the analysis
//! run is tied to (`SymbolTable<'src>`); inserting or looking up a symbol
//! never copies or allocates the name, and two occurrences of the same
//! identifier text compare equal regardless of where they appear, by
//! ordinary `&str` equality (length-prefixed byte comparison under the
//! hood). This mirrors the scope-chain design in the analyzer's own
//! `ScopeTree`/`Rib` pattern, generalized with the payload spec.md §3
//! requires (kind, declared type, initialization flag, parameter lists,
//! struct layouts).

use indexmap::IndexMap;

use glintc_util::span::Span;

use crate::types::DataType;

/// All fixed-size primitive and struct-reference fields are 8 bytes
/// (see `DESIGN.md`'s Open Question resolutions).
pub const FIELD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct StructId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SymbolKind {
    Variable,
    Function,
    Type,
}

/// A field within a [`StructLayout`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct FieldLayout<'src> {
    pub name: &'src str,
    pub ty: DataType,
    pub offset: usize,
}

/// The field layout of a struct type: source-order fields with
/// accumulated byte offsets.
#[derive(Clone, Debug, serde::Serialize)]
pub struct StructLayout<'src> {
    pub name: &'src str,
    pub fields: Vec<FieldLayout<'src>>,
    pub total_size: usize,
}

impl<'src> StructLayout<'src> {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Find a field by name, for member-access resolution.
    pub fn field(&self, name: &str) -> Option<&FieldLayout<'src>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A builder that accumulates fields into a [`StructLayout`] in
/// declaration order, per spec.md §4.5's struct-definition rule:
/// duplicate field names are rejected, and each field's offset is the
/// running size before it is added.
#[derive(Default)]
pub struct StructLayoutBuilder<'src> {
    fields: Vec<FieldLayout<'src>>,
}

impl<'src> StructLayoutBuilder<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Returns `Err(())` if a field with this name was
    /// already added (the caller reports `VARIABLE_REDECLARED` at field
    /// granularity).
    pub fn add_field(&mut self, name: &'src str, ty: DataType) -> Result<(), ()> {
        if self.fields.iter().any(|f| f.name == name) {
            return Err(());
        }
        let offset = self.fields.len() * FIELD_SIZE;
        self.fields.push(FieldLayout { name, ty, offset });
        Ok(())
    }

    pub fn build(self, name: &'src str) -> StructLayout<'src> {
        let total_size = self.fields.len() * FIELD_SIZE;
        StructLayout {
            name,
            fields: self.fields,
            total_size,
        }
    }
}

/// A named binding: variable, function, or type.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Symbol<'src> {
    pub name: &'src str,
    pub kind: SymbolKind,
    /// For `Function`, this is the declared return type.
    pub ty: DataType,
    pub initialized: bool,
    pub scope_depth: u32,
    pub location: (u32, u32),
    pub parameters: Option<Vec<(&'src str, DataType)>>,
    /// Present iff `ty == DataType::Struct(_)` for a `Type`-kind symbol,
    /// or for a `Variable`-kind symbol whose declared type is that
    /// struct (a non-owning handle into the table's layout storage).
    pub struct_layout: Option<StructId>,
}

struct Scope<'src> {
    parent: Option<ScopeId>,
    depth: u32,
    symbols: IndexMap<&'src str, Symbol<'src>>,
}

/// Attempted to insert a symbol whose name already exists in the target
/// scope.
#[derive(Debug, PartialEq, Eq)]
pub struct Duplicate;

/// The full set of scopes and struct layouts produced by one analysis
/// run, tied to the borrowed source buffer that names are sliced from.
pub struct SymbolTable<'src> {
    source: &'src str,
    scopes: Vec<Scope<'src>>,
    layouts: Vec<StructLayout<'src>>,
    global: ScopeId,
}

impl<'src> SymbolTable<'src> {
    /// Create a table with a single root (module) scope at depth 0.
    pub fn new(source: &'src str) -> Self {
        let global = Scope {
            parent: None,
            depth: 0,
            symbols: IndexMap::new(),
        };
        Self {
            source,
            scopes: vec![global],
            layouts: Vec::new(),
            global: ScopeId(0),
        }
    }

    #[inline]
    pub fn global(&self) -> ScopeId {
        self.global
    }

    #[inline]
    pub fn depth(&self, scope: ScopeId) -> u32 {
        self.scopes[scope.0 as usize].depth
    }

    /// Resolve a name-span against the table's source buffer.
    #[inline]
    pub fn resolve_span(&self, span: Span) -> &'src str {
        &self.source[span.start..span.end]
    }

    /// `create(parent)`: allocate a new scope whose depth is
    /// `parent.depth + 1`.
    pub fn create(&mut self, parent: ScopeId) -> ScopeId {
        let depth = self.depth(parent) + 1;
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(parent),
            depth,
            symbols: IndexMap::new(),
        });
        id
    }

    /// `insert(scope, name, symbol)`: fails with [`Duplicate`] if a
    /// symbol with that name already exists **in this scope only**.
    pub fn insert(&mut self, scope: ScopeId, symbol: Symbol<'src>) -> Result<(), Duplicate> {
        let scope_data = &mut self.scopes[scope.0 as usize];
        if scope_data.symbols.contains_key(symbol.name) {
            return Err(Duplicate);
        }
        scope_data.symbols.insert(symbol.name, symbol);
        Ok(())
    }

    /// `lookupLocal(scope, name)`: searches this scope only.
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Symbol<'src>> {
        self.scopes[scope.0 as usize].symbols.get(name)
    }

    /// Mutable variant of [`Self::lookup_local`], used to mark a symbol
    /// initialized after a completed assignment.
    pub fn lookup_local_mut(&mut self, scope: ScopeId, name: &str) -> Option<&mut Symbol<'src>> {
        self.scopes[scope.0 as usize].symbols.get_mut(name)
    }

    /// `lookupChain(scope, name)`: this scope, then walk `parent` until
    /// the root.
    pub fn lookup_chain(&self, scope: ScopeId, name: &str) -> Option<&Symbol<'src>> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(sym) = self.scopes[id.0 as usize].symbols.get(name) {
                return Some(sym);
            }
            current = self.scopes[id.0 as usize].parent;
        }
        None
    }

    /// Like [`Self::lookup_chain`] but returns the [`ScopeId`] the
    /// symbol was found in, so a caller can mark it initialized.
    pub fn lookup_chain_scope(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if self.scopes[id.0 as usize].symbols.contains_key(name) {
                return Some(id);
            }
            current = self.scopes[id.0 as usize].parent;
        }
        None
    }

    /// `free(scope)`: releases the symbols owned by this scope only;
    /// does not traverse `parent`. Struct layouts introduced by
    /// `Type`-kind symbols in this scope are left in the layout table:
    /// a `StructId` is an index into `self.layouts`, and any `Symbol`
    /// cloned out of this scope before it was freed may still hold one,
    /// so removing the entry would leave that handle dangling.
    pub fn free(&mut self, scope: ScopeId) {
        self.scopes[scope.0 as usize].symbols.clear();
    }

    /// Register a newly built struct layout, returning its handle.
    pub fn add_layout(&mut self, layout: StructLayout<'src>) -> StructId {
        let id = StructId(self.layouts.len() as u32);
        self.layouts.push(layout);
        id
    }

    pub fn layout(&self, id: StructId) -> &StructLayout<'src> {
        &self.layouts[id.0 as usize]
    }

    /// Iterate the symbols declared directly in `scope`, in insertion
    /// order. Used by the driver's `--emit-symbols` output; the checker
    /// itself never needs to enumerate a scope.
    pub fn symbols(&self, scope: ScopeId) -> impl Iterator<Item = &Symbol<'src>> {
        self.scopes[scope.0 as usize].symbols.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym<'a>(name: &'a str, kind: SymbolKind, ty: DataType) -> Symbol<'a> {
        Symbol {
            name,
            kind,
            ty,
            initialized: false,
            scope_depth: 0,
            location: (1, 1),
            parameters: None,
            struct_layout: None,
        }
    }

    #[test]
    fn insert_then_lookup_local() {
        let mut table = SymbolTable::new("int x = 1;");
        let g = table.global();
        table
            .insert(g, sym("x", SymbolKind::Variable, DataType::Int))
            .unwrap();
        assert!(table.lookup_local(g, "x").is_some());
    }

    #[test]
    fn duplicate_insert_in_same_scope_fails() {
        let mut table = SymbolTable::new("x x");
        let g = table.global();
        table
            .insert(g, sym("x", SymbolKind::Variable, DataType::Int))
            .unwrap();
        let err = table.insert(g, sym("x", SymbolKind::Variable, DataType::Int));
        assert_eq!(err, Err(Duplicate));
    }

    #[test]
    fn shadowing_inner_scope_does_not_remove_outer() {
        let mut table = SymbolTable::new("x x");
        let g = table.global();
        table
            .insert(g, sym("x", SymbolKind::Variable, DataType::Int))
            .unwrap();
        let inner = table.create(g);
        table
            .insert(inner, sym("x", SymbolKind::Variable, DataType::Float))
            .unwrap();

        assert_eq!(table.lookup_chain(inner, "x").unwrap().ty, DataType::Float);
        table.free(inner);
        assert_eq!(table.lookup_chain(g, "x").unwrap().ty, DataType::Int);
    }

    #[test]
    fn lookup_chain_walks_to_root() {
        let mut table = SymbolTable::new("x");
        let g = table.global();
        table
            .insert(g, sym("x", SymbolKind::Variable, DataType::Int))
            .unwrap();
        let inner = table.create(g);
        let deeper = table.create(inner);
        assert!(table.lookup_chain(deeper, "x").is_some());
        assert!(table.lookup_local(deeper, "x").is_none());
    }

    #[test]
    fn free_clears_only_that_scope() {
        let mut table = SymbolTable::new("x y");
        let g = table.global();
        table
            .insert(g, sym("x", SymbolKind::Variable, DataType::Int))
            .unwrap();
        let inner = table.create(g);
        table
            .insert(inner, sym("y", SymbolKind::Variable, DataType::Int))
            .unwrap();
        table.free(inner);
        assert!(table.lookup_local(inner, "y").is_none());
        assert!(table.lookup_local(g, "x").is_some());
    }

    #[test]
    fn depth_increments_from_parent() {
        let mut table = SymbolTable::new("");
        let g = table.global();
        assert_eq!(table.depth(g), 0);
        let inner = table.create(g);
        assert_eq!(table.depth(inner), 1);
        let deeper = table.create(inner);
        assert_eq!(table.depth(deeper), 2);
    }

    #[test]
    fn struct_layout_offsets_accumulate_by_field_size() {
        let mut builder = StructLayoutBuilder::new();
        builder.add_field("x", DataType::Int).unwrap();
        builder.add_field("y", DataType::Int).unwrap();
        let layout = builder.build("P");
        assert_eq!(layout.field_count(), 2);
        assert_eq!(layout.fields[0].offset, 0);
        assert_eq!(layout.fields[1].offset, FIELD_SIZE);
        assert_eq!(layout.total_size, FIELD_SIZE * 2);
    }

    #[test]
    fn struct_layout_rejects_duplicate_field_names() {
        let mut builder = StructLayoutBuilder::new();
        builder.add_field("x", DataType::Int).unwrap();
        assert_eq!(builder.add_field("x", DataType::Float), Err(()));
    }

    #[test]
    fn struct_layout_field_lookup_by_name() {
        let mut builder = StructLayoutBuilder::new();
        builder.add_field("x", DataType::Int).unwrap();
        let layout = builder.build("P");
        assert!(layout.field("x").is_some());
        assert!(layout.field("z").is_none());
    }

    #[test]
    fn resolve_span_slices_source_buffer() {
        let table = SymbolTable::new("int foo = 1;");
        let span = Span::new(4, 7, 1, 5);
        assert_eq!(table.resolve_span(span), "foo");
    }
}
