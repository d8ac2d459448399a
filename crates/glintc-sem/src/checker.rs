//! AST Checker: the recursive traversal that orchestrates the rest of
//! the analyzer.
//!
//! `check` validates a statement-shaped node and returns whether it is
//! free of new diagnostics; `type_of` evaluates an expression-shaped
//! node's type, reporting at most one diagnostic per underlying cause
//! and returning [`DataType::Unknown`] to suppress cascades, per the
//! Unknown-propagation rule. A parent always visits every child even
//! after a child fails, so sibling diagnostics keep surfacing.

use glintc_ast::{Ast, BinOp, CompoundOp, Node, NodeId, NodeKind};
use glintc_util::span::{FileId, SourceMap, Span};

use crate::builtins;
use crate::diagnostics::{self, Code, Location, Reporter};
use crate::symtab::{ScopeId, Symbol, SymbolKind, SymbolTable};
use crate::types::{self, compat, Compat, DataType};

struct FunctionCtx {
    return_type: DataType,
}

/// The traversal context: current/global scope, enclosing function (if
/// any), the reporter, and the source buffer's identity. Exactly the
/// `ctx` described in spec.md §4.5.
struct Checker<'a, 'src> {
    table: &'a mut SymbolTable<'src>,
    reporter: &'a mut Reporter,
    source_map: Option<&'a SourceMap>,
    file: FileId,
    current: ScopeId,
    current_function: Option<FunctionCtx>,
}

/// Walk `ast` starting at its root, seeding the built-in registry first,
/// and return the populated module-scope symbol table on success.
///
/// Returns `None` if the reporter recorded any error or fatal diagnostic
/// during the walk (spec.md §7's externally-visible failure rule); the
/// table itself is still fully populated in that case, but the contract
/// is that callers only consume it after checking `reporter.has_errors()`
/// themselves, and `check_program` enforces that by handing back nothing.
pub fn check_program<'src>(
    ast: &Ast,
    source: &'src str,
    file: FileId,
    reporter: &mut Reporter,
    source_map: Option<&SourceMap>,
) -> Option<SymbolTable<'src>> {
    let mut table = SymbolTable::new(source);
    let global = table.global();

    for name in builtins::distinct_names() {
        let _ = table.insert(
            global,
            Symbol {
                name,
                kind: SymbolKind::Function,
                ty: DataType::Void,
                initialized: true,
                scope_depth: 0,
                location: (0, 0),
                parameters: Some(Vec::new()),
                struct_layout: None,
            },
        );
    }

    {
        let mut checker = Checker {
            table: &mut table,
            reporter,
            source_map,
            file,
            current: global,
            current_function: None,
        };
        if let Some(root) = ast.root() {
            checker.check(ast, root);
        }
    }

    if reporter.has_errors() {
        None
    } else {
        Some(table)
    }
}

impl<'a, 'src> Checker<'a, 'src> {
    fn loc(&self, span: Span) -> Location {
        Location { file: self.file, span }
    }

    fn report(&mut self, code: Code, span: Span, extra: Option<&str>) {
        self.reporter
            .report(code, Some(self.loc(span)), extra, self.source_map);
    }

    fn node<'ast>(&self, ast: &'ast Ast, id: NodeId) -> &'ast Node {
        ast.get(id)
    }

    fn name(&self, span: Span) -> &'src str {
        self.table.resolve_span(span)
    }

    /// Check a statement-shaped node, dispatching on its kind.
    ///
    /// Returns `true` if no new diagnostic was emitted for this node or
    /// any of its descendants.
    fn check(&mut self, ast: &Ast, id: NodeId) -> bool {
        let kind = self.node(ast, id).kind.clone();
        match kind {
            NodeKind::Program => self.check_block_like(ast, id),
            NodeKind::BlockStatement | NodeKind::BlockExpression => self.check_block(ast, id),

            NodeKind::IntVariableDefinition { name_span } => {
                self.check_var_decl(ast, id, name_span, DataType::Int)
            }
            NodeKind::FloatVariableDefinition { name_span } => {
                self.check_var_decl(ast, id, name_span, DataType::Float)
            }
            NodeKind::DoubleVariableDefinition { name_span } => {
                self.check_var_decl(ast, id, name_span, DataType::Double)
            }
            NodeKind::BoolVariableDefinition { name_span } => {
                self.check_var_decl(ast, id, name_span, DataType::Bool)
            }
            NodeKind::StringVariableDefinition { name_span } => {
                self.check_var_decl(ast, id, name_span, DataType::String)
            }
            NodeKind::StructVariableDefinition { name_span, type_span } => {
                self.check_struct_var_decl(ast, id, name_span, type_span)
            }

            NodeKind::Assignment => self.check_assignment(ast, id, None),
            NodeKind::CompoundAssign(op) => self.check_assignment(ast, id, Some(op)),

            NodeKind::IfConditional => self.check_if(ast, id),
            NodeKind::LoopStatement => self.check_loop(ast, id),

            NodeKind::FunctionDefinition { name_span } => {
                self.check_function_def(ast, id, name_span)
            }
            NodeKind::ReturnStatement => self.check_return(ast, id),
            NodeKind::StructDefinition { name_span } => self.check_struct_def(ast, id, name_span),

            // Anything expression-shaped used as a bare statement: just
            // evaluate it for its diagnostics and discard the type.
            _ => self.type_of(ast, id) != DataType::Unknown,
        }
    }

    fn check_block_like(&mut self, ast: &Ast, id: NodeId) -> bool {
        let mut ok = true;
        for child in ast.children(id).collect::<Vec<_>>() {
            ok &= self.check(ast, child);
        }
        ok
    }

    fn check_block(&mut self, ast: &Ast, id: NodeId) -> bool {
        let previous = self.current;
        self.current = self.table.create(previous);
        let ok = self.check_block_like(ast, id);
        self.table.free(self.current);
        self.current = previous;
        ok
    }

    fn check_var_decl(&mut self, ast: &Ast, id: NodeId, name_span: Span, ty: DataType) -> bool {
        let span = self.node(ast, id).span;
        let name = self.name(name_span);
        let initializer = self.node(ast, id).first_child;

        if self.table.lookup_local(self.current, name).is_some() {
            self.report(diagnostics::VARIABLE_REDECLARED, span, Some(name));
            if let Some(init) = initializer {
                self.type_of(ast, init);
            }
            return false;
        }

        let _ = self.table.insert(
            self.current,
            Symbol {
                name,
                kind: SymbolKind::Variable,
                ty,
                initialized: false,
                scope_depth: self.table.depth(self.current),
                location: (span.line, span.column),
                parameters: None,
                struct_layout: None,
            },
        );

        let Some(init) = initializer else {
            return true;
        };

        let actual = self.type_of(ast, init);
        match compat(ty, actual) {
            Compat::Err => {
                let code = diagnostics::mismatch_code(ty, actual);
                self.report(code, span, Some(name));
                false
            }
            Compat::Warn => {
                self.report(diagnostics::TYPE_MISMATCH_DOUBLE_TO_FLOAT, span, Some(name));
                self.mark_initialized(name);
                true
            }
            Compat::Ok => {
                self.mark_initialized(name);
                true
            }
        }
    }

    fn mark_initialized(&mut self, name: &str) {
        if let Some(scope) = self.table.lookup_chain_scope(self.current, name) {
            if let Some(sym) = self.table.lookup_local_mut(scope, name) {
                sym.initialized = true;
            }
        }
    }

    fn check_struct_var_decl(
        &mut self,
        ast: &Ast,
        id: NodeId,
        name_span: Span,
        type_span: Span,
    ) -> bool {
        let span = self.node(ast, id).span;
        let name = self.name(name_span);
        let type_name = self.name(type_span);
        let initializer = self.node(ast, id).first_child;

        let struct_id = match self.table.lookup_chain(self.current, type_name) {
            Some(sym) => match sym.ty {
                DataType::Struct(struct_id) => Some(struct_id),
                _ => None,
            },
            None => None,
        };

        let Some(struct_id) = struct_id else {
            self.report(diagnostics::UNDEFINED_VARIABLE, span, Some(type_name));
            if let Some(init) = initializer {
                self.type_of(ast, init);
            }
            return false;
        };

        if self.table.lookup_local(self.current, name).is_some() {
            self.report(diagnostics::VARIABLE_REDECLARED, span, Some(name));
            return false;
        }

        let _ = self.table.insert(
            self.current,
            Symbol {
                name,
                kind: SymbolKind::Variable,
                ty: DataType::Struct(struct_id),
                initialized: initializer.is_some(),
                scope_depth: self.table.depth(self.current),
                location: (span.line, span.column),
                parameters: None,
                struct_layout: Some(struct_id),
            },
        );

        if let Some(init) = initializer {
            self.type_of(ast, init);
        }
        true
    }

    fn check_assignment(&mut self, ast: &Ast, id: NodeId, op: Option<CompoundOp>) -> bool {
        let span = self.node(ast, id).span;
        let mut children = ast.children(id);
        let Some(lhs) = children.next() else {
            return true;
        };
        let Some(rhs) = children.next() else {
            return true;
        };

        let lhs_kind = self.node(ast, lhs).kind.clone();
        let is_valid_target = matches!(
            lhs_kind,
            NodeKind::Variable { .. } | NodeKind::MemberAccess { .. }
        );

        if !is_valid_target {
            self.report(diagnostics::INVALID_ASSIGNMENT_TARGET, span, None);
            self.type_of(ast, rhs);
            return false;
        }

        let l = self.type_of(ast, lhs);
        let r = self.type_of(ast, rhs);

        let ok = match compat(l, r) {
            Compat::Err => {
                let code = diagnostics::mismatch_code(l, r);
                self.report(code, span, None);
                false
            }
            Compat::Warn => {
                self.report(diagnostics::TYPE_MISMATCH_DOUBLE_TO_FLOAT, span, None);
                true
            }
            Compat::Ok => true,
        };

        if op.is_none() {
            if let NodeKind::Variable { name_span } = lhs_kind {
                let name = self.name(name_span);
                self.mark_initialized(name);
            }
        }

        ok
    }

    fn check_if(&mut self, ast: &Ast, id: NodeId) -> bool {
        let mut children = ast.children(id);
        let mut ok = true;
        if let Some(condition) = children.next() {
            ok &= self.check_condition(ast, condition);
        }
        for branch in children {
            ok &= self.check_block_like(ast, branch);
        }
        ok
    }

    fn check_loop(&mut self, ast: &Ast, id: NodeId) -> bool {
        let mut children = ast.children(id);
        let mut ok = true;
        if let Some(condition) = children.next() {
            ok &= self.check_condition(ast, condition);
        }
        for rest in children {
            ok &= self.check(ast, rest);
        }
        ok
    }

    fn check_condition(&mut self, ast: &Ast, id: NodeId) -> bool {
        let span = self.node(ast, id).span;
        let ty = self.type_of(ast, id);
        if matches!(ty, DataType::Unknown) {
            return false;
        }
        if matches!(ty, DataType::Bool) || ty.is_numeric() {
            true
        } else {
            self.report(diagnostics::INCOMPATIBLE_BINARY_OPERANDS, span, None);
            false
        }
    }

    fn check_function_def(&mut self, ast: &Ast, id: NodeId, name_span: Span) -> bool {
        let span = self.node(ast, id).span;
        let name = self.name(name_span);

        let mut params: Vec<(&'src str, DataType)> = Vec::new();
        let mut return_type = DataType::Void;
        let mut body: Option<NodeId> = None;

        for child in ast.children(id).collect::<Vec<_>>() {
            match self.node(ast, child).kind.clone() {
                NodeKind::ParameterList => {
                    for param in ast.children(child).collect::<Vec<_>>() {
                        if let NodeKind::Parameter { name_span } = self.node(ast, param).kind.clone() {
                            let param_name = self.name(name_span);
                            let param_ty = ast
                                .children(param)
                                .next()
                                .map(|t| self.resolve_type_ref(ast, t, Some(diagnostics::UNDEFINED_VARIABLE)))
                                .unwrap_or(DataType::Unknown);
                            params.push((param_name, param_ty));
                        }
                    }
                }
                NodeKind::ReturnType => {
                    if let Some(type_node) = ast.children(child).next() {
                        return_type =
                            self.resolve_type_ref(ast, type_node, Some(diagnostics::UNDEFINED_VARIABLE));
                    }
                }
                NodeKind::BlockStatement | NodeKind::BlockExpression => {
                    body = Some(child);
                }
                _ => {}
            }
        }

        if self.table.lookup_local(self.current, name).is_some() {
            self.report(diagnostics::VARIABLE_REDECLARED, span, Some(name));
            return false;
        }

        let _ = self.table.insert(
            self.current,
            Symbol {
                name,
                kind: SymbolKind::Function,
                ty: return_type,
                initialized: true,
                scope_depth: self.table.depth(self.current),
                location: (span.line, span.column),
                parameters: Some(params.clone()),
                struct_layout: None,
            },
        );

        let previous_scope = self.current;
        let previous_function = self.current_function.take();
        self.current = self.table.create(previous_scope);
        self.current_function = Some(FunctionCtx { return_type });

        for (param_name, param_ty) in &params {
            if self.table.lookup_local(self.current, param_name).is_some() {
                self.report(diagnostics::VARIABLE_REDECLARED, span, Some(param_name));
                continue;
            }
            let _ = self.table.insert(
                self.current,
                Symbol {
                    name: param_name,
                    kind: SymbolKind::Variable,
                    ty: *param_ty,
                    initialized: true,
                    scope_depth: self.table.depth(self.current),
                    location: (span.line, span.column),
                    parameters: None,
                    struct_layout: None,
                },
            );
        }

        let mut ok = true;
        if let Some(body) = body {
            for stmt in ast.children(body).collect::<Vec<_>>() {
                ok &= self.check(ast, stmt);
            }
        }

        self.table.free(self.current);
        self.current = previous_scope;
        self.current_function = previous_function;
        ok
    }

    fn check_return(&mut self, ast: &Ast, id: NodeId) -> bool {
        let span = self.node(ast, id).span;
        let value = self.node(ast, id).first_child;

        let Some(expected) = self.current_function.as_ref().map(|f| f.return_type) else {
            self.report(diagnostics::INVALID_EXPRESSION, span, None);
            if let Some(value) = value {
                self.type_of(ast, value);
            }
            return false;
        };

        if matches!(expected, DataType::Void) {
            if let Some(value) = value {
                self.type_of(ast, value);
                self.report(diagnostics::UNEXPECTED_RETURN_VALUE, span, None);
                return false;
            }
            return true;
        }

        let Some(value) = value else {
            self.report(diagnostics::MISSING_RETURN_VALUE, span, None);
            return false;
        };

        let actual = self.type_of(ast, value);
        if compat(expected, actual).is_err() {
            self.report(diagnostics::RETURN_TYPE_MISMATCH, span, None);
            false
        } else {
            true
        }
    }

    fn check_struct_def(&mut self, ast: &Ast, id: NodeId, name_span: Span) -> bool {
        let span = self.node(ast, id).span;
        let name = self.name(name_span);
        let duplicate = self.table.lookup_local(self.current, name).is_some();

        let mut builder = crate::symtab::StructLayoutBuilder::new();
        let mut ok = true;
        if let Some(field_list) = self.node(ast, id).first_child {
            for field in ast.children(field_list).collect::<Vec<_>>() {
                if let NodeKind::StructField { name_span } = self.node(ast, field).kind.clone() {
                    let field_name = self.name(name_span);
                    let field_ty = ast
                        .children(field)
                        .next()
                        .map(|t| self.resolve_type_ref(ast, t, None))
                        .unwrap_or(DataType::Unknown);
                    let field_span = self.node(ast, field).span;
                    if builder.add_field(field_name, field_ty).is_err() {
                        self.report(diagnostics::VARIABLE_REDECLARED, field_span, Some(field_name));
                        ok = false;
                    }
                }
            }
        }

        if duplicate {
            self.report(diagnostics::VARIABLE_REDECLARED, span, Some(name));
            return false;
        }

        let layout = builder.build(name);
        let struct_id = self.table.add_layout(layout);
        let _ = self.table.insert(
            self.current,
            Symbol {
                name,
                kind: SymbolKind::Type,
                ty: DataType::Struct(struct_id),
                initialized: true,
                scope_depth: self.table.depth(self.current),
                location: (span.line, span.column),
                parameters: None,
                struct_layout: Some(struct_id),
            },
        );
        ok
    }

    /// Resolve a `REF_*` node to a [`DataType`]. `unresolved_code`, when
    /// `Some`, is the diagnostic emitted if a `REF_CUSTOM` name does not
    /// resolve to a known struct type; callers that must stay silent on
    /// an unresolved custom type (struct field declarations) pass `None`.
    fn resolve_type_ref(&mut self, ast: &Ast, id: NodeId, unresolved_code: Option<Code>) -> DataType {
        let span = self.node(ast, id).span;
        match self.node(ast, id).kind.clone() {
            NodeKind::RefInt => DataType::Int,
            NodeKind::RefFloat => DataType::Float,
            NodeKind::RefDouble => DataType::Double,
            NodeKind::RefBool => DataType::Bool,
            NodeKind::RefString => DataType::String,
            NodeKind::RefCustom { name_span } => {
                let name = self.name(name_span);
                match self.table.lookup_chain(self.current, name).cloned() {
                    Some(sym) if matches!(sym.ty, DataType::Struct(_)) => sym.ty,
                    _ => {
                        if let Some(code) = unresolved_code {
                            self.report(code, span, Some(name));
                        }
                        DataType::Unknown
                    }
                }
            }
            _ => DataType::Unknown,
        }
    }

    /// Evaluate an expression-shaped node's type, reporting at most one
    /// diagnostic for its own cause and propagating `Unknown` from any
    /// operand that already carries it.
    fn type_of(&mut self, ast: &Ast, id: NodeId) -> DataType {
        let span = self.node(ast, id).span;
        match self.node(ast, id).kind.clone() {
            NodeKind::IntLit => DataType::Int,
            NodeKind::FloatLit => DataType::Float,
            NodeKind::DoubleLit => DataType::Double,
            NodeKind::BoolLit => DataType::Bool,
            NodeKind::StringLit => DataType::String,

            NodeKind::Variable { name_span } => self.type_of_variable(name_span, span),

            NodeKind::BinaryOp(op) => self.type_of_binary(ast, id, op, span),
            NodeKind::UnaryOp(op) => self.type_of_unary(ast, id, op, span),

            NodeKind::FunctionCall { name_span } => self.type_of_call(ast, id, name_span, span),
            NodeKind::CastExpression => self.type_of_cast(ast, id, span),
            NodeKind::MemberAccess { field_span } => self.type_of_member_access(ast, id, field_span, span),

            NodeKind::Assignment | NodeKind::CompoundAssign(_) => {
                let kind = self.node(ast, id).kind.clone();
                let op = match kind {
                    NodeKind::CompoundAssign(op) => Some(op),
                    _ => None,
                };
                if self.check_assignment(ast, id, op) {
                    ast.children(id).next().map(|lhs| self.type_of(ast, lhs)).unwrap_or(DataType::Unknown)
                } else {
                    DataType::Unknown
                }
            }

            _ => DataType::Unknown,
        }
    }

    fn type_of_variable(&mut self, name_span: Span, span: Span) -> DataType {
        let name = self.name(name_span);
        match self.table.lookup_chain(self.current, name).cloned() {
            None => {
                self.report(diagnostics::UNDEFINED_VARIABLE, span, Some(name));
                DataType::Unknown
            }
            Some(sym) if !sym.initialized => {
                self.report(diagnostics::VARIABLE_NOT_INITIALIZED, span, Some(name));
                DataType::Unknown
            }
            Some(sym) => sym.ty,
        }
    }

    fn type_of_binary(&mut self, ast: &Ast, id: NodeId, op: BinOp, span: Span) -> DataType {
        let mut children = ast.children(id);
        let Some(lhs) = children.next() else {
            return DataType::Unknown;
        };
        let Some(rhs) = children.next() else {
            return DataType::Unknown;
        };
        let l = self.type_of(ast, lhs);
        let r = self.type_of(ast, rhs);
        let result = types::binary_op_result(op, l, r);
        if matches!(result, DataType::Unknown) && !matches!(l, DataType::Unknown) && !matches!(r, DataType::Unknown)
        {
            self.report(diagnostics::INCOMPATIBLE_BINARY_OPERANDS, span, None);
        }
        result
    }

    fn type_of_unary(&mut self, ast: &Ast, id: NodeId, op: glintc_ast::UnOp, span: Span) -> DataType {
        let Some(operand) = ast.children(id).next() else {
            return DataType::Unknown;
        };
        let operand_ty = self.type_of(ast, operand);
        let result = types::unary_op_result(op, operand_ty);
        if matches!(result, DataType::Unknown) && !matches!(operand_ty, DataType::Unknown) {
            self.report(diagnostics::INCOMPATIBLE_BINARY_OPERANDS, span, None);
        }
        result
    }

    fn type_of_call(&mut self, ast: &Ast, id: NodeId, name_span: Span, span: Span) -> DataType {
        let name = self.name(name_span);
        let arg_list = ast.children(id).next();
        let arg_ids: Vec<NodeId> = arg_list.map(|l| ast.children(l).collect()).unwrap_or_default();
        let arg_types: Vec<DataType> = arg_ids.iter().map(|&a| self.type_of(ast, a)).collect();

        if builtins::is_builtin(name) {
            return match builtins::resolve_overload(name, &arg_types) {
                Some(builtin_id) => builtin_return_type(builtin_id),
                None => {
                    self.report(diagnostics::NO_MATCHING_OVERLOAD, span, Some(name));
                    DataType::Unknown
                }
            };
        }

        let Some(sym) = self.table.lookup_chain(self.current, name).cloned() else {
            self.report(diagnostics::UNDEFINED_FUNCTION, span, Some(name));
            return DataType::Unknown;
        };

        if sym.kind != SymbolKind::Function {
            self.report(diagnostics::CALLING_NON_FUNCTION, span, Some(name));
            return DataType::Unknown;
        }

        let params = sym.parameters.clone().unwrap_or_default();
        let return_type = sym.ty;

        if params.len() != arg_types.len() {
            self.report(diagnostics::FUNCTION_ARG_COUNT_MISMATCH, span, Some(name));
            return DataType::Unknown;
        }

        let mut had_error = false;
        for ((_, param_ty), &arg_ty) in params.iter().zip(arg_types.iter()) {
            match compat(*param_ty, arg_ty) {
                Compat::Err => {
                    let code = diagnostics::mismatch_code(*param_ty, arg_ty);
                    self.report(code, span, Some(name));
                    had_error = true;
                }
                Compat::Warn => {
                    self.report(diagnostics::TYPE_MISMATCH_DOUBLE_TO_FLOAT, span, Some(name));
                }
                Compat::Ok => {}
            }
        }

        if had_error {
            DataType::Unknown
        } else {
            return_type
        }
    }

    fn type_of_cast(&mut self, ast: &Ast, id: NodeId, span: Span) -> DataType {
        let mut source_node = None;
        let mut target_node = None;
        for child in ast.children(id) {
            if self.node(ast, child).kind.is_type_ref() {
                target_node = Some(child);
            } else {
                source_node = Some(child);
            }
        }

        let Some(target_node) = target_node else {
            return DataType::Unknown;
        };
        let target = self.resolve_type_ref(ast, target_node, Some(diagnostics::INVALID_CAST_TARGET));
        let source = source_node.map(|n| self.type_of(ast, n)).unwrap_or(DataType::Unknown);

        if matches!(target, DataType::Unknown) || matches!(source, DataType::Unknown) {
            return DataType::Unknown;
        }

        match types::cast_allowed(source, target) {
            Compat::Err => {
                self.report(diagnostics::FORBIDDEN_CAST, span, None);
                DataType::Unknown
            }
            Compat::Warn => {
                self.report(diagnostics::CAST_PRECISION_LOSS, span, None);
                target
            }
            Compat::Ok => target,
        }
    }

    fn type_of_member_access(&mut self, ast: &Ast, id: NodeId, field_span: Span, span: Span) -> DataType {
        let Some(object) = ast.children(id).next() else {
            return DataType::Unknown;
        };
        let object_kind = self.node(ast, object).kind.clone();
        let NodeKind::Variable { name_span } = object_kind else {
            self.report(diagnostics::UNDEFINED_VARIABLE, span, None);
            return DataType::Unknown;
        };
        let object_name = self.name(name_span);
        let Some(sym) = self.table.lookup_chain(self.current, object_name).cloned() else {
            self.report(diagnostics::UNDEFINED_VARIABLE, span, Some(object_name));
            return DataType::Unknown;
        };
        let DataType::Struct(struct_id) = sym.ty else {
            self.report(diagnostics::UNDEFINED_VARIABLE, span, Some(object_name));
            return DataType::Unknown;
        };

        let field_name = self.name(field_span);
        let field_ty = self.table.layout(struct_id).field(field_name).map(|f| f.ty);
        match field_ty {
            Some(ty) => ty,
            None => {
                self.report(diagnostics::UNDEFINED_VARIABLE, span, Some(field_name));
                DataType::Unknown
            }
        }
    }
}

fn builtin_return_type(id: u32) -> DataType {
    // print(*) overloads all return Void; exit(Int) returns Void.
    let _ = id;
    DataType::Void
}
