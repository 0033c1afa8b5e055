//! # Go Fragment AST
//!
//! Syntax tree for a single Go expression, declaration or statement.
//!
//! ## Design Goals
//!
//! - **Target**: the subset of the Go specification (https://go.dev/ref/spec)
//!   that a free-standing fragment can contain
//! - **Memory Efficiency**: arena-allocated nodes, no per-node allocations
//! - **Type Safety**: typed ids (`ExprId`, `StmtId`, ...) and typed list
//!   references (`ListRef<T>`) instead of raw vectors
//!
//! ## Architecture
//!
//! - **Nodes**: allocated in typed arenas (`SpannedArena<T>`)
//! - **Lists**: centralized buffers in `ExtraData`, referenced by `ListRef<T>`
//! - **Spans**: kept in side tables next to each arena
//! - **Symbols**: identifiers are interned once per fragment
//!
//! ## Important Notes
//!
//! - Types are expressions, as in Go's own `go/ast`: `*T` is a single
//!   `Expr::Star` node whether it denotes a pointer type or a dereference.
//! - Source parentheses are kept as `Expr::Paren` nodes.
//! - Literal text is not copied; it is recovered from the source through the
//!   literal's span (see `Fragment::text`).

use core::marker::PhantomData;
use core::ops::Index;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hasher, RandomState};

// =============================================================================
// Core Foundation Types
// =============================================================================

/// Byte range in the fragment source.
///
/// Positions are stored as `u32`; fragments are far below 4GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Creates a span from usize positions, clamping instead of panicking.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let s = if start > u32::MAX as usize {
            u32::MAX
        } else {
            start as u32
        };
        let e = if end > u32::MAX as usize {
            u32::MAX
        } else {
            end as u32
        };
        Self { start: s, end: e }
    }

    #[inline]
    pub const fn empty_at(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub const fn to(self, other: Span) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn range(&self) -> core::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Type-safe identifier for arena-allocated nodes.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Id<T> {
    raw: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Id<T> {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn to_usize(&self) -> usize {
        self.raw as usize
    }
}

/// Typed reference into a centralized list buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct ListRef<T> {
    start: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for ListRef<T> {}

impl<T> Clone for ListRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for ListRef<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> ListRef<T> {
    pub const EMPTY: Self = Self {
        start: 0,
        len: 0,
        _marker: PhantomData,
    };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Self {
            start,
            len,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }
}

// =============================================================================
// Symbol Interning
// =============================================================================

/// Interned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifier occurrence (interned symbol + source position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentName {
    pub sym: Symbol,
    pub pos: Span,
}

/// Identity hasher for the pre-computed u64 bucket keys.
#[derive(Default)]
struct U64IdentityHasher(u64);

impl Hasher for U64IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        // Only reached if a non-u64 key sneaks in; fold it rather than panic.
        for &b in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(b);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

type U64IdentityBuild = BuildHasherDefault<U64IdentityHasher>;

/// String interner: each distinct identifier is stored once.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    buckets: HashMap<u64, SmallVec<[Symbol; 1]>, U64IdentityBuild>,
    state: RandomState,
}

impl Interner {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `s`, returning the existing symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        let h = self.state.hash_one(s);
        let entry = self.buckets.entry(h).or_default();

        for &sym in entry.iter() {
            if self.strings[sym.0 as usize].as_ref() == s {
                return sym;
            }
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.into());
        entry.push(sym);
        sym
    }

    /// Resolves a symbol back to its text. Unknown symbols resolve to "".
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        debug_assert!((sym.0 as usize) < self.strings.len());
        self.strings.get(sym.0 as usize).map_or("", |s| s.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// =============================================================================
// Arena Allocation
// =============================================================================

/// Arena for nodes with associated spans (parallel vectors).
#[derive(Debug)]
pub struct SpannedArena<T> {
    data: Vec<T>,
    spans: Vec<Span>,
}

impl<T> Default for SpannedArena<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            spans: Vec::new(),
        }
    }
}

impl<T> SpannedArena<T> {
    #[inline]
    pub fn alloc(&mut self, node: T, span: Span) -> Id<T> {
        let id = Id::from_raw(self.data.len() as u32);
        self.data.push(node);
        self.spans.push(span);
        id
    }

    #[inline]
    pub fn get(&self, id: Id<T>) -> &T {
        &self.data[id.to_usize()]
    }

    #[inline]
    pub fn span(&self, id: Id<T>) -> Span {
        self.spans[id.to_usize()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Index<Id<T>> for SpannedArena<T> {
    type Output = T;
    fn index(&self, id: Id<T>) -> &T {
        self.get(id)
    }
}

// =============================================================================
// Node IDs and List Storage
// =============================================================================

pub type ExprId = Id<Expr>;
pub type StmtId = Id<Stmt>;
pub type DeclId = Id<Decl>;
pub type FieldId = Id<Field>;

/// Centralized buffers that `ListRef<T>` points into.
#[derive(Debug, Default)]
pub struct ExtraData {
    pub ident_names: Vec<IdentName>,
    pub exprs: Vec<ExprId>,
    pub stmts: Vec<StmtId>,
    pub fields: Vec<FieldId>,
    pub specs: Vec<Spec>,
}

/// Central arena holding all nodes and list buffers of one fragment.
#[derive(Debug, Default)]
pub struct AstArena {
    pub exprs: SpannedArena<Expr>,
    pub stmts: SpannedArena<Stmt>,
    pub decls: SpannedArena<Decl>,
    pub fields: SpannedArena<Field>,
    pub extras: ExtraData,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn push_list<T>(buf: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> ListRef<T> {
        let start = buf.len();
        buf.extend(items);
        let len = buf.len() - start;
        ListRef::new(start as u32, len as u32)
    }

    #[inline]
    fn slice<T>(buf: &[T], r: ListRef<T>) -> &[T] {
        &buf[r.start() as usize..r.end() as usize]
    }

    // List Builders

    pub fn list_ident_names(
        &mut self,
        i: impl IntoIterator<Item = IdentName>,
    ) -> ListRef<IdentName> {
        Self::push_list(&mut self.extras.ident_names, i)
    }

    pub fn list_exprs(&mut self, i: impl IntoIterator<Item = ExprId>) -> ListRef<ExprId> {
        Self::push_list(&mut self.extras.exprs, i)
    }

    pub fn list_stmts(&mut self, i: impl IntoIterator<Item = StmtId>) -> ListRef<StmtId> {
        Self::push_list(&mut self.extras.stmts, i)
    }

    pub fn list_fields(&mut self, i: impl IntoIterator<Item = FieldId>) -> ListRef<FieldId> {
        Self::push_list(&mut self.extras.fields, i)
    }

    pub fn list_specs(&mut self, i: impl IntoIterator<Item = Spec>) -> ListRef<Spec> {
        Self::push_list(&mut self.extras.specs, i)
    }

    // List Accessors

    pub fn ident_names(&self, r: ListRef<IdentName>) -> &[IdentName] {
        Self::slice(&self.extras.ident_names, r)
    }

    pub fn exprs_list(&self, r: ListRef<ExprId>) -> &[ExprId] {
        Self::slice(&self.extras.exprs, r)
    }

    pub fn stmts_list(&self, r: ListRef<StmtId>) -> &[StmtId] {
        Self::slice(&self.extras.stmts, r)
    }

    pub fn fields_list(&self, r: ListRef<FieldId>) -> &[FieldId] {
        Self::slice(&self.extras.fields, r)
    }

    pub fn specs_list(&self, r: ListRef<Spec>) -> &[Spec] {
        Self::slice(&self.extras.specs, r)
    }

    /// Number of entries a field list declares; `a, b int` counts twice.
    pub fn num_fields(&self, r: ListRef<FieldId>) -> usize {
        self.fields_list(r)
            .iter()
            .map(|&f| self.fields[f].names.len().max(1))
            .sum()
    }
}

// =============================================================================
// Parsed Fragment (Root)
// =============================================================================

/// A parsed fragment: the source it came from, its nodes, and its root.
///
/// `R` is `ExprId`, `DeclId` or `StmtId` depending on the entry point used.
#[derive(Debug)]
pub struct Fragment<'src, R> {
    pub src: &'src str,
    pub arena: AstArena,
    pub interner: Interner,
    pub root: R,
}

impl<'src, R: Copy> Fragment<'src, R> {
    /// Text of an interned identifier.
    #[inline]
    pub fn name(&self, ident: IdentName) -> &str {
        self.interner.resolve(ident.sym)
    }

    /// Verbatim source text under `span`.
    #[inline]
    pub fn text(&self, span: Span) -> &'src str {
        self.src.get(span.range()).unwrap_or("")
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.arena.exprs[id]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.arena.stmts[id]
    }

    #[inline]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.arena.decls[id]
    }

    #[inline]
    pub fn field(&self, id: FieldId) -> &Field {
        &self.arena.fields[id]
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// Declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
    Bad(Span),
}

/// Grouped declaration (import, const, type, var).
///
/// ```text
/// Declaration = ConstDecl | TypeDecl | VarDecl
/// ConstDecl   = "const" ( ConstSpec | "(" { ConstSpec ";" } ")" )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenDecl {
    pub kw_pos: Span,
    pub kind: GenDeclKind,
    /// Opening parenthesis for grouped declarations
    pub l_paren: Option<Span>,
    pub specs: ListRef<Spec>,
    pub r_paren: Option<Span>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

impl GenDeclKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}

/// Specification within a grouped declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

impl Spec {
    /// Number of identifiers the specification declares.
    pub fn name_count(&self) -> usize {
        match self {
            Spec::Value(v) => v.names.len(),
            Spec::Type(_) => 1,
            Spec::Import(_) => 0,
        }
    }
}

/// `ImportSpec = [ "." | PackageName ] ImportPath`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<ImportName>,
    pub path: BasicLit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportName {
    /// `import . "pkg"`
    Dot(Span),
    /// `import _ "pkg"`, imported for side effects only
    Blank(Span),
    /// `import name "pkg"`
    Name(IdentName),
}

/// `VarSpec = IdentifierList ( Type [ "=" ExpressionList ] | "=" ExpressionList )`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: ListRef<IdentName>,
    pub typ: Option<ExprId>,
    pub values: ListRef<ExprId>,
}

/// `TypeSpec = AliasDecl | TypeDef`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: IdentName,
    /// Position of '=' for type aliases
    pub assign_pos: Option<Span>,
    pub typ: ExprId,
}

/// ```text
/// FunctionDecl = "func" FunctionName Signature [ FunctionBody ]
/// MethodDecl   = "func" Receiver MethodName Signature [ FunctionBody ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuncDecl {
    pub func_pos: Span,
    /// Receiver parameter list (methods only)
    pub recv: Option<ListRef<FieldId>>,
    pub name: IdentName,
    /// Always an `Expr::FuncType`
    pub typ: ExprId,
    pub body: Option<Block>,
}

// =============================================================================
// Fields
// =============================================================================

/// Field in a parameter list, result list, struct, or interface.
///
/// Interface methods are fields named after the method whose type is an
/// `Expr::FuncType`; embedded elements have no names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub names: ListRef<IdentName>,
    pub typ: ExprId,
    /// Struct tag (struct fields only)
    pub tag: Option<BasicLit>,
}

// =============================================================================
// Statements
// =============================================================================

/// Block of statements: `"{" StatementList "}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub l_brace: Span,
    pub stmts: ListRef<StmtId>,
    pub r_brace: Span,
}

/// Statement node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt {
    /// Explicit `;` or an implied empty statement
    Empty(Span),
    Expr(ExprId),
    Decl(DeclId),

    /// `a, b = x, y`, `x := y`, `x += y`
    Assign {
        lhs: ListRef<ExprId>,
        op: AssignOp,
        op_pos: Span,
        rhs: ListRef<ExprId>,
    },

    /// `ch <- v`
    Send {
        chan: ExprId,
        op_pos: Span,
        value: ExprId,
    },

    /// `x++` / `x--`
    IncDec {
        expr: ExprId,
        op: IncDecOp,
        op_pos: Span,
    },

    Labeled {
        label: IdentName,
        stmt: StmtId,
    },

    Go {
        go_pos: Span,
        call: ExprId,
    },

    Defer {
        defer_pos: Span,
        call: ExprId,
    },

    Return {
        return_pos: Span,
        results: ListRef<ExprId>,
    },

    /// `break`, `continue`, `goto`, `fallthrough`
    Branch {
        kind: BranchKind,
        label: Option<IdentName>,
    },

    Block(Block),

    If {
        init: Option<StmtId>,
        cond: ExprId,
        then_block: Block,
        /// Either another `If` or a `Block`
        else_stmt: Option<StmtId>,
    },

    /// Infinite, condition-only and three-clause loops
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        post: Option<StmtId>,
        body: Block,
    },

    /// `for k, v := range x { ... }`
    Range {
        key: Option<ExprId>,
        value: Option<ExprId>,
        /// `Define` or `Assign`; `None` for `for range x`
        op: Option<AssignOp>,
        expr: ExprId,
        body: Block,
    },

    /// Expression switch; the body holds `CaseClause` statements
    Switch {
        init: Option<StmtId>,
        tag: Option<ExprId>,
        body: Block,
    },

    /// Type switch; `assign` is `x.(type)`, optionally bound with `:=`
    TypeSwitch {
        init: Option<StmtId>,
        assign: StmtId,
        body: Block,
    },

    /// The body holds `CommClause` statements
    Select {
        body: Block,
    },

    /// `case a, b:` or `default:` (empty list)
    CaseClause {
        list: ListRef<ExprId>,
        body: ListRef<StmtId>,
    },

    /// `case <-ch:`, `case ch <- v:` or `default:` (no comm)
    CommClause {
        comm: Option<StmtId>,
        body: ListRef<StmtId>,
    },

    Bad(Span),
}

impl Stmt {
    /// Name of the statement kind, in Go's `go/ast` vocabulary.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Empty(_) => "EmptyStmt",
            Stmt::Expr(_) => "ExprStmt",
            Stmt::Decl(_) => "DeclStmt",
            Stmt::Assign { .. } => "AssignStmt",
            Stmt::Send { .. } => "SendStmt",
            Stmt::IncDec { .. } => "IncDecStmt",
            Stmt::Labeled { .. } => "LabeledStmt",
            Stmt::Go { .. } => "GoStmt",
            Stmt::Defer { .. } => "DeferStmt",
            Stmt::Return { .. } => "ReturnStmt",
            Stmt::Branch { .. } => "BranchStmt",
            Stmt::Block(_) => "BlockStmt",
            Stmt::If { .. } => "IfStmt",
            Stmt::For { .. } => "ForStmt",
            Stmt::Range { .. } => "RangeStmt",
            Stmt::Switch { .. } => "SwitchStmt",
            Stmt::TypeSwitch { .. } => "TypeSwitchStmt",
            Stmt::Select { .. } => "SelectStmt",
            Stmt::CaseClause { .. } => "CaseClause",
            Stmt::CommClause { .. } => "CommClause",
            Stmt::Bad(_) => "BadStmt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

// =============================================================================
// Expressions
// =============================================================================

/// Expression node (types included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr {
    Ident(IdentName),

    /// Basic literal (int, float, imaginary, rune, string)
    BasicLit(BasicLit),

    /// `func(x int) int { return x }`; `typ` is an `Expr::FuncType`
    FuncLit {
        typ: ExprId,
        body: Block,
    },

    /// `T{...}`; `typ` is `None` for elided types inside another literal
    CompositeLit {
        typ: Option<ExprId>,
        l_brace: Span,
        elts: ListRef<ExprId>,
        r_brace: Span,
    },

    Paren {
        l_paren: Span,
        expr: ExprId,
        r_paren: Span,
    },

    /// `x.y`
    Selector {
        expr: ExprId,
        sel: IdentName,
    },

    /// `a[i]`
    Index {
        expr: ExprId,
        index: ExprId,
    },

    /// `F[A, B]` (generic instantiation with several arguments)
    IndexList {
        expr: ExprId,
        indices: ListRef<ExprId>,
    },

    /// `a[lo:hi]` or `a[lo:hi:max]`
    Slice {
        expr: ExprId,
        lo: Option<ExprId>,
        hi: Option<ExprId>,
        max: Option<ExprId>,
        slice3: bool,
    },

    /// `x.(T)`; `typ` is `None` for the type switch guard `x.(type)`
    TypeAssert {
        expr: ExprId,
        typ: Option<ExprId>,
    },

    /// `f(args)` or `f(args...)`
    Call {
        fun: ExprId,
        args: ListRef<ExprId>,
        ellipsis: Option<Span>,
    },

    /// `*x`: pointer type or dereference
    Star {
        star_pos: Span,
        expr: ExprId,
    },

    Unary {
        op: UnaryOp,
        op_pos: Span,
        expr: ExprId,
    },

    Binary {
        left: ExprId,
        op: BinaryOp,
        op_pos: Span,
        right: ExprId,
    },

    /// `key: value` inside a composite literal
    KeyValue {
        key: ExprId,
        colon: Span,
        value: ExprId,
    },

    /// `[N]T`, `[...]T` (`len` is an `Ellipsis`) or `[]T` (`len` is `None`)
    ArrayType {
        len: Option<ExprId>,
        elem: ExprId,
    },

    StructType {
        fields: ListRef<FieldId>,
    },

    FuncType {
        func_pos: Option<Span>,
        params: ListRef<FieldId>,
        results: ListRef<FieldId>,
    },

    InterfaceType {
        methods: ListRef<FieldId>,
    },

    MapType {
        key: ExprId,
        value: ExprId,
    },

    ChanType {
        dir: ChanDir,
        elem: ExprId,
    },

    /// `...T` in a parameter list, or `...` as an array length
    Ellipsis {
        pos: Span,
        elem: Option<ExprId>,
    },

    /// Error placeholder
    Bad(Span),
}

/// Basic literal; its text is the source under `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicLit {
    pub kind: BasicLitKind,
    pub raw: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BasicLitKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

impl ChanDir {
    /// Keyword spelling including the trailing blank.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChanDir::Both => "chan ",
            ChanDir::Send => "chan<- ",
            ChanDir::Recv => "<-chan ",
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Add,   // +
    Sub,   // -
    Not,   // !
    Xor,   // ^
    Addr,  // &
    Recv,  // <-
    Tilde, // ~
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Add => "+",
            UnaryOp::Sub => "-",
            UnaryOp::Not => "!",
            UnaryOp::Xor => "^",
            UnaryOp::Addr => "&",
            UnaryOp::Recv => "<-",
            UnaryOp::Tilde => "~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,    // +
    Sub,    // -
    Mul,    // *
    Div,    // /
    Mod,    // %
    And,    // &
    Or,     // |
    Xor,    // ^
    Shl,    // <<
    Shr,    // >>
    AndNot, // &^
    LAnd,   // &&
    LOr,    // ||
    Eq,     // ==
    Ne,     // !=
    Lt,     // <
    Le,     // <=
    Gt,     // >
    Ge,     // >=
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::AndNot => "&^",
            BinaryOp::LAnd => "&&",
            BinaryOp::LOr => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    /// Go operator precedence, 1 (`||`) through 5 (`*`).
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::LOr => 1,
            BinaryOp::LAnd => 2,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => 3,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Or | BinaryOp::Xor => 4,
            BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Mod
            | BinaryOp::Shl
            | BinaryOp::Shr
            | BinaryOp::And
            | BinaryOp::AndNot => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Define,       // :=
    Assign,       // =
    AddAssign,    // +=
    SubAssign,    // -=
    MulAssign,    // *=
    DivAssign,    // /=
    ModAssign,    // %=
    AndAssign,    // &=
    OrAssign,     // |=
    XorAssign,    // ^=
    ShlAssign,    // <<=
    ShrAssign,    // >>=
    AndNotAssign, // &^=
}

impl AssignOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssignOp::Define => ":=",
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
            AssignOp::AndAssign => "&=",
            AssignOp::OrAssign => "|=",
            AssignOp::XorAssign => "^=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
            AssignOp::AndNotAssign => "&^=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc, // ++
    Dec, // --
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interner_dedups() {
        let mut i = Interner::new();
        let a = i.intern("x");
        let b = i.intern("y");
        let c = i.intern("x");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(i.resolve(b), "y");
        assert_eq!(i.len(), 2);
    }

    #[test]
    fn lists_are_contiguous_slices() {
        let mut arena = AstArena::new();
        let x = arena.exprs.alloc(Expr::Bad(Span::new(0, 1)), Span::new(0, 1));
        let y = arena.exprs.alloc(Expr::Bad(Span::new(2, 3)), Span::new(2, 3));
        let first = arena.list_exprs([x]);
        let both = arena.list_exprs([x, y]);
        assert_eq!(arena.exprs_list(first), &[x]);
        assert_eq!(arena.exprs_list(both), &[x, y]);
        assert!(arena.exprs_list(ListRef::EMPTY).is_empty());
    }

    #[test]
    fn span_to_covers_both() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 2);
        assert_eq!(a.to(b), Span::new(1, 6));
    }
}
