use crate::ast::Name;
use crate::dialect::{BuiltinHandle, VerbatimHandle};
use crate::span::Span;

common_struct! {
    pub struct Identifier {
        #[serde(default)]
        pub span: Span,
        pub name: Name,
    }
}
impl Identifier {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            span: Span::null(),
            name: name.into(),
        }
    }
    pub fn with_span(span: Span, name: impl Into<Name>) -> Self {
        Self {
            span,
            name: name.into(),
        }
    }
}

common_enum! {
    #[derive(Copy)]
    pub enum LiteralKind {
        Number,
        Boolean,
        String,
    }
}

common_struct! {
    /// A compile-time constant. `value` is the source text for numbers and
    /// booleans and the unescaped contents for strings.
    pub struct Literal {
        #[serde(default)]
        pub span: Span,
        pub kind: LiteralKind,
        pub value: String,
    }
}
impl Literal {
    pub fn number(value: impl ToString) -> Self {
        Self {
            span: Span::null(),
            kind: LiteralKind::Number,
            value: value.to_string(),
        }
    }
    pub fn boolean(value: bool) -> Self {
        Self {
            span: Span::null(),
            kind: LiteralKind::Boolean,
            value: value.to_string(),
        }
    }
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            span: Span::null(),
            kind: LiteralKind::String,
            value: value.into(),
        }
    }
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

common_struct! {
    pub struct BuiltinName {
        #[serde(default)]
        pub span: Span,
        pub handle: BuiltinHandle,
    }
}

common_struct! {
    pub struct VerbatimName {
        #[serde(default)]
        pub span: Span,
        pub handle: VerbatimHandle,
    }
}

common_enum! {
    /// Callee of a [`FunctionCall`]. Builtin and verbatim callees are resolved
    /// through the active [`Dialect`](crate::dialect::Dialect).
    pub enum FunctionName {
        Builtin(BuiltinName),
        Verbatim(VerbatimName),
        Identifier(Identifier),
    }
}
impl FunctionName {
    pub fn builtin(handle: BuiltinHandle) -> Self {
        Self::Builtin(BuiltinName {
            span: Span::null(),
            handle,
        })
    }
    pub fn verbatim(handle: VerbatimHandle) -> Self {
        Self::Verbatim(VerbatimName {
            span: Span::null(),
            handle,
        })
    }
    pub fn user(name: impl Into<Name>) -> Self {
        Self::Identifier(Identifier::new(name))
    }
    pub fn span(&self) -> Span {
        match self {
            Self::Builtin(builtin) => builtin.span,
            Self::Verbatim(verbatim) => verbatim.span,
            Self::Identifier(ident) => ident.span,
        }
    }
}

common_struct! {
    pub struct FunctionCall {
        #[serde(default)]
        pub span: Span,
        pub function_name: FunctionName,
        pub arguments: Vec<Expression>,
    }
}
impl FunctionCall {
    pub fn new(function_name: FunctionName, arguments: Vec<Expression>) -> Self {
        Self {
            span: Span::null(),
            function_name,
            arguments,
        }
    }
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

common_enum! {
    #[derive(derive_more::From)]
    pub enum Expression {
        Identifier(Identifier),
        Literal(Literal),
        FunctionCall(FunctionCall),
    }
}

impl Expression {
    pub fn ident(name: impl Into<Name>) -> Expression {
        Identifier::new(name).into()
    }
    pub fn call(function_name: FunctionName, arguments: Vec<Expression>) -> Expression {
        FunctionCall::new(function_name, arguments).into()
    }
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) => ident.span,
            Self::Literal(literal) => literal.span,
            Self::FunctionCall(call) => call.span,
        }
    }
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
    pub fn as_call(&self) -> Option<&FunctionCall> {
        match self {
            Self::FunctionCall(call) => Some(call),
            _ => None,
        }
    }
}
