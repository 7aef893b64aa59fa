use crate::ast::{Expression, Identifier, Literal, Name};
use crate::span::Span;

common_struct! {
    /// A name introduced by a declaration, parameter list or return list.
    pub struct Binding {
        #[serde(default)]
        pub span: Span,
        pub name: Name,
    }
}
impl Binding {
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

common_struct! {
    pub struct Block {
        #[serde(default)]
        pub span: Span,
        pub statements: Vec<Statement>,
    }
}
impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            span: Span::null(),
            statements,
        }
    }
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

common_struct! {
    pub struct ExpressionStatement {
        #[serde(default)]
        pub span: Span,
        pub expression: Expression,
    }
}
impl ExpressionStatement {
    pub fn new(expression: impl Into<Expression>) -> Self {
        let expression = expression.into();
        Self {
            span: expression.span(),
            expression,
        }
    }
}

common_struct! {
    pub struct Assignment {
        #[serde(default)]
        pub span: Span,
        pub variable_names: Vec<Identifier>,
        pub value: Expression,
    }
}
impl Assignment {
    pub fn new(variable_names: Vec<Identifier>, value: impl Into<Expression>) -> Self {
        Self {
            span: Span::null(),
            variable_names,
            value: value.into(),
        }
    }
}

common_struct! {
    pub struct VariableDeclaration {
        #[serde(default)]
        pub span: Span,
        pub variables: Vec<Binding>,
        pub value: Option<Expression>,
    }
}
impl VariableDeclaration {
    pub fn new(variables: Vec<Binding>, value: Option<Expression>) -> Self {
        Self {
            span: Span::null(),
            variables,
            value,
        }
    }
    /// `let name := value`, with `span` on both the declaration and the binding.
    pub fn single(span: Span, name: impl Into<Name>, value: impl Into<Expression>) -> Self {
        Self {
            span,
            variables: vec![Binding::with_span(span, name)],
            value: Some(value.into()),
        }
    }
}

common_struct! {
    pub struct FunctionDefinition {
        #[serde(default)]
        pub span: Span,
        pub name: Name,
        pub parameters: Vec<Binding>,
        pub return_variables: Vec<Binding>,
        pub body: Block,
    }
}
impl FunctionDefinition {
    pub fn new(
        name: impl Into<Name>,
        parameters: Vec<Binding>,
        return_variables: Vec<Binding>,
        body: Block,
    ) -> Self {
        Self {
            span: Span::null(),
            name: name.into(),
            parameters,
            return_variables,
            body,
        }
    }
}

common_struct! {
    pub struct If {
        #[serde(default)]
        pub span: Span,
        pub condition: Expression,
        pub body: Block,
    }
}
impl If {
    pub fn new(condition: impl Into<Expression>, body: Block) -> Self {
        Self {
            span: Span::null(),
            condition: condition.into(),
            body,
        }
    }
}

common_struct! {
    pub struct Case {
        #[serde(default)]
        pub span: Span,
        /// `None` for the `default` case.
        pub value: Option<Literal>,
        pub body: Block,
    }
}
impl Case {
    pub fn new(value: Literal, body: Block) -> Self {
        Self {
            span: Span::null(),
            value: Some(value),
            body,
        }
    }
    pub fn default_case(body: Block) -> Self {
        Self {
            span: Span::null(),
            value: None,
            body,
        }
    }
}

common_struct! {
    pub struct Switch {
        #[serde(default)]
        pub span: Span,
        pub expression: Expression,
        pub cases: Vec<Case>,
    }
}
impl Switch {
    pub fn new(expression: impl Into<Expression>, cases: Vec<Case>) -> Self {
        Self {
            span: Span::null(),
            expression: expression.into(),
            cases,
        }
    }
}

common_struct! {
    pub struct ForLoop {
        #[serde(default)]
        pub span: Span,
        pub pre: Block,
        pub condition: Expression,
        pub post: Block,
        pub body: Block,
    }
}
impl ForLoop {
    pub fn new(pre: Block, condition: impl Into<Expression>, post: Block, body: Block) -> Self {
        Self {
            span: Span::null(),
            pre,
            condition: condition.into(),
            post,
            body,
        }
    }
}

common_struct! {
    pub struct Break {
        #[serde(default)]
        pub span: Span,
    }
}

common_struct! {
    pub struct Continue {
        #[serde(default)]
        pub span: Span,
    }
}

common_struct! {
    pub struct Leave {
        #[serde(default)]
        pub span: Span,
    }
}

common_enum! {
    #[derive(derive_more::From)]
    pub enum Statement {
        ExpressionStatement(ExpressionStatement),
        Assignment(Assignment),
        VariableDeclaration(VariableDeclaration),
        FunctionDefinition(FunctionDefinition),
        If(If),
        Switch(Switch),
        ForLoop(ForLoop),
        Break(Break),
        Continue(Continue),
        Leave(Leave),
        Block(Block),
    }
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Self::ExpressionStatement(stmt) => stmt.span,
            Self::Assignment(stmt) => stmt.span,
            Self::VariableDeclaration(stmt) => stmt.span,
            Self::FunctionDefinition(stmt) => stmt.span,
            Self::If(stmt) => stmt.span,
            Self::Switch(stmt) => stmt.span,
            Self::ForLoop(stmt) => stmt.span,
            Self::Break(stmt) => stmt.span,
            Self::Continue(stmt) => stmt.span,
            Self::Leave(stmt) => stmt.span,
            Self::Block(block) => block.span,
        }
    }
    pub fn expr(expression: impl Into<Expression>) -> Self {
        Self::ExpressionStatement(ExpressionStatement::new(expression))
    }
    pub fn declare(name: impl Into<Name>, value: impl Into<Expression>) -> Self {
        Self::VariableDeclaration(VariableDeclaration::single(Span::null(), name, value))
    }
}
