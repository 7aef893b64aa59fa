use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::ast::{
    Binding, Block, Expression, FunctionName, Literal, LiteralKind, Statement, Switch,
};
use crate::pretty::{escape_string, pretty, PrettyCtx, PrettyOptions, PrettyPrintable};

impl PrettyPrintable for Block {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        ctx.write_indent(f)?;
        write_block(self, f, ctx)?;
        writeln!(f)
    }
}

impl PrettyPrintable for Statement {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        write_statement(self, f, ctx)
    }
}

impl PrettyPrintable for Expression {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        write!(f, "{}", format_expression(self, ctx))
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty(self, PrettyOptions::default()))
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty(self, PrettyOptions::default()))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty(self, PrettyOptions::default()))
    }
}

/// Writes `{ ... }` starting at the current cursor; the closing brace is left
/// without a trailing newline so headers like `if c` can share the line.
fn write_block(block: &Block, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    if block.statements.is_empty() {
        return write!(f, "{{ }}");
    }
    writeln!(f, "{{")?;
    ctx.with_indent(|ctx| {
        for stmt in &block.statements {
            write_statement(stmt, f, ctx)?;
        }
        Ok(())
    })?;
    ctx.write_indent(f)?;
    write!(f, "}}")
}

fn write_statement(stmt: &Statement, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    ctx.write_indent(f)?;
    match stmt {
        Statement::ExpressionStatement(stmt) => {
            write!(f, "{}", format_expression(&stmt.expression, ctx))?
        }
        Statement::Assignment(assign) => write!(
            f,
            "{} := {}",
            assign.variable_names.iter().map(|ident| &ident.name).join(", "),
            format_expression(&assign.value, ctx)
        )?,
        Statement::VariableDeclaration(decl) => {
            write!(f, "let {}", format_bindings(&decl.variables))?;
            if let Some(value) = &decl.value {
                write!(f, " := {}", format_expression(value, ctx))?;
            }
        }
        Statement::FunctionDefinition(func) => {
            write!(f, "function {}({})", func.name, format_bindings(&func.parameters))?;
            if !func.return_variables.is_empty() {
                write!(f, " -> {}", format_bindings(&func.return_variables))?;
            }
            write!(f, " ")?;
            write_block(&func.body, f, ctx)?;
        }
        Statement::If(stmt) => {
            write!(f, "if {} ", format_expression(&stmt.condition, ctx))?;
            write_block(&stmt.body, f, ctx)?;
        }
        Statement::Switch(switch) => write_switch(switch, f, ctx)?,
        Statement::ForLoop(stmt) => {
            write!(f, "for ")?;
            write_block(&stmt.pre, f, ctx)?;
            write!(f, " {} ", format_expression(&stmt.condition, ctx))?;
            write_block(&stmt.post, f, ctx)?;
            write!(f, " ")?;
            write_block(&stmt.body, f, ctx)?;
        }
        Statement::Break(_) => write!(f, "break")?,
        Statement::Continue(_) => write!(f, "continue")?,
        Statement::Leave(_) => write!(f, "leave")?,
        Statement::Block(block) => write_block(block, f, ctx)?,
    }
    let span = stmt.span();
    if ctx.options.show_spans && !span.is_null() {
        write!(f, " // {}", span)?;
    }
    writeln!(f)
}

fn write_switch(switch: &Switch, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    write!(f, "switch {}", format_expression(&switch.expression, ctx))?;
    for case in &switch.cases {
        writeln!(f)?;
        ctx.write_indent(f)?;
        match &case.value {
            Some(value) => write!(f, "case {} ", format_literal(value))?,
            None => write!(f, "default ")?,
        }
        write_block(&case.body, f, ctx)?;
    }
    Ok(())
}

fn format_bindings(bindings: &[Binding]) -> String {
    bindings.iter().map(|binding| &binding.name).join(", ")
}

fn format_expression(expr: &Expression, ctx: &PrettyCtx<'_>) -> String {
    match expr {
        Expression::Identifier(ident) => ident.name.to_string(),
        Expression::Literal(literal) => format_literal(literal),
        Expression::FunctionCall(call) => format!(
            "{}({})",
            format_function_name(&call.function_name, ctx),
            call.arguments
                .iter()
                .map(|arg| format_expression(arg, ctx))
                .join(", ")
        ),
    }
}

fn format_function_name(name: &FunctionName, ctx: &PrettyCtx<'_>) -> String {
    match name {
        FunctionName::Builtin(builtin) => ctx
            .dialect
            .and_then(|dialect| dialect.builtin(builtin.handle))
            .map(|fun| fun.name.to_string())
            .unwrap_or_else(|| format!("builtin#{}", builtin.handle.index())),
        FunctionName::Verbatim(verbatim) => verbatim.handle.name(),
        FunctionName::Identifier(ident) => ident.name.to_string(),
    }
}

fn format_literal(literal: &Literal) -> String {
    match literal.kind {
        LiteralKind::String => format!("\"{}\"", escape_string(&literal.value)),
        LiteralKind::Number | LiteralKind::Boolean => literal.value.clone(),
    }
}
