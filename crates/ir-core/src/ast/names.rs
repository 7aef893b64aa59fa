use std::collections::HashSet;

use crate::ast::{Block, Expression, FunctionName, Name, Statement};

/// Every name declared or referenced anywhere in `block`, including function
/// names, parameters and return variables.
pub fn collect_names(block: &Block) -> HashSet<Name> {
    let mut collector = NameCollector::default();
    collector.visit_block(block);
    collector.names
}

#[derive(Default)]
struct NameCollector {
    names: HashSet<Name>,
}

impl NameCollector {
    fn visit_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::ExpressionStatement(stmt) => self.visit_expression(&stmt.expression),
            Statement::Assignment(assign) => {
                for ident in &assign.variable_names {
                    self.names.insert(ident.name.clone());
                }
                self.visit_expression(&assign.value);
            }
            Statement::VariableDeclaration(decl) => {
                for var in &decl.variables {
                    self.names.insert(var.name.clone());
                }
                if let Some(value) = &decl.value {
                    self.visit_expression(value);
                }
            }
            Statement::FunctionDefinition(func) => {
                self.names.insert(func.name.clone());
                for binding in func.parameters.iter().chain(&func.return_variables) {
                    self.names.insert(binding.name.clone());
                }
                self.visit_block(&func.body);
            }
            Statement::If(stmt) => {
                self.visit_expression(&stmt.condition);
                self.visit_block(&stmt.body);
            }
            Statement::Switch(switch) => {
                self.visit_expression(&switch.expression);
                for case in &switch.cases {
                    self.visit_block(&case.body);
                }
            }
            Statement::ForLoop(stmt) => {
                self.visit_block(&stmt.pre);
                self.visit_expression(&stmt.condition);
                self.visit_block(&stmt.post);
                self.visit_block(&stmt.body);
            }
            Statement::Block(block) => self.visit_block(block),
            Statement::Break(_) | Statement::Continue(_) | Statement::Leave(_) => {}
        }
    }

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(ident) => {
                self.names.insert(ident.name.clone());
            }
            Expression::Literal(_) => {}
            Expression::FunctionCall(call) => {
                if let FunctionName::Identifier(ident) = &call.function_name {
                    self.names.insert(ident.name.clone());
                }
                for arg in &call.arguments {
                    self.visit_expression(arg);
                }
            }
        }
    }
}
