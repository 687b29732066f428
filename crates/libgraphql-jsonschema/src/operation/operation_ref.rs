use crate::ast;
use crate::operation::OperationKind;

/// A borrowed view over one operation definition of an
/// [`ExecutableDocument`](crate::operation::ExecutableDocument).
#[derive(Clone, Copy, Debug)]
pub struct OperationRef<'doc> {
    pub(super) def: &'doc ast::operation::OperationDefinition,
}
impl<'doc> OperationRef<'doc> {
    pub fn directives(&self) -> &'doc [ast::operation::Directive] {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(op) => &op.directives,
            OperationDefinition::Query(op) => &op.directives,
            OperationDefinition::SelectionSet(_) => &[],
            OperationDefinition::Subscription(op) => &op.directives,
        }
    }

    pub fn kind(&self) -> OperationKind {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(_) => OperationKind::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => OperationKind::Query,
            OperationDefinition::Subscription(_) => OperationKind::Subscription,
        }
    }

    pub fn name(&self) -> Option<&'doc str> {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(op) => op.name.as_deref(),
            OperationDefinition::Query(op) => op.name.as_deref(),
            OperationDefinition::SelectionSet(_) => None,
            OperationDefinition::Subscription(op) => op.name.as_deref(),
        }
    }

    pub fn position(&self) -> ast::AstPos {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(op) => op.position,
            OperationDefinition::Query(op) => op.position,
            OperationDefinition::SelectionSet(set) => set.span.0,
            OperationDefinition::Subscription(op) => op.position,
        }
    }

    pub fn selection_set(&self) -> &'doc ast::operation::SelectionSet {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(op) => &op.selection_set,
            OperationDefinition::Query(op) => &op.selection_set,
            OperationDefinition::SelectionSet(set) => set,
            OperationDefinition::Subscription(op) => &op.selection_set,
        }
    }

    pub fn variable_definitions(&self) -> &'doc [ast::operation::VariableDefinition] {
        use ast::operation::OperationDefinition;
        match self.def {
            OperationDefinition::Mutation(op) => &op.variable_definitions,
            OperationDefinition::Query(op) => &op.variable_definitions,
            OperationDefinition::SelectionSet(_) => &[],
            OperationDefinition::Subscription(op) => &op.variable_definitions,
        }
    }
}
