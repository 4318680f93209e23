// Java source printing for template parameters. Result and argument
// expressions come from code that already compiled, so simple class
// names are printed as written and rely on the file's existing
// imports.
use super::records::MockInvocation;
use remock_ast::Expression;

pub fn expression_source(expr: &Expression) -> String {
    match expr {
        Expression::Literal(literal, _) => literal.value_source(),
        Expression::Identifier { name, .. } => name.clone(),
        Expression::MethodCall {
            receiver,
            name,
            args,
            ..
        } => match receiver {
            Some(receiver) => format!(
                "{}.{}({})",
                expression_source(receiver),
                name,
                argument_list(args)
            ),
            None => format!("{}({})", name, argument_list(args)),
        },
        Expression::FieldAccess { receiver, name, .. } => {
            format!("{}.{}", expression_source(receiver), name)
        }
        Expression::New { class, args, .. } => {
            format!("new {}({})", class.simple_name(), argument_list(args))
        }
    }
}

pub fn invocation_source(invocation: &MockInvocation) -> String {
    let args = argument_list(&invocation.args);
    match &invocation.receiver {
        Some(receiver) => format!("{}.{}({})", expression_source(receiver), invocation.name, args),
        None => format!("{}({})", invocation.name, args),
    }
}

pub fn argument_list(args: &[Expression]) -> String {
    args.iter()
        .map(expression_source)
        .collect::<Vec<_>>()
        .join(", ")
}
