use reflector_api::{Fqsen, NodeRef};
use reflector_core::{Argument, Function, Result};
use tree_sitter::{Node, Parser, Tree};

#[allow(dead_code)]
pub fn parse_php(source: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_php::LANGUAGE_PHP.into())
        .expect("Failed to load PHP grammar");
    parser.parse(source, None).expect("Failed to parse PHP source")
}

#[allow(dead_code)]
pub fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

#[allow(dead_code)]
pub fn descendants_of_kind<'t>(node: Node<'t>, kind: &str, out: &mut Vec<Node<'t>>) {
    if node.kind() == kind {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        descendants_of_kind(child, kind, out);
    }
}

#[allow(dead_code)]
fn first_child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Minimal stand-in for the parser collaborator: reflects every function of a single-namespace
/// file, walking each parameter list in order.
#[allow(dead_code)]
pub fn reflect_functions(source: &str, tree: &Tree) -> Result<Vec<Function>> {
    let root = tree.root_node();

    let mut namespaces = Vec::new();
    descendants_of_kind(root, "namespace_name", &mut namespaces);
    let namespace = match namespaces.first() {
        Some(ns) => Fqsen::new(format!("\\{}", text(*ns, source)))?,
        None => Fqsen::root(),
    };

    let mut definitions = Vec::new();
    descendants_of_kind(root, "function_definition", &mut definitions);

    let mut functions = Vec::new();
    for definition in definitions {
        let Some(name) = first_child_of_kind(definition, "name") else {
            continue;
        };
        let fqsen = namespace.child(&format!("{}()", text(name, source)))?;
        let by_reference = source[definition.start_byte()..name.start_byte()].contains('&');

        let node = NodeRef::from(definition);
        let mut builder = Function::builder(node, fqsen)
            .location(node.location())
            .returns_by_reference(by_reference);

        if let Some(parameters) = first_child_of_kind(definition, "formal_parameters") {
            let mut cursor = parameters.walk();
            for parameter in parameters.named_children(&mut cursor) {
                let mut variables = Vec::new();
                descendants_of_kind(parameter, "variable_name", &mut variables);
                let Some(variable) = variables.first() else {
                    continue;
                };
                let mut argument = Argument::new(text(*variable, source));
                if source[parameter.start_byte()..variable.start_byte()].contains('&') {
                    argument = argument.by_reference();
                }
                if parameter.kind() == "variadic_parameter" {
                    argument = argument.variadic();
                }
                builder.add_argument(argument);
            }
        }

        functions.push(builder.build());
    }
    Ok(functions)
}
