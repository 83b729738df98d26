//! Rendering values back to textual form.

use crate::value::Value;
use larch_ir::SymbolInterner;

/// Render a value to its canonical textual form.
///
/// Lists render as `(item ...)` with single-space separators; the empty list
/// is `()`. Procedures have no textual form in the language, so they render
/// as stable placeholders (`#<primitive NAME>`, `#<closure>`) rather than
/// failing.
pub fn render(value: &Value, interner: &SymbolInterner) -> String {
    match value {
        Value::Symbol(name) => interner.lookup(*name).to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_owned(),
        Value::Bool(false) => "false".to_owned(),
        Value::Unspecified => "#<unspecified>".to_owned(),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(|item| render(item, interner)).collect();
            format!("({})", rendered.join(" "))
        }
        Value::Primitive(prim) => format!("#<primitive {}>", prim.name),
        Value::Closure(_) => "#<closure>".to_owned(),
    }
}
