/*
 * Parameter Extraction
 *
 * Flattens signature field groups into individual parameters:
 * - `a, b int` (one group, two names) → two parameters sharing the type
 * - `int` (group without names)       → one unnamed parameter
 * - type text is kept verbatim (trimmed), never normalized
 */

use crate::features::doc_model::domain::Parameter;
use crate::features::parsing::domain::FieldGroup;

/// Flatten field groups into parameters, preserving declaration order
pub fn extract_parameters(groups: &[FieldGroup]) -> Vec<Parameter> {
    let mut params = Vec::with_capacity(groups.len());

    for group in groups {
        let type_expr = group.type_expr.trim();
        if group.names.is_empty() {
            params.push(Parameter::new("", type_expr));
            continue;
        }
        params.extend(
            group
                .names
                .iter()
                .map(|name| Parameter::new(name.trim(), type_expr)),
        );
    }

    params
}

/// Receiver parameter of a method
///
/// A receiver group holds at most one name; an unnamed receiver (`func (T) M()`)
/// yields a parameter with an empty name. Returns `None` when the group has no
/// type.
pub fn extract_receiver(group: &FieldGroup) -> Option<Parameter> {
    let type_expr = group.type_expr.trim();
    if type_expr.is_empty() {
        return None;
    }
    let name = group.names.first().map(|n| n.trim()).unwrap_or("");
    Some(Parameter::new(name, type_expr))
}
