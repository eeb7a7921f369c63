use std::collections::BTreeMap;

/// Fills `{name}` placeholders from `variables` and appends every variable as
/// an `INPUTS:` block, in key order.
pub fn render_prompt(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut body = template.trim().to_owned();
    for (name, value) in variables {
        body = body.replace(&format!("{{{name}}}"), value);
    }

    if variables.is_empty() {
        return body;
    }

    let inputs = variables
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{body}\n\n---\nINPUTS:\n{inputs}")
}
