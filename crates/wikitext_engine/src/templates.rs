use engine_logging::engine_debug;

use crate::scan;

/// Template expansion: `{{name}}` or `{{name|param|param}}`. The vocabulary
/// is fixed (info, warning, note, case-insensitive); an unrecognized name
/// renders as a visible placeholder rather than failing, since templates are
/// user-authored content.
pub fn expand_templates(text: &str) -> String {
    scan::rewrite(text, "{{", |s| {
        let (consumed, name, params) = parse_template(s)?;
        Some((consumed, render_template(name.trim(), &params)))
    })
}

fn parse_template(s: &str) -> Option<(usize, &str, Vec<&str>)> {
    let body = &s[2..];
    let name_end = body.find(['|', '}'])?;
    if name_end == 0 {
        return None;
    }
    let name = &body[..name_end];
    if body[name_end..].starts_with('|') {
        let after = &body[name_end + 1..];
        let close = after.find('}')?;
        if !after[close..].starts_with("}}") {
            return None;
        }
        let params = after[..close].split('|').collect();
        Some((2 + name_end + 1 + close + 2, name, params))
    } else {
        if !body[name_end..].starts_with("}}") {
            return None;
        }
        Some((2 + name_end + 2, name, Vec::new()))
    }
}

fn render_template(name: &str, params: &[&str]) -> String {
    let body = params.join(" ");
    match name.to_lowercase().as_str() {
        "info" => callout_box("info-box", "ℹ️", &body),
        "warning" => callout_box("warning-box", "⚠️", &body),
        "note" => callout_box("note-box", "📝", &body),
        _ => {
            engine_debug!("unknown template name: {name}");
            format!("<div class=\"wiki-template\">Template: {name}</div>")
        }
    }
}

fn callout_box(class: &str, icon: &str, body: &str) -> String {
    format!(
        "<div class=\"wiki-template {class}\"><div class=\"template-icon\">{icon}</div><div class=\"template-content\">{body}</div></div>"
    )
}
