use engine_logging::engine_warn;

/// Table blocks: `{|` opens, `|}` closes, `|-` separates rows, `!` lines are
/// header rows split on `!!`, `|` lines are data rows split on `||`. Cell
/// text is trimmed. A block left open at end-of-input still emits whatever
/// rows it accumulated.
pub fn build_tables(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_table = false;
    let mut rows: Vec<String> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with("{|") {
            in_table = true;
            rows.clear();
        } else if trimmed == "|}" {
            if in_table {
                flush_table(&mut out, &mut rows);
            }
            in_table = false;
            rows.clear();
        } else if in_table && trimmed.starts_with("|-") {
            // row separator carries no content
        } else if in_table && trimmed.starts_with('!') {
            rows.push(table_row(&trimmed[1..], "th", "!!"));
        } else if in_table && trimmed.starts_with('|') {
            rows.push(table_row(&trimmed[1..], "td", "||"));
        } else if !in_table {
            out.push(line.to_string());
        }
    }

    if in_table && !rows.is_empty() {
        engine_warn!("table block not terminated; emitting {} buffered rows", rows.len());
    }
    if in_table {
        flush_table(&mut out, &mut rows);
    }

    out.join("\n")
}

fn flush_table(out: &mut Vec<String>, rows: &mut Vec<String>) {
    if rows.is_empty() {
        return;
    }
    out.push("<table class=\"wiki-table\">".to_string());
    out.push("<tbody>".to_string());
    out.append(rows);
    out.push("</tbody>".to_string());
    out.push("</table>".to_string());
}

fn table_row(rest: &str, cell_tag: &str, separator: &str) -> String {
    let cells: String = rest
        .split(separator)
        .map(|cell| format!("<{cell_tag}>{}</{cell_tag}>", cell.trim()))
        .collect();
    format!("<tr>{cells}</tr>")
}
