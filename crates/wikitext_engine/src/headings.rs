/// Heading lines: a run of 1-6 `=` at both ends of a line, counts matching
/// exactly. Mismatched counts, runs longer than six, and empty titles all
/// fall through as literal text for the later stages.
pub fn recognize_headings(text: &str) -> String {
    text.split('\n')
        .map(|line| heading_line(line).unwrap_or_else(|| line.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading_line(line: &str) -> Option<String> {
    let lead = line.bytes().take_while(|&b| b == b'=').count();
    if lead == 0 || lead > 6 {
        return None;
    }
    let rest = line[lead..].trim_end();
    let trail = rest.bytes().rev().take_while(|&b| b == b'=').count();
    if trail != lead {
        return None;
    }
    let title = rest[..rest.len() - trail].trim();
    if title.is_empty() {
        return None;
    }
    Some(format!("<h{lead}>{title}</h{lead}>"))
}
