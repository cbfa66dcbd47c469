#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Line-by-line list state machine. A run of N `*` or `#` markers opens or
/// continues a list nested N deep; level transitions open or close exactly
/// the difference, so skipped levels nest literally. A marker-kind change or
/// a non-list line closes everything open, as does end-of-input.
pub fn build_lists(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut open: Option<(ListKind, usize)> = None;

    for line in text.split('\n') {
        match list_item(line.trim()) {
            Some((kind, level, content)) => {
                adjust_nesting(&mut out, &mut open, kind, level);
                out.push(format!("<li>{content}</li>"));
            }
            None => {
                close_all(&mut out, &mut open);
                out.push(line.to_string());
            }
        }
    }
    close_all(&mut out, &mut open);

    out.join("\n")
}

fn list_item(line: &str) -> Option<(ListKind, usize, &str)> {
    let kind = match line.chars().next()? {
        '*' => ListKind::Unordered,
        '#' => ListKind::Ordered,
        _ => return None,
    };
    let marker = if kind == ListKind::Unordered { b'*' } else { b'#' };
    let level = line.bytes().take_while(|&b| b == marker).count();
    Some((kind, level, line[level..].trim_start()))
}

fn adjust_nesting(
    out: &mut Vec<String>,
    open: &mut Option<(ListKind, usize)>,
    kind: ListKind,
    level: usize,
) {
    match *open {
        Some((current, depth)) if current == kind => {
            for _ in level..depth {
                out.push(format!("</{}>", current.tag()));
            }
            for _ in depth..level {
                out.push(format!("<{}>", kind.tag()));
            }
        }
        _ => {
            close_all(out, open);
            for _ in 0..level {
                out.push(format!("<{}>", kind.tag()));
            }
        }
    }
    *open = Some((kind, level));
}

fn close_all(out: &mut Vec<String>, open: &mut Option<(ListKind, usize)>) {
    if let Some((kind, depth)) = open.take() {
        for _ in 0..depth {
            out.push(format!("</{}>", kind.tag()));
        }
    }
}
