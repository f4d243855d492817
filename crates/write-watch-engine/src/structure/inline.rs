use regex::Regex;
use std::sync::OnceLock;

fn bold_regex() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    // Content may hold single asterisks but never starts or ends with one,
    // so `***x***` leaves an italic marker on each side of the bold run.
    BOLD.get_or_init(|| {
        Regex::new(r"(?s)\*\*([^*]|[^*].*?[^*])\*\*").expect("Invalid bold regex")
    })
}

fn underline_regex() -> &'static Regex {
    static UNDERLINE: OnceLock<Regex> = OnceLock::new();
    UNDERLINE.get_or_init(|| Regex::new(r"__([^_]+)__").expect("Invalid underline regex"))
}

/// A run of text between bold markers, or the content of a bold run.
enum Piece<'a> {
    Text(&'a str),
    Bold(&'a str),
}

/// Position of an asterisk: index of its text piece and byte offset in it.
type Star = (usize, usize);

/// Converts inline markers in `text` to HTML.
///
/// Passes run in a fixed order:
/// 1. `**bold**` → `<strong>bold</strong>`
/// 2. `*italic*` → `<em>italic</em>`, pairing asterisks outside bold runs
/// 3. `__underline__` → `<u>underline</u>`
/// 4. remaining `\n` → `<br>`
///
/// Bold runs are resolved first and are atomic for the italic pass: their
/// content is never scanned, so `**a *b* c**` stays
/// `<strong>a *b* c</strong>`, while an italic run may enclose them, so
/// `*a **b** c*` and `***x***` become emphasis around strong.
///
/// The input is not escaped here; callers embedding untrusted text escape it
/// before formatting.
pub fn process_inline_formatting(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let pieces = split_bold(text);
    let (openers, closers) = pair_italic_markers(&pieces);

    let mut out = String::with_capacity(text.len() + 16);
    for (index, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Bold(inner) => {
                out.push_str("<strong>");
                out.push_str(inner);
                out.push_str("</strong>");
            }
            Piece::Text(run) => {
                for (offset, ch) in run.char_indices() {
                    if openers.contains(&(index, offset)) {
                        out.push_str("<em>");
                    } else if closers.contains(&(index, offset)) {
                        out.push_str("</em>");
                    } else {
                        out.push(ch);
                    }
                }
            }
        }
    }

    let out = underline_regex().replace_all(&out, "<u>$1</u>");
    out.replace('\n', "<br>")
}

fn split_bold(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in bold_regex().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        pieces.push(Piece::Text(&text[last..whole.start()]));
        pieces.push(Piece::Bold(inner.as_str()));
        last = whole.end();
    }
    pieces.push(Piece::Text(&text[last..]));
    pieces
}

/// Pairs asterisks outside bold runs left to right.
///
/// A pair needs something between its two markers, either text or a bold
/// run; an asterisk directly followed by another is skipped and stays
/// literal. This mirrors a leftmost `\*([^*]+)\*` scan with bold runs
/// treated as single opaque characters.
fn pair_italic_markers(pieces: &[Piece<'_>]) -> (Vec<Star>, Vec<Star>) {
    let stars: Vec<Star> = pieces
        .iter()
        .enumerate()
        .filter_map(|(index, piece)| match piece {
            Piece::Text(run) => Some((index, *run)),
            Piece::Bold(_) => None,
        })
        .flat_map(|(index, run)| {
            run.char_indices()
                .filter(|&(_, ch)| ch == '*')
                .map(move |(offset, _)| (index, offset))
        })
        .collect();

    let mut openers = Vec::new();
    let mut closers = Vec::new();
    let mut i = 0;
    while i + 1 < stars.len() {
        let (open, close) = (stars[i], stars[i + 1]);
        let adjacent = open.0 == close.0 && close.1 == open.1 + 1;
        if adjacent {
            i += 1;
        } else {
            openers.push(open);
            closers.push(close);
            i += 2;
        }
    }
    (openers, closers)
}
