//! Name normalization for fuzzy comparison.
//!
//! Spreadsheet names and filename stems arrive in wildly different shapes —
//! `"Iron Fang Pathfinder 01"`, `iron_fang_pathfinder.png`,
//! `IronFang-Pathfinder_2` — so both sides are reduced to a canonical
//! lowercase, punctuation-free, trailing-number-free form before scoring.

/// Reduce a name to its core tokens for comparison.
///
/// Steps, applied in order:
/// 1. lowercase
/// 2. strip a trailing extension-like suffix (`.png`, `.jpeg`, …)
/// 3. strip a trailing run of separators + digits (`Knight_02` → `Knight`)
/// 4. collapse underscores/hyphens to single spaces
/// 5. collapse whitespace and trim
///
/// The passes run to a fixpoint so the transform is idempotent:
/// `normalize(normalize(x)) == normalize(x)` for any input.
///
/// # Examples
/// ```
/// # use art_prep::matching::normalize;
/// assert_eq!(normalize("Knight_02.png"), "knight");
/// assert_eq!(normalize("Iron Fang Pathfinder 01"), "iron fang pathfinder");
/// assert_eq!(normalize("iron_fang_pathfinder"), "iron fang pathfinder");
/// ```
pub fn normalize(text: &str) -> String {
    let mut current = text.to_lowercase();
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let text = strip_extension(text);
    let text = strip_trailing_number(text);

    // Separators to spaces, collapse runs, trim
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// Strip a trailing `.ext` where ext is 2–4 ASCII letters (input is lowercase).
fn strip_extension(text: &str) -> &str {
    if let Some(pos) = text.rfind('.') {
        let suffix = &text[pos + 1..];
        if (2..=4).contains(&suffix.len()) && suffix.chars().all(|c| c.is_ascii_lowercase()) {
            return &text[..pos];
        }
    }
    text
}

/// Strip one trailing run of separators + digits (`knight_02` → `knight`).
fn strip_trailing_number(text: &str) -> &str {
    let without_digits = text.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == text.len() {
        return text; // no trailing digits, leave separators alone
    }
    without_digits.trim_end_matches([' ', '\t', '_', '-'])
}

/// Convert a spreadsheet name to a valid filename stem.
///
/// Characters illegal in common filesystems are removed and whitespace is
/// collapsed; case and interior punctuation like apostrophes are preserved so
/// the output filename still reads like the name.
pub fn safe_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .collect();
    let mut out = String::with_capacity(cleaned.len());
    let mut pending_space = false;
    for c in cleaned.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}
