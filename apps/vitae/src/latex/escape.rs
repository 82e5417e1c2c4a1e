//! LaTeX escaping for user-supplied text.
//!
//! The table is applied in a single left-to-right pass, so each input
//! character is rewritten at most once and a token produced for one character
//! is never rescanned by another rule. Backslash sits first in the table: it is
//! the character every other token is introduced with.
//!
//! Escaping is not idempotent. Apply it exactly once, to raw user text only,
//! never to template boilerplate.

/// Special characters of the target syntax and the token each one becomes.
pub const ESCAPE_TABLE: [(char, &str); 10] = [
    ('\\', r"\textbackslash{}"),
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

fn token_for(c: char) -> Option<&'static str> {
    ESCAPE_TABLE
        .iter()
        .find(|(special, _)| *special == c)
        .map(|(_, token)| *token)
}

/// Escapes `raw` for embedding in LaTeX body text. Total: every string,
/// including the empty one, has an escaped form.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match token_for(c) {
            Some(token) => out.push_str(token),
            None => out.push(c),
        }
    }
    out
}
