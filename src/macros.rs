//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind, literal and character offsets

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The exact source text matched
/// * `$start` - Character offset of the first matched character
/// * `$end` - Character offset one past the last matched character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: Span {
                start: Position($start),
                end: Position($end),
            },
        }
    };
}
