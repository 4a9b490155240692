//! Line-oriented extraction state machine.
//!
//! Walks a source file line by line, lifting delimiter-bounded prose out as
//! markdown and inverting everything else into an indented code block. The
//! machine has exactly two states and carries nothing across files.

use std::io::{BufRead, Write};

use crate::core::error::AssembleError;
use crate::core::markers::Marker;

/// Five spaces: an indented code block under common markdown conventions.
const QUOTE_INDENT: &str = "     ";

/// Emission mode for the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Inside a prose region; lines are the narrative and pass through
    /// unchanged.
    Verbatim,
    /// Outside any prose region; lines are source code and get indented
    /// into an inert block.
    Quoted,
}

/// Weave one source file into the output document.
///
/// A line equal (after trimming) to `marker.start` enters Verbatim, one
/// equal to `marker.end` returns to Quoted; the delimiter line itself is
/// consumed, never emitted. Matching a delimiter while already in its
/// target state re-enters that state — delimiters are not nested or
/// counted. Files start in Quoted, so a file with no delimiters comes out
/// entirely as an indented block, and EOF inside a prose region is
/// accepted as-is.
pub fn weave<R: BufRead, W: Write>(
    marker: &Marker,
    input: R,
    out: &mut W,
) -> Result<(), AssembleError> {
    // Empty delimiters mean the file is already prose; copy it through
    let passthrough = marker.start.is_empty() && marker.end.is_empty();

    let mut mode = Mode::Quoted;

    for line in input.lines() {
        let line = line.map_err(AssembleError::SourceRead)?;

        if passthrough {
            writeln!(out, "{line}").map_err(AssembleError::Write)?;
            continue;
        }

        let trimmed = line.trim();
        if trimmed == marker.start {
            mode = Mode::Verbatim;
            continue;
        }
        if trimmed == marker.end {
            mode = Mode::Quoted;
            continue;
        }

        match mode {
            Mode::Verbatim => writeln!(out, "{line}"),
            Mode::Quoted => writeln!(out, "{QUOTE_INDENT}{line}"),
        }
        .map_err(AssembleError::Write)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_marker() -> Marker {
        Marker {
            ext: vec!["go".to_string()],
            start: "/*".to_string(),
            end: "*/".to_string(),
        }
    }

    fn prose_marker() -> Marker {
        Marker {
            ext: vec!["md".to_string()],
            start: String::new(),
            end: String::new(),
        }
    }

    fn weave_str(marker: &Marker, input: &str) -> String {
        let mut out = Vec::new();
        weave(marker, input.as_bytes(), &mut out).expect("weave");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn test_empty_delimiters_pass_through() {
        let input = "# Title\n\nSome paragraph.\n";
        assert_eq!(weave_str(&prose_marker(), input), input);
    }

    #[test]
    fn test_prose_between_delimiters() {
        let input = "A\n/*\nB\n*/\nC\n";
        assert_eq!(weave_str(&comment_marker(), input), "     A\nB\n     C\n");
    }

    #[test]
    fn test_delimiters_match_after_trimming() {
        let input = "  /*  \nprose\n\t*/\ncode\n";
        assert_eq!(weave_str(&comment_marker(), input), "prose\n     code\n");
    }

    #[test]
    fn test_no_delimiters_means_all_quoted() {
        let input = "x\ny\n";
        assert_eq!(weave_str(&comment_marker(), input), "     x\n     y\n");
    }

    #[test]
    fn test_stray_duplicate_start_is_idempotent() {
        // second "/*" inside prose is swallowed, nothing else changes
        let input = "/*\none\n/*\ntwo\n*/\n";
        assert_eq!(weave_str(&comment_marker(), input), "one\ntwo\n");
    }

    #[test]
    fn test_stray_end_while_quoted_is_idempotent() {
        let input = "a\n*/\nb\n";
        assert_eq!(weave_str(&comment_marker(), input), "     a\n     b\n");
    }

    #[test]
    fn test_unterminated_prose_region_is_accepted() {
        let input = "code\n/*\ntrailing prose\nmore prose\n";
        assert_eq!(
            weave_str(&comment_marker(), input),
            "     code\ntrailing prose\nmore prose\n"
        );
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert_eq!(weave_str(&comment_marker(), ""), "");
        assert_eq!(weave_str(&prose_marker(), ""), "");
    }

    #[test]
    fn test_mode_resets_between_calls() {
        // each call starts in Quoted regardless of how the previous
        // file ended
        let mut out = Vec::new();
        let marker = comment_marker();
        weave(&marker, "/*\nopen prose\n".as_bytes(), &mut out).unwrap();
        weave(&marker, "still code\n".as_bytes(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "open prose\n     still code\n"
        );
    }
}
