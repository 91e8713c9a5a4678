//! Integration tests for texprose end-to-end stripping

use pretty_assertions::assert_eq;
use texprose::{
    count_words, strip_latex, strip_latex_with_options, MathAllowList, OutputMode, StripError,
    StripOptions,
};

const ALL_MODES: [OutputMode; 3] = [
    OutputMode::Plain,
    OutputMode::WordCount,
    OutputMode::TextToSpeech,
];

/// Strip a body fragment in the given output mode
fn strip_in(input: &str, mode: OutputMode) -> String {
    let options = StripOptions::document().with_output_mode(mode);
    strip_latex_with_options(input, &options).unwrap().content
}

fn strip_body(input: &str) -> String {
    strip_in(input, OutputMode::Plain)
}

// ============================================================================
// Plain Text
// ============================================================================

mod plain_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(strip_body("The  quick\n\n brown fox."), "The quick\nbrown fox.");
        assert_eq!(strip_body("  padded  "), "padded");
    }

    #[test]
    fn test_space_before_punctuation_removed() {
        assert_eq!(strip_body("Word , next . Really ? Yes !"), "Word, next. Really? Yes!");
    }

    #[test]
    fn test_full_document() {
        let input = "\\documentclass[11pt]{article}\n\\usepackage{amsmath}\n\\title{Ignored}\n\
                     \\begin{document}\n\\maketitle\n\\section{Intro}\nText here.\n\\end{document}\n";
        assert_eq!(strip_latex(input).unwrap(), "Intro\nText here.");
    }

    #[test]
    fn test_text_after_end_document_is_dropped() {
        let input = "\\begin{document}Body\\end{document}\nTrailing notes";
        assert_eq!(strip_latex(input).unwrap(), "Body");
    }

    #[test]
    fn test_unknown_macros_vanish() {
        assert_eq!(strip_body(r"\noindent Start \newline here"), "Start here");
        assert_eq!(strip_body(r"\section*{Intro} text"), "Intro text");
    }
}

// ============================================================================
// Escapes and Control Symbols
// ============================================================================

mod escapes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_round_trip() {
        assert_eq!(strip_body(r"100\% sure, \$5, \{set\}"), "100% sure, $5, {set}");
    }

    #[test]
    fn test_escapes_inside_groups() {
        assert_eq!(strip_body(r"{50\% and \{x\}}"), "50% and {x}");
    }

    #[test]
    fn test_escaped_percent_is_not_a_comment() {
        assert_eq!(strip_body(r"50\% off % hidden"), "50% off");
    }

    #[test]
    fn test_control_symbols() {
        assert_eq!(strip_body(r"A \& B\\ C"), "A & B C");
        assert_eq!(strip_body(r"a\,b"), "a b");
        assert_eq!(strip_body(r"caf\'e"), "cafe");
        assert_eq!(strip_body(r"item\_name \#1"), "item_name #1");
    }
}

// ============================================================================
// Comments
// ============================================================================

mod comments {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_to_end_of_line() {
        for mode in ALL_MODES {
            assert_eq!(strip_in("visible % hidden\nnext", mode), "visible next");
        }
    }

    #[test]
    fn test_comment_inside_group() {
        assert_eq!(strip_body("{a % b}\nc}"), "a c");
    }

    #[test]
    fn test_comment_in_preamble_and_after_escape() {
        let input = "% \\begin{document} in a comment\n\\begin{document}\nKept % dropped \\ref{x}\n\\end{document}";
        assert_eq!(strip_latex(input).unwrap(), "Kept");
    }
}

// ============================================================================
// Math
// ============================================================================

mod math {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_math_per_mode() {
        assert_eq!(strip_in("$x^2+y^2$", OutputMode::Plain), "x^2+y^2");
        assert_eq!(strip_in("$x^2+y^2$", OutputMode::WordCount), "MATHS");
        assert_eq!(strip_in("$x^2+y^2$", OutputMode::TextToSpeech), "x^2+y^2");
    }

    #[test]
    fn test_complex_math_dropped_in_all_modes() {
        for mode in ALL_MODES {
            assert_eq!(strip_in(r"$\frac{1}{2}$", mode), "");
            assert_eq!(strip_in("Let $x=1$ hold.", mode), "Let hold.");
        }
    }

    #[test]
    fn test_display_math() {
        assert_eq!(strip_body("so $$a+b$$ then"), "so a+b then");
        assert_eq!(strip_in("$$a+b$$", OutputMode::WordCount), "MATHS");
    }

    #[test]
    fn test_math_braces_and_newlines() {
        assert_eq!(strip_body("$x^{2}$"), "x^2");
        assert_eq!(strip_body("$a\n+b$"), "a+b");
    }

    #[test]
    fn test_greek_letters_are_simple() {
        assert_eq!(strip_body("$α+β$"), "α+β");
    }

    #[test]
    fn test_math_inside_group() {
        assert_eq!(strip_body(r"{$x$ and $\alpha$}"), "x and");
    }

    #[test]
    fn test_custom_allow_list() {
        let options = StripOptions::document()
            .with_math_allow_list(MathAllowList::default().with_chars("="));
        let output = strip_latex_with_options("$x=1$", &options).unwrap();
        assert_eq!(output.content, "x=1");
    }
}

// ============================================================================
// Environments
// ============================================================================

mod environments {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_figure_is_ignored_in_all_modes() {
        let input = "Before\n\\begin{figure}\n\\centering\n\\includegraphics{a.png}\n\
                     \\caption{A \\ref{x} and $y$}\n\\end{figure}\nAfter";
        for mode in ALL_MODES {
            assert_eq!(strip_in(input, mode), "Before\nAfter");
        }
    }

    #[test]
    fn test_starred_table_and_nocount() {
        assert_eq!(
            strip_body("a \\begin{table*}x\\end{table*} b \\begin{nocount}skip\\end{nocount} c"),
            "a b c"
        );
    }

    #[test]
    fn test_float_with_brace_argument_is_ignored() {
        for mode in ALL_MODES {
            assert_eq!(
                strip_in("a \\begin{figure}{c}\nsecret\n\\end{figure} b", mode),
                "a b"
            );
            assert_eq!(
                strip_in("a \\begin{table}{\\small x}\nsecret\n\\end{table} b", mode),
                "a b"
            );
        }
    }

    #[test]
    fn test_commented_end_does_not_close_float() {
        let input = "a \\begin{figure} % \\end{figure}\n x \\end{figure} b";
        assert_eq!(strip_body(input), "a b");
    }

    #[test]
    fn test_nested_ignored_environments() {
        let input = "a \\begin{figure}\\begin{table}x\\end{table} y\\end{figure} b";
        assert_eq!(strip_body(input), "a b");
    }

    #[test]
    fn test_generic_environment_keeps_content() {
        let input = "\\begin{itemize}\n\\item One\n\\item Two\n\\end{itemize}";
        assert_eq!(strip_body(input), "One\nTwo");
    }

    #[test]
    fn test_align_keeps_only_intertext() {
        let input = "Eq:\n\\begin{align}\na &= b \\\\\n\\intertext{and also}\nc &= d\n\\end{align}\nDone.";
        assert_eq!(strip_body(input), "Eq:\nand also\nDone.");
    }

    #[test]
    fn test_align_star_and_intertext_groups() {
        let input = "\\begin{align*}\nx\n\\intertext{where {this} holds}\ny\n\\end{align*}";
        assert_eq!(strip_body(input), "where this holds");
    }
}

// ============================================================================
// Special Macros
// ============================================================================

mod special_macros {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_mode_placeholders() {
        assert_eq!(strip_body(r"\ref{eq:one}"), "NUMBER");
        assert_eq!(strip_body(r"\autoref{eq:one}"), "REFTYPE NUMBER");
        assert_eq!(strip_body(r"\textcite{Smith2020}"), "AUTHOR");
        assert_eq!(strip_body(r"\label{eq:one}"), "");
        assert_eq!(strip_body(r"\footnote{text}"), "");
        assert_eq!(strip_body(r"\autocite{Smith2020}"), "");
    }

    #[test]
    fn test_word_count_mode_matches_default() {
        assert_eq!(strip_in(r"\ref{eq:one}", OutputMode::WordCount), "NUMBER");
        assert_eq!(strip_in(r"\textcite{k}", OutputMode::WordCount), "AUTHOR");
    }

    #[test]
    fn test_tts_mode() {
        let tts = |s| strip_in(s, OutputMode::TextToSpeech);
        assert_eq!(tts(r"\ref{eq:one}"), "eq:one");
        assert_eq!(tts(r"\label{eq:one}"), "");
        assert_eq!(tts(r"\textcite{Smith2020}"), "Smith2020");
        assert_eq!(tts(r"Body\footnote{an aside} text."), "Bodyan aside text.");
    }

    #[test]
    fn test_in_sentences() {
        assert_eq!(strip_body(r"See Figure \ref{fig:a}."), "See Figure NUMBER.");
        assert_eq!(strip_body(r"Text\label{sec:x} more"), "Text more");
        assert_eq!(strip_body(r"Body\footnote{aside} text."), "Body text.");
    }

    #[test]
    fn test_options_before_argument() {
        assert_eq!(strip_body(r"\autocite[p.~4]{key}"), "");
        assert_eq!(strip_in(r"\autocite[p.~4]{key}", OutputMode::TextToSpeech), "key");
    }

    #[test]
    fn test_inside_groups() {
        assert_eq!(strip_body(r"{see \ref{a}}"), "see NUMBER");
    }
}

// ============================================================================
// Grouping and Nested Replay
// ============================================================================

mod grouping {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_braces_unwrapped() {
        assert_eq!(strip_body("Hello {world} there"), "Hello world there");
        assert_eq!(strip_body("{{{deep}}}"), "deep");
    }

    #[test]
    fn test_macro_arguments_kept() {
        assert_eq!(strip_body(r"\emph{very} \textbf{bold}"), "very bold");
    }

    #[test]
    fn test_nested_replay_in_special_macro() {
        assert_eq!(
            strip_in(r"\ref{see {the} figure}", OutputMode::TextToSpeech),
            "see the figure"
        );
        assert_eq!(strip_body(r"\ref{see {the} figure}"), "NUMBER");
    }

    #[test]
    fn test_math_inside_footnote_tts() {
        assert_eq!(
            strip_in(r"\footnote{with $x$ inside}", OutputMode::TextToSpeech),
            "with x inside"
        );
    }
}

// ============================================================================
// Preprocessing
// ============================================================================

mod preprocessing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iffalse_blocks_removed() {
        let input = "Keep\n\\iffalse\nDrop \\ref{x}\n\\fi\nthis";
        assert_eq!(strip_body(input), "Keep\nthis");
    }

    #[test]
    fn test_iffalse_can_hide_document_end() {
        let input = "\\begin{document}A\\iffalse\\end{document}\\fi B\\end{document}";
        assert_eq!(strip_latex(input).unwrap(), "A B");
    }
}

// ============================================================================
// Word Counting
// ============================================================================

mod word_count {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholders_count_as_words() {
        let text = strip_in(
            r"We have $x^2$ and \textcite{a} says \ref{b}.",
            OutputMode::WordCount,
        );
        assert_eq!(text, "We have MATHS and AUTHOR says NUMBER.");
        assert_eq!(count_words(&text), 7);
    }

    #[test]
    fn test_autoref_counts_two_words() {
        assert_eq!(
            count_words(&strip_in(r"see \autoref{x}", OutputMode::WordCount)),
            3
        );
    }

    #[test]
    fn test_empty_output_counts_zero() {
        assert_eq!(count_words(&strip_in("% only a comment", OutputMode::WordCount)), 0);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod diagnostics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unterminated_math_warns() {
        let output = strip_latex_with_options("ok\n  $x", &StripOptions::document()).unwrap();
        assert_eq!(output.content, "ok");
        assert_eq!(output.warnings.len(), 1);
        let warning = &output.warnings[0];
        assert_eq!(warning.message, "unterminated inline math");
        assert_eq!((warning.line, warning.column), (Some(2), Some(3)));
        assert_eq!(warning.suggestion.as_deref(), Some("close it with `$`"));
    }

    #[test]
    fn test_strict_mode_fails() {
        let options = StripOptions::document().with_strict(true);
        let err = strip_latex_with_options("{abc", &options).unwrap_err();
        assert_eq!(err, StripError::unterminated("group", 1, 1));
        assert_eq!(err.to_string(), "Unterminated group opened at line 1, column 1");
    }

    #[test]
    fn test_trailing_comment_is_not_reported() {
        let output =
            strip_latex_with_options("text % trailing", &StripOptions::document()).unwrap();
        assert_eq!(output.content, "text");
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_unterminated_document() {
        let output =
            strip_latex_with_options("\\begin{document}\nText", &StripOptions::default()).unwrap();
        assert_eq!(output.content, "Text");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].message, "unterminated document environment");
    }

    #[test]
    fn test_missing_document_body_warns() {
        let output = strip_latex_with_options("no body here", &StripOptions::default()).unwrap();
        assert_eq!(output.content, "");
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_replay_warning_points_at_construct() {
        let output =
            strip_latex_with_options("x\n\\ref{a $b}", &StripOptions::document()).unwrap();
        assert_eq!(output.content, "x\nNUMBER");
        assert_eq!(output.warnings.len(), 1);
        let warning = &output.warnings[0];
        assert_eq!(warning.message, "unterminated inline math");
        assert_eq!((warning.line, warning.column), (Some(2), Some(1)));
    }
}

// ============================================================================
// Idempotence
// ============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stripping_own_output_is_stable() {
        let inputs = [
            "Hello {world} there",
            "A  \\emph{b} , c .",
            "See \\ref{x}.",
            "Before\n\\begin{figure}x\\end{figure}\n\nAfter",
            "Plain  text\twith\n\n\nbreaks",
        ];
        for input in inputs {
            let once = strip_body(input);
            assert_eq!(strip_body(&once), once, "input: {:?}", input);
        }
    }
}
