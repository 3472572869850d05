//! Left-to-right rewrite passes over a string.

use regex::{Captures, Regex};

/// Upper bound on repeated passes for a single binding.
const MAX_PASSES: usize = 64;

/// One left-to-right pass.
///
/// Matches are located first and the output is assembled by copying the
/// literal runs between them, so replacement text is never rescanned
/// within the same pass. When `replace` rejects a match the scan resumes
/// one character after that match's start, leaving its text untouched.
///
/// Returns the output and the number of substitutions made.
pub(crate) fn rewrite_pass<F>(pattern: &Regex, input: &str, replace: &mut F) -> (String, usize)
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut out = String::new();
    let mut last = 0;
    let mut pos = 0;
    let mut count = 0;

    while pos <= input.len() {
        let Some(caps) = pattern.captures_at(input, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        match replace(&caps) {
            Some(replacement) => {
                if count == 0 {
                    out.reserve(input.len());
                }
                out.push_str(&input[last..whole.start()]);
                out.push_str(&replacement);
                last = whole.end();
                count += 1;
                pos = if whole.is_empty() {
                    next_boundary(input, whole.end())
                } else {
                    whole.end()
                };
            }
            None => pos = next_boundary(input, whole.start()),
        }
    }

    if count == 0 {
        return (input.to_string(), 0);
    }
    out.push_str(&input[last..]);
    (out, count)
}

/// Repeat [`rewrite_pass`] until a pass makes no substitutions.
///
/// Replacements never reintroduce the delimiters they consumed, so the
/// loop ends once nested or newly adjacent spans are exhausted.
pub(crate) fn rewrite<F>(name: &str, pattern: &Regex, input: &str, mut replace: F) -> String
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut current = input.to_string();

    for pass in 0..MAX_PASSES {
        let (next, count) = rewrite_pass(pattern, &current, &mut replace);
        if count == 0 {
            return next;
        }
        tracing::trace!(binding = name, pass, count, "rewrite pass");
        current = next;
    }

    tracing::warn!(binding = name, passes = MAX_PASSES, "rewrite pass limit reached");
    current
}

/// Byte index just past the character starting at `idx`.
fn next_boundary(input: &str, idx: usize) -> usize {
    input[idx..]
        .chars()
        .next()
        .map_or(input.len() + 1, |ch| idx + ch.len_utf8())
}
