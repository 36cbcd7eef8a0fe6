//! The run ledger: run-length-encoded style spans and their primitives.
//!
//! A paragraph's styling is an ordered sequence of [`Run`]s, each covering a
//! contiguous span of grapheme clusters with one style value. Every mutation
//! in the editor is a composition of the primitives here: lookup, split,
//! merge, insert, delete, splice, and clip. All offsets and lengths are
//! grapheme-cluster counts.

use crate::style::RunStyle;

/// A contiguous span of grapheme clusters sharing one style.
///
/// Runs are value types: freely cloned, split, and merged. A run records
/// only its length; its start offset is implied by the runs before it.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<S> {
    /// Span length in grapheme clusters. Never 0 after a mutation completes.
    pub len: usize,
    /// The style applied to this span.
    pub style: S,
}

impl<S> Run<S> {
    /// Create a run.
    #[must_use]
    pub const fn new(len: usize, style: S) -> Self {
        Self { len, style }
    }
}

/// Result of locating a grapheme offset within a run sequence.
///
/// End-of-paragraph is a distinct case, not a containing run: every caller
/// handles `offset == grapheme_count` as "append after the last run". This
/// single rule replaces the mixed strict/non-strict comparisons that breed
/// off-by-one bugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunLookup {
    /// The offset falls inside run `index`, `offset_in_run` clusters in.
    Within {
        index: usize,
        offset_in_run: usize,
    },
    /// The offset is at or past the end of the run sequence.
    End,
}

/// Sum of run lengths.
#[must_use]
pub fn total_len<S>(runs: &[Run<S>]) -> usize {
    runs.iter().map(|run| run.len).sum()
}

/// Locate the run containing `offset`.
///
/// Returns `Within { index, offset_in_run }` for the run `i` with
/// `cumulative(i) <= offset < cumulative(i + 1)`, or [`RunLookup::End`] when
/// `offset` is at or past the total length.
#[must_use]
pub fn find_run_at<S>(runs: &[Run<S>], offset: usize) -> RunLookup {
    let mut cumulative = 0;
    for (index, run) in runs.iter().enumerate() {
        if offset < cumulative + run.len {
            return RunLookup::Within {
                index,
                offset_in_run: offset - cumulative,
            };
        }
        cumulative += run.len;
    }
    RunLookup::End
}

/// Split the run containing `offset` into two runs of the same style.
///
/// No-op when `offset` already falls on a run boundary (including 0 and the
/// end of the sequence). Guarantees that `offset` aligns with a run edge
/// afterwards, so insertion/deletion boundaries never land mid-run.
pub fn split_run_at<S: RunStyle>(runs: &mut Vec<Run<S>>, offset: usize) {
    if let RunLookup::Within {
        index,
        offset_in_run,
    } = find_run_at(runs, offset)
    {
        if offset_in_run > 0 {
            let tail = runs[index].len - offset_in_run;
            runs[index].len = offset_in_run;
            let style = runs[index].style.clone();
            runs.insert(index + 1, Run::new(tail, style));
        }
    }
}

/// Drop zero-length runs and fold equal-style neighbors together.
///
/// Afterwards no run is empty and no two neighbors share a style.
pub fn merge_adjacent<S: RunStyle>(runs: &mut Vec<Run<S>>) {
    runs.retain(|run| run.len > 0);
    let mut i = 1;
    while i < runs.len() {
        if runs[i].style == runs[i - 1].style {
            let folded = runs[i].len;
            runs[i - 1].len += folded;
            runs.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Record `len` clusters of `style` inserted at `offset`.
///
/// Splits at the insertion point, extends an equal-style predecessor in
/// place of creating a new run, then re-merges.
pub fn insert_run<S: RunStyle>(runs: &mut Vec<Run<S>>, offset: usize, style: S, len: usize) {
    if len == 0 {
        return;
    }
    split_run_at(runs, offset);
    let index = match find_run_at(runs, offset) {
        RunLookup::Within { index, .. } => index,
        RunLookup::End => runs.len(),
    };
    if index > 0 && runs[index - 1].style == style {
        runs[index - 1].len += len;
    } else {
        runs.insert(index, Run::new(len, style));
    }
    merge_adjacent(runs);
}

/// Record `len` clusters deleted starting at `start`.
///
/// Splits at both range boundaries so every run is fully inside or fully
/// outside the range, removes the inside runs, then re-merges.
pub fn delete_range<S: RunStyle>(runs: &mut Vec<Run<S>>, start: usize, len: usize) {
    if len == 0 {
        return;
    }
    let end = start + len;
    split_run_at(runs, start);
    split_run_at(runs, end);
    let mut cumulative = 0;
    runs.retain(|run| {
        let run_start = cumulative;
        cumulative += run.len;
        !(run_start >= start && cumulative <= end)
    });
    merge_adjacent(runs);
}

/// Splice a foreign run sequence in at `offset`, keeping the remainder.
///
/// The paste path: the current run is split at `offset`, the inserted runs
/// land between the halves verbatim, and equal-style seams merge.
pub fn splice<S: RunStyle>(runs: &mut Vec<Run<S>>, offset: usize, inserted: Vec<Run<S>>) {
    split_run_at(runs, offset);
    let index = match find_run_at(runs, offset) {
        RunLookup::Within { index, .. } => index,
        RunLookup::End => runs.len(),
    };
    runs.splice(index..index, inserted);
    merge_adjacent(runs);
}

/// Non-destructively extract the runs covering `[start, end)`.
///
/// Boundary runs are clipped to the range; adjacent equal-style results are
/// NOT merged (extraction fidelity over compactness: the copy path keeps
/// run boundaries exactly where the source had them).
#[must_use]
pub fn clip<S: RunStyle>(runs: &[Run<S>], start: usize, end: usize) -> Vec<Run<S>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for run in runs {
        let run_start = cursor;
        let run_end = cursor + run.len;
        cursor = run_end;
        if run_end <= start {
            continue;
        }
        if run_start >= end {
            break;
        }
        let clipped_start = run_start.max(start);
        let clipped_end = run_end.min(end);
        if clipped_end > clipped_start {
            out.push(Run::new(clipped_end - clipped_start, run.style.clone()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    fn runs(pairs: &[(usize, u16)]) -> Vec<Run<TextStyle>> {
        pairs
            .iter()
            .map(|&(len, size)| Run::new(len, TextStyle::sized(size)))
            .collect()
    }

    #[test]
    fn test_find_run_at_boundaries() {
        let r = runs(&[(3, 16), (2, 14)]);
        assert_eq!(
            find_run_at(&r, 0),
            RunLookup::Within {
                index: 0,
                offset_in_run: 0
            }
        );
        assert_eq!(
            find_run_at(&r, 2),
            RunLookup::Within {
                index: 0,
                offset_in_run: 2
            }
        );
        assert_eq!(
            find_run_at(&r, 3),
            RunLookup::Within {
                index: 1,
                offset_in_run: 0
            }
        );
        assert_eq!(find_run_at(&r, 5), RunLookup::End);
        assert_eq!(find_run_at(&r, 99), RunLookup::End);
    }

    #[test]
    fn test_find_run_at_empty() {
        let r: Vec<Run<TextStyle>> = Vec::new();
        assert_eq!(find_run_at(&r, 0), RunLookup::End);
    }

    #[test]
    fn test_split_inside_run() {
        let mut r = runs(&[(5, 16)]);
        split_run_at(&mut r, 2);
        assert_eq!(r, runs(&[(2, 16), (3, 16)]));
    }

    #[test]
    fn test_split_on_boundary_is_noop() {
        let mut r = runs(&[(3, 16), (2, 14)]);
        split_run_at(&mut r, 0);
        split_run_at(&mut r, 3);
        split_run_at(&mut r, 5);
        assert_eq!(r, runs(&[(3, 16), (2, 14)]));
    }

    #[test]
    fn test_merge_adjacent_folds_equal_styles() {
        let mut r = runs(&[(2, 16), (3, 16), (1, 14), (0, 14), (2, 14)]);
        merge_adjacent(&mut r);
        assert_eq!(r, runs(&[(5, 16), (3, 14)]));
    }

    #[test]
    fn test_insert_run_absorbs_into_equal_predecessor() {
        let mut r = runs(&[(15, 16)]);
        insert_run(&mut r, 0, TextStyle::sized(16), 6);
        assert_eq!(r, runs(&[(21, 16)]));
    }

    #[test]
    fn test_insert_run_distinct_style_creates_run() {
        let mut r = runs(&[(15, 16)]);
        insert_run(&mut r, 0, TextStyle::sized(14), 6);
        assert_eq!(r, runs(&[(6, 14), (15, 16)]));
    }

    #[test]
    fn test_insert_run_mid_run_three_way_split() {
        let mut r = runs(&[(15, 16)]);
        insert_run(&mut r, 5, TextStyle::sized(14), 1);
        assert_eq!(r, runs(&[(5, 16), (1, 14), (10, 16)]));
    }

    #[test]
    fn test_insert_run_at_end_appends() {
        let mut r = runs(&[(3, 16)]);
        insert_run(&mut r, 3, TextStyle::sized(14), 2);
        assert_eq!(r, runs(&[(3, 16), (2, 14)]));
    }

    #[test]
    fn test_insert_run_zero_len_is_noop() {
        let mut r = runs(&[(3, 16)]);
        insert_run(&mut r, 1, TextStyle::sized(14), 0);
        assert_eq!(r, runs(&[(3, 16)]));
    }

    #[test]
    fn test_delete_range_within_one_run() {
        let mut r = runs(&[(10, 16)]);
        delete_range(&mut r, 3, 4);
        assert_eq!(r, runs(&[(6, 16)]));
    }

    #[test]
    fn test_delete_range_spanning_runs() {
        let mut r = runs(&[(4, 16), (4, 14), (4, 12)]);
        delete_range(&mut r, 2, 8);
        assert_eq!(r, runs(&[(2, 16), (2, 12)]));
    }

    #[test]
    fn test_delete_range_rejoins_split_styles() {
        // Deleting the middle style leaves equal neighbors that must merge.
        let mut r = runs(&[(4, 16), (4, 14), (4, 16)]);
        delete_range(&mut r, 4, 4);
        assert_eq!(r, runs(&[(8, 16)]));
    }

    #[test]
    fn test_delete_everything() {
        let mut r = runs(&[(4, 16), (4, 14)]);
        delete_range(&mut r, 0, 8);
        assert!(r.is_empty());
    }

    #[test]
    fn test_splice_mid_run() {
        let mut r = runs(&[(6, 16)]);
        splice(&mut r, 3, runs(&[(2, 14), (1, 12)]));
        assert_eq!(r, runs(&[(3, 16), (2, 14), (1, 12), (3, 16)]));
    }

    #[test]
    fn test_splice_merges_equal_seams() {
        let mut r = runs(&[(6, 16)]);
        splice(&mut r, 3, runs(&[(2, 16)]));
        assert_eq!(r, runs(&[(8, 16)]));
    }

    #[test]
    fn test_clip_preserves_boundaries() {
        let r = runs(&[(4, 16), (4, 16), (4, 14)]);
        // Equal-style neighbors stay separate entries when fully covered.
        assert_eq!(clip(&r, 0, 12), runs(&[(4, 16), (4, 16), (4, 14)]));
        assert_eq!(clip(&r, 2, 10), runs(&[(2, 16), (4, 16), (2, 14)]));
        assert_eq!(clip(&r, 4, 4), Vec::<Run<TextStyle>>::new());
    }

    #[test]
    fn test_total_len() {
        assert_eq!(total_len(&runs(&[(3, 16), (2, 14)])), 5);
        assert_eq!(total_len(&Vec::<Run<TextStyle>>::new()), 0);
    }
}
