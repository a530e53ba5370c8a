//! Word-level diff between the original and improved resume text.
//!
//! Presentation-only: the diff feeds the comparison view and never flows back
//! into the stored result. Tokens are whitespace-separated words; the edit
//! script is the standard LCS alignment, with runs of same-typed tokens
//! merged into one segment.

/// How a segment relates the improved text to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditType {
    /// Present in both versions.
    Equal,
    /// Added by the improvement pass.
    Insert,
    /// Removed by the improvement pass.
    Delete,
}

/// A run of consecutive words sharing one edit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub edit: EditType,
    pub text: String,
}

impl DiffSegment {
    fn new(edit: EditType, words: &[&str]) -> Self {
        DiffSegment {
            edit,
            text: words.join(" "),
        }
    }
}

/// Computes a word-level diff from `original` to `improved`.
pub fn diff_words(original: &str, improved: &str) -> Vec<DiffSegment> {
    let old: Vec<&str> = original.split_whitespace().collect();
    let new: Vec<&str> = improved.split_whitespace().collect();

    let ops = lcs_ops(&old, &new);

    // Merge consecutive tokens with the same edit type into segments.
    let mut segments: Vec<DiffSegment> = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut run_edit: Option<EditType> = None;

    for (edit, word) in ops {
        if run_edit == Some(edit) {
            run.push(word);
        } else {
            if let Some(prev) = run_edit {
                segments.push(DiffSegment::new(prev, &run));
            }
            run.clear();
            run.push(word);
            run_edit = Some(edit);
        }
    }
    if let Some(prev) = run_edit {
        segments.push(DiffSegment::new(prev, &run));
    }

    segments
}

/// Token-level edit script via LCS backtracking. Deletions are emitted before
/// insertions at the same alignment point.
fn lcs_ops<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<(EditType, &'a str)> {
    let n = old.len();
    let m = new.len();

    // lengths[i][j] = LCS length of old[i..] and new[j..], flattened.
    let width = m + 1;
    let mut lengths = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lengths[i * width + j] = if old[i] == new[j] {
                lengths[(i + 1) * width + j + 1] + 1
            } else {
                lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            ops.push((EditType::Equal, old[i]));
            i += 1;
            j += 1;
        } else if lengths[(i + 1) * width + j] >= lengths[i * width + j + 1] {
            ops.push((EditType::Delete, old[i]));
            i += 1;
        } else {
            ops.push((EditType::Insert, new[j]));
            j += 1;
        }
    }
    while i < n {
        ops.push((EditType::Delete, old[i]));
        i += 1;
    }
    while j < m {
        ops.push((EditType::Insert, new[j]));
        j += 1;
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(edit: EditType, text: &str) -> DiffSegment {
        DiffSegment {
            edit,
            text: text.to_string(),
        }
    }

    #[test]
    fn identical_texts_produce_a_single_equal_segment() {
        let segments = diff_words("one two three", "one two three");
        assert_eq!(segments, vec![seg(EditType::Equal, "one two three")]);
    }

    #[test]
    fn substitution_marks_old_word_removed_and_new_word_added() {
        let segments = diff_words("A B", "A C");
        assert_eq!(
            segments,
            vec![
                seg(EditType::Equal, "A"),
                seg(EditType::Delete, "B"),
                seg(EditType::Insert, "C"),
            ]
        );
    }

    #[test]
    fn consecutive_changes_merge_into_one_segment() {
        let segments = diff_words("keep a b keep", "keep x y z keep");
        assert_eq!(
            segments,
            vec![
                seg(EditType::Equal, "keep"),
                seg(EditType::Delete, "a b"),
                seg(EditType::Insert, "x y z"),
                seg(EditType::Equal, "keep"),
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_no_segments() {
        assert!(diff_words("", "").is_empty());
        assert_eq!(diff_words("", "new"), vec![seg(EditType::Insert, "new")]);
        assert_eq!(diff_words("old", ""), vec![seg(EditType::Delete, "old")]);
    }

    #[test]
    fn whitespace_differences_alone_are_invisible() {
        let segments = diff_words("one  two\nthree", "one two three");
        assert_eq!(segments, vec![seg(EditType::Equal, "one two three")]);
    }
}
