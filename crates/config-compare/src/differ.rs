//! Line-granular diff between two configuration texts.

use crate::model::DiffOp;
use similar::{Algorithm, DiffOp as SimilarOp, TextDiff};

/// Split text into lines on `\n`.
///
/// A trailing empty piece produced by a final newline is not a line, so
/// `""` has no lines and `"\n"` has a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Compute the edit script turning `source` into `target`.
///
/// Myers' O(ND) alignment keeps the number of inserted plus deleted lines
/// minimal while staying fast on large, mostly equal configs. Runs are
/// maximal, and a changed region is always emitted as a `Delete` run followed
/// by an `Insert` run.
pub fn diff_lines(source: &str, target: &str) -> Vec<DiffOp> {
    let old = split_lines(source);
    let new = split_lines(target);

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&old, &new);

    let mut script = ScriptBuilder::default();
    for op in diff.ops() {
        match *op {
            SimilarOp::Equal { old_index, len, .. } => {
                script.equal(&old[old_index..old_index + len]);
            }
            SimilarOp::Delete {
                old_index, old_len, ..
            } => {
                script.delete(&old[old_index..old_index + old_len]);
            }
            SimilarOp::Insert {
                new_index, new_len, ..
            } => {
                script.insert(&new[new_index..new_index + new_len]);
            }
            SimilarOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                script.delete(&old[old_index..old_index + old_len]);
                script.insert(&new[new_index..new_index + new_len]);
            }
        }
    }
    script.finish()
}

/// Coalesces single-line changes into maximal runs.
///
/// Deletions and insertions between two equal runs are buffered so the
/// changed region is always flushed as one `Delete` then one `Insert`.
#[derive(Default)]
struct ScriptBuilder {
    ops: Vec<DiffOp>,
    deleted: Vec<String>,
    inserted: Vec<String>,
}

impl ScriptBuilder {
    fn equal(&mut self, lines: &[&str]) {
        if lines.is_empty() {
            return;
        }
        self.flush_changes();
        if let Some(DiffOp::Equal(run)) = self.ops.last_mut() {
            run.extend(lines.iter().map(|l| l.to_string()));
        } else {
            self.ops
                .push(DiffOp::Equal(lines.iter().map(|l| l.to_string()).collect()));
        }
    }

    fn delete(&mut self, lines: &[&str]) {
        self.deleted.extend(lines.iter().map(|l| l.to_string()));
    }

    fn insert(&mut self, lines: &[&str]) {
        self.inserted.extend(lines.iter().map(|l| l.to_string()));
    }

    fn flush_changes(&mut self) {
        if !self.deleted.is_empty() {
            self.ops.push(DiffOp::Delete(std::mem::take(&mut self.deleted)));
        }
        if !self.inserted.is_empty() {
            self.ops
                .push(DiffOp::Insert(std::mem::take(&mut self.inserted)));
        }
    }

    fn finish(mut self) -> Vec<DiffOp> {
        self.flush_changes();
        self.ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Rebuild (source, target) line lists from a script.
    fn reconstruct(script: &[DiffOp]) -> (Vec<String>, Vec<String>) {
        let mut source = Vec::new();
        let mut target = Vec::new();
        for op in script {
            match op {
                DiffOp::Equal(l) => {
                    source.extend(l.iter().cloned());
                    target.extend(l.iter().cloned());
                }
                DiffOp::Delete(l) => source.extend(l.iter().cloned()),
                DiffOp::Insert(l) => target.extend(l.iter().cloned()),
            }
        }
        (source, target)
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\nb\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_single_line_change() {
        let script = diff_lines("a\nb\nc", "a\nx\nc");
        assert_eq!(
            script,
            vec![
                DiffOp::Equal(lines(&["a"])),
                DiffOp::Delete(lines(&["b"])),
                DiffOp::Insert(lines(&["x"])),
                DiffOp::Equal(lines(&["c"])),
            ]
        );
    }

    #[test]
    fn test_identical_input_is_one_equal_run() {
        let config = "hostname core-sw1\n!\ninterface Gi0/1\n description uplink\n!\n";
        let script = diff_lines(config, config);
        assert_eq!(script.len(), 1);
        assert!(matches!(&script[0], DiffOp::Equal(l) if l.len() == 5));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(diff_lines("", "").is_empty());
        assert_eq!(diff_lines("", "a\nb"), vec![DiffOp::Insert(lines(&["a", "b"]))]);
        assert_eq!(diff_lines("a\nb\n", ""), vec![DiffOp::Delete(lines(&["a", "b"]))]);
    }

    #[test]
    fn test_runs_are_maximal() {
        let script = diff_lines("a\nb\nc\nd\ne", "a\nx\ny\nd\ne\nf\ng");
        for pair in script.windows(2) {
            let same_kind = matches!(
                (&pair[0], &pair[1]),
                (DiffOp::Equal(_), DiffOp::Equal(_))
                    | (DiffOp::Delete(_), DiffOp::Delete(_))
                    | (DiffOp::Insert(_), DiffOp::Insert(_))
            );
            assert!(!same_kind, "adjacent runs of the same kind: {:?}", pair);
        }
        assert_eq!(
            script,
            vec![
                DiffOp::Equal(lines(&["a"])),
                DiffOp::Delete(lines(&["b", "c"])),
                DiffOp::Insert(lines(&["x", "y"])),
                DiffOp::Equal(lines(&["d", "e"])),
                DiffOp::Insert(lines(&["f", "g"])),
            ]
        );
    }

    #[test]
    fn test_reconstructs_both_sides() {
        let source = "hostname sw1\ninterface Gi0/1\n shutdown\n!\nvlan 10\n name users\nend\n";
        let target = "hostname sw1\ninterface Gi0/1\n no shutdown\n!\nvlan 20\n name voice\nvlan 10\n name users\nend\n";
        let script = diff_lines(source, target);
        let (src, tgt) = reconstruct(&script);
        assert_eq!(src, lines(&split_lines(source)));
        assert_eq!(tgt, lines(&split_lines(target)));
    }

    #[test]
    fn test_minimal_edit_count() {
        // One line moved to the end costs exactly one delete and one insert.
        let script = diff_lines("a\nb\nc\nd", "b\nc\nd\na");
        let changed: usize = script
            .iter()
            .filter(|op| !matches!(op, DiffOp::Equal(_)))
            .map(DiffOp::len)
            .sum();
        assert_eq!(changed, 2);
    }

    fn large_config(hostname: &str, last: &str, interfaces: usize) -> String {
        let mut config = format!("hostname {}\n", hostname);
        for port in 1..=interfaces {
            config.push_str(&format!(
                "interface GigabitEthernet1/0/{}\n switchport access vlan 10\n!\n",
                port
            ));
        }
        config.push_str(last);
        config.push('\n');
        config
    }

    #[test]
    fn test_large_configs_differing_at_both_ends() {
        let source = large_config("core-sw1", "end", 2000);
        let target = large_config("core-sw2", "end ! saved", 2000);

        let started = std::time::Instant::now();
        let script = diff_lines(&source, &target);
        let elapsed = started.elapsed();

        let changed: usize = script
            .iter()
            .filter(|op| !matches!(op, DiffOp::Equal(_)))
            .map(DiffOp::len)
            .sum();
        assert_eq!(changed, 4);
        assert_eq!(script.len(), 5);
        assert!(matches!(&script[2], DiffOp::Equal(l) if l.len() == 6000));
        assert!(
            elapsed < std::time::Duration::from_secs(1),
            "diff of {} lines took {:?}",
            split_lines(&source).len(),
            elapsed
        );
    }

    #[test]
    fn test_deterministic() {
        let source = "a\nb\na\nb\nc";
        let target = "b\na\nc\na";
        assert_eq!(diff_lines(source, target), diff_lines(source, target));
    }

    #[test]
    fn test_binary_like_input_does_not_fail() {
        let script = diff_lines("\u{0}\u{1}\r\n\u{ff}", "\u{0}\u{1}\r\n");
        let (src, tgt) = reconstruct(&script);
        assert_eq!(src, lines(&["\u{0}\u{1}\r", "\u{ff}"]));
        assert_eq!(tgt, lines(&["\u{0}\u{1}\r"]));
    }
}
