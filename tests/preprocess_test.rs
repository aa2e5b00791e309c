use email_contacts::ExtractError;
use email_contacts::preprocess::*;
use std::io::Write;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

// --- Thread lines ---

#[test]
fn test_remove_thread_lines() {
    let input = lines(&["Hi Rob,", "> quoted text", ">> deeper", "Thanks", " > not a marker"]);
    let output = remove_thread_lines(input);

    assert_eq!(output, lines(&["Hi Rob,", "Thanks", " > not a marker"]));
    assert!(output.iter().all(|l| !l.starts_with(THREAD_MARKER)));
}

#[test]
fn test_remove_thread_lines_idempotent() {
    let input = lines(&["a", "> b", "c", ">", ""]);
    let once = remove_thread_lines(input);
    let twice = remove_thread_lines(once.clone());
    assert_eq!(once, twice);
}

// --- High frequency lines ---

fn corpus_with(line: &str, copies: usize) -> Vec<String> {
    let mut corpus = lines(&["Rob", "Skype: rob.james123"]);
    corpus.extend(std::iter::repeat_n(line.to_string(), copies));
    corpus.push("Cheers".to_string());
    corpus
}

#[test]
fn test_high_frequency_lines_removed_entirely() {
    let disclaimer = "This email is confidential.";
    let output = remove_high_frequency_lines(corpus_with(disclaimer, 90), HIGH_FREQUENCY_THRESHOLD);

    assert!(!output.iter().any(|l| l == disclaimer));
    assert_eq!(output, lines(&["Rob", "Skype: rob.james123", "Cheers"]));
}

#[test]
fn test_lines_below_threshold_kept() {
    let disclaimer = "This email is confidential.";
    let output = remove_high_frequency_lines(corpus_with(disclaimer, 89), HIGH_FREQUENCY_THRESHOLD);

    assert_eq!(output.iter().filter(|l| *l == disclaimer).count(), 89);
    assert_eq!(output.len(), 92);
}

#[test]
fn test_custom_threshold() {
    let output = remove_high_frequency_lines(lines(&["x", "y", "x", "z", "x"]), 3);
    assert_eq!(output, lines(&["y", "z"]));
}

// --- Loading ---

#[test]
fn test_load_lines_normalizes_newlines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Rob\r\nSkype: rob.james123\n\nCheers").unwrap();

    let loaded = load_lines(file.path()).unwrap();
    assert_eq!(loaded, lines(&["Rob", "Skype: rob.james123", "", "Cheers"]));
}

#[test]
fn test_load_lines_tolerates_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"caf\xe9\nRob\n").unwrap();

    let loaded = load_lines(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1], "Rob");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_lines(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(ExtractError::Load { .. })));
}

#[test]
fn test_split_lines() {
    assert_eq!(split_lines("a\nb\r\nc\n"), lines(&["a", "b", "c"]));
}
