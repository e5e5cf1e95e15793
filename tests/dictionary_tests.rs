use std::io::{Cursor, Write};
use std::path::PathBuf;

use eldrow::{
    load_dictionary, normalize_line, read_words, run, Constraints, EldrowError, Length,
    RunConfig, Selection,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

const SAMPLE_DIC: &str = "5\ncat/S\ndog\ncats\nbat\nzebra/MS\nx-ray/M\nApple\n";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_DIC.as_bytes()).unwrap();
    file
}

fn run_config(path: PathBuf, constraints: Constraints) -> RunConfig {
    RunConfig {
        dictionary: path,
        constraints,
    }
}

#[test]
fn test_normalize_strips_affix() {
    assert_eq!(normalize_line("cat/S"), "cat");
    assert_eq!(normalize_line("a/b/c"), "a");
    assert_eq!(normalize_line("/S"), "");
}

#[test]
fn test_normalize_keeps_everything_else() {
    assert_eq!(normalize_line("Dog"), "Dog");
    assert_eq!(normalize_line(" spaced "), " spaced ");
    assert_eq!(normalize_line(""), "");
}

#[test]
fn test_read_words_in_source_order() {
    let words = read_words(Cursor::new("cat/S\r\ndog\n\nbat/MS")).unwrap();
    assert_eq!(words, vec!["cat", "dog", "", "bat"]);
}

#[test]
fn test_load_dictionary_file() {
    let file = sample_file();
    let words = load_dictionary(file.path()).unwrap();
    assert_eq!(
        words,
        vec!["5", "cat", "dog", "cats", "bat", "zebra", "x-ray", "Apple"]
    );
}

#[test]
fn test_load_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.dic");
    match load_dictionary(&path).unwrap_err() {
        EldrowError::Resource { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_run_lists_matching_words() {
    let file = sample_file();
    let config = run_config(
        file.path().to_path_buf(),
        Constraints::new(Length::exact(5).unwrap()).with_list_all(true),
    );
    let selection = run(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(selection.words(), ["zebra".to_string(), "Apple".to_string()]);
}

#[test]
fn test_run_random_word_comes_from_dictionary() {
    let file = sample_file();
    let config = run_config(file.path().to_path_buf(), Constraints::new(Length::exact(3).unwrap()));
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        match run(&config, &mut rng).unwrap() {
            Selection::Single { word, .. } => {
                assert!(["cat", "dog", "bat"].contains(&word.as_str()))
            }
            other => panic!("expected a single word, got {:?}", other),
        }
    }
}

#[test]
fn test_run_pattern_allows_non_letters() {
    let file = sample_file();
    let config = run_config(
        file.path().to_path_buf(),
        Constraints::new(Length::exact(3).unwrap()).with_pattern(r"x-\w+|\d"),
    );
    let selection = run(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(selection.words(), ["5".to_string(), "x-ray".to_string()]);
}

#[test]
fn test_run_invalid_pattern_before_missing_dictionary() {
    let config = run_config(
        PathBuf::from("/nonexistent/words.dic"),
        Constraints::new(Length::Any).with_pattern("(unclosed"),
    );
    let err = run(&config, &mut StdRng::seed_from_u64(7)).unwrap_err();
    assert!(matches!(err, EldrowError::Configuration { .. }));
}

#[test]
fn test_run_missing_dictionary() {
    let config = run_config(
        PathBuf::from("/nonexistent/words.dic"),
        Constraints::new(Length::Any),
    );
    let err = run(&config, &mut StdRng::seed_from_u64(7)).unwrap_err();
    assert!(matches!(err, EldrowError::Resource { .. }));
}

#[test]
fn test_load_dictionary_with_latin1_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"cat/S\ncaf\xe9\ndog\n").unwrap();

    let words = load_dictionary(file.path()).unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(words[0], "cat");
    assert_eq!(words[2], "dog");

    let config = run_config(
        file.path().to_path_buf(),
        Constraints::new(Length::Any).with_list_all(true),
    );
    let selection = run(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(selection.words(), ["cat".to_string(), "dog".to_string()]);
}
