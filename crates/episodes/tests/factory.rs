use episodes::EpisodeFactory;

#[test]
fn streams_records_in_file_order() {
    let factory = EpisodeFactory::new("tests/data/problems.jsonl").unwrap();
    let episodes: Vec<_> = factory
        .episodes()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(episodes.len(), 4);
    assert_eq!(episodes[0].solution, "8");
    assert_eq!(episodes[2].problem, "Display Hello world on screen");
}

#[test]
fn fetches_a_single_record_by_index() {
    let factory = EpisodeFactory::new("tests/data/problems.jsonl").unwrap();
    assert_eq!(factory.episode(3).unwrap().solution, "hi");
    assert!(factory.episode(4).is_err());
}

#[test]
fn rejects_non_jsonl_paths() {
    assert!(EpisodeFactory::new("tests/data/problems.json").is_err());
    assert!(EpisodeFactory::new("tests/factory.rs").is_err());
}

#[test]
fn rejects_missing_files() {
    assert!(EpisodeFactory::new("tests/data/absent.jsonl").is_err());
}

#[test]
fn malformed_lines_fail_where_they_occur() {
    let factory = EpisodeFactory::new("tests/data/broken.jsonl").unwrap();
    let mut iter = factory.episodes().unwrap();
    assert!(iter.next().unwrap().is_ok());
    let err = iter.next().unwrap().unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
