use minicart::Config;
use minicart::config::Overrides;
use minicart::decision_tree::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_SPLIT_SIZE};

use std::io::{ErrorKind, Write};


fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}


#[test]
fn flags_win_over_the_file() {
    let file = config_file(r#"{ "max_depth": 3, "seed": 5, "has_header": true }"#);
    let overrides = Overrides {
        max_depth: Some(7),
        iris: true,
        ..Overrides::default()
    };
    let config = Config::load(Some(file.path()))
        .unwrap()
        .merge(&overrides);

    assert_eq!(config.max_depth, 7);
    assert_eq!(config.seed, 5);
    assert!(config.iris);
    // An unset flag does not turn a file value off.
    assert!(config.has_header);
}


#[test]
fn omitted_fields_take_the_defaults() {
    let file = config_file(r#"{ "train_ratio": 0.5 }"#);
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.train_ratio, 0.5);
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(config.min_split_size, DEFAULT_MIN_SPLIT_SIZE);
    assert_eq!(config, Config { train_ratio: 0.5, ..Config::default() });

    let config = Config::load(None::<&str>)
        .unwrap()
        .merge(&Overrides::default());
    assert_eq!(config, Config::default());
}


#[test]
fn unknown_fields_are_rejected() {
    let file = config_file(r#"{ "max_depht": 3 }"#);
    let err = Config::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let file = config_file("{ not json");
    let err = Config::from_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let err = Config::load(Some("/no/such/minicart.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
