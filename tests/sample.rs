use minicart::prelude::*;

use std::io::Write;


const IRIS: &str = "\
5.1,3.5,1.4,0.2,Iris-setosa
4.9,3.0,1.4,0.2,Iris-setosa
4.7,3.2,1.3,0.2,Iris-setosa
5.0,3.6,1.4,0.2,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.4,3.2,4.5,1.5,Iris-versicolor
6.9,3.1,4.9,1.5,Iris-versicolor
5.5,2.3,4.0,1.3,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
5.8,2.7,5.1,1.9,Iris-virginica
7.1,3.0,5.9,2.1,Iris-virginica
6.3,2.9,5.6,1.8,Iris-virginica
not,a,number,row,Iris-setosa

";


fn iris_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(IRIS.as_bytes()).unwrap();
    file
}


#[test]
fn read_iris_rows() {
    let file = iris_file();
    let sample = SampleReader::new()
        .file(file.path())
        .classes(IRIS_CLASSES)
        .n_features(4)
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (12, 4));
    assert_eq!(sample.skipped(), 1);
    assert_eq!(sample.at(4), (&[7.0, 3.2, 4.7, 1.4][..], 1));
    assert_eq!(sample.class_name(2), Some("Iris-virginica"));
}


#[test]
fn header_row_is_skipped() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,b,class").unwrap();
    writeln!(file, "1.0,2.0,x").unwrap();
    writeln!(file, "3.0,4.0,y").unwrap();

    let sample = SampleReader::new()
        .file(file.path())
        .has_header(true)
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.skipped(), 0);
    assert_eq!(sample.labels(), &[0, 1]);
}


#[test]
fn reader_errors() {
    let err = SampleReader::<&str>::new().read().unwrap_err();
    assert!(matches!(err, SampleError::MissingFile));

    let err = SampleReader::new()
        .file("/definitely/not/a/file.csv")
        .read()
        .unwrap_err();
    assert!(matches!(err, SampleError::Io(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x,y,z").unwrap();
    let err = SampleReader::new()
        .file(file.path())
        .read()
        .unwrap_err();
    assert!(matches!(err, SampleError::Empty { skipped: 1 }));
}


#[test]
fn holdout_is_reproducible() {
    let file = iris_file();
    let sample = SampleReader::new()
        .file(file.path())
        .classes(IRIS_CLASSES)
        .read()
        .unwrap();

    let (train_a, test_a) = train_test_split(&sample, 0.75, 7).unwrap();
    let (train_b, test_b) = train_test_split(&sample, 0.75, 7).unwrap();
    assert_eq!(train_a, train_b);
    assert_eq!(test_a, test_b);
    assert_eq!(train_a.shape().0, 9);
    assert_eq!(test_a.shape().0, 3);

    // Every row ends up on exactly one side.
    let mut rows = train_a.data().iter()
        .chain(test_a.data())
        .cloned()
        .collect::<Vec<_>>();
    let mut all = sample.data().to_vec();
    let key = |a: &Vec<f64>, b: &Vec<f64>| a.partial_cmp(b).unwrap();
    rows.sort_by(key);
    all.sort_by(key);
    assert_eq!(rows, all);

    assert!(matches!(
        HoldOut::new(&sample).train_ratio(1.0),
        Err(SampleError::InvalidRatio(_))
    ));
}


#[test]
fn holdout_without_shuffle_keeps_file_order() {
    let file = iris_file();
    let sample = SampleReader::new()
        .file(file.path())
        .classes(IRIS_CLASSES)
        .read()
        .unwrap();

    let (train, test) = HoldOut::new(&sample)
        .train_ratio(0.5)
        .unwrap()
        .split()
        .unwrap();
    assert_eq!(train.data(), &sample.data()[..6]);
    assert_eq!(test.data(), &sample.data()[6..]);
    assert_eq!(test.class_names(), sample.class_names());
}


#[test]
fn holdout_rejects_an_empty_training_side() {
    let sample = Sample::new(vec![vec![1.0]], vec![0]).unwrap();
    let result = HoldOut::new(&sample).split();
    assert!(matches!(
        result,
        Err(SampleError::EmptyTrain { n_sample: 1, .. })
    ));
    assert!(train_test_split(&sample, 0.5, 7).is_err());

    // One training row is enough.
    let sample = Sample::new(vec![vec![1.0], vec![2.0]], vec![0, 1]).unwrap();
    let (train, test) = train_test_split(&sample, 0.5, 7).unwrap();
    assert_eq!(train.shape().0, 1);
    assert_eq!(test.shape().0, 1);
}


#[test]
fn non_utf8_rows_in_a_file_are_skipped() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"1.0,2.0,a\n\xff\xfe,3.0,b\n4.0,5.0,b\n").unwrap();

    let sample = SampleReader::new()
        .file(file.path())
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample.skipped(), 1);
}


#[test]
fn train_and_evaluate_on_iris_rows() {
    let file = iris_file();
    let sample = SampleReader::new()
        .file(file.path())
        .classes(IRIS_CLASSES)
        .read()
        .unwrap();

    let mut tree = DecisionTree::new();
    tree.fit(sample.data(), sample.labels(), 10).unwrap();

    let predictions = tree.predict_all(sample.data()).unwrap();
    assert_eq!(accuracy(sample.labels(), &predictions), Ok(1.0));
}


#[test]
fn accuracy_checks_lengths() {
    assert_eq!(accuracy(&[0, 1, 2, 2], &[0, 1, 1, 2]), Ok(0.75));
    assert!(matches!(
        accuracy(&[0, 1], &[0]),
        Err(TreeError::DimensionMismatch { .. })
    ));
    assert_eq!(accuracy(&[], &[]), Err(TreeError::EmptyDataset));
}


#[test]
fn sample_new_validates() {
    let sample = Sample::new(vec![vec![1.0], vec![2.0]], vec![0, 1])
        .unwrap()
        .with_class_names(["neg", "pos"]);
    assert_eq!(sample.class_name(1), Some("pos"));
    assert_eq!(sample.class_name(2), None);

    assert!(Sample::new(vec![vec![1.0]], vec![0, 1]).is_err());
}
