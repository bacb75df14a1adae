use super::IndexPath;
use std::collections::BTreeSet;

#[test]
fn orders_by_section_then_column() {
    let mut paths = vec![
        IndexPath::new(1, 0),
        IndexPath::new(0, 5),
        IndexPath::new(0, 1),
        IndexPath::new(2, 0),
        IndexPath::new(1, 3),
    ];
    paths.sort();
    assert_eq!(
        paths,
        vec![
            IndexPath::new(0, 1),
            IndexPath::new(0, 5),
            IndexPath::new(1, 0),
            IndexPath::new(1, 3),
            IndexPath::new(2, 0),
        ]
    );
}

#[test]
fn usable_as_set_key() {
    let mut set = BTreeSet::new();
    assert!(set.insert(IndexPath::new(0, 0)));
    assert!(!set.insert(IndexPath::from((0, 0))));
    assert!(set.insert(IndexPath::new(0, 1)));
    assert_eq!(set.len(), 2);
}

#[test]
fn displays_as_bracketed_pair() {
    assert_eq!(IndexPath::new(3, 12).to_string(), "[3, 12]");
}
