use super::*;
use ndarray::Array2;

fn test_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(0, ["f", "a", "c", "d", "g", "i", "m", "p"]),
        Transaction::new(1, ["a", "b", "c", "f", "l", "m", "o"]),
        Transaction::new(2, ["b", "f", "h", "j", "o"]),
        Transaction::new(3, ["b", "c", "k", "s", "p"]),
        Transaction::new(4, ["a", "f", "c", "e", "l", "p", "m", "n"]),
    ]
}

fn fitted_example() -> FittedFpGrowth {
    FpGrowth::new(0.09)
        .unwrap()
        .fit(test_transactions())
        .unwrap()
}

fn ic(item: &str, count: usize) -> ItemCount {
    ItemCount::new(item, count)
}

#[test]
fn test_new() {
    let fpg = FpGrowth::new(0.7).unwrap();
    assert_eq!(fpg.min_support(), 0.7);
    assert!(fpg.transactions().is_empty());

    assert_eq!(
        FpGrowth::new(1.5).unwrap_err(),
        FpGrowthError::InvalidConfiguration { min_support: 1.5 }
    );
    assert!(FpGrowth::new(-0.1).is_err());
    assert!(FpGrowth::new(f64::NAN).is_err());
    assert!(FpGrowth::new(0.0).is_ok());
    assert!(FpGrowth::new(1.0).is_ok());
}

#[test]
fn test_config_defaults() {
    let config = MinerConfig::default();
    assert_eq!(config.min_support, 0.01);
    assert!(!config.parallel_mining);

    let config = MinerConfig::new(0.3).with_parallel_mining(true);
    assert!(config.parallel_mining);
    assert!(config.validate().is_ok());

    let parsed: MinerConfig = serde_json::from_str(r#"{"min_support": 0.25}"#).unwrap();
    assert_eq!(parsed, MinerConfig::new(0.25));
}

#[test]
fn test_insert() {
    let transactions = test_transactions();
    let mut fpg = FpGrowth::new(0.7).unwrap();
    for tr in &transactions {
        fpg.insert(tr.clone()).unwrap();
    }

    assert_eq!(fpg.transactions().as_slice(), transactions.as_slice());

    let num_items: usize = transactions.iter().map(|t| t.items.len()).sum();
    assert_eq!(fpg.item_frequencies().total(), num_items);

    for (item, count) in [("f", 4), ("c", 4), ("p", 3), ("m", 3), ("b", 3), ("a", 3)] {
        assert_eq!(fpg.item_count(item), count, "count for {}", item);
    }
    assert_eq!(fpg.item_count("z"), 0);
}

#[test]
fn test_insert_missing_transaction() {
    let mut fpg = FpGrowth::new(0.1).unwrap();
    fpg.insert(Transaction::new(0, ["a", "b"])).unwrap();

    assert_eq!(fpg.insert(None::<Transaction>), Err(FpGrowthError::MissingTransaction));
    assert_eq!(fpg.transactions().len(), 1);
    assert_eq!(fpg.item_frequencies().total(), 2);
}

#[test]
fn test_insert_all_keeps_prefix_of_batch() {
    let mut fpg = FpGrowth::new(0.1).unwrap();
    let batch = vec![
        Some(Transaction::new(0, ["a"])),
        Some(Transaction::new(1, ["a", "b"])),
        None,
        Some(Transaction::new(3, ["c"])),
    ];

    assert_eq!(fpg.insert_all(batch), Err(FpGrowthError::MissingTransaction));
    assert_eq!(fpg.transactions().len(), 2);
    assert_eq!(fpg.item_count("a"), 2);
    assert_eq!(fpg.item_count("c"), 0);
}

#[test]
fn test_empty_labels_are_not_counted() {
    let mut fpg = FpGrowth::new(0.0).unwrap();
    fpg.insert(Transaction::new(0, ["a", "", "b"])).unwrap();

    assert_eq!(fpg.item_frequencies().total(), 2);
    assert_eq!(fpg.item_count(""), 0);
    assert_eq!(fpg.frequent_items(0.0), vec!["b", "a"]);
}

#[test]
fn test_frequent_items_get_sorted() {
    let mut fpg = FpGrowth::new(0.09).unwrap();
    fpg.insert_all(test_transactions()).unwrap();

    assert_eq!(fpg.frequent_items(0.09), vec!["f", "c", "p", "m", "b", "a"]);
}

#[test]
fn test_frequent_items_tie_break_is_descending_label() {
    let mut table = ItemFrequencyTable::new();
    for item in ["apple", "pear", "fig", "pear", "apple", "fig", "kiwi"] {
        table.add(item);
    }

    assert_eq!(
        table.sorted_frequent_items(0.0),
        vec!["pear", "fig", "apple", "kiwi"]
    );
}

#[test]
fn test_frequent_items_threshold_is_fractional() {
    let mut table = ItemFrequencyTable::new();
    // n = 10, counts: a=4, b=3, c=2, d=1
    for item in ["a", "a", "a", "a", "b", "b", "b", "c", "c", "d"] {
        table.add(item);
    }

    // 0.25 * 10 = 2.5; truncating to 2 would wrongly keep "c"
    assert_eq!(table.sorted_frequent_items(0.25), vec!["a", "b"]);
    assert_eq!(table.sorted_frequent_items(0.2), vec!["a", "b", "c"]);
}

#[test]
fn test_frequent_items_clamps_support() {
    let mut table = ItemFrequencyTable::new();
    for item in ["a", "b", "b"] {
        table.add(item);
    }

    assert_eq!(table.sorted_frequent_items(-3.0), vec!["b", "a"]);
    assert!(table.sorted_frequent_items(7.0).is_empty());
    assert_eq!(table.sorted_frequent_items(f64::NAN), vec!["b", "a"]);
}

#[test]
fn test_frequency_table_reset() {
    let mut table = ItemFrequencyTable::new();
    table.add("a");
    table.reset();

    assert_eq!(table.total(), 0);
    assert!(table.is_empty());
    assert_eq!(table.get("a"), 0);
}

#[test]
fn test_build_tree() {
    let fitted = fitted_example();
    let root = fitted.tree().snapshot();

    assert_eq!(root.item, ROOT_LABEL);
    assert_eq!(root.count, 0);
    assert_eq!(root.children.len(), 2);

    let f = root.child("f").unwrap();
    assert_eq!(f.count, 4);
    assert_eq!(f.children.len(), 2);

    let fc = f.child("c").unwrap();
    assert_eq!(fc.count, 3);
    let fcp = fc.child("p").unwrap();
    assert_eq!(fcp.count, 2);
    let fcpm = fcp.child("m").unwrap();
    assert_eq!(fcpm.count, 2);
    let fcpma = fcpm.child("a").unwrap();
    assert_eq!(fcpma.count, 2);
    assert!(fcpma.children.is_empty());

    let fcm = fc.child("m").unwrap();
    assert_eq!(fcm.count, 1);
    let fcmb = fcm.child("b").unwrap();
    assert_eq!(fcmb.count, 1);
    assert_eq!(fcmb.child("a").unwrap().count, 1);

    let fb = f.child("b").unwrap();
    assert_eq!(fb.count, 1);
    assert!(fb.children.is_empty());

    let c = root.child("c").unwrap();
    assert_eq!(c.count, 1);
    let cp = c.child("p").unwrap();
    assert_eq!(cp.count, 1);
    let cpb = cp.child("b").unwrap();
    assert_eq!(cpb.count, 1);
    assert!(cpb.children.is_empty());

    assert!(fitted.tree().counts_consistent());
    assert_eq!(fitted.stats().tree_nodes, 13);
}

#[test]
fn test_tree_parent_links() {
    let fitted = fitted_example();
    let tree = fitted.tree();

    assert!(tree.node(tree.root()).parent.is_none());
    for (label, child) in tree.children(tree.root()) {
        assert_eq!(tree.node(child).parent, Some(tree.root()));
        assert_eq!(tree.prefix_path(child), vec![label]);
    }
}

#[test]
fn test_header_chain_order() {
    let fitted = fitted_example();
    let tree = fitted.tree();

    let paths: Vec<Vec<&str>> = fitted
        .header_chain("b")
        .map(|id| tree.prefix_path(id))
        .collect();

    // creation order: transaction 1, then 2, then 3
    assert_eq!(
        paths,
        vec![
            vec!["f", "c", "m", "b"],
            vec!["f", "b"],
            vec!["c", "p", "b"],
        ]
    );

    assert_eq!(fitted.header_chain("f").count(), 1);
    assert_eq!(fitted.header_chain("a").count(), 2);
    assert_eq!(fitted.header_chain("d").count(), 0);
    assert_eq!(fitted.header_chain("zzz").count(), 0);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut fitted = fitted_example();
    let before = fitted.tree().clone();
    let chain_before: Vec<NodeId> = fitted.header_chain("p").collect();

    fitted.rebuild();

    assert_eq!(fitted.tree(), &before);
    assert_eq!(fitted.header_chain("p").collect::<Vec<_>>(), chain_before);
}

#[test]
fn test_conditional_pattern_bases() {
    let fitted = fitted_example();
    let bases = conditional_pattern_bases(fitted.tree(), fitted.item_frequencies(), "a");

    assert_eq!(
        bases,
        vec![
            vec![ic("f", 2), ic("c", 2), ic("p", 2), ic("m", 2)],
            vec![ic("f", 1), ic("c", 1), ic("m", 1), ic("b", 1)],
        ]
    );

    // the only occurrence of "f" sits directly under the root
    assert!(conditional_pattern_bases(fitted.tree(), fitted.item_frequencies(), "f").is_empty());
}

#[test]
fn test_pattern_base_for_each_item() {
    let fitted = fitted_example();

    assert_eq!(
        fitted.pattern_base("a").sub_pattern_base,
        vec![ic("f", 3), ic("c", 3), ic("m", 3)]
    );
    assert_eq!(fitted.pattern_base("c").sub_pattern_base, vec![ic("f", 3)]);
    assert_eq!(fitted.pattern_base("p").sub_pattern_base, vec![ic("c", 3)]);
    assert_eq!(
        fitted.pattern_base("m").sub_pattern_base,
        vec![ic("f", 3), ic("c", 3)]
    );
    assert!(fitted.pattern_base("f").sub_pattern_base.is_empty());
    assert!(fitted.pattern_base("b").sub_pattern_base.is_empty());
}

#[test]
fn test_pattern_bases_least_frequent_first() {
    let fitted = fitted_example();
    let items: Vec<&str> = fitted
        .pattern_bases()
        .iter()
        .map(|base| base.item.as_str())
        .collect();

    assert_eq!(items, vec!["a", "b", "m", "p", "c", "f"]);
}

#[test]
fn test_parallel_mining_matches_sequential() {
    let config = MinerConfig::new(0.09).with_parallel_mining(true);
    let parallel = FpGrowth::with_config(config)
        .unwrap()
        .fit(test_transactions())
        .unwrap();

    assert_eq!(parallel.pattern_bases(), fitted_example().pattern_bases());
}

#[test]
fn test_intersect_single_base_is_identity() {
    let base = vec![ic("x", 4), ic("y", 4)];
    assert_eq!(intersect_pattern_bases(&[base.clone()]), base);
}

#[test]
fn test_intersect_no_bases_is_empty() {
    assert!(intersect_pattern_bases(&[]).is_empty());
}

#[test]
fn test_intersect_keeps_shared_labels() {
    let bases = vec![
        vec![ic("a", 3), ic("b", 3), ic("c", 3), ic("d", 3)],
        vec![ic("b", 2), ic("d", 2)],
    ];
    assert_eq!(intersect_pattern_bases(&bases), vec![ic("b", 5), ic("d", 5)]);
}

#[test]
fn test_intersect_follows_first_base_order() {
    let bases = vec![
        vec![ic("d", 1), ic("b", 1)],
        vec![ic("b", 2), ic("d", 2)],
    ];
    assert_eq!(intersect_pattern_bases(&bases), vec![ic("d", 3), ic("b", 3)]);
}

#[test]
fn test_pattern_base_display() {
    let fitted = fitted_example();
    assert_eq!(
        fitted.pattern_base("a").to_string(),
        "item: a, subpattern: [(f, 3), (c, 3), (m, 3)]"
    );
    assert_eq!(fitted.pattern_base("f").to_string(), "item: f, subpattern: []");
}

#[test]
fn test_duplicate_labels_are_membership_only() {
    let fitted = FpGrowth::new(0.0)
        .unwrap()
        .fit(vec![Transaction::new(0, ["x", "x", "y"])])
        .unwrap();

    let root = fitted.tree().snapshot();
    let x = root.child("x").unwrap();
    assert_eq!(x.count, 1);
    assert_eq!(x.child("y").unwrap().count, 1);
    assert_eq!(fitted.item_frequencies().get("x"), 2);
}

#[test]
fn test_empty_session_builds_root_only() {
    let fitted = FpGrowth::new(0.5).unwrap().build_tree();

    assert!(fitted.tree().is_empty());
    assert!(fitted.canonical_order().is_empty());
    assert!(fitted.pattern_bases().is_empty());
}

#[test]
fn test_transactions_from_matrix() {
    let matrix = Array2::from_shape_vec(
        (3, 3),
        vec![
            1, 1, 0, // Transaction 0: bread, milk
            0, 1, 1, // Transaction 1: milk, eggs
            1, 0, 0, // Transaction 2: bread
        ],
    )
    .unwrap();
    let labels: Vec<String> = ["bread", "milk", "eggs"].iter().map(|s| s.to_string()).collect();

    let transactions = transactions_from_matrix(matrix.view(), &labels);
    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[1], Transaction::new(1, ["milk", "eggs"]));

    let mut fpg = FpGrowth::new(0.0).unwrap();
    fpg.insert_matrix(matrix.view(), &labels);
    assert_eq!(fpg.item_count("bread"), 2);
    assert_eq!(fpg.stats().total_transactions, 3);
}

#[test]
fn test_reset_and_stats() {
    let mut fpg = FpGrowth::new(0.09).unwrap();
    fpg.insert_all(test_transactions()).unwrap();

    let stats = fpg.stats();
    assert_eq!(stats.total_transactions, 5);
    assert_eq!(stats.total_item_occurrences, 33);
    assert_eq!(stats.frequent_items, 6);
    assert_eq!(stats.tree_nodes, 0);

    fpg.reset();
    assert_eq!(fpg.stats().total_transactions, 0);
    assert_eq!(fpg.stats().unique_items, 0);
    assert_eq!(fpg.min_support(), 0.09);
}

#[test]
fn test_snapshot_serializes() {
    let fitted = FpGrowth::new(0.0)
        .unwrap()
        .fit(vec![Transaction::new(0, ["x"])])
        .unwrap();

    let json = serde_json::to_value(fitted.tree().snapshot()).unwrap();
    assert_eq!(json["item"], ROOT_LABEL);
    assert_eq!(json["children"][0]["item"], "x");
    assert_eq!(json["children"][0]["count"], 1);
}
