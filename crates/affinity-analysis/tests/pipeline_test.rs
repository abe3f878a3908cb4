//! End-to-end pipeline tests: raw rows through ranked rules, plus the
//! SQLite-backed round trip.

use affinity_analysis::pipeline::run_analysis;
use affinity_core::types::RawTransactionRow;
use affinity_core::{AnalysisConfig, AnalysisError};

fn row(order: &str, item: &str, category: &str) -> RawTransactionRow {
    RawTransactionRow::new(order, item, category)
}

/// O1:{A,B}, O2:{A,B,C}, O3:{A}: the worked scenario.
fn scenario_rows() -> Vec<RawTransactionRow> {
    vec![
        row("O1", "A", "x"),
        row("O1", "B", "y"),
        row("O2", "A", "x"),
        row("O2", "B", "y"),
        row("O2", "C", "y"),
        row("O3", "A", "x"),
    ]
}

fn open_config() -> AnalysisConfig {
    AnalysisConfig {
        min_basket_size: 0,
        max_basket_size: None,
        min_support: 0.0,
        min_confidence: 0.0,
        min_lift: 0.0,
        top_n: None,
    }
}

#[test]
fn scenario_produces_expected_scores() {
    let report = run_analysis(scenario_rows(), &open_config()).unwrap();

    assert_eq!(report.orders_total, 3);
    assert_eq!(report.candidate_pairs, 3);

    let ab = report
        .rules
        .iter()
        .find(|r| r.product_1 == "A" && r.product_2 == "B")
        .expect("rule (A, B) must be scored");
    assert_eq!(ab.orders, 2);
    assert!((ab.support - 2.0 / 3.0).abs() < 1e-12);
    assert!((ab.confidence - 2.0 / 3.0).abs() < 1e-12);
    assert!((ab.lift - 1.0).abs() < 1e-12);
}

#[test]
fn default_thresholds_exclude_independent_pairs() {
    // Under the defaults (lift strictly above 1.0), the independent
    // (A, B) pair from the scenario is filtered out even though its
    // support and confidence pass.
    let report = run_analysis(scenario_rows(), &AnalysisConfig::default()).unwrap();
    assert!(report
        .rules
        .iter()
        .all(|r| !(r.product_1 == "A" && r.product_2 == "B")));
}

#[test]
fn basket_size_window_excludes_large_orders() {
    let mut rows = vec![row("small", "A", "x"), row("small", "B", "x")];
    for i in 0..11 {
        rows.push(row("big", &format!("item_{i}"), "x"));
    }

    let config = AnalysisConfig {
        max_basket_size: Some(10),
        ..open_config()
    };
    let report = run_analysis(rows, &config).unwrap();

    assert_eq!(report.orders_total, 2);
    assert_eq!(report.baskets_in_window, 1);
    // Only the (A, B) pair from the small order survives enumeration.
    assert_eq!(report.candidate_pairs, 1);
}

#[test]
fn empty_input_signals_empty_dataset() {
    assert!(matches!(
        run_analysis(Vec::new(), &AnalysisConfig::default()),
        Err(AnalysisError::EmptyDataset)
    ));
}

#[test]
fn top_n_truncates_after_ranking() {
    let rows = vec![
        // (A, B) in two orders, (C, D) in one.
        row("o1", "A", "x"),
        row("o1", "B", "x"),
        row("o2", "A", "x"),
        row("o2", "B", "x"),
        row("o3", "C", "x"),
        row("o3", "D", "x"),
    ];
    let config = AnalysisConfig {
        top_n: Some(1),
        ..open_config()
    };

    let report = run_analysis(rows, &config).unwrap();
    assert_eq!(report.rules.len(), 1);
    // The highest-support pair is the one that survives the cut.
    assert_eq!(report.rules[0].product_1, "A");
    assert_eq!(report.rules[0].product_2, "B");
}

#[test]
fn category_pairs_counted_without_scores() {
    let rows = vec![
        row("o1", "a", "Classic"),
        row("o1", "b", "Veggie"),
        row("o2", "c", "Classic"),
        row("o2", "d", "Veggie"),
        row("o2", "e", "Supreme"),
    ];

    let report = run_analysis(rows, &open_config()).unwrap();
    let top = &report.category_pairs[0];
    assert_eq!(top.orders, 2);
    let names = [top.category_1.as_str(), top.category_2.as_str()];
    assert!(names.contains(&"Classic") && names.contains(&"Veggie"));
}

#[test]
fn sqlite_round_trip_feeds_engine_and_persists_rules() {
    use affinity_storage::connection::open_in_memory;
    use affinity_storage::migrations::run_migrations;
    use affinity_storage::queries::rules::{
        load_top_rules, replace_association_rules, AssociationRuleRecord,
    };
    use affinity_storage::queries::transactions::{
        insert_transaction_rows, load_transaction_rows,
    };

    let mut conn = open_in_memory().unwrap();
    run_migrations(&conn).unwrap();

    insert_transaction_rows(
        &mut conn,
        &[
            row("o1", "bbq_ckn_s", "Chicken"),
            row("o1", "hawaiian_m", "Classic"),
            row("o2", "bbq_ckn_s", "Chicken"),
            row("o2", "hawaiian_m", "Classic"),
            row("o3", "bbq_ckn_s", "Chicken"),
            row("o3", "veggie_veg_l", "Veggie"),
        ],
    )
    .unwrap();

    let rows = load_transaction_rows(&conn).unwrap();
    let report = run_analysis(rows, &open_config()).unwrap();
    assert!(!report.rules.is_empty());

    let records: Vec<AssociationRuleRecord> = report
        .rules
        .iter()
        .map(|r| AssociationRuleRecord {
            product_1: r.product_1.clone(),
            product_2: r.product_2.clone(),
            orders: r.orders as i64,
            support: r.support,
            confidence: r.confidence,
            confidence_reverse: r.confidence_reverse,
            lift: r.lift,
        })
        .collect();
    replace_association_rules(&mut conn, &records).unwrap();

    let loaded = load_top_rules(&conn, 10).unwrap();
    assert_eq!(loaded, records);
}
