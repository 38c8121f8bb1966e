use super::*;

fn snap(wmc: i64, atfd: i64, tcc: f64) -> Snapshot {
    Snapshot { wmc, atfd, tcc }
}

#[test]
fn default_thresholds() {
    let t = Thresholds::default();
    assert_eq!(t.wmc, 47);
    assert_eq!(t.atfd, 5);
    assert!((t.tcc - 0.3).abs() < f64::EPSILON);
}

#[test]
fn all_three_is_god() {
    let t = Thresholds::default();
    assert_eq!(classify(&snap(48, 6, 0.29), &t), Verdict::God);
}

#[test]
fn thresholds_are_strict() {
    let t = Thresholds::default();
    assert_eq!(classify(&snap(47, 5, 0.3), &t), Verdict::Normal);
    assert_eq!(classify(&snap(47, 6, 0.1), &t), Verdict::DemiGod);
}

#[test]
fn exactly_two_is_demi_god() {
    let t = Thresholds::default();
    assert_eq!(classify(&snap(100, 9, 0.8), &t), Verdict::DemiGod);
    assert_eq!(classify(&snap(100, 1, 0.1), &t), Verdict::DemiGod);
    assert_eq!(classify(&snap(3, 9, 0.1), &t), Verdict::DemiGod);
}

#[test]
fn one_or_none_is_normal() {
    let t = Thresholds::default();
    assert_eq!(classify(&snap(100, 0, 0.9), &t), Verdict::Normal);
    assert_eq!(classify(&snap(1, 0, 0.9), &t), Verdict::Normal);
}

#[test]
fn null_tcc_never_counts_as_low_cohesion() {
    let t = Thresholds::default();
    assert!(is_null_tcc(TCC_NULL));
    assert!(!is_null_tcc(0.5));
    assert_eq!(classify(&snap(100, 9, TCC_NULL), &t), Verdict::DemiGod);
}

#[test]
fn custom_thresholds() {
    let t = Thresholds {
        wmc: 10,
        atfd: 2,
        tcc: 0.5,
    };
    assert_eq!(classify(&snap(11, 3, 0.4), &t), Verdict::God);
}

#[test]
fn verdict_labels() {
    assert_eq!(Verdict::God.label(), "GOD");
    assert_eq!(Verdict::DemiGod.label(), "DEMI-GOD");
    assert_eq!(Verdict::Normal.label(), "normal");
}

#[test]
fn assess_uses_latest_snapshot() {
    let mut block = ClassBlock::new("Site");
    block.push_snapshot(snap(10, 1, 0.9));
    block.push_snapshot(snap(60, 8, 0.1));
    let v = assess_block(&block, &Thresholds::default()).unwrap();
    assert_eq!(v.class, "Site");
    assert_eq!(v.snapshots, 2);
    assert_eq!(v.latest.wmc, 60);
    assert_eq!(v.verdict, Verdict::God);
}

#[test]
fn assess_single_snapshot() {
    let mut block = ClassBlock::new("Once");
    block.push_snapshot(snap(60, 8, 0.1));
    assert!(assess_block(&block, &Thresholds::default()).is_some());
}

#[test]
fn assess_empty_block() {
    let block = ClassBlock::new("Empty");
    assert!(assess_block(&block, &Thresholds::default()).is_none());
}
