use colortoday_core::db::{open_db, open_db_in_memory};
use colortoday_core::{DateKey, FillRepository, HexColor, RepoError, SqliteFillRepository};

fn day(raw: &str) -> DateKey {
    DateKey::parse(raw).unwrap()
}

fn color(raw: &str) -> HexColor {
    HexColor::parse(raw).unwrap()
}

#[test]
fn unknown_day_loads_empty_map() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);

    let fills = repo.load_fills(&day("2024-06-15")).unwrap();
    assert!(fills.is_empty());
}

#[test]
fn save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);
    let today = day("2024-06-15");

    repo.save_fill(&today, "shape-3", &color("#4bb58f")).unwrap();
    repo.save_fill(&today, "shape-12", &color("#7232d5")).unwrap();

    let fills = repo.load_fills(&today).unwrap();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills.get("shape-3"), Some(&color("#4bb58f")));
    assert_eq!(fills.get("shape-12"), Some(&color("#7232d5")));
}

#[test]
fn save_overwrites_existing_color() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);
    let today = day("2024-06-15");

    repo.save_fill(&today, "shape-0", &color("#ffffff")).unwrap();
    repo.save_fill(&today, "shape-0", &color("#1d1d1b")).unwrap();

    let fills = repo.load_fills(&today).unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills.get("shape-0"), Some(&color("#1d1d1b")));
}

#[test]
fn days_are_isolated() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);
    let monday = day("2024-06-17");
    let tuesday = day("2024-06-18");

    repo.save_fill(&monday, "shape-1", &color("#f0643a")).unwrap();
    repo.save_fill(&tuesday, "shape-2", &color("#2a79ff")).unwrap();

    let monday_fills = repo.load_fills(&monday).unwrap();
    assert_eq!(monday_fills.len(), 1);
    assert!(monday_fills.get("shape-2").is_none());

    assert_eq!(repo.clear_fills(&monday).unwrap(), 1);
    assert!(repo.load_fills(&monday).unwrap().is_empty());
    assert_eq!(repo.load_fills(&tuesday).unwrap().len(), 1);
}

#[test]
fn clearing_an_empty_day_removes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);
    assert_eq!(repo.clear_fills(&day("2024-01-01")).unwrap(), 0);
}

#[test]
fn list_days_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);

    for raw in ["2024-06-15", "2025-01-02", "2024-12-31"] {
        repo.save_fill(&day(raw), "shape-0", &color("#ffffff")).unwrap();
    }
    repo.save_fill(&day("2025-01-02"), "shape-1", &color("#ffffff"))
        .unwrap();

    let days: Vec<String> = repo
        .list_days()
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(days, ["2025-01-02", "2024-12-31", "2024-06-15"]);
}

#[test]
fn save_rejects_foreign_shape_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFillRepository::new(&conn);

    let err = repo
        .save_fill(&day("2024-06-15"), "rect-1", &color("#ffffff"))
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidShapeId(id) if id == "rect-1"));
}

#[test]
fn load_rejects_corrupt_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO fills (date_key, shape_id, color) VALUES ('2024-06-15', 'shape-1', 'blue');",
        [],
    )
    .unwrap();
    let repo = SqliteFillRepository::new(&conn);

    let err = repo.load_fills(&day("2024-06-15")).unwrap_err();
    match err {
        RepoError::InvalidData(message) => assert!(message.contains("fills.color")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fills_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fills.db");
    let today = day("2024-06-15");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteFillRepository::new(&conn);
        repo.save_fill(&today, "shape-21", &color("#ff6b9a")).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteFillRepository::new(&conn);
    assert_eq!(
        repo.load_fills(&today).unwrap().get("shape-21"),
        Some(&color("#ff6b9a"))
    );
}
