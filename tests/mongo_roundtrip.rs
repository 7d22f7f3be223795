//! Connection tests against MongoDB.
//!
//! The round trip needs a live server: it uses `CATSHELL_MONGO_URI` (default
//! `mongodb://localhost:27017/`) and a throwaway collection, so it never
//! touches the `cats` collection. Run it with `cargo test -- --ignored`.
//! The unreachable-server test needs no server and always runs.

use catshell::lens::cats::{
    CatAddArgs, CatAgeArgs, CatFeatureArgs, CatLens, DeleteOutcome, FindOutcome, UpdateOutcome,
};
use catshell::{CatRepository, CatshellConfig, MongoConn};

fn test_config() -> CatshellConfig {
    let mut config = CatshellConfig::new(&None).unwrap();
    config.collection = format!("cats_test_{}", std::process::id());
    config.server_selection_timeout_ms = 2000;
    config
}

#[test]
#[ignore] // This test requires a running MongoDB server
fn test_live_crud_round_trip() {
    let config = test_config();
    let conn = MongoConn::connect(&config).unwrap();
    assert!(!conn.server_version().is_empty());

    let repo = CatRepository::new(&conn);
    let lens = CatLens::new(&repo);
    lens.delete_all().unwrap();

    let added = lens
        .add(&CatAddArgs::new("Whiskers", 3, "fluffy,loud"))
        .unwrap();
    match lens.find_by_name("Whiskers").unwrap() {
        FindOutcome::Found(cat) => {
            assert_eq!(cat.id(), Some(added.id));
            assert_eq!(cat.age(), Some(3));
            assert_eq!(cat.features(), Some("fluffy,loud"));
        }
        FindOutcome::NotFound => panic!("Whiskers should be stored"),
    }

    assert_eq!(
        lens.update_age(&CatAgeArgs::new("Whiskers", 4)).unwrap(),
        UpdateOutcome::Modified
    );
    assert_eq!(
        lens.update_age(&CatAgeArgs::new("Whiskers", 4)).unwrap(),
        UpdateOutcome::Unchanged
    );
    assert_eq!(
        lens.update_age(&CatAgeArgs::new("Nobody", 4)).unwrap(),
        UpdateOutcome::NotFound
    );
    assert_eq!(
        lens.add_feature(&CatFeatureArgs::new("Whiskers", "sleepy"))
            .unwrap(),
        UpdateOutcome::Modified
    );

    let cats = lens.list_all().unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].feature(), vec!["sleepy"]);

    assert_eq!(
        lens.delete_by_name("Whiskers").unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(lens.find_by_name("Whiskers").unwrap(), FindOutcome::NotFound);
    assert_eq!(lens.delete_all().unwrap().deleted, 0);
}

#[test]
fn test_unreachable_server() {
    let config = CatshellConfig {
        mongo_uri: "mongodb://127.0.0.1:1/".to_string(),
        server_selection_timeout_ms: 200,
        ..Default::default()
    };
    match MongoConn::connect(&config) {
        Err(catshell::BootstrapError::Unreachable(_)) => {}
        Err(other) => panic!("expected unreachable, got {}", other),
        Ok(_) => panic!("nothing listens on port 1"),
    }
}
