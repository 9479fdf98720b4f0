use scenario_core::{CardFace, LocationId, ShieldCounts, ShieldKind};
use scenario_runtime::{FileLinkStore, LinkStore, RepositoryError, ScenarioService};
use tempfile::TempDir;

fn seeded(path: &std::path::Path) -> ScenarioService<FileLinkStore> {
    let service = ScenarioService::new(FileLinkStore::open(path).unwrap());
    for kind in ShieldKind::ALL {
        service
            .create_icon(None, kind.icon_short_name(), "")
            .unwrap();
    }
    service
}

#[test]
fn service_state_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("store.json");

    let (scenario, card) = {
        let service = seeded(&path);
        let scenario = service.create_scenario("Asylum").unwrap();
        let icon = service.create_icon(Some(scenario.id), "wisdom", "").unwrap();
        let stat = service
            .create_stat(scenario.id, icon.id, "Wisdom", "")
            .unwrap();
        let card = service
            .create_card(
                scenario.id,
                7,
                "Cell",
                CardFace::default(),
                CardFace::default(),
            )
            .unwrap();
        service
            .create_skill_test(card.id, stat.id, ShieldCounts::new(3, 0, 0, 0, 0))
            .unwrap();
        (scenario, card)
    };

    let reopened = ScenarioService::new(FileLinkStore::open(&path).unwrap());
    assert_eq!(reopened.load_card(card.id).unwrap(), card);
    assert_eq!(
        reopened
            .list_skill_tests(scenario.id, Default::default())
            .unwrap()
            .len(),
        1
    );
    assert_eq!(reopened.audit_icon_sets().unwrap(), vec![]);
}

#[test]
fn failed_operation_leaves_snapshot_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("store.json");
    let service = seeded(&path);
    let scenario = service.create_scenario("Asylum").unwrap();
    let before = std::fs::read(&path).unwrap();

    assert!(service.create_location(scenario.id, " ", false).is_err());
    assert!(service.create_element(scenario.id, 0, "").is_err());
    assert!(service.create_location_card(LocationId(99), "A").is_err());

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn tampered_snapshot_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("store.json");
    seeded(&path);

    let mut snapshot: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    snapshot["icons"]["next_id"] = serde_json::json!(1);
    std::fs::write(&path, serde_json::to_vec(&snapshot).unwrap()).unwrap();

    assert!(matches!(
        FileLinkStore::open(&path),
        Err(RepositoryError::CorruptedData(_))
    ));
}

#[test]
fn reads_see_committed_rows_only() {
    let temp = TempDir::new().unwrap();
    let store = FileLinkStore::open(temp.path().join("store.json")).unwrap();
    let count = store
        .read(|t| Ok::<_, RepositoryError>(t.icons.len()))
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(store.path(), temp.path().join("store.json"));
}
