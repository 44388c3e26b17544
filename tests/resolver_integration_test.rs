use httpmock::prelude::*;
use snf_locator::core::resolver::{LEGACY_PINCODE_KEY, LOCATION_KEY};
use snf_locator::{DeliveryLocationService, FileStore, HttpAreaLookup};
use tempfile::TempDir;

fn service_for(
    storage_path: &str,
    server: &MockServer,
) -> DeliveryLocationService<FileStore, HttpAreaLookup> {
    DeliveryLocationService::new(
        FileStore::new(storage_path.to_string()),
        HttpAreaLookup::new(server.url("")),
    )
}

#[tokio::test]
async fn test_resolve_pincode_end_to_end_with_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/areas")
            .query_param("pincode", "400001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "name": "Fort", "depot": null},
                {"id": 2, "name": "Worli", "depot": {"id": 9, "name": "D9"}}
            ]));
    });

    let service = service_for(&storage_path, &server);
    let resolved = service
        .update_location_by_pincode("400001")
        .await
        .unwrap()
        .unwrap();

    api_mock.assert();
    assert_eq!(resolved.postal_code, "400001");
    assert_eq!(resolved.depot_id.as_deref(), Some("9"));
    assert_eq!(resolved.depot_name.as_deref(), Some("D9"));
    assert_eq!(resolved.area_id, Some(2));
    assert_eq!(resolved.area_name.as_deref(), Some("Worli"));

    // the persisted payload survives a fresh service over the same directory
    let reread = service_for(&storage_path, &server);
    let current = reread.current_location().await.unwrap().unwrap();
    assert_eq!(current, resolved);
    assert!(reread.has_delivery_location().await.unwrap());

    // the raw stored payload is camelCase JSON under the namespaced key
    let raw = std::fs::read_to_string(temp_dir.path().join(LOCATION_KEY)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["postalCode"], "400001");
    assert_eq!(value["depotId"], "9");
    assert_eq!(value["areaId"], 2);
}

#[tokio::test]
async fn test_unserviceable_pincode_yields_no_location() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/areas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let service = service_for(&storage_path, &server);
    let resolved = service.update_location_by_pincode("799999").await.unwrap();

    assert_eq!(resolved, None);
    assert!(!service.has_delivery_location().await.unwrap());
    assert_eq!(service.current_depot_id().await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_pincode_short_circuits_without_network() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/areas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let service = service_for(&storage_path, &server);
    let result = service.update_location_by_pincode("40-001").await;

    assert!(result.is_err());
    assert_eq!(api_mock.hits(), 0);
    assert_eq!(service.current_location().await.unwrap(), None);
}

#[tokio::test]
async fn test_migrates_legacy_pincode_file_on_start() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    // a previous install left only the bare-pincode entry behind
    std::fs::write(temp_dir.path().join(LEGACY_PINCODE_KEY), "400001").unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/areas")
            .query_param("pincode", "400001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 5, "name": "Colaba", "depot": {"id": 12, "name": "Colaba Depot"}}
            ]));
    });

    let service = service_for(&storage_path, &server);
    service.migrate_from_legacy_pincode().await.unwrap();

    assert_eq!(
        service.current_depot_id().await.unwrap(),
        Some("12".to_string())
    );
    assert!(!temp_dir.path().join(LEGACY_PINCODE_KEY).exists());

    // a second start finds the structured record and does not hit the API again
    let service = service_for(&storage_path, &server);
    service.migrate_from_legacy_pincode().await.unwrap();

    assert_eq!(api_mock.hits(), 1);
    assert_eq!(
        service.current_depot_id().await.unwrap(),
        Some("12".to_string())
    );
}

#[tokio::test]
async fn test_migration_keeps_legacy_file_when_lookup_is_down() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    std::fs::write(temp_dir.path().join(LEGACY_PINCODE_KEY), "400001").unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/areas");
        then.status(503);
    });

    let service = service_for(&storage_path, &server);
    let result = service.migrate_from_legacy_pincode().await;

    assert!(result.is_err());
    assert!(temp_dir.path().join(LEGACY_PINCODE_KEY).exists());
}

#[tokio::test]
async fn test_new_resolution_fully_replaces_prior_location() {
    let temp_dir = TempDir::new().unwrap();
    let storage_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/areas")
            .query_param("pincode", "400001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 2, "name": "Worli", "depot": {"id": 9, "name": "D9"}}
            ]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/areas")
            .query_param("pincode", "110001");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 8, "name": "Connaught Place", "depot": {"id": 21, "name": "CP Depot"}}
            ]));
    });

    let service = service_for(&storage_path, &server);
    service.update_location_by_pincode("400001").await.unwrap();
    let replaced = service
        .update_location_by_pincode("110001")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.depot_id.as_deref(), Some("21"));

    let current = service.current_location().await.unwrap().unwrap();
    assert_eq!(current, replaced);
    assert_eq!(current.area_name.as_deref(), Some("Connaught Place"));
}
