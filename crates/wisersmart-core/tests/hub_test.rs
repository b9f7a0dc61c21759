#![allow(clippy::unwrap_used, clippy::float_cmp)]
// Integration tests for `Hub` against a mocked hub.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

use wisersmart_api::paths;
use wisersmart_core::{Command, CommandResult, CoreError, HcMode, HomeMode, Hub, HubConfig, PowerType};

// ── Fixtures ────────────────────────────────────────────────────────

fn properties(host_name: &str) -> Value {
    json!({
        "propertyDetails": [
            { "name": "ehc.gw.host.name", "value": host_name },
            { "name": "ehc.wcs2.cloud.status", "value": "connected" },
            { "name": "ehc.version.macaddress", "value": "00:11:22:33:44:55" }
        ]
    })
}

fn home_mode() -> Value {
    json!({ "homeMode": "schedule" })
}

fn groups() -> Value {
    json!({
        "groupDetails": [
            { "name": "Lounge", "visible": true },
            { "name": "Boiler", "visible": false }
        ]
    })
}

fn devices() -> Value {
    json!({
        "device": [
            {
                "name": "Valve Lounge",
                "modelId": "EH-ZB-VACT",
                "location": "Lounge",
                "status": "online",
                "powerType": "Battery",
                "batteryLevel": "Normal"
            },
            {
                "name": "Plug Kitchen",
                "modelId": "EH-ZB-SPD",
                "location": "Kitchen",
                "status": "online",
                "powerType": "Mains",
                "batteryLevel": "Normal"
            }
        ]
    })
}

fn temperatures() -> Value {
    json!({
        "locationTempDetails": [
            { "locationName": "Lounge", "currentValue": 19.5, "targetValue": 21.0 }
        ]
    })
}

fn appliances() -> Value {
    json!({
        "applianceDetails": [
            { "applianceName": "Water heater", "applianceId": 12, "state": true, "powerConsump": 1500 }
        ]
    })
}

/// Mount all six read endpoints, each expected `times` times.
async fn mount_reads(server: &MockServer, host_name: &str, times: impl Into<Times> + Clone) {
    let routes = [
        (paths::GET_PROPERTIES, properties(host_name)),
        (paths::GET_HOME_MODE, home_mode()),
        (paths::GET_GROUPS, groups()),
        (paths::DEVICE_LIST, devices()),
        (paths::GET_ALL_LOC_TEMP, temperatures()),
        (paths::GET_APPLIANCES, appliances()),
    ];
    for (route, body) in routes {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times.clone())
            .mount(server)
            .await;
    }
}

fn config_for(server: &MockServer) -> HubConfig {
    HubConfig::new(
        server.uri(),
        "admin",
        SecretString::from("secret".to_string()),
    )
}

// ── Snapshot behaviour ──────────────────────────────────────────────

#[tokio::test]
async fn connect_loads_snapshot_once() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let hub = Hub::connect(config_for(&server)).await.unwrap();

    assert_eq!(hub.controller_name().await.unwrap().as_deref(), Some("Hub1"));
    assert_eq!(hub.cloud_connection().await.unwrap().as_deref(), Some("connected"));
    assert_eq!(hub.mac_address().await.unwrap().as_deref(), Some("00:11:22:33:44:55"));
    assert_eq!(hub.home_mode().await.unwrap(), Some(HomeMode::Schedule));
    assert_eq!(hub.rooms().await.unwrap(), vec!["Lounge".to_string()]);
    assert!(hub.last_refresh().is_some());
    assert!(hub.data_age().is_some());
    // Dropping the server verifies each read endpoint was hit once.
}

#[tokio::test]
async fn first_read_triggers_lazy_refresh() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    assert!(hub.snapshot().is_none());

    let room = hub.room("Lounge").await.unwrap().unwrap();
    assert_eq!(room.current_temperature, Some(19.5));
    assert_eq!(room.target_temperature, Some(21.0));
    assert!(hub.room("Attic").await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_first_reads_share_one_refresh() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let (a, b) = tokio::join!(hub.rooms(), hub.devices());

    assert_eq!(a.unwrap().len(), 1);
    assert_eq!(b.unwrap().len(), 2);
}

#[tokio::test]
async fn device_battery_level_only_for_battery_devices() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let hub = Hub::new(config_for(&server)).unwrap();

    let valve = hub.device("Valve Lounge").await.unwrap().unwrap();
    assert_eq!(valve.power_type, Some(PowerType::Battery));
    assert_eq!(valve.battery_level.as_deref(), Some("Normal"));

    let plug = hub.device("Plug Kitchen").await.unwrap().unwrap();
    assert_eq!(plug.battery_level, None);
}

#[tokio::test]
async fn invalidate_forces_refetch() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 2).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    hub.appliances().await.unwrap();
    hub.appliances().await.unwrap();

    hub.invalidate();
    assert!(hub.snapshot().is_none());

    let appliances = hub.appliances().await.unwrap();
    assert_eq!(appliances[0].name, "Water heater");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let hub = Hub::connect(config_for(&server)).await.unwrap();
    let before = hub.snapshot().unwrap();

    // Second round: properties change, but the last endpoint fails.
    server.reset().await;
    Mock::given(method("POST"))
        .and(path(paths::GET_PROPERTIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(properties("Hub2")))
        .mount(&server)
        .await;
    for route in [
        paths::GET_HOME_MODE,
        paths::GET_GROUPS,
        paths::DEVICE_LIST,
        paths::GET_ALL_LOC_TEMP,
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path(paths::GET_APPLIANCES))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = hub.refresh().await.unwrap_err();
    assert!(
        matches!(err, CoreError::UnknownServer { status: Some(500), .. }),
        "expected UnknownServer, got: {err:?}"
    );

    let after = hub.snapshot().unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(hub.controller_name().await.unwrap().as_deref(), Some("Hub1"));
}

#[tokio::test]
async fn refresh_timeout_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let config = config_for(&server).with_timeout(Duration::from_millis(300));
    let hub = Hub::connect(config).await.unwrap();

    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(properties("Hub2"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = hub.refresh().await.unwrap_err();
    assert!(matches!(err, CoreError::Timeout { .. }), "got: {err:?}");
    assert_eq!(
        hub.snapshot().unwrap().controller_name(),
        Some("Hub1")
    );
}

#[tokio::test]
async fn unauthorized_surfaces_from_accessor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let err = hub.rooms().await.unwrap_err();
    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got: {err:?}");
    assert!(hub.snapshot().is_none());
}

#[tokio::test]
async fn malformed_reply_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let err = hub.controller_name().await.unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }), "got: {err:?}");
}

// ── Commands ────────────────────────────────────────────────────────

async fn expect_loc_temp(server: &MockServer, value: f64) {
    Mock::given(method("POST"))
        .and(path(paths::SET_LOC_TEMP))
        .and(body_json(json!({
            "targetTemp": [{ "locationId": "Lounge", "targetValue": value }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn room_temperature_above_maximum_is_clamped() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    expect_loc_temp(&server, 35.0).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let sent = hub.set_room_temperature("Lounge", 50.0).await.unwrap();
    assert_eq!(sent, 35.0);
}

#[tokio::test]
async fn room_temperature_below_minimum_is_clamped() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    expect_loc_temp(&server, 0.5).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    assert_eq!(hub.set_room_temperature("Lounge", 0.0).await.unwrap(), 0.5);
}

#[tokio::test]
async fn room_temperature_rejects_nan() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let err = hub.set_room_temperature("Lounge", f64::NAN).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput { .. }));
}

#[tokio::test]
async fn home_mode_holiday_sets_anti_freeze_and_end_time() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    Mock::given(method("POST"))
        .and(path(paths::SET_HOME_MODE))
        .and(body_json(json!({
            "hcMode": "heating",
            "homeMode": "holiday",
            "antiFreeze": true,
            "endTime": 1_700_000_000
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let come_back = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    hub.set_home_mode(HcMode::Heating, &HomeMode::Holiday, Some(come_back))
        .await
        .unwrap();
}

#[tokio::test]
async fn home_mode_manual_sends_null_end_time() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    Mock::given(method("POST"))
        .and(path(paths::SET_HOME_MODE))
        .and(body_json(json!({
            "hcMode": "cooling",
            "homeMode": "manual",
            "antiFreeze": false,
            "endTime": null
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let result = hub
        .execute(Command::SetHomeMode {
            hc_mode: HcMode::Cooling,
            home_mode: HomeMode::Manual,
            come_back: None,
        })
        .await
        .unwrap();
    assert_eq!(result, CommandResult::Ok);
}

#[tokio::test]
async fn appliance_state_sends_hub_id() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    Mock::given(method("POST"))
        .and(path(paths::SET_APPLIANCE_STATE))
        .and(body_json(json!({
            "applianceState": [{ "applianceId": 12, "state": false }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    assert!(hub.set_appliance_state("Water heater", false).await.unwrap());
}

#[tokio::test]
async fn unknown_appliance_sends_nothing() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    Mock::given(method("POST"))
        .and(path(paths::SET_APPLIANCE_STATE))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let result = hub
        .execute(Command::SetApplianceState {
            appliance: "Sauna".into(),
            on: true,
        })
        .await
        .unwrap();
    assert_eq!(result, CommandResult::NoOp);
}

#[tokio::test]
async fn execute_reports_clamped_target() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    expect_loc_temp(&server, 35.0).await;

    let hub = Hub::new(config_for(&server)).unwrap();
    let result = hub
        .execute(Command::SetRoomTemperature {
            room: "Lounge".into(),
            temperature: 40.0,
        })
        .await
        .unwrap();
    assert_eq!(result, CommandResult::TargetTemperature(35.0));
}

#[tokio::test]
async fn commands_on_empty_cache_refresh_once() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;
    expect_loc_temp(&server, 21.0).await;
    Mock::given(method("POST"))
        .and(path(paths::SET_HOME_MODE))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let hub = Hub::new(config_for(&server)).unwrap();
    assert!(hub.snapshot().is_none());

    hub.set_home_mode(HcMode::Heating, &HomeMode::Manual, None)
        .await
        .unwrap();
    assert!(hub.snapshot().is_some());

    // The second command reuses the snapshot loaded by the first.
    hub.set_room_temperature("Lounge", 21.0).await.unwrap();
}

#[tokio::test]
async fn command_refresh_failure_sends_no_write() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(paths::GET_PROPERTIES))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;
    for route in [paths::SET_HOME_MODE, paths::SET_LOC_TEMP] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let hub = Hub::new(config_for(&server)).unwrap();

    let err = hub
        .set_home_mode(HcMode::Heating, &HomeMode::Manual, None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got: {err:?}");

    let err = hub.set_room_temperature("Lounge", 20.0).await.unwrap_err();
    assert!(matches!(err, CoreError::AuthenticationFailed { .. }), "got: {err:?}");
    assert!(hub.snapshot().is_none());
}

// ── Background refresh ──────────────────────────────────────────────

#[tokio::test]
async fn disconnect_stops_background_refresh() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let config = config_for(&server).with_refresh_interval(3600);
    let hub = Hub::connect(config).await.unwrap();
    hub.disconnect().await;

    // Cached data survives disconnect.
    assert_eq!(hub.rooms().await.unwrap(), vec!["Lounge".to_string()]);
}

async fn wait_for_refresh(hub: &Hub) {
    let mut rx = hub.subscribe_last_refresh();
    tokio::time::timeout(Duration::from_secs(5), rx.changed())
        .await
        .expect("no periodic refresh within 5s")
        .unwrap();
}

#[tokio::test]
async fn background_task_refreshes_on_each_tick() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 2..).await;

    let config = config_for(&server).with_refresh_interval(1);
    let hub = Hub::connect(config).await.unwrap();
    let first = hub.snapshot().unwrap();

    wait_for_refresh(&hub).await;

    let second = hub.snapshot().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(second.fetched_at > first.fetched_at);
    hub.disconnect().await;
}

#[tokio::test]
async fn failing_tick_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    mount_reads(&server, "Hub1", 1).await;

    let config = config_for(&server).with_refresh_interval(1);
    let hub = Hub::connect(config).await.unwrap();
    let before = hub.snapshot().unwrap();

    server.reset().await;
    Mock::given(method("POST"))
        .and(path(paths::GET_PROPERTIES))
        .respond_with(ResponseTemplate::new(500))
        .expect(1..)
        .mount(&server)
        .await;

    // Wait until the task has hit the failing endpoint at least once.
    tokio::time::timeout(Duration::from_secs(5), async {
        while server.received_requests().await.unwrap_or_default().is_empty() {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await
    .unwrap();

    let after = hub.snapshot().unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(hub.controller_name().await.unwrap().as_deref(), Some("Hub1"));
    hub.disconnect().await;
}
