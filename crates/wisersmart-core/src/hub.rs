// ── Hub facade ──
//
// Lifecycle, caching, and command routing for one Wiser Smart hub.
// Reads are served from the current snapshot; the first read on an
// empty cache triggers a refresh.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use wisersmart_api::{SetHomeModeRequest, TransportConfig, WiserClient};

use crate::command::{Command, CommandResult};
use crate::config::HubConfig;
use crate::error::CoreError;
use crate::model::{Appliance, Device, HcMode, HomeMode, Room};
use crate::store::{Snapshot, SnapshotStore, fetch_snapshot};
use crate::temperature::clamp_temperature;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<HubInner>`. All clones share one client,
/// one snapshot cache, and one refresh gate.
#[derive(Clone)]
pub struct Hub {
    inner: Arc<HubInner>,
}

struct HubInner {
    config: HubConfig,
    client: WiserClient,
    store: SnapshotStore,
    /// Held for the duration of a refresh; at most one runs at a time.
    refresh_gate: Mutex<()>,
    cancel: CancellationToken,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Hub {
    /// Create a hub handle. Performs no I/O; the first read fetches.
    pub fn new(config: HubConfig) -> Result<Self, CoreError> {
        let base_url = WiserClient::base_url_for_host(&config.host)?;
        let transport = TransportConfig::with_timeout(config.timeout);
        let client = WiserClient::new(
            base_url,
            config.username.clone(),
            config.password.clone(),
            &transport,
        )?;

        Ok(Self {
            inner: Arc::new(HubInner {
                config,
                client,
                store: SnapshotStore::new(),
                refresh_gate: Mutex::new(()),
                cancel: CancellationToken::new(),
                task_handles: Mutex::new(Vec::new()),
            }),
        })
    }

    /// Create a hub handle, load the first snapshot, and start the
    /// background refresh task if one is configured.
    pub async fn connect(config: HubConfig) -> Result<Self, CoreError> {
        let hub = Self::new(config)?;
        hub.refresh().await?;

        let interval_secs = hub.inner.config.refresh_interval_secs;
        if interval_secs > 0 {
            let task = tokio::spawn(refresh_task(
                hub.clone(),
                interval_secs,
                hub.inner.cancel.clone(),
            ));
            hub.inner.task_handles.lock().await.push(task);
        }

        info!(url = %hub.inner.client.base_url(), "connected to hub");
        Ok(hub)
    }

    /// Stop background tasks. Cached data stays readable.
    pub async fn disconnect(&self) {
        self.inner.cancel.cancel();

        let mut handles = self.inner.task_handles.lock().await;
        for handle in handles.drain(..) {
            let _ = handle.await;
        }
        debug!("disconnected");
    }

    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    // ── Snapshot lifecycle ───────────────────────────────────────────

    /// Fetch a fresh snapshot and publish it.
    ///
    /// On failure the previous snapshot is left untouched.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, CoreError> {
        let _gate = self.inner.refresh_gate.lock().await;
        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<Arc<Snapshot>, CoreError> {
        let snapshot = Arc::new(fetch_snapshot(&self.inner.client).await?);
        self.inner.store.publish(Arc::clone(&snapshot));
        info!(
            rooms = snapshot.groups.len(),
            devices = snapshot.devices.len(),
            appliances = snapshot.appliances.len(),
            "snapshot refreshed"
        );
        Ok(snapshot)
    }

    /// Return the cached snapshot, refreshing first if there is none.
    pub async fn ensure_fresh(&self) -> Result<Arc<Snapshot>, CoreError> {
        if let Some(snapshot) = self.inner.store.load() {
            return Ok(snapshot);
        }

        let _gate = self.inner.refresh_gate.lock().await;
        // Another caller may have refreshed while we waited on the gate.
        if self.inner.store.load().is_none() {
            self.refresh_locked().await?;
        }
        self.inner.store.load().ok_or(CoreError::DataUnavailable)
    }

    /// Discard the cached snapshot; the next read refetches.
    pub fn invalidate(&self) {
        self.inner.store.clear();
    }

    /// The cached snapshot without any I/O.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.inner.store.load()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.inner.store.last_refresh()
    }

    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.inner.store.data_age()
    }

    /// Receive the timestamp of every successful refresh.
    pub fn subscribe_last_refresh(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.inner.store.subscribe_last_refresh()
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub async fn controller_name(&self) -> Result<Option<String>, CoreError> {
        Ok(self.ensure_fresh().await?.controller_name().map(str::to_owned))
    }

    pub async fn cloud_connection(&self) -> Result<Option<String>, CoreError> {
        Ok(self.ensure_fresh().await?.cloud_connection().map(str::to_owned))
    }

    pub async fn mac_address(&self) -> Result<Option<String>, CoreError> {
        Ok(self.ensure_fresh().await?.mac_address().map(str::to_owned))
    }

    pub async fn home_mode(&self) -> Result<Option<HomeMode>, CoreError> {
        Ok(self.ensure_fresh().await?.home_mode.clone())
    }

    /// Names of the visible rooms.
    pub async fn rooms(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.ensure_fresh().await?.room_names())
    }

    pub async fn room(&self, name: &str) -> Result<Option<Room>, CoreError> {
        Ok(self.ensure_fresh().await?.room(name).cloned())
    }

    pub async fn devices(&self) -> Result<Vec<Device>, CoreError> {
        Ok(self.ensure_fresh().await?.devices.clone())
    }

    pub async fn device(&self, name: &str) -> Result<Option<Device>, CoreError> {
        Ok(self.ensure_fresh().await?.device(name).cloned())
    }

    pub async fn appliances(&self) -> Result<Vec<Appliance>, CoreError> {
        Ok(self.ensure_fresh().await?.appliances.clone())
    }

    pub async fn appliance(&self, name: &str) -> Result<Option<Appliance>, CoreError> {
        Ok(self.ensure_fresh().await?.appliance(name).cloned())
    }

    // ── Commands ─────────────────────────────────────────────────────
    //
    // Each command loads the snapshot first if there is none, but never
    // updates it. Call `invalidate()` or `refresh()` to observe the change.

    /// Change the house-wide mode.
    ///
    /// Frost protection is engaged only for holiday mode. `come_back` is
    /// sent as unix seconds, or `null` when absent.
    pub async fn set_home_mode(
        &self,
        hc_mode: HcMode,
        home_mode: &HomeMode,
        come_back: Option<DateTime<Utc>>,
    ) -> Result<(), CoreError> {
        self.ensure_fresh().await?;

        let request = SetHomeModeRequest {
            hc_mode: hc_mode.to_string(),
            home_mode: home_mode.as_str().to_owned(),
            anti_freeze: home_mode.is_holiday(),
            end_time: come_back.map(|t| t.timestamp()),
        };
        debug!(mode = %home_mode, %hc_mode, "setting home mode");
        self.inner.client.set_home_mode(&request).await?;
        Ok(())
    }

    /// Set a room's target temperature, clamped into the accepted range.
    ///
    /// Returns the value actually sent. Any room name is passed through
    /// to the hub as given.
    pub async fn set_room_temperature(
        &self,
        room: &str,
        temperature: f64,
    ) -> Result<f64, CoreError> {
        if !temperature.is_finite() {
            return Err(CoreError::InvalidInput {
                message: format!("temperature must be a number, got {temperature}"),
            });
        }
        self.ensure_fresh().await?;

        let target = clamp_temperature(temperature);
        debug!(room, requested = temperature, sent = target, "setting room temperature");
        self.inner.client.set_loc_temp(room, target).await?;
        Ok(target)
    }

    /// Switch an appliance on or off by name.
    ///
    /// Returns `Ok(false)` without sending anything when the snapshot has
    /// no appliance with that name (or it carries no id).
    pub async fn set_appliance_state(&self, name: &str, on: bool) -> Result<bool, CoreError> {
        let snapshot = self.ensure_fresh().await?;
        let Some(id) = snapshot.appliance(name).and_then(|a| a.id.clone()) else {
            warn!(appliance = name, "no such appliance; nothing sent");
            return Ok(false);
        };

        debug!(appliance = name, %id, on, "setting appliance state");
        self.inner.client.set_appliance_state(&id, on).await?;
        Ok(true)
    }

    /// Route a [`Command`] to the matching operation.
    pub async fn execute(&self, command: Command) -> Result<CommandResult, CoreError> {
        match command {
            Command::SetHomeMode {
                hc_mode,
                home_mode,
                come_back,
            } => {
                self.set_home_mode(hc_mode, &home_mode, come_back).await?;
                Ok(CommandResult::Ok)
            }
            Command::SetRoomTemperature { room, temperature } => {
                let sent = self.set_room_temperature(&room, temperature).await?;
                Ok(CommandResult::TargetTemperature(sent))
            }
            Command::SetApplianceState { appliance, on } => {
                if self.set_appliance_state(&appliance, on).await? {
                    Ok(CommandResult::Ok)
                } else {
                    Ok(CommandResult::NoOp)
                }
            }
        }
    }
}

// ── Background tasks ─────────────────────────────────────────────────

/// Periodically refresh the snapshot until cancelled.
async fn refresh_task(hub: Hub, interval_secs: u64, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = hub.refresh().await {
                    warn!(error = %e, "periodic refresh failed");
                }
            }
        }
    }
}
