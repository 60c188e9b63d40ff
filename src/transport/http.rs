//! Blocking HTTP transport and LAN discovery.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::error::{PixooError, Result};
use crate::protocol::{Command, DeviceResponse, DiscoveredDevice, DiscoveryResponse};

use super::Transport;

/// Vendor endpoint that lists devices sharing the caller's LAN.
pub const DISCOVERY_URL: &str = "https://app.divoom-gz.com/Device/ReturnSameLANDevice";

/// Default time allowed for one request/response round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport that posts command envelopes to `http://{address}/post`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    /// Creates a transport for the given device address (IP or hostname).
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(address: &str) -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, address))
    }

    /// Creates a transport over a caller-configured client, for custom
    /// timeouts or proxy settings.
    pub fn with_client(client: Client, address: &str) -> Self {
        Self {
            client,
            url: format!("http://{address}/post"),
        }
    }

    /// URL command envelopes are posted to.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn request(&self, command: &Command) -> Result<DeviceResponse> {
        debug!("Sending {} to {}", command.name(), self.url);
        let reply = self.client.post(&self.url).json(command).send()?;
        let decoded = reply.json::<DeviceResponse>()?;
        Ok(decoded)
    }
}

/// Queries the vendor discovery endpoint for devices on this network.
///
/// # Errors
///
/// Returns an error when the endpoint cannot be reached or replies with
/// something other than the documented device list.
pub fn discover_devices() -> Result<Vec<DiscoveredDevice>> {
    let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
    let reply: DiscoveryResponse = client.post(DISCOVERY_URL).send()?.json()?;
    if reply.return_code != 0 {
        warn!(
            "Discovery endpoint answered with code {}",
            reply.return_code
        );
    }
    Ok(reply.devices)
}

/// Address of the first device found on this network.
///
/// # Errors
///
/// Returns [`PixooError::NoDeviceFound`] when the discovery endpoint
/// reports no devices.
pub fn first_device_ip() -> Result<String> {
    let devices = discover_devices()?;
    match devices.as_slice() {
        [] => Err(PixooError::NoDeviceFound),
        [device] => Ok(device.ip.clone()),
        [device, rest @ ..] => {
            warn!(
                "Found {} devices, connecting to the first one ({})",
                rest.len() + 1,
                device.name
            );
            Ok(device.ip.clone())
        }
    }
}
