//! Device response decoding.
//!
//! Every reply carries an `error_code` field where zero means success; the
//! remaining fields vary per command and are kept as raw JSON for typed
//! access by the caller. The LAN discovery endpoint speaks a slightly
//! different dialect (`ReturnCode` plus a `DeviceList`), decoded here as
//! well.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PixooError, Result};

/// Decoded reply to one command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceResponse {
    /// Zero on success.
    #[serde(default)]
    pub error_code: i64,
    /// All remaining reply fields, keyed as on the wire.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

impl DeviceResponse {
    /// A successful reply with no extra fields, as produced for operations
    /// that never reached a device (simulated mode).
    pub fn ok() -> Self {
        Self::default()
    }

    /// Whether the device accepted the command.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Promotes a non-zero `error_code` into [`PixooError::Protocol`].
    ///
    /// # Errors
    ///
    /// Returns [`PixooError::Protocol`] carrying the command name and the
    /// device's error code.
    pub fn check(self, command: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PixooError::Protocol {
                command: command.to_string(),
                code: self.error_code,
            })
        }
    }

    /// Raw reply field by wire key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Reply field as a `u32`, when present and numeric.
    pub fn u32_field(&self, key: &str) -> Option<u32> {
        self.fields
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
    }

    /// The `PicId` field of a `Draw/GetHttpGifId` reply.
    pub fn pic_id(&self) -> Option<u32> {
        self.u32_field("PicId")
    }
}

/// One device announced by the LAN discovery endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveredDevice {
    /// Advertised device name.
    #[serde(rename = "DeviceName", default)]
    pub name: String,
    /// Address on the local network.
    #[serde(rename = "DevicePrivateIP")]
    pub ip: String,
    /// Vendor-assigned device id.
    #[serde(rename = "DeviceId", default)]
    pub id: i64,
    /// Hardware address.
    #[serde(rename = "DeviceMac", default)]
    pub mac: String,
}

/// Reply of the LAN discovery endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryResponse {
    /// Zero on success.
    #[serde(rename = "ReturnCode", default)]
    pub return_code: i64,
    /// Devices answering on the local network.
    #[serde(rename = "DeviceList", default)]
    pub devices: Vec<DiscoveredDevice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply_with_fields() {
        let response: DeviceResponse =
            serde_json::from_str(r#"{"error_code": 0, "PicId": 17}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.pic_id(), Some(17));
        assert_eq!(response.u32_field("Brightness"), None);
    }

    #[test]
    fn test_check_passes_success_through() {
        let response = DeviceResponse::ok();
        assert!(response.check("Channel/SetBrightness").is_ok());
    }

    #[test]
    fn test_check_surfaces_error_code() {
        let response: DeviceResponse = serde_json::from_str(r#"{"error_code": 3}"#).unwrap();
        let error = response.check("Draw/SendHttpGif").unwrap_err();
        match error {
            PixooError::Protocol { command, code } => {
                assert_eq!(command, "Draw/SendHttpGif");
                assert_eq!(code, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_error_code_defaults_to_success() {
        let response: DeviceResponse = serde_json::from_str(r#"{"PicId": 1}"#).unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_discovery_reply_decodes_device_list() {
        let raw = r#"{
            "ReturnCode": 0,
            "DeviceList": [
                {
                    "DeviceName": "Pixoo64",
                    "DeviceId": 300000001,
                    "DevicePrivateIP": "192.168.1.50",
                    "DeviceMac": "aabbccddeeff"
                },
                {
                    "DeviceName": "TimesGate",
                    "DevicePrivateIP": "192.168.1.51"
                }
            ]
        }"#;
        let response: DiscoveryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.return_code, 0);
        assert_eq!(response.devices.len(), 2);
        assert_eq!(response.devices[0].ip, "192.168.1.50");
        assert_eq!(response.devices[0].name, "Pixoo64");
        assert_eq!(response.devices[1].id, 0);
    }

    #[test]
    fn test_empty_discovery_reply() {
        let response: DiscoveryResponse = serde_json::from_str(r#"{"ReturnCode": 0}"#).unwrap();
        assert!(response.devices.is_empty());
    }
}
