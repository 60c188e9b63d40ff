//! How command envelopes reach a device.
//!
//! The [`Transport`] trait is one blocking request/response round trip.
//! [`HttpTransport`] is the real implementation; tests substitute
//! in-memory doubles implementing the same trait.

mod http;

pub use http::{discover_devices, first_device_ip, HttpTransport, DISCOVERY_URL};

use crate::error::Result;
use crate::protocol::{Command, DeviceResponse};

/// A blocking request/response channel to one device.
pub trait Transport {
    /// Sends a command envelope and decodes the reply.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be delivered or the reply
    /// is not valid JSON. A structurally valid reply is returned as is,
    /// whatever its `error_code`; promotion into an error happens at the
    /// call site.
    fn request(&self, command: &Command) -> Result<DeviceResponse>;
}
