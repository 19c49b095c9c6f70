//! Device capability gate.
//!
//! Decides whether a seek slider should be built at all for the host device.
//! Phone-class touch devices get native media controls instead, so the
//! slider is skipped for them; tablets and desktops get the slider.

/// Source of touch-device identifiers for the host.
///
/// Returns `None` on non-touch devices, or the identifiers of the detected
/// touch device class (e.g. `["iPad"]`).
pub trait DeviceProbe {
    fn probe(&self) -> Option<Vec<String>>;
}

impl<F> DeviceProbe for F
where
    F: Fn() -> Option<Vec<String>>,
{
    fn probe(&self) -> Option<Vec<String>> {
        self()
    }
}

/// Probe with a fixed answer, used by the terminal host and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProbe {
    devices: Option<Vec<String>>,
}

impl StaticProbe {
    /// A non-touch device.
    pub fn non_touch() -> Self {
        Self { devices: None }
    }

    /// A touch device reporting the given identifier.
    pub fn touch(device: impl Into<String>) -> Self {
        Self {
            devices: Some(vec![device.into()]),
        }
    }
}

impl DeviceProbe for StaticProbe {
    fn probe(&self) -> Option<Vec<String>> {
        self.devices.clone()
    }
}

/// Gate rejecting a set of excluded device identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceGate {
    excluded: Vec<String>,
}

impl DeviceGate {
    /// Identifier of the reference touch-phone class.
    pub const PHONE: &'static str = "iPhone";

    pub fn new(excluded: Vec<String>) -> Self {
        Self { excluded }
    }

    /// Device identifiers this gate rejects.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Whether the slider should be built for the device `probe` reports.
    pub fn should_build_slider(&self, probe: &dyn DeviceProbe) -> bool {
        match probe.probe() {
            None => true,
            Some(devices) => !devices
                .iter()
                .any(|device| self.excluded.iter().any(|excluded| excluded == device)),
        }
    }
}

impl Default for DeviceGate {
    fn default() -> Self {
        Self::new(vec![Self::PHONE.to_string()])
    }
}
