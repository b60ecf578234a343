//! Triggering controls and their enabled state

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user action whose control is disabled while its request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Generate,
    Publish,
    ManualPreview,
    ManualPublish,
    UpdatePreview,
    SaveSettings,
}

impl Control {
    pub fn all() -> &'static [Control] {
        &[
            Control::Generate,
            Control::Publish,
            Control::ManualPreview,
            Control::ManualPublish,
            Control::UpdatePreview,
            Control::SaveSettings,
        ]
    }
}

/// Enabled flag plus whether the control shows its busy label / spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub enabled: bool,
    pub busy: bool,
}

impl ControlState {
    pub const IDLE: Self = Self {
        enabled: true,
        busy: false,
    };
    pub const BUSY: Self = Self {
        enabled: false,
        busy: true,
    };
    pub const DISABLED: Self = Self {
        enabled: false,
        busy: false,
    };
}

impl Default for ControlState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Current state of every control; absent entries are idle.
#[derive(Debug, Clone, Default)]
pub struct ControlBoard {
    states: HashMap<Control, ControlState>,
}

impl ControlBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, control: Control) -> ControlState {
        self.states.get(&control).copied().unwrap_or_default()
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.get(control).enabled
    }

    pub fn set(&mut self, control: Control, state: ControlState) {
        self.states.insert(control, state);
    }
}
