//! Linux uinput backend: a virtual input device.
//!
//! Creates one virtual device exposing relative pointer axes, a scroll
//! wheel, and the key set needed for the discrete actions. Desktop
//! shortcuts are injected as chords: Super+L for lock, Ctrl+Tab /
//! Ctrl+Shift+Tab for tab switching.
//!
//! Requires write access to /dev/uinput (usually the `input` group or
//! a udev rule).

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key, RelativeAxisType};

use airctl_common::error::{AirctlError, AirctlResult};

use crate::{ControlBackend, TabDirection};

const DEVICE_NAME: &str = "airctl virtual input";

/// Uinput-based effect injection.
pub struct UinputBackend {
    device: VirtualDevice,

    /// Pointer position we have steered the cursor to (pixels). The
    /// device only supports relative motion, so the backend owns the
    /// authoritative position, starting at screen center.
    x: f64,
    y: f64,

    screen_width: f64,
    screen_height: f64,

    /// Smoothing divisor: each move covers 1/sensitivity of the distance
    /// to the target, damping detector jitter.
    sensitivity: f64,
}

impl UinputBackend {
    /// Create the virtual device.
    pub fn new(screen_width: u32, screen_height: u32, sensitivity: f64) -> AirctlResult<Self> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(Key::BTN_LEFT);
        keys.insert(Key::KEY_VOLUMEUP);
        keys.insert(Key::KEY_VOLUMEDOWN);
        keys.insert(Key::KEY_LEFTMETA);
        keys.insert(Key::KEY_L);
        keys.insert(Key::KEY_LEFTCTRL);
        keys.insert(Key::KEY_LEFTSHIFT);
        keys.insert(Key::KEY_TAB);

        let mut axes = AttributeSet::<RelativeAxisType>::new();
        axes.insert(RelativeAxisType::REL_X);
        axes.insert(RelativeAxisType::REL_Y);
        axes.insert(RelativeAxisType::REL_WHEEL);

        let device = VirtualDeviceBuilder::new()
            .and_then(|builder| builder.name(DEVICE_NAME).with_keys(&keys))
            .and_then(|builder| builder.with_relative_axes(&axes))
            .and_then(|builder| builder.build())
            .map_err(|e| {
                AirctlError::permission_denied(format!("Failed to open /dev/uinput: {e}"))
            })?;

        tracing::info!(device = DEVICE_NAME, "Virtual input device created");

        Ok(Self {
            device,
            x: screen_width as f64 / 2.0,
            y: screen_height as f64 / 2.0,
            screen_width: screen_width as f64,
            screen_height: screen_height as f64,
            sensitivity: sensitivity.max(1.0),
        })
    }

    /// Check if /dev/uinput is writable without creating a device.
    pub fn is_supported() -> bool {
        let path = b"/dev/uinput\0";
        unsafe { libc::access(path.as_ptr() as *const libc::c_char, libc::W_OK) == 0 }
    }

    fn emit(&mut self, events: &[InputEvent]) -> AirctlResult<()> {
        self.device
            .emit(events)
            .map_err(|e| AirctlError::control(format!("uinput emit failed: {e}")))
    }

    /// Press and release a key chord, held keys first.
    fn chord(&mut self, keys: &[Key]) -> AirctlResult<()> {
        let down: Vec<InputEvent> = keys
            .iter()
            .map(|key| InputEvent::new(EventType::KEY, key.code(), 1))
            .collect();
        self.emit(&down)?;

        let up: Vec<InputEvent> = keys
            .iter()
            .rev()
            .map(|key| InputEvent::new(EventType::KEY, key.code(), 0))
            .collect();
        self.emit(&up)
    }
}

impl ControlBackend for UinputBackend {
    fn move_pointer(&mut self, x: f64, y: f64) -> AirctlResult<()> {
        let target_x = x.clamp(0.0, 1.0) * self.screen_width;
        let target_y = y.clamp(0.0, 1.0) * self.screen_height;

        let dx = ((target_x - self.x) / self.sensitivity).round();
        let dy = ((target_y - self.y) / self.sensitivity).round();

        if dx == 0.0 && dy == 0.0 {
            return Ok(());
        }

        self.emit(&[
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_X.0, dx as i32),
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_Y.0, dy as i32),
        ])?;

        self.x = (self.x + dx).clamp(0.0, self.screen_width);
        self.y = (self.y + dy).clamp(0.0, self.screen_height);
        Ok(())
    }

    fn click(&mut self) -> AirctlResult<()> {
        self.emit(&[InputEvent::new(EventType::KEY, Key::BTN_LEFT.code(), 1)])?;
        self.emit(&[InputEvent::new(EventType::KEY, Key::BTN_LEFT.code(), 0)])
    }

    fn scroll(&mut self, amount: f64) -> AirctlResult<()> {
        let mut clicks = amount.round() as i32;
        if clicks == 0 && amount != 0.0 {
            clicks = if amount > 0.0 { 1 } else { -1 };
        }
        if clicks == 0 {
            return Ok(());
        }

        self.emit(&[InputEvent::new(
            EventType::RELATIVE,
            RelativeAxisType::REL_WHEEL.0,
            clicks,
        )])
    }

    fn volume_up(&mut self) -> AirctlResult<()> {
        self.chord(&[Key::KEY_VOLUMEUP])
    }

    fn volume_down(&mut self) -> AirctlResult<()> {
        self.chord(&[Key::KEY_VOLUMEDOWN])
    }

    fn lock_screen(&mut self) -> AirctlResult<()> {
        self.chord(&[Key::KEY_LEFTMETA, Key::KEY_L])
    }

    fn switch_tab(&mut self, direction: TabDirection) -> AirctlResult<()> {
        match direction {
            TabDirection::Right => self.chord(&[Key::KEY_LEFTCTRL, Key::KEY_TAB]),
            TabDirection::Left => {
                self.chord(&[Key::KEY_LEFTCTRL, Key::KEY_LEFTSHIFT, Key::KEY_TAB])
            }
        }
    }

    fn name(&self) -> &str {
        "uinput"
    }

    fn is_available(&self) -> bool {
        Self::is_supported()
    }
}
