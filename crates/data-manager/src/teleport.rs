//! Teleport gateway: wraps the external teleport capability
//!
//! The capability lives in another plugin across a process boundary. All
//! three outcomes are user-visible and non-fatal: a declined teleport, a
//! confirmed teleport, and a missing capability each produce their own
//! message, and none of them may abort the frame that triggered them.

use std::rc::Rc;

use overmap_shared::{OvermapError, OvermapResult};

use crate::live_state::{LiveState, Notifier};
use crate::static_data::{AetheryteRecord, StaticGameData};

/// The external teleport capability.
///
/// `invoke` returns `Ok(false)` when the capability ran but declined the
/// request, and `Err(TeleportUnavailable)` when it is not installed at
/// all; the two must never be conflated.
pub trait TeleportIpc {
    fn invoke(&self, aetheryte_id: u32, sub_id: u8) -> OvermapResult<bool>;

    /// Whether the user wants a chat confirmation after teleporting.
    fn show_chat_message(&self) -> bool;
}

pub struct TeleportGateway {
    ipc: Rc<dyn TeleportIpc>,
    data: Rc<dyn StaticGameData>,
    live: Rc<dyn LiveState>,
    notifier: Rc<dyn Notifier>,
}

impl TeleportGateway {
    pub fn new(
        ipc: Rc<dyn TeleportIpc>,
        data: Rc<dyn StaticGameData>,
        live: Rc<dyn LiveState>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            ipc,
            data,
            live,
            notifier,
        }
    }

    /// Attempt to teleport to `aetheryte`. Side-effecting; the outcome is
    /// reported through the notification channel.
    pub fn teleport(&self, aetheryte: &AetheryteRecord) {
        match self.ipc.invoke(aetheryte.id, aetheryte.sub_id) {
            Ok(true) => {
                if self.ipc.show_chat_message() {
                    let name = self.destination_name(aetheryte);
                    self.notifier
                        .print_toast(&format!("Teleporting to {name}"));
                }
            }
            Ok(false) => {
                self.user_error("Unable to teleport in this situation.");
            }
            Err(OvermapError::TeleportUnavailable) => {
                log::error!("teleport capability is not installed");
                self.user_error(
                    "Teleporting requires the \"Teleporter\" plugin to be installed.",
                );
            }
            Err(err) => {
                log::error!("teleport invocation failed: {err}");
                self.user_error("Unable to teleport in this situation.");
            }
        }
    }

    /// Current gil cost to reach `aetheryte_id`, zero when unattuned.
    pub fn cost(&self, aetheryte_id: u32) -> u32 {
        self.live.teleport_cost(aetheryte_id)
    }

    fn destination_name(&self, aetheryte: &AetheryteRecord) -> String {
        self.data
            .place_name(aetheryte.place_name_id)
            .unwrap_or_else(|| "unknown destination".to_string())
    }

    fn user_error(&self, text: &str) {
        self.notifier.print_error(text);
        self.notifier.print_toast(text);
    }
}

/// Format a gil amount with thousands separators, e.g. `12,345`.
pub fn format_gil(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
