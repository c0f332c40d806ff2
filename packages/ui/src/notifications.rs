use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

/// Oldest toasts are dropped beyond this many.
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            timestamp: current_time(),
            level: notice.level,
            message: notice.message,
        });
        if self.entries.len() > MAX_VISIBLE {
            let excess = self.entries.len() - MAX_VISIBLE;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a toast. Returns its id for [`dismiss`].
pub fn notify(notifications: &mut Signal<Notifications>, notice: Notice) -> u64 {
    match notice.level {
        NoticeLevel::Error => tracing::warn!("{}", notice.message),
        NoticeLevel::Success => tracing::info!("{}", notice.message),
    }
    notifications.write().push(notice)
}

pub fn dismiss(notifications: &mut Signal<Notifications>, id: u64) {
    notifications.write().remove(id);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
