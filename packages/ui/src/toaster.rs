use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use api::NoticeLevel;
use dioxus::prelude::*;

use crate::notifications::{dismiss, use_notifications};

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

/// Forget timers for toasts that are gone and return the visible ids that
/// still need one, marking them as scheduled.
fn schedule_timers(scheduled: &mut HashSet<u64>, visible: &[u64]) -> Vec<u64> {
    scheduled.retain(|id| visible.contains(id));
    visible
        .iter()
        .copied()
        .filter(|id| scheduled.insert(*id))
        .collect()
}

/// Global notification stack, rendered once near the app root.
#[component]
pub fn Toaster() -> Element {
    let mut notices = use_notifications();

    // Ids that already have a dismiss timer running
    let scheduled = use_hook(|| Rc::new(RefCell::new(HashSet::<u64>::new())));

    use_effect(move || {
        let visible: Vec<u64> = notices.read().entries.iter().map(|t| t.id).collect();
        let fresh = schedule_timers(&mut scheduled.borrow_mut(), &visible);
        #[cfg(target_arch = "wasm32")]
        for id in fresh {
            spawn(async move {
                gloo_timers::future::sleep(AUTO_DISMISS).await;
                let mut notices = notices;
                dismiss(&mut notices, id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = fresh;
    });

    let entries = notices().entries.clone();
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toaster",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        NoticeLevel::Error => "toast error",
                        NoticeLevel::Success => "toast success",
                    },
                    span { class: "toast-time", "{toast.timestamp}" }
                    span { class: "toast-message", " {toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| dismiss(&mut notices, toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
