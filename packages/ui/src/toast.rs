//! # Toast notifications
//!
//! One page-wide channel for transient success and error messages. The
//! [`ToastProvider`] is mounted once around the router; any component under it
//! calls [`use_toaster`] and then [`Toaster::notify_success`] or
//! [`Toaster::notify_error`].
//!
//! Toasts stack top-right in arrival order, dismiss themselves after
//! [`TOAST_DURATION`], and can be dismissed early by clicking them.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// The stack of visible toasts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle for emitting toasts. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn notify_success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    pub fn notify_error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    pub fn notify(&self, severity: Severity, message: &str) {
        let mut queue = self.queue;
        let id = queue.write().push(severity, message);
        // Rooted so the timer survives the page that raised the toast.
        spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            queue.write().dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

/// Get the page-wide toaster.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Provides the toast channel and renders the stack above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toaster = use_context_provider(|| Toaster { queue });
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        {children}

        div {
            class: "toast-stack",
            role: "status",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        Severity::Success => "toast toast-success",
                        Severity::Error => "toast toast-error",
                    },
                    onclick: move |_| toaster.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
