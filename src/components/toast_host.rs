//! Overlay rendering the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastLevel, ToastState};

/// How long a toast stays on screen in the browser.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4_000;

/// Toast overlay. New toasts auto-dismiss after a short delay in the
/// browser; the close button works everywhere.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    schedule_dismiss(toasts, toast.id);
                    let Toast { id, level, message } = toast;
                    let level_class = match level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=level_class>
                            <span class="toast__message">{message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Remove the toast after a delay. Browser-only; native builds keep toasts
/// until dismissed.
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}
