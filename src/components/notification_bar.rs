use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::StorefrontState;

const DISMISS_AFTER_MS: u32 = 3000;

/// Transient, non-modal feedback toast ("added to cart", startup problems).
#[component]
pub fn NotificationBar() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    // Bumped on every new message so a stale timer never hides a newer one
    let generation = StoredValue::new(0u32);

    Effect::new(move |_| {
        if state.notification.get().is_none() {
            return;
        }

        generation.update_value(|g| *g = g.wrapping_add(1));
        let shown = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            if generation.get_value() == shown {
                state.clear_notification();
            }
        });
    });

    view! {
        <Show when=move || state.notification.get().is_some()>
            <div class="notification-bar" role="status" on:click=move |_| state.clear_notification()>
                {move || state.notification.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
