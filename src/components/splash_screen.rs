use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::StorefrontState;

/// Full-screen brand splash, faded out after the profile's splash duration.
#[component]
pub fn SplashScreen() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");
    let duration = state.profile.with_value(|p| p.splash_duration_ms);

    spawn_local(async move {
        TimeoutFuture::new(duration).await;
        state.is_loading.set(false);
    });

    view! {
        <div
            class="splash"
            class:splash-hidden=move || !state.is_loading.get()
            aria-hidden=move || (!state.is_loading.get()).to_string()
        >
            <div class="splash-logo">"🔥"</div>
            <h1 class="splash-title">"ربع " <span class="accent">"مشوي"</span></h1>
            <p class="splash-subtitle">{state.profile.with_value(|p| p.latin_name.clone())}</p>
            <div class="splash-progress">
                <div class="splash-progress-bar"></div>
            </div>
        </div>
    }
}
