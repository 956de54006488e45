use leptos::prelude::*;
use storefront_core::{Catalog, StoreProfile};

use crate::components::{
    CartDrawer, Footer, Header, Hero, MenuSection, NotificationBar, SplashScreen,
};
use crate::models::StorefrontState;

/// Root application component that provides global context and lays out the page.
#[component]
pub fn App() -> impl IntoView {
    let mut startup_problem = None;

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!("Menu unavailable: {e}");
        startup_problem = Some("تعذر تحميل القائمة");
        Catalog::default()
    });
    let profile = StoreProfile::builtin().unwrap_or_else(|e| {
        tracing::error!("Store profile unavailable: {e}");
        startup_problem = Some("تعذر تحميل بيانات المطعم");
        StoreProfile::fallback()
    });

    let state = StorefrontState::new(catalog, profile);

    // Provide context to all child components
    provide_context(state);

    if let Some(message) = startup_problem {
        state.show_notification(message);
    }

    // Keep the document class and stored preference in step with the toggle
    Effect::new(move |_| state.apply_theme(state.is_dark.get()));

    tracing::info!("Storefront mounted");

    view! {
        <SplashScreen />
        <div class="page" class:page-loading=move || state.is_loading.get()>
            <NotificationBar />
            <Header />
            <CartDrawer />
            <main>
                <Hero />
                <MenuSection />
                <Footer />
            </main>
        </div>
    }
}
