use leptos::ev;
use leptos::prelude::*;

use crate::components::icons::glyph;
use crate::models::StorefrontState;
use crate::platform::browser;

const NAV_LINKS: [(&str, &str); 4] = [
    ("الرئيسية", "#home"),
    ("القائمة", "#menu"),
    ("الأكثر طلباً", "#popular"),
    ("تواصل معنا", "#contact"),
];

/// Fixed top bar: logo, navigation, theme toggle and cart button.
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(browser::scroll_y() > 10.0);

    // Header lives as long as the page, so the listener is never removed
    let _scroll_listener = window_event_listener(ev::scroll, move |_| {
        scrolled.set(browser::scroll_y() > 10.0);
    });

    let close_menu = move |_: ev::MouseEvent| menu_open.set(false);
    let theme_icon = move || if state.is_dark.get() { "☀️" } else { "🌙" };

    let cart_badge = move || {
        let count = state.cart_count();
        (count > 0).then(|| view! { <span class="cart-badge">{count}</span> })
    };

    let social_links = state.profile.with_value(|p| p.social_links.clone());

    view! {
        <header
            class="site-header"
            class:site-header-solid=move || scrolled.get() || menu_open.get()
        >
            <div class="container header-row">
                <a href="#home" class="logo" on:click=close_menu>
                    <span class="logo-mark">"🔥"</span>
                    <span class="logo-text">
                        <span class="logo-title">"ربع " <span class="accent">"مشوي"</span></span>
                        <span class="logo-subtitle">
                            {state.profile.with_value(|p| p.latin_name.clone())}
                        </span>
                    </span>
                </a>

                <nav class="desktop-nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, href)| view! { <a href=href class="nav-link">{name}</a> })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button
                        class="icon-button theme-toggle"
                        aria-label="Toggle theme"
                        on:click=move |_| state.toggle_theme()
                    >
                        {theme_icon}
                    </button>
                    <button
                        class="icon-button cart-button"
                        aria-label="Shopping Cart"
                        on:click=move |_| state.open_cart()
                    >
                        "🛍️"
                        {cart_badge}
                    </button>
                    <button
                        class="icon-button menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>

        <div class="mobile-menu" class:mobile-menu-open=move || menu_open.get()>
            <nav class="mobile-nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(name, href)| {
                        view! {
                            <a href=href class="mobile-nav-link" on:click=close_menu>
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <p class="mobile-follow">"تابعنا على"</p>
            <div class="social-row">
                {social_links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label=link.name
                            >
                                {glyph(&link.icon)}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
