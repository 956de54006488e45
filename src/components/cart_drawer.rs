use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::location::{append_location, maps_link};
use storefront_core::models::{CartEntry, OrderType};
use storefront_core::CartCheckout;

use crate::models::StorefrontState;
use crate::platform::{browser, geolocation};

/// Slide-in cart: entries, order type, delivery address, total and checkout.
#[component]
pub fn CartDrawer() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    let order_type = RwSignal::new(OrderType::Delivery);
    let address = RwSignal::new(String::new());
    let is_locating = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    // Background page must not scroll under the open drawer
    Effect::new(move |_| browser::lock_body_scroll(state.is_cart_open.get()));
    on_cleanup(|| browser::lock_body_scroll(false));

    let currency = state.profile.with_value(|p| p.currency.clone());

    let locate = move |_| {
        is_locating.set(true);
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok((latitude, longitude)) => {
                    let link = maps_link(latitude, longitude);
                    address.update(|current| *current = append_location(current, &link));
                }
                Err(e) => browser::alert(e.summary()),
            }
            is_locating.set(false);
        });
    };

    let checkout = move |_| {
        error_msg.set(None);
        let request = CartCheckout::new(order_type.get(), address.get());

        let link = state
            .cart
            .with(|cart| state.profile.with_value(|profile| request.link(cart, profile)));

        match link {
            Ok(url) => {
                browser::open_in_new_tab(&url);
            }
            Err(e) => error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <div
            class="drawer-backdrop"
            class:drawer-backdrop-open=move || state.is_cart_open.get()
            on:click=move |_| state.close_cart()
        ></div>

        <aside class="drawer" class:drawer-open=move || state.is_cart_open.get()>
            <div class="drawer-header">
                <h2>"🛍️ سلة الطلبات"</h2>
                <button class="icon-button" aria-label="Close" on:click=move |_| state.close_cart()>
                    "✕"
                </button>
            </div>

            <div class="drawer-items">
                <Show
                    when=move || state.cart.with(|cart| !cart.is_empty())
                    fallback=move || {
                        view! {
                            <div class="drawer-empty">
                                <div class="drawer-empty-icon">"🛍️"</div>
                                <p>"السلة فارغة"</p>
                                <button class="link-button" on:click=move |_| state.close_cart()>
                                    "تصفح القائمة"
                                </button>
                            </div>
                        }
                    }
                >
                    <For
                        each=move || state.cart.with(|cart| cart.entries().to_vec())
                        key=|entry| (entry.id, entry.quantity)
                        children=move |entry| view! { <CartEntryRow entry=entry /> }
                    />
                </Show>
            </div>

            <Show when=move || state.cart.with(|cart| !cart.is_empty())>
                <div class="drawer-footer">
                    <div class="order-type-selector">
                        {OrderType::CART
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <button
                                        class="order-type"
                                        class:order-type-active=move || order_type.get() == kind
                                        on:click=move |_| order_type.set(kind)
                                    >
                                        {if kind == OrderType::Takeaway { "🏪 استلام" } else { "🛵 توصيل" }}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || order_type.get().requires_address()>
                        <div class="address-field">
                            <textarea
                                class="address-input"
                                class:input-error=move || error_msg.with(Option::is_some)
                                placeholder="عنوان التوصيل بالتفصيل..."
                                prop:value=move || address.get()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    if !value.is_empty() {
                                        error_msg.set(None);
                                    }
                                    address.set(value);
                                }
                            ></textarea>
                            <button
                                class="locate-button"
                                title="تحديد موقعي"
                                prop:disabled=move || is_locating.get()
                                on:click=locate
                            >
                                {move || if is_locating.get() { "⏳" } else { "📍" }}
                            </button>
                        </div>
                        {move || error_msg.get().map(|message| view! { <p class="field-error">"⚠ " {message}</p> })}
                    </Show>

                    <div class="drawer-total">
                        <span>"الإجمالي التقديري"</span>
                        <span class="drawer-total-value">
                            {move || state.cart.with(storefront_core::Cart::estimated_total)}
                            " "
                            <small>{currency.clone()}</small>
                        </span>
                    </div>

                    <button class="checkout-button" on:click=checkout>
                        "💬 إتمام الطلب على واتساب"
                    </button>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn CartEntryRow(entry: CartEntry) -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");
    let id = entry.id;
    let currency = state.profile.with_value(|p| p.currency.clone());

    view! {
        <div class="cart-entry">
            <img src=entry.item.image.clone() alt=entry.item.name.clone() class="cart-entry-image" />
            <div class="cart-entry-info">
                <h3>{entry.item.name.clone()}</h3>
                <p class="cart-entry-price">{entry.item.price.clone()} " " {currency}</p>
                {entry.note.clone().map(|note| view! { <p class="cart-entry-note">"📝 " {note}</p> })}
            </div>
            <div class="cart-entry-controls">
                <button class="remove-button" aria-label="Remove" on:click=move |_| state.remove_from_cart(id)>
                    "🗑"
                </button>
                <div class="stepper stepper-small">
                    <button class="stepper-button" on:click=move |_| state.update_quantity(id, -1)>
                        "−"
                    </button>
                    <span class="stepper-value">{entry.quantity}</span>
                    <button class="stepper-button stepper-button-plus" on:click=move |_| state.update_quantity(id, 1)>
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}
