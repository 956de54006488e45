use gloo_timers::future::TimeoutFuture;
use leptos::html::Textarea;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::location::{append_location_padded, maps_link};
use storefront_core::models::{DeliveryTime, MenuItem, OrderType};
use storefront_core::QuickOrder;

use crate::models::StorefrontState;
use crate::platform::{browser, geolocation};

/// How long the "added"/"ordered" confirmation stays on the buttons
const FLASH_MS: u32 = 2000;

/// One dish: image, price, quantity stepper, add-to-cart and a direct order
/// form (order type, address, delivery time, note).
#[component]
pub fn MenuItemCard(item: MenuItem, category_id: String) -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");
    let item = StoredValue::new(item);
    let price_tag = item.with_value(MenuItem::price_tag);

    let show_details = RwSignal::new(false);
    let quantity = RwSignal::new(1u32);
    let order_type = RwSignal::new(OrderType::Delivery);
    let address = RwSignal::new(String::new());
    let delivery_time = RwSignal::new(DeliveryTime::Asap);
    let note = RwSignal::new(String::new());
    let error_msg = RwSignal::new(None::<String>);
    let is_locating = RwSignal::new(false);
    let is_added = RwSignal::new(false);
    let is_ordered = RwSignal::new(false);

    let address_ref = NodeRef::<Textarea>::new();

    let add_to_cart = move |_| {
        let id = state.add_to_cart(item.get_value(), quantity.get(), note.get());
        tracing::debug!(%id, "Menu card added to cart");
        state.show_notification("تمت الإضافة للسلة");
        flash(is_added);
    };

    let locate = move |_| {
        is_locating.set(true);
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok((latitude, longitude)) => {
                    let link = maps_link(latitude, longitude);
                    address.update(|current| *current = append_location_padded(current, &link));
                    error_msg.set(None);
                    show_details.set(true);
                }
                Err(e) => browser::alert(&e.to_string()),
            }
            is_locating.set(false);
        });
    };

    let place_order = move |_| {
        error_msg.set(None);

        let order = QuickOrder {
            item: item.get_value(),
            quantity: quantity.get(),
            order_type: order_type.get(),
            address: address.get(),
            delivery_time: delivery_time.get(),
            note: note.get(),
        };

        match state.profile.with_value(|profile| order.link(profile)) {
            Ok(url) => {
                browser::open_in_new_tab(&url);
                flash(is_ordered);
            }
            Err(e) => {
                show_details.set(true);
                error_msg.set(Some(e.to_string()));
                spawn_local(async move {
                    TimeoutFuture::new(300).await;
                    if let Some(textarea) = address_ref.get() {
                        let _ = textarea.focus();
                    }
                });
            }
        }
    };

    let address_id = item.with_value(|item| format!("address-{category_id}-{}", item.id));

    view! {
        <article class="menu-card">
            <div class="menu-card-image">
                <img
                    src=item.with_value(|item| item.image.clone())
                    alt=item.with_value(|item| item.name.clone())
                    loading="lazy"
                />
                <div class="price-tag">
                    <span class="price-currency">{state.profile.with_value(|p| p.currency.clone())}</span>
                    <span class="price-value">{item.with_value(|item| item.price.clone())}</span>
                </div>
            </div>

            <div class="menu-card-body">
                <h3 class="menu-card-title">{item.with_value(|item| item.name.clone())}</h3>
                <p class="menu-card-description">
                    {item.with_value(|item| item.description.clone().unwrap_or_default())}
                </p>

                <button
                    class="details-toggle"
                    class:details-toggle-open=move || show_details.get()
                    on:click=move |_| show_details.update(|open| *open = !*open)
                >
                    {move || {
                        if show_details.get() {
                            "إخفاء التفاصيل ▴"
                        } else {
                            "تفاصيل الطلب (العنوان، الملاحظات) ▾"
                        }
                    }}
                </button>

                <div class="details" class:details-open=move || show_details.get()>
                    <div class="order-type-selector order-type-selector-3">
                        {OrderType::QUICK
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <button
                                        class="order-type"
                                        class:order-type-active=move || order_type.get() == kind
                                        on:click=move |_| {
                                            order_type.set(kind);
                                            error_msg.set(None);
                                        }
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || order_type.get().requires_address()>
                        <div class="delivery-fields">
                            <label class="field-label" for=address_id.clone()>
                                "عنوان التوصيل (بالتفصيل) " <span class="required">"*"</span>
                            </label>
                            <div class="address-field">
                                <textarea
                                    id=address_id.clone()
                                    node_ref=address_ref
                                    rows="3"
                                    placeholder="اسم الشارع، رقم العقار، الدور، علامة مميزة..."
                                    class="address-input"
                                    class:input-error=move || {
                                        error_msg.with(Option::is_some)
                                            && address.with(|a| a.trim().is_empty())
                                    }
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
                            {move || {
                                error_msg
                                    .get()
                                    .filter(|_| address.with(|a| a.trim().is_empty()))
                                    .map(|message| view! { <p class="field-error">"⚠ " {message}</p> })
                            }}

                            <div class="delivery-times">
                                <span class="field-label">"وقت التوصيل"</span>
                                <div class="chip-row">
                                    {DeliveryTime::ALL
                                        .into_iter()
                                        .map(|slot| {
                                            view! {
                                                <button
                                                    class="chip"
                                                    class:chip-active=move || delivery_time.get() == slot
                                                    on:click=move |_| delivery_time.set(slot)
                                                >
                                                    {slot.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </Show>

                    <label class="field-label">"ملاحظات إضافية"</label>
                    <input
                        type="text"
                        class="note-input"
                        placeholder="بدون طماطم، زيادة عيش..."
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    />
                </div>

                <div class="menu-card-actions">
                    <div class="stepper">
                        <button
                            class="stepper-button"
                            aria-label="Decrease quantity"
                            on:click=move |_| quantity.update(|q| *q = q.saturating_sub(1).max(1))
                        >
                            "−"
                        </button>
                        <span class="stepper-value">{move || quantity.get()}</span>
                        <button
                            class="stepper-button stepper-button-plus"
                            aria-label="Increase quantity"
                            on:click=move |_| quantity.update(|q| *q = q.saturating_add(1))
                        >
                            "+"
                        </button>
                    </div>

                    <button
                        class="add-to-cart"
                        class:add-to-cart-done=move || is_added.get()
                        title="إضافة للسلة"
                        on:click=add_to_cart
                    >
                        {move || if is_added.get() { "✓" } else { "🛍️" }}
                    </button>

                    <button
                        class="order-button"
                        class:order-button-done=move || is_ordered.get()
                        on:click=place_order
                    >
                        {move || {
                            if is_ordered.get() {
                                view! { <span class="order-done">"✓ تم"</span> }.into_any()
                            } else {
                                view! {
                                    <span class="order-label">"💬 اطلب"</span>
                                    <span class="order-total">
                                        {price_tag.display_total(quantity.get())} " "
                                        {state.profile.with_value(|p| p.currency.clone())}
                                    </span>
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Set `signal` for a moment, then clear it.
fn flash(signal: RwSignal<bool>) {
    signal.set(true);
    spawn_local(async move {
        TimeoutFuture::new(FLASH_MS).await;
        signal.set(false);
    });
}
