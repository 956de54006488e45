use leptos::prelude::*;
use storefront_core::models::{CategoryFilter, MenuCategory, MenuItem};

use crate::components::icons::glyph;
use crate::components::MenuItemCard;
use crate::models::StorefrontState;

/// Category rendered with the highlighted "most ordered" styling
const POPULAR_ID: &str = "popular";

/// Menu heading, search bar, category pills and the filtered grid.
#[component]
pub fn MenuSection() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    let filtered = Memo::new(move |_| state.filtered_menu());

    view! {
        <section id="menu" class="menu-section">
            <div class="container">
                <div class="section-heading">
                    <h2>"قائمة " <span class="accent">"الطعام"</span></h2>
                    <div class="heading-rule"></div>
                    <p>"تصفح قائمتنا المتنوعة واختر ما يناسب ذوقك من المشويات والمقبلات الشهية"</p>
                </div>

                <SearchBar />
                <CategoryBar />

                <div class="menu-categories">
                    <Show
                        when=move || filtered.with(|categories| !categories.is_empty())
                        fallback=move || view! { <NoResults /> }
                    >
                        <For
                            each=move || filtered.get()
                            key=|category| category.id.clone()
                            children=move |category| {
                                view! { <CategoryBlock category=category filtered=filtered /> }
                            }
                        />
                    </Show>
                </div>
            </div>
        </section>
    }
}

/// Items of `category_id` still visible in `categories`, in menu order.
fn visible_items(categories: &[MenuCategory], category_id: &str) -> Vec<MenuItem> {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.items.clone())
        .unwrap_or_default()
}

#[component]
fn SearchBar() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                class="search-input"
                placeholder="ابحث عن وجبتك المفضلة (كفتة، فراخ...)"
                prop:value=move || state.search_term.get()
                on:input=move |ev| state.search_term.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Horizontal pill selector: "all" followed by every catalog category.
#[component]
fn CategoryBar() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    let pills = state.catalog.with_value(|catalog| {
        catalog
            .categories()
            .iter()
            .map(|category| (category.id.clone(), category.title.clone(), category.icon.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="category-bar">
            <button
                class="category-pill"
                class:category-pill-active=move || state.active_category.get() == CategoryFilter::All
                on:click=move |_| state.select_category(CategoryFilter::All)
            >
                <span>{glyph("utensils")}</span>
                "الكل"
            </button>
            {pills
                .into_iter()
                .map(|(id, title, icon)| {
                    let selected_id = id.clone();
                    view! {
                        <button
                            class="category-pill"
                            class:category-pill-active=move || {
                                state.active_category.with(|filter| filter.is_selected(&selected_id))
                            }
                            on:click=move |_| state.select_category(CategoryFilter::Only(id.clone()))
                        >
                            <span>{glyph(&icon)}</span>
                            {title}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One category heading and its grid. Cards are keyed by item id so a card
/// that still matches the search keeps its quantity and order form.
#[component]
fn CategoryBlock(category: MenuCategory, filtered: Memo<Vec<MenuCategory>>) -> impl IntoView {
    let is_popular = category.id == POPULAR_ID;
    let category_id = category.id.clone();
    let items = Memo::new({
        let category_id = category_id.clone();
        move |_| filtered.with(|categories| visible_items(categories, &category_id))
    });

    view! {
        <div class="menu-category" id=is_popular.then_some(POPULAR_ID)>
            <div class="category-heading" class:category-heading-popular=is_popular>
                <div class="category-icon">{glyph(&category.icon)}</div>
                <h3>{category.title}</h3>
                <div class="category-rule"></div>
            </div>

            <div class="menu-grid" class:menu-grid-popular=is_popular>
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! { <MenuItemCard item=item category_id=category_id.clone() /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn NoResults() -> impl IntoView {
    let state = use_context::<StorefrontState>().expect("StorefrontState context missing");

    view! {
        <div class="no-results">
            <div class="no-results-icon">"🔍"</div>
            <p class="no-results-title">"لا توجد نتائج مطابقة"</p>
            <button class="link-button" on:click=move |_| state.clear_search()>
                "عرض القائمة كاملة"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::filter_categories;
    use storefront_core::Catalog;

    fn item_ids(items: &[MenuItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_narrowing_search_keeps_surviving_cards() {
        let catalog = Catalog::builtin().unwrap();
        let everything = filter_categories(catalog.categories(), "", &CategoryFilter::All);
        let narrowed = filter_categories(catalog.categories(), "كفتة", &CategoryFilter::All);

        for category in &narrowed {
            let before = item_ids(&visible_items(&everything, &category.id));
            let after = item_ids(&visible_items(&narrowed, &category.id));
            assert!(!after.is_empty());
            // every surviving card key was already mounted before narrowing
            assert!(after.iter().all(|id| before.contains(id)));
        }
    }

    #[test]
    fn test_hidden_category_has_no_items() {
        let catalog = Catalog::builtin().unwrap();
        let narrowed = filter_categories(catalog.categories(), "كفتة", &CategoryFilter::All);
        assert!(visible_items(&narrowed, "desserts").is_empty());
        assert!(visible_items(&narrowed, "no-such-category").is_empty());
    }
}
