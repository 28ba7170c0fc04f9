//! Horizontal row of category chips

use leptos::prelude::*;
use gameverse_core::Category;

#[component]
pub fn CategoryFilter(
    categories: Vec<Category>,
    /// Slug of the highlighted chip
    active: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <section class="category-filter">
            <div class="category-chips">
                {categories.into_iter().map(|category| {
                    let slug = category.slug.clone();
                    let slug_for_click = category.slug.clone();
                    let icon = category.icon_or_default().to_string();
                    view! {
                        <button
                            class="chip"
                            class:chip-active=move || active.get() == slug
                            on:click=move |_| on_change(slug_for_click.clone())
                        >
                            <span class="chip-icon">{icon}</span>
                            {category.name}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
