//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

use crate::routes;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=routes::MAIN class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"Conference GO!"</span>
                    </A>

                    // Navigation links from the route table
                    <div class="flex items-center space-x-1">
                        {routes::NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! { <NavLink href=*href label=*label /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
