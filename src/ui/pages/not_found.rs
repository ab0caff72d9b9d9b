//! Not found page component
//!
//! Rendered for every route other than the landing page, including the
//! sign-up and company pages the landing page links to.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::site::use_site_content;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let content = use_site_content();

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                // Error code
                <h1 class="text-6xl font-bold text-gray-800 mb-4">"404"</h1>

                // Title
                <h2 class="text-2xl font-semibold text-gray-800 mb-2">
                    "Page Not Found"
                </h2>

                // Description
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-full transition-colors"
                >
                    "Go Home"
                </A>
            </div>

            // Footer
            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{content.footer.copyright}</p>
            </div>
        </div>
    }
}
