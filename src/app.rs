/// Application shell for TownLink.
/// Sets up page metadata, the API configuration and the routes for the two pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::admin_panel::AdminPanel;
use crate::components::business_detail::BusinessDetailPage;
use crate::components::nav_bar::NavBar;
use crate::config::ApiConfig;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Pages read the API base URLs from context.
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/townlink.css" />
        <Stylesheet id="leaflet" href=LEAFLET_CSS />
        <Script src=LEAFLET_JS />
        <Title text="TownLink" />
        <Router>
            <Routes>
                <Route path="/admin" view=AdminPanel />
                <Route path="/business" view=BusinessDetailPage />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <NavBar />
        <main class="container mx-auto p-4">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>
                { "Open a business from the directory, or go to the " }
                <a href="/admin" class="text-blue-600 hover:underline">{ "admin panel" }</a>
                { "." }
            </p>
        </main>
    }
}
