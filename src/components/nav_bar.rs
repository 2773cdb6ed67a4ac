use leptos::*;

/// Site header shared by every page. On narrow screens the links collapse
/// behind the menu button.
#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="bg-blue-700 text-white p-4">
            <div class="flex items-center justify-between">
                <a href="/" class="text-xl font-bold">{ "TownLink" }</a>
                <button
                    id="mobile-menu-button"
                    type="button"
                    class="md:hidden"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    { "☰" }
                </button>
            </div>
            <ul id="nav-menu" class="md:flex md:space-x-4" class:hidden=move || !menu_open.get()>
                <li><a href="/">{ "Directory" }</a></li>
                <li><a href="/admin">{ "Admin" }</a></li>
            </ul>
        </nav>
    }
}
