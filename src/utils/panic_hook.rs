use std::panic;
use leptos::logging::{error, log};

/// Sets up a panic hook that forwards to `console_error_panic_hook` and then
/// notes which page panicked, with a hint for reactive owner disposal panics
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        // Full message and stack trace first
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        let page = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "<no window>".to_string());
        error!("[PANIC] {} (page: {})", message, page);

        if message.contains("OwnerDisposed") {
            error!("[PANIC] A page component was used after it was unmounted.");
            error!("[PANIC] Usually a request resolved after navigating away from the page.");
        }
    }));
}

/// Call from the client entry points before mounting the app
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}
