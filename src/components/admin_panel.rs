//! Moderation page: load pending submissions with the admin key, then
//! approve or delete them one at a time.
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::logging::{error, log, warn};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::components::nav_bar::NavBar;
use crate::components::pending_business_card::PendingBusinessCard;
use crate::config::use_api_config;
use crate::models::business::Business;
use crate::models::moderation::{AdminKey, ModerationAction};
use crate::utils::request_sequencer::RequestSequencer;

pub const EMPTY_KEY_MESSAGE: &str = "Please enter the admin key.";
pub const LOADING_MESSAGE: &str = "Loading businesses...";
pub const INVALID_KEY_MESSAGE: &str = "Invalid Admin Key.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const NO_PENDING_MESSAGE: &str = "No pending businesses at the moment.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Error,
    Info,
}

/// The inline message under the key form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub tone: FeedbackTone,
}

impl Feedback {
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tone: FeedbackTone::Error,
        }
    }

    pub fn info(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tone: FeedbackTone::Info,
        }
    }

    fn class(&self) -> &'static str {
        match self.tone {
            FeedbackTone::Error => "mt-2 text-red-600",
            FeedbackTone::Info => "mt-2 text-blue-600",
        }
    }
}

/// What a finished pending-list request does to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// Hide the feedback and render one card per business.
    Show(Vec<Business>),
    /// Hide the list and show a message instead.
    Message(Feedback),
}

impl ListOutcome {
    pub fn from_result(result: Result<Vec<Business>, ApiError>) -> Self {
        match result {
            Ok(businesses) if businesses.is_empty() => {
                Self::Message(Feedback::error(NO_PENDING_MESSAGE))
            }
            Ok(businesses) => Self::Show(businesses),
            Err(ApiError::Unauthorized) => Self::Message(Feedback::error(INVALID_KEY_MESSAGE)),
            Err(ApiError::Status(_)) => Self::Message(Feedback::error(SERVER_ERROR_MESSAGE)),
            Err(ApiError::Network(_) | ApiError::Decode(_)) => {
                Self::Message(Feedback::error(NETWORK_ERROR_MESSAGE))
            }
        }
    }
}

/// Resolves a click inside the list to the moderation button it landed on.
fn moderation_target(ev: &MouseEvent) -> Option<(ModerationAction, String)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let trigger = target.closest("[data-action]").ok().flatten()?;
    let action = ModerationAction::from_attr(&trigger.get_attribute("data-action")?)?;
    let business_id = trigger.get_attribute("data-business-id")?;
    Some((action, business_id))
}

fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        error!("[ADMIN] Could not show alert {:?}: {:?}", message, err);
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let config = store_value(use_api_config());
    let key_input = create_node_ref::<html::Input>();
    let feedback = create_rw_signal(None::<Feedback>);
    let businesses = create_rw_signal(Vec::<Business>::new());
    let section_visible = create_rw_signal(false);
    // Key that loaded the current list; moderation requests reuse it.
    let active_key = store_value(None::<AdminKey>);
    let sequencer = store_value(RequestSequencer::default());

    let refresh = move |key: AdminKey| {
        let (Some(config), Some(ticket)) = (
            config.try_get_value(),
            sequencer.try_with_value(RequestSequencer::issue),
        ) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_pending_businesses(&config, &key).await;
            if let Err(err) = &result {
                warn!("[ADMIN] Loading pending businesses failed: {}", err);
            }
            let current = sequencer
                .try_with_value(|s| s.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log!("[ADMIN] Dropping superseded pending list response");
                return;
            }

            match ListOutcome::from_result(result) {
                ListOutcome::Show(list) => {
                    log!("[ADMIN] Showing {} pending businesses", list.len());
                    feedback.set(None);
                    businesses.set(list);
                    section_visible.set(true);
                }
                ListOutcome::Message(message) => {
                    feedback.set(Some(message));
                    section_visible.set(false);
                }
            }
        });
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = key_input.get().map(|input| input.value()).unwrap_or_default();
        let Some(key) = AdminKey::parse(&raw) else {
            feedback.set(Some(Feedback::error(EMPTY_KEY_MESSAGE)));
            return;
        };

        feedback.set(Some(Feedback::info(LOADING_MESSAGE)));
        active_key.set_value(Some(key.clone()));
        refresh(key);
    };

    let handle_list_click = move |ev: MouseEvent| {
        let Some((action, business_id)) = moderation_target(&ev) else {
            return;
        };
        let Some(key) = active_key.get_value() else {
            warn!("[ADMIN] {} clicked with no admin key loaded", action.label());
            return;
        };
        let config = config.get_value();

        spawn_local(async move {
            let result = api::moderate_business(&config, &key, action, &business_id).await;
            match &result {
                Ok(()) => log!("[ADMIN] {} succeeded for business {}", action.label(), business_id),
                Err(err) => warn!(
                    "[ADMIN] {} failed for business {}: {}",
                    action.label(),
                    business_id,
                    err
                ),
            }
            alert(action.alert_message(&result));
            if result.is_ok() {
                refresh(key);
            }
        });
    };

    view! {
        <NavBar />
        <main class="container mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">{ "Admin Panel" }</h1>
            <form id="admin-key-form" class="mb-4" on:submit=handle_submit>
                <label for="admin-key-input" class="block mb-2">{ "Admin Key" }</label>
                <input
                    id="admin-key-input"
                    type="password"
                    class="border rounded p-2 w-full"
                    placeholder="Enter admin key"
                    autocomplete="off"
                    node_ref=key_input
                />
                <button
                    id="submit-admin-key-button"
                    type="submit"
                    class="bg-blue-600 text-white px-4 py-2 rounded mt-2"
                >
                    { "Load Pending Businesses" }
                </button>
            </form>
            <p
                id="admin-feedback"
                class=move || feedback.with(|f| f.as_ref().map(Feedback::class).unwrap_or("mt-2 hidden"))
            >
                { move || feedback.with(|f| f.as_ref().map(|f| f.message.clone()).unwrap_or_default()) }
            </p>
            <section id="pending-businesses-section" class="mt-4" class:hidden=move || !section_visible.get()>
                <h2 class="text-xl font-semibold mb-2">{ "Pending Businesses" }</h2>
                <ul id="pending-businesses-list" class="space-y-4" on:click=handle_list_click>
                    { move || businesses.get().into_iter().map(|business| view! {
                        <PendingBusinessCard business=business />
                    }).collect::<Vec<_>>() }
                </ul>
            </section>
        </main>
    }
}
