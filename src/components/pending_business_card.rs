use leptos::*;
use crate::models::business::Business;
use crate::models::moderation::ModerationAction;

/// One pending submission in the admin list.
///
/// The buttons carry no handlers of their own; the list container dispatches
/// clicks using their `data-action` and `data-business-id` attributes.
#[component]
pub fn PendingBusinessCard(business: Business) -> impl IntoView {
    let Business {
        id,
        name,
        category,
        description,
        contact,
        location,
        ..
    } = business;

    let button = move |action: ModerationAction, class: &'static str| {
        view! {
            <button
                type="button"
                class=class
                data-action=action.as_attr()
                data-business-id=id.clone()
            >
                { action.label() }
            </button>
        }
    };

    view! {
        <li class="pending-business-card bg-white rounded-lg shadow p-4">
            <h3 class="text-lg font-bold">{ name }</h3>
            <p><strong>{ "Category: " }</strong>{ category }</p>
            <p><strong>{ "Description: " }</strong>{ description }</p>
            <p><strong>{ "Contact: " }</strong>{ contact }</p>
            <p><strong>{ "Location: " }</strong>{ location }</p>
            { button(ModerationAction::Approve, "approve-btn bg-green-500 text-white px-4 py-2 rounded mt-2 mr-2") }
            { button(ModerationAction::Delete, "delete-btn bg-red-500 text-white px-4 py-2 rounded mt-2") }
        </li>
    }
}
