//! Detail page for one business: the record, its reviews and a map.
use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_router::use_query_map;

use crate::api;
use crate::components::map_view::{MapPin, MapView};
use crate::components::nav_bar::NavBar;
use crate::components::reviews_list::ReviewsList;
use crate::components::star_rating::Stars;
use crate::config::use_api_config;
use crate::models::business::{Business, PLACEHOLDER_IMAGE};
use crate::models::review::Review;
use crate::utils::query::parse_business_id;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Failed,
    Loaded {
        business: Business,
        reviews: Vec<Review>,
    },
}

impl DetailState {
    pub fn business(&self) -> Option<&Business> {
        match self {
            Self::Loaded { business, .. } => Some(business),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Loading => "Loading...".to_string(),
            Self::NotFound => "Business Not Found".to_string(),
            Self::Failed => "Error Loading Business".to_string(),
            Self::Loaded { business, .. } => business.name.clone(),
        }
    }

    pub fn category(&self) -> String {
        self.business().map(Business::category_label).unwrap_or_default()
    }

    pub fn location(&self) -> String {
        match self {
            Self::Loading => String::new(),
            Self::NotFound => "Please return to the directory.".to_string(),
            Self::Failed => {
                "There was an error loading the business details. Please try again.".to_string()
            }
            Self::Loaded { business, .. } => business.location_label(),
        }
    }

    pub fn description(&self) -> String {
        self.business()
            .map(|business| business.description.clone())
            .unwrap_or_default()
    }

    /// Message for the map area when no map is drawn.
    pub fn map_fallback(&self) -> Option<String> {
        let message = match self {
            Self::Loading => return None,
            Self::NotFound => "Map location not available.",
            Self::Failed => "Map not available due to loading error.",
            Self::Loaded { business, .. } => match business.coordinates() {
                Some(_) => return None,
                None => "Map location not available for this business.",
            },
        };
        Some(message.to_string())
    }

    pub fn map_pin(&self) -> Option<MapPin> {
        self.business().and_then(MapPin::for_business)
    }
}

/// Route component for `/business?id=…`.
#[component]
pub fn BusinessDetailPage() -> impl IntoView {
    let query = use_query_map();
    let business_id = create_memo(move |_| {
        query.with(|params| parse_business_id(params.get("id").map(String::as_str)))
    });

    view! {
        <NavBar />
        { move || view! { <BusinessDetail business_id=business_id.get() /> } }
    }
}

#[component]
pub fn BusinessDetail(business_id: Option<u64>) -> impl IntoView {
    let config = use_api_config();
    let state = create_rw_signal(match business_id {
        Some(_) => DetailState::Loading,
        None => DetailState::NotFound,
    });

    match business_id {
        Some(id) => {
            create_effect(move |_| {
                let config = config.clone();
                spawn_local(async move {
                    match api::fetch_business_page(&config, id).await {
                        Ok((business, reviews)) => {
                            log!("[DETAIL] Loaded business {} with {} reviews", id, reviews.len());
                            state.set(DetailState::Loaded { business, reviews });
                        }
                        Err(err) => {
                            error!("[DETAIL] Error displaying business {}: {}", id, err);
                            state.set(DetailState::Failed);
                        }
                    }
                });
            });
        }
        None => warn!("[DETAIL] No business id in the URL"),
    }

    let website = move || {
        state.with(|state| {
            state.business().map(|business| match business.website() {
                Some(url) => {
                    let url = url.to_string();
                    view! {
                        { "Website: " }
                        <a href=url.clone() target="_blank" rel="noopener" class="text-blue-600 hover:underline">{ url }</a>
                    }
                    .into_view()
                }
                None => "Website: Not available".into_view(),
            })
        })
    };

    let reviews = move || {
        state.with(|state| match state {
            DetailState::Loading => view! {
                <p class="text-gray-600">{ "Loading reviews..." }</p>
            }
            .into_view(),
            DetailState::NotFound => view! {
                <p class="text-red-500">{ "Error: No business ID provided in the URL." }</p>
            }
            .into_view(),
            DetailState::Failed => view! {
                <p class="text-red-500">{ "Could not load reviews." }</p>
            }
            .into_view(),
            DetailState::Loaded { reviews, .. } => view! {
                <ReviewsList reviews=reviews.clone() />
            }
            .into_view(),
        })
    };

    view! {
        <main class="container mx-auto p-4">
            <div class="grid md:grid-cols-2 gap-6">
                <img
                    id="detail-business-image"
                    class="w-full rounded-lg"
                    src=move || state.with(|s| s.business().map(|b| b.image_src().to_string()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()))
                    alt=move || state.with(|s| s.business().map(Business::image_alt).unwrap_or_default())
                />
                <div>
                    <h1 id="detail-business-name" class="text-3xl font-bold">{ move || state.with(DetailState::name) }</h1>
                    <p id="detail-business-category" class="text-gray-600">{ move || state.with(DetailState::category) }</p>
                    <div id="detail-business-rating" class="my-2">
                        { move || state.with(|s| s.business().map(|b| {
                            let rating = b.rating();
                            view! { <Stars rating=rating /> }
                        })) }
                    </div>
                    <p id="detail-business-location">{ move || state.with(DetailState::location) }</p>
                    <p id="detail-business-description" class="mt-2">{ move || state.with(DetailState::description) }</p>
                    <ul class="mt-4 space-y-1">
                        <li id="detail-business-phone">{ move || state.with(|s| s.business().map(Business::phone_label).unwrap_or_default()) }</li>
                        <li id="detail-business-email">{ move || state.with(|s| s.business().map(Business::email_label).unwrap_or_default()) }</li>
                        <li id="detail-business-website">{ website }</li>
                        <li id="detail-business-hours">{ move || state.with(|s| s.business().map(Business::hours_label).unwrap_or_default()) }</li>
                    </ul>
                </div>
            </div>
            <section class="mt-6">
                <h2 class="text-xl font-semibold mb-2">{ "Location" }</h2>
                <MapView
                    pin=Signal::derive(move || state.with(DetailState::map_pin))
                    fallback=Signal::derive(move || state.with(DetailState::map_fallback))
                />
            </section>
            <section class="mt-6">
                <h2 class="text-xl font-semibold mb-2">{ "Reviews" }</h2>
                <div id="detail-business-reviews">{ reviews }</div>
            </section>
        </main>
    }
}
