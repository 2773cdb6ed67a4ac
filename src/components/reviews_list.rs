use leptos::*;
use crate::components::star_rating::Stars;
use crate::models::review::{sort_newest_first, Review};

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! {
            <p class="text-gray-600">{ "No reviews yet. Be the first!" }</p>
        }
        .into_view();
    }

    let mut reviews = reviews;
    sort_newest_first(&mut reviews);

    view! {
        <div class="space-y-4">
            {
                reviews.into_iter().map(|review| {
                    let rating = review.rating();
                    view! {
                        <div class="review-card bg-gray-100 p-4 rounded-lg shadow-sm">
                            <p class="font-semibold">
                                <span class="review-author">{ review.reviewer_name }</span>
                                " - "
                                <Stars rating=rating />
                            </p>
                            <p class="review-date text-sm text-gray-500 mb-2">{ review.review_date }</p>
                            <p class="review-text text-gray-700">{ review.body }</p>
                        </div>
                    }
                }).collect::<Vec<_>>()
            }
        </div>
    }
    .into_view()
}
