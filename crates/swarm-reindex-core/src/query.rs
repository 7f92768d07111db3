//! The fixed open-reviews query.

/// Review listing endpoint, relative to the Swarm base URL.
pub const REVIEWS_PATH: &str = "/api/v9/reviews";

/// States that count as "open": waiting on a reviewer, waiting on the author,
/// or approved with a revision still pending.
pub const OPEN_REVIEW_STATES: [&str; 3] = ["needsReview", "needsRevision", "approved:isPending"];

/// Fields requested per review.
pub const REVIEW_FIELDS: [&str; 3] = ["id", "state", "pending"];

/// Build the query string for the open-reviews listing.
///
/// Swarm expects PHP-style `state[]` repetition and a comma-joined field
/// list, so the string is assembled by hand rather than form-encoded.
pub fn reviews_query() -> String {
    let states = OPEN_REVIEW_STATES
        .iter()
        .map(|state| format!("state[]={state}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{states}&fields={}", REVIEW_FIELDS.join(","))
}

/// Full listing URL for a Swarm base URL. A trailing `/` is ignored.
pub fn reviews_url(base_url: &str) -> String {
    format!(
        "{}{REVIEWS_PATH}?{}",
        base_url.trim_end_matches('/'),
        reviews_query()
    )
}
