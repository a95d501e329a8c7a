use shared::outbound::{build_claim_url, sub_id_from_query};
use web_sys::window;

/// Raw query string of the current page, empty when unavailable.
pub fn current_query() -> String {
    if let Some(window) = window() {
        if let Ok(search) = window.location().search() {
            return search;
        }
    }
    String::new()
}

/// Outbound signup URL for the CTA. The affiliate sub id is read from the
/// page's query string at click time and forwarded when present.
pub fn claim_url() -> String {
    let query = current_query();
    build_claim_url(sub_id_from_query(&query).as_deref())
}
