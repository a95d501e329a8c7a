/// Signup page the CTA navigates to. The affiliate sub id, when present in
/// the preland's own query string, is appended to this URL.
pub const CLAIM_BASE_URL: &str = "https://1wwndp.com/casino/list?open=register&p=hcbi";

/// Accepted query parameter names for the affiliate sub id, in priority order.
pub const SUB_ID_KEYS: [&str; 2] = ["sub_id", "subid"];

/// Pulls the affiliate sub id out of a raw query string (with or without the
/// leading '?'). Malformed pairs and empty values count as absent; this never
/// fails.
pub fn sub_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for key in SUB_ID_KEYS {
        for pair in query.split('&') {
            if let Some((k, v)) = pair.split_once('=') {
                if k == key && !v.is_empty() {
                    // Forwarded verbatim, no decoding.
                    return Some(v.to_string());
                }
            }
        }
    }
    None
}

pub fn build_claim_url(sub_id: Option<&str>) -> String {
    match sub_id {
        Some(id) => format!("{CLAIM_BASE_URL}&sub_id={id}"),
        None => CLAIM_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_id_present() {
        assert_eq!(sub_id_from_query("?sub_id=XYZ"), Some("XYZ".to_string()));
        assert_eq!(sub_id_from_query("sub_id=XYZ"), Some("XYZ".to_string()));
        assert_eq!(
            sub_id_from_query("?utm_source=fb&sub_id=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_alternate_key_accepted() {
        assert_eq!(sub_id_from_query("?subid=ALT"), Some("ALT".to_string()));
        // Primary key wins when both are present.
        assert_eq!(
            sub_id_from_query("?subid=second&sub_id=first"),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_missing_or_malformed_is_absent() {
        assert_eq!(sub_id_from_query(""), None);
        assert_eq!(sub_id_from_query("?"), None);
        assert_eq!(sub_id_from_query("?sub_id="), None);
        assert_eq!(sub_id_from_query("?sub_id"), None);
        assert_eq!(sub_id_from_query("?foo=bar&&=broken"), None);
    }

    #[test]
    fn test_claim_url_with_and_without_sub_id() {
        assert_eq!(build_claim_url(None), CLAIM_BASE_URL);
        let url = build_claim_url(Some("XYZ"));
        assert!(url.starts_with(CLAIM_BASE_URL));
        assert!(url.contains("sub_id=XYZ"));
    }

    #[test]
    fn test_end_to_end_from_query() {
        let url = build_claim_url(sub_id_from_query("?sub_id=XYZ").as_deref());
        assert_eq!(url, format!("{CLAIM_BASE_URL}&sub_id=XYZ"));
        let bare = build_claim_url(sub_id_from_query("").as_deref());
        assert_eq!(bare, CLAIM_BASE_URL);
    }
}
