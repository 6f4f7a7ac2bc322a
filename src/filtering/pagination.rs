use axum::http::header::HeaderMap;

use crate::models::ListParams;

const DEFAULT_OFFSET: u64 = 0;
const DEFAULT_LIMIT: u64 = 10;

/// Extract offset and page size from the listing parameters, applying the
/// API-wide defaults when they are absent.
#[must_use]
pub fn parse_page(params: &ListParams) -> (u64, u64) {
    (
        params.offset.unwrap_or(DEFAULT_OFFSET),
        params.limit.unwrap_or(DEFAULT_LIMIT),
    )
}

/// Sanitize a resource name for use in HTTP headers.
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the Content-Range header for one page of results.
///
/// The resource name is sanitized so a hostile name cannot inject header
/// lines.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let max_offset_limit = offset
        .saturating_add(limit)
        .saturating_sub(1)
        .min(total_count);
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {offset}-{max_offset_limit}/{total_count}");

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    } else {
        headers.insert(
            "Content-Range",
            format!("items {offset}-{max_offset_limit}/{total_count}")
                .parse()
                .unwrap_or_else(|_| "items 0-0/0".parse().unwrap()),
        );
    }

    headers
}
