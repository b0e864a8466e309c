//! # Shared Helpers
//!
//! Formatting, phone validation, reference numbers, and pagination
//! arithmetic consumed by reporting and presentation tooling.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Format an amount as Philippine peso currency, e.g. `₱1,234.50`.
pub fn format_peso(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₱{grouped}.{frac:02}")
}

/// Format a timestamp as a readable string, e.g.
/// `June 01, 2025 at 09:30 AM`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %d, %Y at %I:%M %p").to_string()
}

/// Whether a string is a plausible Philippine phone number.
///
/// Mobile numbers are 11 digits starting with `09`; landlines carry an
/// area code for 10–11 digits total. Formatting characters (spaces,
/// dashes, parentheses, `+`) are ignored.
pub fn validate_phone_number(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && digits.starts_with("09") {
        return true;
    }

    (digits.len() == 10 || digits.len() == 11) && !digits.starts_with("09")
}

/// Generate a timestamped reference number, e.g. `REF-20250601093000`.
pub fn generate_reference_number(prefix: &str) -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    format!("{prefix}-{timestamp}")
}

/// Pagination metadata for a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    /// 1-based page number.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_prev: bool,
}

/// One page of items plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

/// Slice `items` into the requested 1-based page.
///
/// `page` and `per_page` are clamped to at least 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        pagination: PageInfo {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        },
    }
}
