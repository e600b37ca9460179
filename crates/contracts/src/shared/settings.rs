//! UI timing and paging constants shared by the console.

/// Page size used by every recipient source fetch
pub const PAGE_SIZE: usize = 50;

/// Debounce for recipient search inputs
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Debounce for the SMS modal search input
pub const SMS_SEARCH_DEBOUNCE_MS: u32 = 500;

/// Campaign detail refresh interval while the view is open
pub const CAMPAIGN_POLL_MS: u32 = 10_000;

/// Toasts disappear after this delay
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Template language used when the template does not declare one
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Number of individual failures listed after a bulk send
pub const FAILURE_PREVIEW_LIMIT: usize = 5;

/// Port of the backend when no explicit base URL is configured
pub const DEFAULT_API_PORT: u16 = 3000;
