use super::geo_filter::GeoFilter;
use super::settings::PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters accepted by every list endpoint.
///
/// Optional parameters that are blank are left out of the query string
/// entirely instead of being sent as empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taluka: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    /// Domain-specific filters (status, linkId, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::page(1)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ListQuery {
    pub fn page(page: usize) -> Self {
        Self {
            page: page.max(1),
            limit: PAGE_SIZE,
            q: None,
            district: None,
            taluka: None,
            village: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn search(mut self, term: &str) -> Self {
        self.q = non_blank(term);
        self
    }

    pub fn geo(mut self, filter: &GeoFilter) -> Self {
        self.district = non_blank(&filter.district);
        self.taluka = non_blank(&filter.taluka);
        self.village = non_blank(&filter.village);
        self
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        if let Some(v) = non_blank(value) {
            self.extra.insert(key.to_string(), v);
        }
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Pagination metadata as returned by list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub has_next_page: bool,
}

impl Pagination {
    /// Derive the metadata when the backend only reports a total
    pub fn from_total(total: usize, page: usize, limit: usize) -> Self {
        let total_pages = if total == 0 || limit == 0 {
            1
        } else {
            total.div_ceil(limit)
        };
        Self {
            total,
            total_pages,
            has_next_page: page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_is_not_sent() {
        let qs = ListQuery::page(1).search("   ").to_query_string();
        assert_eq!(qs, "page=1&limit=50");
    }

    #[test]
    fn test_search_and_geo_are_included_when_set() {
        let geo = GeoFilter {
            district: "Satara".into(),
            taluka: String::new(),
            village: String::new(),
        };
        let qs = ListQuery::page(2).search("ram").geo(&geo).to_query_string();
        assert_eq!(qs, "page=2&limit=50&q=ram&district=Satara");
    }

    #[test]
    fn test_extra_params_skip_blank_values() {
        let q = ListQuery::page(1).param("status", "PENDING").param("linkId", "");
        assert_eq!(q.extra.len(), 1);
        assert!(q.to_query_string().ends_with("status=PENDING"));
    }

    #[test]
    fn test_page_is_one_based() {
        assert_eq!(ListQuery::page(0).page, 1);
    }

    #[test]
    fn test_pagination_from_total() {
        let p = Pagination::from_total(101, 1, 50);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next_page);
        let p = Pagination::from_total(0, 1, 50);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next_page);
    }
}
