//! Per-tab state of the multi-source recipient picker.
//!
//! Each fetch is tagged with a generation number. Only the response to the
//! most recently issued fetch is applied; anything older is dropped, so a slow
//! response for a tab the operator already left cannot overwrite newer data.

use super::geo_filter::GeoFilter;
use super::list_query::{ListQuery, Pagination};
use super::recipients::Recipient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTab {
    Farmers,
    Sales,
    PublicLeads,
    Manual,
}

impl SourceTab {
    pub fn all() -> [SourceTab; 4] {
        [
            SourceTab::Farmers,
            SourceTab::Sales,
            SourceTab::PublicLeads,
            SourceTab::Manual,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceTab::Farmers => "Farmers",
            SourceTab::Sales => "Sales customers",
            SourceTab::PublicLeads => "Public leads",
            SourceTab::Manual => "Manual entry",
        }
    }

    /// Manual entry has nothing to fetch
    pub fn is_remote(&self) -> bool {
        !matches!(self, SourceTab::Manual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceState {
    pub tab: SourceTab,
    pub load: LoadState,
    pub items: Vec<Recipient>,
    pub pagination: Pagination,
    /// 1-based
    pub page: usize,
    pub search: String,
    pub geo: GeoFilter,
    /// Extra filter such as the public link id
    pub link_id: String,
    generation: u64,
}

impl Default for SourceState {
    fn default() -> Self {
        Self::new(SourceTab::Farmers)
    }
}

impl SourceState {
    pub fn new(tab: SourceTab) -> Self {
        Self {
            tab,
            load: LoadState::Idle,
            items: Vec::new(),
            pagination: Pagination::default(),
            page: 1,
            search: String::new(),
            geo: GeoFilter::default(),
            link_id: String::new(),
            generation: 0,
        }
    }

    /// Switch source. Search and geographic filters reset; the selection is
    /// not part of this state and stays untouched.
    pub fn switch_tab(&mut self, tab: SourceTab) {
        self.generation += 1;
        self.tab = tab;
        self.search.clear();
        self.geo.clear();
        self.link_id.clear();
        self.page = 1;
        self.items.clear();
        self.pagination = Pagination::default();
        self.load = LoadState::Idle;
    }

    /// Mark a fetch as issued and return its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply a page of results. Returns false when the response is stale.
    pub fn apply_page(
        &mut self,
        generation: u64,
        items: Vec<Recipient>,
        pagination: Pagination,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.items = items;
        self.pagination = pagination;
        self.load = LoadState::Loaded;
        true
    }

    /// Record a failed fetch: the list empties, the error becomes visible.
    /// Returns false when the response is stale.
    pub fn apply_error(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.items.clear();
        self.pagination = Pagination::default();
        self.load = LoadState::Error(message.into());
        true
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        self.geo.set_district(district);
        self.page = 1;
    }

    pub fn set_taluka(&mut self, taluka: impl Into<String>) {
        self.geo.set_taluka(taluka);
        self.page = 1;
    }

    pub fn set_village(&mut self, village: impl Into<String>) {
        self.geo.set_village(village);
        self.page = 1;
    }

    pub fn set_link(&mut self, link_id: impl Into<String>) {
        self.link_id = link_id.into();
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.geo.clear();
        self.link_id.clear();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        let last = self.pagination.total_pages.max(1);
        self.page = page.clamp(1, last);
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::page(self.page)
            .search(&self.search)
            .geo(&self.geo)
            .param("linkId", &self.link_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str) -> Recipient {
        Recipient {
            id: id.to_string(),
            phone: "9876543210".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_switch_tab_resets_filters() {
        let mut s = SourceState::new(SourceTab::Farmers);
        s.set_search("ram");
        s.set_district("Satara");
        s.set_taluka("Wai");
        s.page = 3;
        s.switch_tab(SourceTab::Sales);
        assert_eq!(s.tab, SourceTab::Sales);
        assert!(s.search.is_empty());
        assert!(s.geo.is_empty());
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut s = SourceState::new(SourceTab::Farmers);
        let first = s.begin_fetch();
        s.switch_tab(SourceTab::PublicLeads);
        let second = s.begin_fetch();

        assert!(s.apply_page(second, vec![rec("lead")], Pagination::from_total(1, 1, 50)));
        assert!(!s.apply_page(first, vec![rec("farmer")], Pagination::from_total(1, 1, 50)));
        assert_eq!(s.items[0].id, "lead");
        assert_eq!(s.load, LoadState::Loaded);
    }

    #[test]
    fn test_error_empties_list() {
        let mut s = SourceState::new(SourceTab::Farmers);
        let g = s.begin_fetch();
        s.apply_page(g, vec![rec("a")], Pagination::from_total(1, 1, 50));
        let g = s.begin_fetch();
        assert!(s.apply_error(g, "Network error"));
        assert!(s.items.is_empty());
        assert_eq!(s.load.error(), Some("Network error"));
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let mut s = SourceState::new(SourceTab::Farmers);
        s.page = 4;
        s.set_village("Wai");
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_query_omits_blank_params() {
        let mut s = SourceState::new(SourceTab::PublicLeads);
        s.set_district("Pune");
        let q = s.query();
        assert_eq!(q.q, None);
        assert_eq!(q.district.as_deref(), Some("Pune"));
        assert!(q.extra.is_empty());
        s.set_link("link-1");
        assert_eq!(s.query().extra.get("linkId").map(String::as_str), Some("link-1"));
    }

    #[test]
    fn test_go_to_page_is_clamped() {
        let mut s = SourceState::new(SourceTab::Farmers);
        let g = s.begin_fetch();
        s.apply_page(g, vec![], Pagination::from_total(120, 1, 50));
        s.go_to_page(9);
        assert_eq!(s.page, 3);
        s.go_to_page(0);
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_clear_filters_returns_to_unfiltered_first_page() {
        let mut s = SourceState::new(SourceTab::PublicLeads);
        s.set_search("ram");
        s.set_district("Satara");
        s.set_taluka("Wai");
        s.set_village("Bavdhan");
        s.set_link("link-1");
        let g = s.begin_fetch();
        s.apply_page(g, vec![rec("a")], Pagination::from_total(200, 1, 50));
        s.go_to_page(4);
        assert_eq!(s.page, 4);

        s.clear_filters();
        assert_eq!(s.tab, SourceTab::PublicLeads);
        assert_eq!(s.page, 1);
        assert!(s.geo.is_empty());
        assert!(s.search.is_empty());
        let q = s.query();
        assert_eq!(q.page, 1);
        assert_eq!(q.q, None);
        assert_eq!(q.district, None);
        assert_eq!(q.taluka, None);
        assert_eq!(q.village, None);
        assert!(q.extra.is_empty());
    }
}
