use crate::domain::article::PageRequest;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub current_page: u32,
    /// 1-based index of the first row on this page; null when the page is empty.
    pub from: Option<u64>,
    pub last_page: u64,
    pub path: String,
    pub per_page: u32,
    pub to: Option<u64>,
    pub total: u64,
}

impl PaginationMeta {
    pub fn compute(page: PageRequest, total: u64, path: impl Into<String>) -> Self {
        let per_page = u64::from(page.per_page());
        let last_page = total.div_ceil(per_page).max(1);
        let offset = page.offset();
        let (from, to) = if offset < total {
            (Some(offset + 1), Some((offset + per_page).min(total)))
        } else {
            (None, None)
        };

        Self {
            current_page: page.page(),
            from,
            last_page,
            path: path.into(),
            per_page: page.per_page(),
            to,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) < self.last_page
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl PaginationLinks {
    /// `params` are carried over to every link so that following `next`
    /// keeps the same filters and page size.
    pub fn build(meta: &PaginationMeta, params: &[(&'static str, String)]) -> Self {
        let url = |page: u64| page_url(&meta.path, params, page);
        let current = u64::from(meta.current_page);
        Self {
            first: url(1),
            last: url(meta.last_page),
            prev: meta.has_previous().then(|| url(current - 1)),
            next: meta.has_next().then(|| url(current + 1)),
        }
    }
}

fn page_url(path: &str, params: &[(&'static str, String)], page: u64) -> String {
    let mut pairs: Vec<(&str, String)> = params.iter().map(|(k, v)| (*k, v.clone())).collect();
    pairs.push(("page", page.to_string()));
    match serde_urlencoded::to_string(&pairs) {
        Ok(query) => format!("{path}?{query}"),
        Err(_) => format!("{path}?page={page}"),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
}

impl<T> Paginated<T> {
    pub const fn new(data: Vec<T>, links: PaginationLinks, meta: PaginationMeta) -> Self {
        Self { data, links, meta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "http://localhost/api/articles";

    #[test]
    fn last_page_rounds_up() {
        let meta = PaginationMeta::compute(PageRequest::new(1, 15), 75, PATH);
        assert_eq!(meta.last_page, 5);
        let meta = PaginationMeta::compute(PageRequest::new(1, 15), 76, PATH);
        assert_eq!(meta.last_page, 6);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let meta = PaginationMeta::compute(PageRequest::new(1, 15), 0, PATH);
        assert_eq!(meta.last_page, 1);
        assert_eq!(meta.from, None);
        assert_eq!(meta.to, None);
        assert!(!meta.has_next());
        assert!(!meta.has_previous());
    }

    #[test]
    fn from_and_to_are_clamped_to_total() {
        let meta = PaginationMeta::compute(PageRequest::new(3, 10), 25, PATH);
        assert_eq!(meta.from, Some(21));
        assert_eq!(meta.to, Some(25));
    }

    #[test]
    fn page_past_the_end_keeps_true_totals() {
        let meta = PaginationMeta::compute(PageRequest::new(6, 15), 75, PATH);
        assert_eq!(meta.current_page, 6);
        assert_eq!(meta.total, 75);
        assert_eq!(meta.last_page, 5);
        assert_eq!(meta.from, None);
        assert!(meta.has_previous());
        assert!(!meta.has_next());
    }

    #[test]
    fn links_keep_filters_and_escape_values() {
        let meta = PaginationMeta::compute(PageRequest::new(2, 15), 75, PATH);
        let params = vec![
            ("lang", "zh".to_string()),
            ("title", "測試 a&b".to_string()),
            ("per_page", "15".to_string()),
        ];
        let links = PaginationLinks::build(&meta, &params);

        assert_eq!(
            links.first,
            format!("{PATH}?lang=zh&title=%E6%B8%AC%E8%A9%A6+a%26b&per_page=15&page=1")
        );
        assert!(links.last.ends_with("&page=5"));
        assert!(links.prev.as_deref().unwrap().ends_with("&page=1"));
        assert!(links.next.as_deref().unwrap().ends_with("&page=3"));
    }

    #[test]
    fn first_page_has_no_prev_and_last_page_has_no_next() {
        let first = PaginationMeta::compute(PageRequest::new(1, 15), 20, PATH);
        let links = PaginationLinks::build(&first, &[]);
        assert_eq!(links.prev, None);
        assert_eq!(links.next.as_deref(), Some("http://localhost/api/articles?page=2"));

        let last = PaginationMeta::compute(PageRequest::new(2, 15), 20, PATH);
        let links = PaginationLinks::build(&last, &[]);
        assert_eq!(links.next, None);
        assert_eq!(links.prev.as_deref(), Some("http://localhost/api/articles?page=1"));
    }
}
