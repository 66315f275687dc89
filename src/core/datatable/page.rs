use serde::Serialize;

/// One page of grid data plus the counts DataTables needs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableResult<T> {
    /// Request echo so the client can discard stale responses
    pub draw: i64,
    pub records_total: i64,
    pub records_filtered: i64,
    pub data: Vec<T>,
}

impl<T> DataTableResult<T> {
    pub fn new(draw: i64, records_total: i64, records_filtered: i64, data: Vec<T>) -> Self {
        Self {
            draw,
            records_total,
            records_filtered,
            data,
        }
    }
}

/// Page-number oriented result used by the search and order list paths
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> PagedResult<T> {
    /// Build a page from a fetched slice and the overall count.
    /// `total_pages` is `ceil(total_count / page_size)`.
    pub fn new(items: Vec<T>, page_number: i64, page_size: i64, total_count: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            items,
            page_number,
            page_size,
            total_count,
            total_pages,
            has_next_page: page_number < total_pages,
            has_previous_page: page_number > 1,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}
