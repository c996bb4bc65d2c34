//! Pagination types
//!
//! Defines the page cursor used by listing operations.

/// Paging metadata reported alongside one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageReport {
    /// Page number the server says it returned
    pub page: u32,
    /// Total number of pages available
    pub total_pages: u32,
    /// Number of results on this page
    pub count: u32,
}

impl PageReport {
    /// Create a new page report
    pub fn new(page: u32, total_pages: u32, count: u32) -> Self {
        Self {
            page,
            total_pages,
            count,
        }
    }
}

/// Result of checking the stop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Request the next page
    Continue,
    /// Pagination is complete
    Stop,
}

/// Decide whether the page just fetched was the last one.
///
/// The walk ends once `total_pages` has been reached or the server reports
/// an empty page. `requested_page` is the page number that was asked for;
/// the larger of it and the reported page is compared against `total_pages`,
/// so a server that keeps echoing a stale page number still terminates.
/// A response without paging metadata is the last page.
pub fn check_stop_condition(report: Option<&PageReport>, requested_page: u32) -> StopResult {
    let Some(report) = report else {
        return StopResult::Stop;
    };

    let current = report.page.max(requested_page);
    if report.total_pages <= current || report.count == 0 {
        StopResult::Stop
    } else {
        StopResult::Continue
    }
}

/// Tracks pagination state while walking a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Next page to request (1-based)
    page: u32,
    /// Pages fetched so far
    pages_fetched: u32,
    /// Total records fetched so far
    records_fetched: u64,
    /// Is pagination complete?
    done: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// First page number accepted by the API
    pub const FIRST_PAGE: u32 = 1;

    /// Create a cursor positioned at the first page
    pub fn new() -> Self {
        Self {
            page: Self::FIRST_PAGE,
            pages_fetched: 0,
            records_fetched: 0,
            done: false,
        }
    }

    /// Page number to request next
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Number of records fetched so far
    pub fn records_fetched(&self) -> u64 {
        self.records_fetched
    }

    /// Whether the listing is exhausted
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Record a fetched page and move to the next one if there is one
    pub fn advance(&mut self, report: Option<&PageReport>, records_count: usize) -> StopResult {
        self.pages_fetched += 1;
        self.records_fetched += records_count as u64;

        let result = check_stop_condition(report, self.page);
        match result {
            StopResult::Stop => self.done = true,
            StopResult::Continue => self.page += 1,
        }
        result
    }
}
