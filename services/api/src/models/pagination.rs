use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const MAX_PAGE_SIZE: u32 = 100;

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort_by: None,
            sort_order: SortOrder::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.page < 1 {
            return Err(ApiError::Validation("page must be at least 1".to_string()));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(ApiError::Validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Offset into the upstream result set; callers apply it when issuing the
    /// request, `paginate` never re-slices.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Wraps one already-fetched page of items in the envelope. `items` is passed
/// through untouched; only the derived metadata is computed here.
pub fn paginate<T>(items: Vec<T>, total: u64, params: &PaginationParams) -> PaginatedResponse<T> {
    let page_size = params.page_size as u64;
    let total_pages = ((total + page_size - 1) / page_size) as u32;

    PaginatedResponse {
        items,
        total,
        page: params.page,
        page_size: params.page_size,
        total_pages,
        has_next: params.page < total_pages,
        has_previous: params.page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: u32, page_size: u32) -> PaginationParams {
        PaginationParams {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn metadata_matches_total_and_page_size() {
        let page = paginate(vec![1, 2, 3], 25, &params(2, 10));
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);

        let last = paginate(vec![4, 5], 25, &params(3, 10));
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let page = paginate(Vec::<u32>::new(), 30, &params(3, 10));
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_total_yields_zero_pages() {
        let page = paginate(Vec::<u32>::new(), 0, &params(1, 10));
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);

        // has_previous only reflects the requested page number
        let late = paginate(Vec::<u32>::new(), 0, &params(3, 10));
        assert!(late.has_previous);
        assert!(!late.has_next);
    }

    #[test]
    fn offset_is_page_minus_one_times_size() {
        assert_eq!(params(1, 10).offset(), 0);
        assert_eq!(params(4, 25).offset(), 75);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(params(0, 10).validate().is_err());
        assert!(params(1, 0).validate().is_err());
        assert!(params(1, 101).validate().is_err());
        assert!(params(1, 100).validate().is_ok());
    }
}
