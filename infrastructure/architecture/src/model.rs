use serde::{Deserialize, Serialize};

/// 聚合根标记特性
///
/// Only aggregate roots can be loaded and stored through a repository.
pub trait AggregateRoot {}

/// 分页结构体
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 分页页码，从 1 开始
    #[serde(default = "Pagination::default_page_index")]
    pub page_index: u64,
    /// 分页大小
    #[serde(default = "Pagination::default_page_size")]
    pub page_size: u64,
}

impl Pagination {
    pub const MAX_PAGE_SIZE: u64 = 100;

    fn default_page_index() -> u64 {
        1
    }

    fn default_page_size() -> u64 {
        10
    }

    /// Page size clamped into `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> u64 {
        self.page_size.clamp(1, Self::MAX_PAGE_SIZE)
    }

    /// Zero based page number.
    pub fn page(&self) -> u64 {
        self.page_index.saturating_sub(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: Self::default_page_index(),
            page_size: Self::default_page_size(),
        }
    }
}

/// 分页处理结果
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult<T> {
    /// 页面元素列表
    pub items: Vec<T>,
    /// 总共元素个数
    pub total: u64,
}
