use serde::{Deserialize, Serialize};

use crate::model::PaginationResult;

/// 返回信息的包装
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase<T> {
    /// 状态码
    pub status: i32,
    /// 错误信息
    pub message: String,
    /// 内容
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn new(status: i32, message: &str, content: Option<T>) -> Self {
        Self {
            status,
            message: message.to_string(),
            content,
        }
    }

    pub fn ok(content: Option<T>) -> Self {
        Self::new(200, "Ok", content)
    }

    pub fn err(status: i32, message: &str, content: Option<T>) -> Self {
        Self::new(status, message, content)
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo<T> {
    pub page_size: u64,
    pub page_index: u64,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> PageInfo<T> {
    pub fn new(page_index: u64, page_size: u64, result: PaginationResult<T>) -> Self {
        Self {
            page_size,
            page_index,
            total: result.total,
            items: result.items,
        }
    }
}
