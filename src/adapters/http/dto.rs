//! Response envelopes shared across HTTP modules.

use serde::{Deserialize, Serialize};

use crate::ports::Page;

/// Standard error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `?page=&per_page=` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationResponse {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u32,
}

/// A page of items plus its pagination block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        T: From<S>,
    {
        let pagination = PaginationResponse {
            current_page: page.request.page(),
            total_pages: page.total_pages(),
            total_items: page.total_items,
            items_per_page: page.request.per_page(),
        };
        Self {
            items: page.items.into_iter().map(T::from).collect(),
            pagination,
        }
    }
}

/// Unpaginated list wrapper: `{"items": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn from_items<S>(items: Vec<S>) -> Self
    where
        T: From<S>,
    {
        Self {
            items: items.into_iter().map(T::from).collect(),
        }
    }
}
