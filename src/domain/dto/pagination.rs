//! 페이지네이션 쿼리
//!
//! `?skip=M&take=N` 형태의 쿼리 파라미터입니다. 음수는 역직렬화 단계에서 거부됩니다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_TAKE: u64 = 10;

/// 오프셋(skip)과 페이지 크기(take)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_skip")]
    pub skip: u64,
    #[serde(default = "default_take")]
    pub take: u64,
}

fn default_skip() -> u64 {
    DEFAULT_SKIP
}

fn default_take() -> u64 {
    DEFAULT_TAKE
}

impl PageRequest {
    pub fn new(skip: u64, take: u64) -> Self {
        Self { skip, take }
    }

    /// 이미 정렬된 반복자에 페이지 창을 적용합니다.
    pub fn window<I: Iterator>(self, items: I) -> impl Iterator<Item = I::Item> {
        items
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(self.take).unwrap_or(usize::MAX))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP, DEFAULT_TAKE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_query() {
        let page: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(page, PageRequest::new(0, 10));
    }

    #[test]
    fn test_window() {
        let page = PageRequest::new(2, 3);
        let items: Vec<i32> = page.window(1..=10).collect();
        assert_eq!(items, vec![3, 4, 5]);

        let beyond = PageRequest::new(20, 3);
        assert_eq!(beyond.window(1..=10).count(), 0);

        let empty = PageRequest::new(0, 0);
        assert_eq!(empty.window(1..=10).count(), 0);
    }
}
