//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data layer boundary, turning
//! stored `i64` snowflakes back into `u64`. Services and handlers only see domain models.
//! Conversion to DTOs happens through `into_dto` in the controllers.

pub mod audit_log;
pub mod booster;
pub mod embed;
pub mod guild;
pub mod message_format;
pub mod moderation;
pub mod prune;
pub mod reminder;
pub mod role_menu;
pub mod tag;
pub mod ticket;
pub mod transcript;
pub mod user;

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}
