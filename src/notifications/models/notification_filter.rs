/// Typed selection over a single user's notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationFilter {
    pub user_id: String,
    pub kind: Option<String>,
    pub read: Option<bool>,
}

impl NotificationFilter {
    pub fn for_user(user_id: &str) -> Self {
        return Self {
            user_id: user_id.to_string(),
            kind: None,
            read: None,
        };
    }

    pub fn unread_for_user(user_id: &str) -> Self {
        return Self {
            read: Some(false),
            ..Self::for_user(user_id)
        };
    }

    pub fn with_kind(mut self, kind: Option<String>) -> Self {
        self.kind = kind;
        self
    }

    pub fn matches(&self, user_id: &str, kind: &str, read: bool) -> bool {
        if self.user_id != user_id {
            return false;
        }
        if let Some(k) = &self.kind {
            if k != kind {
                return false;
            }
        }
        if let Some(r) = self.read {
            if r != read {
                return false;
            }
        }

        true
    }

    /// WHERE clause with positional parameters starting at `$1`, in the
    /// order user_id, type, read. Returns the clause and the next free index.
    pub fn to_sql_where(&self) -> (String, u8) {
        let mut clauses = Vec::new();
        let mut index: u8 = 1;

        clauses.push(["user_id = $", &index.to_string()].concat());
        index += 1;

        if self.kind.is_some() {
            clauses.push(["\"type\" = $", &index.to_string()].concat());
            index += 1;
        }
        if self.read.is_some() {
            clauses.push(["read = $", &index.to_string()].concat());
            index += 1;
        }

        ([" WHERE ", &clauses.join(" AND ")].concat(), index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 20;

    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        return Self {
            page: page.unwrap_or(Self::DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT),
        };
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}
