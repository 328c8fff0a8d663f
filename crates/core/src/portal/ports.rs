//! Port interface for the portal access tracker log

use async_trait::async_trait;
use socportal_domain::{PageInfo, PortalAccessRecord, PortalLogQuery, Result};

/// Source of tracked portal access records, one page at a time
#[async_trait]
pub trait PortalLogProvider: Send + Sync {
    /// Fetch one page of records matching `query`, plus the page info
    async fn fetch_log(&self, query: &PortalLogQuery)
        -> Result<(Vec<PortalAccessRecord>, PageInfo)>;
}
