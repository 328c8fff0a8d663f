//! Portal tracker service - grouped credential views

use std::sync::Arc;

use socportal_domain::{PageInfo, PortalGroup, PortalLogQuery, Result};

use super::grouper::group_by_url;
use super::ports::PortalLogProvider;

/// Fetches portal access records and serves the grouped-by-URL view
pub struct PortalTrackerService {
    provider: Arc<dyn PortalLogProvider>,
}

impl PortalTrackerService {
    /// Create a new portal tracker service
    pub fn new(provider: Arc<dyn PortalLogProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one page of the tracker log and group it by portal URL
    pub async fn grouped_log(
        &self,
        query: &PortalLogQuery,
    ) -> Result<(Vec<PortalGroup>, PageInfo)> {
        let (records, pages) = self.provider.fetch_log(query).await?;
        Ok((group_by_url(records), pages))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use socportal_domain::PortalAccessRecord;

    use super::*;

    struct FixedLog(Vec<PortalAccessRecord>);

    #[async_trait]
    impl PortalLogProvider for FixedLog {
        async fn fetch_log(
            &self,
            _query: &PortalLogQuery,
        ) -> Result<(Vec<PortalAccessRecord>, PageInfo)> {
            Ok((self.0.clone(), PageInfo { pages: 1, total: self.0.len() as u64 }))
        }
    }

    fn record(id: &str, url: &str, role: &str) -> PortalAccessRecord {
        PortalAccessRecord {
            id: id.to_string(),
            portal_url: url.to_string(),
            portal_name: "SIEM".to_string(),
            portal_category: "Monitoring".to_string(),
            role: role.to_string(),
            user_identifier: "soc@example.com".to_string(),
            password: "Individual".to_string(),
            tracked_by: "sizan".to_string(),
            remark: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn grouped_log_groups_one_page() {
        let service = PortalTrackerService::new(Arc::new(FixedLog(vec![
            record("1", "https://siem.example.com", "Agent"),
            record("2", "https://siem.example.com", "Admin"),
            record("3", "https://edr.example.com", "Admin"),
        ])));

        let (groups, pages) = service.grouped_log(&PortalLogQuery::default()).await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].records[0].role, "Admin");
        assert_eq!(pages.total, 3);
    }
}
