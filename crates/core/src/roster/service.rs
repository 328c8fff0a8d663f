//! Roster reporting service - core business logic

use std::sync::Arc;

use socportal_domain::{MonthlyReport, Result, ShiftRequest, SocPortalError};
use tracing::warn;

use super::grouper::group_by_week;
use super::ports::{RosterProvider, ShiftRequestGateway};
use super::summary::summarize;

/// Orchestrates roster fetches into derived monthly views and forwards
/// shift-change requests to the portal
pub struct RosterService {
    provider: Arc<dyn RosterProvider>,
    gateway: Arc<dyn ShiftRequestGateway>,
}

impl RosterService {
    /// Create a new roster service
    pub fn new(provider: Arc<dyn RosterProvider>, gateway: Arc<dyn ShiftRequestGateway>) -> Self {
        Self { provider, gateway }
    }

    /// Fetch one month's roster and derive the grouped-week view plus the
    /// per-member summary table.
    ///
    /// Notes that violate their own invariant (an exchange that changes
    /// nothing, a leave not ending in LEAVE) are logged and kept; the
    /// upstream store already accepted them.
    pub async fn monthly_report(
        &self,
        month: u32,
        year: i32,
        members: &[String],
    ) -> Result<MonthlyReport> {
        if !(1..=12).contains(&month) {
            return Err(SocPortalError::InvalidInput(format!("month out of range: {month}")));
        }

        let days = self.provider.fetch_roster(month, year).await?;

        for day in &days {
            for note in &day.notes {
                if !note.is_consistent() {
                    warn!(date = %day.date, requested_by = %note.requested_by, "inconsistent shift change note");
                }
            }
        }

        let summary = summarize(&days, members, year, month)?;
        let weeks = group_by_week(days);

        Ok(MonthlyReport { weeks, summary })
    }

    /// File a shift-exchange request with the portal
    pub async fn request_exchange(&self, request: &ShiftRequest) -> Result<()> {
        validate_request(request)?;
        self.gateway.submit_exchange(request).await
    }

    /// File a leave request with the portal
    pub async fn request_leave(&self, request: &ShiftRequest) -> Result<()> {
        validate_request(request)?;
        self.gateway.submit_leave(request).await
    }
}

fn validate_request(request: &ShiftRequest) -> Result<()> {
    if request.reason.trim().is_empty() {
        return Err(SocPortalError::InvalidInput("reason must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use socportal_domain::RosterDay;

    use super::*;

    struct FixedRoster(Vec<RosterDay>);

    #[async_trait]
    impl RosterProvider for FixedRoster {
        async fn fetch_roster(&self, _month: u32, _year: i32) -> Result<Vec<RosterDay>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingGateway {
        exchanges: Mutex<Vec<ShiftRequest>>,
        leaves: Mutex<Vec<ShiftRequest>>,
    }

    #[async_trait]
    impl ShiftRequestGateway for RecordingGateway {
        async fn submit_exchange(&self, request: &ShiftRequest) -> Result<()> {
            self.exchanges.lock().unwrap().push(request.clone());
            Ok(())
        }

        async fn submit_leave(&self, request: &ShiftRequest) -> Result<()> {
            self.leaves.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn day(date: &str, member: &str, code: &str) -> RosterDay {
        RosterDay {
            date: date.parse().unwrap(),
            day: String::new(),
            notes: Vec::new(),
            shifts: [(member.to_string(), code.into())].into(),
        }
    }

    fn request() -> ShiftRequest {
        ShiftRequest {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            assigned_to: Some("sizan".to_string()),
            reason: "exam".to_string(),
            handover_task: "alert triage".to_string(),
            communicated_person: "shift lead".to_string(),
        }
    }

    fn service_with(days: Vec<RosterDay>) -> (RosterService, Arc<RecordingGateway>) {
        let gateway = Arc::new(RecordingGateway::default());
        let service = RosterService::new(Arc::new(FixedRoster(days)), gateway.clone());
        (service, gateway)
    }

    #[tokio::test]
    async fn monthly_report_combines_weeks_and_summary() {
        let days = vec![
            day("2024-03-01", "tanvir", "REGULAR"),
            day("2024-03-02", "tanvir", "OFFDAY"),
            day("2024-03-03", "tanvir", "NIGHT"),
        ];
        let (service, _) = service_with(days);

        let members = vec!["tanvir".to_string()];
        let report = service.monthly_report(3, 2024, &members).await.unwrap();

        assert_eq!(report.weeks.len(), 2);
        assert_eq!(report.summary.members["tanvir"].workdays, 2);
        // March 2024 has 21 nominal workdays (5 Fridays, 5 Saturdays)
        assert_eq!(report.summary.total_workdays, 21);
    }

    #[tokio::test]
    async fn monthly_report_rejects_bad_month() {
        let (service, _) = service_with(Vec::new());
        let err = service.monthly_report(13, 2024, &[]).await.unwrap_err();
        assert!(matches!(err, SocPortalError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn requests_are_forwarded_to_the_gateway() {
        let (service, gateway) = service_with(Vec::new());

        service.request_exchange(&request()).await.unwrap();
        service.request_leave(&request()).await.unwrap();

        assert_eq!(gateway.exchanges.lock().unwrap().len(), 1);
        assert_eq!(gateway.leaves.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_reason_is_rejected_before_the_gateway() {
        let (service, gateway) = service_with(Vec::new());

        let mut bad = request();
        bad.reason = "  ".to_string();
        let err = service.request_leave(&bad).await.unwrap_err();

        assert!(matches!(err, SocPortalError::InvalidInput(_)));
        assert!(gateway.leaves.lock().unwrap().is_empty());
    }
}
