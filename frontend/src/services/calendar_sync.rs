use async_trait::async_trait;

use crate::services::latency::simulate_latency;
use crate::services::types::{Appointment, CalendarProvider, ServiceError};

const SYNC_LATENCY_MS: u32 = 1_500;

/// Calendar-provider boundary. The real system would push an event to the
/// visitor's calendar; the mock just waits and reports success.
#[async_trait(?Send)]
pub trait CalendarSyncService {
    async fn sync(
        &self,
        appointment: &Appointment,
        provider: CalendarProvider,
    ) -> Result<(), ServiceError>;
}

#[derive(Debug, Default)]
pub struct MockCalendarSyncService;

#[async_trait(?Send)]
impl CalendarSyncService for MockCalendarSyncService {
    async fn sync(
        &self,
        appointment: &Appointment,
        provider: CalendarProvider,
    ) -> Result<(), ServiceError> {
        simulate_latency(SYNC_LATENCY_MS).await;
        log::info!(
            "mock calendar sync: {} pushed to {}",
            appointment.id,
            provider.label()
        );
        Ok(())
    }
}
