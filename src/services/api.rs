use crate::api::StatisticsReader;
use crate::domain::statistics::Statistics;
use crate::services::{ServiceError, ServiceResult};

/// Returns the aggregate missing/located counts for the JSON API.
pub async fn get_statistics<A>(api: &A) -> ServiceResult<Statistics>
where
    A: StatisticsReader + ?Sized,
{
    api.get_statistics().await.map_err(ServiceError::from)
}
