use tracing::debug;

use crate::trends::errors::TrendError;
use crate::trends::range::ResolvedRange;
use crate::trends::source::{
    AggregateQueryExecutor, AggregateRow, FilterCompiler, TrendQueryBuilder,
};
use crate::trends::types::{Entity, Team, TrendFilter};

/// Issues the per-entity aggregate query and returns the sparse
/// (bucket start, count) rows the store has events for.
pub struct SeriesFetcher<'a> {
    executor: &'a dyn AggregateQueryExecutor,
    compiler: &'a dyn FilterCompiler,
}

impl<'a> SeriesFetcher<'a> {
    pub fn new(executor: &'a dyn AggregateQueryExecutor, compiler: &'a dyn FilterCompiler) -> Self {
        Self { executor, compiler }
    }

    /// Fetch the sparse series for one entity. Request-level and
    /// entity-level property filters are compiled separately and AND-ed.
    pub async fn fetch(
        &self,
        entity: &Entity,
        filter: &TrendFilter,
        team: &Team,
        range: &ResolvedRange,
    ) -> Result<Vec<AggregateRow>, TrendError> {
        let mut builder = TrendQueryBuilder::new(range, team, &entity.event);

        if let Some(raw) = &filter.properties {
            builder = builder.predicate(self.compiler.compile(raw)?);
        }
        if let Some(raw) = &entity.properties {
            builder = builder.predicate(self.compiler.compile(raw)?);
        }

        let (sql, params) = builder.build();

        debug!(
            target: "trendb::trends",
            event = %entity.event,
            team_id = team.id,
            buckets = range.bucket_count,
            "Fetching sparse series"
        );

        let rows = self.executor.execute(&sql, &params).await?;
        Ok(rows)
    }
}
