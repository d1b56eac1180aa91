use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::shared::config::model::TrendsConfig;
use crate::shared::datetime::interval::Interval;
use crate::trends::cumulative::running_total;
use crate::trends::errors::TrendError;
use crate::trends::fetch::SeriesFetcher;
use crate::trends::format::{bucket_caption, iso_day};
use crate::trends::grid::zero_grid;
use crate::trends::merge::merge_series;
use crate::trends::range::ResolvedRange;
use crate::trends::source::{AggregateQueryExecutor, FilterCompiler};
use crate::trends::types::{DisplayMode, Entity, Team, TrendFilter, TrendResult};

/// Default cap on concurrently computed entities per run.
const DEFAULT_ENTITY_POOL: usize = 10;

/// Drives the full per-entity pipeline: interval and range resolution,
/// zero grid, sparse fetch, merge, and the optional display transform.
pub struct TrendAggregator {
    executor: Arc<dyn AggregateQueryExecutor>,
    compiler: Arc<dyn FilterCompiler>,
    config: TrendsConfig,
}

impl TrendAggregator {
    pub fn new(
        executor: Arc<dyn AggregateQueryExecutor>,
        compiler: Arc<dyn FilterCompiler>,
    ) -> Self {
        Self::with_config(executor, compiler, TrendsConfig::from_app_config())
    }

    pub fn with_config(
        executor: Arc<dyn AggregateQueryExecutor>,
        compiler: Arc<dyn FilterCompiler>,
        config: TrendsConfig,
    ) -> Self {
        Self {
            executor,
            compiler,
            config,
        }
    }

    /// Compute one `TrendResult` per requested entity, in request order.
    pub async fn run(
        &self,
        filter: &TrendFilter,
        team: &Team,
    ) -> Result<Vec<TrendResult>, TrendError> {
        self.run_at(filter, team, Utc::now()).await
    }

    /// `run` against an explicit evaluation instant. `now` is captured once
    /// so every entity resolves against identical bounds.
    pub async fn run_at(
        &self,
        filter: &TrendFilter,
        team: &Team,
        now: DateTime<Utc>,
    ) -> Result<Vec<TrendResult>, TrendError> {
        let pool = self.worker_pool(filter.entities.len());

        debug!(
            target: "trendb::trends",
            entities = filter.entities.len(),
            pool,
            display = ?filter.display,
            "Starting trend run"
        );

        // buffered() keeps request order no matter which fetch finishes
        // first; try_collect aborts the whole run on the first failure.
        let results: Result<Vec<TrendResult>, TrendError> = stream::iter(filter.entities.iter())
            .map(|entity| self.trend_for_entity(entity, filter, team, now))
            .buffered(pool)
            .try_collect()
            .await;

        if let Err(error) = &results {
            error.log_error();
        }
        results
    }

    fn worker_pool(&self, entity_count: usize) -> usize {
        self.config
            .max_concurrent_entities
            .unwrap_or(DEFAULT_ENTITY_POOL)
            .min(entity_count)
            .max(1)
    }

    async fn trend_for_entity(
        &self,
        entity: &Entity,
        filter: &TrendFilter,
        team: &Team,
        now: DateTime<Utc>,
    ) -> Result<TrendResult, TrendError> {
        let interval = Interval::parse(filter.interval.as_deref())?;
        let range = ResolvedRange::resolve(interval, filter.date_from, filter.date_to, now);

        let dense = zero_grid(&range);
        let fetcher = SeriesFetcher::new(self.executor.as_ref(), self.compiler.as_ref());
        let sparse = fetcher.fetch(entity, filter, team, &range).await?;
        let series = merge_series(&sparse, dense);

        let mut data: Vec<u64> = series.iter().map(|bucket| bucket.count).collect();
        let labels = series
            .iter()
            .map(|bucket| bucket_caption(bucket.start))
            .collect();
        let days = series.iter().map(|bucket| iso_day(bucket.start)).collect();

        // The scalar total always reflects raw per-bucket counts, even when
        // the series itself is re-shaped below.
        let count = data.iter().sum();

        if filter.display == DisplayMode::Cumulative {
            data = running_total(&data);
        }

        Ok(TrendResult {
            action: entity.clone(),
            label: entity.name.clone(),
            count,
            data,
            labels,
            days,
        })
    }
}
