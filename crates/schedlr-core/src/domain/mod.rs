//! # Domain Models
//!
//! Records returned by the upstream analytics providers.
//!
//! | Type | Provider | Description |
//! |------|----------|-------------|
//! | [`LinkedInPost`] | LinkedIn | A post with engagement counters |
//! | [`PinterestMetric`] | Pinterest | One likes/shares/comments data point |
//! | [`MetricKind`] | Pinterest | Which metric feed a record came from |
//!
//! Both record types implement [`Record`], the view filtering and id lookup
//! work against. Records are plain values: they live for one upstream call and
//! carry no identity beyond their `id` field.

mod models;

pub use models::{LinkedInPost, MetricKind, PinterestMetric, Record};
