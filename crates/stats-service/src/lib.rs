//! # stats-service
//!
//! Application layer: user registration, stats and trend reads, and the
//! refresh pipeline that pulls vendor data into the database.

pub mod dto;
pub mod services;

pub use dto::{
    CreateUserRequest, CurrentStatsResponse, HealthChecks, HealthResponse, IncreaseQuery,
    ReadinessResponse, StatsDeltaResponse, TrendHashtagResponse, TrendSongResponse,
    TrendVideoResponse, UserResponse, UserStatsResponse, VideoStatsResponse,
};
pub use services::{
    spawn_refresh_schedule, RefreshReport, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatsRefresher, StatsService, TrendService, UserService,
};
