//! Domain layer: entities, repository traits, and click processing.
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves a slug and responds immediately
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] drains the channel with retry logic
//! 4. The access counter is persisted via [`repositories::StatsRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
