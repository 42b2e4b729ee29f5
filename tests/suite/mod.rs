//! Integration scenarios driven through key events.

mod affirmations;
mod catalog_loading;
mod provider;
mod subscription_flow;
