//! Wishboard Core
//!
//! Layered like the backend of a desktop app, minus the storage:
//! - domain: wish rows, engagement rules, identity, board ids, regions
//! - repository: the remote gateway seam and an in-memory backend
//! - service: board operations following the reload-after-mutation protocol
//! - store / view: cached partitions and what the renderer shows
//! - postgrest / realtime: wire helpers for the hosted backend

pub mod config;
pub mod domain;
pub mod postgrest;
pub mod realtime;
pub mod repository;
pub mod service;
pub mod store;
pub mod view;

pub use config::{BackendConfig, BoardConfig, StorageKeys};
pub use domain::*;
pub use service::BoardService;
pub use store::WishStore;
pub use view::{AuthorFilter, BoardView};
