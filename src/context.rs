//! Application Context
//!
//! Reload triggers and the board service, provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wishboard_core::{BoardService, DomainResult};

use crate::dialog;
use crate::gateway::SupabaseGateway;

pub type Service = BoardService<SupabaseGateway>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to reload wishes from the backend - read
    pub wishes_version: ReadSignal<u32>,
    /// Bumped to reload wishes from the backend - write
    set_wishes_version: WriteSignal<u32>,
    /// Bumped to reload visited regions - read
    pub visits_version: ReadSignal<u32>,
    /// Bumped to reload visited regions - write
    set_visits_version: WriteSignal<u32>,
    service: StoredValue<Service>,
}

impl AppContext {
    pub fn new(service: Service) -> Self {
        let (wishes_version, set_wishes_version) = signal(0u32);
        let (visits_version, set_visits_version) = signal(0u32);
        Self {
            wishes_version,
            set_wishes_version,
            visits_version,
            set_visits_version,
            service: StoredValue::new(service),
        }
    }

    /// Trigger a reload of the wish list
    pub fn reload_wishes(&self) {
        self.set_wishes_version.update(|v| *v = v.wrapping_add(1));
    }

    /// Trigger a reload of the map overlay
    pub fn reload_visits(&self) {
        self.set_visits_version.update(|v| *v = v.wrapping_add(1));
    }

    /// Handle to the board service for an async handler
    pub fn service(&self) -> Service {
        self.service.get_value()
    }

    /// Run a wish mutation, reloading the list on success
    pub fn mutate_wishes<T: 'static>(&self, op: &'static str, call: impl Future<Output = DomainResult<T>> + 'static) {
        let ctx = *self;
        spawn_local(async move {
            match call.await {
                Ok(_) => ctx.reload_wishes(),
                Err(e) => dialog::report(op, &e),
            }
        });
    }

    /// Run a visit mutation, reloading the map on success
    pub fn mutate_visits<T: 'static>(&self, op: &'static str, call: impl Future<Output = DomainResult<T>> + 'static) {
        let ctx = *self;
        spawn_local(async move {
            match call.await {
                Ok(_) => ctx.reload_visits(),
                Err(e) => dialog::report(op, &e),
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
