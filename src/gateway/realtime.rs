//! Realtime Subscription
//!
//! One websocket channel per page listening for changes to the board's wish
//! rows. Subscribing again tears the previous channel down first. A dropped
//! socket or a closed/refused channel is rejoined with backoff until the page
//! unsubscribes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};
use wishboard_core::realtime::{
    classify, heartbeat_message, join_message, leave_message, rejoin_delay_ms, Inbound, PhoenixMessage,
};
use wishboard_core::{BackendConfig, BoardId};

thread_local! {
    static ACTIVE: RefCell<Option<Subscription>> = const { RefCell::new(None) };
    /// Bumped by `unsubscribe`; a rejoin timer from an older generation does nothing
    static GENERATION: Cell<u64> = const { Cell::new(0) };
    static REJOIN_PENDING: Cell<bool> = const { Cell::new(false) };
    static ATTEMPTS: Cell<u32> = const { Cell::new(0) };
}

/// Everything needed to (re)join the same channel
#[derive(Clone)]
struct Target {
    backend: BackendConfig,
    board: BoardId,
    table: String,
    heartbeat_secs: u32,
    on_change: Rc<dyn Fn()>,
}

struct Subscription {
    socket: WebSocket,
    board: BoardId,
    refs: Rc<Cell<u64>>,
    _heartbeat: Interval,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.socket.ready_state() == WebSocket::OPEN {
            send(&self.socket, &leave_message(&self.board, next_ref(&self.refs)));
        }
        // Detached first so a deliberate close never schedules a rejoin
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onclose(None);
        let _ = self.socket.close();
        log::debug!("[realtime] unsubscribed from {}", self.board);
    }
}

/// Listen for row changes of `table` on `board`; `on_change` runs per notice
pub fn subscribe_to_board(
    backend: &BackendConfig,
    board: &BoardId,
    table: &str,
    heartbeat_secs: u32,
    on_change: impl Fn() + 'static,
) -> Result<(), JsValue> {
    unsubscribe();
    connect(&Target {
        backend: backend.clone(),
        board: board.clone(),
        table: table.to_string(),
        heartbeat_secs,
        on_change: Rc::new(on_change),
    })
}

/// Tear down the active channel, if any, and cancel a pending rejoin
pub fn unsubscribe() {
    GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
    REJOIN_PENDING.with(|p| p.set(false));
    ATTEMPTS.with(|a| a.set(0));
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    drop(previous);
}

fn connect(target: &Target) -> Result<(), JsValue> {
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    drop(previous);

    let socket = WebSocket::new(&target.backend.realtime_url())?;
    let refs = Rc::new(Cell::new(0u64));

    let on_open = {
        let socket = socket.clone();
        let refs = refs.clone();
        let target = target.clone();
        Closure::<dyn FnMut()>::new(move || {
            let join = join_message(&target.board, &target.table, &target.backend.anon_key, next_ref(&refs));
            send(&socket, &join);
        })
    };

    let on_message = {
        let target = target.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            let Some(frame) = ev.data().as_string() else {
                return;
            };
            match classify(&frame) {
                Inbound::Change => {
                    log::debug!("[realtime] change on {}", target.board);
                    (target.on_change)();
                }
                Inbound::Reply { ok: true } => ATTEMPTS.with(|a| a.set(0)),
                inbound if inbound.needs_rejoin() => {
                    log::warn!("[realtime] channel lost for {}: {}", target.board, frame);
                    schedule_rejoin(target.clone());
                }
                _ => {}
            }
        })
    };

    let on_close = {
        let target = target.clone();
        Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
            log::warn!("[realtime] socket closed (code {})", ev.code());
            schedule_rejoin(target.clone());
        })
    };

    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    let heartbeat = {
        let socket = socket.clone();
        let refs = refs.clone();
        Interval::new(target.heartbeat_secs.saturating_mul(1000), move || {
            if socket.ready_state() == WebSocket::OPEN {
                send(&socket, &heartbeat_message(next_ref(&refs)));
            }
        })
    };

    log::info!("[realtime] subscribing to {}", target.board);
    ACTIVE.with(|active| {
        *active.borrow_mut() = Some(Subscription {
            socket,
            board: target.board.clone(),
            refs,
            _heartbeat: heartbeat,
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
        });
    });
    Ok(())
}

/// Rejoin after a backoff unless one is already pending or the page unsubscribed
fn schedule_rejoin(target: Target) {
    if REJOIN_PENDING.with(|p| p.replace(true)) {
        return;
    }
    let attempt = ATTEMPTS.with(|a| {
        let n = a.get();
        a.set(n.saturating_add(1));
        n
    });
    let generation = GENERATION.with(Cell::get);
    let delay = rejoin_delay_ms(attempt);
    log::info!("[realtime] rejoining {} in {} ms (attempt {})", target.board, delay, attempt + 1);

    Timeout::new(delay, move || {
        if GENERATION.with(Cell::get) != generation {
            return;
        }
        REJOIN_PENDING.with(|p| p.set(false));
        if let Err(e) = connect(&target) {
            log::error!("[realtime] rejoin failed: {:?}", e);
            schedule_rejoin(target);
        }
    })
    .forget();
}

fn next_ref(refs: &Cell<u64>) -> u64 {
    let next = refs.get() + 1;
    refs.set(next);
    next
}

fn send(socket: &WebSocket, message: &PhoenixMessage) {
    match serde_json::to_string(message) {
        Ok(text) => {
            if let Err(e) = socket.send_with_str(&text) {
                log::error!("[realtime] send failed: {:?}", e);
            }
        }
        Err(e) => log::error!("[realtime] encode failed: {}", e),
    }
}
