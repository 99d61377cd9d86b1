use crossterm::event::{self, Event};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Terminal input reader that lives exactly as long as this value.
///
/// The reader polls with a short timeout so it can notice the stop flag;
/// dropping the listener ends it on every exit path.
pub struct KeyboardListener {
    stop: Arc<AtomicBool>,
}

impl KeyboardListener {
    pub fn start() -> (Self, mpsc::Receiver<std::io::Result<Event>>) {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        tokio::task::spawn_blocking(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        let _ = tx.blocking_send(Err(e));
                        break;
                    }
                }
                match event::read() {
                    Ok(evt) => {
                        if tx.blocking_send(Ok(evt)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.blocking_send(Err(e));
                        break;
                    }
                }
            }
            tracing::debug!("keyboard listener stopped");
        });

        (Self { stop }, rx)
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
