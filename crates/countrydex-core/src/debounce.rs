// crates/countrydex-core/src/debounce.rs
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::trace;

enum Message<T> {
    Call(T),
    Cancel,
    /// Fire the pending value now, then acknowledge.
    Flush(Sender<()>),
}

/// Cancellable delayed invocation.
///
/// [`Debouncer::call`] schedules `callback(value)` after `delay`. A newer
/// call before the delay elapses replaces the pending value and restarts the
/// timer; [`Debouncer::cancel`] drops the pending value and
/// [`Debouncer::flush`] runs it immediately. Dropping the
/// debouncer discards anything still pending and joins the worker thread.
///
/// ```rust
/// use countrydex_core::debounce::Debouncer;
/// use std::sync::mpsc;
/// use std::time::Duration;
///
/// let (tx, rx) = mpsc::channel();
/// let search = Debouncer::new(Duration::from_millis(20), move |term: String| {
///     tx.send(term).ok();
/// });
/// search.call("ger".to_string());
/// search.call("germ".to_string());
/// assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), "germ");
/// ```
pub struct Debouncer<T: Send + 'static> {
    tx: Option<Sender<Message<T>>>,
    worker: Option<JoinHandle<()>>,
    delay: Duration,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, mut callback: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Message<T>>();
        let worker = thread::spawn(move || {
            let mut pending: Option<(T, Instant)> = None;
            loop {
                let message = match &pending {
                    Some((_, due)) => {
                        let wait = due.saturating_duration_since(Instant::now());
                        match rx.recv_timeout(wait) {
                            Ok(m) => Some(m),
                            Err(RecvTimeoutError::Timeout) => None,
                            Err(RecvTimeoutError::Disconnected) => return,
                        }
                    }
                    None => match rx.recv() {
                        Ok(m) => Some(m),
                        Err(_) => return,
                    },
                };

                match message {
                    Some(Message::Call(value)) => {
                        pending = Some((value, Instant::now() + delay));
                    }
                    Some(Message::Cancel) => {
                        trace!("debounced call cancelled");
                        pending = None;
                    }
                    Some(Message::Flush(ack)) => {
                        if let Some((value, _)) = pending.take() {
                            callback(value);
                        }
                        ack.send(()).ok();
                    }
                    None => {
                        if let Some((value, _)) = pending.take() {
                            callback(value);
                        }
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing anything still pending.
    pub fn call(&self, value: T) {
        if let Some(tx) = &self.tx {
            tx.send(Message::Call(value)).ok();
        }
    }

    /// Discard the pending call, if any.
    pub fn cancel(&self) {
        if let Some(tx) = &self.tx {
            tx.send(Message::Cancel).ok();
        }
    }

    /// Run the pending call now and wait until it has returned.
    ///
    /// Returns immediately when nothing is pending. Must not be called while
    /// holding a lock the callback takes.
    pub fn flush(&self) {
        let Some(tx) = &self.tx else { return };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(Message::Flush(ack_tx)).is_ok() {
            ack_rx.recv().ok();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Closing the channel stops the worker without firing.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            worker.join().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(u32) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |v| sink.lock().unwrap().push(v))
    }

    #[test]
    fn bursts_collapse_to_the_last_value() {
        let (seen, callback) = recorder();
        let d = Debouncer::new(Duration::from_millis(50), callback);
        for v in 1..=5 {
            d.call(v);
        }
        thread::sleep(Duration::from_millis(300));
        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn separate_bursts_fire_separately() {
        let (seen, callback) = recorder();
        let d = Debouncer::new(Duration::from_millis(20), callback);
        d.call(1);
        thread::sleep(Duration::from_millis(200));
        d.call(2);
        thread::sleep(Duration::from_millis(200));
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn cancel_discards_pending() {
        let (seen, callback) = recorder();
        let d = Debouncer::new(Duration::from_millis(100), callback);
        d.call(1);
        d.cancel();
        thread::sleep(Duration::from_millis(300));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn flush_fires_pending_before_returning() {
        let (seen, callback) = recorder();
        let d = Debouncer::new(Duration::from_secs(10), callback);
        d.call(1);
        d.call(2);
        d.flush();
        assert_eq!(*seen.lock().unwrap(), vec![2]);

        // Nothing pending: no call, no hang.
        d.flush();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn drop_discards_pending() {
        let (seen, callback) = recorder();
        let d = Debouncer::new(Duration::from_millis(200), callback);
        d.call(1);
        drop(d);
        assert!(seen.lock().unwrap().is_empty());
    }
}
