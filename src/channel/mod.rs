//! Rendezvous Channels
//!
//! A single-slot synchronous handoff between one producer and one or more
//! consumers. `send` parks the producer until a consumer has taken the value,
//! so a producer is never more than one value ahead of whoever is reading.
//!
//! # Example
//! ```
//! use quickiter::channel::{rendezvous, Recv};
//!
//! let (tx, rx) = rendezvous();
//! let producer = std::thread::spawn(move || {
//!     for i in 0..3 {
//!         tx.send(i).unwrap();
//!     }
//!     tx.close();
//! });
//!
//! assert_eq!(rx.recv(), Recv::Item(0));
//! assert_eq!(rx.recv(), Recv::Item(1));
//! assert_eq!(rx.recv(), Recv::Item(2));
//! assert_eq!(rx.recv(), Recv::End);
//! producer.join().unwrap();
//! ```

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Result of a blocking receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recv<T> {
    /// The next value of the stream
    Item(T),
    /// The producer closed the channel and every value has been taken
    End,
    /// The producer went away without closing (it panicked)
    Hangup,
}

impl<T> Recv<T> {
    /// Convert into an `Option`, folding both terminal states into `None`
    pub fn into_item(self) -> Option<T> {
        match self {
            Recv::Item(value) => Some(value),
            Recv::End | Recv::Hangup => None,
        }
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Recv::Item(_))
    }
}

/// Returned by [`Sender::send`] when every receiver has been dropped.
///
/// Carries back the value that could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> std::fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sending on a channel with no receivers")
    }
}

impl<T: std::fmt::Debug> std::error::Error for SendError<T> {}

/// Non-blocking receive error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// No value is waiting right now
    Empty,
    /// Channel is closed and drained
    Closed,
    /// Producer dropped without closing
    Hangup,
}

impl std::fmt::Display for TryRecvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "channel empty"),
            Self::Closed => write!(f, "channel closed"),
            Self::Hangup => write!(f, "producer hung up"),
        }
    }
}

impl std::error::Error for TryRecvError {}

#[derive(Debug)]
struct Shared<T> {
    slot: Mutex<Slot<T>>,
    /// Signalled when a value lands in the slot or the producer side ends
    filled: Condvar,
    /// Signalled when a value is taken or the last receiver leaves
    taken: Condvar,
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    closed: bool,
    sender_alive: bool,
    receivers: usize,
    /// Number of values placed in the slot so far
    sent: u64,
    /// Number of values taken out of the slot so far
    received: u64,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        // Nothing user-supplied runs under this lock, so a poisoned guard is still consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create a rendezvous channel.
pub fn rendezvous<T>() -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot {
            value: None,
            closed: false,
            sender_alive: true,
            receivers: 1,
            sent: 0,
            received: 0,
        }),
        filled: Condvar::new(),
        taken: Condvar::new(),
    });

    (
        Sender {
            shared: Arc::clone(&shared),
        },
        Receiver { shared },
    )
}

/// The producing half. There is exactly one per channel.
#[derive(Debug)]
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Sender<T> {
    /// Hand a value to a consumer.
    ///
    /// Blocks until a receiver has taken it. Fails, returning the value, once
    /// every receiver has been dropped.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let mut slot = self.shared.lock();

        while slot.value.is_some() && slot.receivers > 0 {
            slot = self.shared.taken.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }
        if slot.receivers == 0 {
            return Err(SendError(value));
        }

        slot.value = Some(value);
        slot.sent += 1;
        let ticket = slot.sent;
        self.shared.filled.notify_one();

        while slot.received < ticket && slot.receivers > 0 {
            slot = self.shared.taken.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }

        if slot.received < ticket {
            // Nobody is left to take it; reclaim the value.
            return match slot.value.take() {
                Some(value) => Err(SendError(value)),
                None => Ok(()),
            };
        }
        Ok(())
    }

    /// Number of values consumers have taken so far
    pub fn delivered(&self) -> u64 {
        self.shared.lock().received
    }

    /// Check if any receiver is still attached
    pub fn has_receivers(&self) -> bool {
        self.shared.lock().receivers > 0
    }

    /// Close the channel after the last value.
    ///
    /// Consumes the sender, so nothing can be sent afterwards.
    pub fn close(self) {
        let mut slot = self.shared.lock();
        slot.closed = true;
        self.shared.filled.notify_all();
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        let mut slot = self.shared.lock();
        slot.sender_alive = false;
        self.shared.filled.notify_all();
    }
}

/// The consuming half. Cloning adds another consumer; each value goes to
/// exactly one of them.
#[derive(Debug)]
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Receiver<T> {
    /// Take the next value, blocking until one is available or the stream ends.
    ///
    /// Once the channel reports `End` it keeps reporting `End`.
    pub fn recv(&self) -> Recv<T> {
        let mut slot = self.shared.lock();

        while slot.value.is_none() && !slot.closed && slot.sender_alive {
            slot = self.shared.filled.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }

        if let Some(value) = slot.value.take() {
            slot.received += 1;
            self.shared.taken.notify_all();
            Recv::Item(value)
        } else if slot.closed {
            Recv::End
        } else {
            Recv::Hangup
        }
    }

    /// Take a value only if one is already waiting
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut slot = self.shared.lock();

        if let Some(value) = slot.value.take() {
            slot.received += 1;
            self.shared.taken.notify_all();
            Ok(value)
        } else if slot.closed {
            Err(TryRecvError::Closed)
        } else if !slot.sender_alive {
            Err(TryRecvError::Hangup)
        } else {
            Err(TryRecvError::Empty)
        }
    }

    /// Check if the producer has closed the channel
    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Iterate until the stream ends
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { rx: self }
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        self.shared.lock().receivers += 1;
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        let mut slot = self.shared.lock();
        slot.receivers -= 1;
        if slot.receivers == 0 {
            self.shared.taken.notify_all();
        }
    }
}

/// Borrowing iterator over a [`Receiver`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    rx: &'a Receiver<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.rx.recv().into_item()
    }
}
