//! Generator Handles
//!
//! A generator is a producer running on its own thread, handing values to the
//! consumer through a [rendezvous](crate::channel) channel. The consumer side
//! is a [`Generator`], which is an ordinary [`Iterator`].
//!
//! Whether a generator ever ends is part of its type:
//!
//! - [`Finite`] producers close the channel after their last value, so the
//!   consumer eventually sees [`Recv::End`] and can [`drain`](Generator::drain).
//! - [`Infinite`] producers never close. The consumer stops whenever it wants
//!   by dropping the handle; the producer notices on its next send and exits.
//!
//! If the producer panics (for instance inside a user-supplied fold
//! function), the panic resurfaces on the consumer thread at the next receive.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::channel::{rendezvous, Receiver, Recv, SendError, Sender};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Finite {}
    impl Sealed for super::Infinite {}
}

/// Marker for generators that close their channel when done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

/// Marker for generators that produce values forever
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infinite;

/// How a producer body finishes.
pub trait Termination: sealed::Sealed + Send + 'static {
    /// What a producer body returns when it runs out of values
    type Output;

    /// Whether the producer ever closes its channel
    const ENDLESS: bool;

    /// Called with the sender once the body has returned successfully
    fn finish<T>(output: Self::Output, tx: Sender<T>);
}

impl Termination for Finite {
    type Output = ();
    const ENDLESS: bool = false;

    fn finish<T>(_output: (), tx: Sender<T>) {
        tx.close();
    }
}

impl Termination for Infinite {
    type Output = Infallible;
    const ENDLESS: bool = true;

    fn finish<T>(output: Infallible, _tx: Sender<T>) {
        match output {}
    }
}

/// Handle to a running producer.
///
/// Dropping it disconnects the channel, which stops the producer at its next
/// send.
#[derive(Debug)]
pub struct Generator<T, K = Finite> {
    // Declared first so the receiver is dropped before the join handle is detached.
    rx: Receiver<T>,
    name: &'static str,
    producer: Option<JoinHandle<()>>,
    finished: bool,
    _kind: PhantomData<K>,
}

impl<T, K: Termination> Generator<T, K> {
    /// Take the next value, blocking until the producer hands it over.
    ///
    /// Only ever returns `Item` or `End`. A producer panic is re-raised here.
    pub fn recv(&mut self) -> Recv<T> {
        if self.finished {
            return Recv::End;
        }

        match self.rx.recv() {
            Recv::Item(value) => Recv::Item(value),
            Recv::End | Recv::Hangup => {
                self.finished = true;
                self.reap();
                Recv::End
            }
        }
    }

    /// Name of the algorithm producing values (`"count"`, `"pairwise"`, ...)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check if this generator ever ends
    pub fn is_endless(&self) -> bool {
        K::ENDLESS
    }

    /// Check if the stream has been observed to end
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Another consumer for the same stream.
    ///
    /// Each value is delivered to exactly one consumer. Producer panics are
    /// only re-raised through the `Generator` itself; receivers see them as
    /// [`Recv::Hangup`]. The producer keeps running while any receiver is
    /// alive, even after this handle is dropped.
    pub fn receiver(&self) -> Receiver<T> {
        self.rx.clone()
    }

    /// Join the producer thread and re-raise its panic, if any
    fn reap(&mut self) {
        if let Some(producer) = self.producer.take() {
            if let Err(payload) = producer.join() {
                std::panic::resume_unwind(payload);
            }
        }
    }
}

impl<T, K: Termination> Iterator for Generator<T, K> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.recv().into_item()
    }
}

impl<T> Generator<T, Finite> {
    /// Receive every remaining value
    pub fn drain(mut self) -> Vec<T> {
        let mut values = Vec::new();
        while let Recv::Item(value) = self.recv() {
            values.push(value);
        }
        values
    }
}

impl<T> Generator<T, Infinite> {
    /// Receive the next `n` values
    pub fn take_vec(&mut self, n: usize) -> Vec<T> {
        let mut values = Vec::with_capacity(n);
        while values.len() < n {
            match self.recv() {
                Recv::Item(value) => values.push(value),
                Recv::End | Recv::Hangup => break,
            }
        }
        values
    }
}

/// Starts producer threads according to a [`GeneratorConfig`].
///
/// Every algorithm in [`itertools`](crate::itertools) is available both as a
/// free function (using `Spawner::default()`) and as a method here.
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    config: GeneratorConfig,
}

impl Spawner {
    /// Create a spawner with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run `body` on a new thread, feeding the returned generator.
    ///
    /// `body` sends with `?` and returns early once the consumer is gone.
    /// When a finite body returns `Ok(())` the channel is closed for it.
    pub fn spawn<T, K, F>(&self, name: &'static str, body: F) -> Result<Generator<T, K>>
    where
        T: Send + 'static,
        K: Termination,
        F: FnOnce(&Sender<T>) -> std::result::Result<K::Output, SendError<T>> + Send + 'static,
    {
        let (tx, rx) = rendezvous();

        let mut builder = thread::Builder::new().name(format!("{}-{}", self.config.thread_name, name));
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }

        let producer = builder
            .spawn(move || {
                debug!(generator = name, "producer started");
                match body(&tx) {
                    Ok(output) => {
                        debug!(generator = name, emitted = tx.delivered(), "producer exhausted");
                        K::finish(output, tx);
                    }
                    Err(SendError(_)) => {
                        debug!(generator = name, emitted = tx.delivered(), "consumer went away");
                    }
                }
            })
            .map_err(|e| Error::spawn(name, e))?;

        trace!(generator = name, endless = K::ENDLESS, "generator spawned");

        Ok(Generator {
            rx,
            name,
            producer: Some(producer),
            finished: false,
            _kind: PhantomData,
        })
    }
}
