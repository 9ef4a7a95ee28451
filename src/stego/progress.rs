// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Optional progress reporting for the pixel walk.
//!
//! The codec never requires a reporter. When one is passed, the LSB walk
//! calls [`Progress::advance`] once per row; the callback fires each time the
//! running pixel count crosses a multiple of the caller-chosen interval, and
//! once more from [`Progress::finish`].
//!
//! Counters are atomics so the same reporter works from rayon worker threads
//! under the `parallel` feature. Callbacks may then arrive out of order.

use core::sync::atomic::{AtomicU64, Ordering};

/// Callback signature: `(pixels_done, pixels_total)`.
pub type ProgressFn<'a> = dyn Fn(u64, u64) + Sync + 'a;

/// Pixel-walk progress reporter.
pub struct Progress<'a> {
    callback: &'a ProgressFn<'a>,
    interval: u64,
    total: AtomicU64,
    done: AtomicU64,
}

impl<'a> Progress<'a> {
    /// Report roughly every `interval` pixels. An interval of 0 is treated as 1.
    pub fn new(callback: &'a ProgressFn<'a>, interval: u64) -> Self {
        Self {
            callback,
            interval: interval.max(1),
            total: AtomicU64::new(0),
            done: AtomicU64::new(0),
        }
    }

    /// Report at whole-percent steps of `total` pixels.
    pub fn percent(callback: &'a ProgressFn<'a>, total: u64) -> Self {
        Self::new(callback, total / 100)
    }

    /// Reset the counter for a new walk over `total` pixels.
    pub fn init(&self, total: u64) {
        self.done.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Record `pixels` more pixels processed.
    pub fn advance(&self, pixels: u64) {
        let before = self.done.fetch_add(pixels, Ordering::Relaxed);
        let after = before + pixels;
        if before / self.interval != after / self.interval {
            (self.callback)(after, self.total.load(Ordering::Relaxed));
        }
    }

    /// Read the current `(done, total)` counters.
    pub fn get(&self) -> (u64, u64) {
        (self.done.load(Ordering::Relaxed), self.total.load(Ordering::Relaxed))
    }

    /// Mark the walk complete and notify.
    pub fn finish(&self) {
        let total = self.total.load(Ordering::Relaxed);
        self.done.store(total, Ordering::Relaxed);
        (self.callback)(total, total);
    }
}
