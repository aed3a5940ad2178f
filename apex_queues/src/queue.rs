//! Single-writer, multi-reader bounded message rings.
//!
//! A [`MessageQueue`] retains the `N` most recently written messages in a
//! fixed ring of slots. Writes never block and never fail: when the ring is
//! full the oldest slot is overwritten. Each consumer owns a private
//! [`QueueReader`] cursor; readers never mutate queue storage, so any
//! number of them can drain the same topic at their own cadence without
//! coordination.
//!
//! ## Slot Protocol
//!
//! Every slot carries a sequence tag guarding its value:
//!
//! - `2 * s + 1`: write of message `s` in progress (odd)
//! - `2 * s + 2`: message `s` committed (even)
//! - `0`: never written
//!
//! Writers mark the slot odd, copy the value, then publish the even tag.
//! Readers load the tag, copy the value, and re-check the tag; a changed
//! tag means the copy raced an overwrite and is discarded. Message
//! visibility is gated by a separate committed counter so a claimed but
//! unfinished write is never observable.
//!
//! Exactly one producer per queue is the convention. It is not enforced,
//! but sequence claims use a fetch-add so even a misbehaving second
//! producer cannot make two writers race on one slot.

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicU64, Ordering, fence};

/// Attempts before a conflicted read degrades to an empty result.
const MAX_READ_RETRIES: usize = 10;

/// One ring slot: a sequence tag plus value storage.
///
/// Cache-line aligned so concurrent readers of neighboring slots do not
/// false-share.
#[repr(align(64))]
struct Slot<T> {
    tag: AtomicU64,
    value: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            tag: AtomicU64::new(0),
            value: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }
}

/// Bounded ring of the `N` most recent messages of one topic.
pub struct MessageQueue<T: Copy, const N: usize> {
    slots: [Slot<T>; N],
    /// Sequence claimed by the next write.
    next_seq: AtomicU64,
    /// Messages durably published and visible to readers.
    committed: AtomicU64,
}

// SAFETY: slot values are only accessed through the tag protocol above;
// readers copy out and validate, writers own disjoint claimed slots.
unsafe impl<T: Copy + Send, const N: usize> Send for MessageQueue<T, N> {}
unsafe impl<T: Copy + Send, const N: usize> Sync for MessageQueue<T, N> {}

impl<T: Copy, const N: usize> Default for MessageQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> MessageQueue<T, N> {
    /// Create an empty queue.
    pub fn new() -> Self {
        const { assert!(N > 0, "queue capacity must be nonzero") };
        Self {
            slots: core::array::from_fn(|_| Slot::new()),
            next_seq: AtomicU64::new(0),
            committed: AtomicU64::new(0),
        }
    }

    /// Retained message capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Total messages published since creation.
    #[inline]
    pub fn published(&self) -> u64 {
        self.committed.load(Ordering::Acquire)
    }

    /// Publish one message. Never blocks, never fails; overwrites the
    /// oldest retained message once the ring is full.
    pub fn write(&self, value: T) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let slot = &self.slots[(seq % N as u64) as usize];

        // Begin write: odd tag tells readers the slot is unstable.
        slot.tag.store(2 * seq + 1, Ordering::Release);
        fence(Ordering::Release);

        // SAFETY: the fetch-add above hands each write a distinct sequence,
        // and sequences `N` apart are separated by a full ring of commits.
        unsafe { (*slot.value.get()).write(value) };

        fence(Ordering::Release);
        // Commit: even tag encodes which message the slot now holds.
        slot.tag.store(2 * seq + 2, Ordering::Release);

        // Publish visibility. fetch_max keeps the counter monotonic even
        // if a second producer violates the single-writer convention.
        self.committed.fetch_max(seq + 1, Ordering::Release);
    }

    /// Peek at the most recently published message without consuming it
    /// from any reader's stream.
    pub fn read_last(&self) -> Option<T> {
        for _ in 0..MAX_READ_RETRIES {
            let latest = self.committed.load(Ordering::Acquire);
            if latest == 0 {
                return None;
            }
            if let Some(value) = self.read_slot(latest - 1) {
                return Some(value);
            }
            // Raced an overwrite; the next pass sees the newer message.
            std::thread::yield_now();
        }
        None
    }

    /// Create an independent read cursor positioned at the oldest retained
    /// message. O(1), no effect on the queue or on other readers.
    pub fn make_reader(&self) -> QueueReader<'_, T, N> {
        let latest = self.committed.load(Ordering::Acquire);
        QueueReader {
            queue: self,
            next: latest.saturating_sub(N as u64),
            skipped: 0,
        }
    }

    /// Copy out message `seq` if its slot still holds it.
    fn read_slot(&self, seq: u64) -> Option<T> {
        let slot = &self.slots[(seq % N as u64) as usize];
        let expected = 2 * seq + 2;

        let before = slot.tag.load(Ordering::Acquire);
        if before != expected {
            return None;
        }

        fence(Ordering::Acquire);
        // SAFETY: the tag said the slot holds committed message `seq`; the
        // copy is validated by re-reading the tag below and discarded if an
        // overwrite intervened. `T: Copy` so a discarded value needs no drop.
        let value = unsafe { core::ptr::read((*slot.value.get()).as_ptr()) };
        fence(Ordering::Acquire);

        (slot.tag.load(Ordering::Acquire) == before).then_some(value)
    }
}

/// One consumer's private read position into a [`MessageQueue`].
///
/// A reader never re-delivers a message. If the producer laps the reader,
/// the cursor silently jumps to the oldest retained message; the loss is
/// visible through [`skipped`](Self::skipped).
pub struct QueueReader<'q, T: Copy, const N: usize> {
    queue: &'q MessageQueue<T, N>,
    /// Sequence of the next message to deliver.
    next: u64,
    skipped: u64,
}

impl<T: Copy, const N: usize> QueueReader<'_, T, N> {
    /// Return the next unread message in write order, or `None` when the
    /// queue holds nothing new. Never blocks.
    pub fn read_next(&mut self) -> Option<T> {
        for _ in 0..MAX_READ_RETRIES {
            let latest = self.queue.committed.load(Ordering::Acquire);
            if self.next >= latest {
                return None;
            }

            let oldest = latest.saturating_sub(N as u64);
            if self.next < oldest {
                let lost = oldest - self.next;
                self.skipped += lost;
                self.next = oldest;
                tracing::trace!(lost, total = self.skipped, "reader overrun, resuming at oldest");
            }

            if let Some(value) = self.queue.read_slot(self.next) {
                self.next += 1;
                return Some(value);
            }

            // The producer overwrote the slot between the window check and
            // the copy; recompute the window and try again.
            std::thread::yield_now();
        }
        None
    }

    /// Messages lost to producer overruns over this reader's lifetime.
    #[inline]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
