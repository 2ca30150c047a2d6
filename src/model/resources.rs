use crate::engine::Minutes;
use std::collections::VecDeque;

/// A pool of identical capacity units with a FIFO line for entities that arrive while every unit
/// is claimed.
///
/// The pool does not know what its units are; entities of type `T` carry whatever data the model
/// needs. [`acquire()`] either claims a free unit immediately, handing the entity back to the
/// caller, or parks the entity at the back of the line. [`release()`] frees one unit and, when
/// the line is not empty, passes that unit straight to the longest-waiting entity. Waiters are
/// never reordered and never give up their place.
///
/// Alongside the grant bookkeeping the pool integrates busy time and tracks the most units ever
/// claimed at once, so utilization and peak-load figures fall out at reporting time. The time
/// accounting assumes the pool exists from time zero and that the `now` arguments never move
/// backwards, which holds for any caller driven by the event queue.
///
/// [`acquire()`]: ResourcePool::acquire
/// [`release()`]: ResourcePool::release
#[derive(Debug)]
pub struct ResourcePool<T> {
    capacity: usize,
    in_use: usize,
    peak_in_use: usize,
    waiting: VecDeque<T>,
    busy_minutes: f64,
    last_change: Minutes,
}

impl<T> ResourcePool<T> {
    /// Construct a pool of `capacity` units, all free, with no one waiting.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            in_use: 0,
            peak_in_use: 0,
            waiting: VecDeque::new(),
            busy_minutes: 0.0,
            last_change: Minutes::ZERO,
        }
    }

    /// Claim a unit for `entity` at time `now`.
    ///
    /// Returns the entity back when a unit is free, meaning its service may begin immediately.
    /// Otherwise the entity joins the back of the line and `None` says it is now waiting; the
    /// matching grant comes out of a later [`release()`] call.
    ///
    /// [`release()`]: ResourcePool::release
    #[must_use]
    pub fn acquire(&mut self, entity: T, now: Minutes) -> Option<T> {
        if self.in_use < self.capacity {
            self.settle_to(now);
            self.in_use += 1;
            if self.in_use > self.peak_in_use {
                self.peak_in_use = self.in_use;
            }
            Some(entity)
        } else {
            self.waiting.push_back(entity);
            None
        }
    }

    /// Free one unit at time `now`.
    ///
    /// When entities are waiting, the freed unit transfers to the head of the line without ever
    /// sitting idle, and the entity it was granted to comes back so the caller can start its
    /// service. `None` means the line was empty and the unit returned to the pool.
    #[must_use]
    pub fn release(&mut self, now: Minutes) -> Option<T> {
        debug_assert!(self.in_use > 0, "release without a matching acquire");
        match self.waiting.pop_front() {
            Some(next) => Some(next),
            None => {
                self.settle_to(now);
                self.in_use = self.in_use.saturating_sub(1);
                None
            }
        }
    }

    /// Fold the busy time accrued since the last change of `in_use` into the running integral.
    fn settle_to(&mut self, now: Minutes) {
        self.busy_minutes += self.in_use as f64 * (now - self.last_change);
        self.last_change = now;
    }

    /// Total unit-minutes spent busy between time zero and `now`.
    pub fn busy_minutes(&self, now: Minutes) -> f64 {
        self.busy_minutes + self.in_use as f64 * (now - self.last_change)
    }

    /// Fraction of the available unit-minutes spent busy between time zero and `now`. Zero
    /// before the clock first moves, so an early report does not divide by zero.
    pub fn utilization(&self, now: Minutes) -> f64 {
        let available = self.capacity as f64 * now.0;
        if available > 0.0 {
            self.busy_minutes(now) / available
        } else {
            0.0
        }
    }

    /// Number of units in the pool.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Units currently claimed.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Most units simultaneously claimed at any instant so far.
    pub fn peak_in_use(&self) -> usize {
        self.peak_in_use
    }

    /// Entities currently parked in the line.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_up_to_capacity_then_queues() {
        let mut pool: ResourcePool<u32> = ResourcePool::new(2);
        assert_eq!(Some(1), pool.acquire(1, Minutes::ZERO));
        assert_eq!(Some(2), pool.acquire(2, Minutes::ZERO));
        assert_eq!(None, pool.acquire(3, Minutes(1.0)));
        assert_eq!(2, pool.in_use());
        assert_eq!(1, pool.waiting());
    }

    #[test]
    fn release_hands_the_unit_to_the_longest_waiter() {
        let mut pool: ResourcePool<&str> = ResourcePool::new(1);
        assert!(pool.acquire("first", Minutes::ZERO).is_some());
        assert!(pool.acquire("second", Minutes(1.0)).is_none());
        assert!(pool.acquire("third", Minutes(2.0)).is_none());

        assert_eq!(Some("second"), pool.release(Minutes(5.0)));
        assert_eq!(Some("third"), pool.release(Minutes(6.0)));
        assert_eq!(None, pool.release(Minutes(7.0)));
        assert_eq!(0, pool.in_use());
    }

    #[test]
    fn busy_time_integrates_across_grants() {
        let mut pool: ResourcePool<()> = ResourcePool::new(2);
        let _ = pool.acquire((), Minutes::ZERO);
        let _ = pool.acquire((), Minutes(2.0));
        // one unit busy over [0, 2), two over [2, 4)
        assert_eq!(6.0, pool.busy_minutes(Minutes(4.0)));

        assert_eq!(None, pool.release(Minutes(4.0)));
        assert_eq!(12.0, pool.busy_minutes(Minutes(10.0)));
        assert_eq!(0.6, pool.utilization(Minutes(10.0)));
    }

    #[test]
    fn peak_tracks_the_high_water_mark() {
        let mut pool: ResourcePool<u8> = ResourcePool::new(3);
        let _ = pool.acquire(0, Minutes::ZERO);
        let _ = pool.acquire(1, Minutes::ZERO);
        assert_eq!(None, pool.release(Minutes(1.0)));
        let _ = pool.acquire(2, Minutes(2.0));

        assert_eq!(2, pool.peak_in_use());
        assert_eq!(2, pool.in_use());
    }

    #[test]
    fn utilization_is_zero_before_the_clock_moves() {
        let pool: ResourcePool<u8> = ResourcePool::new(4);
        assert_eq!(0.0, pool.utilization(Minutes::ZERO));
    }
}
