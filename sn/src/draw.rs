//! Non-repeating draw session
//!
//! Hands out integers from `[1, maximum]` in random order without ever
//! repeating one. Once every value has been produced the session reports
//! [`Draw::Exhausted`] instead of sampling.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::error::DrawError;

/// Result of a single draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Draw {
    /// A value not produced before in this session
    Number(u32),
    /// Every value in range has already been drawn
    Exhausted,
}

impl Draw {
    pub fn number(self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(n),
            Self::Exhausted => None,
        }
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Scoped set of values already drawn from `[1, maximum]`
#[derive(Debug)]
pub struct DrawSession<R = ThreadRng> {
    maximum: u32,
    drawn: HashSet<u32>,
    rng: R,
}

impl DrawSession<ThreadRng> {
    /// New session drawing from the thread-local RNG
    pub fn new(maximum: u32) -> Result<Self, DrawError> {
        Self::with_rng(maximum, rand::rng())
    }
}

impl<R: Rng> DrawSession<R> {
    /// New session drawing from the given random source
    pub fn with_rng(maximum: u32, rng: R) -> Result<Self, DrawError> {
        if maximum == 0 {
            return Err(DrawError::ZeroMaximum);
        }
        debug!(maximum, "DrawSession::with_rng: session created");
        Ok(Self {
            maximum,
            drawn: HashSet::with_capacity(maximum.min(1024) as usize),
            rng,
        })
    }

    /// Draw a value not yet produced in this session
    ///
    /// Rejection-samples the range. The exhaustion guard runs first, so the
    /// loop only starts while at least one value is free and always ends.
    pub fn draw(&mut self) -> Draw {
        if self.is_exhausted() {
            debug!(maximum = self.maximum, "DrawSession::draw: exhausted");
            return Draw::Exhausted;
        }

        let mut samples = 0u32;
        loop {
            samples += 1;
            let candidate = self.rng.random_range(1..=self.maximum);
            if self.drawn.insert(candidate) {
                debug!(
                    candidate,
                    samples,
                    drawn = self.drawn.len(),
                    "DrawSession::draw: accepted"
                );
                return Draw::Number(candidate);
            }
        }
    }

    /// Forget every drawn value, starting a fresh session with the same maximum
    pub fn reset(&mut self) {
        debug!(drawn = self.drawn.len(), "DrawSession::reset");
        self.drawn.clear();
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn drawn_count(&self) -> u32 {
        self.drawn.len() as u32
    }

    pub fn remaining(&self) -> u32 {
        self.maximum - self.drawn_count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.drawn_count() >= self.maximum
    }

    pub fn contains(&self, value: u32) -> bool {
        self.drawn.contains(&value)
    }

    /// Drawn values in ascending order
    pub fn drawn(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self.drawn.iter().copied().collect();
        values.sort_unstable();
        values
    }
}
