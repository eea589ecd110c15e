//! Sorting algorithms re-expressed as externally driven state machines.
//!
//! None of the algorithms here loop or recurse on their own. Each call to [`StepSort::resume`]
//! consumes one continuation, does at most one key comparison, and pushes whatever work remains
//! back onto the instance's [`ContinuationStack`].

use std::ops::Range;

use rand::rngs::StdRng;

use crate::continuation::ContinuationStack;

pub mod bubble;
pub mod insertion;
pub mod quicksort;

use bubble::BubbleSort;
use insertion::InsertionSort;
use quicksort::{Quicksort, RandomPivot};

pub trait StepSort<T: Ord> {
    /// Index based frame holding the progress variables needed to pick up where the last step
    /// left off.
    type Continuation;

    fn name(&self) -> &'static str;

    /// The continuation that sorts `range` when driven to exhaustion.
    fn entry(&self, range: Range<usize>) -> Self::Continuation;

    /// Performs one bounded unit of work on `v`.
    fn resume(
        &mut self,
        continuation: Self::Continuation,
        v: &mut [T],
        stack: &mut ContinuationStack<Self::Continuation>,
    );
}

/// Drives `sort` over the whole of `v` until its stack is empty and returns the number of steps
/// that took.
pub fn run_to_completion<T, S>(sort: &mut S, v: &mut [T]) -> usize
where
    T: Ord,
    S: StepSort<T>,
{
    let mut stack = ContinuationStack::seeded(sort.entry(0..v.len()));
    let mut steps = 0;

    while let Some(continuation) = stack.pop() {
        sort.resume(continuation, v, &mut stack);
        steps += 1;
    }

    steps
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// One continuation was invoked.
    Stepped,
    /// The stack was found empty, the instance moved to finished during this call.
    JustFinished,
    /// Nothing left to do, the transition happened earlier.
    Finished,
}

/// One algorithm racing on its own copy of the keys.
///
/// Object safe view used by the scheduler so instances of different algorithms can share one
/// ordered list.
pub trait Runner {
    fn name(&self) -> &'static str;

    fn values(&self) -> &[i32];

    fn is_finished(&self) -> bool;

    fn advance(&mut self) -> Progress;
}

pub struct Instance<S>
where
    S: StepSort<i32>,
{
    sort: S,
    values: Vec<i32>,
    stack: ContinuationStack<S::Continuation>,
    finished: bool,
}

impl<S> Instance<S>
where
    S: StepSort<i32>,
{
    pub fn new(sort: S, values: Vec<i32>) -> Self {
        let stack = ContinuationStack::seeded(sort.entry(0..values.len()));

        Self {
            sort,
            values,
            stack,
            finished: false,
        }
    }
}

impl<S> Runner for Instance<S>
where
    S: StepSort<i32>,
{
    fn name(&self) -> &'static str {
        self.sort.name()
    }

    fn values(&self) -> &[i32] {
        &self.values
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn advance(&mut self) -> Progress {
        if self.finished {
            return Progress::Finished;
        }

        match self.stack.pop() {
            Some(continuation) => {
                self.sort.resume(continuation, &mut self.values, &mut self.stack);
                Progress::Stepped
            }
            None => {
                self.finished = true;
                Progress::JustFinished
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Quicksort,
}

impl Algorithm {
    /// Declaration order, which is also the order instances are advanced within one tick.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Quicksort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => bubble::NAME,
            Algorithm::Insertion => insertion::NAME,
            Algorithm::Quicksort => quicksort::NAME,
        }
    }

    /// Builds a fresh instance over `values`, seeded with the entry continuation for the full
    /// range. `rng` only feeds pivot selection.
    pub fn instantiate(self, values: Vec<i32>, rng: &mut StdRng) -> Box<dyn Runner> {
        match self {
            Algorithm::Bubble => Box::new(Instance::new(BubbleSort, values)),
            Algorithm::Insertion => Box::new(Instance::new(InsertionSort, values)),
            Algorithm::Quicksort => Box::new(Instance::new(
                Quicksort::new(RandomPivot::from_rng(rng)),
                values,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn instance_finishes_once() {
        let mut rng = StdRng::seed_from_u64(7);

        for algorithm in Algorithm::ALL {
            let mut instance = algorithm.instantiate(vec![0], &mut rng);
            assert_eq!(instance.name(), algorithm.name());

            // The entry continuation of a single element range pushes nothing.
            assert_eq!(instance.advance(), Progress::Stepped);
            assert!(!instance.is_finished());
            assert_eq!(instance.advance(), Progress::JustFinished);
            assert!(instance.is_finished());
            assert_eq!(instance.advance(), Progress::Finished);
            assert_eq!(instance.values(), &[0]);
        }
    }

}
