//! Quicksort with a Lomuto partition scan, one comparison against the pivot per step.
//!
//! Recursion is replaced by pushing the two sub-ranges as fresh entry frames once the pivot is
//! placed. The right half is pushed first so the left half is popped and sorted first.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::continuation::ContinuationStack;
use crate::step::StepSort;

pub const NAME: &str = "quicksort";

/// Source of pivot indices. Must return an index inside `range`.
pub trait PivotSelect {
    fn select(&mut self, range: Range<usize>) -> usize;
}

impl<F> PivotSelect for F
where
    F: FnMut(Range<usize>) -> usize,
{
    fn select(&mut self, range: Range<usize>) -> usize {
        self(range)
    }
}

/// Uniformly random pivot.
#[derive(Clone, Debug)]
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.gen())
    }
}

impl PivotSelect for RandomPivot {
    fn select(&mut self, range: Range<usize>) -> usize {
        self.rng.gen_range(range)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Sort `min..max` from scratch.
    Enter { min: usize, max: usize },
    /// Partition scan of `min..max`, the pivot sits at `max - 1`.
    Partition {
        min: usize,
        max: usize,
        i: usize,
        marker: usize,
    },
}

#[derive(Clone, Debug)]
pub struct Quicksort<P> {
    pivots: P,
}

impl<P: PivotSelect> Quicksort<P> {
    pub fn new(pivots: P) -> Self {
        Self { pivots }
    }
}

impl<T: Ord, P: PivotSelect> StepSort<T> for Quicksort<P> {
    type Continuation = Frame;

    fn name(&self) -> &'static str {
        NAME
    }

    fn entry(&self, range: Range<usize>) -> Frame {
        Frame::Enter {
            min: range.start,
            max: range.end,
        }
    }

    fn resume(&mut self, frame: Frame, v: &mut [T], stack: &mut ContinuationStack<Frame>) {
        match frame {
            Frame::Enter { min, max } => {
                if max.saturating_sub(min) < 2 {
                    return;
                }

                let pivot = self.pivots.select(min..max);
                assert!(
                    (min..max).contains(&pivot),
                    "pivot {pivot} outside of {min}..{max}"
                );

                v.swap(pivot, max - 1);
                stack.push(Frame::Partition {
                    min,
                    max,
                    i: min,
                    marker: min,
                });
            }
            Frame::Partition {
                min,
                max,
                mut i,
                mut marker,
            } => {
                let pivot_pos = max - 1;

                if v[i] < v[pivot_pos] {
                    v.swap(i, marker);
                    marker += 1;
                }
                i += 1;

                if i == pivot_pos {
                    // Place the pivot between the two partitions.
                    v.swap(marker, pivot_pos);

                    stack.push(Frame::Enter {
                        min: marker + 1,
                        max,
                    });
                    stack.push(Frame::Enter { min, max: marker });
                } else {
                    stack.push(Frame::Partition {
                        min,
                        max,
                        i,
                        marker,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::run_to_completion;

    // Last element of each range as pivot, keeps the partition trace fixed.
    fn last(range: Range<usize>) -> usize {
        range.end - 1
    }

    #[test]
    fn partition_trace_with_fixed_pivots() {
        let mut sort = Quicksort::new(last);
        let mut v = vec![3, 1, 4, 0, 2];
        let mut stack = ContinuationStack::seeded(Frame::Enter { min: 0, max: v.len() });

        let mut trace = Vec::new();
        while let Some(frame) = stack.pop() {
            sort.resume(frame, &mut v, &mut stack);
            trace.push(v.clone());
        }

        assert_eq!(trace[0], [3, 1, 4, 0, 2]);
        assert_eq!(trace[1], [3, 1, 4, 0, 2]);
        assert_eq!(trace[2], [1, 3, 4, 0, 2]);
        assert_eq!(trace[3], [1, 3, 4, 0, 2]);
        // Last comparison of the scan also moves pivot 2 into its final slot.
        assert_eq!(trace[4], [1, 0, 2, 3, 4]);
        assert_eq!(trace[5], [1, 0, 2, 3, 4]);
        assert_eq!(trace[6], [0, 1, 2, 3, 4]);
        assert_eq!(trace.len(), 13);
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn left_half_first() {
        let mut sort = Quicksort::new(last);
        let mut v = vec![2, 0, 1];
        let mut stack = ContinuationStack::new();

        // Enter, then two partition steps for pivot 1.
        stack.push(Frame::Enter { min: 0, max: 3 });
        for _ in 0..3 {
            let frame = stack.pop().unwrap();
            sort.resume(frame, &mut v, &mut stack);
        }

        assert_eq!(v, [0, 1, 2]);
        assert_eq!(stack.pop(), Some(Frame::Enter { min: 0, max: 1 }));
        assert_eq!(stack.pop(), Some(Frame::Enter { min: 2, max: 3 }));
        assert!(stack.is_empty());
    }

    #[test]
    fn first_pivot_scripted() {
        let mut picks = vec![0, 1].into_iter();
        let mut sort = Quicksort::new(move |range: Range<usize>| {
            picks.next().unwrap_or(range.start)
        });
        let mut v = vec![3, 1, 4, 0, 2];

        run_to_completion(&mut sort, &mut v);
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn pivot_out_of_range() {
        let mut sort = Quicksort::new(|range: Range<usize>| range.end);
        run_to_completion(&mut sort, &mut [2, 1]);
    }
}
