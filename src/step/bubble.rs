//! Bubble sort, one adjacent comparison per step.
//!
//! Each pass shrinks to the position of the last swap seen in the previous one, everything right
//! of it is already in place. A pass without swaps beyond the range start ends the sort.

use std::ops::Range;

use crate::continuation::ContinuationStack;
use crate::step::StepSort;

pub const NAME: &str = "bubble_sort";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pass {
    min: usize,
    // Left index of the next compared pair.
    i: usize,
    // Exclusive bound for `i` in this pass.
    i_max: usize,
    // Left index of the rightmost swap in this pass.
    new_max: usize,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct BubbleSort;

impl<T: Ord> StepSort<T> for BubbleSort {
    type Continuation = Pass;

    fn name(&self) -> &'static str {
        NAME
    }

    fn entry(&self, range: Range<usize>) -> Pass {
        Pass {
            min: range.start,
            i: range.start,
            i_max: range.end.saturating_sub(1).max(range.start),
            new_max: range.start,
        }
    }

    fn resume(&mut self, mut pass: Pass, v: &mut [T], stack: &mut ContinuationStack<Pass>) {
        if pass.i >= pass.i_max {
            // Fewer than two elements.
            return;
        }

        if v[pass.i + 1] < v[pass.i] {
            v.swap(pass.i, pass.i + 1);
            pass.new_max = pass.i;
        }
        pass.i += 1;

        if pass.i == pass.i_max {
            if pass.new_max <= pass.min {
                return;
            }

            pass.i_max = pass.new_max;
            pass.i = pass.min;
            pass.new_max = pass.min;
        }

        stack.push(pass);
    }
}
