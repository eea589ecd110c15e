//! Insertion sort, one adjacent comparison per step.
//!
//! `marker` is the last index of the sorted prefix. The element right of it is walked left one
//! swap per step until it meets a smaller or equal key, then the prefix grows by one.

use std::ops::Range;

use crate::continuation::ContinuationStack;
use crate::step::StepSort;

pub const NAME: &str = "insertion_sort";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    min: usize,
    max: usize,
    // `None` once the walked element reached the range start.
    cursor: Option<usize>,
    marker: usize,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct InsertionSort;

impl<T: Ord> StepSort<T> for InsertionSort {
    type Continuation = Scan;

    fn name(&self) -> &'static str {
        NAME
    }

    fn entry(&self, range: Range<usize>) -> Scan {
        Scan {
            min: range.start,
            max: range.end,
            cursor: Some(range.start),
            marker: range.start,
        }
    }

    fn resume(&mut self, mut scan: Scan, v: &mut [T], stack: &mut ContinuationStack<Scan>) {
        let i = scan.cursor.unwrap_or(scan.marker);

        if i + 1 >= scan.max {
            return;
        }

        if v[i + 1] < v[i] {
            v.swap(i, i + 1);
            scan.cursor = if i > scan.min { Some(i - 1) } else { None };
        } else {
            scan.marker += 1;
            scan.cursor = Some(scan.marker);
        }

        stack.push(scan);
    }
}
