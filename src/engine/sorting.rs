//! Sorting algorithm state machines
//!
//! Each machine keeps its loop indices as persistent fields and advances by
//! exactly one yield per [`advance`](SortMachine::advance) call, so a run
//! can suspend and resume at any snapshot boundary.  Snapshot granularity
//! follows the textbook presentation: comparison sorts yield after every
//! comparison and after every element relocation; counting and radix yield
//! after each counting-array update and each output placement (the prefix
//! accumulation pass touches no elements and yields nothing).
//!
//! `advance` returns the terminal snapshot as its last `Some` and `None`
//! afterwards; `halt` synthesizes a terminal snapshot from the current
//! working state for cancelled runs.

use crate::snapshot::SortSnapshot;

fn step(values: &[i32], highlighted: Vec<usize>) -> SortSnapshot {
    SortSnapshot {
        values: values.to_vec(),
        highlighted,
        terminal: false,
    }
}

fn terminal(values: &[i32]) -> SortSnapshot {
    SortSnapshot {
        values: values.to_vec(),
        highlighted: Vec::new(),
        terminal: true,
    }
}

/// Closed dispatch over the sorting machines.
#[derive(Debug)]
pub(crate) enum SortMachine {
    Bubble(BubbleSort),
    Selection(SelectionSort),
    Insertion(InsertionSort),
    Merge(MergeSort),
    Quick(QuickSort),
    Heap(HeapSort),
    Shell(ShellSort),
    Counting(CountingSort),
    Radix(RadixSort),
}

impl SortMachine {
    pub(crate) fn advance(&mut self) -> Option<SortSnapshot> {
        match self {
            SortMachine::Bubble(m) => m.advance(),
            SortMachine::Selection(m) => m.advance(),
            SortMachine::Insertion(m) => m.advance(),
            SortMachine::Merge(m) => m.advance(),
            SortMachine::Quick(m) => m.advance(),
            SortMachine::Heap(m) => m.advance(),
            SortMachine::Shell(m) => m.advance(),
            SortMachine::Counting(m) => m.advance(),
            SortMachine::Radix(m) => m.advance(),
        }
    }

    pub(crate) fn halt(&self) -> SortSnapshot {
        let values = match self {
            SortMachine::Bubble(m) => &m.values,
            SortMachine::Selection(m) => &m.values,
            SortMachine::Insertion(m) => &m.values,
            SortMachine::Merge(m) => &m.values,
            SortMachine::Quick(m) => &m.values,
            SortMachine::Heap(m) => &m.values,
            SortMachine::Shell(m) => &m.values,
            SortMachine::Counting(m) => &m.values,
            SortMachine::Radix(m) => &m.values,
        };
        terminal(values)
    }
}

// ---------------------------------------------------------------------------
// Bubble sort

#[derive(Debug)]
enum BubblePhase {
    Compare,
    Swap,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct BubbleSort {
    values: Vec<i32>,
    n: usize,
    i: usize,
    j: usize,
    phase: BubblePhase,
}

impl BubbleSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        BubbleSort {
            values,
            n,
            i: 0,
            j: 0,
            phase: BubblePhase::Compare,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                BubblePhase::Compare => {
                    if self.i >= self.n {
                        self.phase = BubblePhase::Finish;
                        continue;
                    }
                    if self.j + 1 >= self.n - self.i {
                        self.i += 1;
                        self.j = 0;
                        continue;
                    }
                    let snap = step(&self.values, vec![self.j, self.j + 1]);
                    if self.values[self.j] > self.values[self.j + 1] {
                        self.phase = BubblePhase::Swap;
                    } else {
                        self.j += 1;
                    }
                    return Some(snap);
                }
                BubblePhase::Swap => {
                    self.values.swap(self.j, self.j + 1);
                    let snap = step(&self.values, vec![self.j, self.j + 1]);
                    self.j += 1;
                    self.phase = BubblePhase::Compare;
                    return Some(snap);
                }
                BubblePhase::Finish => {
                    self.phase = BubblePhase::Done;
                    return Some(terminal(&self.values));
                }
                BubblePhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Selection sort

#[derive(Debug)]
enum SelectionPhase {
    Compare,
    NewMin,
    Swap,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct SelectionSort {
    values: Vec<i32>,
    n: usize,
    i: usize,
    j: usize,
    min: usize,
    phase: SelectionPhase,
}

impl SelectionSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        SelectionSort {
            values,
            n,
            i: 0,
            j: 1,
            min: 0,
            phase: SelectionPhase::Compare,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                SelectionPhase::Compare => {
                    if self.i >= self.n {
                        self.phase = SelectionPhase::Finish;
                        continue;
                    }
                    if self.j >= self.n {
                        self.phase = SelectionPhase::Swap;
                        continue;
                    }
                    let snap = step(&self.values, vec![self.i, self.j, self.min]);
                    if self.values[self.j] < self.values[self.min] {
                        self.min = self.j;
                        self.phase = SelectionPhase::NewMin;
                    } else {
                        self.j += 1;
                    }
                    return Some(snap);
                }
                SelectionPhase::NewMin => {
                    let snap = step(&self.values, vec![self.i, self.j, self.min]);
                    self.j += 1;
                    self.phase = SelectionPhase::Compare;
                    return Some(snap);
                }
                SelectionPhase::Swap => {
                    self.values.swap(self.i, self.min);
                    let snap = step(&self.values, vec![self.i, self.min]);
                    self.i += 1;
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.phase = SelectionPhase::Compare;
                    return Some(snap);
                }
                SelectionPhase::Finish => {
                    self.phase = SelectionPhase::Done;
                    return Some(terminal(&self.values));
                }
                SelectionPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion sort

#[derive(Debug)]
enum InsertionPhase {
    Outer,
    Shift,
    Place,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct InsertionSort {
    values: Vec<i32>,
    n: usize,
    i: usize,
    // Scan cursor; goes one below zero when the key belongs at the front.
    j: isize,
    key: i32,
    phase: InsertionPhase,
}

impl InsertionSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        InsertionSort {
            values,
            n,
            i: 1,
            j: 0,
            key: 0,
            phase: InsertionPhase::Outer,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                InsertionPhase::Outer => {
                    if self.i >= self.n {
                        self.phase = InsertionPhase::Finish;
                        continue;
                    }
                    self.key = self.values[self.i];
                    self.j = self.i as isize - 1;
                    let snap = step(&self.values, vec![self.i, self.j as usize]);
                    self.phase = InsertionPhase::Shift;
                    return Some(snap);
                }
                InsertionPhase::Shift => {
                    if self.j >= 0 && self.key < self.values[self.j as usize] {
                        self.values[(self.j + 1) as usize] = self.values[self.j as usize];
                        self.j -= 1;
                        let snap = step(&self.values, vec![self.i, (self.j + 1) as usize]);
                        return Some(snap);
                    }
                    self.phase = InsertionPhase::Place;
                }
                InsertionPhase::Place => {
                    let slot = (self.j + 1) as usize;
                    self.values[slot] = self.key;
                    let snap = step(&self.values, vec![slot, self.i]);
                    self.i += 1;
                    self.phase = InsertionPhase::Outer;
                    return Some(snap);
                }
                InsertionPhase::Finish => {
                    self.phase = InsertionPhase::Done;
                    return Some(terminal(&self.values));
                }
                InsertionPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Merge sort

#[derive(Debug)]
enum MergePhase {
    NextRange,
    Compare,
    Copy,
    Drain,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct MergeSort {
    values: Vec<i32>,
    // (lo, mid, hi) merge ranges in top-down post-order, precomputed so the
    // machine replays the recursive schedule without a call stack.
    schedule: Vec<(usize, usize, usize)>,
    next_range: usize,
    lo: usize,
    mid: usize,
    left: Vec<i32>,
    right: Vec<i32>,
    i: usize,
    j: usize,
    k: usize,
    phase: MergePhase,
}

fn merge_schedule(lo: usize, hi: usize, out: &mut Vec<(usize, usize, usize)>) {
    if lo < hi {
        let mid = (lo + hi) / 2;
        merge_schedule(lo, mid, out);
        merge_schedule(mid + 1, hi, out);
        out.push((lo, mid, hi));
    }
}

impl MergeSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let mut schedule = Vec::new();
        if !values.is_empty() {
            merge_schedule(0, values.len() - 1, &mut schedule);
        }
        MergeSort {
            values,
            schedule,
            next_range: 0,
            lo: 0,
            mid: 0,
            left: Vec::new(),
            right: Vec::new(),
            i: 0,
            j: 0,
            k: 0,
            phase: MergePhase::NextRange,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                MergePhase::NextRange => {
                    if self.next_range >= self.schedule.len() {
                        self.phase = MergePhase::Finish;
                        continue;
                    }
                    let (lo, mid, hi) = self.schedule[self.next_range];
                    self.next_range += 1;
                    self.lo = lo;
                    self.mid = mid;
                    self.left = self.values[lo..=mid].to_vec();
                    self.right = self.values[mid + 1..=hi].to_vec();
                    self.i = 0;
                    self.j = 0;
                    self.k = lo;
                    self.phase = MergePhase::Compare;
                }
                MergePhase::Compare => {
                    if self.i < self.left.len() && self.j < self.right.len() {
                        let snap = step(
                            &self.values,
                            vec![self.lo + self.i, self.mid + 1 + self.j],
                        );
                        self.phase = MergePhase::Copy;
                        return Some(snap);
                    }
                    self.phase = MergePhase::Drain;
                }
                MergePhase::Copy => {
                    // Left-or-equal takes the left element, keeping the sort stable.
                    if self.left[self.i] <= self.right[self.j] {
                        self.values[self.k] = self.left[self.i];
                        self.i += 1;
                    } else {
                        self.values[self.k] = self.right[self.j];
                        self.j += 1;
                    }
                    self.k += 1;
                    let snap = step(&self.values, vec![self.k - 1]);
                    self.phase = MergePhase::Compare;
                    return Some(snap);
                }
                MergePhase::Drain => {
                    if self.i < self.left.len() {
                        self.values[self.k] = self.left[self.i];
                        self.i += 1;
                        self.k += 1;
                        return Some(step(&self.values, vec![self.k - 1]));
                    }
                    if self.j < self.right.len() {
                        self.values[self.k] = self.right[self.j];
                        self.j += 1;
                        self.k += 1;
                        return Some(step(&self.values, vec![self.k - 1]));
                    }
                    self.phase = MergePhase::NextRange;
                }
                MergePhase::Finish => {
                    self.phase = MergePhase::Done;
                    return Some(terminal(&self.values));
                }
                MergePhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Quick sort

#[derive(Debug)]
enum QuickPhase {
    NextRange,
    Compare,
    SwapLess,
    PivotSwap,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct QuickSort {
    values: Vec<i32>,
    // Pending (low, high) ranges; the left half of a partition is pushed
    // last so it pops first, replaying the recursion order.
    ranges: Vec<(isize, isize)>,
    low: usize,
    high: usize,
    i: isize,
    j: usize,
    phase: QuickPhase,
}

impl QuickSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        QuickSort {
            values,
            ranges: vec![(0, n as isize - 1)],
            low: 0,
            high: 0,
            i: 0,
            j: 0,
            phase: QuickPhase::NextRange,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                QuickPhase::NextRange => match self.ranges.pop() {
                    None => self.phase = QuickPhase::Finish,
                    Some((lo, hi)) => {
                        if lo < hi {
                            self.low = lo as usize;
                            self.high = hi as usize;
                            self.i = lo - 1;
                            self.j = lo as usize;
                            self.phase = QuickPhase::Compare;
                        }
                    }
                },
                QuickPhase::Compare => {
                    if self.j < self.high {
                        let snap = step(&self.values, vec![self.j, self.high]);
                        // The pivot sits untouched at `high` until PivotSwap.
                        if self.values[self.j] < self.values[self.high] {
                            self.phase = QuickPhase::SwapLess;
                        } else {
                            self.j += 1;
                        }
                        return Some(snap);
                    }
                    self.phase = QuickPhase::PivotSwap;
                }
                QuickPhase::SwapLess => {
                    self.i += 1;
                    self.values.swap(self.i as usize, self.j);
                    let snap = step(&self.values, vec![self.i as usize, self.j]);
                    self.j += 1;
                    self.phase = QuickPhase::Compare;
                    return Some(snap);
                }
                QuickPhase::PivotSwap => {
                    let pi = (self.i + 1) as usize;
                    self.values.swap(pi, self.high);
                    let snap = step(&self.values, vec![pi, self.high]);
                    self.ranges.push((pi as isize + 1, self.high as isize));
                    self.ranges.push((self.low as isize, pi as isize - 1));
                    self.phase = QuickPhase::NextRange;
                    return Some(snap);
                }
                QuickPhase::Finish => {
                    self.phase = QuickPhase::Done;
                    return Some(terminal(&self.values));
                }
                QuickPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Heap sort

#[derive(Debug)]
enum HeapPhase {
    Build { i: isize },
    BuildSift { i: isize, root: usize, bound: usize },
    ExtractSwap { end: usize },
    ExtractSift { end: usize, root: usize },
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct HeapSort {
    values: Vec<i32>,
    n: usize,
    phase: HeapPhase,
}

impl HeapSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        HeapSort {
            values,
            n,
            phase: HeapPhase::Build {
                i: n as isize / 2 - 1,
            },
        }
    }

    /// One sift-down level: swap the root with its larger child when the
    /// heap property is violated.  Comparisons alone do not yield; only the
    /// swap produces a snapshot.
    fn sift_step(&mut self, root: usize, bound: usize) -> Option<(usize, SortSnapshot)> {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        if left < bound && self.values[left] > self.values[largest] {
            largest = left;
        }
        if right < bound && self.values[right] > self.values[largest] {
            largest = right;
        }
        if largest != root {
            self.values.swap(root, largest);
            let snap = step(&self.values, vec![root, largest]);
            Some((largest, snap))
        } else {
            None
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                HeapPhase::Build { i } => {
                    if i < 0 {
                        if self.n == 0 {
                            self.phase = HeapPhase::Finish;
                        } else {
                            self.phase = HeapPhase::ExtractSwap { end: self.n - 1 };
                        }
                        continue;
                    }
                    self.phase = HeapPhase::BuildSift {
                        i,
                        root: i as usize,
                        bound: self.n,
                    };
                }
                HeapPhase::BuildSift { i, root, bound } => {
                    match self.sift_step(root, bound) {
                        Some((next_root, snap)) => {
                            self.phase = HeapPhase::BuildSift {
                                i,
                                root: next_root,
                                bound,
                            };
                            return Some(snap);
                        }
                        None => self.phase = HeapPhase::Build { i: i - 1 },
                    }
                }
                HeapPhase::ExtractSwap { end } => {
                    if end == 0 {
                        self.phase = HeapPhase::Finish;
                        continue;
                    }
                    self.values.swap(0, end);
                    let snap = step(&self.values, vec![0, end]);
                    self.phase = HeapPhase::ExtractSift { end, root: 0 };
                    return Some(snap);
                }
                HeapPhase::ExtractSift { end, root } => match self.sift_step(root, end) {
                    Some((next_root, snap)) => {
                        self.phase = HeapPhase::ExtractSift {
                            end,
                            root: next_root,
                        };
                        return Some(snap);
                    }
                    None => self.phase = HeapPhase::ExtractSwap { end: end - 1 },
                },
                HeapPhase::Finish => {
                    self.phase = HeapPhase::Done;
                    return Some(terminal(&self.values));
                }
                HeapPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Shell sort

#[derive(Debug)]
enum ShellPhase {
    Outer,
    Compare,
    Shift,
    Place,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct ShellSort {
    values: Vec<i32>,
    n: usize,
    gap: usize,
    i: usize,
    j: usize,
    key: i32,
    phase: ShellPhase,
}

impl ShellSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        ShellSort {
            values,
            n,
            gap: n / 2,
            i: n / 2,
            j: 0,
            key: 0,
            phase: ShellPhase::Outer,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                ShellPhase::Outer => {
                    if self.gap == 0 {
                        self.phase = ShellPhase::Finish;
                        continue;
                    }
                    if self.i >= self.n {
                        self.gap /= 2;
                        self.i = self.gap;
                        continue;
                    }
                    self.key = self.values[self.i];
                    self.j = self.i;
                    self.phase = ShellPhase::Compare;
                }
                ShellPhase::Compare => {
                    if self.j >= self.gap {
                        let snap = step(&self.values, vec![self.j - self.gap, self.i]);
                        if self.values[self.j - self.gap] > self.key {
                            self.phase = ShellPhase::Shift;
                        } else {
                            self.phase = ShellPhase::Place;
                        }
                        return Some(snap);
                    }
                    self.phase = ShellPhase::Place;
                }
                ShellPhase::Shift => {
                    self.values[self.j] = self.values[self.j - self.gap];
                    self.j -= self.gap;
                    let snap = step(&self.values, vec![self.j, self.i]);
                    self.phase = ShellPhase::Compare;
                    return Some(snap);
                }
                ShellPhase::Place => {
                    self.values[self.j] = self.key;
                    let snap = step(&self.values, vec![self.j, self.i]);
                    self.i += 1;
                    self.phase = ShellPhase::Outer;
                    return Some(snap);
                }
                ShellPhase::Finish => {
                    self.phase = ShellPhase::Done;
                    return Some(terminal(&self.values));
                }
                ShellPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Counting sort

#[derive(Debug)]
enum CountingPhase {
    Count,
    Output,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct CountingSort {
    values: Vec<i32>,
    n: usize,
    min: i32,
    count: Vec<usize>,
    // Built back to front; unplaced slots read as zero in snapshots.
    output: Vec<i32>,
    idx: usize,
    phase: CountingPhase,
}

impl CountingSort {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let range = (max - min) as usize + 1;
        CountingSort {
            values,
            n,
            min,
            count: vec![0; range],
            output: vec![0; n],
            idx: 0,
            phase: CountingPhase::Count,
        }
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                CountingPhase::Count => {
                    if self.idx < self.n {
                        let key = (self.values[self.idx] - self.min) as usize;
                        self.count[key] += 1;
                        let snap = step(&self.values, vec![self.idx]);
                        self.idx += 1;
                        return Some(snap);
                    }
                    for k in 1..self.count.len() {
                        self.count[k] += self.count[k - 1];
                    }
                    self.idx = self.n;
                    self.phase = CountingPhase::Output;
                }
                CountingPhase::Output => {
                    if self.idx > 0 {
                        self.idx -= 1;
                        let value = self.values[self.idx];
                        let key = (value - self.min) as usize;
                        self.output[self.count[key] - 1] = value;
                        self.count[key] -= 1;
                        return Some(step(&self.output, vec![self.idx]));
                    }
                    self.values = self.output.clone();
                    self.phase = CountingPhase::Finish;
                }
                CountingPhase::Finish => {
                    self.phase = CountingPhase::Done;
                    return Some(terminal(&self.values));
                }
                CountingPhase::Done => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Radix sort

#[derive(Debug)]
enum RadixPhase {
    Count,
    Output,
    NextDigit,
    Finish,
    Done,
}

#[derive(Debug)]
pub(crate) struct RadixSort {
    values: Vec<i32>,
    n: usize,
    max: i32,
    exp: i64,
    count: Vec<usize>,
    output: Vec<i32>,
    idx: usize,
    phase: RadixPhase,
}

impl RadixSort {
    /// Values must be non-negative; validated at stepper construction.
    pub(crate) fn new(values: Vec<i32>) -> Self {
        let n = values.len();
        let max = values.iter().copied().max().unwrap_or(0);
        RadixSort {
            values,
            n,
            max,
            exp: 1,
            count: vec![0; 10],
            output: vec![0; n],
            idx: 0,
            phase: RadixPhase::Count,
        }
    }

    fn digit(&self, value: i32) -> usize {
        (value as i64 / self.exp % 10) as usize
    }

    fn advance(&mut self) -> Option<SortSnapshot> {
        loop {
            match self.phase {
                RadixPhase::Count => {
                    if self.idx < self.n {
                        let digit = self.digit(self.values[self.idx]);
                        self.count[digit] += 1;
                        let snap = step(&self.values, vec![self.idx]);
                        self.idx += 1;
                        return Some(snap);
                    }
                    for k in 1..10 {
                        self.count[k] += self.count[k - 1];
                    }
                    self.idx = self.n;
                    self.phase = RadixPhase::Output;
                }
                RadixPhase::Output => {
                    if self.idx > 0 {
                        self.idx -= 1;
                        let value = self.values[self.idx];
                        let digit = self.digit(value);
                        self.output[self.count[digit] - 1] = value;
                        self.count[digit] -= 1;
                        return Some(step(&self.output, vec![self.idx]));
                    }
                    self.values = self.output.clone();
                    self.phase = RadixPhase::NextDigit;
                }
                RadixPhase::NextDigit => {
                    // Least-significant first; done once the max value's
                    // highest-order digit has been processed.
                    self.exp *= 10;
                    if self.max as i64 / self.exp > 0 {
                        self.count = vec![0; 10];
                        self.output = vec![0; self.n];
                        self.idx = 0;
                        self.phase = RadixPhase::Count;
                    } else {
                        self.phase = RadixPhase::Finish;
                    }
                }
                RadixPhase::Finish => {
                    self.phase = RadixPhase::Done;
                    return Some(terminal(&self.values));
                }
                RadixPhase::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(machine: &mut SortMachine) -> Vec<SortSnapshot> {
        let mut snaps = Vec::new();
        while let Some(snap) = machine.advance() {
            snaps.push(snap);
        }
        snaps
    }

    #[test]
    fn merge_schedule_is_postorder() {
        let mut out = Vec::new();
        merge_schedule(0, 3, &mut out);
        assert_eq!(out, vec![(0, 0, 1), (2, 2, 3), (0, 1, 3)]);
    }

    #[test]
    fn bubble_yield_sequence_matches_reference() {
        let mut machine = SortMachine::Bubble(BubbleSort::new(vec![2, 1]));
        let snaps = drain(&mut machine);
        // compare [0,1], swap [0,1], terminal
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[0].values, vec![2, 1]);
        assert_eq!(snaps[0].highlighted, vec![0, 1]);
        assert_eq!(snaps[1].values, vec![1, 2]);
        assert_eq!(snaps[1].highlighted, vec![0, 1]);
        assert!(snaps[2].terminal);
        assert!(snaps[2].highlighted.is_empty());
    }

    #[test]
    fn advance_after_terminal_returns_none() {
        let mut machine = SortMachine::Insertion(InsertionSort::new(vec![3, 1, 2]));
        while machine.advance().is_some() {}
        assert!(machine.advance().is_none());
    }

    #[test]
    fn single_element_runs_yield_terminal_only() {
        for mut machine in [
            SortMachine::Bubble(BubbleSort::new(vec![9])),
            SortMachine::Merge(MergeSort::new(vec![9])),
            SortMachine::Quick(QuickSort::new(vec![9])),
            SortMachine::Heap(HeapSort::new(vec![9])),
            SortMachine::Shell(ShellSort::new(vec![9])),
        ] {
            let snaps = drain(&mut machine);
            let last = snaps.last().expect("terminal snapshot");
            assert!(last.terminal);
            assert_eq!(last.values, vec![9]);
        }
    }
}
