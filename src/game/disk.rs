/// A single disk, identified by its size. Sizes are unique within a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(usize);

impl Disk {
    pub fn new(size: usize) -> Self {
        Disk(size)
    }

    pub fn size(self) -> usize {
        self.0
    }

    /// A disk may only rest on a strictly larger one.
    pub fn fits_on_top_of(self, other: Disk) -> bool {
        self.0 < other.0
    }
}

/// One peg's stack of disks. The last element is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskStack {
    disks: Vec<Disk>,
}

impl DiskStack {
    /// Create an empty stack
    pub fn new() -> Self {
        DiskStack { disks: Vec::new() }
    }

    /// Top disk, if any
    pub fn peek(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Disks from the bottom of the peg up, the order they are drawn in.
    pub fn iter_bottom_up(&self) -> impl DoubleEndedIterator<Item = Disk> + '_ {
        self.disks.iter().copied()
    }

    /// Disks from the top of the peg down.
    pub fn iter_top_down(&self) -> impl DoubleEndedIterator<Item = Disk> + '_ {
        self.disks.iter().rev().copied()
    }

    /// Check that sizes strictly increase reading top to bottom.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[1].fits_on_top_of(w[0]))
    }

    // Mutation is reserved for PuzzleState, which enforces the legality rule.
    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}
