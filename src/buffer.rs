use std::collections::VecDeque;
/// Rolling buffer that stores the most recent acceleration samples.
///
/// A padded buffer starts pre-filled with `capacity` copies of a pad value
/// (typically gravity, 9.81), so a dense window exists before any real
/// samples arrive. Early estimates over a padded buffer are therefore
/// computed partly from synthetic stationary data; callers that want to
/// suppress those can watch [`RollingBuffer::is_full`] on an unpadded
/// buffer instead.
#[derive(Debug)]
pub struct RollingBuffer {
    data: VecDeque<f64>,
    capacity: usize,
    seen: usize,
}
impl RollingBuffer {
    /// Empty buffer; the window grows until `capacity` samples have arrived.
    /// A capacity below one sample is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            seen: 0,
        }
    }
    /// Buffer pre-filled with `capacity` copies of `pad_value`.
    pub fn padded(capacity: usize, pad_value: f64) -> Self {
        let capacity = capacity.max(1);
        let mut data = VecDeque::with_capacity(capacity);
        data.extend(std::iter::repeat(pad_value).take(capacity));
        Self {
            data,
            capacity,
            seen: 0,
        }
    }
    /// Appends `sample`, evicting the oldest element once full.
    pub fn insert(&mut self, sample: f64) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(sample);
        self.seen = self.seen.saturating_add(1);
    }
    /// Current window contents, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }
    /// True once `capacity` real samples have been inserted. For an
    /// unpadded buffer this coincides with [`is_full`](Self::is_full); for a
    /// padded one it marks the point where no pad values remain.
    pub fn is_warmed_up(&self) -> bool {
        self.seen >= self.capacity
    }
}
