/// One-way reveal flags for the page sections, in document order.
#[derive(Clone, Debug, Default)]
pub struct SectionReveal {
    revealed: Vec<bool>,
    threshold: f64,
}

impl SectionReveal {
    /// `threshold` is the fraction of the viewport height a section top must
    /// rise above to be revealed.
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            revealed: vec![false; count],
            threshold,
        }
    }

    /// Evaluate every section against the current viewport.
    ///
    /// `tops` are bounding-box tops relative to the viewport, one per section.
    /// Returns the indices revealed by this call. Flags never revert.
    pub fn update(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let line = viewport_height * self.threshold;
        let mut newly = Vec::new();
        for (i, (flag, top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*flag && *top < line {
                *flag = true;
                newly.push(i);
            }
        }
        newly
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
