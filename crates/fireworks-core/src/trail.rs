use glam::DVec2;

/// Fixed-length position history, newest first.
///
/// The length never changes: pushing a new point shifts everything one slot
/// towards the tail and drops the oldest entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail<const N: usize> {
    points: [DVec2; N],
}

impl<const N: usize> Trail<N> {
    /// A trail where every slot holds `origin`.
    pub fn filled(origin: DVec2) -> Self {
        Self { points: [origin; N] }
    }

    pub fn push_front(&mut self, point: DVec2) {
        if N == 0 {
            return;
        }
        self.points.rotate_right(1);
        self.points[0] = point;
    }

    #[inline]
    pub fn newest(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn oldest(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }
}
