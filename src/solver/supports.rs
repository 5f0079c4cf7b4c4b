/// A set of action indices, one bit per action.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Support(u64);

impl Support {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, i: usize) -> bool {
        self.0 & (1 << i) != 0
    }
    /// members in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut bits = self.0;
        let mut indices = Vec::with_capacity(self.size());
        while bits > 0 {
            indices.push(bits.trailing_zeros() as usize);
            bits &= bits - 1;
        }
        indices
    }
}

impl From<u64> for Support {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<&[usize]> for Support {
    fn from(indices: &[usize]) -> Self {
        Self(indices.iter().fold(0, |bits, i| bits | (1 << i)))
    }
}

/// Iterates every size-k subset of n actions, in increasing bitmask order.
///
/// Only the current mask is held; the successor is the next larger integer
/// with the same popcount.
pub struct Supports {
    next: u64,
    n: usize,
}

impl Supports {
    /// n choose k
    pub fn combinations(&self) -> usize {
        let k = self.next.count_ones() as usize;
        (0..k).fold(1, |x, i| x * (self.n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >= 1 << self.n
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
}

impl Iterator for Supports {
    type Item = Support;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let support = Support(self.next);
            self.next = self.permute();
            Some(support)
        }
    }
}

/// (n, k): subsets of size k drawn from n actions
impl From<(usize, usize)> for Supports {
    fn from((n, k): (usize, usize)) -> Self {
        assert!(n < 64, "too many actions for a bitmask");
        assert!(k >= 1 && k <= n, "support size out of range");
        Self {
            next: (1 << k) - 1,
            n,
        }
    }
}
