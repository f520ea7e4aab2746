/// A self-field contribution `h · s_i` acting on a single spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeTerm {
    pub spin: usize,
    pub weight: i64,
}

impl NodeTerm {
    pub fn new(spin: usize, weight: i64) -> Self {
        Self { spin, weight }
    }
}

/// A coupling contribution `J · s_u · s_v` between two distinct spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeTerm {
    pub u: usize,
    pub v: usize,
    pub weight: i64,
}

impl EdgeTerm {
    pub fn new(u: usize, v: usize, weight: i64) -> Self {
        Self { u, v, weight }
    }

    #[inline]
    pub fn is_self_coupling(&self) -> bool {
        self.u == self.v
    }
}
