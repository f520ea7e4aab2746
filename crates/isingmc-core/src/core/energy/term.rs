use std::iter::Sum;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnergyTerm {
    pub node: i64,
    pub edge: i64,
}

impl EnergyTerm {
    pub fn new(node: i64, edge: i64) -> Self {
        Self { node, edge }
    }

    #[inline]
    pub fn total(&self) -> i64 {
        self.node + self.edge
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            node: self.node + rhs.node,
            edge: self.edge + rhs.edge,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.node += rhs.node;
        self.edge += rhs.edge;
    }
}

impl Sum for EnergyTerm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}
