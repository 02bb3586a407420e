//! Footer directives

use std::fmt;

/// A footer line of the document, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Down staircase at the exit point
    Stair { x: u32, y: u32 },
    /// Arrival region one cell wide, anchored at the start point
    Branch { x: u32, y: u32 },
    /// Random monster at a creature placement
    Monster { x: u32, y: u32 },
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Directive::Stair { x, y } => write!(f, "STAIR:({}, {}),down", x, y),
            Directive::Branch { x, y } => {
                let (x2, y2) = (u64::from(x) + 1, u64::from(y) + 1);
                write!(
                    f,
                    "BRANCH: ({},{},{},{}),({},{},{},{})",
                    x, y, x, y, x2, y2, x2, y2
                )
            }
            Directive::Monster { x, y } => write!(f, "MONSTER: random, random, ({},{})", x, y),
        }
    }
}
