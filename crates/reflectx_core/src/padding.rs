/// Per-side reflection padding amounts for the three spatial axes of an
/// (N, C, D, H, W) tensor.
///
/// `left`/`right` extend W, `top`/`bottom` extend H, `front`/`back`
/// extend D. Batch and channel dimensions are never padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pad3d {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
    pub front: usize,
    pub back: usize,
}

impl Pad3d {
    pub fn new(left: usize, right: usize, top: usize, bottom: usize, front: usize, back: usize) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            front,
            back,
        }
    }

    /// The same amount on every side of every spatial axis.
    pub fn uniform(pad: usize) -> Self {
        Self::new(pad, pad, pad, pad, pad, pad)
    }

    pub fn width(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    pub fn height(&self) -> (usize, usize) {
        (self.top, self.bottom)
    }

    pub fn depth(&self) -> (usize, usize) {
        (self.front, self.back)
    }

    /// (before, after) pairs in (N, C, D, H, W) dimension order.
    pub fn pairs(&self) -> [(usize, usize); 5] {
        [(0, 0), (0, 0), self.depth(), self.height(), self.width()]
    }
}
