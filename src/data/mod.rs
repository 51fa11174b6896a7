#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareState {
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct Square {
    pub mine: bool,
    /// Mines among the up-to-8 neighbors; -1 on mine squares, never read there.
    pub adjacent: i8,
    pub state: SquareState,
}
