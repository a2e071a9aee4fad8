/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search scratch. One node per board cell, indexed like the board.
///
/// `neighbors` is filled once per run by the adjacency builder; everything
/// else starts at its default and is written during stepping.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) neighbors: Vec<usize>,
    pub(crate) parent: usize,
    pub(crate) visited: bool,
    pub(crate) closed: bool,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            neighbors: Vec::new(),
            parent: NO_PARENT,
            visited: false,
            closed: false,
            g: 0,
            h: 0,
            f: 0,
        }
    }
}
