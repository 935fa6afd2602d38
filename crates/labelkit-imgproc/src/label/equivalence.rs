/// Provisional labels of a raster scan and the equivalences between them.
///
/// Entry `i` belongs to the pixel at raster position `i` and holds either
/// `None` (an unlabeled background pixel) or a label `p <= i`. A pixel that
/// opens a new class gets its own position as label, and the table entry at
/// that position then doubles as the parent pointer of the class. A class is
/// represented by the entry pointing to itself, which is always the smallest
/// position in the class.
#[derive(Debug, Clone)]
pub(crate) struct EquivalenceTable {
    entries: Vec<Option<usize>>,
}

impl EquivalenceTable {
    /// Create a table of `len` entries, each pointing to itself.
    pub fn new(len: usize) -> Self {
        Self {
            entries: (0..len).map(Some).collect(),
        }
    }

    /// The provisional label at `pos`, `None` for background.
    #[inline]
    pub fn label(&self, pos: usize) -> Option<usize> {
        self.entries[pos]
    }

    #[inline]
    pub fn assign(&mut self, pos: usize, label: usize) {
        debug_assert!(label <= pos);
        self.entries[pos] = Some(label);
    }

    #[inline]
    pub fn mark_unlabeled(&mut self, pos: usize) {
        self.entries[pos] = None;
    }

    /// Follow `label` to the representative of its class.
    pub fn find(&mut self, mut label: usize) -> usize {
        while let Some(parent) = self.entries[label] {
            if parent == label {
                break;
            }
            // path halving, parents only ever move towards smaller positions
            let grandparent = self.entries[parent].unwrap_or(parent);
            self.entries[label] = Some(grandparent);
            label = grandparent;
        }
        label
    }

    /// Merge the classes of `a` and `b` and return the surviving representative.
    ///
    /// The class with the larger representative is redirected to the smaller one.
    pub fn merge(&mut self, a: usize, b: usize) -> usize {
        let (ra, rb) = (self.find(a), self.find(b));
        match ra.cmp(&rb) {
            std::cmp::Ordering::Less => {
                self.entries[rb] = Some(ra);
                ra
            }
            std::cmp::Ordering::Greater => {
                self.entries[ra] = Some(rb);
                rb
            }
            std::cmp::Ordering::Equal => ra,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Option<usize>] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [Option<usize>] {
        &mut self.entries
    }
}
