// One-way bookkeeping: an index fires at most once, ever.
#[derive(Debug, Default)]
pub struct TriggerSet {
    fired: Vec<bool>,
}

impl TriggerSet {
    pub fn with_len(len: usize) -> Self {
        Self {
            fired: vec![false; len],
        }
    }

    pub fn fire(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
}
