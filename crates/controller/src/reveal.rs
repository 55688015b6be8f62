use serde::Deserialize;

/// Intersection tuning for the fade-in animator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible before it reveals.
    pub threshold: f64,
    /// Observer root margin; the negative bottom edge delays the trigger
    /// until the element is 50px into the viewport.
    pub root_margin: String,
    /// Extra transition delay per registration index, for the stagger.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            stagger_ms: 100,
        }
    }
}

/// Assigns stagger delays by registration order and tracks one-way reveal
/// flags. Flags are never cleared: redundant intersection notifications for
/// an already-revealed element are no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealSequencer {
    stagger_ms: u32,
    revealed: Vec<bool>,
}

impl RevealSequencer {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            stagger_ms,
            revealed: Vec::new(),
        }
    }

    /// Registers the next candidate, returning its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Transition delay for the candidate at `index`.
    pub fn delay_ms(&self, index: usize) -> u32 {
        index as u32 * self.stagger_ms
    }

    /// Flips the reveal flag. Returns true only on the first call for a
    /// registered index; unknown indices are ignored.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
