//! Nesting counter for interactive camera operations.

/// Transition reported by [`InteractionCounter`] when nesting crosses zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEdge {
    /// Nesting went from 0 to 1.
    Started,
    /// Nesting dropped back to 0.
    Ended,
}

/// Reference count of concurrently active interactive camera operations
/// (seeks, drags). Collaborators suspend expensive reactions while it is
/// non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionCounter {
    nesting: u32,
}

impl InteractionCounter {
    /// Runaway nesting means some `end` call is missing.
    const MAX_NESTING: u32 = 100;

    /// Current nesting depth.
    #[must_use]
    pub fn nesting(&self) -> u32 {
        self.nesting
    }

    /// `true` while any interactive operation is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.nesting > 0
    }

    /// Enter an interactive operation.
    pub fn begin(&mut self) -> Option<InteractionEdge> {
        debug_assert!(
            self.nesting < Self::MAX_NESTING,
            "interaction nesting overflow: missing end() calls"
        );
        self.nesting += 1;
        (self.nesting == 1).then_some(InteractionEdge::Started)
    }

    /// Leave an interactive operation. An unmatched call is logged and
    /// leaves the count at zero. This clamps in debug builds too rather than
    /// asserting, so a stray end from a host never takes the viewer down.
    pub fn end(&mut self) -> Option<InteractionEdge> {
        if self.nesting == 0 {
            log::warn!("interaction end without matching begin");
            return None;
        }
        self.nesting -= 1;
        (self.nesting == 0).then_some(InteractionEdge::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_calls_return_to_zero() {
        let mut c = InteractionCounter::default();
        assert_eq!(c.begin(), Some(InteractionEdge::Started));
        for _ in 0..4 {
            assert_eq!(c.begin(), None);
        }
        assert_eq!(c.nesting(), 5);
        for _ in 0..4 {
            assert_eq!(c.end(), None);
        }
        assert_eq!(c.end(), Some(InteractionEdge::Ended));
        assert_eq!(c.nesting(), 0);
        assert!(!c.is_active());
    }

    #[test]
    fn unmatched_end_stays_at_zero() {
        let mut c = InteractionCounter::default();
        assert_eq!(c.end(), None);
        assert_eq!(c.nesting(), 0);
        assert_eq!(c.begin(), Some(InteractionEdge::Started));
    }
}
