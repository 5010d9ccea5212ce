// Per-card expand/collapse state. The machine itself is pure; the card view
// keeps one instance per event id in egui temp memory, so state lives exactly
// as long as the card does and resets when the card leaves the UI.

use eframe::egui;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    pub fn is_expanded(self) -> bool {
        matches!(self, ExpandState::Expanded)
    }

    /// "Learn more" / "Show less" activation.
    pub fn toggled(self) -> Self {
        match self {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        }
    }

    /// Pointer press outside the card bounds, or backdrop activation.
    pub fn dismissed(self) -> Self {
        ExpandState::Collapsed
    }
}

fn state_id(event_id: u64) -> egui::Id {
    egui::Id::new(("event_card_expanded", event_id))
}

/// Reads the card's expand state from egui temp memory; Collapsed when unset.
pub fn load(ctx: &egui::Context, event_id: u64) -> ExpandState {
    let expanded = ctx
        .memory(|m| m.data.get_temp::<bool>(state_id(event_id)))
        .unwrap_or(false);
    if expanded {
        ExpandState::Expanded
    } else {
        ExpandState::Collapsed
    }
}

pub fn store(ctx: &egui::Context, event_id: u64, state: ExpandState) {
    ctx.memory_mut(|m| {
        m.data.insert_temp(state_id(event_id), state.is_expanded());
    });
}

#[cfg(test)]
mod tests {
    use super::ExpandState::*;

    #[test]
    fn toggle_walks_both_ways() {
        assert_eq!(Collapsed.toggled(), Expanded);
        assert_eq!(Expanded.toggled(), Collapsed);
        assert_eq!(Collapsed.toggled().toggled(), Collapsed);
    }

    #[test]
    fn dismiss_always_collapses() {
        assert_eq!(Expanded.dismissed(), Collapsed);
        // Dismissing a collapsed card is a no-op, not an error.
        assert_eq!(Collapsed.dismissed(), Collapsed);
    }

    #[test]
    fn default_is_collapsed() {
        assert!(!super::ExpandState::default().is_expanded());
    }
}
