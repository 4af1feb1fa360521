use std::collections::BTreeSet;

use crate::motion::Transition;

/// Outcome of [`Selection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// `id` is now expanded; `collapsed` was open before and has been closed.
    Expanded { id: u32, collapsed: Option<u32> },
    Collapsed(u32),
    /// `id` is not part of the list, nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn is_expanded(self) -> bool {
        matches!(self, PanelState::Expanded)
    }

    /// Inline style for the expandable panel given its measured content height.
    pub fn style(self, natural_height: i32, transition: &Transition) -> String {
        let transition = transition.css(&["height", "opacity"]);
        match self {
            PanelState::Collapsed => {
                format!("height: 0px; opacity: 0; overflow: hidden; transition: {transition};")
            }
            PanelState::Expanded => format!(
                "height: {}px; opacity: 1; overflow: hidden; transition: {transition};",
                natural_height.max(0)
            ),
        }
    }
}

/// Which card of a fixed list is expanded. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u32>,
    expanded: Option<u32>,
}

impl Selection {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            expanded: None,
        }
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded == Some(id)
    }

    pub fn panel(&self, id: u32) -> PanelState {
        if self.is_expanded(id) {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    pub fn toggle(&mut self, id: u32) -> Toggle {
        if !self.ids.contains(&id) {
            return Toggle::Ignored;
        }
        if self.expanded == Some(id) {
            self.expanded = None;
            Toggle::Collapsed(id)
        } else {
            let collapsed = self.expanded.replace(id);
            Toggle::Expanded { id, collapsed }
        }
    }
}
