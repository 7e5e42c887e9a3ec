//! What happens outside the canvas when a node is selected.

/// Page collaborators a selection is forwarded to.
pub trait SelectionHost {
    /// Open the detail panel for `node_id`. `false` when the page has no
    /// detail panel.
    fn open_detail_panel(&mut self, node_id: &str) -> bool;
    /// Scroll the element tagged with `node_id` into view and pulse it.
    /// `false` when no such element exists.
    fn reveal_element(&mut self, node_id: &str) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    DetailPanel,
    RevealedElement,
    /// Neither collaborator handled it; the canvas feedback still plays.
    Unhandled,
}

/// Try the detail panel first, then fall back to revealing the element.
pub fn dispatch_selection(host: &mut dyn SelectionHost, node_id: &str) -> SelectionOutcome {
    if host.open_detail_panel(node_id) {
        SelectionOutcome::DetailPanel
    } else if host.reveal_element(node_id) {
        SelectionOutcome::RevealedElement
    } else {
        SelectionOutcome::Unhandled
    }
}

/// Host with no page collaborators.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSelectionHost;

impl SelectionHost for NoSelectionHost {
    fn open_detail_panel(&mut self, _node_id: &str) -> bool {
        false
    }

    fn reveal_element(&mut self, _node_id: &str) -> bool {
        false
    }
}
