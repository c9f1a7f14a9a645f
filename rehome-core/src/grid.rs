//! Item grid state machine
//!
//! Pure state: the host performs store reads, feeds the results back in as
//! actions, and runs the [`GridEffect`] a confirmed claim produces.
use crate::item::{ClaimKind, ClaimTarget, DonatedItem, Listing, PlaceholderItem};
use crate::store::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// First read after mount.
    Loaded(Vec<DonatedItem>),
    /// Re-read after a change notification.
    Resynced(Vec<DonatedItem>),
    RequestClaim(ClaimTarget),
    ConfirmClaim,
    CancelClaim,
    DismissSuccess,
}

/// Side effect a transition asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEffect {
    RemoveDonated(String),
}

impl GridEffect {
    pub fn run(&self, store: &impl ItemStore) {
        match self {
            Self::RemoveDonated(id) => store.remove(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub donated_items: Vec<DonatedItem>,
    pub placeholder_items: Vec<PlaceholderItem>,
    pub loading: bool,
    pub claim_target: Option<ClaimTarget>,
    pub confirm_open: bool,
    pub success_open: bool,
}

impl GridState {
    #[must_use]
    pub fn new(placeholders: Vec<PlaceholderItem>) -> Self {
        Self {
            donated_items: Vec::new(),
            placeholder_items: placeholders,
            loading: true,
            claim_target: None,
            confirm_open: false,
            success_open: false,
        }
    }

    /// Effect that confirming right now would produce.
    #[must_use]
    pub fn confirm_effect(&self) -> Option<GridEffect> {
        if !self.confirm_open {
            return None;
        }
        match &self.claim_target {
            Some(target) if target.kind == ClaimKind::Donated => {
                Some(GridEffect::RemoveDonated(target.id.clone()))
            }
            _ => None,
        }
    }

    /// Apply one transition, returning the effect the host must run.
    pub fn apply(&mut self, action: GridAction) -> Option<GridEffect> {
        match action {
            GridAction::Loaded(items) | GridAction::Resynced(items) => {
                self.donated_items = items;
                self.loading = false;
                None
            }
            GridAction::RequestClaim(target) => {
                self.claim_target = Some(target);
                self.confirm_open = true;
                self.success_open = false;
                None
            }
            GridAction::ConfirmClaim => self.confirm(),
            GridAction::CancelClaim => {
                self.confirm_open = false;
                self.claim_target = None;
                None
            }
            GridAction::DismissSuccess => {
                self.success_open = false;
                self.claim_target = None;
                None
            }
        }
    }

    fn confirm(&mut self) -> Option<GridEffect> {
        if !self.confirm_open {
            return None;
        }
        let effect = self.confirm_effect();
        let target = self.claim_target.as_ref()?;
        // A target that already vanished still completes the claim.
        match target.kind {
            ClaimKind::Donated => self.donated_items.retain(|item| item.id != target.id),
            ClaimKind::Placeholder => self.placeholder_items.retain(|item| item.id != target.id),
        }
        self.confirm_open = false;
        self.success_open = true;
        effect
    }

    /// Grid entries in display order; empty while loading.
    #[must_use]
    pub fn listings(&self) -> Vec<Listing<'_>> {
        if self.loading {
            return Vec::new();
        }
        self.donated_items
            .iter()
            .enumerate()
            .map(|(idx, item)| Listing::Donated {
                item,
                is_new: idx == 0,
            })
            .chain(self.placeholder_items.iter().map(Listing::Placeholder))
            .collect()
    }

    /// Name shown by the confirm and success dialogs.
    #[must_use]
    pub fn target_name(&self) -> &str {
        self.claim_target
            .as_ref()
            .map_or("", |target| target.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketConfig;
    use crate::item::Condition;

    fn donation(id: &str, name: &str) -> DonatedItem {
        DonatedItem {
            id: id.to_string(),
            item_name: name.to_string(),
            description: String::new(),
            category: "Furniture".to_string(),
            condition: Condition::Good,
            location: String::new(),
            image_base64: String::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn loaded(items: Vec<DonatedItem>) -> GridState {
        let mut state = GridState::new(MarketConfig::default().placeholders);
        state.apply(GridAction::Loaded(items));
        state
    }

    #[test]
    fn starts_loading_with_seed_and_no_listings() {
        let state = GridState::new(MarketConfig::default().placeholders);
        assert!(state.loading);
        assert!(state.listings().is_empty());
        assert_eq!(state.placeholder_items.len(), 6);
        assert!(!state.confirm_open && !state.success_open);
    }

    #[test]
    fn listings_put_donations_first_and_flag_newest() {
        let state = loaded(vec![donation("d2", "Chair"), donation("d1", "Lamp")]);
        let listings = state.listings();
        assert_eq!(listings.len(), 8);
        assert!(matches!(listings[0], Listing::Donated { is_new: true, .. }));
        assert!(matches!(listings[1], Listing::Donated { is_new: false, .. }));
        assert!(matches!(listings[2], Listing::Placeholder(_)));
        assert_eq!(listings[0].name(), "Chair");
    }

    #[test]
    fn confirming_donated_claim_emits_removal() {
        let mut state = loaded(vec![donation("d1", "Lamp")]);
        let target = state.listings()[0].claim_target();
        assert!(state.apply(GridAction::RequestClaim(target)).is_none());
        assert!(state.confirm_open);
        assert_eq!(state.target_name(), "Lamp");

        let effect = state.apply(GridAction::ConfirmClaim);
        assert_eq!(effect, Some(GridEffect::RemoveDonated("d1".into())));
        assert!(state.donated_items.is_empty());
        assert!(!state.confirm_open);
        assert!(state.success_open);
        assert_eq!(state.target_name(), "Lamp");

        state.apply(GridAction::DismissSuccess);
        assert!(!state.success_open);
        assert!(state.claim_target.is_none());
    }

    #[test]
    fn confirming_placeholder_claim_is_local_only() {
        let mut state = loaded(Vec::new());
        let target = state.listings()[1].claim_target();
        state.apply(GridAction::RequestClaim(target));
        assert!(state.apply(GridAction::ConfirmClaim).is_none());
        assert_eq!(state.placeholder_items.len(), 5);
        assert!(state.placeholder_items.iter().all(|p| p.id != "placeholder-1"));
    }

    #[test]
    fn cancel_leaves_lists_untouched() {
        let mut state = loaded(vec![donation("d1", "Lamp")]);
        let before = state.clone();
        let target = state.listings()[0].claim_target();
        state.apply(GridAction::RequestClaim(target));
        state.apply(GridAction::CancelClaim);
        assert_eq!(state.donated_items, before.donated_items);
        assert_eq!(state.placeholder_items, before.placeholder_items);
        assert!(state.claim_target.is_none());
        assert!(state.apply(GridAction::ConfirmClaim).is_none());
        assert!(!state.success_open);
    }

    #[test]
    fn second_confirm_does_not_remove_again() {
        let mut state = loaded(vec![donation("d1", "Lamp")]);
        let target = state.listings()[0].claim_target();
        state.apply(GridAction::RequestClaim(target));
        assert!(state.apply(GridAction::ConfirmClaim).is_some());
        assert!(state.apply(GridAction::ConfirmClaim).is_none());
    }

    #[test]
    fn vanished_target_still_shows_success() {
        let mut state = loaded(vec![donation("d1", "Lamp")]);
        let target = state.listings()[0].claim_target();
        state.apply(GridAction::RequestClaim(target));
        state.apply(GridAction::Resynced(Vec::new()));
        let effect = state.apply(GridAction::ConfirmClaim);
        assert_eq!(effect, Some(GridEffect::RemoveDonated("d1".into())));
        assert!(state.success_open);
    }

    #[test]
    fn resync_is_idempotent() {
        let items = vec![donation("d1", "Lamp"), donation("d2", "Chair")];
        let mut state = loaded(items.clone());
        state.apply(GridAction::Resynced(items.clone()));
        let once = state.clone();
        state.apply(GridAction::Resynced(items));
        assert_eq!(state, once);
        assert_eq!(state.donated_items.len(), 2);
    }
}
