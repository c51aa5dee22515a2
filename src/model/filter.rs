use super::wish::WishState;

/// Selection applied by the list view to the cached wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WishFilter {
    All,
    /// The public feed: approved, in review, planned and in progress.
    #[default]
    Approved,
    State(WishState),
}

impl WishFilter {
    /// States whose partitions make up this filter, in partition order.
    ///
    /// Single-state filters group neighbours the way the list displays
    /// them: approved with in review, completed with implemented.
    /// Rejected wishes are never listed.
    pub fn states(self) -> &'static [WishState] {
        use WishState::*;
        match self {
            WishFilter::All => &WishState::ALL,
            WishFilter::Approved => &[Approved, InReview, Planned, InProgress],
            WishFilter::State(Pending) => &[Pending],
            WishFilter::State(Approved | InReview) => &[Approved, InReview],
            WishFilter::State(Planned) => &[Planned],
            WishFilter::State(InProgress) => &[InProgress],
            WishFilter::State(Implemented | Completed) => &[Implemented, Completed],
            WishFilter::State(Rejected) => &[],
        }
    }

    pub fn matches(self, state: WishState) -> bool {
        self.states().contains(&state)
    }
}
