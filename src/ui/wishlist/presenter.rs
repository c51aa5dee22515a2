//! Render model for the wish list screen.
//!
//! Turns view state, configuration and localization into plain data a
//! host renderer can draw without further decisions.

use uuid::Uuid;

use crate::config::{AddButtonLocation, Color, ColorScheme, Config, ThemeRole, Visibility};
use crate::i18n::{Localization, LocalizationKey};
use crate::model::{Wish, WishFilter, WishState};
use crate::store::FetchStatus;
use crate::ui::wishlist::state::WishlistState;

/// Filters offered by the segmented control, in display order.
pub const SEGMENTS: [WishFilter; 2] = [WishFilter::Approved, WishFilter::State(WishState::Completed)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub filter: WishFilter,
    /// e.g. "Approved (3)"
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub vote_count: u32,
    pub state: WishState,
    pub state_label: String,
    pub has_voted: bool,
    /// The upvote button is enabled.
    pub can_vote: bool,
    /// `None` when the comment section is hidden.
    pub comment_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddButton {
    Hidden,
    Floating { label: String },
    NavigationBar { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistScreen {
    pub title: String,
    /// Empty when the segmented control is hidden.
    pub segments: Vec<Segment>,
    pub rows: Vec<WishRow>,
    /// Shown instead of rows when the selection is empty.
    pub empty_text: Option<String>,
    pub refresh_label: String,
    pub add_button: AddButton,
    pub error_text: Option<String>,
    pub background: Color,
    pub accent: Color,
}

pub fn filter_label(l10n: &Localization, filter: WishFilter) -> &str {
    match filter {
        WishFilter::All => l10n.get(LocalizationKey::All),
        WishFilter::Approved => l10n.get(LocalizationKey::Approved),
        WishFilter::State(state) => l10n.state_label(state),
    }
}

fn row(wish: &Wish, l10n: &Localization, user: Uuid, comments: Visibility) -> WishRow {
    WishRow {
        id: wish.id,
        title: wish.title.clone(),
        description: wish.description.clone(),
        vote_count: wish.vote_count,
        state: wish.state,
        state_label: l10n.state_label(wish.state).to_string(),
        has_voted: wish.has_voted(user),
        can_vote: wish.vote_rejection(user).is_none(),
        comment_count: match comments {
            Visibility::Show => Some(wish.comments().len()),
            Visibility::Hide => None,
        },
    }
}

pub fn present(
    state: &WishlistState,
    config: &Config,
    l10n: &Localization,
    user: Uuid,
    scheme: ColorScheme,
) -> WishlistScreen {
    let snapshot = &state.snapshot;

    let segments = match config.buttons.segmented_control {
        Visibility::Hide => Vec::new(),
        Visibility::Show => SEGMENTS
            .iter()
            .map(|filter| {
                let count = snapshot.count(*filter);
                Segment {
                    filter: *filter,
                    label: format!("{} ({})", filter_label(l10n, *filter), count),
                    count,
                    selected: *filter == state.selected,
                }
            })
            .collect(),
    };

    let rows: Vec<WishRow> = snapshot
        .filtered(state.selected)
        .into_iter()
        .map(|wish| row(wish, l10n, user, config.comment_section))
        .collect();

    let empty_text = (rows.is_empty() && !snapshot.is_fetching())
        .then(|| l10n.get(LocalizationKey::NoFeatureRequests).to_string());

    let refresh_label = if state.is_refreshing {
        l10n.get(LocalizationKey::Refreshing)
    } else {
        l10n.get(LocalizationKey::Refresh)
    }
    .to_string();

    let add_button = match (config.buttons.add_button.display, config.buttons.add_button.location) {
        (Visibility::Hide, _) => AddButton::Hidden,
        (Visibility::Show, AddButtonLocation::Floating) => AddButton::Floating {
            label: l10n.get(LocalizationKey::CreateWish).to_string(),
        },
        (Visibility::Show, AddButtonLocation::NavigationBar) => AddButton::NavigationBar {
            label: l10n.get(LocalizationKey::AddButtonInNavigationBar).to_string(),
        },
    };

    let error_text = matches!(snapshot.status, FetchStatus::Error(_))
        .then(|| l10n.get(LocalizationKey::SomethingWentWrong).to_string());

    WishlistScreen {
        title: l10n.get(LocalizationKey::FeatureWishlist).to_string(),
        segments,
        rows,
        empty_text,
        refresh_label,
        add_button,
        error_text,
        background: config.theme.resolve(ThemeRole::Tertiary, scheme),
        accent: config.theme.resolve(ThemeRole::Primary, scheme),
    }
}
