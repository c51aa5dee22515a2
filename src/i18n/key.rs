use std::str::FromStr;

macro_rules! localization_keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Every phrase the widget displays.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum LocalizationKey {
            $($variant),+
        }

        impl LocalizationKey {
            pub const ALL: &'static [LocalizationKey] = &[$(LocalizationKey::$variant),+];

            /// Key name as used in override tables (camelCase).
            pub fn as_str(self) -> &'static str {
                match self {
                    $(LocalizationKey::$variant => $name),+
                }
            }
        }

        impl FromStr for LocalizationKey {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(LocalizationKey::$variant),)+
                    other => Err(UnknownKey(other.to_string())),
                }
            }
        }
    };
}

localization_keys! {
    All => "all",
    Requested => "requested",
    Pending => "pending",
    Approved => "approved",
    Implemented => "implemented",
    InReview => "inReview",
    Planned => "planned",
    InProgress => "inProgress",
    Completed => "completed",
    Rejected => "rejected",
    Wishlist => "wishlist",
    Save => "save",
    Title => "title",
    Description => "description",
    Upvote => "upvote",
    Info => "info",
    YouCanOnlyVoteOnce => "youCanOnlyVoteOnce",
    YouCanNotVoteForAnImplementedWish => "youCanNotVoteForAnImplementedWish",
    YouCanNotVoteForYourOwnWish => "youCanNotVoteForYourOwnWish",
    PoweredBy => "poweredBy",
    SuccessfullyCreated => "successfullyCreated",
    Done => "done",
    Detail => "detail",
    FeatureWishlist => "featureWishlist",
    Confirm => "confirm",
    Cancel => "cancel",
    Ok => "ok",
    TitleOfWish => "titleOfWish",
    TitleDescriptionCannotBeEmpty => "titleDescriptionCannotBeEmpty",
    Votes => "votes",
    Close => "close",
    CreateWish => "createWish",
    Optional => "optional",
    Required => "required",
    EmailRequiredText => "emailRequiredText",
    EmailFormatWrongText => "emailFormatWrongText",
    Comments => "comments",
    WriteAComment => "writeAComment",
    Admin => "admin",
    User => "user",
    NoFeatureRequests => "noFeatureRequests",
    EmailOptional => "emailOptional",
    EmailRequired => "emailRequired",
    DiscardEnteredInformation => "discardEnteredInformation",
    AddButtonInNavigationBar => "addButtonInNavigationBar",
    Refresh => "refresh",
    Refreshing => "refreshing",
    SomethingWentWrong => "somethingWentWrong",
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl std::fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown localization key '{}'", self.0)
    }
}

impl std::error::Error for UnknownKey {}
