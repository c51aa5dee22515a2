//! Built-in phrase tables.
//!
//! English is complete and acts as the platform default; other tables may
//! omit keys, which then resolve through English.

use super::key::LocalizationKey as K;

/// Languages with a built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
    Es,
}

impl Locale {
    /// Resolve a BCP 47 tag by its language subtag.
    ///
    /// `de-AT` and `de_DE.UTF-8` both map to German. Unknown languages
    /// yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(&['-', '_', '.'][..])
            .next()?
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::Es => "es",
        }
    }

    pub(super) fn phrase(self, key: K) -> Option<&'static str> {
        match self {
            Locale::En => Some(english(key)),
            Locale::De => german(key),
            Locale::Fr => french(key),
            Locale::Es => spanish(key),
        }
    }
}

pub(super) fn english(key: K) -> &'static str {
    match key {
        K::All => "All",
        K::Requested => "Requested",
        K::Pending => "Pending",
        K::Approved => "Approved",
        K::Implemented => "Implemented",
        K::InReview => "In Review",
        K::Planned => "Planned",
        K::InProgress => "In Progress",
        K::Completed => "Completed",
        K::Rejected => "Rejected",
        K::Wishlist => "Wishlist",
        K::Save => "Save",
        K::Title => "Title",
        K::Description => "Description",
        K::Upvote => "Upvote",
        K::Info => "Info",
        K::YouCanOnlyVoteOnce => "You can only vote once.",
        K::YouCanNotVoteForAnImplementedWish => "You can not vote for a wish that is already implemented.",
        K::YouCanNotVoteForYourOwnWish => "You can not vote for your own wish.",
        K::PoweredBy => "Powered by",
        K::SuccessfullyCreated => "Successfully created.",
        K::Done => "Done",
        K::Detail => "Detail",
        K::FeatureWishlist => "Feature Wishlist",
        K::Confirm => "Confirm",
        K::Cancel => "Cancel",
        K::Ok => "Ok",
        K::TitleOfWish => "Title of your wish",
        K::TitleDescriptionCannotBeEmpty => "Title and description can not be empty.",
        K::Votes => "Votes",
        K::Close => "Close",
        K::CreateWish => "Create Wish",
        K::Optional => "optional",
        K::Required => "required",
        K::EmailRequiredText => "Please enter your email address.",
        K::EmailFormatWrongText => "The email address is not valid.",
        K::Comments => "Comments",
        K::WriteAComment => "Write a comment…",
        K::Admin => "Admin",
        K::User => "User",
        K::NoFeatureRequests => "There are no feature requests yet.",
        K::EmailOptional => "Email (optional)",
        K::EmailRequired => "Email (required)",
        K::DiscardEnteredInformation => "Discard the entered information?",
        K::AddButtonInNavigationBar => "Add",
        K::Refresh => "Refresh",
        K::Refreshing => "Refreshing…",
        K::SomethingWentWrong => "Something went wrong. Please try again.",
    }
}

fn german(key: K) -> Option<&'static str> {
    let phrase = match key {
        K::All => "Alle",
        K::Requested => "Angefragt",
        K::Pending => "Ausstehend",
        K::Approved => "Genehmigt",
        K::Implemented => "Umgesetzt",
        K::InReview => "In Prüfung",
        K::Planned => "Geplant",
        K::InProgress => "In Arbeit",
        K::Completed => "Abgeschlossen",
        K::Rejected => "Abgelehnt",
        K::Wishlist => "Wunschliste",
        K::Save => "Speichern",
        K::Title => "Titel",
        K::Description => "Beschreibung",
        K::Upvote => "Abstimmen",
        K::Info => "Info",
        K::YouCanOnlyVoteOnce => "Du kannst nur einmal abstimmen.",
        K::YouCanNotVoteForAnImplementedWish => "Für umgesetzte Wünsche kann nicht abgestimmt werden.",
        K::YouCanNotVoteForYourOwnWish => "Du kannst nicht für deinen eigenen Wunsch abstimmen.",
        K::PoweredBy => "Bereitgestellt von",
        K::SuccessfullyCreated => "Erfolgreich erstellt.",
        K::Done => "Fertig",
        K::Detail => "Details",
        K::FeatureWishlist => "Feature-Wunschliste",
        K::Confirm => "Bestätigen",
        K::Cancel => "Abbrechen",
        K::Ok => "Ok",
        K::TitleOfWish => "Titel deines Wunsches",
        K::TitleDescriptionCannotBeEmpty => "Titel und Beschreibung dürfen nicht leer sein.",
        K::Votes => "Stimmen",
        K::Close => "Schließen",
        K::CreateWish => "Wunsch erstellen",
        K::Optional => "optional",
        K::Required => "erforderlich",
        K::EmailRequiredText => "Bitte gib deine E-Mail-Adresse ein.",
        K::EmailFormatWrongText => "Die E-Mail-Adresse ist ungültig.",
        K::Comments => "Kommentare",
        K::WriteAComment => "Kommentar schreiben…",
        K::Admin => "Admin",
        K::User => "Nutzer",
        K::NoFeatureRequests => "Es gibt noch keine Wünsche.",
        K::EmailOptional => "E-Mail (optional)",
        K::EmailRequired => "E-Mail (erforderlich)",
        K::DiscardEnteredInformation => "Eingaben verwerfen?",
        K::AddButtonInNavigationBar => "Hinzufügen",
        K::Refresh => "Aktualisieren",
        K::Refreshing => "Aktualisiere…",
        K::SomethingWentWrong => return None,
    };
    Some(phrase)
}

fn french(key: K) -> Option<&'static str> {
    let phrase = match key {
        K::All => "Tous",
        K::Requested => "Demandé",
        K::Pending => "En attente",
        K::Approved => "Approuvé",
        K::Implemented => "Implémenté",
        K::InReview => "En revue",
        K::Planned => "Planifié",
        K::InProgress => "En cours",
        K::Completed => "Terminé",
        K::Rejected => "Refusé",
        K::Wishlist => "Liste de souhaits",
        K::Save => "Enregistrer",
        K::Title => "Titre",
        K::Description => "Description",
        K::Upvote => "Voter",
        K::Info => "Info",
        K::YouCanOnlyVoteOnce => "Vous ne pouvez voter qu'une seule fois.",
        K::YouCanNotVoteForAnImplementedWish => "Vous ne pouvez pas voter pour un souhait déjà implémenté.",
        K::YouCanNotVoteForYourOwnWish => "Vous ne pouvez pas voter pour votre propre souhait.",
        K::PoweredBy => "Propulsé par",
        K::SuccessfullyCreated => "Créé avec succès.",
        K::Done => "Terminé",
        K::Detail => "Détail",
        K::FeatureWishlist => "Souhaits de fonctionnalités",
        K::Confirm => "Confirmer",
        K::Cancel => "Annuler",
        K::Ok => "Ok",
        K::TitleOfWish => "Titre de votre souhait",
        K::TitleDescriptionCannotBeEmpty => "Le titre et la description ne peuvent pas être vides.",
        K::Votes => "Votes",
        K::Close => "Fermer",
        K::CreateWish => "Créer un souhait",
        K::Optional => "facultatif",
        K::Required => "obligatoire",
        K::EmailRequiredText => "Veuillez saisir votre adresse e-mail.",
        K::EmailFormatWrongText => "L'adresse e-mail n'est pas valide.",
        K::Comments => "Commentaires",
        K::WriteAComment => "Écrire un commentaire…",
        K::Admin => "Admin",
        K::User => "Utilisateur",
        K::NoFeatureRequests => "Il n'y a pas encore de demandes.",
        K::EmailOptional => "E-mail (facultatif)",
        K::EmailRequired => "E-mail (obligatoire)",
        K::DiscardEnteredInformation => "Abandonner les informations saisies ?",
        K::AddButtonInNavigationBar => "Ajouter",
        K::Refresh => "Actualiser",
        K::Refreshing => "Actualisation…",
        K::SomethingWentWrong => return None,
    };
    Some(phrase)
}

fn spanish(key: K) -> Option<&'static str> {
    let phrase = match key {
        K::All => "Todos",
        K::Requested => "Solicitado",
        K::Pending => "Pendiente",
        K::Approved => "Aprobado",
        K::Implemented => "Implementado",
        K::InReview => "En revisión",
        K::Planned => "Planificado",
        K::InProgress => "En progreso",
        K::Completed => "Completado",
        K::Rejected => "Rechazado",
        K::Wishlist => "Lista de deseos",
        K::Save => "Guardar",
        K::Title => "Título",
        K::Description => "Descripción",
        K::Upvote => "Votar",
        K::Votes => "Votos",
        K::Close => "Cerrar",
        K::CreateWish => "Crear deseo",
        K::Cancel => "Cancelar",
        K::Confirm => "Confirmar",
        K::Ok => "Ok",
        K::Done => "Listo",
        K::Comments => "Comentarios",
        K::WriteAComment => "Escribe un comentario…",
        K::Refresh => "Actualizar",
        K::Refreshing => "Actualizando…",
        K::NoFeatureRequests => "Todavía no hay solicitudes.",
        K::YouCanOnlyVoteOnce => "Solo puedes votar una vez.",
        K::TitleDescriptionCannotBeEmpty => "El título y la descripción no pueden estar vacíos.",
        _ => return None,
    };
    Some(phrase)
}
