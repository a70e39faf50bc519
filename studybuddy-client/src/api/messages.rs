//! Display text for API result codes.

const ERROR_MESSAGES: &[(&str, &str)] = &[
    ("EMAIL_EXISTS", "Questa email è già registrata"),
    ("REGISTRATION_SUCCESS", "Registrazione completata!"),
    ("LOGIN_SUCCESS", "Login riuscito!"),
    ("INVALID_CREDENTIALS", "Email o password errati"),
    ("TOKEN_VALID", "Token valido"),
    ("USER_NOT_FOUND", "Utente non trovato"),
    ("UNAUTHORIZED", "Non autorizzato"),
    ("AI_SERVICE_UNAVAILABLE", "Servizio AI non disponibile. Riprova."),
    ("AI_TIMEOUT", "Timeout del servizio AI. Riprova."),
    ("DECK_NOT_FOUND", "Deck non trovato"),
    ("FLASHCARD_NOT_FOUND", "Flashcard non trovata"),
    ("DECK_ACCESS_DENIED", "Accesso al deck negato"),
];

/// Translate an API result code. Unknown codes are returned unchanged.
pub fn error_message(code: &str) -> &str {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(code)
}
