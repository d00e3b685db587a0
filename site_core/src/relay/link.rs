//! Deep-link and message-body construction

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::models::ContactRequest;

/// Characters `encodeURIComponent` leaves intact: ASCII alphanumerics plus
/// `- _ . ! ~ * ' ( )`. The shipped page builds the same link in the
/// browser, so the server has to encode identically.
const WA_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Greeting the visitor sends from their own WhatsApp when the relay cannot
/// deliver for them.
pub fn visitor_text(request: &ContactRequest) -> String {
    format!(
        "Hola! Soy {}.\n\nContacto: {}\n\nMensaje: {}",
        request.name, request.contact, request.message
    )
}

/// Notification delivered to the shop's number through the Cloud API.
pub fn business_text(request: &ContactRequest) -> String {
    format!(
        "Nueva consulta desde la web:\n\nNombre: {}\nContacto: {}\nMensaje: {}",
        request.name, request.contact, request.message
    )
}

/// Pre-filled `wa.me` link addressed to `number`.
pub fn direct_link(number: &str, request: &ContactRequest) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        utf8_percent_encode(&visitor_text(request), WA_TEXT)
    )
}
