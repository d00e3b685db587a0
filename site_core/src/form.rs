//! Contact-form state machine, mirrored by the shipped page's script

/// Shown when the relay reports a failure without its own message.
pub const SEND_ERROR: &str = "Error al enviar mensaje";
/// Shown when the relay could not be reached at all.
pub const CONNECTION_ERROR: &str = "Error de conexion. Intente nuevamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Relay responses and user actions the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The visitor pressed send.
    Submit,
    /// `{success: true}` came back.
    Delivered,
    /// `{fallback: true}` came back with a deep link.
    FellBack { link: String },
    /// Any other relay response, optionally carrying its error message.
    Failed { error: Option<String> },
    /// The request itself never completed.
    ConnectionLost,
    /// "Send another message" on the success screen.
    Reset,
}

/// Side effect the page performs alongside a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// POST the three fields to the relay; inputs stay disabled until an
    /// answer arrives.
    SendRequest,
    /// Clear name, contact and message.
    ClearFields,
    /// Open the deep link in a new context; fields are retained.
    OpenLink(String),
    /// Surface the message to the visitor; fields are retained.
    ShowError(String),
}

impl FormStatus {
    /// Applies one event. Unmatched (state, event) pairs are no-ops, which
    /// is what keeps a second submit during `Loading` from double-sending.
    pub fn apply(self, event: FormEvent) -> (FormStatus, Option<FormEffect>) {
        use FormStatus::*;

        match (self, event) {
            (Idle | Error, FormEvent::Submit) => (Loading, Some(FormEffect::SendRequest)),
            (Loading, FormEvent::Delivered) => (Success, Some(FormEffect::ClearFields)),
            (Loading, FormEvent::FellBack { link }) => (Idle, Some(FormEffect::OpenLink(link))),
            (Loading, FormEvent::Failed { error }) => (
                Error,
                Some(FormEffect::ShowError(
                    error.unwrap_or_else(|| SEND_ERROR.to_string()),
                )),
            ),
            (Loading, FormEvent::ConnectionLost) => (
                Error,
                Some(FormEffect::ShowError(CONNECTION_ERROR.to_string())),
            ),
            (Success, FormEvent::Reset) => (Idle, None),
            (state, _) => (state, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
    }

    #[test]
    fn test_submit_starts_loading() {
        let (next, effect) = FormStatus::Idle.apply(FormEvent::Submit);
        assert_eq!(next, FormStatus::Loading);
        assert_eq!(effect, Some(FormEffect::SendRequest));
    }

    #[test]
    fn test_resubmission_from_error_starts_loading() {
        let (next, effect) = FormStatus::Error.apply(FormEvent::Submit);
        assert_eq!(next, FormStatus::Loading);
        assert_eq!(effect, Some(FormEffect::SendRequest));
    }

    #[test]
    fn test_delivery_clears_the_fields() {
        let (next, effect) = FormStatus::Loading.apply(FormEvent::Delivered);
        assert_eq!(next, FormStatus::Success);
        assert_eq!(effect, Some(FormEffect::ClearFields));
    }

    #[test]
    fn test_fallback_opens_the_link_and_returns_to_idle() {
        let link = "https://wa.me/5493874857539?text=Hola!".to_string();
        let (next, effect) = FormStatus::Loading.apply(FormEvent::FellBack { link: link.clone() });
        assert_eq!(next, FormStatus::Idle);
        assert_eq!(effect, Some(FormEffect::OpenLink(link)));
    }

    #[test]
    fn test_failure_shows_the_server_message() {
        let (next, effect) = FormStatus::Loading.apply(FormEvent::Failed {
            error: Some("Error al enviar mensaje".to_string()),
        });
        assert_eq!(next, FormStatus::Error);
        assert_eq!(
            effect,
            Some(FormEffect::ShowError("Error al enviar mensaje".to_string()))
        );
    }

    #[test]
    fn test_failure_without_detail_shows_the_default_message() {
        let (next, effect) = FormStatus::Loading.apply(FormEvent::Failed { error: None });
        assert_eq!(next, FormStatus::Error);
        assert_eq!(effect, Some(FormEffect::ShowError(SEND_ERROR.to_string())));
    }

    #[test]
    fn test_connection_loss_shows_the_connectivity_message() {
        let (next, effect) = FormStatus::Loading.apply(FormEvent::ConnectionLost);
        assert_eq!(next, FormStatus::Error);
        assert_eq!(
            effect,
            Some(FormEffect::ShowError(CONNECTION_ERROR.to_string()))
        );
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let (next, effect) = FormStatus::Success.apply(FormEvent::Reset);
        assert_eq!(next, FormStatus::Idle);
        assert_eq!(effect, None);
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let (next, effect) = FormStatus::Loading.apply(FormEvent::Submit);
        assert_eq!(next, FormStatus::Loading);
        assert_eq!(effect, None);
    }

    #[test]
    fn test_stray_events_are_no_ops() {
        let (next, effect) = FormStatus::Idle.apply(FormEvent::Delivered);
        assert_eq!(next, FormStatus::Idle);
        assert_eq!(effect, None);

        let (next, effect) = FormStatus::Success.apply(FormEvent::ConnectionLost);
        assert_eq!(next, FormStatus::Success);
        assert_eq!(effect, None);

        let (next, effect) = FormStatus::Error.apply(FormEvent::Reset);
        assert_eq!(next, FormStatus::Error);
        assert_eq!(effect, None);
    }
}
