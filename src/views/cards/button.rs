// Registration button resolution. Pure: no egui types, no side effects.

/// The four inputs that select the registration button configuration,
/// computed by the caller for each card on every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterContext {
    pub registered: bool,
    pub has_meeting_link: bool,
    pub has_external_link: bool,
    /// The event gates registration and the session is not authenticated.
    pub auth_required: bool,
}

/// What the app should do when the button is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAction {
    JoinMeeting,
    /// Disabled configuration; activation never reaches the app.
    AlreadyRegistered,
    OpenExternal,
    Connect,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Success,
    Neutral,
    Primary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub label: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
    pub style: ButtonStyle,
    pub action: RegisterAction,
}

type Rule = (fn(&RegisterContext) -> bool, ButtonConfig);

// Ordered dispatch table; the first matching rule wins. Rules overlap by
// construction, so the order here IS the precedence.
const RULES: [Rule; 5] = [
    (
        |c| c.registered && c.has_meeting_link,
        ButtonConfig {
            label: "Join Meeting",
            icon: "▶",
            enabled: true,
            style: ButtonStyle::Success,
            action: RegisterAction::JoinMeeting,
        },
    ),
    (
        |c| c.registered,
        ButtonConfig {
            label: "Registered",
            icon: "✔",
            enabled: false,
            style: ButtonStyle::Neutral,
            action: RegisterAction::AlreadyRegistered,
        },
    ),
    (
        |c| c.has_external_link,
        ButtonConfig {
            label: "Register on Lu.ma",
            icon: "↗",
            enabled: true,
            style: ButtonStyle::Primary,
            action: RegisterAction::OpenExternal,
        },
    ),
    (
        |c| c.auth_required,
        ButtonConfig {
            label: "Connect to Register",
            icon: "👤",
            enabled: true,
            style: ButtonStyle::Primary,
            action: RegisterAction::Connect,
        },
    ),
    (
        |_| true,
        ButtonConfig {
            label: "Register Now",
            icon: "🗓",
            enabled: true,
            style: ButtonStyle::Primary,
            action: RegisterAction::Register,
        },
    ),
];

/// Picks the configuration for the given inputs. Total: the last rule is a
/// catch-all, so exactly one configuration is returned for every input.
pub fn resolve(cx: &RegisterContext) -> ButtonConfig {
    for (applies, cfg) in RULES.iter() {
        if applies(cx) {
            return *cfg;
        }
    }
    RULES[RULES.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cx(registered: bool, meeting: bool, external: bool, auth: bool) -> RegisterContext {
        RegisterContext {
            registered,
            has_meeting_link: meeting,
            has_external_link: external,
            auth_required: auth,
        }
    }

    #[test]
    fn registered_with_meeting_link_joins() {
        let cfg = resolve(&cx(true, true, false, false));
        assert_eq!(cfg.label, "Join Meeting");
        assert_eq!(cfg.action, RegisterAction::JoinMeeting);
        assert_eq!(cfg.style, ButtonStyle::Success);
        assert!(cfg.enabled);
    }

    #[test]
    fn registered_without_meeting_link_is_disabled() {
        let cfg = resolve(&cx(true, false, false, false));
        assert_eq!(cfg.label, "Registered");
        assert_eq!(cfg.action, RegisterAction::AlreadyRegistered);
        assert!(!cfg.enabled);
    }

    #[test]
    fn registration_outranks_external_link() {
        // Registered with an external link still shows the disabled state.
        let cfg = resolve(&cx(true, false, true, true));
        assert_eq!(cfg.label, "Registered");
        assert!(!cfg.enabled);
    }

    #[test]
    fn external_link_outranks_auth_gate() {
        let cfg = resolve(&cx(false, false, true, true));
        assert_eq!(cfg.label, "Register on Lu.ma");
        assert_eq!(cfg.action, RegisterAction::OpenExternal);
    }

    #[test]
    fn auth_gate_when_nothing_else_applies() {
        let cfg = resolve(&cx(false, false, false, true));
        assert_eq!(cfg.label, "Connect to Register");
        assert_eq!(cfg.action, RegisterAction::Connect);
    }

    #[test]
    fn default_is_register_now() {
        let cfg = resolve(&cx(false, false, false, false));
        assert_eq!(cfg.label, "Register Now");
        assert_eq!(cfg.action, RegisterAction::Register);
    }

    #[test]
    fn every_combination_resolves_in_priority_order() {
        for bits in 0..16u8 {
            let c = cx(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let cfg = resolve(&c);
            let expected = if c.registered && c.has_meeting_link {
                "Join Meeting"
            } else if c.registered {
                "Registered"
            } else if c.has_external_link {
                "Register on Lu.ma"
            } else if c.auth_required {
                "Connect to Register"
            } else {
                "Register Now"
            };
            assert_eq!(cfg.label, expected, "inputs: {c:?}");
            // Only the bare "Registered" state disables the button.
            assert_eq!(cfg.enabled, !(c.registered && !c.has_meeting_link));
        }
    }
}
