// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event type taxonomy
//!
//! Types are declared in base/error pairs, so every base type has an
//! `_ERROR` counterpart and [`EventType::error_variant`] is total.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Suffix shared by every error variant name
pub const ERROR_SUFFIX: &str = "_ERROR";

/// A type name that is not part of the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

macro_rules! event_types {
    ($( $base:ident / $error:ident => $name:literal, $save:literal, $save_error:literal; )*) => {
        /// Kinds of occurrence an event can describe
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventType {
            $( $base, $error, )*
        }

        impl EventType {
            /// Every type, base before error, in declaration order
            pub const ALL: &'static [EventType] = &[ $( EventType::$base, EventType::$error, )* ];

            /// Upper snake case name, e.g. `LOGIN_ERROR`
            pub fn name(self) -> &'static str {
                match self {
                    $(
                        EventType::$base => $name,
                        EventType::$error => concat!($name, "_ERROR"),
                    )*
                }
            }

            /// Whether the store keeps this type when a tenant has no explicit list
            pub fn save_by_default(self) -> bool {
                match self {
                    $(
                        EventType::$base => $save,
                        EventType::$error => $save_error,
                    )*
                }
            }

            /// The `_ERROR` counterpart; error types map to themselves
            pub fn error_variant(self) -> EventType {
                match self {
                    $( EventType::$base | EventType::$error => EventType::$error, )*
                }
            }

            /// The base counterpart; base types map to themselves
            pub fn base_variant(self) -> EventType {
                match self {
                    $( EventType::$base | EventType::$error => EventType::$base, )*
                }
            }
        }
    };
}

event_types! {
    Login / LoginError => "LOGIN", true, true;
    Register / RegisterError => "REGISTER", true, true;
    Logout / LogoutError => "LOGOUT", true, true;
    CodeToToken / CodeToTokenError => "CODE_TO_TOKEN", true, true;
    ClientLogin / ClientLoginError => "CLIENT_LOGIN", true, true;
    RefreshToken / RefreshTokenError => "REFRESH_TOKEN", false, false;
    IntrospectToken / IntrospectTokenError => "INTROSPECT_TOKEN", false, false;
    FederatedIdentityLink / FederatedIdentityLinkError => "FEDERATED_IDENTITY_LINK", true, true;
    RemoveFederatedIdentity / RemoveFederatedIdentityError => "REMOVE_FEDERATED_IDENTITY", true, true;
    UpdateEmail / UpdateEmailError => "UPDATE_EMAIL", true, true;
    UpdateProfile / UpdateProfileError => "UPDATE_PROFILE", true, true;
    UpdatePassword / UpdatePasswordError => "UPDATE_PASSWORD", true, true;
    UpdateTotp / UpdateTotpError => "UPDATE_TOTP", true, true;
    RemoveTotp / RemoveTotpError => "REMOVE_TOTP", true, true;
    VerifyEmail / VerifyEmailError => "VERIFY_EMAIL", true, true;
    VerifyProfile / VerifyProfileError => "VERIFY_PROFILE", true, true;
    GrantConsent / GrantConsentError => "GRANT_CONSENT", true, true;
    UpdateConsent / UpdateConsentError => "UPDATE_CONSENT", true, true;
    RevokeGrant / RevokeGrantError => "REVOKE_GRANT", true, true;
    SendVerifyEmail / SendVerifyEmailError => "SEND_VERIFY_EMAIL", true, true;
    SendResetPassword / SendResetPasswordError => "SEND_RESET_PASSWORD", true, true;
    SendIdentityProviderLink / SendIdentityProviderLinkError => "SEND_IDENTITY_PROVIDER_LINK", true, true;
    ResetPassword / ResetPasswordError => "RESET_PASSWORD", true, true;
    RestartAuthentication / RestartAuthenticationError => "RESTART_AUTHENTICATION", true, true;
    InvalidSignature / InvalidSignatureError => "INVALID_SIGNATURE", false, false;
    RegisterNode / RegisterNodeError => "REGISTER_NODE", false, false;
    UnregisterNode / UnregisterNodeError => "UNREGISTER_NODE", false, false;
    UserInfoRequest / UserInfoRequestError => "USER_INFO_REQUEST", false, false;
    IdentityProviderLinkAccount / IdentityProviderLinkAccountError => "IDENTITY_PROVIDER_LINK_ACCOUNT", true, true;
    IdentityProviderLogin / IdentityProviderLoginError => "IDENTITY_PROVIDER_LOGIN", false, false;
    IdentityProviderFirstLogin / IdentityProviderFirstLoginError => "IDENTITY_PROVIDER_FIRST_LOGIN", true, true;
    IdentityProviderPostLogin / IdentityProviderPostLoginError => "IDENTITY_PROVIDER_POST_LOGIN", true, true;
    IdentityProviderResponse / IdentityProviderResponseError => "IDENTITY_PROVIDER_RESPONSE", false, false;
    IdentityProviderRetrieveToken / IdentityProviderRetrieveTokenError => "IDENTITY_PROVIDER_RETRIEVE_TOKEN", false, false;
    Impersonate / ImpersonateError => "IMPERSONATE", true, true;
    CustomRequiredAction / CustomRequiredActionError => "CUSTOM_REQUIRED_ACTION", true, true;
    ExecuteActions / ExecuteActionsError => "EXECUTE_ACTIONS", true, true;
    ExecuteActionToken / ExecuteActionTokenError => "EXECUTE_ACTION_TOKEN", true, true;
    ClientInfo / ClientInfoError => "CLIENT_INFO", false, false;
    ClientRegister / ClientRegisterError => "CLIENT_REGISTER", true, true;
    ClientUpdate / ClientUpdateError => "CLIENT_UPDATE", true, true;
    ClientDelete / ClientDeleteError => "CLIENT_DELETE", true, true;
    ClientInitiatedAccountLinking / ClientInitiatedAccountLinkingError => "CLIENT_INITIATED_ACCOUNT_LINKING", true, true;
    TokenExchange / TokenExchangeError => "TOKEN_EXCHANGE", true, true;
    PermissionToken / PermissionTokenError => "PERMISSION_TOKEN", true, false;
    DeleteAccount / DeleteAccountError => "DELETE_ACCOUNT", true, true;
}

impl EventType {
    /// Look a type up by its exact name
    pub fn from_name(name: &str) -> Option<EventType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// True for `_ERROR` variants
    pub fn is_error(self) -> bool {
        self.name().ends_with(ERROR_SUFFIX)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
