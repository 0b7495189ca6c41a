use std::fmt;

use vcsroot_core::{Param, ParamEnum, ParameterStore, Result};

use crate::enums::AuthMethod;
use crate::keys;

/// Credentials the host system uses for a Git root.
///
/// Only the values meaningful for the chosen method are kept: a user name
/// for every method except anonymous access, a password only for password
/// authentication, and key material only for the matching key method. The
/// passphrase is kept for both key-file and uploaded-key methods, since an
/// uploaded key can be encrypted too.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSettings {
    method: AuthMethod,
    ignore_known_hosts: bool,
    user_name: Option<String>,
    password: Option<String>,
    uploaded_key: Option<String>,
    private_key_path: Option<String>,
    passphrase: Option<String>,
}

impl AuthSettings {
    /// Reads the authentication fields of `params`.
    ///
    /// # Errors
    ///
    /// Fails if `authMethod` holds an unknown constant.
    pub fn from_params(params: &ParameterStore) -> Result<Self> {
        let method = keys::AUTH_METHOD.read_or(params, AuthMethod::Anonymous)?;
        let get = |param: Param<String>| param.read_str(params).map(str::to_string);

        let user_name = if method == AuthMethod::Anonymous {
            None
        } else {
            get(keys::USER_NAME)
        };
        let password = if method == AuthMethod::Password {
            get(keys::PASSWORD)
        } else {
            None
        };
        let uploaded_key = if method == AuthMethod::TeamcitySshKey {
            get(keys::UPLOADED_KEY)
        } else {
            None
        };
        let private_key_path = if method == AuthMethod::PrivateKeyFile {
            get(keys::CUSTOM_KEY_PATH)
        } else {
            None
        };
        let passphrase = match method {
            AuthMethod::PrivateKeyFile | AuthMethod::TeamcitySshKey => get(keys::PASSPHRASE),
            _ => None,
        };

        Ok(Self {
            method,
            ignore_known_hosts: keys::IGNORE_KNOWN_HOSTS.read_flag(params),
            user_name,
            password,
            uploaded_key,
            private_key_path,
            passphrase,
        })
    }

    pub fn method(&self) -> AuthMethod {
        self.method
    }

    pub fn ignore_known_hosts(&self) -> bool {
        self.ignore_known_hosts
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn uploaded_key(&self) -> Option<&str> {
        self.uploaded_key.as_deref()
    }

    pub fn private_key_path(&self) -> Option<&str> {
        self.private_key_path.as_deref()
    }

    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }

    /// Renders the effective settings back into parameters.
    ///
    /// Values dropped for the chosen method are not written.
    pub fn to_params(&self) -> ParameterStore {
        let mut params = ParameterStore::new();
        keys::AUTH_METHOD.write(&mut params, self.method);
        keys::IGNORE_KNOWN_HOSTS.write(&mut params, self.ignore_known_hosts);

        let optional = [
            (keys::USER_NAME, &self.user_name),
            (keys::PASSWORD, &self.password),
            (keys::UPLOADED_KEY, &self.uploaded_key),
            (keys::CUSTOM_KEY_PATH, &self.private_key_path),
            (keys::PASSPHRASE, &self.passphrase),
        ];
        for (param, value) in optional {
            if let Some(value) = value {
                param.write(&mut params, value.clone());
            }
        }
        params
    }
}

fn redact(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "***")
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("method", &self.method.name())
            .field("ignore_known_hosts", &self.ignore_known_hosts)
            .field("user_name", &self.user_name)
            .field("password", &redact(&self.password))
            .field("uploaded_key", &self.uploaded_key)
            .field("private_key_path", &self.private_key_path)
            .field("passphrase", &redact(&self.passphrase))
            .finish()
    }
}
