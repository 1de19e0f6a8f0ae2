use crate::{
    route::Route,
    services::auth::{Authenticated, Role, User},
    storage::{Stores, ACCESS_TOKEN_KEY, CURRENT_USER_KEY},
};

/// Credentials of the signed in user, owned by the application shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Reloads the credentials kept in the durable storage by a previous run.
    pub fn restore(stores: &Stores) -> Self {
        let token = match stores.durable.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::error!("Failed to read access token: {}", e);
                None
            }
        };
        let user = match stores.durable.get(CURRENT_USER_KEY) {
            Ok(Some(user)) => serde_json::from_str::<User>(&user)
                .map_err(|e| tracing::error!("Stored user is invalid: {}", e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to read current user: {}", e);
                None
            }
        };
        if token.is_some() {
            tracing::info!("Session restored");
        }
        Self { token, user }
    }

    pub fn establish(&mut self, auth: Authenticated) {
        self.token = Some(auth.token);
        self.user = auth.user;
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_role(&mut self, role: Role) {
        if let Some(user) = &mut self.user {
            user.role = role;
        }
    }

    /// Screen to land on when authenticated, `/signin` otherwise.
    pub fn home(&self) -> Route {
        if !self.is_authenticated() {
            return Route::SignIn;
        }
        Route::dashboard(self.user.as_ref().map(|u| u.role).unwrap_or_default())
    }
}
