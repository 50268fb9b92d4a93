use crate::{
    auth::Authenticator,
    dto::auth::SignInRequest,
    error::{AppError, AppResult},
    models::User,
    state::Storefront,
    store::KeyValueStore,
};

/// Local convenience gate, not real authentication: admin rights come from
/// the injected [`Authenticator`], nothing is verified externally.
pub fn sign_in<S: KeyValueStore>(
    app: &mut Storefront<S>,
    auth: &impl Authenticator,
    payload: SignInRequest,
) -> AppResult<User> {
    let SignInRequest { email, password } = payload;
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let user = User {
        is_admin: auth.grant_admin(&email, &password),
        email,
    };
    app.user = Some(user.clone());
    app.persist_user();
    tracing::debug!(email = %user.email, is_admin = user.is_admin, "user signed in");
    Ok(user)
}

/// Clears the session. Closing any admin-only view is the caller's concern.
pub fn sign_out<S: KeyValueStore>(app: &mut Storefront<S>) {
    app.user = None;
    app.persist_user();
    tracing::debug!("user signed out");
}
