//! Account use cases: login and the authenticated self view.

use serde::Serialize;
use ucp_domain::{map_affiliations, Affiliation, CharacterProfile, PlayerProfile};

use crate::app::App;
use crate::infrastructure::auth::verify_legacy_password;
use crate::infrastructure::ports::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Session error: {0}")]
    Session(String),
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub profile: PlayerProfile,
    pub token: String,
}

/// Verify credentials against the legacy store and mint a session token.
///
/// An unknown name and a wrong password are indistinguishable to the
/// caller on purpose.
pub async fn login(app: &App, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
    let record = app
        .records
        .player_by_name(username)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    // BetterPassword holds the current hash; Salt may be absent entirely
    // on older schema revisions.
    if !verify_legacy_password(password, &record.text("Salt"), &record.text("BetterPassword")) {
        return Err(AccountError::InvalidCredentials);
    }

    let profile = PlayerProfile::from_record(&record);
    let token = app
        .auth
        .issue(profile.id, &profile.username, profile.admin_level)
        .map_err(|e| AccountError::Session(e.to_string()))?;
    Ok(LoginOutcome { profile, token })
}

/// The full self view: account profile plus the derived character state
/// and affiliations, all from one `players` row.
#[derive(Debug, Serialize)]
pub struct AccountView {
    #[serde(flatten)]
    pub profile: PlayerProfile,
    pub character: CharacterProfile,
    pub affiliations: Vec<Affiliation>,
}

pub async fn current_user(app: &App, id: i64) -> Result<AccountView, AccountError> {
    let record = app
        .records
        .player_by_id(id)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;
    Ok(AccountView {
        profile: PlayerProfile::from_record(&record),
        character: CharacterProfile::from_record(&record, &app.catalogs),
        affiliations: map_affiliations(&record, &app.catalogs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{app_with, player, StubSource};

    #[tokio::test]
    async fn test_login_rejects_unknown_user() {
        let app = app_with(StubSource::default());
        let err = login(&app, "Nobody", "pw").await.expect_err("no such user");
        assert!(matches!(err, AccountError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let mut source = StubSource::default();
        source.players.push(player(1, "Carl_Johnson", "hunter2"));
        let app = app_with(source);
        let err = login(&app, "Carl_Johnson", "wrong")
            .await
            .expect_err("bad password");
        assert!(matches!(err, AccountError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_session() {
        let mut source = StubSource::default();
        source.players.push(player(7, "Carl_Johnson", "hunter2"));
        let app = app_with(source);
        let outcome = login(&app, "Carl_Johnson", "hunter2")
            .await
            .expect("valid credentials");
        assert_eq!(outcome.profile.id, 7);
        let claims = app.auth.verify(&outcome.token).expect("token verifies");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Carl_Johnson");
    }

    #[tokio::test]
    async fn test_current_user_includes_derived_sections() {
        let mut source = StubSource::default();
        let mut record = player(7, "Carl_Johnson", "hunter2");
        record.insert("Member", serde_json::json!(1));
        record.insert("Rank", serde_json::json!(2));
        source.players.push(record);
        let app = app_with(source);
        let view = current_user(&app, 7).await.expect("known id");
        assert_eq!(view.profile.username, "Carl_Johnson");
        assert!(view.character.badge.is_some());
        assert_eq!(view.affiliations.len(), 1);
    }

    #[tokio::test]
    async fn test_current_user_unknown_id() {
        let app = app_with(StubSource::default());
        let err = current_user(&app, 99).await.expect_err("unknown id");
        assert!(matches!(err, AccountError::InvalidCredentials));
    }
}
