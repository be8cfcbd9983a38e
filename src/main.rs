use anyhow::Result;
use chrono::{Duration, Utc};
use uuid::Uuid;

use authstore::config::Config;
use authstore::repositories::{NewSession, NewUser, SessionStore, UserStore};
use authstore::{logger, SessionRepository, Store, UserRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let store = Store::connect(&config.database).await?;
    let users = UserRepository::new(store.connection().clone());
    let sessions = SessionRepository::new(store.connection().clone());

    // Create a new user
    let user = users
        .create(NewUser {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await?;
    println!("created user #{}: {}", user.id, user.name);

    // Read the user back by name
    let mut user = users.read("John Doe").await?;
    println!("read user: {} <{}>", user.name, user.email);

    // Open a session for the user
    let session = sessions
        .create(NewSession {
            user_id: user.id,
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(24),
        })
        .await?;
    println!("opened session #{} (expires {})", session.id, session.expires_at);

    // Rename the user
    user.name = "Jane Doe".to_string();
    let user = users.update(user).await?;
    println!("renamed user to {}", user.name);

    // Close the session and tombstone the user
    sessions.delete(&session.token).await?;
    users.delete("Jane Doe").await?;
    println!("cleaned up");

    Ok(())
}
