use chrono::{Days, Utc};
use fake::Fake;
use fake::faker::address::raw::StreetName;
use fake::faker::internet::raw::{FreeEmailProvider, Password, Username};
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;

use crate::domain::repository::{Repository, UnitOfWork};
use crate::domain::types::{Note, Role, User, UserDetails};
use crate::error::NotesServiceError;
use crate::usecase::user::UserService;

/// Seeding only runs while the store holds at most this many users.
pub const SEED_THRESHOLD: u64 = 5;
pub const SEED_USERS: usize = 15;
pub const SEED_NOTES_PER_USER: usize = 20;

/// Fills an almost empty store with random users, details and notes.
pub struct SeedDemoDataUseCase<'a, R, U> {
    pub users: &'a UserService<R, U>,
}

impl<R, U> SeedDemoDataUseCase<'_, R, U>
where
    R: Repository<User>,
    U: UnitOfWork,
{
    /// Returns how many users were created. A user whose save fails is
    /// logged and skipped.
    pub async fn execute(&self) -> Result<usize, NotesServiceError> {
        let existing = self.users.count().await?;
        if existing > SEED_THRESHOLD {
            tracing::info!(existing, "store already populated, skipping demo data");
            return Ok(0);
        }

        // Suffix shared by this run keeps usernames, emails and titles unique
        // against rows left by earlier runs.
        let run: u32 = (1000u32..10000).fake();
        let mut created = 0;
        for index in 0..SEED_USERS {
            let tag = format!("{run}{index:02}");
            let result = self
                .users
                .save_with_details(
                    demo_user(&tag),
                    demo_details(run, index),
                    demo_notes(&tag),
                )
                .await;
            match result {
                Ok(_) => created += 1,
                Err(e) => tracing::warn!(error = ?e, index, "failed to seed demo user"),
            }
        }

        tracing::info!(created, "generated demo users");
        Ok(created)
    }
}

fn demo_user(tag: &str) -> User {
    let base: String = Username(EN).fake();
    let username = format!("{}{tag}", truncate(&base, 30 - tag.len()));
    let provider: String = FreeEmailProvider(EN).fake();
    User {
        id: None,
        email: format!("{username}@{}", truncate(&provider, 50 - username.len() - 1)),
        username,
        password: Password(EN, 8..20).fake(),
        role: Role::PublicUser,
        first_name: padded_name(FirstName(EN).fake()),
        last_name: padded_name(LastName(EN).fake()),
    }
}

fn demo_details(run: u32, index: usize) -> UserDetails {
    let age_days: u64 = (18 * 365u64..70 * 365).fake();
    let street: String = StreetName(EN).fake();
    let number: u16 = (1u16..999).fake();
    UserDetails {
        id: None,
        phone_number: format!("5{run:04}{index:05}"),
        birth_date: Utc::now().date_naive().checked_sub_days(Days::new(age_days)),
        address: Some(truncate(&format!("{number} {street}"), 120).to_owned()),
        user_id: None,
    }
}

fn demo_notes(tag: &str) -> Vec<Note> {
    (0..SEED_NOTES_PER_USER)
        .map(|n| {
            let sentence: String = Sentence(EN, 3..7).fake();
            let suffix = format!(" #{tag}-{n}");
            let paragraph: String = Paragraph(EN, 1..3).fake();
            Note {
                id: None,
                title: format!("{}{suffix}", truncate(&sentence, 120 - suffix.len())),
                content: truncate(&paragraph, 2400).to_owned(),
                creation_date: None,
                user_id: None,
            }
        })
        .collect()
}

/// Names shorter than three characters fail validation.
fn padded_name(name: String) -> String {
    let name = truncate(&name, 120).to_owned();
    if name.chars().count() >= 3 {
        name
    } else {
        format!("{name:x<3}")
    }
}

fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((at, _)) => &value[..at],
        None => value,
    }
}
